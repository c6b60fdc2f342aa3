//! Cosmetic page enhancements for the analytics dashboard.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! pages. On start it injects a small stylesheet; once the DOM is ready it
//! wires independent handlers onto whatever markup the page provides. Every
//! behavior is optional: a missing element simply skips that behavior.
//!
//! The decision logic (scores, colors, geometry, theme state, config) lives in
//! plain Rust and is tested natively. Browser glue is compiled only with the
//! `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`alerts`] | Fade and remove flash messages after a delay |
//! | [`file_preview`] | Show the selected upload's file name |
//! | [`strength`] | Password strength score and bar |
//! | [`confirm`] | Confirm-password match indicator |
//! | [`anchors`] | Smooth scrolling for same-page links |
//! | [`theme`] | Light/dark toggle with persisted preference |
//! | [`ripple`] | Click ripple on buttons |
//! | [`styles`] | Injected light-mode and ripple CSS |
//! | [`config`] | Runtime configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared selectors, timings, and colors |
//! | `dom` / `boot` | Browser glue and the wasm entry point (`hydrate` only) |

pub mod alerts;
pub mod anchors;
pub mod config;
pub mod confirm;
pub mod consts;
pub mod error;
pub mod file_preview;
pub mod ripple;
pub mod strength;
pub mod styles;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;

pub use config::FxConfig;
pub use error::FxError;
