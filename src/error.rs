//! Error type shared by configuration and browser glue.
//!
//! Missing page elements are not errors: each behavior skips itself when its
//! markup is absent. `FxError` covers the remaining failures, which are logged
//! at the boundary and never shown to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by configuration parsing and DOM glue.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// The configuration attribute is not valid JSON for [`crate::FxConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// The configuration parsed but breaks a constraint.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// No `window` or `document` (not running in a page).
    #[error("no browser document available")]
    NoDocument,
    /// `localStorage` is disabled or inaccessible.
    #[error("browser storage unavailable")]
    StorageUnavailable,
    /// An element matched a selector but is not the expected kind.
    #[error("element for {0} has an unexpected type")]
    ElementType(&'static str),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
