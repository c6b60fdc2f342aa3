//! WebAssembly entry point.
//!
//! On module start the panic hook and console logger are installed and the
//! stylesheet is injected. Handlers are installed once the DOM has been
//! parsed: immediately if it already has, otherwise on `DOMContentLoaded`.
//!
//! Each behavior installs independently; one failing is logged and the rest
//! still run.

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Event};

use crate::config::FxConfig;
use crate::consts::{CONFIG_ATTRIBUTE, INSTALLED_ATTRIBUTE};
use crate::error::FxError;
use crate::{alerts, anchors, confirm, dom, file_preview, ripple, strength, styles, theme};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();

    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("page enhancements disabled: {err}");
            return;
        }
    };
    if let Err(err) = styles::inject(&doc) {
        log::warn!("stylesheet injection failed: {err}");
    }

    if doc.ready_state() == "loading" {
        let loaded = doc.clone();
        if let Err(err) = dom::listen(&doc, "DOMContentLoaded", move |_: Event| {
            install(&loaded);
            Ok(())
        }) {
            log::warn!("could not wait for DOMContentLoaded: {err}");
        }
    } else {
        install(&doc);
    }
}

fn init_logging() {
    // Filter is narrowed again once the page config is known.
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(log::LevelFilter::Info);
}

/// Wire every behavior onto `doc`. Runs at most once per document.
pub fn install(doc: &Document) {
    let Some(body) = doc.body() else {
        log::warn!("no <body>; page enhancements skipped");
        return;
    };
    if body.has_attribute(INSTALLED_ATTRIBUTE) {
        log::debug!("page enhancements already installed");
        return;
    }
    if let Err(err) = body.set_attribute(INSTALLED_ATTRIBUTE, "") {
        log::warn!("could not mark body: {err:?}");
    }

    let config = FxConfig::from_attribute(body.get_attribute(CONFIG_ATTRIBUTE).as_deref());
    if let Ok(level) = config.level() {
        log::set_max_level(level.to_level_filter());
    }

    // The toggle button is created before the ripple pass so it gets one too.
    let steps: [(&str, Result<(), FxError>); 7] = [
        ("alerts", alerts::install(doc, &config)),
        ("file preview", file_preview::install(doc)),
        ("password strength", strength::install(doc, &config)),
        ("confirm password", confirm::install(doc, &config)),
        ("anchors", anchors::install(doc)),
        ("theme toggle", theme::install(doc, &config)),
        ("ripple", ripple::install(doc, &config)),
    ];
    for (name, result) in steps {
        if let Err(err) = result {
            log::warn!("{name} not installed: {err}");
        }
    }
    log::info!("page enhancements installed");
}
