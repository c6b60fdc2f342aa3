//! Auto-dismiss for flash messages.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::config::FxConfig;

/// When an alert fades and when it is removed, measured from install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub fade_at_ms: u32,
    pub remove_at_ms: u32,
}

impl Schedule {
    #[must_use]
    pub fn from_config(config: &FxConfig) -> Self {
        Self { fade_at_ms: config.alert_delay_ms, remove_at_ms: config.alert_lifetime_ms() }
    }

    /// Delay between the fade and the removal.
    #[must_use]
    pub fn fade_ms(&self) -> u32 {
        self.remove_at_ms - self.fade_at_ms
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use super::Schedule;
    use crate::config::FxConfig;
    use crate::consts::ALERT_SELECTOR;
    use crate::dom;
    use crate::error::FxError;

    /// Fade and then remove every `.alert` present now.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the alerts cannot be queried.
    pub fn install(doc: &Document, config: &FxConfig) -> Result<(), FxError> {
        let schedule = Schedule::from_config(config);
        let alerts = dom::elements(doc, ALERT_SELECTOR)?;
        log::debug!("dismissing {} alerts after {}ms", alerts.len(), schedule.remove_at_ms);
        for alert in alerts {
            dom::after(schedule.fade_at_ms, move || {
                if let Some(html) = alert.dyn_ref::<HtmlElement>() {
                    if let Err(err) = html.style().set_property("opacity", "0") {
                        log::warn!("alert fade failed: {err:?}");
                    }
                }
                dom::after(schedule.fade_ms(), move || alert.remove());
            });
        }
        Ok(())
    }
}
