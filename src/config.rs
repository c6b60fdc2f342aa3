//! Runtime configuration read from the page.
//!
//! Pages may override timings, colors, and the storage key by putting JSON in
//! the `data-hub-fx-config` attribute of `<body>`. Every field is optional:
//!
//! ```json
//! { "alert_delay_ms": 6000, "log_level": "debug" }
//! ```
//!
//! Invalid configuration is rejected as a whole and the defaults are used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ALERT_DELAY_MS, ALERT_FADE_MS, DEFAULT_LOG_LEVEL, INVALID_COLOR, MAX_STRENGTH, RIPPLE_ANIMATION_MS, RIPPLE_MS,
    STRENGTH_PALETTE, THEME_STORAGE_KEY, VALID_COLOR,
};
use crate::error::FxError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Time an alert stays visible before fading.
    pub alert_delay_ms: u32,
    /// Time between fade and removal.
    pub alert_fade_ms: u32,
    /// Ripple overlay lifetime. Must cover the CSS animation.
    pub ripple_ms: u32,
    /// `localStorage` key for the theme preference.
    pub storage_key: String,
    /// Strength bar colors, weakest first. Exactly one per score point.
    pub strength_palette: Vec<String>,
    /// Confirm border when the passwords match.
    pub valid_color: String,
    /// Confirm border when they differ.
    pub invalid_color: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            alert_delay_ms: ALERT_DELAY_MS,
            alert_fade_ms: ALERT_FADE_MS,
            ripple_ms: RIPPLE_MS,
            storage_key: THEME_STORAGE_KEY.to_owned(),
            strength_palette: STRENGTH_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            valid_color: VALID_COLOR.to_owned(),
            invalid_color: INVALID_COLOR.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl FxConfig {
    /// Parse and validate configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::ConfigParse`] for malformed JSON and
    /// [`FxError::InvalidConfig`] when a value breaks a constraint.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from an optional attribute value.
    ///
    /// Absent or blank input yields the defaults. Invalid input is logged and
    /// also yields the defaults.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page config: {err}");
                Self::default()
            }
        }
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::InvalidConfig`] describing the first violation.
    pub fn validate(&self) -> Result<(), FxError> {
        if self.ripple_ms < RIPPLE_ANIMATION_MS {
            return Err(FxError::InvalidConfig(format!(
                "ripple_ms {} is shorter than the {RIPPLE_ANIMATION_MS}ms ripple animation",
                self.ripple_ms
            )));
        }
        if self.strength_palette.len() != usize::from(MAX_STRENGTH) {
            return Err(FxError::InvalidConfig(format!(
                "strength_palette needs {MAX_STRENGTH} colors, got {}",
                self.strength_palette.len()
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(FxError::InvalidConfig("storage_key must not be empty".into()));
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::InvalidConfig`] for an unknown level name.
    pub fn level(&self) -> Result<log::Level, FxError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| FxError::InvalidConfig(format!("unknown log_level '{}'", self.log_level)))
    }

    /// Total time from install until an alert is gone.
    #[must_use]
    pub fn alert_lifetime_ms(&self) -> u32 {
        self.alert_delay_ms.saturating_add(self.alert_fade_ms)
    }
}
