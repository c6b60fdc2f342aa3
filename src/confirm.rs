//! Confirm-password match indicator.
//!
//! Colors the confirmation field's border while the user types. It never
//! blocks submission; the server still validates.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Whether the confirmation currently matches the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    Valid,
    Invalid,
}

impl Match {
    /// Compare by exact string equality. Two empty fields match.
    #[must_use]
    pub fn check(password: &str, confirmation: &str) -> Self {
        if password == confirmation { Self::Valid } else { Self::Invalid }
    }

    /// Pick the border color for this state.
    #[must_use]
    pub fn border_color<'a>(self, valid: &'a str, invalid: &'a str) -> &'a str {
        match self {
            Self::Valid => valid,
            Self::Invalid => invalid,
        }
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Event, HtmlInputElement};

    use super::Match;
    use crate::config::FxConfig;
    use crate::consts::{CONFIRM_SELECTOR, PASSWORD_SELECTOR};
    use crate::dom;
    use crate::error::FxError;

    /// Recolor the confirmation border on each keystroke in that field.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if either field has the wrong type or the listener
    /// cannot be added.
    pub fn install(doc: &Document, config: &FxConfig) -> Result<(), FxError> {
        let (Some(confirm), Some(password)) = (dom::element(doc, CONFIRM_SELECTOR)?, dom::element(doc, PASSWORD_SELECTOR)?)
        else {
            log::debug!("confirm or password field missing; confirm validator skipped");
            return Ok(());
        };
        let confirm: HtmlInputElement = dom::cast(confirm, "confirm field")?;
        let password: HtmlInputElement = dom::cast(password, "password field")?;

        let valid = config.valid_color.clone();
        let invalid = config.invalid_color.clone();
        let target = confirm.clone();
        dom::listen(&target, "input", move |_: Event| {
            let color = Match::check(&password.value(), &confirm.value()).border_color(&valid, &invalid);
            confirm.style().set_property("border-color", color)?;
            Ok(())
        })
    }
}
