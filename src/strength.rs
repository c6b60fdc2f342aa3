//! Password strength meter.
//!
//! A thin bar under the password field grows by one fifth per satisfied rule
//! and changes color from red to green. The color is looked up at
//! `score - 1`, so an empty or rule-free password gets a transparent bar.

#[cfg(test)]
#[path = "strength_test.rs"]
mod strength_test;

use crate::consts::{MAX_STRENGTH, STRENGTH_SYMBOLS, STRONG_LENGTH, TRANSPARENT};

/// Rendered bar state for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthBar<'a> {
    /// Bar width, 0 to 100.
    pub width_percent: u32,
    /// CSS background.
    pub color: &'a str,
}

impl StrengthBar<'_> {
    /// The CSS `width` value, e.g. `"60%"`.
    #[must_use]
    pub fn width(&self) -> String {
        format!("{}%", self.width_percent)
    }
}

/// Count how many strength rules `password` satisfies, 0 to 5.
///
/// Length is measured in UTF-16 code units, matching what the browser reports
/// for an input's value.
#[must_use]
pub fn score(password: &str) -> u8 {
    let rules = [
        password.encode_utf16().count() >= STRONG_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| STRENGTH_SYMBOLS.contains(c)),
    ];
    let met = rules.iter().filter(|met| **met).count();
    u8::try_from(met).unwrap_or(MAX_STRENGTH)
}

/// Bar width and color for `score`, using `palette[score - 1]`.
///
/// Scores with no palette entry (0, or anything past the palette) render
/// transparent.
#[must_use]
pub fn bar<S: AsRef<str>>(score: u8, palette: &[S]) -> StrengthBar<'_> {
    let clamped = score.min(MAX_STRENGTH);
    let color = usize::from(clamped)
        .checked_sub(1)
        .and_then(|i| palette.get(i))
        .map_or(TRANSPARENT, |c| c.as_ref());
    StrengthBar {
        width_percent: u32::from(clamped) * 100 / u32::from(MAX_STRENGTH),
        color,
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Event, HtmlInputElement};

    use crate::config::FxConfig;
    use crate::consts::PASSWORD_SELECTOR;
    use crate::dom;
    use crate::error::FxError;

    /// Insert the strength bar after the password field and score each keystroke.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if the bar cannot be created or wired.
    pub fn install(doc: &Document, config: &FxConfig) -> Result<(), FxError> {
        let Some(field) = dom::element(doc, PASSWORD_SELECTOR)? else {
            log::debug!("no password field; strength meter skipped");
            return Ok(());
        };
        let input: HtmlInputElement = dom::cast(field, "password field")?;

        let bar_el = dom::create(doc, "div")?;
        dom::set_styles(
            &bar_el,
            &[("height", "5px"), ("border-radius", "5px"), ("margin-top", "6px"), ("transition", "0.3s ease")],
        )?;
        input.insert_adjacent_element("afterend", &bar_el)?;

        let palette = config.strength_palette.clone();
        let source = input.clone();
        dom::listen(&input, "input", move |_: Event| {
            let bar = super::bar(super::score(&source.value()), &palette);
            let width = bar.width();
            dom::set_styles(&bar_el, &[("width", width.as_str()), ("background", bar.color)])
        })
    }
}
