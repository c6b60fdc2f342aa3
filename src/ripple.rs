//! Click ripple on button-styled elements.
//!
//! Each click appends a square `span.ripple` centered on the pointer. The CSS
//! animation scales and fades it; the span is removed once the animation has
//! run.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Size and position of a ripple, in CSS pixels relative to the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Ripple for a click at (`offset_x`, `offset_y`) inside a `width` x `height` box.
    ///
    /// The overlay is a square of the larger dimension so the circle covers
    /// the whole button once scaled.
    #[must_use]
    pub fn at(width: i32, height: i32, offset_x: i32, offset_y: i32) -> Self {
        let size = f64::from(width.max(height));
        Self {
            size,
            left: f64::from(offset_x) - size / 2.0,
            top: f64::from(offset_y) - size / 2.0,
        }
    }

    /// Inline style values `(width/height, left, top)`.
    #[must_use]
    pub fn css(&self) -> (String, String, String) {
        (px(self.size), px(self.left), px(self.top))
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, HtmlElement, MouseEvent};

    use super::Ripple;
    use crate::config::FxConfig;
    use crate::consts::{BUTTON_SELECTOR, RIPPLE_CLASS};
    use crate::dom;
    use crate::error::FxError;

    /// Attach the ripple to every `.btn` currently in the document.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if the buttons cannot be queried or wired.
    pub fn install(doc: &Document, config: &FxConfig) -> Result<(), FxError> {
        let buttons = dom::elements(doc, BUTTON_SELECTOR)?;
        log::debug!("ripple on {} buttons", buttons.len());
        for el in buttons {
            let button: HtmlElement = dom::cast(el, "button")?;
            let doc = doc.clone();
            let lifetime = config.ripple_ms;
            let target = button.clone();
            dom::listen(&target, "click", move |event: Event| {
                let Some(click) = event.dyn_ref::<MouseEvent>() else {
                    return Ok(());
                };
                spawn(&doc, &button, click, lifetime)
            })?;
        }
        Ok(())
    }

    fn spawn(doc: &Document, button: &HtmlElement, click: &MouseEvent, lifetime: u32) -> Result<(), FxError> {
        let span = dom::create(doc, "span")?;
        span.class_list().add_1(RIPPLE_CLASS)?;
        button.append_child(&span)?;

        let ripple = Ripple::at(button.offset_width(), button.offset_height(), click.offset_x(), click.offset_y());
        let (size, left, top) = ripple.css();
        dom::set_styles(
            &span,
            &[("width", size.as_str()), ("height", size.as_str()), ("left", left.as_str()), ("top", top.as_str())],
        )?;

        dom::after(lifetime, move || span.remove());
        Ok(())
    }
}
