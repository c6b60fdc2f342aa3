//! Stylesheet injected alongside the handlers: light-mode overrides for the
//! dashboard chrome and the ripple animation.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Light-mode overrides plus the `.ripple` class and its keyframes.
///
/// The `ripple-effect` animation runs for [`crate::consts::RIPPLE_ANIMATION_MS`].
pub const STYLESHEET: &str = r"
body.light-mode {
  background: linear-gradient(135deg, #f8f9fc, #ffffff);
  color: #1a1a1a;
}
body.light-mode .card {
  background: rgba(255, 255, 255, 0.9);
  color: #1a1a1a;
  border: 1px solid rgba(0, 0, 0, 0.1);
}
body.light-mode .navbar {
  background: rgba(255, 255, 255, 0.9);
  border-bottom: 1px solid rgba(0, 0, 0, 0.1);
}
body.light-mode .btn-primary {
  background: linear-gradient(135deg, #6a5eff, #9b86ff);
}
body.light-mode .upload-box {
  border-color: #8a79ff;
}
body.light-mode .table th {
  background: linear-gradient(135deg, #6a5eff, #9b86ff);
}
.ripple {
  position: absolute;
  border-radius: 50%;
  transform: scale(0);
  animation: ripple-effect 0.6s linear;
  background: rgba(255, 255, 255, 0.6);
  pointer-events: none;
}
@keyframes ripple-effect {
  to {
    transform: scale(3);
    opacity: 0;
  }
}
";

#[cfg(feature = "hydrate")]
pub use self::browser::inject;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use super::STYLESHEET;
    use crate::consts::STYLE_ELEMENT_ID;
    use crate::dom;
    use crate::error::FxError;

    /// Append the stylesheet to `<head>` unless it is already there.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the `<style>` element cannot be attached.
    pub fn inject(doc: &Document) -> Result<(), FxError> {
        if doc.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
            return Ok(());
        }
        let Some(head) = doc.head() else {
            log::warn!("no <head>; styles not injected");
            return Ok(());
        };
        let style = dom::create(doc, "style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(STYLESHEET));
        head.append_child(&style)?;
        Ok(())
    }
}
