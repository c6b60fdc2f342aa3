//! Smooth scrolling for same-page links.
//!
//! Fragments are looked up as element ids rather than fed to
//! `querySelector`, so `href="#"` or a fragment that is not a valid selector
//! is a quiet no-op instead of a thrown `SyntaxError`.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// The element id an in-page `href` points at.
///
/// Returns `None` for hrefs that are not fragments or have an empty fragment.
#[must_use]
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

    use crate::consts::ANCHOR_SELECTOR;
    use crate::dom;
    use crate::error::FxError;

    /// Intercept clicks on every `a[href^="#"]` and scroll smoothly instead.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if the links cannot be queried or wired.
    pub fn install(doc: &Document) -> Result<(), FxError> {
        let anchors = dom::elements(doc, ANCHOR_SELECTOR)?;
        log::debug!("smooth scroll on {} anchors", anchors.len());
        for anchor in anchors {
            let doc = doc.clone();
            let link = anchor.clone();
            dom::listen(&anchor, "click", move |event: Event| {
                event.prevent_default();
                scroll_to(&doc, &link);
                Ok(())
            })?;
        }
        Ok(())
    }

    fn scroll_to(doc: &Document, link: &Element) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = super::target_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
            log::debug!("no element for {href}");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
