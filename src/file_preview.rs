//! Upload file name preview.
//!
//! Shows the chosen file's name under the upload field. The label is the
//! element with id `file-name`: a server-rendered one is reused, otherwise one
//! is created next to the input.

#[cfg(test)]
#[path = "file_preview_test.rs"]
mod file_preview_test;

/// Label text for a selected file, or `None` when nothing is selected.
///
/// An empty name counts as no selection.
#[must_use]
pub fn label_text(file_name: Option<&str>) -> Option<String> {
    file_name.filter(|name| !name.is_empty()).map(|name| format!("📄 {name}"))
}

#[cfg(feature = "hydrate")]
pub use self::browser::{ensure_label, install};

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, Event, HtmlInputElement};

    use crate::consts::{FILE_INPUT_SELECTOR, FILE_LABEL_ID};
    use crate::dom;
    use crate::error::FxError;

    /// Resolve the preview label, creating it under the input's parent if the
    /// page has none.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the label cannot be created or attached.
    pub fn ensure_label(doc: &Document, input: &HtmlInputElement) -> Result<Element, FxError> {
        if let Some(existing) = doc.get_element_by_id(FILE_LABEL_ID) {
            return Ok(existing);
        }
        let label = dom::create(doc, "div")?;
        label.set_id(FILE_LABEL_ID);
        dom::set_styles(&label, &[("margin-top", "8px"), ("font-size", "0.9rem"), ("color", "#bfbfff")])?;
        if let Some(parent) = input.parent_node() {
            parent.append_child(&label)?;
        } else {
            log::debug!("upload field is detached; file label not attached");
        }
        Ok(label.into())
    }

    /// Update the label whenever the upload selection changes.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if the field has the wrong type or the listener
    /// cannot be added.
    pub fn install(doc: &Document) -> Result<(), FxError> {
        let Some(field) = dom::element(doc, FILE_INPUT_SELECTOR)? else {
            log::debug!("no upload field; file preview skipped");
            return Ok(());
        };
        let input: HtmlInputElement = dom::cast(field, "upload field")?;

        let doc = doc.clone();
        let source = input.clone();
        let mut label: Option<Element> = None;
        dom::listen(&input, "change", move |_: Event| {
            let name = source.files().and_then(|files| files.get(0)).map(|file| file.name());
            let Some(text) = super::label_text(name.as_deref()) else {
                return Ok(());
            };
            let el = match label.take() {
                Some(el) => el,
                None => ensure_label(&doc, &source)?,
            };
            el.set_text_content(Some(&text));
            label = Some(el);
            Ok(())
        })
    }
}
