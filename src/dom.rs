//! Thin web-sys helpers shared by the behavior installers.
//!
//! Listener closures and timers live for the lifetime of the page, so both are
//! leaked with `forget` once registered.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error::FxError;

/// The current page document.
///
/// # Errors
///
/// Returns [`FxError::NoDocument`] outside a browser page.
pub fn document() -> Result<Document, FxError> {
    web_sys::window().and_then(|w| w.document()).ok_or(FxError::NoDocument)
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`FxError::Js`] for an invalid selector.
pub fn elements(doc: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    let nodes = doc.query_selector_all(selector)?;
    // Selector matches are always elements.
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect())
}

/// The first element matching `selector`, if any.
///
/// # Errors
///
/// Returns [`FxError::Js`] for an invalid selector.
pub fn element(doc: &Document, selector: &str) -> Result<Option<Element>, FxError> {
    Ok(doc.query_selector(selector)?)
}

/// Cast an element to a concrete element type.
///
/// # Errors
///
/// Returns [`FxError::ElementType`] naming `what` when the cast fails.
pub fn cast<T: JsCast>(el: Element, what: &'static str) -> Result<T, FxError> {
    el.dyn_into::<T>().map_err(|_| FxError::ElementType(what))
}

/// Create an element and cast it to [`HtmlElement`].
///
/// # Errors
///
/// Returns [`FxError::Js`] if creation fails.
pub fn create(doc: &Document, tag: &'static str) -> Result<HtmlElement, FxError> {
    cast(doc.create_element(tag)?, tag)
}

/// Set inline style properties in order.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the browser rejects a property.
pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) -> Result<(), FxError> {
    let style = el.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Register an event handler for the lifetime of the page.
///
/// Errors returned by `handler` are logged with the event kind.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the listener cannot be added.
pub fn listen<F>(target: &EventTarget, kind: &'static str, mut handler: F) -> Result<(), FxError>
where
    F: FnMut(Event) -> Result<(), FxError> + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Err(err) = handler(event) {
            log::warn!("{kind} handler failed: {err}");
        }
    });
    let function: &js_sys::Function = cb.as_ref().unchecked_ref();
    target.add_event_listener_with_callback(kind, function)?;
    cb.forget();
    Ok(())
}

/// Run `f` once after `millis`, without a cancellation handle.
pub fn after(millis: u32, f: impl FnOnce() + 'static) {
    Timeout::new(millis, f).forget();
}
