//! DOM access helpers shared by the page behaviors.

use crate::error::dom_error;
use folio_core::{BehaviorError, IdRegistry};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// Handles to the browser objects every behavior needs.
#[derive(Debug, Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
}

impl Page {
    /// Looks up the current window, document and body.
    pub fn current() -> Result<Self, BehaviorError> {
        let window = web_sys::window()
            .ok_or_else(|| BehaviorError::Environment("No window object available".into()))?;
        let document = window
            .document()
            .ok_or_else(|| BehaviorError::Environment("No document object available".into()))?;
        let body = document
            .body()
            .ok_or_else(|| BehaviorError::Environment("Document has no body".into()))?;
        Ok(Self {
            window,
            document,
            body,
        })
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, BehaviorError> {
        query_all(&self.document, selector)
    }

    /// The first element matching `selector`, if any.
    pub fn query(&self, selector: &str) -> Result<Option<Element>, BehaviorError> {
        self.document
            .query_selector(selector)
            .map_err(|e| dom_error(&format!("querySelector('{}')", selector), e))
    }
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| dom_error(&format!("querySelectorAll('{}')", selector), e))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `document.getElementById` as an [`IdRegistry`].
pub struct DocumentIds<'a>(pub &'a Document);

impl IdRegistry for DocumentIds<'_> {
    fn contains(&self, id: &str) -> bool {
        self.0.get_element_by_id(id).is_some()
    }
}

/// Creates an element and casts it to `T`.
pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, BehaviorError> {
    document
        .create_element(tag)
        .map_err(|e| dom_error(&format!("createElement('{}')", tag), e))?
        .dyn_into::<T>()
        .map_err(|_| BehaviorError::Dom(format!("<{}> has an unexpected element type", tag)))
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), BehaviorError> {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    result.map_err(|e| dom_error(&format!("classList toggle '{}'", class), e))
}

/// Sets an inline style property; `None` removes it.
pub fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) -> Result<(), BehaviorError> {
    let style = element.style();
    match value {
        Some(value) => style
            .set_property(property, value)
            .map_err(|e| dom_error(&format!("style.{}", property), e)),
        None => style
            .remove_property(property)
            .map(|_| ())
            .map_err(|e| dom_error(&format!("style.{}", property), e)),
    }
}

/// An event listener that is removed when dropped.
///
/// Page-lifetime listeners call [`Listener::forget`] instead.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&format!("addEventListener('{}')", event), e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        })
    }

    /// Keeps the listener installed for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }
}

/// Schedules `f` once after `delay_ms` milliseconds.
pub fn set_timeout<F>(window: &Window, delay_ms: u32, f: F) -> Result<(), BehaviorError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .map(|_| ())
        .map_err(|e| dom_error("setTimeout", e))
}
