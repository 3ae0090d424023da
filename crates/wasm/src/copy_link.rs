//! The copy-link control appended to every heading.
//!
//! Clicking writes `<origin><path>#<id>` to the clipboard and flips the glyph
//! to a confirmation (reverting after a delay) or to a sticky error state.

use crate::dom::{Listener, create, set_timeout};
use crate::error::{describe, dom_error};
use folio_core::{BehaviorError, CopyFeedback, CopyLinkConfig, HeadingId, section_url};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlElement, Window};

/// One heading's copy-link anchor and its feedback state.
pub struct CopyLink {
    window: Window,
    anchor: HtmlElement,
    id: HeadingId,
    config: Rc<CopyLinkConfig>,
    feedback: RefCell<CopyFeedback>,
}

impl CopyLink {
    /// Appends a copy-link anchor to `heading` and wires its click handler.
    pub fn attach(
        window: &Window,
        document: &Document,
        heading: &Element,
        id: HeadingId,
        config: Rc<CopyLinkConfig>,
    ) -> Result<Rc<Self>, BehaviorError> {
        let anchor: HtmlElement = create(document, "a")?;
        anchor
            .set_attribute("href", &id.fragment())
            .map_err(|e| dom_error("set href", e))?;
        anchor.set_class_name(&config.class_name);

        let link = Rc::new(Self {
            window: window.clone(),
            anchor,
            id,
            config,
            feedback: RefCell::new(CopyFeedback::new()),
        });
        link.render();

        let handler = Rc::clone(&link);
        Listener::new(&link.anchor, "click", move |event| {
            event.prevent_default();
            handler.copy();
        })?
        .forget();

        heading
            .append_child(&link.anchor)
            .map_err(|e| dom_error("append copy link", e))?;
        Ok(link)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.anchor
    }

    /// Starts a clipboard write of this section's URL.
    pub fn copy(self: &Rc<Self>) {
        let url = match self.section_url() {
            Ok(url) => url,
            Err(e) => {
                self.fail(&e.to_string());
                return;
            }
        };

        let promise = match write_clipboard(&self.window, &url) {
            Ok(promise) => promise,
            Err(e) => {
                self.fail(&e.to_string());
                return;
            }
        };

        let link = Rc::clone(self);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => link.succeed(),
                Err(e) => link.fail(&describe(&e)),
            }
        });
    }

    /// Shows the confirmation and schedules the revert.
    pub fn succeed(self: &Rc<Self>) {
        let ticket = self.feedback.borrow_mut().copied();
        self.render();

        let link = Rc::clone(self);
        let scheduled = set_timeout(&self.window, self.config.revert_after_ms, move || {
            if link.feedback.borrow_mut().revert(ticket) {
                link.render();
            }
        });
        if let Err(e) = scheduled {
            log::warn!("Could not schedule copy-link revert for '{}': {}", self.id, e);
        }
    }

    /// Shows the sticky error state.
    pub fn fail(&self, reason: &str) {
        log::error!("Failed to copy link to '{}': {}", self.id, reason);
        self.feedback.borrow_mut().failed();
        self.render();
    }

    fn section_url(&self) -> Result<String, BehaviorError> {
        let location = self.window.location();
        let origin = location.origin().map_err(|e| dom_error("location.origin", e))?;
        let path = location
            .pathname()
            .map_err(|e| dom_error("location.pathname", e))?;
        Ok(section_url(&origin, &path, &self.id))
    }

    fn render(&self) {
        let state = self.feedback.borrow().state();
        let face = state.face(&self.config);
        self.anchor.set_text_content(Some(face.glyph));
        self.anchor.set_title(face.title);
    }
}

/// Calls `navigator.clipboard.writeText(text)`.
///
/// Looked up dynamically: the API is missing in insecure contexts.
fn write_clipboard(window: &Window, text: &str) -> Result<js_sys::Promise, BehaviorError> {
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| dom_error("navigator.clipboard", e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(BehaviorError::Environment(
            "Clipboard API unavailable".into(),
        ));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| dom_error("clipboard.writeText", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| BehaviorError::Environment("clipboard.writeText is not a function".into()))?;

    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| dom_error("clipboard.writeText", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| BehaviorError::Dom("clipboard.writeText did not return a promise".into()))
}
