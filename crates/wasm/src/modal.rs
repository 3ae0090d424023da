//! Image lightbox: an overlay with an enlarged copy of a clicked image.
//!
//! At most one modal exists. Its click listeners live with its DOM subtree
//! and are removed together with it; Escape is routed by
//! [`crate::keyboard::EscapeDispatcher`].

use crate::dom::{Listener, create, query_all, set_style};
use crate::error::dom_error;
use folio_core::{BehaviorError, ModalClick, ModalImage, ModalSlot};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement};

pub const MODAL_CLASS: &str = "image-modal";
pub const CONTENT_CLASS: &str = "modal-content";
pub const CLOSE_CLASS: &str = "close-modal";
const CLOSE_GLYPH: &str = "\u{00d7}";

/// DOM subtree of an open modal.
struct ModalView {
    overlay: HtmlElement,
    _listeners: Vec<Listener>,
}

impl ModalView {
    fn remove(self) {
        self.overlay.remove();
    }
}

pub struct ImageModal {
    document: Document,
    body: HtmlElement,
    slot: RefCell<ModalSlot<ModalView>>,
}

impl ImageModal {
    pub fn new(document: Document, body: HtmlElement) -> Rc<Self> {
        Rc::new(Self {
            document,
            body,
            slot: RefCell::new(ModalSlot::new()),
        })
    }

    /// Makes each of `images` open the modal on click.
    ///
    /// The listeners own the controller, so bound images keep working after
    /// the caller drops its handle.
    pub fn bind(self: &Rc<Self>, images: &[Element]) -> Result<usize, BehaviorError> {
        for image in images {
            let modal = Rc::clone(self);
            let source = image.clone();
            Listener::new(image, "click", move |_| {
                if let Err(e) = modal.open(image_of(&source)) {
                    log::error!("Failed to open image modal: {}", e);
                }
            })?
            .forget();
        }
        Ok(images.len())
    }

    pub fn is_open(&self) -> bool {
        self.slot.borrow().is_open()
    }

    /// The image currently shown, if any.
    pub fn current(&self) -> Option<ModalImage> {
        self.slot.borrow().image().cloned()
    }

    /// Opens the modal for `image`, replacing any modal already shown.
    pub fn open(self: &Rc<Self>, image: ModalImage) -> Result<(), BehaviorError> {
        self.close();
        // Overlays not created by this controller still count as "a modal".
        for stray in query_all(&self.document, &format!(".{}", MODAL_CLASS))? {
            stray.remove();
        }

        let view = self.build(&image)?;
        log::debug!("Opening image modal for {}", image.src);
        self.slot.borrow_mut().open(image, view);
        Ok(())
    }

    /// Removes the open modal. Returns whether one was open.
    pub fn close(&self) -> bool {
        let previous = self.slot.borrow_mut().close();
        match previous {
            Some((_, view)) => {
                view.remove();
                true
            }
            None => false,
        }
    }

    fn build(self: &Rc<Self>, image: &ModalImage) -> Result<ModalView, BehaviorError> {
        let overlay: HtmlElement = create(&self.document, "div")?;
        overlay.set_class_name(MODAL_CLASS);
        set_style(&overlay, "display", Some("flex"))?;

        let content: HtmlImageElement = create(&self.document, "img")?;
        content.set_class_name(CONTENT_CLASS);
        content.set_src(&image.src);
        content.set_alt(&image.alt);

        let close: HtmlElement = create(&self.document, "span")?;
        close.set_class_name(CLOSE_CLASS);
        close.set_text_content(Some(CLOSE_GLYPH));

        overlay
            .append_child(&content)
            .map_err(|e| dom_error("append modal image", e))?;
        overlay
            .append_child(&close)
            .map_err(|e| dom_error("append modal close", e))?;

        let listeners = vec![
            self.dismiss_on(&close, |_, _| ModalClick::CloseButton)?,
            self.dismiss_on(&overlay, classify_overlay_click)?,
        ];

        self.body
            .append_child(&overlay)
            .map_err(|e| dom_error("append modal", e))?;

        Ok(ModalView {
            overlay,
            _listeners: listeners,
        })
    }

    fn dismiss_on<F>(self: &Rc<Self>, target: &HtmlElement, classify: F) -> Result<Listener, BehaviorError>
    where
        F: Fn(&Event, &JsValue) -> ModalClick + 'static,
    {
        let modal: Weak<Self> = Rc::downgrade(self);
        let current: JsValue = target.clone().into();
        Listener::new(target, "click", move |event| {
            if !classify(&event, &current).dismisses() {
                return;
            }
            if let Some(modal) = modal.upgrade() {
                modal.close();
            }
        })
    }
}

/// Clicks on the overlay itself dismiss; clicks that bubbled up from the
/// enlarged image do not.
fn classify_overlay_click(event: &Event, overlay: &JsValue) -> ModalClick {
    match event.target() {
        Some(target) if target.unchecked_ref::<JsValue>() == overlay => ModalClick::Backdrop,
        _ => ModalClick::Content,
    }
}

fn image_of(element: &Element) -> ModalImage {
    match element.dyn_ref::<HtmlImageElement>() {
        Some(img) => ModalImage::new(img.src(), img.alt()),
        None => ModalImage::new(
            element.get_attribute("src").unwrap_or_default(),
            element.get_attribute("alt").unwrap_or_default(),
        ),
    }
}
