//! The single document-level Escape listener.

use crate::dom::Listener;
use crate::modal::ImageModal;
use crate::sidebar::SidebarController;
use folio_core::{BehaviorError, EscapePlan, SidebarEvent};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Closes whichever of the modal and the sidebar are open when Escape is
/// pressed.
pub struct EscapeDispatcher {
    modal: Option<Rc<ImageModal>>,
    sidebar: Option<Rc<SidebarController>>,
}

impl EscapeDispatcher {
    pub fn new(modal: Option<Rc<ImageModal>>, sidebar: Option<Rc<SidebarController>>) -> Rc<Self> {
        Rc::new(Self { modal, sidebar })
    }

    pub fn bind(self: &Rc<Self>, document: &Document) -> Result<(), BehaviorError> {
        let dispatcher = Rc::clone(self);
        Listener::new(document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Err(e) = dispatcher.dispatch(&event.key()) {
                log::error!("Escape handling failed: {}", e);
            }
        })?
        .forget();
        Ok(())
    }

    /// Handles one key press; returns what was closed.
    pub fn dispatch(&self, key: &str) -> Result<EscapePlan, BehaviorError> {
        let plan = EscapePlan::for_key(
            key,
            self.modal.as_ref().is_some_and(|m| m.is_open()),
            self.sidebar.as_ref().is_some_and(|s| s.is_open()),
        );

        if plan.close_modal {
            if let Some(modal) = &self.modal {
                modal.close();
            }
        }
        if plan.close_sidebar {
            if let Some(sidebar) = &self.sidebar {
                sidebar.handle(SidebarEvent::Escape)?;
            }
        }
        Ok(plan)
    }
}
