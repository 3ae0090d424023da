//! The mobile sidebar: hamburger trigger, slide-in panel and backdrop.

use crate::dom::{Listener, set_class, set_style};
use folio_core::{ACTIVE_CLASS, BehaviorError, Sidebar, SidebarEvent, SidebarState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};

/// Drives the sidebar markers and the body scroll lock from one state.
pub struct SidebarController {
    sidebar: RefCell<Sidebar>,
    trigger: Element,
    panel: Element,
    backdrop: Element,
    body: HtmlElement,
}

impl SidebarController {
    pub fn new(trigger: Element, panel: Element, backdrop: Element, body: HtmlElement) -> Rc<Self> {
        Rc::new(Self {
            sidebar: RefCell::new(Sidebar::new()),
            trigger,
            panel,
            backdrop,
            body,
        })
    }

    /// Wires the trigger, the backdrop and every link in `links`. Returns the
    /// number of listeners installed.
    pub fn bind(self: &Rc<Self>, links: &[Element]) -> Result<usize, BehaviorError> {
        self.listen(&self.trigger, SidebarEvent::Trigger)?;
        self.listen(&self.backdrop, SidebarEvent::Backdrop)?;
        for link in links {
            self.listen(link, SidebarEvent::Link)?;
        }
        Ok(links.len() + 2)
    }

    fn listen(self: &Rc<Self>, target: &Element, event: SidebarEvent) -> Result<(), BehaviorError> {
        let controller = Rc::clone(self);
        Listener::new(target, "click", move |_| {
            if let Err(e) = controller.handle(event) {
                log::error!("Sidebar {:?} handling failed: {}", event, e);
            }
        })?
        .forget();
        Ok(())
    }

    pub fn state(&self) -> SidebarState {
        self.sidebar.borrow().state()
    }

    pub fn is_open(&self) -> bool {
        self.sidebar.borrow().is_open()
    }

    pub fn toggle(&self) -> Result<(), BehaviorError> {
        self.handle(SidebarEvent::Trigger)
    }

    pub fn close(&self) -> Result<(), BehaviorError> {
        self.handle(SidebarEvent::Backdrop)
    }

    pub fn open(&self) -> Result<(), BehaviorError> {
        if self.is_open() {
            return Ok(());
        }
        self.toggle()
    }

    /// Applies `event` and re-renders if the state changed.
    pub fn handle(&self, event: SidebarEvent) -> Result<(), BehaviorError> {
        let transition = self.sidebar.borrow_mut().handle(event);
        if transition.changed() {
            log::debug!("Sidebar {:?} -> {:?} ({:?})", transition.from, transition.to, event);
            self.render(transition.to)?;
        }
        Ok(())
    }

    fn render(&self, state: SidebarState) -> Result<(), BehaviorError> {
        let open = state.is_open();
        for element in [&self.trigger, &self.panel, &self.backdrop] {
            set_class(element, ACTIVE_CLASS, open)?;
        }
        set_style(&self.body, "overflow", open.then_some("hidden"))
    }
}
