//! Navbar background that follows the scroll position.

use crate::dom::{Listener, set_style};
use crate::error::dom_error;
use folio_core::{BehaviorError, NavbarBackground, NavbarConfig};
use std::rc::Rc;
use web_sys::{HtmlElement, Window};

pub struct NavbarScroll {
    navbar: HtmlElement,
    config: NavbarConfig,
}

impl NavbarScroll {
    pub fn new(navbar: HtmlElement, config: NavbarConfig) -> Rc<Self> {
        Rc::new(Self { navbar, config })
    }

    /// Re-applies the background on every scroll of `window`.
    pub fn bind(self: &Rc<Self>, window: &Window) -> Result<(), BehaviorError> {
        let navbar = Rc::clone(self);
        let source = window.clone();
        Listener::new(window, "scroll", move |_| {
            let applied = source
                .scroll_y()
                .map_err(|e| dom_error("window.scrollY", e))
                .and_then(|y| navbar.apply(y).map(|_| ()));
            if let Err(e) = applied {
                log::warn!("Navbar scroll update failed: {}", e);
            }
        })?
        .forget();
        Ok(())
    }

    /// Sets the background for a vertical offset of `scroll_y` pixels.
    pub fn apply(&self, scroll_y: f64) -> Result<NavbarBackground, BehaviorError> {
        let background = NavbarBackground::for_offset(scroll_y, &self.config);
        set_style(&self.navbar, "background", Some(background.css(&self.config)))?;
        Ok(background)
    }
}
