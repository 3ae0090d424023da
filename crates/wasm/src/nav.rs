//! Highlights the navigation links that point at the current page.

use crate::dom::set_class;
use folio_core::{ACTIVE_CLASS, BehaviorError, NavConfig, current_page, is_active_link};
use web_sys::Element;

pub struct NavHighlighter {
    config: NavConfig,
}

impl NavHighlighter {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }

    /// Marks matching links active and clears the rest. Returns the number of
    /// active links.
    pub fn highlight(&self, pathname: &str, links: &[Element]) -> Result<usize, BehaviorError> {
        let current = current_page(pathname, &self.config);
        log::debug!("Highlighting navigation for '{}'", current);

        let mut active = 0;
        for link in links {
            let on = is_active_link(link.get_attribute("href").as_deref(), current, &self.config);
            set_class(link, ACTIVE_CLASS, on)?;
            if on {
                active += 1;
            }
        }
        Ok(active)
    }
}
