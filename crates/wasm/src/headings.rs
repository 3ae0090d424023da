//! Heading identifiers and copy-link controls.

use crate::copy_link::CopyLink;
use crate::dom::{DocumentIds, Page};
use folio_core::{BehaviorError, CopyLinkConfig, HeadingIdAllocator};
use std::rc::Rc;
use web_sys::{Document, Element, Window};

/// Assigns identifiers to headings and attaches a copy-link to each.
pub struct HeadingLinker {
    window: Window,
    document: Document,
    copy_link: Rc<CopyLinkConfig>,
    allocator: HeadingIdAllocator,
}

impl HeadingLinker {
    pub fn new(page: &Page, copy_link: Rc<CopyLinkConfig>) -> Self {
        Self {
            window: page.window.clone(),
            document: page.document.clone(),
            copy_link,
            allocator: HeadingIdAllocator::new(),
        }
    }

    /// Processes `headings` in order, returning how many got a new identifier.
    ///
    /// Headings that already carry an `id` are left untouched, which makes a
    /// second pass over the same page a no-op.
    pub fn link_all(&mut self, headings: &[Element]) -> Result<usize, BehaviorError> {
        let mut linked = 0;
        for (position, heading) in headings.iter().enumerate() {
            if !heading.id().is_empty() {
                continue;
            }

            let text = heading.text_content().unwrap_or_default();
            let id = self
                .allocator
                .allocate(&text, position, &DocumentIds(&self.document));
            heading.set_id(id.as_str());

            CopyLink::attach(
                &self.window,
                &self.document,
                heading,
                id,
                Rc::clone(&self.copy_link),
            )?;
            linked += 1;
        }
        Ok(linked)
    }
}
