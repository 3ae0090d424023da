pub mod fixtures;

use folio::{HeadingId, HeadingIdAllocator, IdRegistry};
use std::collections::HashSet;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// In-memory stand-in for a page's element identifiers.
///
/// Behaves like `document.getElementById`: every identifier assigned during a
/// pass becomes visible to later lookups.
#[derive(Debug, Default)]
pub struct FakePage {
    ids: HashSet<String>,
}

impl FakePage {
    pub fn with_ids(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Runs an identifier pass over `headings`, skipping those that already
    /// carry an identifier, and returns the identifier each heading ends with.
    pub fn assign(&mut self, headings: &mut [fixtures::Heading]) -> Vec<String> {
        let mut allocator = HeadingIdAllocator::new();
        for (position, heading) in headings.iter_mut().enumerate() {
            if heading.id.is_some() {
                continue;
            }
            let id: HeadingId = allocator.allocate(&heading.text, position, self);
            self.ids.insert(id.as_str().to_string());
            heading.id = Some(id.into_string());
        }
        headings.iter().filter_map(|h| h.id.clone()).collect()
    }
}

impl IdRegistry for FakePage {
    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
