//! Routing of the Escape key to open surfaces.
//!
//! One document-level listener consults this plan instead of every surface
//! registering its own handler.

pub const ESCAPE_KEY: &str = "Escape";

/// Surfaces to close for one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EscapePlan {
    pub close_modal: bool,
    pub close_sidebar: bool,
}

impl EscapePlan {
    /// Escape closes every open surface; other keys close nothing.
    pub fn for_key(key: &str, modal_open: bool, sidebar_open: bool) -> Self {
        if key != ESCAPE_KEY {
            return Self::default();
        }
        Self {
            close_modal: modal_open,
            close_sidebar: sidebar_open,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.close_modal && !self.close_sidebar
    }
}
