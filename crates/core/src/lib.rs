//! # folio-core
//!
//! Platform-agnostic behavior for the portfolio site's interactive pieces.
//!
//! - **heading**: fragment identifiers for headings, with de-duplication
//! - **copy_link**: feedback states of the heading copy-link control
//! - **nav**: current-page detection for navigation highlighting
//! - **sidebar**: the mobile sidebar state machine
//! - **modal**: the singleton image modal slot
//! - **video**: startup playback settings
//! - **navbar**: scroll-driven navbar background
//! - **escape**: routing of the Escape key to open surfaces
//! - **boot**: boot ordering, failure isolation and reporting
//! - **config** / **error**: configuration and error types
//!
//! ## Design Principle
//!
//! This crate has **no browser dependencies**. Everything that touches the
//! DOM lives in `folio-wasm`, which feeds element data in and renders the
//! returned states back out.

pub mod boot;
pub mod config;
pub mod copy_link;
pub mod error;
pub mod escape;
pub mod heading;
pub mod modal;
pub mod nav;
pub mod navbar;
pub mod sidebar;
pub mod video;

pub use boot::{BootReport, Feature, FeatureStatus};
pub use config::{
    ACTIVE_CLASS, CopyLinkConfig, NavConfig, NavbarConfig, Selectors, SiteConfig, VideoConfig,
};
pub use copy_link::{CopyFeedback, CopyLinkFace, CopyLinkState, RevertTicket};
pub use error::{BehaviorError, ConfigError};
pub use escape::{ESCAPE_KEY, EscapePlan};
pub use heading::{
    HeadingId, HeadingIdAllocator, IdRegistry, derive_candidate, is_js_whitespace, section_url,
};
pub use modal::{ModalClick, ModalImage, ModalSlot};
pub use nav::{current_page, is_active_link};
pub use navbar::NavbarBackground;
pub use sidebar::{Sidebar, SidebarEvent, SidebarState, SidebarTransition};
pub use video::{AutoplayOutcome, PlaybackSettings};
