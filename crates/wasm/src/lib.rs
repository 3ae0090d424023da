//! WebAssembly bindings for folio page behaviors.
//!
//! This crate wires the platform-agnostic state in `folio-core` into the
//! browser DOM of the portfolio site.
//!
//! # Architecture
//!
//! Each behavior is an explicit component built from injected element handles:
//!
//! - [`HeadingLinker`] / [`CopyLink`] - heading identifiers and copy-link anchors
//! - [`NavHighlighter`] - active marker on the current page's nav links
//! - [`SidebarController`] - mobile sidebar, backdrop and body scroll lock
//! - [`VideoInitializer`] - playback rate, muting and autoplay with a click fallback
//! - [`ImageModal`] - singleton image lightbox
//! - [`NavbarScroll`] - navbar background driven by the scroll offset
//! - [`EscapeDispatcher`] - the one document-level Escape listener
//!
//! [`boot`] looks the elements up, runs each behavior in its own failure
//! boundary and returns a [`BootReport`].
//!
//! # Example
//!
//! With the default `auto-boot` feature nothing is needed beyond loading the
//! module. Without it:
//!
//! ```javascript
//! import init, { bootWithConfig } from '@folio/wasm';
//!
//! await init();
//!
//! const report = bootWithConfig({
//!   selectors: { navbar: '#top-bar' },
//!   video: { playbackRate: 1.25 },
//! });
//! ```

mod boot;
mod copy_link;
mod dom;
mod error;
mod headings;
mod keyboard;
mod modal;
mod nav;
mod navbar;
mod sidebar;
mod video;

pub use boot::{BootSummary, FeatureSummary, boot, boot_when_ready};
#[doc(hidden)]
pub use boot::run_on;
pub use copy_link::CopyLink;
pub use dom::{DocumentIds, Listener, Page};
pub use error::{ErrorCode, FolioError};
pub use folio_core::BootReport;
pub use headings::HeadingLinker;
pub use keyboard::EscapeDispatcher;
pub use modal::{CLOSE_CLASS, CONTENT_CLASS, ImageModal, MODAL_CLASS};
pub use nav::NavHighlighter;
pub use navbar::NavbarScroll;
pub use sidebar::SidebarController;
pub use video::VideoInitializer;

use folio_core::SiteConfig;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console and,
/// with the `auto-boot` feature, boots the page behaviors once the document
/// has been parsed.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        // Initialize console logging if the feature is enabled
        console_log::init_with_level(log::Level::Debug).ok();
    }

    #[cfg(feature = "auto-boot")]
    {
        if let Err(e) = boot_when_ready(SiteConfig::default()) {
            log::error!("Page behaviors failed to boot: {}", e);
        }
    }
}

/// Boot the page behaviors with a configuration object.
///
/// Missing fields keep their defaults; `undefined` or `null` means all
/// defaults. Returns a summary of what was wired up per feature.
#[wasm_bindgen(js_name = bootWithConfig)]
pub fn boot_with_config(config: JsValue) -> Result<JsValue, JsValue> {
    let config: SiteConfig = if config.is_undefined() || config.is_null() {
        SiteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| FolioError::config(format!("Invalid configuration object: {}", e)))?
    };

    let report = boot(config)?;
    serde_wasm_bindgen::to_value(&BootSummary::from(&report))
        .map_err(|e| JsValue::from(FolioError::new(ErrorCode::Unknown, e.to_string())))
}

/// Get the version of the folio-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
