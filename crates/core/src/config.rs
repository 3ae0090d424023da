//! Site configuration.
//!
//! Every field has a default matching the portfolio markup, so an empty JSON
//! object (`{}`) is a valid configuration. Hosts only override what differs.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Class name toggled on navigation links, the sidebar parts and the hamburger.
pub const ACTIVE_CLASS: &str = "active";

/// Top-level configuration for all page behaviors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub nav: NavConfig,
    pub copy_link: CopyLinkConfig,
    pub video: VideoConfig,
    pub navbar: NavbarConfig,
}

/// CSS selectors for the elements the behaviors look up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub headings: String,
    pub nav_links: String,
    pub sidebar_links: String,
    pub hamburger: String,
    pub sidebar: String,
    pub sidebar_overlay: String,
    pub navbar: String,
    pub clickable_images: String,
    pub videos: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            headings: "h1, h2, h3, h4, h5, h6".to_string(),
            nav_links: ".nav-links a".to_string(),
            sidebar_links: ".sidebar-links a".to_string(),
            hamburger: ".hamburger".to_string(),
            sidebar: ".sidebar".to_string(),
            sidebar_overlay: ".sidebar-overlay".to_string(),
            navbar: ".navbar".to_string(),
            clickable_images: ".clickable-image".to_string(),
            videos: "video".to_string(),
        }
    }
}

/// Page-name rules for the navigation highlighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Page assumed when the location path ends in `/` or is empty.
    pub home_page: String,
    /// Document that is served as the home page.
    pub index_page: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home_page: "home.html".to_string(),
            index_page: "index.html".to_string(),
        }
    }
}

/// Glyphs, tooltips and timing of the heading copy-link control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyLinkConfig {
    pub class_name: String,
    pub idle_glyph: String,
    pub idle_title: String,
    pub copied_glyph: String,
    pub copied_title: String,
    pub failed_glyph: String,
    pub failed_title: String,
    pub revert_after_ms: u32,
}

impl Default for CopyLinkConfig {
    fn default() -> Self {
        Self {
            class_name: "copy-link".to_string(),
            idle_glyph: "⚓".to_string(),
            idle_title: "Copy link to this section".to_string(),
            copied_glyph: "✅".to_string(),
            copied_title: "Link copied!".to_string(),
            failed_glyph: "❌".to_string(),
            failed_title: "Click to copy manually".to_string(),
            revert_after_ms: 2000,
        }
    }
}

/// Playback settings applied to every video at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoConfig {
    pub playback_rate: f64,
    pub muted: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            playback_rate: 1.5,
            muted: true,
        }
    }
}

/// Navbar background switching on scroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavbarConfig {
    /// Vertical offset in CSS pixels; strictly greater means "scrolled".
    pub scroll_threshold: f64,
    pub resting_background: String,
    pub scrolled_background: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            resting_background: "rgba(255, 255, 255, 0.95)".to_string(),
            scrolled_background: "rgba(255, 255, 255, 0.98)".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the behaviors rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.selectors;
        for (name, value) in [
            ("headings", &s.headings),
            ("navLinks", &s.nav_links),
            ("sidebarLinks", &s.sidebar_links),
            ("hamburger", &s.hamburger),
            ("sidebar", &s.sidebar),
            ("sidebarOverlay", &s.sidebar_overlay),
            ("navbar", &s.navbar),
            ("clickableImages", &s.clickable_images),
            ("videos", &s.videos),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptySelector(name));
            }
        }

        if self.nav.home_page.is_empty() {
            return Err(ConfigError::EmptyValue("nav.homePage"));
        }
        if self.copy_link.class_name.trim().is_empty() {
            return Err(ConfigError::EmptyValue("copyLink.className"));
        }

        let rate = self.video.playback_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::InvalidPlaybackRate(rate));
        }

        let threshold = self.navbar.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidScrollThreshold(threshold));
        }

        Ok(())
    }
}
