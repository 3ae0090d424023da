//! Navbar background selection from the scroll offset.

use crate::config::NavbarConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarBackground {
    Resting,
    Scrolled,
}

impl NavbarBackground {
    /// Recomputed on every scroll event; no state carries over.
    pub fn for_offset(scroll_y: f64, config: &NavbarConfig) -> Self {
        if scroll_y > config.scroll_threshold {
            NavbarBackground::Scrolled
        } else {
            NavbarBackground::Resting
        }
    }

    pub fn css<'a>(&self, config: &'a NavbarConfig) -> &'a str {
        match self {
            NavbarBackground::Resting => &config.resting_background,
            NavbarBackground::Scrolled => &config.scrolled_background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let config = NavbarConfig::default();
        assert_eq!(NavbarBackground::for_offset(0.0, &config), NavbarBackground::Resting);
        assert_eq!(NavbarBackground::for_offset(50.0, &config), NavbarBackground::Resting);
        assert_eq!(NavbarBackground::for_offset(50.5, &config), NavbarBackground::Scrolled);
    }

    #[test]
    fn test_css_values() {
        let config = NavbarConfig::default();
        assert_eq!(
            NavbarBackground::Scrolled.css(&config),
            "rgba(255, 255, 255, 0.98)"
        );
        assert_eq!(
            NavbarBackground::Resting.css(&config),
            "rgba(255, 255, 255, 0.95)"
        );
    }
}
