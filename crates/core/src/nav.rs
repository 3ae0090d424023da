//! Current-page detection for navigation highlighting.

use crate::config::NavConfig;

/// Resolves the page name the navigation should highlight.
///
/// Takes the last `/`-separated segment of `pathname`; an empty segment
/// (root or trailing slash) means the home page.
pub fn current_page<'a>(pathname: &'a str, config: &'a NavConfig) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => &config.home_page,
    }
}

/// Whether a navigation link with the given `href` points at `current`.
///
/// The home page link also matches when the index document is served.
pub fn is_active_link(href: Option<&str>, current: &str, config: &NavConfig) -> bool {
    let Some(href) = href else {
        return false;
    };
    href == current || (current == config.index_page && href == config.home_page)
}
