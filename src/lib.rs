//! # folio
//!
//! Interactive behavior for a static portfolio site.
//!
//! The browser side lives in `folio-wasm`; this crate re-exports the
//! platform-agnostic core for native tooling (site generators that want the
//! same heading identifiers, or that embed a validated configuration into the
//! pages they emit).

pub use folio_core::*;

use std::io::Read;

/// Reads and validates a site configuration from JSON.
pub fn read_config<R: Read>(reader: R) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    log::debug!("Loaded site configuration: {:?}", config.selectors);
    Ok(config)
}

/// Serializes a configuration for embedding in a page's boot script.
pub fn config_to_json(config: &SiteConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Plans identifiers for an outline of heading texts, the way the browser
/// assigns them to a page with no pre-existing identifiers.
pub fn plan_heading_ids<'a, I>(texts: I) -> Vec<HeadingId>
where
    I: IntoIterator<Item = &'a str>,
{
    let existing: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut allocator = HeadingIdAllocator::new();
    texts
        .into_iter()
        .enumerate()
        .map(|(position, text)| allocator.allocate(text, position, &existing))
        .collect()
}
