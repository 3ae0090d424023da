//! Boot sequencing and reporting.
//!
//! Heading identifiers are assigned first; every other feature then runs
//! inside its own failure boundary so one broken feature cannot keep the rest
//! from initialising.

use crate::error::BehaviorError;
use std::fmt;

/// Independently initialised page features, in boot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    HeadingLinks,
    NavHighlight,
    Videos,
    NavbarScroll,
    ImageModal,
    MobileMenu,
    EscapeKey,
}

impl Feature {
    pub const BOOT_ORDER: [Feature; 7] = [
        Feature::HeadingLinks,
        Feature::NavHighlight,
        Feature::Videos,
        Feature::NavbarScroll,
        Feature::ImageModal,
        Feature::MobileMenu,
        Feature::EscapeKey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::HeadingLinks => "heading-links",
            Feature::NavHighlight => "nav-highlight",
            Feature::Videos => "videos",
            Feature::NavbarScroll => "navbar-scroll",
            Feature::ImageModal => "image-modal",
            Feature::MobileMenu => "mobile-menu",
            Feature::EscapeKey => "escape-key",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of initialising one feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureStatus {
    /// Initialised; `elements` is how many page elements it wired up.
    Ready { elements: usize },
    /// Required elements are missing, so the feature stays off.
    Disabled { reason: String },
    Failed { error: BehaviorError },
}

impl FeatureStatus {
    pub fn ready(elements: usize) -> Self {
        FeatureStatus::Ready { elements }
    }

    pub fn disabled(reason: impl Into<String>) -> Self {
        FeatureStatus::Disabled {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FeatureStatus::Ready { .. })
    }
}

/// Per-feature results of one boot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootReport {
    entries: Vec<(Feature, FeatureStatus)>,
}

impl BootReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `init` for `feature`, recording its status. Errors are logged and
    /// recorded, never propagated.
    pub fn run<F>(&mut self, feature: Feature, init: F)
    where
        F: FnOnce() -> Result<FeatureStatus, BehaviorError>,
    {
        let status = match init() {
            Ok(status) => {
                match &status {
                    FeatureStatus::Disabled { reason } => {
                        log::debug!("Feature '{}' disabled: {}", feature, reason)
                    }
                    _ => log::debug!("Feature '{}' ready", feature),
                }
                status
            }
            Err(error) => {
                log::error!("Feature '{}' failed to initialise: {}", feature, error);
                FeatureStatus::Failed { error }
            }
        };
        self.entries.push((feature, status));
    }

    pub fn status(&self, feature: Feature) -> Option<&FeatureStatus> {
        self.entries
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, status)| status)
    }

    pub fn entries(&self) -> &[(Feature, FeatureStatus)] {
        &self.entries
    }

    pub fn failures(&self) -> impl Iterator<Item = (Feature, &BehaviorError)> {
        self.entries.iter().filter_map(|(f, status)| match status {
            FeatureStatus::Failed { error } => Some((*f, error)),
            _ => None,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// One-line summary for the console, e.g. `videos=ready(2) mobile-menu=disabled`.
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|(feature, status)| match status {
                FeatureStatus::Ready { elements } => format!("{}=ready({})", feature, elements),
                FeatureStatus::Disabled { .. } => format!("{}=disabled", feature),
                FeatureStatus::Failed { .. } => format!("{}=failed", feature),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
