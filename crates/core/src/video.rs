//! Startup playback settings for page videos.

use crate::config::VideoConfig;

/// Values applied to each video before autoplay is attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub rate: f64,
    pub muted: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self::from(&VideoConfig::default())
    }
}

impl From<&VideoConfig> for PlaybackSettings {
    fn from(config: &VideoConfig) -> Self {
        Self {
            rate: config.playback_rate,
            muted: config.muted,
        }
    }
}

/// Result of the initial autoplay attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoplayOutcome {
    Playing,
    /// The browser refused; playback waits for a click on the video.
    Deferred { reason: String },
}

impl AutoplayOutcome {
    pub fn needs_click_fallback(&self) -> bool {
        matches!(self, AutoplayOutcome::Deferred { .. })
    }
}
