//! Feedback states of the heading copy-link control.

use crate::config::CopyLinkConfig;

/// Visible state of a copy-link control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLinkState {
    #[default]
    Idle,
    /// The link was written to the clipboard; reverts after a delay.
    Copied,
    /// The clipboard was unavailable or rejected the write; sticky.
    Failed,
}

/// Glyph and tooltip shown for a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyLinkFace<'a> {
    pub glyph: &'a str,
    pub title: &'a str,
}

impl CopyLinkState {
    pub fn face<'a>(&self, config: &'a CopyLinkConfig) -> CopyLinkFace<'a> {
        match self {
            CopyLinkState::Idle => CopyLinkFace {
                glyph: &config.idle_glyph,
                title: &config.idle_title,
            },
            CopyLinkState::Copied => CopyLinkFace {
                glyph: &config.copied_glyph,
                title: &config.copied_title,
            },
            CopyLinkState::Failed => CopyLinkFace {
                glyph: &config.failed_glyph,
                title: &config.failed_title,
            },
        }
    }
}

/// Ticket handed out on a successful copy, redeemed when the revert timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

/// Tracks the state of one copy-link control across overlapping clicks.
///
/// Every success or failure bumps a generation counter. A revert only applies
/// when its ticket belongs to the latest transition, so an old timer can
/// neither undo a newer failure nor cut a newer confirmation short.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    state: CopyLinkState,
    generation: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CopyLinkState {
        self.state
    }

    /// Records a successful clipboard write.
    pub fn copied(&mut self) -> RevertTicket {
        self.generation += 1;
        self.state = CopyLinkState::Copied;
        RevertTicket(self.generation)
    }

    /// Records a failed clipboard write.
    pub fn failed(&mut self) {
        self.generation += 1;
        self.state = CopyLinkState::Failed;
    }

    /// Returns to `Idle` if `ticket` is still current. Returns whether it did.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.generation || self.state != CopyLinkState::Copied {
            return false;
        }
        self.state = CopyLinkState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_then_revert() {
        let config = CopyLinkConfig::default();
        let mut feedback = CopyFeedback::new();
        assert_eq!(feedback.state().face(&config).glyph, "⚓");

        let ticket = feedback.copied();
        let face = feedback.state().face(&config);
        assert_eq!(face.glyph, "✅");
        assert_eq!(face.title, "Link copied!");

        assert!(feedback.revert(ticket));
        let face = feedback.state().face(&config);
        assert_eq!(face.glyph, "⚓");
        assert_eq!(face.title, "Copy link to this section");
    }

    #[test]
    fn test_failure_is_sticky() {
        let config = CopyLinkConfig::default();
        let mut feedback = CopyFeedback::new();

        let ticket = feedback.copied();
        feedback.failed();
        assert!(!feedback.revert(ticket));

        let face = feedback.state().face(&config);
        assert_eq!(face.glyph, "❌");
        assert_eq!(face.title, "Click to copy manually");
    }

    #[test]
    fn test_stale_ticket_does_not_cut_newer_confirmation() {
        let mut feedback = CopyFeedback::new();
        let first = feedback.copied();
        let second = feedback.copied();

        assert!(!feedback.revert(first));
        assert_eq!(feedback.state(), CopyLinkState::Copied);
        assert!(feedback.revert(second));
        assert_eq!(feedback.state(), CopyLinkState::Idle);
    }

    #[test]
    fn test_retry_after_failure_can_succeed() {
        let mut feedback = CopyFeedback::new();
        feedback.failed();
        let ticket = feedback.copied();
        assert_eq!(feedback.state(), CopyLinkState::Copied);
        assert!(feedback.revert(ticket));
    }
}
