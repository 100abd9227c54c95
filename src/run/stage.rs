//! Audit lifecycle tracking.

use log::{debug, warn};
use strum_macros::Display;

/// Stage of a single audit.
///
/// `Idle -> Fetching -> Scoring -> Synthesizing -> Complete`; `Failed` is
/// reachable from `Fetching` only since scoring and synthesis cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AuditStage {
    Idle,
    Fetching,
    Scoring,
    Synthesizing,
    Complete,
    Failed,
}

impl AuditStage {
    pub fn can_transition_to(self, next: AuditStage) -> bool {
        matches!(
            (self, next),
            (AuditStage::Idle, AuditStage::Fetching)
                | (AuditStage::Fetching, AuditStage::Scoring)
                | (AuditStage::Fetching, AuditStage::Failed)
                | (AuditStage::Scoring, AuditStage::Synthesizing)
                | (AuditStage::Synthesizing, AuditStage::Complete)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AuditStage::Complete | AuditStage::Failed)
    }
}

/// Tracks and logs the stage of one audit.
#[derive(Debug)]
pub(crate) struct StageTracker<'a> {
    url: &'a str,
    stage: AuditStage,
}

impl<'a> StageTracker<'a> {
    pub(crate) fn new(url: &'a str) -> Self {
        Self {
            url,
            stage: AuditStage::Idle,
        }
    }

    /// Tracker for content that was fetched elsewhere.
    pub(crate) fn fetched(url: &'a str) -> Self {
        Self {
            url,
            stage: AuditStage::Fetching,
        }
    }

    #[cfg(test)]
    pub(crate) fn stage(&self) -> AuditStage {
        self.stage
    }

    pub(crate) fn advance(&mut self, next: AuditStage) {
        if !self.stage.can_transition_to(next) {
            warn!(
                "Unexpected audit stage transition for {}: {} -> {}",
                self.url, self.stage, next
            );
        }
        debug!("Audit of {}: {} -> {}", self.url, self.stage, next);
        self.stage = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            AuditStage::Idle,
            AuditStage::Fetching,
            AuditStage::Scoring,
            AuditStage::Synthesizing,
            AuditStage::Complete,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_failure_only_from_fetching() {
        assert!(AuditStage::Fetching.can_transition_to(AuditStage::Failed));
        assert!(!AuditStage::Idle.can_transition_to(AuditStage::Failed));
        assert!(!AuditStage::Scoring.can_transition_to(AuditStage::Failed));
        assert!(!AuditStage::Synthesizing.can_transition_to(AuditStage::Failed));
    }

    #[test]
    fn test_terminal_stages_have_no_exits() {
        for next in [
            AuditStage::Idle,
            AuditStage::Fetching,
            AuditStage::Scoring,
            AuditStage::Synthesizing,
            AuditStage::Complete,
            AuditStage::Failed,
        ] {
            assert!(!AuditStage::Complete.can_transition_to(next));
            assert!(!AuditStage::Failed.can_transition_to(next));
        }
        assert!(AuditStage::Complete.is_terminal());
        assert!(!AuditStage::Scoring.is_terminal());
    }

    #[test]
    fn test_tracker_advances() {
        let mut tracker = StageTracker::new("https://example.com/");
        assert_eq!(tracker.stage(), AuditStage::Idle);
        tracker.advance(AuditStage::Fetching);
        tracker.advance(AuditStage::Failed);
        assert_eq!(tracker.stage(), AuditStage::Failed);

        let tracker = StageTracker::fetched("https://example.com/");
        assert_eq!(tracker.stage(), AuditStage::Fetching);
    }
}
