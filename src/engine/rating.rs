use std::fmt::Debug;
use std::sync::Arc;

use crate::engine::storage::Preferences;

/// Host capability that asks the platform to show its review dialog.
///
/// Best effort: the platform may decide not to show anything.
pub trait ReviewHost: Send + Sync {
    fn request_review(&self);
}

/// Asks for a review at most once per installation.
#[derive(Clone)]
pub struct RatingGate {
    prefs: Preferences,
    host: Arc<dyn ReviewHost>,
}

impl Debug for RatingGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingGate").finish_non_exhaustive()
    }
}

impl RatingGate {
    pub fn new(prefs: Preferences, host: Arc<dyn ReviewHost>) -> Self {
        Self { prefs, host }
    }

    /// Requests a review unless one was already requested. Returns true if it asked.
    ///
    /// The flag is written after the request whether or not the platform showed anything.
    pub fn maybe_prompt(&self) -> bool {
        if self.prefs.rating_prompted() {
            return false;
        }

        self.host.request_review();
        self.prefs.mark_rating_prompted();
        log::info!("Rating: review requested");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::CountingReviewHost;
    use crate::storage::InMemoryPreferenceStore;

    #[test]
    fn prompts_at_most_once() {
        let prefs = Preferences::new(Arc::new(InMemoryPreferenceStore::new()));
        let host = Arc::new(CountingReviewHost::default());
        let gate = RatingGate::new(prefs.clone(), host.clone());

        assert!(gate.maybe_prompt());
        assert!(prefs.rating_prompted());
        assert!(!gate.maybe_prompt());
        assert!(prefs.rating_prompted());
        assert_eq!(host.count(), 1);
    }

    #[test]
    fn persisted_flag_blocks_prompt_on_next_launch() {
        let prefs = Preferences::new(Arc::new(InMemoryPreferenceStore::new()));
        prefs.mark_rating_prompted();

        let host = Arc::new(CountingReviewHost::default());
        let gate = RatingGate::new(prefs, host.clone());
        assert!(!gate.maybe_prompt());
        assert_eq!(host.count(), 0);
    }
}
