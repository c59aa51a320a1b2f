// Per-screen view-models. No rendering here; any front end drives them.
pub mod analytics;
pub mod dashboard;
pub mod submission;
pub mod upvote;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

pub use self::analytics::{AnalyticsState, AnalyticsViewModel};
pub use self::dashboard::{DashboardState, DashboardViewModel, LoadOutcome, LoadPhase};
pub use self::submission::{SubmissionForm, SubmitOutcome};
pub use self::upvote::{UpvoteHandler, UpvoteOutcome};

/// Something that can re-run its load pipeline after a mutation
#[async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self);
}

/// Blocks re-entry into an operation while one call is in flight
#[derive(Debug, Default)]
pub struct InFlight(Mutex<()>);

/// Held for the whole call; dropping it on any exit path frees the slot
pub type InFlightGuard<'a> = MutexGuard<'a, ()>;

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` if another call already holds it
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.0.try_lock().ok()
    }

    pub fn is_active(&self) -> bool {
        self.0.try_lock().is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_blocks_second_acquire_until_dropped() {
        let flag = InFlight::new();
        assert!(!flag.is_active());

        let guard = flag.try_acquire().expect("first acquire");
        assert!(flag.is_active());
        assert!(flag.try_acquire().is_none());

        drop(guard);
        assert!(!flag.is_active());
        assert!(flag.try_acquire().is_some());
    }

    #[test]
    fn guard_released_on_early_return() {
        fn bail(flag: &InFlight) -> Result<(), ()> {
            let _guard = flag.try_acquire().ok_or(())?;
            Err(())
        }

        let flag = InFlight::new();
        assert!(bail(&flag).is_err());
        assert!(!flag.is_active());
    }
}
