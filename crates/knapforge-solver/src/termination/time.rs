//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search once the solve has run for `limit`.
///
/// Checked at every decision node, so the overshoot is one node.
///
/// # Example
///
/// ```
/// use knapforge_solver::termination::{Termination, TimeTermination};
/// use knapforge_solver::SearchScope;
///
/// let scope = SearchScope::new();
/// assert!(!TimeTermination::seconds(30).is_terminated(&scope));
/// assert!(TimeTermination::millis(0).is_terminated(&scope));
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.elapsed() >= self.limit
    }
}
