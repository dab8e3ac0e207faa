//! Cancellation from another thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search once a shared cancel flag is raised.
///
/// The flag is read with relaxed ordering at every decision node. A flag
/// raised before the solve starts stops it before the first node, leaving
/// the empty selection.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use knapforge_core::Item;
/// use knapforge_solver::termination::ExternalTermination;
/// use knapforge_solver::{SolveStatus, Solver};
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let solver = Solver::new().with_termination(ExternalTermination::new(Arc::clone(&cancel)));
///
/// cancel.store(true, Ordering::Relaxed);
/// let result = solver.solve(&[Item::new("lamp", 60, 10)], 50).unwrap();
/// assert_eq!(result.status, SolveStatus::Terminated);
/// assert!(result.solution.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// True once the flag has been raised.
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Termination for ExternalTermination {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        self.is_requested()
    }
}
