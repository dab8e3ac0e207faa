//! Node count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search after `limit` decision nodes.
///
/// Dynamic programming counts one node per table row.
///
/// # Example
///
/// ```
/// use knapforge_solver::termination::{NodeCountTermination, Termination};
/// use knapforge_solver::SearchScope;
///
/// let limit = NodeCountTermination::new(2);
/// let mut scope = SearchScope::new();
/// scope.increment_node_count();
/// assert!(!limit.is_terminated(&scope));
/// scope.increment_node_count();
/// assert!(limit.is_terminated(&scope));
/// ```
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.nodes_explored() >= self.limit
    }
}
