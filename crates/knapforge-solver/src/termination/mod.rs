//! Termination conditions for cooperative cancellation.
//!
//! A termination is consulted before every decision node. When it fires,
//! the search stops and the best incumbent found so far is returned.

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Decides, before each decision node, whether a solve should give up and
/// return its incumbent.
pub trait Termination: Send + Sync + Debug {
    /// True if the search must stop now.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

/// Never stops the search; the default for [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    #[inline]
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        false
    }
}

impl<T: Termination> Termination for Option<T> {
    #[inline]
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        match self {
            Some(t) => t.is_terminated(scope),
            None => false,
        }
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    #[inline]
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (**self).is_terminated(scope)
    }
}

#[cfg(test)]
mod tests;
