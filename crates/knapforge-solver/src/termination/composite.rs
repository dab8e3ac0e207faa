//! Composite termination conditions.

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search as soon as any of a tuple of terminations fires.
///
/// `Solver` uses this to combine a caller's termination with the time and
/// node limits of its configuration. Tuples of up to five members are
/// supported, and members may be `Option`s or references.
///
/// # Examples
///
/// ```
/// use knapforge_solver::termination::{
///     NodeCountTermination, OrTermination, Termination, TimeTermination,
/// };
/// use knapforge_solver::SearchScope;
///
/// let node_limit: Option<NodeCountTermination> = None;
/// let limits = OrTermination::new((TimeTermination::seconds(10), node_limit));
///
/// let mut scope = SearchScope::new();
/// scope.increment_node_count();
/// assert!(!limits.is_terminated(&scope));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &SearchScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
