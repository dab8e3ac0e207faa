//! Depth-first include/exclude search.

use knapforge_core::{Item, Selection};
use tracing::{debug, trace};

use super::SearchOutcome;
use crate::bounder::ValueBounder;
use crate::scope::SearchScope;
use crate::termination::Termination;

/// Pending work on the explicit search stack.
#[derive(Debug, Clone, Copy)]
enum Action {
    /// Decide item `index` with the given running totals.
    Visit { index: usize, weight: i64, value: i64 },
    /// Take item `index` and descend.
    Include { index: usize, weight: i64, value: i64 },
    /// Backtrack out of an include branch.
    Unselect,
}

/// Exhaustive binary decision search over the items in input order.
///
/// The exclude branch of every item is explored before its include branch
/// and the incumbent is replaced only on a strictly greater value, so the
/// first optimal selection in that order wins. An item is only included if
/// it fits in the remaining capacity.
///
/// The recursion is unrolled onto an explicit stack: every include leaves
/// one `Unselect` marker behind, so the stack never holds more than
/// `2 * n + 1` actions and deep instances cannot overflow the call stack.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
/// use knapforge_solver::bounder::NoBounder;
/// use knapforge_solver::search::DepthFirstSearch;
/// use knapforge_solver::{NoTermination, SearchScope};
///
/// let items = vec![
///     Item::new("A", 60, 10),
///     Item::new("B", 100, 20),
///     Item::new("C", 120, 30),
/// ];
/// let search = DepthFirstSearch::new(&items, 50, NoBounder);
/// let outcome = search.run(&mut SearchScope::new(), &NoTermination);
/// assert_eq!(outcome.best_value, 220);
/// assert_eq!(outcome.best_indices, vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct DepthFirstSearch<'a, B> {
    items: &'a [Item],
    capacity: i64,
    bounder: B,
}

impl<'a, B: ValueBounder> DepthFirstSearch<'a, B> {
    /// Creates a search over validated `items`.
    pub fn new(items: &'a [Item], capacity: i64, bounder: B) -> Self {
        Self {
            items,
            capacity,
            bounder,
        }
    }

    /// Runs the search to completion or until `termination` fires.
    pub fn run<T>(&self, scope: &mut SearchScope, termination: &T) -> SearchOutcome
    where
        T: Termination + ?Sized,
    {
        let n = self.items.len();
        let mut selection = Selection::with_capacity(n);
        let mut best_value: i64 = 0;
        let mut best_indices: Vec<usize> = Vec::new();
        let mut terminated = false;

        let mut stack: Vec<Action> = Vec::with_capacity(2 * n + 2);
        stack.push(Action::Visit {
            index: 0,
            weight: 0,
            value: 0,
        });

        while let Some(action) = stack.pop() {
            match action {
                Action::Unselect => {
                    selection.pop();
                }
                Action::Include {
                    index,
                    weight,
                    value,
                } => {
                    let item = &self.items[index];
                    selection.push(index);
                    stack.push(Action::Unselect);
                    stack.push(Action::Visit {
                        index: index + 1,
                        weight: weight + item.weight(),
                        value: value + item.value(),
                    });
                }
                Action::Visit {
                    index,
                    weight,
                    value,
                } => {
                    if termination.is_terminated(scope) {
                        terminated = true;
                        break;
                    }
                    scope.increment_node_count();

                    if index == n {
                        scope.record_leaf();
                        if value > best_value {
                            best_value = value;
                            selection.copy_into(&mut best_indices);
                            scope.record_improvement(value);
                            debug!(
                                event = "new_best",
                                value = value,
                                weight = weight,
                                items = best_indices.len(),
                                nodes = scope.nodes_explored(),
                            );
                        }
                        continue;
                    }

                    let remaining = self.capacity - weight;
                    if let Some(bound) = self.bounder.optimistic_bound(index, remaining) {
                        if value.saturating_add(bound) <= best_value {
                            scope.record_prune();
                            trace!(
                                event = "prune",
                                depth = index,
                                value = value,
                                bound = bound,
                                best = best_value,
                            );
                            continue;
                        }
                    }

                    // LIFO: the exclude branch is pushed last so it runs first.
                    let fits = weight
                        .checked_add(self.items[index].weight())
                        .is_some_and(|w| w <= self.capacity);
                    if fits {
                        stack.push(Action::Include {
                            index,
                            weight,
                            value,
                        });
                    }
                    stack.push(Action::Visit {
                        index: index + 1,
                        weight,
                        value,
                    });
                }
            }
        }

        SearchOutcome {
            best_value,
            best_indices,
            terminated,
        }
    }
}
