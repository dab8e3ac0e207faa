//! Dynamic programming over remaining capacity.

use knapforge_core::Item;
use tracing::debug;

use super::SearchOutcome;
use crate::scope::SearchScope;
use crate::termination::Termination;

/// Number of cells `(n + 1) * (capacity + 1)` the table needs, or `None` on
/// overflow or negative capacity.
pub fn table_cells(item_count: usize, capacity: i64) -> Option<u64> {
    let columns = u64::try_from(capacity).ok()?.checked_add(1)?;
    let rows = u64::try_from(item_count).ok()?.checked_add(1)?;
    rows.checked_mul(columns)
}

/// Table-driven exact search.
///
/// `best[i][c]` is the most value obtainable from items `i..n` within
/// capacity `c`. The selection is rebuilt from item 0 onward, excluding an
/// item whenever the rest of the items can still reach the optimum. That
/// yields the same selection as the exclude-first depth-first search.
///
/// Each filled row counts as one search node for terminations. If the
/// search is terminated before the table is complete, the empty selection
/// is returned.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
/// use knapforge_solver::search::DynamicProgrammingSearch;
/// use knapforge_solver::{NoTermination, SearchScope};
///
/// let items = vec![
///     Item::new("A", 60, 10),
///     Item::new("B", 100, 20),
///     Item::new("C", 120, 30),
/// ];
/// let outcome = DynamicProgrammingSearch::new(&items, 50)
///     .run(&mut SearchScope::new(), &NoTermination);
/// assert_eq!(outcome.best_value, 220);
/// assert_eq!(outcome.best_indices, vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct DynamicProgrammingSearch<'a> {
    items: &'a [Item],
    capacity: i64,
}

impl<'a> DynamicProgrammingSearch<'a> {
    /// Creates a search over validated `items`. The caller checks the table
    /// size with [`table_cells`] first.
    pub fn new(items: &'a [Item], capacity: i64) -> Self {
        Self { items, capacity }
    }

    pub fn run<T>(&self, scope: &mut SearchScope, termination: &T) -> SearchOutcome
    where
        T: Termination + ?Sized,
    {
        let n = self.items.len();
        let width = self.capacity as usize + 1;
        let mut best = vec![0i64; (n + 1) * width];

        for i in (0..n).rev() {
            if termination.is_terminated(scope) {
                debug!(event = "dp_terminated", rows_left = i + 1);
                return SearchOutcome {
                    terminated: true,
                    ..SearchOutcome::default()
                };
            }
            scope.increment_node_count();

            let item = &self.items[i];
            let (row, next) = best[i * width..].split_at_mut(width);
            for c in 0..width {
                let exclude = next[c];
                row[c] = match usize::try_from(item.weight()) {
                    Ok(w) if w <= c => exclude.max(item.value() + next[c - w]),
                    _ => exclude,
                };
            }
        }

        let mut indices = Vec::new();
        let mut c = width - 1;
        for i in 0..n {
            let here = best[i * width + c];
            if best[(i + 1) * width + c] == here {
                continue;
            }
            indices.push(i);
            c -= self.items[i].weight() as usize;
        }

        let best_value = best[width - 1];
        scope.record_leaf();
        if best_value > 0 {
            scope.record_improvement(best_value);
        }
        SearchOutcome {
            best_value,
            best_indices: indices,
            terminated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounder::NoBounder;
    use crate::search::DepthFirstSearch;
    use crate::termination::{NoTermination, NodeCountTermination};

    fn run(items: &[Item], capacity: i64) -> SearchOutcome {
        DynamicProgrammingSearch::new(items, capacity).run(&mut SearchScope::new(), &NoTermination)
    }

    #[test]
    fn test_table_cells() {
        assert_eq!(table_cells(0, 0), Some(1));
        assert_eq!(table_cells(3, 50), Some(204));
        assert_eq!(table_cells(3, -1), None);
        assert_eq!(table_cells(usize::MAX, i64::MAX), None);
    }

    #[test]
    fn test_empty_items() {
        let outcome = run(&[], 10);
        assert_eq!(outcome.best_value, 0);
        assert!(outcome.best_indices.is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        let items = vec![Item::new("x", 10, 1), Item::new("free", 3, 0)];
        let outcome = run(&items, 0);
        assert_eq!(outcome.best_value, 3);
        assert_eq!(outcome.best_indices, vec![1]);
    }

    #[test]
    fn test_tie_break_matches_depth_first() {
        let items = vec![
            Item::new("a", 5, 4),
            Item::new("b", 5, 4),
            Item::new("c", 3, 2),
            Item::new("d", 2, 2),
            Item::new("e", 0, 0),
        ];
        for capacity in 0..=14 {
            let dfs = DepthFirstSearch::new(&items, capacity, NoBounder)
                .run(&mut SearchScope::new(), &NoTermination);
            assert_eq!(run(&items, capacity), dfs, "capacity {capacity}");
        }
    }

    #[test]
    fn test_oversized_items_are_skipped() {
        let items = vec![Item::new("X", 10, 100)];
        let outcome = run(&items, 5);
        assert_eq!(outcome.best_value, 0);
        assert!(outcome.best_indices.is_empty());
    }

    #[test]
    fn test_termination_returns_empty_selection() {
        let items = vec![Item::new("a", 1, 1), Item::new("b", 2, 1)];
        let mut scope = SearchScope::new();
        let outcome =
            DynamicProgrammingSearch::new(&items, 2).run(&mut scope, &NodeCountTermination::new(1));
        assert!(outcome.terminated);
        assert_eq!(outcome.best_value, 0);
        assert!(outcome.best_indices.is_empty());
        assert_eq!(scope.nodes_explored(), 1);
    }
}
