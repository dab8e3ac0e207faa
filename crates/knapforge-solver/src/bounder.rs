//! Value bounders for branch-and-bound pruning.
//!
//! A bounder estimates the most value still obtainable from items
//! `index..n` given the remaining capacity. If the running value plus this
//! optimistic bound cannot beat the incumbent, the subtree is skipped.
//! Because the incumbent is only replaced on a strictly greater value, a
//! subtree whose bound ties the incumbent can never change the result, so
//! pruning keeps both the optimum and the tie-break of the unpruned search.

use std::cmp::Ordering;
use std::fmt::Debug;

use knapforge_config::BounderType;
use knapforge_core::Item;

/// Calculates optimistic value bounds for search pruning.
pub trait ValueBounder: Send + Sync + Debug {
    /// Upper bound on the value obtainable from items `index..` within
    /// `remaining_capacity`.
    ///
    /// Returns `None` if no bound can be computed, which disables pruning
    /// at this node.
    fn optimistic_bound(&self, index: usize, remaining_capacity: i64) -> Option<i64>;
}

/// A bounder that never bounds. Searching with it is the unpruned baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBounder;

impl ValueBounder for NoBounder {
    fn optimistic_bound(&self, _index: usize, _remaining_capacity: i64) -> Option<i64> {
        None
    }
}

/// Bounds by the total value of all remaining items, saturating at
/// `i64::MAX`.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
/// use knapforge_solver::bounder::{RemainingValueBounder, ValueBounder};
///
/// let items = vec![Item::new("a", 5, 1), Item::new("b", 7, 1)];
/// let bounder = RemainingValueBounder::new(&items);
/// assert_eq!(bounder.optimistic_bound(0, 0), Some(12));
/// assert_eq!(bounder.optimistic_bound(1, 0), Some(7));
/// assert_eq!(bounder.optimistic_bound(2, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct RemainingValueBounder {
    // suffix[i] = sum of values of items i..n
    suffix: Vec<i64>,
}

impl RemainingValueBounder {
    pub fn new(items: &[Item]) -> Self {
        let mut suffix = vec![0i64; items.len() + 1];
        for (i, item) in items.iter().enumerate().rev() {
            suffix[i] = suffix[i + 1].saturating_add(item.value());
        }
        Self { suffix }
    }
}

impl ValueBounder for RemainingValueBounder {
    #[inline]
    fn optimistic_bound(&self, index: usize, _remaining_capacity: i64) -> Option<i64> {
        self.suffix.get(index).copied()
    }
}

/// Linear relaxation bound.
///
/// Fills the remaining capacity with the remaining items in decreasing
/// value/weight order, taking a fraction of the first item that does not
/// fit. Zero-weight items come first. The fractional part is floored, which
/// keeps the bound valid for integer values.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
/// use knapforge_solver::bounder::{FractionalBounder, ValueBounder};
///
/// let items = vec![
///     Item::new("A", 60, 10),
///     Item::new("B", 100, 20),
///     Item::new("C", 120, 30),
/// ];
/// let bounder = FractionalBounder::new(&items);
/// // A and B fit whole, then 20/30 of C: 60 + 100 + 80
/// assert_eq!(bounder.optimistic_bound(0, 50), Some(240));
/// // Only B and C remain: B whole, then 30/30 of C
/// assert_eq!(bounder.optimistic_bound(1, 50), Some(220));
/// ```
#[derive(Debug, Clone)]
pub struct FractionalBounder {
    // Item positions by decreasing value density, ties by position.
    order: Vec<usize>,
    values: Vec<i64>,
    weights: Vec<i64>,
}

impl FractionalBounder {
    pub fn new(items: &[Item]) -> Self {
        let values: Vec<i64> = items.iter().map(Item::value).collect();
        let weights: Vec<i64> = items.iter().map(Item::weight).collect();
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| {
            compare_density(values[a], weights[a], values[b], weights[b]).then(a.cmp(&b))
        });
        Self {
            order,
            values,
            weights,
        }
    }
}

/// Orders `(value, weight)` pairs by decreasing value per unit of weight.
fn compare_density(va: i64, wa: i64, vb: i64, wb: i64) -> Ordering {
    match (wa == 0, wb == 0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            let lhs = va as i128 * wb as i128;
            let rhs = vb as i128 * wa as i128;
            rhs.cmp(&lhs)
        }
    }
}

impl ValueBounder for FractionalBounder {
    fn optimistic_bound(&self, index: usize, remaining_capacity: i64) -> Option<i64> {
        let mut capacity = remaining_capacity;
        let mut bound: i64 = 0;
        for &j in &self.order {
            if j < index {
                continue;
            }
            let (value, weight) = (self.values[j], self.weights[j]);
            if weight <= capacity {
                capacity -= weight;
                bound = bound.saturating_add(value);
            } else {
                // Below `value` because `capacity < weight`.
                let partial = value as i128 * capacity as i128 / weight as i128;
                bound = bound.saturating_add(partial as i64);
                break;
            }
        }
        Some(bound)
    }
}

/// Enum dispatch over the configurable bounders.
#[derive(Debug, Clone)]
pub enum AnyBounder {
    None(NoBounder),
    RemainingValue(RemainingValueBounder),
    Fractional(FractionalBounder),
}

impl AnyBounder {
    /// Builds the bounder selected by `bounder_type` for `items`.
    pub fn build(bounder_type: BounderType, items: &[Item]) -> Self {
        match bounder_type {
            BounderType::None => AnyBounder::None(NoBounder),
            BounderType::RemainingValue => {
                AnyBounder::RemainingValue(RemainingValueBounder::new(items))
            }
            BounderType::Fractional => AnyBounder::Fractional(FractionalBounder::new(items)),
        }
    }

    pub fn bounder_type(&self) -> BounderType {
        match self {
            AnyBounder::None(_) => BounderType::None,
            AnyBounder::RemainingValue(_) => BounderType::RemainingValue,
            AnyBounder::Fractional(_) => BounderType::Fractional,
        }
    }
}

impl ValueBounder for AnyBounder {
    #[inline]
    fn optimistic_bound(&self, index: usize, remaining_capacity: i64) -> Option<i64> {
        match self {
            AnyBounder::None(b) => b.optimistic_bound(index, remaining_capacity),
            AnyBounder::RemainingValue(b) => b.optimistic_bound(index, remaining_capacity),
            AnyBounder::Fractional(b) => b.optimistic_bound(index, remaining_capacity),
        }
    }
}
