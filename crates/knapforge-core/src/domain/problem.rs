//! Problem instances and input validation.

use crate::error::{KnapsackError, Result};

use super::item::Item;
use super::solution::KnapsackSolution;

/// Aggregates computed while validating an instance.
///
/// Only items that fit in the capacity on their own are counted. Their
/// value sum is guaranteed to fit in `i64`, so the value of any feasible
/// selection does as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstanceTotals {
    /// Number of items with `weight <= capacity`.
    pub selectable_count: usize,
    /// Sum of the values of those items.
    pub selectable_value: i64,
}

/// Checks the caller contract for one solve.
///
/// Fails with [`KnapsackError::InvalidInput`] if `capacity` is negative, if
/// any item has a negative value or weight, or if the values of the items
/// that fit in `capacity` sum past `i64::MAX`. Items heavier than the
/// capacity can never be selected and do not take part in the sum.
///
/// # Example
///
/// ```
/// use knapforge_core::{validate_items, Item};
///
/// let items = vec![
///     Item::new("a", 1, 2),
///     Item::new("b", 3, 4),
///     Item::new("huge", 9, i64::MAX),
/// ];
/// let totals = validate_items(&items, 5).unwrap();
/// assert_eq!(totals.selectable_count, 2);
/// assert_eq!(totals.selectable_value, 4);
///
/// assert!(validate_items(&items, -1).is_err());
/// ```
pub fn validate_items(items: &[Item], capacity: i64) -> Result<InstanceTotals> {
    if capacity < 0 {
        return Err(KnapsackError::InvalidInput(format!(
            "capacity must be non-negative, got {capacity}"
        )));
    }

    let mut totals = InstanceTotals::default();
    for (index, item) in items.iter().enumerate() {
        if item.value() < 0 {
            return Err(KnapsackError::InvalidInput(format!(
                "item {index} '{}' has negative value {}",
                item.name(),
                item.value()
            )));
        }
        if item.weight() < 0 {
            return Err(KnapsackError::InvalidInput(format!(
                "item {index} '{}' has negative weight {}",
                item.name(),
                item.weight()
            )));
        }
        if !item.fits(capacity) {
            continue;
        }
        totals.selectable_count += 1;
        totals.selectable_value = totals
            .selectable_value
            .checked_add(item.value())
            .ok_or_else(|| {
                KnapsackError::InvalidInput(format!(
                    "values of items fitting capacity {capacity} overflow i64"
                ))
            })?;
    }
    Ok(totals)
}

/// An owned knapsack instance: a capacity and an ordered item list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    capacity: i64,
    items: Vec<Item>,
}

impl KnapsackProblem {
    pub fn new(capacity: i64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Appends an item, builder style.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all item weights, saturating on overflow.
    pub fn total_weight(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.weight()))
    }

    /// Sum of all item values, saturating on overflow.
    pub fn total_value(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.value()))
    }

    /// Validates the instance. See [`validate_items`].
    pub fn validate(&self) -> Result<InstanceTotals> {
        validate_items(&self.items, self.capacity)
    }

    /// Returns true if `solution` respects this instance's capacity and
    /// refers only to its items.
    pub fn is_feasible(&self, solution: &KnapsackSolution) -> bool {
        solution.check_against(&self.items, self.capacity).is_ok()
    }
}
