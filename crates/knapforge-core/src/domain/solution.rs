//! Knapsack solution.

use crate::error::{KnapsackError, Result};

use super::item::Item;

/// The best selection found by a solve.
///
/// `items` and `indices` are in input order. `total_value` is the sum of the
/// selected values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackSolution {
    total_value: i64,
    items: Vec<Item>,
    indices: Vec<usize>,
}

impl KnapsackSolution {
    /// The empty selection with value 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a solution from selected input positions.
    ///
    /// `indices` must be strictly increasing and in bounds for `items`.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_core::{Item, KnapsackSolution};
    ///
    /// let items = vec![
    ///     Item::new("A", 60, 10),
    ///     Item::new("B", 100, 20),
    ///     Item::new("C", 120, 30),
    /// ];
    /// let solution = KnapsackSolution::from_indices(&items, vec![1, 2]);
    /// assert_eq!(solution.total_value(), 220);
    /// assert_eq!(solution.total_weight(), 50);
    /// assert_eq!(solution.items()[0].name(), "B");
    /// ```
    pub fn from_indices(items: &[Item], indices: Vec<usize>) -> Self {
        let selected: Vec<Item> = indices.iter().map(|&i| items[i].clone()).collect();
        let total_value = selected.iter().map(Item::value).sum();
        Self {
            total_value,
            items: selected,
            indices,
        }
    }

    pub fn total_value(&self) -> i64 {
        self.total_value
    }

    /// Selected items in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Input positions of the selected items, strictly increasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn total_weight(&self) -> i64 {
        self.items.iter().map(Item::weight).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fraction of `capacity` used by the selection, or `None` when
    /// `capacity` is not positive.
    pub fn utilization(&self, capacity: i64) -> Option<f64> {
        if capacity <= 0 {
            None
        } else {
            Some(self.total_weight() as f64 / capacity as f64)
        }
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Verifies the solution invariants against the instance it came from.
    ///
    /// Checks that indices are strictly increasing and in bounds, that
    /// `items` mirrors `indices`, that the total weight fits in `capacity`
    /// and that `total_value` equals the sum of selected values.
    pub fn check_against(&self, items: &[Item], capacity: i64) -> Result<()> {
        if self.indices.len() != self.items.len() {
            return Err(KnapsackError::Internal(format!(
                "{} indices but {} items selected",
                self.indices.len(),
                self.items.len()
            )));
        }
        if self.indices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(KnapsackError::Internal(
                "selected indices are not in input order".to_string(),
            ));
        }
        for (&index, item) in self.indices.iter().zip(&self.items) {
            match items.get(index) {
                Some(original) if original == item => {}
                Some(_) => {
                    return Err(KnapsackError::Internal(format!(
                        "selected item at index {index} does not match the input"
                    )))
                }
                None => {
                    return Err(KnapsackError::Internal(format!(
                        "selected index {index} out of bounds for {} items",
                        items.len()
                    )))
                }
            }
        }
        let weight = self.total_weight();
        if weight > capacity {
            return Err(KnapsackError::Internal(format!(
                "selected weight {weight} exceeds capacity {capacity}"
            )));
        }
        let value: i64 = self.items.iter().map(Item::value).sum();
        if value != self.total_value {
            return Err(KnapsackError::Internal(format!(
                "total value {} differs from selected value sum {value}",
                self.total_value
            )));
        }
        Ok(())
    }
}
