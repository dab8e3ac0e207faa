//! Knapsack item.

use std::fmt;

/// A candidate item with a value and a weight.
///
/// Names are informational and need not be unique; solvers identify items
/// by their position in the input slice.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
///
/// let item = Item::new("lamp", 60, 10);
/// assert_eq!(item.name(), "lamp");
/// assert!(item.fits(10));
/// assert!(!item.fits(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    value: i64,
    weight: i64,
}

impl Item {
    /// Creates a new item. Signs are checked when the item is solved, not here.
    pub fn new(name: impl Into<String>, value: i64, weight: i64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Returns true if the item alone fits in `capacity`.
    pub fn fits(&self, capacity: i64) -> bool {
        self.weight <= capacity
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (value {}, weight {})", self.name, self.value, self.weight)
    }
}
