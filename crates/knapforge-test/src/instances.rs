//! Hand-made instances with known answers.

use knapforge_core::Item;

/// Three items whose optimum at capacity 50 is B + C = 220.
pub fn classic_items() -> Vec<Item> {
    vec![
        Item::new("A", 60, 10),
        Item::new("B", 100, 20),
        Item::new("C", 120, 30),
    ]
}

/// Capacity matching [`classic_items`].
pub fn classic_capacity() -> i64 {
    50
}

/// A single item heavier than capacity 5.
pub fn infeasible_single() -> Vec<Item> {
    vec![Item::new("X", 10, 100)]
}

/// Items with several equal-valued optimal subsets at capacity 6.
///
/// `{a, b}`, `{a, c}` and `{b, c}` all weigh 6 and are worth 10, `{d}` is
/// worth 10 on its own. Exclude-first order reaches `{d}` first.
pub fn tied_items() -> Vec<Item> {
    vec![
        Item::new("a", 5, 3),
        Item::new("b", 5, 3),
        Item::new("c", 5, 3),
        Item::new("d", 10, 6),
    ]
}
