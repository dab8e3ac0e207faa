//! Brute-force enumeration of all subsets.

use knapforge_core::Item;

/// Largest instance the oracle accepts.
pub const MAX_ORACLE_ITEMS: usize = 20;

/// Best subset found by enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleAnswer {
    pub total_value: i64,
    pub indices: Vec<usize>,
}

/// Enumerates all `2^n` subsets and returns the best feasible one.
///
/// Subsets are visited as binary numbers with item 0 as the most significant
/// bit, which is the order an exclude-first depth-first search reaches its
/// leaves. Only strictly better subsets replace the current answer, so the
/// returned subset is the one such a search must report.
///
/// # Panics
///
/// Panics if there are more than [`MAX_ORACLE_ITEMS`] items.
pub fn brute_force(items: &[Item], capacity: i64) -> OracleAnswer {
    let n = items.len();
    assert!(n <= MAX_ORACLE_ITEMS, "oracle limited to {MAX_ORACLE_ITEMS} items");

    let mut best = OracleAnswer {
        total_value: 0,
        indices: Vec::new(),
    };
    for mask in 0u32..(1u32 << n) {
        let chosen: Vec<usize> = (0..n).filter(|&i| mask & (1 << (n - 1 - i)) != 0).collect();
        let weight: i64 = chosen.iter().map(|&i| items[i].weight()).sum();
        if weight > capacity {
            continue;
        }
        let value: i64 = chosen.iter().map(|&i| items[i].value()).sum();
        if value > best.total_value {
            best = OracleAnswer {
                total_value: value,
                indices: chosen,
            };
        }
    }
    best
}
