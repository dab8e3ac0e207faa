//! Seeded random instances.

use knapforge_core::Item;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A generated instance.
#[derive(Debug, Clone)]
pub struct GeneratedInstance {
    pub items: Vec<Item>,
    pub capacity: i64,
}

/// Deterministic generator of small knapsack instances.
///
/// Capacity is drawn between zero and the total weight, so generated
/// instances range from empty to unconstrained.
#[derive(Debug)]
pub struct InstanceGenerator {
    rng: ChaCha8Rng,
    max_value: i64,
    max_weight: i64,
}

impl InstanceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_value: 30,
            max_weight: 15,
        }
    }

    /// Limits drawn values to `0..=max_value`. Small ranges produce many ties.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Limits drawn weights to `0..=max_weight`.
    pub fn with_max_weight(mut self, max_weight: i64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Draws an instance with exactly `item_count` items.
    pub fn instance(&mut self, item_count: usize) -> GeneratedInstance {
        let items: Vec<Item> = (0..item_count)
            .map(|i| {
                let value = self.rng.random_range(0..=self.max_value);
                let weight = self.rng.random_range(0..=self.max_weight);
                Item::new(format!("item-{i}"), value, weight)
            })
            .collect();
        let total_weight: i64 = items.iter().map(Item::weight).sum();
        let capacity = self.rng.random_range(0..=total_weight);
        GeneratedInstance { items, capacity }
    }
}
