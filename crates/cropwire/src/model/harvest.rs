//! Harvest tables.
//!
//! A recipe's harvest table is an ordered list of entries, each an item
//! with an independent drop chance and a roll-count range.

use rand::Rng;

use crate::model::Key;

/// One possible harvest output.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestEntry {
    /// The item produced.
    pub item: Key,
    /// Chance for this entry to drop, per roll, in `0.0..=1.0`.
    pub chance: f32,
    /// Minimum number of rolls.
    pub min_rolls: i32,
    /// Maximum number of rolls (>= `min_rolls`).
    pub max_rolls: i32,
}

impl HarvestEntry {
    /// Creates an entry dropping one item with the given chance.
    pub fn single(item: Key, chance: f32) -> HarvestEntry {
        HarvestEntry {
            item,
            chance,
            min_rolls: 1,
            max_rolls: 1,
        }
    }

    /// Rolls this entry, returning how many items drop.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        let rolls = if self.min_rolls >= self.max_rolls {
            self.min_rolls
        } else {
            rng.random_range(self.min_rolls..=self.max_rolls)
        };
        (0..rolls.max(0))
            .filter(|_| rng.random::<f32>() < self.chance)
            .count() as u32
    }
}
