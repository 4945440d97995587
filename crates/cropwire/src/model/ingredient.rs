//! Seed matchers.
//!
//! An ingredient is a predicate over item keys and may match more than one
//! concrete item: either an explicit list of items, or every item carried
//! by a tag. Tag membership lives outside this crate and is consulted
//! through [`TagSource`].

use rand::Rng;

use crate::model::Key;

/// Resolves tag keys to their member items.
pub trait TagSource: Send + Sync {
    /// The items carried by `tag`, empty when the tag is unknown.
    fn items_in(&self, tag: &Key) -> &[Key];
}

/// A [`TagSource`] with no tags. Every tag resolves to no items.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTags;

impl TagSource for NoTags {
    fn items_in(&self, _tag: &Key) -> &[Key] {
        &[]
    }
}

/// A predicate over item keys, used as a recipe's seed matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingredient {
    /// Matches exactly the listed items.
    Items(Vec<Key>),
    /// Matches every item in the tag, resolved at match time.
    Tag(Key),
}

impl Ingredient {
    /// An ingredient matching a single item.
    pub fn of(item: Key) -> Ingredient {
        Ingredient::Items(vec![item])
    }

    /// The concrete items this ingredient accepts.
    pub fn candidates<'a>(&'a self, tags: &'a dyn TagSource) -> &'a [Key] {
        match self {
            Ingredient::Items(items) => items,
            Ingredient::Tag(tag) => tags.items_in(tag),
        }
    }

    /// Whether the given item satisfies this ingredient.
    pub fn matches(&self, item: &Key, tags: &dyn TagSource) -> bool {
        self.candidates(tags).contains(item)
    }

    /// Picks one matching item uniformly at random.
    ///
    /// Seeds are an ingredient, so several items may be valid; taking a
    /// seed back out selects among them fairly. Returns `None` when the
    /// match list is empty.
    pub fn pick_seed(&self, tags: &dyn TagSource, rng: &mut impl Rng) -> Option<Key> {
        let candidates = self.candidates(tags);
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())].clone())
    }
}
