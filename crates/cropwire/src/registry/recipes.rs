//! Recipe registry: the immutable snapshot of loaded recipes.
//!
//! A snapshot is built once per load cycle by a batch loader and then only
//! read. Reload means building a fresh snapshot and replacing the
//! published one wholesale (hosts typically keep it behind an `Arc` and
//! swap); records are never mutated field-by-field after publish, so
//! concurrent readers never observe a half-updated recipe.
//!
//! A broken recipe never aborts its batch: each failure is caught, tied to
//! the offending id in the [`LoadReport`], and the remaining recipes still
//! register.

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::warn;

use crate::codec::decode_recipe;
use crate::config::recipe_from_json;
use crate::error::RecipeError;
use crate::model::{CropRecipe, Key, TagSource};
use crate::registry::BlockTypeRegistry;

/// An immutable-after-publish set of recipes keyed by id.
#[derive(Default)]
pub struct RecipeRegistry {
    recipes: FxHashMap<Key, CropRecipe>,
}

/// Outcome of a batch load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Recipes that registered.
    pub loaded: usize,
    /// Per-recipe failures, each carrying the offending recipe's id.
    pub failures: Vec<RecipeError>,
}

impl RecipeRegistry {
    /// Builds a snapshot from binary payloads, one per recipe.
    pub fn from_binary_batch<'a>(
        batch: impl IntoIterator<Item = (Key, &'a [u8])>,
        blocks: &dyn BlockTypeRegistry,
    ) -> (RecipeRegistry, LoadReport) {
        Self::collect(
            batch
                .into_iter()
                .map(|(id, bytes)| decode_recipe(id, bytes, blocks)),
        )
    }

    /// Builds a snapshot from textual definitions, one per recipe.
    pub fn from_json_batch<'a>(
        batch: impl IntoIterator<Item = (Key, &'a Value)>,
        blocks: &dyn BlockTypeRegistry,
    ) -> (RecipeRegistry, LoadReport) {
        Self::collect(
            batch
                .into_iter()
                .map(|(id, json)| recipe_from_json(id, json, blocks)),
        )
    }

    fn collect(results: impl Iterator<Item = Result<CropRecipe, RecipeError>>) -> (RecipeRegistry, LoadReport) {
        let mut registry = RecipeRegistry::default();
        let mut report = LoadReport::default();
        for result in results {
            match result {
                Ok(recipe) => {
                    registry.recipes.insert(recipe.id().clone(), recipe);
                    report.loaded += 1;
                }
                Err(err) => {
                    warn!(recipe = %err.recipe_id(), %err, "dropping broken recipe");
                    report.failures.push(err);
                }
            }
        }
        (registry, report)
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: &Key) -> Option<&CropRecipe> {
        self.recipes.get(id)
    }

    /// Finds the first recipe whose seed matcher accepts the given item.
    pub fn recipe_for_seed(&self, item: &Key, tags: &dyn TagSource) -> Option<&CropRecipe> {
        self.recipes.values().find(|r| r.seed().matches(item, tags))
    }

    /// Iterates all registered recipes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &CropRecipe> {
        self.recipes.values()
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if the snapshot holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
