//! Crop recipe records.
//!
//! A [`CropRecipe`] is the immutable definition of one growth rule: what
//! seed starts it, which soils accept it, how long it grows, what it
//! yields, and what it looks like while growing. Records are created once
//! per load cycle (textual load or binary receive) and held immutably in a
//! recipe registry until the whole snapshot is replaced.

use std::collections::BTreeSet;

use crate::error::ConfigError;
use crate::model::{HarvestEntry, Ingredient, Key, PlacedState};

/// Immutable definition of one crop.
///
/// Construction goes through [`CropRecipeBuilder`]; once built, a record
/// exposes no mutators. Soil categories live in an ordered set so repeated
/// binary encodes of the same record are byte-identical; their semantics
/// are membership-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CropRecipe {
    id: Key,
    seed: Ingredient,
    soil_categories: BTreeSet<String>,
    growth_ticks: i32,
    growth_multiplier: f32,
    results: Vec<HarvestEntry>,
    display: PlacedState,
}

impl CropRecipe {
    /// Starts building a recipe with the given id.
    pub fn builder(id: Key) -> CropRecipeBuilder {
        CropRecipeBuilder {
            id,
            seed: None,
            soil_categories: BTreeSet::new(),
            growth_ticks: 0,
            growth_multiplier: 1.0,
            results: Vec::new(),
            display: None,
        }
    }

    /// The recipe's registry key, assigned at load time.
    pub fn id(&self) -> &Key {
        &self.id
    }

    /// The ingredient matching this crop's seed items.
    pub fn seed(&self) -> &Ingredient {
        &self.seed
    }

    /// Lowercase soil category tags this crop accepts.
    pub fn soil_categories(&self) -> &BTreeSet<String> {
        &self.soil_categories
    }

    /// Whether any of the given soil's categories accepts this crop.
    pub fn grows_in<'a>(&self, soil_categories: impl IntoIterator<Item = &'a str>) -> bool {
        soil_categories
            .into_iter()
            .any(|c| self.soil_categories.contains(c))
    }

    /// Base growth duration in ticks.
    pub fn growth_ticks(&self) -> i32 {
        self.growth_ticks
    }

    /// Growth multiplier applied on top of the base duration.
    pub fn growth_multiplier(&self) -> f32 {
        self.growth_multiplier
    }

    /// The harvest table, in definition order.
    pub fn results(&self) -> &[HarvestEntry] {
        &self.results
    }

    /// The state rendered while this crop grows.
    pub fn display(&self) -> &PlacedState {
        &self.display
    }
}

/// Load-phase builder for [`CropRecipe`].
///
/// Both load paths (textual and binary) assemble records through this
/// builder; deferred reload pipelines stage their changes here too instead
/// of mutating a published record.
#[derive(Debug, Clone)]
pub struct CropRecipeBuilder {
    id: Key,
    seed: Option<Ingredient>,
    soil_categories: BTreeSet<String>,
    growth_ticks: i32,
    growth_multiplier: f32,
    results: Vec<HarvestEntry>,
    display: Option<PlacedState>,
}

impl CropRecipeBuilder {
    /// Sets the seed matcher.
    pub fn seed(mut self, seed: Ingredient) -> CropRecipeBuilder {
        self.seed = Some(seed);
        self
    }

    /// Replaces the soil category set. Tags are lowercased.
    pub fn soil_categories(
        mut self,
        categories: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> CropRecipeBuilder {
        self.soil_categories = categories
            .into_iter()
            .map(|c| c.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Adds one soil category tag, lowercased.
    pub fn soil_category(mut self, category: &str) -> CropRecipeBuilder {
        self.soil_categories.insert(category.to_lowercase());
        self
    }

    /// Sets the base growth duration in ticks.
    pub fn growth_ticks(mut self, ticks: i32) -> CropRecipeBuilder {
        self.growth_ticks = ticks;
        self
    }

    /// Sets the growth multiplier.
    pub fn growth_multiplier(mut self, multiplier: f32) -> CropRecipeBuilder {
        self.growth_multiplier = multiplier;
        self
    }

    /// Replaces the harvest table.
    pub fn results(mut self, results: Vec<HarvestEntry>) -> CropRecipeBuilder {
        self.results = results;
        self
    }

    /// Appends one harvest entry.
    pub fn result(mut self, entry: HarvestEntry) -> CropRecipeBuilder {
        self.results.push(entry);
        self
    }

    /// Sets the display state.
    pub fn display(mut self, display: PlacedState) -> CropRecipeBuilder {
        self.display = Some(display);
        self
    }

    /// Builds the record.
    ///
    /// Fails with [`ConfigError::MissingField`] when the seed or display
    /// state was never provided, and with [`ConfigError::InvalidValue`]
    /// for a negative growth duration.
    pub fn build(self) -> Result<CropRecipe, ConfigError> {
        let seed = self.seed.ok_or(ConfigError::MissingField { field: "seed" })?;
        let display = self
            .display
            .ok_or(ConfigError::MissingField { field: "display" })?;
        if self.growth_ticks < 0 {
            return Err(ConfigError::InvalidValue {
                field: "growthTicks",
                reason: "must not be negative",
            });
        }
        Ok(CropRecipe {
            id: self.id,
            seed,
            soil_categories: self.soil_categories,
            growth_ticks: self.growth_ticks,
            growth_multiplier: self.growth_multiplier,
            results: self.results,
            display,
        })
    }
}
