//! Data model types.
//!
//! - Namespaced identifiers ([`Key`])
//! - Placed-object states ([`PlacedState`])
//! - Seed matchers ([`Ingredient`])
//! - Harvest tables ([`HarvestEntry`])
//! - Recipe records ([`CropRecipe`] and its load-phase builder)

pub mod harvest;
pub mod ingredient;
pub mod key;
pub mod recipe;
pub mod state;

pub use harvest::HarvestEntry;
pub use ingredient::{Ingredient, NoTags, TagSource};
pub use key::{Key, DEFAULT_NAMESPACE};
pub use recipe::{CropRecipe, CropRecipeBuilder};
pub use state::PlacedState;
