//! cropwire: the data layer of a crop/growth-recipe subsystem.
//!
//! This crate defines how a crop recipe is represented (seed matcher, soil
//! categories, growth timing, harvest table, display state), how it loads
//! from JSON definitions, and how it travels over a length-prefixed binary
//! channel for client/server synchronization.
//!
//! # Overview
//!
//! - **Open property vocabulary**: a recipe's display state is a type id
//!   plus a schema-less bag of named string-valued properties. The wire
//!   format round-trips without requiring both ends to share an identical
//!   block catalog: unresolvable types fall back to the empty state and
//!   unknown or unparsable properties are logged and skipped.
//! - **Per-recipe fault isolation**: one broken definition or corrupt
//!   payload is dropped with a diagnostic naming the recipe; the rest of
//!   the batch still registers.
//! - **Immutable records**: recipes are built once per load cycle and the
//!   published registry snapshot is replaced wholesale on reload.
//!
//! # Quick Start
//!
//! ```rust
//! use cropwire::codec::{decode_recipe, encode_recipe};
//! use cropwire::config::recipe_from_json;
//! use cropwire::registry::{BlockCatalog, BlockDefinition, IntProperty};
//! use cropwire::Key;
//!
//! // The host's block catalog, passed in explicitly.
//! let mut blocks = BlockCatalog::new();
//! blocks.register(
//!     BlockDefinition::new(Key::parse("farmland:carrot_block").unwrap())
//!         .with_property(IntProperty::new("age", 0, 7, 0)),
//! );
//!
//! // Load a recipe from its JSON definition...
//! let definition = serde_json::json!({
//!     "seed": { "item": "farmland:carrot" },
//!     "categories": ["dirt"],
//!     "growthTicks": 1200,
//!     "growthModifier": 1.0,
//!     "results": [
//!         { "chance": 0.75, "output": { "item": "farmland:carrot" },
//!           "minRolls": 1, "maxRolls": 3 }
//!     ],
//!     "display": { "block": "farmland:carrot_block",
//!                  "properties": { "age": "0" } }
//! });
//! let id = Key::parse("farmland:carrot").unwrap();
//! let recipe = recipe_from_json(id, &definition, &blocks).unwrap();
//!
//! // ...and sync it over the wire.
//! let bytes = encode_recipe(&recipe).unwrap();
//! let received = decode_recipe(recipe.id().clone(), &bytes, &blocks).unwrap();
//! assert_eq!(received, recipe);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Key, PlacedState, Ingredient, CropRecipe)
//! - [`codec`]: Binary encoding/decoding for the sync channel
//! - [`config`]: Textual (JSON) load path
//! - [`registry`]: Block type interfaces, in-memory catalog, recipe registry
//! - [`growth`]: Growth duration model
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The binary decoder safely handles untrusted input: every count and
//! length prefix is capped by [`limits`] before allocation, strings are
//! UTF-8 validated, and truncated buffers surface as typed errors rather
//! than panics.
//!
//! # Wire Format
//!
//! All integers and floats are fixed-width little-endian; strings and
//! collections carry u32 length/count prefixes. See [`codec::recipe`] and
//! [`codec::state`] for the exact field order.

pub mod codec;
pub mod config;
pub mod error;
pub mod growth;
pub mod limits;
pub mod model;
pub mod registry;

// Re-export commonly used types at crate root
pub use codec::{decode_recipe, encode_recipe};
pub use config::recipe_from_json;
pub use error::{ConfigError, DecodeError, EncodeError, KeyError, RecipeError};
pub use growth::{ticks_to_maturity, SoilProfile};
pub use model::{
    CropRecipe, CropRecipeBuilder, HarvestEntry, Ingredient, Key, NoTags, PlacedState, TagSource,
};
pub use registry::{
    BlockCatalog, BlockDefinition, BlockType, BlockTypeRegistry, BoolProperty, EnumProperty,
    IntProperty, StateProperty,
};
pub use registry::recipes::{LoadReport, RecipeRegistry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
