//! Binary encoding/decoding for the recipe sync channel.
//!
//! All multi-byte values are little-endian; see [`primitives`] for the
//! exact framing.

pub mod harvest;
pub mod ingredient;
pub mod primitives;
pub mod recipe;
pub mod state;

pub use harvest::{decode_harvest_entry, encode_harvest_entry};
pub use ingredient::{decode_ingredient, encode_ingredient};
pub use primitives::{Reader, Writer};
pub use recipe::{decode_recipe, decode_recipe_from, encode_recipe, encode_recipe_into};
pub use state::{decode_state, encode_state};
