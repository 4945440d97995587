//! Security limits for decoding.
//!
//! Every count or length prefix read from the wire is checked against these
//! caps before any allocation happens, so a corrupt or hostile length field
//! cannot request an unbounded buffer.

/// Maximum length of any length-prefixed string, in bytes.
pub const MAX_STRING_LEN: usize = 32_768;

/// Maximum length of a namespaced key (`namespace:path`) on the wire.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum number of properties in a single placed state.
pub const MAX_STATE_PROPERTIES: usize = 256;

/// Maximum number of soil categories per recipe.
pub const MAX_SOIL_CATEGORIES: usize = 64;

/// Maximum number of harvest entries per recipe.
pub const MAX_HARVEST_ENTRIES: usize = 1_024;

/// Maximum number of concrete items in an ingredient match list.
pub const MAX_INGREDIENT_ITEMS: usize = 1_024;
