//! Error types for recipe loading, encoding, and decoding.

use thiserror::Error;

use crate::model::Key;

/// Error parsing a namespaced key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key is empty")]
    Empty,

    #[error("key {key:?} contains invalid character {char:?}")]
    InvalidChar { key: String, char: char },

    #[error("key {key:?} has an empty {part}")]
    EmptyPart { key: String, part: &'static str },
}

/// Error during binary decoding.
///
/// These are structural problems with the byte stream itself. Data-quality
/// problems inside a placed state (unknown type, unknown property,
/// unparsable value) are tolerated and logged instead, see
/// [`crate::codec::state`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("invalid ingredient kind: {kind}")]
    InvalidIngredientKind { kind: u8 },

    #[error("malformed key {key:?} in {field}: {source}")]
    MalformedKey {
        field: &'static str,
        key: String,
        source: KeyError,
    },
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Error reading a recipe from its textual (JSON) definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing required field {field:?}")]
    MissingField { field: &'static str },

    #[error("field {field:?} has the wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field {field:?} holds malformed key {key:?}: {source}")]
    MalformedKey {
        field: &'static str,
        key: String,
        source: KeyError,
    },

    #[error("unknown block type {key} in display state")]
    UnknownBlock { key: Key },

    #[error("field {field:?} has invalid value: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

/// A single recipe failed to load, encode, or decode.
///
/// This is the one error a batch loader sees per broken recipe. It always
/// carries the recipe id so the diagnostic identifies the offender; the
/// remaining recipes in the batch are unaffected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    #[error("failed to decode recipe {id}: {source}")]
    Decode { id: Key, source: DecodeError },

    #[error("failed to encode recipe {id}: {source}")]
    Encode { id: Key, source: EncodeError },

    #[error("failed to load recipe {id}: {source}")]
    Config { id: Key, source: ConfigError },
}

impl RecipeError {
    /// Returns the id of the recipe that failed.
    pub fn recipe_id(&self) -> &Key {
        match self {
            RecipeError::Decode { id, .. }
            | RecipeError::Encode { id, .. }
            | RecipeError::Config { id, .. } => id,
        }
    }
}
