//! Block type registry: the interface the codecs resolve type ids against.
//!
//! The registry is always passed in explicitly — codecs never reach for
//! ambient global state, so tests can run against a small fake catalog.
//!
//! Property descriptors own the typed domain behind a state's string-valued
//! property bag: [`StateProperty::parse`] turns raw text into the canonical
//! rendering of a typed value, or rejects it.

pub mod recipes;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::model::{Key, PlacedState};

lazy_static! {
    /// Id of the canonical empty block type, the decode fallback for
    /// unresolvable type ids.
    pub static ref EMPTY_BLOCK: Key =
        Key::new("cropwire", "empty").expect("literal key is valid");
}

/// A named, typed variant property a block type declares.
pub trait StateProperty: Send + Sync {
    /// The property's name within its block type.
    fn name(&self) -> &str;

    /// Parses raw text into the property's typed domain.
    ///
    /// Returns the canonical string rendering of the parsed value, or
    /// `None` when the text does not name a valid value.
    fn parse(&self, raw: &str) -> Option<String>;

    /// Canonical rendering of the property's default value.
    fn default_value(&self) -> String;
}

/// A resolvable block type: a default state plus declared properties.
pub trait BlockType: Send + Sync {
    /// The type's registry key.
    fn id(&self) -> &Key;

    /// The state carrying every declared property at its default value.
    fn default_state(&self) -> PlacedState;

    /// Looks up a declared property by name.
    fn property(&self, name: &str) -> Option<&dyn StateProperty>;
}

/// Resolves opaque type ids to block types.
pub trait BlockTypeRegistry: Send + Sync {
    /// Resolves a type id, or `None` when nothing is registered under it.
    fn resolve(&self, id: &Key) -> Option<&dyn BlockType>;

    /// The canonical absent/empty type.
    ///
    /// Decoding a state whose type id does not resolve falls back to this
    /// type's default state instead of failing the surrounding payload.
    fn empty_type(&self) -> &dyn BlockType;
}

// =============================================================================
// PROPERTY KINDS
// =============================================================================

/// A true/false property.
#[derive(Debug, Clone)]
pub struct BoolProperty {
    name: String,
    default: bool,
}

impl BoolProperty {
    /// Creates a bool property with the given default.
    pub fn new(name: impl Into<String>, default: bool) -> BoolProperty {
        BoolProperty { name: name.into(), default }
    }
}

impl StateProperty for BoolProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, raw: &str) -> Option<String> {
        match raw {
            "true" => Some("true".to_string()),
            "false" => Some("false".to_string()),
            _ => None,
        }
    }

    fn default_value(&self) -> String {
        self.default.to_string()
    }
}

/// A bounded integer property (`min..=max`).
#[derive(Debug, Clone)]
pub struct IntProperty {
    name: String,
    min: i32,
    max: i32,
    default: i32,
}

impl IntProperty {
    /// Creates an integer property. The default is clamped into range.
    pub fn new(name: impl Into<String>, min: i32, max: i32, default: i32) -> IntProperty {
        IntProperty {
            name: name.into(),
            min,
            max,
            default: default.clamp(min, max),
        }
    }
}

impl StateProperty for IntProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, raw: &str) -> Option<String> {
        let value: i32 = raw.parse().ok()?;
        if value < self.min || value > self.max {
            return None;
        }
        // canonical form: no leading zeros or '+'
        Some(value.to_string())
    }

    fn default_value(&self) -> String {
        self.default.to_string()
    }
}

/// A property over a fixed set of named values.
///
/// The first value is the default.
#[derive(Debug, Clone)]
pub struct EnumProperty {
    name: String,
    values: Vec<String>,
}

impl EnumProperty {
    /// Creates an enum property over the given values (first is default).
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> EnumProperty {
        EnumProperty {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl StateProperty for EnumProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, raw: &str) -> Option<String> {
        self.values.iter().find(|v| *v == raw).cloned()
    }

    fn default_value(&self) -> String {
        self.values.first().cloned().unwrap_or_default()
    }
}

// =============================================================================
// IN-MEMORY CATALOG
// =============================================================================

/// A block type definition for the in-memory catalog.
pub struct BlockDefinition {
    id: Key,
    properties: Vec<Box<dyn StateProperty>>,
}

impl BlockDefinition {
    /// Creates a definition with no properties.
    pub fn new(id: Key) -> BlockDefinition {
        BlockDefinition { id, properties: Vec::new() }
    }

    /// Adds a declared property (declaration order is the default-state
    /// property order).
    pub fn with_property(mut self, property: impl StateProperty + 'static) -> BlockDefinition {
        self.properties.push(Box::new(property));
        self
    }
}

impl BlockType for BlockDefinition {
    fn id(&self) -> &Key {
        &self.id
    }

    fn default_state(&self) -> PlacedState {
        self.properties
            .iter()
            .fold(PlacedState::new(self.id.clone()), |state, p| {
                state.with(p.name(), p.default_value())
            })
    }

    fn property(&self, name: &str) -> Option<&dyn StateProperty> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }
}

/// In-memory [`BlockTypeRegistry`].
pub struct BlockCatalog {
    blocks: FxHashMap<Key, BlockDefinition>,
    empty: BlockDefinition,
}

impl BlockCatalog {
    /// Creates a catalog holding only the empty type.
    pub fn new() -> BlockCatalog {
        BlockCatalog {
            blocks: FxHashMap::default(),
            empty: BlockDefinition::new(EMPTY_BLOCK.clone()),
        }
    }

    /// Registers a block type, replacing any previous definition under the
    /// same id.
    pub fn register(&mut self, block: BlockDefinition) {
        self.blocks.insert(block.id.clone(), block);
    }

    /// Number of registered types (the empty type is not counted).
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no types beyond the empty type are registered.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for BlockCatalog {
    fn default() -> BlockCatalog {
        BlockCatalog::new()
    }
}

impl BlockTypeRegistry for BlockCatalog {
    fn resolve(&self, id: &Key) -> Option<&dyn BlockType> {
        if let Some(block) = self.blocks.get(id) {
            return Some(block);
        }
        if *id == *EMPTY_BLOCK {
            return Some(&self.empty);
        }
        None
    }

    fn empty_type(&self) -> &dyn BlockType {
        &self.empty
    }
}
