//! Placed-object state: a block type plus named variant properties.
//!
//! The property bag is an ordered mapping from property name to the value's
//! canonical string rendering. The typed domain behind each value is owned
//! by the block type's property descriptors, not by the state itself.

use crate::model::Key;

/// An immutable block type + property-bag value.
///
/// States are built once (from a type's default state, then updated
/// property by property) and never mutated in place: [`PlacedState::with`]
/// returns a new state value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedState {
    type_id: Key,
    properties: Vec<(String, String)>,
}

impl PlacedState {
    /// Creates a state with no properties.
    pub fn new(type_id: Key) -> PlacedState {
        PlacedState {
            type_id,
            properties: Vec::new(),
        }
    }

    /// The block type this state belongs to.
    pub fn type_id(&self) -> &Key {
        &self.type_id
    }

    /// Property name/value pairs in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of properties set on this state.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Looks up a property value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a new state with the property set to the given value.
    ///
    /// An existing property keeps its position; a new one is appended.
    pub fn with(&self, name: &str, value: impl Into<String>) -> PlacedState {
        let mut next = self.clone();
        match next.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.into(),
            None => next.properties.push((name.to_string(), value.into())),
        }
        next
    }
}
