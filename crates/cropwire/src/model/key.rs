//! Namespaced identifiers.
//!
//! Every registry object (recipe, block type, item, tag) is addressed by a
//! `namespace:path` key, lowercase ASCII. A bare path without a `:` falls
//! back to the [`DEFAULT_NAMESPACE`].

use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Namespace assumed when a key string carries none.
pub const DEFAULT_NAMESPACE: &str = "cropwire";

/// A namespaced identifier (`namespace:path`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    namespace: String,
    path: String,
}

impl Key {
    /// Creates a key from already-validated parts.
    ///
    /// Returns an error if either part is empty or contains a character
    /// outside the allowed set.
    pub fn new(namespace: &str, path: &str) -> Result<Key, KeyError> {
        let full = || format!("{namespace}:{path}");
        if namespace.is_empty() {
            return Err(KeyError::EmptyPart { key: full(), part: "namespace" });
        }
        if path.is_empty() {
            return Err(KeyError::EmptyPart { key: full(), part: "path" });
        }
        if let Some(c) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(KeyError::InvalidChar { key: full(), char: c });
        }
        if let Some(c) = path.chars().find(|c| !is_path_char(*c)) {
            return Err(KeyError::InvalidChar { key: full(), char: c });
        }
        Ok(Key {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Parses a key from its `namespace:path` string form.
    ///
    /// A string without `:` is treated as a path in [`DEFAULT_NAMESPACE`].
    pub fn parse(s: &str) -> Result<Key, KeyError> {
        if s.is_empty() {
            return Err(KeyError::Empty);
        }
        match s.split_once(':') {
            Some((ns, path)) => Key::new(ns, path),
            None => Key::new(DEFAULT_NAMESPACE, s),
        }
    }

    /// The namespace component.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path component.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Key, KeyError> {
        Key::parse(s)
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}
