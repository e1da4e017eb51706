#![deny(missing_docs)]

//! # Specification Extensions
//!
//! Every node carries a flattened map of `x-` extension keys. In lenient
//! deserialization the same map also captures unknown fields verbatim so
//! round-trips stay lossless; strict mode rejects those captured keys.

use crate::error::{ModelError, ModelResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Required prefix for specification extension keys.
pub const EXTENSION_PREFIX: &str = "x-";

/// Insertion-ordered map of specification extensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    /// Creates an empty extension map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an extension entry, rejecting keys without the `x-` prefix
    /// and duplicate keys.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> ModelResult<()> {
        let key = key.into();
        if !key.starts_with(EXTENSION_PREFIX) {
            return Err(ModelError::constraint(
                &key,
                format!("extension key must start with '{}'", EXTENSION_PREFIX),
            ));
        }
        if self.0.contains_key(&key) {
            return Err(ModelError::constraint(
                &key,
                "duplicate extension key".to_string(),
            ));
        }
        self.0.insert(key, value);
        Ok(())
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no entries are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Keys captured during lenient deserialization that are not valid
    /// extension keys. Strict mode reports each of these.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &String> {
        self.0
            .keys()
            .filter(|key| !key.starts_with(EXTENSION_PREFIX))
    }
}

/// A reference to a named component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ref {
    /// The reference pointer (e.g. `#/components/schemas/Pet`).
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl Ref {
    /// Creates a reference from a full pointer string.
    pub fn new(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: ref_path.into(),
        }
    }
}

/// Either a reference to a component or an inline definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// A reference to a component.
    Ref(Ref),
    /// An inline definition owned by the parent node.
    Item(T),
}

impl<T> RefOr<T> {
    /// Creates a reference pointing at a named component of the given kind.
    pub fn reference(kind: crate::refs::ComponentKind, name: &str) -> Self {
        RefOr::Ref(Ref::new(kind.pointer(name)))
    }

    /// Returns the inline definition, if this is not a reference.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            RefOr::Item(item) => Some(item),
            RefOr::Ref(_) => None,
        }
    }

    /// Returns the reference pointer, if this is a reference.
    pub fn as_ref_path(&self) -> Option<&str> {
        match self {
            RefOr::Ref(r) => Some(&r.ref_path),
            RefOr::Item(_) => None,
        }
    }
}

impl<T> From<T> for RefOr<T> {
    fn from(item: T) -> Self {
        RefOr::Item(item)
    }
}
