#![deny(missing_docs)]

//! # Media Type Objects
//!
//! Payload descriptions keyed by media type (`application/json`, ...),
//! plus the reusable `Example` object.

use crate::error::{ModelError, ModelResult};
use crate::model::extensions::{Extensions, RefOr};
use crate::model::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Map from media type string to payload description.
/// Insertion order preserved; duplicate keys rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(IndexMap<String, MediaType>);

impl Content {
    /// Creates an empty content map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single `application/json` entry.
    pub fn json(media_type: MediaType) -> Self {
        let mut content = Self::new();
        content.0.insert("application/json".to_string(), media_type);
        content
    }

    /// Adds an entry for a media type, rejecting duplicates.
    pub fn entry(mut self, media_type: impl Into<String>, value: MediaType) -> ModelResult<Self> {
        let media_type = media_type.into();
        if self.0.contains_key(&media_type) {
            return Err(ModelError::constraint(
                format!("content.{}", media_type),
                "duplicate media type".to_string(),
            ));
        }
        self.0.insert(media_type, value);
        Ok(self)
    }

    /// Returns the entry for a media type, if present.
    pub fn get(&self, media_type: &str) -> Option<&MediaType> {
        self.0.get(media_type)
    }

    /// True when no entries are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MediaType)> {
        self.0.iter()
    }
}

/// Description of one media type's payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema describing the payload. Owned child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Single example of the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Named examples of the payload.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, RefOr<Example>>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl MediaType {
    /// Creates an empty media type object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the payload schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the single example value.
    pub fn example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Adds a named example, rejecting duplicate names.
    pub fn named_example(
        mut self,
        name: impl Into<String>,
        example: RefOr<Example>,
    ) -> ModelResult<Self> {
        let name = name.into();
        if self.examples.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("examples.{}", name),
                "duplicate example name".to_string(),
            ));
        }
        self.examples.insert(name, example);
        Ok(self)
    }
}

/// A reusable example value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Embedded literal example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// URI of an external example, mutually exclusive with `value`.
    #[serde(rename = "externalValue", skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Example {
    /// Creates an empty example.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the embedded value.
    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the external value URI.
    pub fn external_value(mut self, uri: impl Into<String>) -> Self {
        self.external_value = Some(uri.into());
        self
    }
}
