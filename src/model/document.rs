#![deny(missing_docs)]

//! # Document Root
//!
//! The `OpenApi` root node and its serialization entry points. A document
//! owns its whole subgraph, including the Components registry; distinct
//! documents share nothing, so per-document construction needs no
//! synchronization.

use crate::error::{ModelError, ModelResult};
use crate::model::components::Components;
use crate::model::extensions::Extensions;
use crate::model::info::{ExternalDocs, Info};
use crate::model::path::{PathItem, Paths};
use crate::model::security::SecurityRequirement;
use crate::model::server::{Server, Tag};
use crate::validation::check_strict;
use serde::{Deserialize, Serialize};

/// Default version emitted for documents built with this model.
pub const DEFAULT_OPENAPI_VERSION: &str = "3.0.3";

/// Root node of the API description graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApi {
    /// The OpenAPI format version (e.g. "3.0.3").
    pub openapi: String,
    /// Metadata about the API.
    pub info: Info,
    /// Servers hosting the API.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Path items keyed by URL template.
    #[serde(default)]
    pub paths: Paths,
    /// Reusable component definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Document-level security requirement alternatives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// Tags used by the document, with metadata.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// External documentation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl OpenApi {
    /// Creates a document with the given info and the default format
    /// version.
    pub fn new(info: Info) -> Self {
        Self {
            openapi: DEFAULT_OPENAPI_VERSION.to_string(),
            info,
            servers: Vec::new(),
            paths: Paths::new(),
            components: None,
            security: None,
            tags: Vec::new(),
            external_docs: None,
            extensions: Extensions::new(),
        }
    }

    /// Appends a server.
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Replaces the paths object.
    pub fn paths(mut self, paths: Paths) -> Self {
        self.paths = paths;
        self
    }

    /// Adds one path item, rejecting a duplicate template.
    pub fn path(mut self, template: impl Into<String>, item: PathItem) -> ModelResult<Self> {
        self.paths = self.paths.path(template, item)?;
        Ok(self)
    }

    /// Sets the components registry.
    pub fn components(mut self, components: Components) -> Self {
        self.components = Some(components);
        self
    }

    /// Appends a document-level security requirement alternative.
    pub fn security_requirement(mut self, requirement: SecurityRequirement) -> Self {
        self.security.get_or_insert_with(Vec::new).push(requirement);
        self
    }

    /// Appends a tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Sets the external documentation.
    pub fn external_docs(mut self, docs: ExternalDocs) -> Self {
        self.external_docs = Some(docs);
        self
    }

    /// Adds a specification extension. Keys must start with `x-`.
    pub fn extension(mut self, key: impl Into<String>, value: serde_json::Value) -> ModelResult<Self> {
        self.extensions.insert(key, value)?;
        Ok(self)
    }

    /// Serializes the document to a JSON value.
    pub fn to_json_value(&self) -> ModelResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json_string(&self) -> ModelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Serializes the document to YAML.
    pub fn to_yaml(&self) -> ModelResult<String> {
        serde_yaml::to_string(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Parses a document from JSON, preserving unknown fields verbatim
    /// in the extension maps.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ModelError::Deserialization(format!("Failed to parse JSON: {}", e)))
    }

    /// Parses a document from JSON and rejects unknown fields outside
    /// the `x-` extension prefix.
    pub fn from_json_str_strict(json: &str) -> ModelResult<Self> {
        let doc = Self::from_json_str(json)?;
        check_strict(&doc)?;
        Ok(doc)
    }

    /// Parses a document from YAML, preserving unknown fields verbatim
    /// in the extension maps.
    pub fn from_yaml(yaml: &str) -> ModelResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ModelError::Deserialization(format!("Failed to parse YAML: {}", e)))
    }

    /// Parses a document from YAML and rejects unknown fields outside
    /// the `x-` extension prefix.
    pub fn from_yaml_strict(yaml: &str) -> ModelResult<Self> {
        let doc = Self::from_yaml(yaml)?;
        check_strict(&doc)?;
        Ok(doc)
    }
}
