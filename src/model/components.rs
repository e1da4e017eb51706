#![deny(missing_docs)]

//! # Components Registry
//!
//! The named lookup table that `$ref` pointers resolve against. Each
//! section is an insertion-ordered map; registration rejects duplicate
//! names and names outside the component key pattern. The registry is
//! owned by exactly one document; `Clone` is the explicit copy operation
//! when a registry is to be reused across documents.

use crate::error::{ModelError, ModelResult};
use crate::model::extensions::{Extensions, RefOr};
use crate::model::media::Example;
use crate::model::path::{Callback, Header, Link, PathItem, RequestBody, Response};
use crate::model::schema::Schema;
use crate::model::security::SecurityScheme;
use crate::refs::ComponentKind;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const COMPONENT_KEY_PATTERN: &str = r"^[a-zA-Z0-9._-]+$";

fn component_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COMPONENT_KEY_PATTERN).expect("valid component key pattern"))
}

/// Reusable definitions addressed by `#/components/{section}/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Reusable schemas.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,
    /// Reusable responses.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, RefOr<Response>>,
    /// Reusable parameters.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, RefOr<crate::model::path::Parameter>>,
    /// Reusable examples.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, RefOr<Example>>,
    /// Reusable request bodies.
    #[serde(
        rename = "requestBodies",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub request_bodies: IndexMap<String, RefOr<RequestBody>>,
    /// Reusable headers.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, RefOr<Header>>,
    /// Security scheme definitions.
    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, RefOr<SecurityScheme>>,
    /// Reusable links.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, RefOr<Link>>,
    /// Reusable callbacks.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, RefOr<Callback>>,
    /// Reusable path items (referenced by path-level `$ref`).
    #[serde(
        rename = "pathItems",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub path_items: IndexMap<String, PathItem>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

pub(crate) fn key_is_valid(name: &str) -> bool {
    component_key_regex().is_match(name)
}

fn check_key(section: &str, name: &str) -> ModelResult<()> {
    if !component_key_regex().is_match(name) {
        return Err(ModelError::constraint(
            format!("components.{}.{}", section, name),
            format!("component key must match {}", COMPONENT_KEY_PATTERN),
        ));
    }
    Ok(())
}

macro_rules! register {
    ($self:ident, $section:ident, $name:ident, $value:ident) => {{
        check_key(stringify!($section), &$name)?;
        if $self.$section.contains_key(&$name) {
            return Err(ModelError::constraint(
                format!("components.{}.{}", stringify!($section), $name),
                "duplicate component name".to_string(),
            ));
        }
        $self.$section.insert($name, $value);
        Ok($self)
    }};
}

impl Components {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema, rejecting duplicate or malformed names.
    pub fn schema(mut self, name: impl Into<String>, schema: Schema) -> ModelResult<Self> {
        let name = name.into();
        register!(self, schemas, name, schema)
    }

    /// Registers a response.
    pub fn response(
        mut self,
        name: impl Into<String>,
        response: RefOr<Response>,
    ) -> ModelResult<Self> {
        let name = name.into();
        register!(self, responses, name, response)
    }

    /// Registers a parameter.
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        parameter: RefOr<crate::model::path::Parameter>,
    ) -> ModelResult<Self> {
        let name = name.into();
        register!(self, parameters, name, parameter)
    }

    /// Registers an example.
    pub fn example(
        mut self,
        name: impl Into<String>,
        example: RefOr<Example>,
    ) -> ModelResult<Self> {
        let name = name.into();
        register!(self, examples, name, example)
    }

    /// Registers a request body.
    pub fn request_body(
        mut self,
        name: impl Into<String>,
        body: RefOr<RequestBody>,
    ) -> ModelResult<Self> {
        let name = name.into();
        check_key("requestBodies", &name)?;
        if self.request_bodies.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("components.requestBodies.{}", name),
                "duplicate component name".to_string(),
            ));
        }
        self.request_bodies.insert(name, body);
        Ok(self)
    }

    /// Registers a header.
    pub fn header(mut self, name: impl Into<String>, header: RefOr<Header>) -> ModelResult<Self> {
        let name = name.into();
        register!(self, headers, name, header)
    }

    /// Registers a security scheme.
    pub fn security_scheme(
        mut self,
        name: impl Into<String>,
        scheme: SecurityScheme,
    ) -> ModelResult<Self> {
        let name = name.into();
        check_key("securitySchemes", &name)?;
        if self.security_schemes.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("components.securitySchemes.{}", name),
                "duplicate component name".to_string(),
            ));
        }
        self.security_schemes.insert(name, RefOr::Item(scheme));
        Ok(self)
    }

    /// Registers a link.
    pub fn link(mut self, name: impl Into<String>, link: RefOr<Link>) -> ModelResult<Self> {
        let name = name.into();
        register!(self, links, name, link)
    }

    /// Registers a callback.
    pub fn callback(
        mut self,
        name: impl Into<String>,
        callback: RefOr<Callback>,
    ) -> ModelResult<Self> {
        let name = name.into();
        register!(self, callbacks, name, callback)
    }

    /// Registers a reusable path item.
    pub fn path_item(mut self, name: impl Into<String>, item: PathItem) -> ModelResult<Self> {
        let name = name.into();
        check_key("pathItems", &name)?;
        if self.path_items.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("components.pathItems.{}", name),
                "duplicate component name".to_string(),
            ));
        }
        self.path_items.insert(name, item);
        Ok(self)
    }

    /// Returns a registered schema by name.
    pub fn get_schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// True when an entry of the given kind and name is registered.
    pub fn contains(&self, kind: ComponentKind, name: &str) -> bool {
        match kind {
            ComponentKind::Schema => self.schemas.contains_key(name),
            ComponentKind::Response => self.responses.contains_key(name),
            ComponentKind::Parameter => self.parameters.contains_key(name),
            ComponentKind::Example => self.examples.contains_key(name),
            ComponentKind::RequestBody => self.request_bodies.contains_key(name),
            ComponentKind::Header => self.headers.contains_key(name),
            ComponentKind::SecurityScheme => self.security_schemes.contains_key(name),
            ComponentKind::Link => self.links.contains_key(name),
            ComponentKind::Callback => self.callbacks.contains_key(name),
        }
    }

    /// True when no section has entries.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.responses.is_empty()
            && self.parameters.is_empty()
            && self.examples.is_empty()
            && self.request_bodies.is_empty()
            && self.headers.is_empty()
            && self.security_schemes.is_empty()
            && self.links.is_empty()
            && self.callbacks.is_empty()
            && self.path_items.is_empty()
            && self.extensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_component_name_rejected() {
        let err = Components::new()
            .schema("Pet", Schema::object())
            .unwrap()
            .schema("Pet", Schema::string())
            .unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Constraint violation at 'components.schemas.Pet': duplicate component name"
        );
    }

    #[test]
    fn test_component_key_pattern_enforced() {
        let err = Components::new()
            .schema("bad name", Schema::object())
            .unwrap_err();
        assert!(format!("{}", err).contains("component key must match"));
    }

    #[test]
    fn test_contains_by_kind() {
        let components = Components::new()
            .schema("Pet", Schema::object())
            .unwrap()
            .response("NotFound", RefOr::Item(Response::new("missing")))
            .unwrap();
        assert!(components.contains(ComponentKind::Schema, "Pet"));
        assert!(components.contains(ComponentKind::Response, "NotFound"));
        assert!(!components.contains(ComponentKind::Response, "Pet"));
    }

    #[test]
    fn test_registry_clone_is_independent() {
        let original = Components::new().schema("Pet", Schema::object()).unwrap();
        let copied = original.clone().schema("Order", Schema::object()).unwrap();
        assert!(!original.contains(ComponentKind::Schema, "Order"));
        assert!(copied.contains(ComponentKind::Schema, "Order"));
    }
}
