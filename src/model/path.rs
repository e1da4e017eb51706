#![deny(missing_docs)]

//! # Path and Operation Objects
//!
//! The `paths` subtree: URL templates mapping to `PathItem`s, each of
//! which carries per-method `Operation`s with their parameters, request
//! bodies and responses.
//!
//! `Paths`, `Responses` and `Callback` are maps whose keys mix real
//! entries with `x-` specification extensions, so they carry hand-written
//! `Serialize`/`Deserialize` impls that split the two while preserving
//! insertion order.

use crate::error::{ModelError, ModelResult};
use crate::model::extensions::{Extensions, RefOr};
use crate::model::media::{Content, Example};
use crate::model::schema::Schema;
use crate::model::security::SecurityRequirement;
use crate::model::server::Server;
use crate::model::info::ExternalDocs;
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The Paths Object: URL template to path item, plus `x-` extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    /// Path items keyed by URL template. Insertion order preserved.
    pub items: IndexMap<String, PathItem>,
    /// Extensions attached to the Paths Object itself.
    pub extensions: Extensions,
}

impl Paths {
    /// Creates an empty paths object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path item under a URL template, rejecting duplicates.
    pub fn path(mut self, template: impl Into<String>, item: PathItem) -> ModelResult<Self> {
        let template = template.into();
        if self.items.contains_key(&template) {
            return Err(ModelError::constraint(
                format!("paths.{}", template),
                "duplicate path template".to_string(),
            ));
        }
        self.items.insert(template, item);
        Ok(self)
    }

    /// Returns the path item for a template, if present.
    pub fn get(&self, template: &str) -> Option<&PathItem> {
        self.items.get(template)
    }

    /// True when no concrete path items are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut items = IndexMap::new();
        let mut extensions = Extensions::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                extensions.insert(key, value).map_err(DeError::custom)?;
                continue;
            }
            let item = serde_json::from_value::<PathItem>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse path item '{}': {}", key, e))
            })?;
            items.insert(key, item);
        }

        Ok(Self { items, extensions })
    }
}

impl Serialize for Paths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map =
            serializer.serialize_map(Some(self.items.len() + self.extensions.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in self.extensions.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Operations available on a single URL template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Reference to a path item defined elsewhere. Sibling fields next to
    /// a populated `$ref` fail validation.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,
    /// Short summary applying to all operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description applying to all operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// GET operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// TRACE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    /// Alternative servers for all operations under this path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Parameters common to all operations under this path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<RefOr<Parameter>>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl PathItem {
    /// Creates an empty path item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path item that is a reference to a shared definition.
    pub fn reference(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: Some(ref_path.into()),
            ..Self::default()
        }
    }

    /// Sets the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the GET operation.
    pub fn get(mut self, op: Operation) -> Self {
        self.get = Some(op);
        self
    }

    /// Sets the PUT operation.
    pub fn put(mut self, op: Operation) -> Self {
        self.put = Some(op);
        self
    }

    /// Sets the POST operation.
    pub fn post(mut self, op: Operation) -> Self {
        self.post = Some(op);
        self
    }

    /// Sets the DELETE operation.
    pub fn delete(mut self, op: Operation) -> Self {
        self.delete = Some(op);
        self
    }

    /// Sets the OPTIONS operation.
    pub fn options(mut self, op: Operation) -> Self {
        self.options = Some(op);
        self
    }

    /// Sets the HEAD operation.
    pub fn head(mut self, op: Operation) -> Self {
        self.head = Some(op);
        self
    }

    /// Sets the PATCH operation.
    pub fn patch(mut self, op: Operation) -> Self {
        self.patch = Some(op);
        self
    }

    /// Sets the TRACE operation.
    pub fn trace(mut self, op: Operation) -> Self {
        self.trace = Some(op);
        self
    }

    /// Adds a parameter shared by all operations under this path.
    pub fn parameter(mut self, parameter: RefOr<Parameter>) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Iterates the populated operations with their lowercase method names.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
            ("patch", &self.patch),
            ("trace", &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }

    /// True when any field other than `$ref` and extensions is populated.
    pub(crate) fn has_inline_content(&self) -> bool {
        let defaulted = PathItem {
            ref_path: self.ref_path.clone(),
            extensions: self.extensions.clone(),
            ..PathItem::default()
        };
        *self != defaulted
    }
}

/// A single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Tag names grouping this operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External documentation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// Unique operation identifier.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Operation parameters, in caller order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<RefOr<Parameter>>,
    /// Request body.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RefOr<RequestBody>>,
    /// Possible responses keyed by status code or `default`.
    #[serde(default, skip_serializing_if = "Responses::is_empty")]
    pub responses: Responses,
    /// Out-of-band callbacks keyed by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, RefOr<Callback>>,
    /// Consumers should migrate away from this operation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    /// Security requirement alternatives. An empty list removes
    /// document-level security for this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    /// Alternative servers for this operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Operation {
    /// Creates an empty operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag name.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the operation identifier.
    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    /// Appends a parameter.
    pub fn parameter(mut self, parameter: RefOr<Parameter>) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the request body.
    pub fn request_body(mut self, body: RefOr<RequestBody>) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Replaces the responses map.
    pub fn responses(mut self, responses: Responses) -> Self {
        self.responses = responses;
        self
    }

    /// Adds a callback, rejecting duplicate names.
    pub fn callback(
        mut self,
        name: impl Into<String>,
        callback: RefOr<Callback>,
    ) -> ModelResult<Self> {
        let name = name.into();
        if self.callbacks.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("callbacks.{}", name),
                "duplicate callback name".to_string(),
            ));
        }
        self.callbacks.insert(name, callback);
        Ok(self)
    }

    /// Marks the operation deprecated.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Appends a security requirement alternative.
    pub fn security_requirement(mut self, requirement: SecurityRequirement) -> Self {
        self.security.get_or_insert_with(Vec::new).push(requirement);
        self
    }
}

/// The Responses Object: status code (or `default`) to response,
/// plus `x-` extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    /// Responses keyed by status code or `default`. Insertion order
    /// preserved; duplicate keys rejected at the builder call.
    pub items: IndexMap<String, RefOr<Response>>,
    /// Extensions attached to the Responses Object itself.
    pub extensions: Extensions,
}

impl Responses {
    /// Creates an empty responses map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a response under a status-code key, rejecting duplicates.
    pub fn response(
        mut self,
        status: impl Into<String>,
        response: RefOr<Response>,
    ) -> ModelResult<Self> {
        let status = status.into();
        if self.items.contains_key(&status) {
            return Err(ModelError::constraint(
                format!("responses.{}", status),
                "duplicate response status code".to_string(),
            ));
        }
        self.items.insert(status, response);
        Ok(self)
    }

    /// Adds the `default` response, rejecting a duplicate.
    pub fn default_response(self, response: RefOr<Response>) -> ModelResult<Self> {
        self.response("default", response)
    }

    /// Returns the response for a status key, if present.
    pub fn get(&self, status: &str) -> Option<&RefOr<Response>> {
        self.items.get(status)
    }

    /// True when no response entries are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut items = IndexMap::new();
        let mut extensions = Extensions::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                extensions.insert(key, value).map_err(DeError::custom)?;
                continue;
            }
            let response = serde_json::from_value::<RefOr<Response>>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse response '{}': {}", key, e))
            })?;
            items.insert(key, response);
        }

        Ok(Self { items, extensions })
    }
}

impl Serialize for Responses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map =
            serializer.serialize_map(Some(self.items.len() + self.extensions.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in self.extensions.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A single response from an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Short description of the response. Required by the format.
    pub description: String,
    /// Response headers keyed by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, RefOr<Header>>,
    /// Response payloads keyed by media type.
    #[serde(default, skip_serializing_if = "Content::is_empty")]
    pub content: Content,
    /// Links to other operations keyed by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, RefOr<Link>>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Response {
    /// Creates a response with the required description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Sets the content map.
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Adds a response header, rejecting duplicate names.
    pub fn header(mut self, name: impl Into<String>, header: RefOr<Header>) -> ModelResult<Self> {
        let name = name.into();
        if self.headers.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("headers.{}", name),
                "duplicate header name".to_string(),
            ));
        }
        self.headers.insert(name, header);
        Ok(self)
    }

    /// Adds a link, rejecting duplicate names.
    pub fn link(mut self, name: impl Into<String>, link: RefOr<Link>) -> ModelResult<Self> {
        let name = name.into();
        if self.links.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("links.{}", name),
                "duplicate link name".to_string(),
            ));
        }
        self.links.insert(name, link);
        Ok(self)
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// URL query string.
    Query,
    /// HTTP header.
    Header,
    /// URL path segment.
    Path,
    /// Cookie value.
    Cookie,
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Location (`query`, `header`, `path` or `cookie`).
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter must be supplied. Always true for `path`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Consumers should migrate away from this parameter.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    /// Schema describing the parameter value. Owned child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Named examples.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, RefOr<Example>>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Parameter {
    /// Creates a parameter with the required name and location.
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: location == ParameterLocation::Path,
            deprecated: false,
            schema: None,
            example: None,
            examples: IndexMap::new(),
            extensions: Extensions::new(),
        }
    }

    /// Creates a required path parameter.
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Path)
    }

    /// Creates a query parameter.
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(name, ParameterLocation::Query)
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the parameter required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the value schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the example value.
    pub fn example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}

/// A request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Body payloads keyed by media type.
    #[serde(default, skip_serializing_if = "Content::is_empty")]
    pub content: Content,
    /// Whether a body must be supplied.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl RequestBody {
    /// Creates an empty request body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content map.
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Marks the body required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A response header. Shaped like `Parameter` without `name` and `in`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the header is always present.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Consumers should migrate away from this header.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    /// Schema describing the header value. Owned child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Header {
    /// Creates an empty header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the value schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// A design-time link from a response to another operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Reference to the target operation by pointer.
    #[serde(rename = "operationRef", skip_serializing_if = "Option::is_none")]
    pub operation_ref: Option<String>,
    /// Reference to the target operation by `operationId`.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Values or runtime expressions passed as parameters.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Value>,
    /// Value or runtime expression passed as the request body.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Server to use for the target operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Link {
    /// Creates an empty link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets an operation by its `operationId`.
    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    /// Adds a parameter value or runtime expression.
    pub fn parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }
}

/// A callback: runtime expressions mapping to path items,
/// plus `x-` extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback {
    /// Path items keyed by runtime expression. Insertion order preserved.
    pub items: IndexMap<String, PathItem>,
    /// Extensions attached to the Callback Object itself.
    pub extensions: Extensions,
}

impl Callback {
    /// Creates an empty callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path item under a runtime expression, rejecting duplicates.
    pub fn expression(mut self, expr: impl Into<String>, item: PathItem) -> ModelResult<Self> {
        let expr = expr.into();
        if self.items.contains_key(&expr) {
            return Err(ModelError::constraint(
                format!("callback.{}", expr),
                "duplicate callback expression".to_string(),
            ));
        }
        self.items.insert(expr, item);
        Ok(self)
    }
}

impl<'de> Deserialize<'de> for Callback {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut items = IndexMap::new();
        let mut extensions = Extensions::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                extensions.insert(key, value).map_err(DeError::custom)?;
                continue;
            }
            let item = serde_json::from_value::<PathItem>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse callback expression '{}': {}", key, e))
            })?;
            items.insert(key, item);
        }

        Ok(Self { items, extensions })
    }
}

impl Serialize for Callback {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map =
            serializer.serialize_map(Some(self.items.len() + self.extensions.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in self.extensions.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_duplicate_response_status_rejected() {
        let err = Responses::new()
            .response("200", Response::new("ok").into())
            .unwrap()
            .response("200", Response::new("also ok").into())
            .unwrap_err();
        assert!(format!("{}", err).contains("duplicate response status code"));
    }

    #[test]
    fn test_paths_split_extensions_from_items() {
        let yaml = r#"
x-paths-meta:
  owner: api
/pets:
  get:
    operationId: listPets
    responses:
      '200':
        description: ok
"#;
        let paths: Paths = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(paths.items.len(), 1);
        assert_eq!(
            paths.extensions.get("x-paths-meta"),
            Some(&json!({"owner": "api"}))
        );
        let item = paths.get("/pets").unwrap();
        assert_eq!(
            item.get.as_ref().unwrap().operation_id.as_deref(),
            Some("listPets")
        );
    }

    #[test]
    fn test_paths_serialize_preserves_insertion_order() {
        let paths = Paths::new()
            .path("/pets", PathItem::new().get(Operation::new()))
            .unwrap()
            .path("/pets/{id}", PathItem::new().get(Operation::new()))
            .unwrap();
        let value = serde_json::to_value(&paths).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["/pets", "/pets/{id}"]);
    }

    #[test]
    fn test_paths_serialize_counts_extension_entries() {
        let mut paths = Paths::new()
            .path("/pets", PathItem::new().get(Operation::new()))
            .unwrap();
        paths.extensions.insert("x-owner", json!("api")).unwrap();

        let value = serde_json::to_value(&paths).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), paths.items.len() + paths.extensions.len());
        assert_eq!(obj.keys().last().unwrap(), "x-owner");
    }

    #[test]
    fn test_path_parameter_defaults_to_required() {
        let param = Parameter::path("petId");
        assert!(param.required);
        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["in"], "path");
        assert_eq!(value["required"], json!(true));
    }

    #[test]
    fn test_path_item_inline_content_detection() {
        let plain_ref = PathItem::reference("#/components/pathItems/Shared");
        assert!(!plain_ref.has_inline_content());
        let with_sibling = PathItem::reference("#/components/pathItems/Shared")
            .get(Operation::new());
        assert!(with_sibling.has_inline_content());
    }

    #[test]
    fn test_callback_round_trip() {
        let callback = Callback::new()
            .expression(
                "{$request.body#/callbackUrl}",
                PathItem::new().post(
                    Operation::new().responses(
                        Responses::new()
                            .response("200", Response::new("ok").into())
                            .unwrap(),
                    ),
                ),
            )
            .unwrap();
        let json = serde_json::to_string(&callback).unwrap();
        let back: Callback = serde_json::from_str(&json).unwrap();
        assert_eq!(back, callback);
    }
}
