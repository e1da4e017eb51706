#![deny(missing_docs)]

//! # Schema Objects
//!
//! The recursive heart of the document graph. A `Schema` is either an
//! inline type description (with `items`, `properties` and composition
//! keywords owning child schemas) or a `$ref` into the Components
//! registry; populating both is rejected by the validation pass.
//!
//! Mutators are consuming and chainable. Checks that are local and
//! order-independent (duplicate property names, duplicate enumeration
//! values, extension key prefix) fail at the call site; checks that
//! depend on the final node state (constraint category vs declared type,
//! enumeration range) are deferred to `validation::validate_document`.

use crate::error::{ModelError, ModelResult};
use crate::model::extensions::Extensions;
use crate::refs::ComponentKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The declared type of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// String type.
    String,
    /// Number type (floating point).
    Number,
    /// Integer type.
    Integer,
    /// Boolean type.
    Boolean,
    /// Array type.
    Array,
    /// Object type.
    Object,
    /// Null type.
    Null,
}

/// The `additionalProperties` keyword: a blanket flag or a value schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` (any extra properties) or `false` (none allowed).
    Flag(bool),
    /// Extra properties must match this owned child schema.
    Schema(Box<Schema>),
}

/// A JSON-Schema-like type description, composable via
/// `allOf` / `oneOf` / `anyOf` / `not`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Reference into the Components registry. Mutually exclusive with
    /// the inline fields below.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// The declared type. Absent for composition-only schemas.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    /// Additional format hint (e.g. `int64`, `date-time`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Short title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default value for instances of this schema.
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Enumerated allowed values. Order-significant, duplicate-free.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enumeration: Vec<Value>,

    /// Lower numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Whether `minimum` is exclusive.
    #[serde(
        rename = "exclusiveMinimum",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub exclusive_minimum: bool,

    /// Upper numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Whether `maximum` is exclusive.
    #[serde(
        rename = "exclusiveMaximum",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub exclusive_maximum: bool,

    /// Instances must be a multiple of this strictly positive number.
    #[serde(rename = "multipleOf", skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    /// Minimum string length.
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Maximum string length.
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Regular expression the string must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Item schema for arrays. Owned child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Minimum array length.
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,

    /// Maximum array length.
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,

    /// Whether array items must be unique.
    #[serde(rename = "uniqueItems", default, skip_serializing_if = "std::ops::Not::not")]
    pub unique_items: bool,

    /// Named properties for objects. Insertion order preserved.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    /// Property names that must be present. Order-significant,
    /// duplicate-free.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Constraint on properties not named in `properties`.
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    /// Minimum number of properties.
    #[serde(rename = "minProperties", skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,

    /// Maximum number of properties.
    #[serde(rename = "maxProperties", skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,

    /// Instances must match every listed schema.
    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<Schema>,

    /// Instances must match exactly one listed schema.
    #[serde(rename = "oneOf", default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<Schema>,

    /// Instances must match at least one listed schema.
    #[serde(rename = "anyOf", default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<Schema>,

    /// Instances must not match this schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,

    /// Whether `null` is an allowed instance value.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,

    /// Property is returned by the API but never sent to it.
    #[serde(rename = "readOnly", default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,

    /// Property is sent to the API but never returned by it.
    #[serde(rename = "writeOnly", default, skip_serializing_if = "std::ops::Not::not")]
    pub write_only: bool,

    /// Consumers should migrate away from this schema.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,

    /// Specification extensions (and, in lenient mode, unknown keys).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schema typed `object`.
    pub fn object() -> Self {
        Self::new().schema_type(SchemaType::Object)
    }

    /// Creates a schema typed `string`.
    pub fn string() -> Self {
        Self::new().schema_type(SchemaType::String)
    }

    /// Creates a schema typed `integer`.
    pub fn integer() -> Self {
        Self::new().schema_type(SchemaType::Integer)
    }

    /// Creates a schema typed `number`.
    pub fn number() -> Self {
        Self::new().schema_type(SchemaType::Number)
    }

    /// Creates a schema typed `boolean`.
    pub fn boolean() -> Self {
        Self::new().schema_type(SchemaType::Boolean)
    }

    /// Creates a schema typed `array` with the given item schema.
    pub fn array(items: Schema) -> Self {
        Self::new()
            .schema_type(SchemaType::Array)
            .items(items)
    }

    /// Creates a reference schema. A bare component name expands to
    /// `#/components/schemas/{name}`; anything containing `#` or `/` is
    /// taken as a full pointer.
    pub fn reference(name_or_pointer: &str) -> Self {
        let ref_path = if name_or_pointer.contains('#') || name_or_pointer.contains('/') {
            name_or_pointer.to_string()
        } else {
            ComponentKind::Schema.pointer(name_or_pointer)
        };
        Self {
            ref_path: Some(ref_path),
            ..Self::default()
        }
    }

    /// True when this node is a reference rather than an inline definition.
    pub fn is_reference(&self) -> bool {
        self.ref_path.is_some()
    }

    /// True when any inline field is populated. A reference node for which
    /// this also holds is a modeling error.
    pub(crate) fn has_inline_content(&self) -> bool {
        let defaulted = Schema {
            ref_path: self.ref_path.clone(),
            extensions: self.extensions.clone(),
            ..Schema::default()
        };
        *self != defaulted
    }

    /// Sets the declared type.
    pub fn schema_type(mut self, schema_type: SchemaType) -> Self {
        self.schema_type = Some(schema_type);
        self
    }

    /// Sets the format hint.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Sets the example value.
    pub fn example(mut self, value: Value) -> Self {
        self.example = Some(value);
        self
    }

    /// Replaces the enumeration, rejecting duplicate values.
    pub fn enumeration(mut self, values: Vec<Value>) -> ModelResult<Self> {
        self.enumeration.clear();
        for value in values {
            self = self.add_enumeration_item(value)?;
        }
        Ok(self)
    }

    /// Appends one enumeration value, rejecting duplicates.
    pub fn add_enumeration_item(mut self, value: Value) -> ModelResult<Self> {
        if self.enumeration.contains(&value) {
            return Err(ModelError::constraint(
                "enum",
                format!("duplicate enumeration value {}", value),
            ));
        }
        self.enumeration.push(value);
        Ok(self)
    }

    /// Sets the lower numeric bound.
    pub fn minimum(mut self, minimum: f64, exclusive: bool) -> Self {
        self.minimum = Some(minimum);
        self.exclusive_minimum = exclusive;
        self
    }

    /// Sets the upper numeric bound.
    pub fn maximum(mut self, maximum: f64, exclusive: bool) -> Self {
        self.maximum = Some(maximum);
        self.exclusive_maximum = exclusive;
        self
    }

    /// Sets the `multipleOf` constraint.
    pub fn multiple_of(mut self, multiple_of: f64) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }

    /// Sets the minimum string length.
    pub fn min_length(mut self, min_length: u64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the maximum string length.
    pub fn max_length(mut self, max_length: u64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the string pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the item schema, taking ownership of the child.
    pub fn items(mut self, items: Schema) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Sets the minimum array length.
    pub fn min_items(mut self, min_items: u64) -> Self {
        self.min_items = Some(min_items);
        self
    }

    /// Sets the maximum array length.
    pub fn max_items(mut self, max_items: u64) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Requires array items to be unique.
    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = unique;
        self
    }

    /// Adds a named property, taking ownership of the child schema.
    /// Duplicate names are rejected at the call.
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> ModelResult<Self> {
        let name = name.into();
        if self.properties.contains_key(&name) {
            return Err(ModelError::constraint(
                format!("properties.{}", name),
                "duplicate property name".to_string(),
            ));
        }
        self.properties.insert(name, schema);
        Ok(self)
    }

    /// Marks a property name as required. Duplicates are rejected.
    pub fn required_name(mut self, name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        if self.required.contains(&name) {
            return Err(ModelError::constraint(
                "required",
                format!("duplicate required entry '{}'", name),
            ));
        }
        self.required.push(name);
        Ok(self)
    }

    /// Sets the `additionalProperties` flag.
    pub fn additional_properties_flag(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(AdditionalProperties::Flag(allowed));
        self
    }

    /// Sets the `additionalProperties` value schema, taking ownership.
    pub fn additional_properties_schema(mut self, schema: Schema) -> Self {
        self.additional_properties = Some(AdditionalProperties::Schema(Box::new(schema)));
        self
    }

    /// Sets the minimum property count.
    pub fn min_properties(mut self, min_properties: u64) -> Self {
        self.min_properties = Some(min_properties);
        self
    }

    /// Sets the maximum property count.
    pub fn max_properties(mut self, max_properties: u64) -> Self {
        self.max_properties = Some(max_properties);
        self
    }

    /// Appends an `allOf` branch (inline child or reference schema).
    pub fn add_all_of(mut self, schema: Schema) -> Self {
        self.all_of.push(schema);
        self
    }

    /// Appends a `oneOf` branch.
    pub fn add_one_of(mut self, schema: Schema) -> Self {
        self.one_of.push(schema);
        self
    }

    /// Appends an `anyOf` branch.
    pub fn add_any_of(mut self, schema: Schema) -> Self {
        self.any_of.push(schema);
        self
    }

    /// Sets the `not` schema, taking ownership of the child.
    pub fn not_schema(mut self, schema: Schema) -> Self {
        self.not = Some(Box::new(schema));
        self
    }

    /// Allows `null` instance values.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Marks the schema read-only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Marks the schema write-only.
    pub fn write_only(mut self, write_only: bool) -> Self {
        self.write_only = write_only;
        self
    }

    /// Marks the schema deprecated.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Adds a specification extension. Keys must start with `x-`.
    pub fn extension(mut self, key: impl Into<String>, value: Value) -> ModelResult<Self> {
        self.extensions.insert(key, value)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_object_properties_preserve_order() {
        let schema = Schema::object()
            .property("id", Schema::integer().format("int64"))
            .unwrap()
            .property("name", Schema::string())
            .unwrap()
            .required_name("id")
            .unwrap();

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["required"], json!(["id"]));
        let keys: Vec<&String> = value["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["id", "name"]);
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let err = Schema::object()
            .property("id", Schema::integer())
            .unwrap()
            .property("id", Schema::string())
            .unwrap_err();
        assert!(matches!(err, ModelError::Constraint { .. }));
    }

    #[test]
    fn test_duplicate_enumeration_rejected() {
        let err = Schema::string()
            .enumeration(vec![json!("cat"), json!("dog"), json!("cat")])
            .unwrap_err();
        assert!(format!("{}", err).contains("duplicate enumeration value"));
    }

    #[test]
    fn test_setter_order_does_not_affect_output() {
        let a = Schema::number().minimum(1.0, false).maximum(10.0, true);
        let b = Schema::new()
            .maximum(10.0, true)
            .minimum(1.0, false)
            .schema_type(SchemaType::Number);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_reference_expands_bare_name() {
        let schema = Schema::reference("Pet");
        assert_eq!(schema.ref_path.as_deref(), Some("#/components/schemas/Pet"));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value, json!({"$ref": "#/components/schemas/Pet"}));
    }

    #[test]
    fn test_composition_owns_children() {
        let schema = Schema::new()
            .add_one_of(Schema::string())
            .add_one_of(Schema::reference("Pet"));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["oneOf"][0], json!({"type": "string"}));
        assert_eq!(value["oneOf"][1], json!({"$ref": "#/components/schemas/Pet"}));
    }

    #[test]
    fn test_inline_content_detection() {
        assert!(!Schema::reference("Pet").has_inline_content());
        let mut conflicted = Schema::reference("Pet");
        conflicted.schema_type = Some(SchemaType::Object);
        assert!(conflicted.has_inline_content());
    }
}
