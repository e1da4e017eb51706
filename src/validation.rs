#![deny(missing_docs)]

//! # Document Validation
//!
//! A single whole-graph pass that collects every structural violation,
//! not just the first, so a caller can fix a document in one round.
//! Each finding carries a dotted path locating the offending node
//! (e.g. `components.schemas.Pet.properties.age`).
//!
//! Checks that require only one node are still re-run here for documents
//! that arrived via deserialization and therefore bypassed the builders.

use crate::error::ModelError;
use crate::model::components::Components;
use crate::model::document::OpenApi;
use crate::model::extensions::{Extensions, RefOr};
use crate::model::media::{Content, Example, MediaType};
use crate::model::path::{
    Callback, Header, Operation, Parameter, PathItem, RequestBody, Response,
};
use crate::model::schema::{AdditionalProperties, Schema, SchemaType};
use crate::model::security::{SecurityRequirement, SecurityScheme};
use crate::model::server::Server;
use crate::refs::{decode_pointer_segment, parse_reference, ComponentKind, ReferenceKind};
use crate::resolver::Resolver;
use regex::Regex;
use std::collections::HashSet;

/// Validates a document, reporting all violations as a batch.
pub fn validate_document(doc: &OpenApi) -> Result<(), Vec<ModelError>> {
    let empty = Components::new();
    let components = doc.components.as_ref().unwrap_or(&empty);
    let resolver = Resolver::new(components);
    let mut errors = Vec::new();

    validate_info(doc, &mut errors);
    validate_tags(doc, &mut errors);
    validate_servers(&doc.servers, "servers", &mut errors);

    if let Some(requirements) = &doc.security {
        validate_security(requirements, "security", components, &mut errors);
    }

    for (template, item) in &doc.paths.items {
        validate_path_item(
            item,
            &format!("paths.{}", template),
            components,
            &resolver,
            &mut errors,
        );
    }

    validate_components(components, &resolver, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_info(doc: &OpenApi, errors: &mut Vec<ModelError>) {
    if doc.info.title.trim().is_empty() {
        errors.push(ModelError::constraint(
            "info.title",
            "must be a non-empty string",
        ));
    }
    if doc.info.version.trim().is_empty() {
        errors.push(ModelError::constraint(
            "info.version",
            "must be a non-empty string",
        ));
    }
}

fn validate_tags(doc: &OpenApi, errors: &mut Vec<ModelError>) {
    let mut seen = HashSet::new();
    for (i, tag) in doc.tags.iter().enumerate() {
        if !seen.insert(tag.name.clone()) {
            errors.push(ModelError::constraint(
                format!("tags[{}]", i),
                format!("duplicate tag name '{}'", tag.name),
            ));
        }
    }
}

fn validate_servers(servers: &[Server], path: &str, errors: &mut Vec<ModelError>) {
    for (i, server) in servers.iter().enumerate() {
        for (name, variable) in &server.variables {
            let var_path = format!("{}[{}].variables.{}", path, i, name);
            if variable.default.is_empty() {
                errors.push(ModelError::constraint(
                    &var_path,
                    "server variable default must be non-empty",
                ));
            }
            if !variable.enum_values.is_empty()
                && !variable.enum_values.contains(&variable.default)
            {
                errors.push(ModelError::constraint(
                    &var_path,
                    "server variable default must be listed in its enum",
                ));
            }
        }
    }
}

fn validate_security(
    requirements: &[SecurityRequirement],
    path: &str,
    components: &Components,
    errors: &mut Vec<ModelError>,
) {
    for (i, requirement) in requirements.iter().enumerate() {
        for (scheme_name, _scopes) in requirement.iter() {
            if !components.contains(ComponentKind::SecurityScheme, scheme_name) {
                errors.push(ModelError::constraint(
                    format!("{}[{}]", path, i),
                    format!(
                        "security requirement names unregistered scheme '{}'",
                        scheme_name
                    ),
                ));
            }
        }
    }
}

fn validate_path_item(
    item: &PathItem,
    path: &str,
    components: &Components,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    if let Some(ref_path) = &item.ref_path {
        if item.has_inline_content() {
            errors.push(ModelError::constraint(
                path,
                "path item $ref must not be combined with sibling fields",
            ));
        }
        check_path_item_ref(ref_path, path, components, errors);
        return;
    }

    for (i, parameter) in item.parameters.iter().enumerate() {
        validate_parameter_entry(
            parameter,
            &format!("{}.parameters[{}]", path, i),
            components,
            resolver,
            errors,
        );
    }

    for (method, op) in item.operations() {
        validate_operation(
            op,
            &format!("{}.{}", path, method),
            components,
            resolver,
            errors,
        );
    }
}

/// Path item references point at `#/components/pathItems/{name}`, a
/// section outside `ComponentKind`, so they are checked by hand.
fn check_path_item_ref(
    ref_path: &str,
    path: &str,
    components: &Components,
    errors: &mut Vec<ModelError>,
) {
    let parsed = parse_reference(ref_path);
    let resolved = parsed.kind == ReferenceKind::Local
        && parsed
            .fragment
            .map(|frag| {
                let segments: Vec<&str> =
                    frag.trim_start_matches('/').split('/').collect();
                segments.len() == 3
                    && segments[0] == "components"
                    && segments[1] == "pathItems"
                    && components
                        .path_items
                        .contains_key(&decode_pointer_segment(segments[2]))
            })
            .unwrap_or(false);

    if !resolved {
        errors.push(ModelError::unresolved(ref_path, path));
    }
}

fn validate_operation(
    op: &Operation,
    path: &str,
    components: &Components,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    if op.responses.is_empty() {
        errors.push(ModelError::constraint(
            path,
            "operation must define at least one response",
        ));
    }

    for (i, parameter) in op.parameters.iter().enumerate() {
        validate_parameter_entry(
            parameter,
            &format!("{}.parameters[{}]", path, i),
            components,
            resolver,
            errors,
        );
    }

    if let Some(body) = &op.request_body {
        let body_path = format!("{}.requestBody", path);
        match body {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::RequestBody, &r.ref_path, &body_path, errors)
            }
            RefOr::Item(body) => validate_request_body(body, &body_path, resolver, errors),
        }
    }

    for (status, response) in &op.responses.items {
        let response_path = format!("{}.responses.{}", path, status);
        match response {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::Response, &r.ref_path, &response_path, errors)
            }
            RefOr::Item(response) => {
                validate_response(response, &response_path, resolver, errors)
            }
        }
    }

    for (name, callback) in &op.callbacks {
        let callback_path = format!("{}.callbacks.{}", path, name);
        match callback {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::Callback, &r.ref_path, &callback_path, errors)
            }
            RefOr::Item(callback) => {
                for (expr, item) in &callback.items {
                    validate_path_item(
                        item,
                        &format!("{}.{}", callback_path, expr),
                        components,
                        resolver,
                        errors,
                    );
                }
            }
        }
    }

    if let Some(requirements) = &op.security {
        validate_security(requirements, &format!("{}.security", path), components, errors);
    }

    validate_servers(&op.servers, &format!("{}.servers", path), errors);
}

fn validate_parameter_entry(
    parameter: &RefOr<Parameter>,
    path: &str,
    _components: &Components,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    match parameter {
        RefOr::Ref(r) => check_ref(resolver, ComponentKind::Parameter, &r.ref_path, path, errors),
        RefOr::Item(parameter) => validate_parameter(parameter, path, resolver, errors),
    }
}

fn validate_parameter(
    parameter: &Parameter,
    path: &str,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    use crate::model::path::ParameterLocation;
    if parameter.location == ParameterLocation::Path && !parameter.required {
        errors.push(ModelError::constraint(
            path,
            format!("path parameter '{}' must be required", parameter.name),
        ));
    }
    if let Some(schema) = &parameter.schema {
        validate_schema(schema, &format!("{}.schema", path), resolver, errors);
    }
    validate_examples(&parameter.examples, path, resolver, errors);
}

fn validate_request_body(
    body: &RequestBody,
    path: &str,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    validate_content(&body.content, path, resolver, errors);
}

fn validate_response(
    response: &Response,
    path: &str,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    for (name, header) in &response.headers {
        let header_path = format!("{}.headers.{}", path, name);
        match header {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::Header, &r.ref_path, &header_path, errors)
            }
            RefOr::Item(header) => {
                if let Some(schema) = &header.schema {
                    validate_schema(schema, &format!("{}.schema", header_path), resolver, errors);
                }
            }
        }
    }

    validate_content(&response.content, path, resolver, errors);

    for (name, link) in &response.links {
        if let RefOr::Ref(r) = link {
            check_ref(
                resolver,
                ComponentKind::Link,
                &r.ref_path,
                &format!("{}.links.{}", path, name),
                errors,
            );
        }
    }
}

fn validate_content(
    content: &Content,
    path: &str,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    for (media_type, media) in content.iter() {
        let media_path = format!("{}.content.{}", path, media_type);
        if let Some(schema) = &media.schema {
            validate_schema(schema, &format!("{}.schema", media_path), resolver, errors);
        }
        validate_examples(&media.examples, &media_path, resolver, errors);
    }
}

fn validate_examples(
    examples: &indexmap::IndexMap<String, RefOr<Example>>,
    path: &str,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    for (name, example) in examples {
        let example_path = format!("{}.examples.{}", path, name);
        match example {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::Example, &r.ref_path, &example_path, errors)
            }
            RefOr::Item(example) => {
                if example.value.is_some() && example.external_value.is_some() {
                    errors.push(ModelError::constraint(
                        &example_path,
                        "'value' and 'externalValue' are mutually exclusive",
                    ));
                }
            }
        }
    }
}

fn validate_components(
    components: &Components,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    // Builder registration enforces the key pattern; deserialized
    // documents arrive with arbitrary keys and are re-checked here.
    let sections: [(&str, Vec<&String>); 10] = [
        ("schemas", components.schemas.keys().collect()),
        ("responses", components.responses.keys().collect()),
        ("parameters", components.parameters.keys().collect()),
        ("examples", components.examples.keys().collect()),
        ("requestBodies", components.request_bodies.keys().collect()),
        ("headers", components.headers.keys().collect()),
        ("securitySchemes", components.security_schemes.keys().collect()),
        ("links", components.links.keys().collect()),
        ("callbacks", components.callbacks.keys().collect()),
        ("pathItems", components.path_items.keys().collect()),
    ];
    for (section, keys) in sections {
        for name in keys {
            if !crate::model::components::key_is_valid(name) {
                errors.push(ModelError::constraint(
                    format!("components.{}.{}", section, name),
                    "component key contains characters outside [a-zA-Z0-9._-]",
                ));
            }
        }
    }

    for (name, schema) in &components.schemas {
        validate_schema(
            schema,
            &format!("components.schemas.{}", name),
            resolver,
            errors,
        );
    }
    for (name, response) in &components.responses {
        let path = format!("components.responses.{}", name);
        match response {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::Response, &r.ref_path, &path, errors)
            }
            RefOr::Item(response) => validate_response(response, &path, resolver, errors),
        }
    }
    for (name, parameter) in &components.parameters {
        let path = format!("components.parameters.{}", name);
        match parameter {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::Parameter, &r.ref_path, &path, errors)
            }
            RefOr::Item(parameter) => validate_parameter(parameter, &path, resolver, errors),
        }
    }
    for (name, body) in &components.request_bodies {
        let path = format!("components.requestBodies.{}", name);
        match body {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::RequestBody, &r.ref_path, &path, errors)
            }
            RefOr::Item(body) => validate_request_body(body, &path, resolver, errors),
        }
    }
    for (name, header) in &components.headers {
        let path = format!("components.headers.{}", name);
        match header {
            RefOr::Ref(r) => check_ref(resolver, ComponentKind::Header, &r.ref_path, &path, errors),
            RefOr::Item(header) => {
                if let Some(schema) = &header.schema {
                    validate_schema(schema, &format!("{}.schema", path), resolver, errors);
                }
            }
        }
    }
    for (name, example) in &components.examples {
        let path = format!("components.examples.{}", name);
        match example {
            RefOr::Ref(r) => check_ref(resolver, ComponentKind::Example, &r.ref_path, &path, errors),
            RefOr::Item(example) => {
                if example.value.is_some() && example.external_value.is_some() {
                    errors.push(ModelError::constraint(
                        &path,
                        "'value' and 'externalValue' are mutually exclusive",
                    ));
                }
            }
        }
    }
    for (name, callback) in &components.callbacks {
        let path = format!("components.callbacks.{}", name);
        match callback {
            RefOr::Ref(r) => {
                check_ref(resolver, ComponentKind::Callback, &r.ref_path, &path, errors)
            }
            RefOr::Item(callback) => {
                for (expr, item) in &callback.items {
                    validate_path_item(
                        item,
                        &format!("{}.{}", path, expr),
                        components,
                        resolver,
                        errors,
                    );
                }
            }
        }
    }
    for (name, link) in &components.links {
        if let RefOr::Ref(r) = link {
            check_ref(
                resolver,
                ComponentKind::Link,
                &r.ref_path,
                &format!("components.links.{}", name),
                errors,
            );
        }
    }
    for (name, scheme) in &components.security_schemes {
        if let RefOr::Ref(r) = scheme {
            check_ref(
                resolver,
                ComponentKind::SecurityScheme,
                &r.ref_path,
                &format!("components.securitySchemes.{}", name),
                errors,
            );
        }
    }
    for (name, item) in &components.path_items {
        validate_path_item(
            item,
            &format!("components.pathItems.{}", name),
            components,
            resolver,
            errors,
        );
    }
}

fn check_ref(
    resolver: &Resolver<'_>,
    kind: ComponentKind,
    ref_path: &str,
    at_path: &str,
    errors: &mut Vec<ModelError>,
) {
    if let Err(err) = resolver.check(kind, ref_path, at_path) {
        errors.push(err);
    }
}

fn type_name(schema_type: SchemaType) -> &'static str {
    match schema_type {
        SchemaType::String => "string",
        SchemaType::Number => "number",
        SchemaType::Integer => "integer",
        SchemaType::Boolean => "boolean",
        SchemaType::Array => "array",
        SchemaType::Object => "object",
        SchemaType::Null => "null",
    }
}

/// Validates one schema node and recurses into its owned children.
///
/// References are checked for existence but never expanded here: the
/// owning registry validates each registered schema at its own path, so
/// recursive reference graphs cannot loop this walk.
fn validate_schema(
    schema: &Schema,
    path: &str,
    resolver: &Resolver<'_>,
    errors: &mut Vec<ModelError>,
) {
    if let Some(ref_path) = &schema.ref_path {
        if schema.has_inline_content() {
            errors.push(ModelError::constraint(
                path,
                "a schema is either a $ref or an inline definition, not both",
            ));
        }
        check_ref(resolver, ComponentKind::Schema, ref_path, path, errors);
        return;
    }

    validate_constraint_categories(schema, path, errors);

    if let Some(multiple_of) = schema.multiple_of {
        if multiple_of <= 0.0 {
            errors.push(ModelError::constraint(
                path,
                "'multipleOf' must be strictly positive",
            ));
        }
    }

    if let Some(pattern) = &schema.pattern {
        if Regex::new(pattern).is_err() {
            errors.push(ModelError::constraint(
                path,
                format!("'pattern' is not a valid regular expression: {}", pattern),
            ));
        }
    }

    validate_enumeration(schema, path, errors);

    let mut required_seen = HashSet::new();
    for name in &schema.required {
        if !required_seen.insert(name) {
            errors.push(ModelError::constraint(
                path,
                format!("duplicate 'required' entry '{}'", name),
            ));
        }
    }

    if let Some(items) = &schema.items {
        validate_schema(items, &format!("{}.items", path), resolver, errors);
    }
    for (name, child) in &schema.properties {
        validate_schema(child, &format!("{}.properties.{}", path, name), resolver, errors);
    }
    if let Some(AdditionalProperties::Schema(child)) = &schema.additional_properties {
        validate_schema(child, &format!("{}.additionalProperties", path), resolver, errors);
    }
    for (i, child) in schema.all_of.iter().enumerate() {
        validate_schema(child, &format!("{}.allOf[{}]", path, i), resolver, errors);
    }
    for (i, child) in schema.one_of.iter().enumerate() {
        validate_schema(child, &format!("{}.oneOf[{}]", path, i), resolver, errors);
    }
    for (i, child) in schema.any_of.iter().enumerate() {
        validate_schema(child, &format!("{}.anyOf[{}]", path, i), resolver, errors);
    }
    if let Some(child) = &schema.not {
        validate_schema(child, &format!("{}.not", path), resolver, errors);
    }
}

/// Rejects constraints whose category does not match the declared type.
/// Untyped schemas (composition-only) skip these checks entirely.
fn validate_constraint_categories(schema: &Schema, path: &str, errors: &mut Vec<ModelError>) {
    let Some(declared) = schema.schema_type else {
        return;
    };

    let mut misapplied = |field: &str, applies: bool| {
        if !applies {
            errors.push(ModelError::constraint(
                path,
                format!(
                    "'{}' does not apply to a schema of type '{}'",
                    field,
                    type_name(declared)
                ),
            ));
        }
    };

    let numeric = matches!(declared, SchemaType::Number | SchemaType::Integer);
    if schema.minimum.is_some() {
        misapplied("minimum", numeric);
    }
    if schema.maximum.is_some() {
        misapplied("maximum", numeric);
    }
    if schema.multiple_of.is_some() {
        misapplied("multipleOf", numeric);
    }

    let stringy = declared == SchemaType::String;
    if schema.min_length.is_some() {
        misapplied("minLength", stringy);
    }
    if schema.max_length.is_some() {
        misapplied("maxLength", stringy);
    }
    if schema.pattern.is_some() {
        misapplied("pattern", stringy);
    }

    let arrayish = declared == SchemaType::Array;
    if schema.items.is_some() {
        misapplied("items", arrayish);
    }
    if schema.min_items.is_some() {
        misapplied("minItems", arrayish);
    }
    if schema.max_items.is_some() {
        misapplied("maxItems", arrayish);
    }
    if schema.unique_items {
        misapplied("uniqueItems", arrayish);
    }

    let objectish = declared == SchemaType::Object;
    if !schema.properties.is_empty() {
        misapplied("properties", objectish);
    }
    if !schema.required.is_empty() {
        misapplied("required", objectish);
    }
    if schema.additional_properties.is_some() {
        misapplied("additionalProperties", objectish);
    }
    if schema.min_properties.is_some() {
        misapplied("minProperties", objectish);
    }
    if schema.max_properties.is_some() {
        misapplied("maxProperties", objectish);
    }
}

/// Checks each enumeration entry against the node's own type and
/// numeric range.
fn validate_enumeration(schema: &Schema, path: &str, errors: &mut Vec<ModelError>) {
    let Some(declared) = schema.schema_type else {
        return;
    };

    for (i, value) in schema.enumeration.iter().enumerate() {
        let entry_path = format!("{}.enum[{}]", path, i);

        if value.is_null() {
            if !schema.nullable && declared != SchemaType::Null {
                errors.push(ModelError::constraint(
                    &entry_path,
                    "null is not allowed by a non-nullable schema",
                ));
            }
            continue;
        }

        let type_matches = match declared {
            SchemaType::String => value.is_string(),
            SchemaType::Number => value.is_number(),
            SchemaType::Integer => value.is_i64() || value.is_u64(),
            SchemaType::Boolean => value.is_boolean(),
            SchemaType::Array => value.is_array(),
            SchemaType::Object => value.is_object(),
            SchemaType::Null => value.is_null(),
        };
        if !type_matches {
            errors.push(ModelError::constraint(
                &entry_path,
                format!(
                    "enumeration value {} does not match type '{}'",
                    value,
                    type_name(declared)
                ),
            ));
            continue;
        }

        if let Some(number) = value.as_f64() {
            if let Some(minimum) = schema.minimum {
                let below = if schema.exclusive_minimum {
                    number <= minimum
                } else {
                    number < minimum
                };
                if below {
                    errors.push(ModelError::constraint(
                        &entry_path,
                        format!("enumeration value {} is below the minimum", value),
                    ));
                }
            }
            if let Some(maximum) = schema.maximum {
                let above = if schema.exclusive_maximum {
                    number >= maximum
                } else {
                    number > maximum
                };
                if above {
                    errors.push(ModelError::constraint(
                        &entry_path,
                        format!("enumeration value {} is above the maximum", value),
                    ));
                }
            }
        }
    }
}

/// Strict-mode scan: reports every captured key outside the `x-`
/// extension prefix anywhere in the graph. Lenient deserialization
/// keeps such keys verbatim; strict callers reject them.
pub fn check_strict(doc: &OpenApi) -> Result<(), ModelError> {
    let mut offenders = Vec::new();

    scan_extensions(&doc.extensions, "", &mut offenders);
    scan_extensions(&doc.info.extensions, "info", &mut offenders);
    if let Some(contact) = &doc.info.contact {
        scan_extensions(&contact.extensions, "info.contact", &mut offenders);
    }
    if let Some(license) = &doc.info.license {
        scan_extensions(&license.extensions, "info.license", &mut offenders);
    }
    for (i, server) in doc.servers.iter().enumerate() {
        scan_server(server, &format!("servers[{}]", i), &mut offenders);
    }
    for (i, tag) in doc.tags.iter().enumerate() {
        scan_extensions(&tag.extensions, &format!("tags[{}]", i), &mut offenders);
    }
    if let Some(docs) = &doc.external_docs {
        scan_extensions(&docs.extensions, "externalDocs", &mut offenders);
    }

    scan_extensions(&doc.paths.extensions, "paths", &mut offenders);
    for (template, item) in &doc.paths.items {
        scan_path_item(item, &format!("paths.{}", template), &mut offenders);
    }

    if let Some(components) = &doc.components {
        scan_components(components, &mut offenders);
    }

    if offenders.is_empty() {
        Ok(())
    } else {
        Err(ModelError::Deserialization(format!(
            "unrecognized fields: {}",
            offenders.join(", ")
        )))
    }
}

fn scan_extensions(extensions: &Extensions, path: &str, offenders: &mut Vec<String>) {
    for key in extensions.unknown_keys() {
        if path.is_empty() {
            offenders.push(key.clone());
        } else {
            offenders.push(format!("{}.{}", path, key));
        }
    }
}

fn scan_server(server: &Server, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&server.extensions, path, offenders);
    for (name, variable) in &server.variables {
        scan_extensions(
            &variable.extensions,
            &format!("{}.variables.{}", path, name),
            offenders,
        );
    }
}

fn scan_path_item(item: &PathItem, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&item.extensions, path, offenders);
    for (i, parameter) in item.parameters.iter().enumerate() {
        if let RefOr::Item(parameter) = parameter {
            scan_parameter(parameter, &format!("{}.parameters[{}]", path, i), offenders);
        }
    }
    for (method, op) in item.operations() {
        scan_operation(op, &format!("{}.{}", path, method), offenders);
    }
}

fn scan_operation(op: &Operation, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&op.extensions, path, offenders);
    for (i, parameter) in op.parameters.iter().enumerate() {
        if let RefOr::Item(parameter) = parameter {
            scan_parameter(parameter, &format!("{}.parameters[{}]", path, i), offenders);
        }
    }
    if let Some(RefOr::Item(body)) = &op.request_body {
        scan_request_body(body, &format!("{}.requestBody", path), offenders);
    }
    scan_extensions(&op.responses.extensions, &format!("{}.responses", path), offenders);
    for (status, response) in &op.responses.items {
        if let RefOr::Item(response) = response {
            scan_response(response, &format!("{}.responses.{}", path, status), offenders);
        }
    }
    for (name, callback) in &op.callbacks {
        if let RefOr::Item(callback) = callback {
            scan_callback(callback, &format!("{}.callbacks.{}", path, name), offenders);
        }
    }
    for (i, server) in op.servers.iter().enumerate() {
        scan_server(server, &format!("{}.servers[{}]", path, i), offenders);
    }
}

fn scan_parameter(parameter: &Parameter, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&parameter.extensions, path, offenders);
    if let Some(schema) = &parameter.schema {
        scan_schema(schema, &format!("{}.schema", path), offenders);
    }
}

fn scan_request_body(body: &RequestBody, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&body.extensions, path, offenders);
    scan_content(&body.content, path, offenders);
}

fn scan_response(response: &Response, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&response.extensions, path, offenders);
    for (name, header) in &response.headers {
        if let RefOr::Item(header) = header {
            scan_header(header, &format!("{}.headers.{}", path, name), offenders);
        }
    }
    scan_content(&response.content, path, offenders);
    for (name, link) in &response.links {
        if let RefOr::Item(link) = link {
            scan_extensions(&link.extensions, &format!("{}.links.{}", path, name), offenders);
        }
    }
}

fn scan_header(header: &Header, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&header.extensions, path, offenders);
    if let Some(schema) = &header.schema {
        scan_schema(schema, &format!("{}.schema", path), offenders);
    }
}

fn scan_content(content: &Content, path: &str, offenders: &mut Vec<String>) {
    for (media_type, media) in content.iter() {
        scan_media_type(media, &format!("{}.content.{}", path, media_type), offenders);
    }
}

fn scan_media_type(media: &MediaType, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&media.extensions, path, offenders);
    if let Some(schema) = &media.schema {
        scan_schema(schema, &format!("{}.schema", path), offenders);
    }
    for (name, example) in &media.examples {
        if let RefOr::Item(example) = example {
            scan_extensions(
                &example.extensions,
                &format!("{}.examples.{}", path, name),
                offenders,
            );
        }
    }
}

fn scan_callback(callback: &Callback, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&callback.extensions, path, offenders);
    for (expr, item) in &callback.items {
        scan_path_item(item, &format!("{}.{}", path, expr), offenders);
    }
}

fn scan_schema(schema: &Schema, path: &str, offenders: &mut Vec<String>) {
    scan_extensions(&schema.extensions, path, offenders);
    if let Some(items) = &schema.items {
        scan_schema(items, &format!("{}.items", path), offenders);
    }
    for (name, child) in &schema.properties {
        scan_schema(child, &format!("{}.properties.{}", path, name), offenders);
    }
    if let Some(AdditionalProperties::Schema(child)) = &schema.additional_properties {
        scan_schema(child, &format!("{}.additionalProperties", path), offenders);
    }
    for (i, child) in schema.all_of.iter().enumerate() {
        scan_schema(child, &format!("{}.allOf[{}]", path, i), offenders);
    }
    for (i, child) in schema.one_of.iter().enumerate() {
        scan_schema(child, &format!("{}.oneOf[{}]", path, i), offenders);
    }
    for (i, child) in schema.any_of.iter().enumerate() {
        scan_schema(child, &format!("{}.anyOf[{}]", path, i), offenders);
    }
    if let Some(child) = &schema.not {
        scan_schema(child, &format!("{}.not", path), offenders);
    }
}

fn scan_components(components: &Components, offenders: &mut Vec<String>) {
    scan_extensions(&components.extensions, "components", offenders);
    for (name, schema) in &components.schemas {
        scan_schema(schema, &format!("components.schemas.{}", name), offenders);
    }
    for (name, response) in &components.responses {
        if let RefOr::Item(response) = response {
            scan_response(response, &format!("components.responses.{}", name), offenders);
        }
    }
    for (name, parameter) in &components.parameters {
        if let RefOr::Item(parameter) = parameter {
            scan_parameter(parameter, &format!("components.parameters.{}", name), offenders);
        }
    }
    for (name, body) in &components.request_bodies {
        if let RefOr::Item(body) = body {
            scan_request_body(body, &format!("components.requestBodies.{}", name), offenders);
        }
    }
    for (name, header) in &components.headers {
        if let RefOr::Item(header) = header {
            scan_header(header, &format!("components.headers.{}", name), offenders);
        }
    }
    for (name, example) in &components.examples {
        if let RefOr::Item(example) = example {
            scan_extensions(
                &example.extensions,
                &format!("components.examples.{}", name),
                offenders,
            );
        }
    }
    for (name, link) in &components.links {
        if let RefOr::Item(link) = link {
            scan_extensions(
                &link.extensions,
                &format!("components.links.{}", name),
                offenders,
            );
        }
    }
    for (name, callback) in &components.callbacks {
        if let RefOr::Item(callback) = callback {
            scan_callback(callback, &format!("components.callbacks.{}", name), offenders);
        }
    }
    for (name, scheme) in &components.security_schemes {
        if let RefOr::Item(scheme) = scheme {
            let path = format!("components.securitySchemes.{}", name);
            match scheme {
                SecurityScheme::ApiKey(s) => scan_extensions(&s.extensions, &path, offenders),
                SecurityScheme::Http(s) => scan_extensions(&s.extensions, &path, offenders),
                SecurityScheme::OAuth2(s) => scan_extensions(&s.extensions, &path, offenders),
                SecurityScheme::OpenIdConnect(s) => scan_extensions(&s.extensions, &path, offenders),
            }
        }
    }
    for (name, item) in &components.path_items {
        scan_path_item(item, &format!("components.pathItems.{}", name), offenders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::info::Info;
    use crate::model::path::{Operation, Response, Responses};
    use serde_json::json;

    fn doc_with_components(components: Components) -> OpenApi {
        OpenApi::new(Info::new("T", "1.0")).components(components)
    }

    #[test]
    fn test_enum_value_on_exclusive_maximum_rejected() {
        let schema = Schema::number()
            .minimum(1.0, false)
            .maximum(10.0, true)
            .enumeration(vec![json!(1), json!(5), json!(10)])
            .unwrap();
        let components = Components::new().schema("Score", schema).unwrap();
        let errors = validate_document(&doc_with_components(components)).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            ModelError::constraint(
                "components.schemas.Score.enum[2]",
                "enumeration value 10 is above the maximum"
            )
        );
    }

    #[test]
    fn test_constraint_category_mismatch_reported_with_path() {
        let mut schema = Schema::object();
        schema.minimum = Some(1.0);
        let components = Components::new().schema("Pet", schema).unwrap();
        let errors = validate_document(&doc_with_components(components)).unwrap_err();

        assert!(errors.iter().any(|e| {
            matches!(e, ModelError::Constraint { path, message }
                if path == "components.schemas.Pet"
                    && message.contains("'minimum' does not apply"))
        }));
    }

    #[test]
    fn test_ref_with_inline_fields_rejected() {
        let mut schema = Schema::reference("Other");
        schema.schema_type = Some(SchemaType::Object);
        let components = Components::new()
            .schema("Other", Schema::object())
            .unwrap()
            .schema("Bad", schema)
            .unwrap();
        let errors = validate_document(&doc_with_components(components)).unwrap_err();

        assert!(errors.iter().any(|e| {
            matches!(e, ModelError::Constraint { path, .. } if path == "components.schemas.Bad")
        }));
    }

    #[test]
    fn test_unresolved_reference_batched_with_other_errors() {
        let schema = Schema::object()
            .property("owner", Schema::reference("Ghost"))
            .unwrap();
        let mut bad_number = Schema::string();
        bad_number.maximum = Some(3.0);
        let components = Components::new()
            .schema("Pet", schema)
            .unwrap()
            .schema("BadNumber", bad_number)
            .unwrap();
        let errors = validate_document(&doc_with_components(components)).unwrap_err();

        // Both violations reported in one pass.
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ModelError::unresolved(
            "#/components/schemas/Ghost",
            "components.schemas.Pet.properties.owner"
        )));
    }

    #[test]
    fn test_self_referential_schema_validates() {
        let node = Schema::object()
            .property("value", Schema::string())
            .unwrap()
            .property("next", Schema::reference("Node"))
            .unwrap();
        let components = Components::new().schema("Node", node).unwrap();
        assert!(validate_document(&doc_with_components(components)).is_ok());
    }

    #[test]
    fn test_operation_without_responses_rejected() {
        let doc = OpenApi::new(Info::new("T", "1.0"))
            .path("/pets", crate::model::path::PathItem::new().get(Operation::new()))
            .unwrap();
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors.iter().any(|e| {
            matches!(e, ModelError::Constraint { path, message }
                if path == "paths./pets.get" && message.contains("at least one response"))
        }));
    }

    #[test]
    fn test_security_requirement_must_name_registered_scheme() {
        let doc = OpenApi::new(Info::new("T", "1.0")).security_requirement(
            crate::model::security::SecurityRequirement::new().scheme("api_key", vec![]),
        );
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| format!("{}", e).contains("unregistered scheme 'api_key'")));
    }

    #[test]
    fn test_duplicate_tag_names_rejected() {
        let doc = OpenApi::new(Info::new("T", "1.0"))
            .tag(crate::model::server::Tag::new("pets"))
            .tag(crate::model::server::Tag::new("pets"));
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| format!("{}", e).contains("duplicate tag name 'pets'")));
    }

    #[test]
    fn test_path_item_ref_with_siblings_rejected() {
        let item = crate::model::path::PathItem::reference("#/components/pathItems/Shared")
            .summary("sneaky sibling");
        let components = Components::new()
            .path_item("Shared", crate::model::path::PathItem::new().get(
                Operation::new().responses(
                    Responses::new()
                        .response("200", Response::new("ok").into())
                        .unwrap(),
                ),
            ))
            .unwrap();
        let doc = OpenApi::new(Info::new("T", "1.0"))
            .components(components)
            .path("/shared", item)
            .unwrap();
        let errors = validate_document(&doc).unwrap_err();
        assert!(errors.iter().any(|e| {
            matches!(e, ModelError::Constraint { path, message }
                if path == "paths./shared" && message.contains("sibling"))
        }));
    }

    #[test]
    fn test_dangling_link_ref_in_components_rejected() {
        use crate::model::extensions::Ref;
        let components = Components::new()
            .link("Broken", RefOr::Ref(Ref::new("#/components/links/Ghost")))
            .unwrap();
        let errors = validate_document(&doc_with_components(components)).unwrap_err();
        assert_eq!(
            errors,
            vec![ModelError::unresolved(
                "#/components/links/Ghost",
                "components.links.Broken"
            )]
        );
    }

    #[test]
    fn test_dangling_security_scheme_ref_in_components_rejected() {
        use crate::model::extensions::Ref;
        let mut components = Components::new();
        components.security_schemes.insert(
            "Broken".to_string(),
            RefOr::Ref(Ref::new("#/components/securitySchemes/Ghost")),
        );
        let errors = validate_document(&doc_with_components(components)).unwrap_err();
        assert_eq!(
            errors,
            vec![ModelError::unresolved(
                "#/components/securitySchemes/Ghost",
                "components.securitySchemes.Broken"
            )]
        );
    }

    #[test]
    fn test_strict_scan_reaches_component_links_and_examples() {
        let yaml = r#"
openapi: 3.0.3
info:
  title: T
  version: "1.0"
paths: {}
components:
  links:
    PetLink:
      operationId: findPetById
      bogusField: 42
  examples:
    Ex:
      summary: an example
      surprise: true
"#;
        let doc = OpenApi::from_yaml(yaml).unwrap();
        // Lenient parsing keeps both keys verbatim.
        let value = doc.to_json_value().unwrap();
        assert_eq!(
            value["components"]["links"]["PetLink"]["bogusField"],
            serde_json::json!(42)
        );

        let err = check_strict(&doc).unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("components.links.PetLink.bogusField"));
        assert!(msg.contains("components.examples.Ex.surprise"));
    }

    #[test]
    fn test_valid_document_passes() {
        let pet = Schema::object()
            .property("id", Schema::integer().format("int64"))
            .unwrap()
            .property("name", Schema::string())
            .unwrap()
            .required_name("id")
            .unwrap();
        let components = Components::new().schema("Pet", pet).unwrap();
        let doc = OpenApi::new(Info::new("Petstore", "1.0.0"))
            .components(components)
            .path(
                "/pets",
                crate::model::path::PathItem::new().get(
                    Operation::new().responses(
                        Responses::new()
                            .response("200", Response::new("ok").into())
                            .unwrap(),
                    ),
                ),
            )
            .unwrap();
        assert!(validate_document(&doc).is_ok());
    }
}
