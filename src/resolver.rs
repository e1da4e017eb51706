#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Resolves `$ref` pointers against a single document's Components
//! registry. Resolution is lazy: nothing is checked when a reference is
//! created, so registration order never matters as long as everything
//! resolves by the time a document is validated or emitted.
//!
//! Only local (`#/components/...`) pointers are resolvable; relative and
//! remote references are reported as unresolved. Deep walks track visited
//! component names, so self- and mutually-recursive schemas terminate.

use crate::error::{ModelError, ModelResult};
use crate::model::components::Components;
use crate::model::schema::{AdditionalProperties, Schema};
use crate::refs::{extract_component_name, ComponentKind};
use indexmap::IndexSet;

/// Resolves references against one document's Components registry.
pub struct Resolver<'a> {
    components: &'a Components,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over a registry.
    pub fn new(components: &'a Components) -> Self {
        Self { components }
    }

    /// Resolves a schema `$ref` to its registered definition.
    pub fn schema(&self, ref_str: &str, at_path: &str) -> ModelResult<&'a Schema> {
        let name = extract_component_name(ref_str, ComponentKind::Schema)
            .ok_or_else(|| ModelError::unresolved(ref_str, at_path))?;
        self.components
            .get_schema(&name)
            .ok_or_else(|| ModelError::unresolved(ref_str, at_path))
    }

    /// Checks that a `$ref` of the given kind names a registered entry.
    pub fn check(&self, kind: ComponentKind, ref_str: &str, at_path: &str) -> ModelResult<()> {
        let name = extract_component_name(ref_str, kind)
            .ok_or_else(|| ModelError::unresolved(ref_str, at_path))?;
        if self.components.contains(kind, &name) {
            Ok(())
        } else {
            Err(ModelError::unresolved(ref_str, at_path))
        }
    }

    /// Returns the component schema names reachable from a named root,
    /// following `$ref` edges. Visited names are tracked so recursive
    /// reference graphs terminate; the root itself is included.
    pub fn schema_closure(&self, root: &str) -> ModelResult<IndexSet<String>> {
        let mut visited = IndexSet::new();
        let mut pending = vec![root.to_string()];

        while let Some(name) = pending.pop() {
            if !visited.insert(name.clone()) {
                continue;
            }
            let schema = self.components.get_schema(&name).ok_or_else(|| {
                ModelError::unresolved(
                    ComponentKind::Schema.pointer(&name),
                    format!("components.schemas.{}", name),
                )
            })?;
            collect_schema_refs(schema, &mut pending);
        }

        Ok(visited)
    }
}

/// Pushes the component names referenced directly by a schema subtree.
fn collect_schema_refs(schema: &Schema, out: &mut Vec<String>) {
    if let Some(ref_path) = &schema.ref_path {
        if let Some(name) = extract_component_name(ref_path, ComponentKind::Schema) {
            out.push(name);
        }
        return;
    }

    if let Some(items) = &schema.items {
        collect_schema_refs(items, out);
    }
    for child in schema.properties.values() {
        collect_schema_refs(child, out);
    }
    if let Some(AdditionalProperties::Schema(child)) = &schema.additional_properties {
        collect_schema_refs(child, out);
    }
    for child in schema
        .all_of
        .iter()
        .chain(schema.one_of.iter())
        .chain(schema.any_of.iter())
    {
        collect_schema_refs(child, out);
    }
    if let Some(child) = &schema.not {
        collect_schema_refs(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::SchemaType;

    #[test]
    fn test_resolve_registered_schema() {
        let components = Components::new().schema("Pet", Schema::object()).unwrap();
        let resolver = Resolver::new(&components);
        let schema = resolver
            .schema("#/components/schemas/Pet", "paths./pets.get")
            .unwrap();
        assert_eq!(schema.schema_type, Some(SchemaType::Object));
    }

    #[test]
    fn test_unresolved_reference_reports_pointer_and_path() {
        let components = Components::new();
        let resolver = Resolver::new(&components);
        let err = resolver
            .schema("#/components/schemas/Ghost", "paths./x.get")
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::unresolved("#/components/schemas/Ghost", "paths./x.get")
        );
    }

    #[test]
    fn test_remote_reference_is_unresolved() {
        let components = Components::new().schema("Pet", Schema::object()).unwrap();
        let resolver = Resolver::new(&components);
        assert!(resolver
            .schema("https://example.com/api.yaml#/components/schemas/Pet", "p")
            .is_err());
    }

    #[test]
    fn test_closure_terminates_on_self_reference() {
        let node = Schema::object()
            .property("value", Schema::string())
            .unwrap()
            .property("next", Schema::reference("Node"))
            .unwrap();
        let components = Components::new().schema("Node", node).unwrap();
        let resolver = Resolver::new(&components);

        let closure = resolver.schema_closure("Node").unwrap();
        assert_eq!(closure.len(), 1);
        assert!(closure.contains("Node"));
    }

    #[test]
    fn test_closure_terminates_on_mutual_recursion() {
        let a = Schema::object()
            .property("b", Schema::reference("B"))
            .unwrap();
        let b = Schema::object()
            .property("a", Schema::reference("A"))
            .unwrap();
        let components = Components::new()
            .schema("A", a)
            .unwrap()
            .schema("B", b)
            .unwrap();
        let resolver = Resolver::new(&components);

        let closure = resolver.schema_closure("A").unwrap();
        assert_eq!(
            closure.iter().collect::<Vec<_>>(),
            ["A", "B"]
        );
    }
}
