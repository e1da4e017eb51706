//! # Error Handling
//!
//! Provides the unified `ModelError` enum used across the crate.

use derive_more::Display;

/// Errors raised while building, validating or (de)serializing a document.
///
/// We use `derive_more` for boilerplate.
/// Structural errors carry a dotted path locating the offending node
/// (e.g. `components.schemas.Pet.properties.age`).
#[derive(Debug, Display, Clone, PartialEq)]
pub enum ModelError {
    /// A builder call or the validation pass detected a structural
    /// invariant violation.
    #[display("Constraint violation at '{path}': {message}")]
    Constraint {
        /// Dotted path of the offending node.
        path: String,
        /// Human-readable description naming the offending field.
        message: String,
    },

    /// A `$ref` could not be resolved against the Components registry.
    #[display("Unresolved reference '{reference}' at '{path}'")]
    UnresolvedReference {
        /// The unresolved pointer string.
        reference: String,
        /// Dotted path of the referencing node.
        path: String,
    },

    /// The graph could not be rendered to the interchange format.
    #[display("Serialization error: {_0}")]
    Serialization(String),

    /// Input did not parse as the interchange format, or strict mode
    /// rejected an unrecognized field.
    #[display("Deserialization error: {_0}")]
    Deserialization(String),
}

impl ModelError {
    /// Shorthand for a constraint violation at a known node path.
    pub fn constraint(path: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Constraint {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an unresolved reference at a known node path.
    pub fn unresolved(reference: impl Into<String>, path: impl Into<String>) -> Self {
        ModelError::UnresolvedReference {
            reference: reference.into(),
            path: path.into(),
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for ModelError {}

/// Helper type alias for Result using ModelError.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_display_includes_path() {
        let err = ModelError::constraint("components.schemas.Pet", "duplicate property 'id'");
        assert_eq!(
            format!("{}", err),
            "Constraint violation at 'components.schemas.Pet': duplicate property 'id'"
        );
    }

    #[test]
    fn test_unresolved_display() {
        let err = ModelError::unresolved("#/components/schemas/Pet", "paths./pets.get");
        assert_eq!(
            format!("{}", err),
            "Unresolved reference '#/components/schemas/Pet' at 'paths./pets.get'"
        );
    }
}
