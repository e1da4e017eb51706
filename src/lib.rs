#![deny(missing_docs)]

//! # OAS Model
//!
//! An in-memory object model for OpenAPI 3.0 documents: fluent builders
//! for assembling the node graph (paths, operations, schemas, responses),
//! a `Components` registry that `$ref` pointers resolve against, lossless
//! JSON/YAML round-tripping, and a batch validation pass that reports
//! every structural violation with a dotted path to the offending node.
//!
//! ```
//! use oas_model::{Components, Info, OpenApi, Schema};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pet = Schema::object()
//!     .property("id", Schema::integer().format("int64"))?
//!     .property("name", Schema::string())?
//!     .required_name("id")?;
//!
//! let doc = OpenApi::new(Info::new("Petstore", "1.0.0"))
//!     .components(Components::new().schema("Pet", pet)?);
//!
//! let yaml = doc.to_yaml()?;
//! assert!(yaml.contains("Pet"));
//! # Ok(())
//! # }
//! ```

/// Shared error types.
pub mod error;

/// Document node types and builders.
pub mod model;

/// `$ref` pointer parsing and classification.
pub mod refs;

/// Lazy reference resolution against the registry.
pub mod resolver;

/// Whole-document batch validation.
pub mod validation;

pub use error::{ModelError, ModelResult};
pub use model::{
    AdditionalProperties, ApiKeyLocation, ApiKeyScheme, Callback, Components, Contact, Content,
    Example, Extensions, ExternalDocs, Header, HttpScheme, Info, License, Link, MediaType,
    OAuth2Scheme, OAuthFlow, OAuthFlows, OpenApi, OpenIdConnectScheme, Operation, Parameter,
    ParameterLocation, PathItem, Paths, Ref, RefOr, RequestBody, Response, Responses, Schema,
    SchemaType, SecurityRequirement, SecurityScheme, Server, ServerVariable, Tag,
    DEFAULT_OPENAPI_VERSION, EXTENSION_PREFIX,
};
pub use refs::{ComponentKind, ParsedReference, ReferenceKind};
pub use resolver::Resolver;
pub use validation::{check_strict, validate_document};
