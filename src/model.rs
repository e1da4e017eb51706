#![deny(missing_docs)]

//! # Document Object Model
//!
//! - **document**: the `OpenApi` root node and its (de)serialization entry points.
//! - **schema**: recursive `Schema` nodes with composition keywords.
//! - **components**: the named registry that `$ref` pointers resolve against.
//! - **path**: path items, operations, parameters, request/response plumbing.
//! - **media**: content maps, media types and examples.
//! - **security**: security schemes and requirements.
//! - **info**, **server**: document metadata.
//! - **extensions**: `x-` extension capture and the `RefOr` reference wrapper.

pub mod components;
pub mod document;
pub mod extensions;
pub mod info;
pub mod media;
pub mod path;
pub mod schema;
pub mod security;
pub mod server;

pub use components::Components;
pub use document::{OpenApi, DEFAULT_OPENAPI_VERSION};
pub use extensions::{Extensions, Ref, RefOr, EXTENSION_PREFIX};
pub use info::{Contact, ExternalDocs, Info, License};
pub use media::{Content, Example, MediaType};
pub use path::{
    Callback, Header, Link, Operation, Parameter, ParameterLocation, PathItem, Paths,
    RequestBody, Response, Responses,
};
pub use schema::{AdditionalProperties, Schema, SchemaType};
pub use security::{
    ApiKeyLocation, ApiKeyScheme, HttpScheme, OAuth2Scheme, OAuthFlow, OAuthFlows,
    OpenIdConnectScheme, SecurityRequirement, SecurityScheme,
};
pub use server::{Server, ServerVariable, Tag};
