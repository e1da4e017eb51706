#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Shared helpers for parsing `$ref` pointer strings.
//!
//! These utilities never fetch external documents: they split a reference
//! into its document and fragment parts, classify it, and decode JSON
//! Pointer segments so local `#/components/{section}/{name}` pointers can
//! be matched against the Components registry.

use percent_encoding::percent_decode_str;
use url::Url;

/// Classification of a `$ref` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A fragment-only pointer into the current document (`#/...`).
    Local,
    /// A relative document path, with or without a fragment.
    Relative,
    /// An absolute URI to another document.
    Remote,
}

/// A `$ref` split into document part and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference<'a> {
    /// The document part before `#` (empty for local references).
    pub document: &'a str,
    /// The fragment after `#`, without the leading `#`.
    pub fragment: Option<&'a str>,
    /// Local / relative / remote classification.
    pub kind: ReferenceKind,
}

/// The component registry sections a reference may point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// `#/components/schemas/*`
    Schema,
    /// `#/components/responses/*`
    Response,
    /// `#/components/parameters/*`
    Parameter,
    /// `#/components/examples/*`
    Example,
    /// `#/components/requestBodies/*`
    RequestBody,
    /// `#/components/headers/*`
    Header,
    /// `#/components/securitySchemes/*`
    SecurityScheme,
    /// `#/components/links/*`
    Link,
    /// `#/components/callbacks/*`
    Callback,
}

impl ComponentKind {
    /// The pointer segment naming this section under `#/components/`.
    pub fn segment(&self) -> &'static str {
        match self {
            ComponentKind::Schema => "schemas",
            ComponentKind::Response => "responses",
            ComponentKind::Parameter => "parameters",
            ComponentKind::Example => "examples",
            ComponentKind::RequestBody => "requestBodies",
            ComponentKind::Header => "headers",
            ComponentKind::SecurityScheme => "securitySchemes",
            ComponentKind::Link => "links",
            ComponentKind::Callback => "callbacks",
        }
    }

    /// All sections, in the order they serialize under `components`.
    pub fn all() -> [ComponentKind; 9] {
        [
            ComponentKind::Schema,
            ComponentKind::Response,
            ComponentKind::Parameter,
            ComponentKind::Example,
            ComponentKind::RequestBody,
            ComponentKind::Header,
            ComponentKind::SecurityScheme,
            ComponentKind::Link,
            ComponentKind::Callback,
        ]
    }

    /// Builds the canonical local pointer for a named entry of this kind.
    pub fn pointer(&self, name: &str) -> String {
        format!(
            "#/components/{}/{}",
            self.segment(),
            encode_pointer_segment(name)
        )
    }
}

/// Splits a `$ref` into document part and fragment and classifies it.
pub fn parse_reference(ref_str: &str) -> ParsedReference<'_> {
    let (document, fragment) = match ref_str.split_once('#') {
        Some((doc, frag)) => (doc, Some(frag)),
        None => (ref_str, None),
    };

    let kind = if document.is_empty() {
        ReferenceKind::Local
    } else if Url::parse(document).is_ok() {
        ReferenceKind::Remote
    } else {
        ReferenceKind::Relative
    };

    ParsedReference {
        document,
        fragment,
        kind,
    }
}

/// Extracts a component name from a `$ref` if it points to
/// `#/components/{section}/{name}` in the current document.
pub fn extract_component_name(ref_str: &str, kind: ComponentKind) -> Option<String> {
    let parsed = parse_reference(ref_str);
    if parsed.kind != ReferenceKind::Local {
        return None;
    }

    let fragment = parsed.fragment?;
    let pointer = fragment.trim_start_matches('/');
    let segments: Vec<&str> = pointer.split('/').collect();

    if segments.len() != 3 {
        return None;
    }
    if segments[0] != "components" || segments[1] != kind.segment() {
        return None;
    }

    let name = decode_pointer_segment(segments[2]);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Encodes a component name as a JSON Pointer segment.
pub fn encode_pointer_segment(name: &str) -> String {
    name.replace('~', "~0").replace('/', "~1")
}
