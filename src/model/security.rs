#![deny(missing_docs)]

//! # Security Objects
//!
//! Strict definitions of Security Schemes (API Key, HTTP, OAuth2,
//! OpenID Connect) and the Security Requirement object that names them.

use crate::model::extensions::Extensions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security scheme definition, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    /// API key passed in a header, query parameter or cookie.
    #[serde(rename = "apiKey")]
    ApiKey(ApiKeyScheme),
    /// HTTP authentication (Basic, Bearer, ...).
    #[serde(rename = "http")]
    Http(HttpScheme),
    /// OAuth2 flows.
    #[serde(rename = "oauth2")]
    OAuth2(Box<OAuth2Scheme>),
    /// OpenID Connect discovery.
    #[serde(rename = "openIdConnect")]
    OpenIdConnect(OpenIdConnectScheme),
}

/// API key definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyScheme {
    /// Parameter name (header/query/cookie name).
    pub name: String,
    /// Location (`query`, `header` or `cookie`).
    #[serde(rename = "in")]
    pub location: ApiKeyLocation,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Where an API key is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    /// Query parameter.
    Query,
    /// HTTP header.
    Header,
    /// Cookie value.
    Cookie,
}

/// HTTP authentication definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpScheme {
    /// The HTTP auth scheme name (RFC 7235), e.g. `basic` or `bearer`.
    pub scheme: String,
    /// Bearer token format hint.
    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// OAuth2 definition carrying its flow configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuth2Scheme {
    /// The configured flows.
    pub flows: OAuthFlows,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// OpenID Connect definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenIdConnectScheme {
    /// Discovery URL.
    #[serde(rename = "openIdConnectUrl")]
    pub open_id_connect_url: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// The set of OAuth2 flow configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlows {
    /// Implicit flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    /// Resource owner password flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    /// Client credentials flow.
    #[serde(rename = "clientCredentials", skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    /// Authorization code flow.
    #[serde(rename = "authorizationCode", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
}

/// A single OAuth2 flow configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlow {
    /// Authorization endpoint (implicit / authorization code).
    #[serde(rename = "authorizationUrl", skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// Token endpoint (password / client credentials / authorization code).
    #[serde(rename = "tokenUrl", skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// Refresh endpoint.
    #[serde(rename = "refreshUrl", skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    /// Available scopes: name to description.
    #[serde(default)]
    pub scopes: IndexMap<String, String>,
}

/// One alternative set of security schemes that must all be satisfied.
///
/// Keys name schemes registered under `components.securitySchemes`;
/// values list the required scopes (empty for non-OAuth2 schemes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement(IndexMap<String, Vec<String>>);

impl SecurityRequirement {
    /// Creates an empty requirement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scheme with its required scopes.
    pub fn scheme(mut self, name: impl Into<String>, scopes: Vec<String>) -> Self {
        self.0.insert(name.into(), scopes);
        self
    }

    /// Iterates the named schemes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_key_scheme_is_tagged() {
        let scheme = SecurityScheme::ApiKey(ApiKeyScheme {
            name: "X-API-Key".to_string(),
            location: ApiKeyLocation::Header,
            description: None,
            extensions: Extensions::new(),
        });
        let value = serde_json::to_value(&scheme).unwrap();
        assert_eq!(
            value,
            json!({"type": "apiKey", "name": "X-API-Key", "in": "header"})
        );
    }

    #[test]
    fn test_oauth2_round_trip() {
        let yaml = r#"
type: oauth2
flows:
  implicit:
    authorizationUrl: https://example.com/authorize
    scopes:
      read:pets: read your pets
      write:pets: modify pets
"#;
        let scheme: SecurityScheme = serde_yaml::from_str(yaml).unwrap();
        match &scheme {
            SecurityScheme::OAuth2(oauth) => {
                let implicit = oauth.flows.implicit.as_ref().unwrap();
                assert_eq!(implicit.scopes.len(), 2);
                let first = implicit.scopes.keys().next().unwrap();
                assert_eq!(first, "read:pets");
            }
            other => panic!("expected oauth2, got {:?}", other),
        }
    }
}
