#![deny(missing_docs)]

//! # Server and Tag Objects

use crate::model::extensions::Extensions;
use crate::model::info::ExternalDocs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A server hosting the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// URL of the server, possibly templated with `{variable}` segments.
    pub url: String,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Substitution values for URL template variables.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variables: IndexMap<String, ServerVariable>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Server {
    /// Creates a server with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a URL template variable.
    pub fn variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables.insert(name.into(), variable);
        self
    }
}

/// A substitutable variable in a server URL template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    /// Default substitution value.
    pub default: String,
    /// Allowed substitution values, when restricted.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl ServerVariable {
    /// Creates a variable with the required default value.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            ..Self::default()
        }
    }

    /// Restricts the variable to an enumerated set of values.
    pub fn enum_values(mut self, values: Vec<String>) -> Self {
        self.enum_values = values;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A tag grouping operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name. Must be unique within the document.
    pub name: String,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External documentation for this tag.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Tag {
    /// Creates a tag with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the external documentation.
    pub fn external_docs(mut self, docs: ExternalDocs) -> Self {
        self.external_docs = Some(docs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_variables_preserve_order() {
        let server = Server::new("https://{tenant}.{region}.example.com")
            .variable("tenant", ServerVariable::new("acme"))
            .variable(
                "region",
                ServerVariable::new("eu").enum_values(vec!["eu".into(), "us".into()]),
            );

        let value = serde_json::to_value(&server).unwrap();
        let keys: Vec<&String> = value["variables"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["tenant", "region"]);
        assert_eq!(value["variables"]["region"]["enum"][0], "eu");
    }
}
