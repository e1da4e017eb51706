#![deny(missing_docs)]

//! # Info Objects
//!
//! Document-level metadata: `Info`, `Contact`, `License` and the
//! `ExternalDocs` object shared by several node types.

use crate::model::extensions::Extensions;
use serde::{Deserialize, Serialize};

/// Metadata about the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// The title of the API.
    pub title: String,
    /// The version of the API document.
    pub version: String,
    /// Longer description of the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL to the terms of service.
    #[serde(rename = "termsOfService", skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Info {
    /// Creates an info object with the required title and version.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the terms-of-service URL.
    pub fn terms_of_service(mut self, url: impl Into<String>) -> Self {
        self.terms_of_service = Some(url.into());
        self
    }

    /// Sets the contact information.
    pub fn contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Sets the license information.
    pub fn license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }
}

/// Contact information for the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Name of the contact person or organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL for the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Contact {
    /// Creates an empty contact object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contact name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the contact URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// License information for the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License name (e.g. "Apache 2.0").
    pub name: String,
    /// URL to the license text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl License {
    /// Creates a license with the required name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the license URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A reference to external documentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocs {
    /// URL of the documentation.
    pub url: String,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Specification extensions.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl ExternalDocs {
    /// Creates an external documentation reference.
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
}
