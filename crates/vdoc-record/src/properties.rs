//! Upload property records.
//!
//! The record shape is fixed by the upload target: a document type and
//! title, ISO dates, and a list of named custom properties. Custom property
//! names are prefixed with [`CUSTOM_PREFIX`].

use serde::{Deserialize, Serialize};

/// Prefix the upload target requires on every custom property name.
pub const CUSTOM_PREFIX: &str = "(( c )) ";

/// The `properties` record uploaded alongside a document's PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentProperties {
    pub document_type: String,
    pub document_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub issue_date: String,
    pub custom_properties: Vec<CustomProperty>,
}

impl DocumentProperties {
    /// The custom property labelled `label` (without the prefix).
    pub fn custom(&self, label: &str) -> Option<&CustomProperty> {
        self.custom_properties.iter().find(|p| p.label() == label)
    }
}

/// How the upload target should interpret a custom property's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyFormat {
    Date,
}

/// One named custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<PropertyFormat>,
}

impl CustomProperty {
    pub fn text(label: &str, value: impl Into<String>) -> Self {
        Self {
            name: format!("{CUSTOM_PREFIX}{label}"),
            value: value.into(),
            format: None,
        }
    }

    /// A property the upload target renders as a date. `value` should
    /// already be normalized.
    pub fn date(label: &str, value: impl Into<String>) -> Self {
        Self {
            format: Some(PropertyFormat::Date),
            ..Self::text(label, value)
        }
    }

    /// The name with the custom prefix removed.
    pub fn label(&self) -> &str {
        self.name.strip_prefix(CUSTOM_PREFIX).unwrap_or(&self.name)
    }
}
