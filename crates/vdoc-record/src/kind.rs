//! Document kind detection.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::RecordError;

/// The document kinds a record can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A food safety audit.
    Audit,
    /// A certificate of insurance.
    Coi,
}

impl DocumentKind {
    /// Detect the kind from the document's `_type` media type, falling back
    /// to the members the document carries.
    pub fn detect(document: &Value) -> Result<Self, RecordError> {
        if let Some(media_type) = document.get("_type").and_then(Value::as_str) {
            let media_type = media_type.to_ascii_lowercase();
            if media_type.contains("audit") {
                return Ok(Self::Audit);
            }
            if media_type.contains("coi") || media_type.contains("certificate") {
                return Ok(Self::Coi);
            }
        }
        let has = |key: &str| document.get(key).is_some();
        if has("scheme") && has("auditid") {
            Ok(Self::Audit)
        } else if has("policies") && has("certificate") {
            Ok(Self::Coi)
        } else {
            Err(RecordError::UnrecognizedDocument(
                document
                    .get("_type")
                    .and_then(Value::as_str)
                    .unwrap_or("untyped document")
                    .to_owned(),
            ))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Coi => "coi",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
