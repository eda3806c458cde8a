//! # vdoc-record: Upload Records for Virtual Documents
//!
//! Builds the `properties` record that accompanies a document's PDF when it
//! is pushed to the trust-verification service.
//!
//! ## Supported documents
//!
//! - **Audits** (`audit.rs`): scheme, score, identifiers, organization,
//!   products, audit date, certification body and auditors.
//! - **Certificates of insurance** (`coi.rs`): certificate number, the
//!   producer, insured and holder parties, and one block per policy.
//!
//! Every field is read through [`vdoc_resolve::Resolver`], so a masked field
//! appears in the record as its verification link and a missing one as the
//! empty string. Building a record for a recognized document never fails.

pub mod audit;
pub mod coi;
pub mod dates;
pub mod kind;
pub mod properties;

use serde_json::Value;
use thiserror::Error;
use vdoc_core::{DocPath, MaskClassifier};
use vdoc_resolve::{Projection, Resolver};

pub use audit::audit_properties;
pub use coi::coi_properties;
pub use dates::normalize_date;
pub use kind::DocumentKind;
pub use properties::{CustomProperty, DocumentProperties, PropertyFormat, CUSTOM_PREFIX};

/// Error building a record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Neither the media type nor the document's members identify a
    /// supported kind.
    #[error("unrecognized document type: {0}")]
    UnrecognizedDocument(String),
}

/// Detect the document's kind and build its record.
pub fn build_properties<C: MaskClassifier>(
    resolver: &Resolver<C>,
    document: &Value,
) -> Result<DocumentProperties, RecordError> {
    let kind = DocumentKind::detect(document)?;
    tracing::debug!(%kind, "building upload record");
    Ok(build_properties_as(resolver, document, kind))
}

/// Build the record for a document of a known kind.
pub fn build_properties_as<C: MaskClassifier>(
    resolver: &Resolver<C>,
    document: &Value,
    kind: DocumentKind,
) -> DocumentProperties {
    match kind {
        DocumentKind::Audit => audit_properties(resolver, document),
        DocumentKind::Coi => coi_properties(resolver, document),
    }
}

/// Render the value at `path` with `render`, or return the link when it is
/// masked, or `""` when it is absent.
pub(crate) fn render_at<C, F>(
    resolver: &Resolver<C>,
    document: &Value,
    path: impl Into<DocPath>,
    render: F,
) -> String
where
    C: MaskClassifier,
    F: FnOnce(&Value) -> String,
{
    match resolver.project(document, path) {
        Projection::Value(value) => render(value),
        Projection::Link(link) => link.into_string(),
        Projection::Absent => String::new(),
    }
}

/// Render each item of the collection at `path` and join them with `", "`.
/// A masked item renders as its link.
pub(crate) fn join_items<C, F>(
    resolver: &Resolver<C>,
    document: &Value,
    path: impl Into<DocPath>,
    mut render: F,
) -> String
where
    C: MaskClassifier,
    F: FnMut(&Value) -> String,
{
    render_at(resolver, document, path, |collection| {
        let items: Vec<&Value> = match collection {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            _ => return String::new(),
        };
        items
            .into_iter()
            .map(|item| render_at(resolver, item, DocPath::root(), &mut render))
            .collect::<Vec<_>>()
            .join(", ")
    })
}
