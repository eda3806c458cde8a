//! Food safety audit records.

use serde_json::Value;
use vdoc_core::MaskClassifier;
use vdoc_resolve::Resolver;

use crate::dates::normalize_date;
use crate::properties::{CustomProperty, DocumentProperties};
use crate::{join_items, render_at};

pub const DOCUMENT_TYPE: &str = "SQF";

/// Build the upload record for an audit.
pub fn audit_properties<C: MaskClassifier>(resolver: &Resolver<C>, audit: &Value) -> DocumentProperties {
    let field = |path: &str| resolver.project_string(audit, path);
    let date = |path: &str| normalize_date(&field(path));

    let score = render_at(resolver, audit, "score/final", |fin| {
        format!(
            "{} {}",
            resolver.project_string(fin, "value"),
            resolver.project_string(fin, "units")
        )
    });
    let products = join_items(resolver, audit, "scope/products_observed", |product| {
        resolver.project_string(product, "name")
    });
    let auditors = join_items(resolver, audit, "certifying_body/auditors", |auditor| {
        format!(
            "{} {}",
            resolver.project_string(auditor, "FName"),
            resolver.project_string(auditor, "LName")
        )
    });

    DocumentProperties {
        document_type: DOCUMENT_TYPE.to_owned(),
        document_title: format!("{} Audit - {}", field("scheme/name"), field("organization/name")),
        expiry_date: Some(date("certificate_validity_period/end")),
        issue_date: date("certificate_validity_period/start"),
        custom_properties: vec![
            CustomProperty::text("Scheme", resolver.display_scheme(audit)),
            CustomProperty::text("Score", score),
            CustomProperty::text("Rating", field("score/rating")),
            CustomProperty::text("Certification id", field("certificationid/id")),
            CustomProperty::text("Audit id", field("auditid/id")),
            CustomProperty::text("Organization", field("organization/name")),
            CustomProperty::text(
                "Organization location",
                resolver.display_location(audit, "organization/location"),
            ),
            CustomProperty::text("Products", products),
            CustomProperty::date(
                "Audit date",
                date("conditions_during_audit/operation_observed_date/start"),
            ),
            CustomProperty::text("Certification body", field("certifying_body/name")),
            CustomProperty::text("Auditors", auditors),
        ],
    }
}
