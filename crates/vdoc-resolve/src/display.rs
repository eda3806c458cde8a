//! # Display Formatters
//!
//! Human-readable renderings of two recurring document shapes: postal
//! locations and certification schemes. Both go through the projector, so a
//! masked field is shown as its verification link and never as content.

use std::collections::BTreeMap;

use serde_json::Value;
use vdoc_core::{DocPath, MaskClassifier};

use crate::projector::Projection;
use crate::resolver::Resolver;

/// Location members, in the order they appear in the postal format.
pub const ADDRESS_FIELDS: [&str; 5] = ["street_address", "city", "state", "postal_code", "country"];

/// Where a certification scheme lives in an audit document.
pub const SCHEME_PATH: &str = "scheme";

const ADDRESS_SEPARATOR: &str = ",\n";

/// Closed lookup from a scheme's `(name, edition)` to its display label.
///
/// Unknown pairs have no label. New schemes are added as entries, not as
/// code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeTable {
    labels: BTreeMap<(String, String), String>,
}

impl SchemeTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// The SQF editions the upload target recognizes.
    pub fn sqf() -> Self {
        Self::empty()
            .with("SQFI", "8.0", "SQF - SQF Code 8th Edition")
            .with("SQFI", "7.0", "SQF - SQF Code 7th Edition")
    }

    pub fn with(mut self, name: &str, edition: &str, label: &str) -> Self {
        self.insert(name, edition, label);
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: &str, edition: &str, label: &str) {
        self.labels
            .insert((name.to_owned(), edition.to_owned()), label.to_owned());
    }

    /// Label for an exact `(name, edition)` match.
    pub fn label(&self, name: &str, edition: &str) -> Option<&str> {
        self.labels
            .get(&(name.to_owned(), edition.to_owned()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::sqf()
    }
}

impl<C: MaskClassifier> Resolver<C> {
    /// Render the location at `path` as a five-line postal address, one
    /// member per line, each line but the last ending in a comma.
    ///
    /// A masked location renders as its link and an absent one as `""`.
    /// Members that are missing render as empty lines; a member that is
    /// itself masked renders as that mask's link.
    pub fn display_location(&self, document: &Value, path: impl Into<DocPath>) -> String {
        let location = match self.project(document, path) {
            Projection::Value(location) => location,
            Projection::Link(link) => return link.into_string(),
            Projection::Absent => return String::new(),
        };
        ADDRESS_FIELDS
            .iter()
            .map(|field| self.project_string(location, DocPath::from_steps([*field])))
            .collect::<Vec<_>>()
            .join(ADDRESS_SEPARATOR)
    }

    /// The display label of the document's certification scheme, the
    /// scheme's link when it is masked, or `""` when the scheme is absent or
    /// not in the table.
    pub fn display_scheme(&self, document: &Value) -> String {
        let scheme = match self.project(document, SCHEME_PATH) {
            Projection::Value(scheme) => scheme,
            Projection::Link(link) => return link.into_string(),
            Projection::Absent => return String::new(),
        };
        let name = scheme.get("name").and_then(Value::as_str);
        let edition = scheme.get("edition").and_then(Value::as_str);
        match name.zip(edition).and_then(|(n, e)| self.schemes().label(n, e)) {
            Some(label) => label.to_owned(),
            None => {
                tracing::debug!(?name, ?edition, "unrecognized certification scheme");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn masked() -> Value {
        json!({"trellis-mask": {"hashinfo": {"alg": "SHA256", "hash": "77"}, "url": "https://t.example/r/1"}})
    }

    fn resolver() -> Resolver {
        Resolver::default()
    }

    #[test]
    fn location_postal_format() {
        let doc = json!({"organization": {"location": {
            "street_address": "1 Main St",
            "city": "Fresno",
            "state": "CA",
            "postal_code": "93650",
            "country": "USA"
        }}});
        assert_eq!(
            resolver().display_location(&doc, "organization/location"),
            "1 Main St,\nFresno,\nCA,\n93650,\nUSA"
        );
    }

    #[test]
    fn location_missing_member_is_empty_segment() {
        let doc = json!({"location": {
            "street_address": "1 Main St",
            "city": "Fresno",
            "postal_code": 93650,
            "country": "USA"
        }});
        assert_eq!(
            resolver().display_location(&doc, "location"),
            "1 Main St,\nFresno,\n,\n93650,\nUSA"
        );
    }

    #[test]
    fn masked_location_is_link() {
        let doc = json!({"organization": {"location": masked()}});
        let out = resolver().display_location(&doc, "organization.location");
        assert!(out.starts_with("https://trellisfw.github.io/reagan?trellis-mask="));
        assert!(!out.contains(",\n"));
    }

    #[test]
    fn masked_organization_is_link() {
        let doc = json!({"organization": masked()});
        let out = resolver().display_location(&doc, "organization.location");
        assert!(out.starts_with("https://trellisfw.github.io/reagan?"));
    }

    #[test]
    fn masked_member_inside_location() {
        let doc = json!({"location": {
            "street_address": masked(),
            "city": "Fresno",
            "state": "CA",
            "postal_code": "93650",
            "country": "USA"
        }});
        let out = resolver().display_location(&doc, "location");
        let lines: Vec<&str> = out.split(",\n").collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("https://trellisfw.github.io/reagan?"));
        assert_eq!(lines[1], "Fresno");
    }

    #[test]
    fn absent_or_scalar_location() {
        let doc = json!({"location": "somewhere"});
        assert_eq!(resolver().display_location(&doc, "nowhere"), "");
        assert_eq!(resolver().display_location(&doc, "location"), ",\n,\n,\n,\n");
    }

    #[test]
    fn known_schemes() {
        let r = resolver();
        let doc = json!({"scheme": {"name": "SQFI", "edition": "8.0"}});
        assert_eq!(r.display_scheme(&doc), "SQF - SQF Code 8th Edition");
        let doc = json!({"scheme": {"name": "SQFI", "edition": "7.0"}});
        assert_eq!(r.display_scheme(&doc), "SQF - SQF Code 7th Edition");
    }

    #[test]
    fn unknown_scheme_is_empty() {
        let r = resolver();
        for doc in [
            json!({"scheme": {"name": "SQFI", "edition": "9.9"}}),
            json!({"scheme": {"name": "BRC", "edition": "8.0"}}),
            json!({"scheme": {"name": "SQFI", "edition": 8.0}}),
            json!({"scheme": "SQFI"}),
            json!({}),
        ] {
            assert_eq!(r.display_scheme(&doc), "", "{doc}");
        }
    }

    #[test]
    fn masked_scheme_is_link() {
        let doc = json!({"scheme": masked()});
        assert!(resolver()
            .display_scheme(&doc)
            .starts_with("https://trellisfw.github.io/reagan?trellis-mask="));
    }

    #[test]
    fn custom_scheme_table() {
        let schemes = SchemeTable::empty().with("BRC", "9", "BRCGS Food Safety Issue 9");
        let base: Resolver = Resolver::default();
        let r = base.with_schemes(schemes);
        let doc = json!({"scheme": {"name": "BRC", "edition": "9"}});
        assert_eq!(r.display_scheme(&doc), "BRCGS Food Safety Issue 9");
        let doc = json!({"scheme": {"name": "SQFI", "edition": "8.0"}});
        assert_eq!(r.display_scheme(&doc), "");
    }

    #[test]
    fn table_insert_replaces() {
        let mut table = SchemeTable::sqf();
        assert_eq!(table.len(), 2);
        table.insert("SQFI", "8.0", "SQF 8");
        assert_eq!(table.len(), 2);
        assert_eq!(table.label("SQFI", "8.0"), Some("SQF 8"));
        assert!(SchemeTable::empty().is_empty());
    }
}
