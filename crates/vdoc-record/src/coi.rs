//! Certificate of insurance records.
//!
//! Policies are listed one block of three properties per policy, numbered
//! from 1 in document order. A policy collection that is masked as a whole
//! cannot be enumerated; it is reported as a single `Policies` property
//! carrying the collection's verification link.

use serde_json::Value;
use vdoc_core::{DocPath, MaskClassifier};
use vdoc_resolve::{Projection, Resolver};

use crate::dates::normalize_date;
use crate::properties::{CustomProperty, DocumentProperties};

pub const DOCUMENT_TYPE: &str = "Generic Document";

const PARTIES: [(&str, &str); 3] = [("Producer", "producer"), ("Insured", "insured"), ("Holder", "holder")];

/// Build the upload record for a certificate of insurance.
pub fn coi_properties<C: MaskClassifier>(resolver: &Resolver<C>, coi: &Value) -> DocumentProperties {
    let field = |path: &str| resolver.project_string(coi, path);

    let mut custom = vec![CustomProperty::text("Certificate number", field("certificate/certnum"))];
    for (label, member) in PARTIES {
        custom.push(CustomProperty::text(label, field(&format!("{member}/name"))));
        custom.push(CustomProperty::text(
            &format!("{label} location"),
            resolver.display_location(coi, DocPath::from_steps([member, "location"])),
        ));
    }
    custom.extend(policy_properties(resolver, coi));

    DocumentProperties {
        document_type: DOCUMENT_TYPE.to_owned(),
        document_title: format!("Certificate of Insurance - {}", field("holder/name").trim()),
        expiry_date: None,
        issue_date: normalize_date(&field("certificate/docdate")),
        custom_properties: custom,
    }
}

fn policy_properties<C: MaskClassifier>(resolver: &Resolver<C>, coi: &Value) -> Vec<CustomProperty> {
    let policies: Vec<&Value> = match resolver.project(coi, "policies") {
        Projection::Value(Value::Object(map)) => map.values().collect(),
        Projection::Value(Value::Array(items)) => items.iter().collect(),
        Projection::Link(link) => return vec![CustomProperty::text("Policies", link.into_string())],
        Projection::Value(_) | Projection::Absent => return Vec::new(),
    };

    let mut out = Vec::with_capacity(policies.len() * 3);
    for (i, policy) in policies.into_iter().enumerate() {
        let n = i + 1;
        let date = |member: &str| normalize_date(&resolver.project_string(policy, member));
        out.push(CustomProperty::text(
            &format!("Policy {n} number"),
            resolver.project_string(policy, "number"),
        ));
        out.push(CustomProperty::date(&format!("Policy {n} effective"), date("effective_date")));
        out.push(CustomProperty::date(&format!("Policy {n} expire"), date("expire_date")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn party(name: &str, city: &str) -> Value {
        json!({
            "name": name,
            "location": {
                "street_address": "9 Dock St",
                "city": city,
                "state": "MI",
                "postal_code": "48201",
                "country": "USA"
            }
        })
    }

    fn coi() -> Value {
        json!({
            "certificate": {"certnum": "C-55", "docdate": "2020-01-15"},
            "producer": party("Broker LLC", "Detroit"),
            "insured": party("Acme Farms", "Lansing"),
            "holder": party("  Big Grocer  ", "Flint"),
            "policies": {
                "GL-1": {"number": "GL-1", "effective_date": "2020-01-01", "expire_date": "2021-01-01"},
                "AU-2": {"number": "AU-2", "effective_date": "2020-02-01T00:00:00", "expire_date": "02/01/2021"}
            }
        })
    }

    fn resolver() -> Resolver {
        Resolver::default()
    }

    fn value<'a>(record: &'a DocumentProperties, label: &str) -> &'a str {
        &record.custom(label).unwrap().value
    }

    #[test]
    fn cleartext_coi() {
        let record = coi_properties(&resolver(), &coi());
        assert_eq!(record.document_type, "Generic Document");
        assert_eq!(record.document_title, "Certificate of Insurance - Big Grocer");
        assert_eq!(record.issue_date, "2020-01-15");
        assert_eq!(record.expiry_date, None);
        assert_eq!(value(&record, "Certificate number"), "C-55");
        assert_eq!(value(&record, "Producer"), "Broker LLC");
        assert_eq!(value(&record, "Insured location"), "9 Dock St,\nLansing,\nMI,\n48201,\nUSA");
        assert_eq!(value(&record, "Holder"), "  Big Grocer  ");
        assert_eq!(record.custom_properties.len(), 7 + 6);
    }

    #[test]
    fn policies_numbered_in_document_order() {
        let record = coi_properties(&resolver(), &coi());
        assert_eq!(value(&record, "Policy 1 number"), "GL-1");
        assert_eq!(value(&record, "Policy 1 effective"), "2020-01-01");
        assert_eq!(value(&record, "Policy 2 number"), "AU-2");
        assert_eq!(value(&record, "Policy 2 effective"), "2020-02-01");
        assert_eq!(value(&record, "Policy 2 expire"), "2021-02-01");
        assert!(record.custom("Policy 2 expire").unwrap().format.is_some());
        assert!(record.custom("Policy 2 number").unwrap().format.is_none());
    }

    #[test]
    fn policy_array_is_accepted() {
        let mut doc = coi();
        doc["policies"] = json!([{"number": "X-9", "effective_date": "2020-03-01", "expire_date": "2020-09-01"}]);
        let record = coi_properties(&resolver(), &doc);
        assert_eq!(value(&record, "Policy 1 number"), "X-9");
        assert!(record.custom("Policy 2 number").is_none());
    }

    #[test]
    fn missing_policies_add_nothing() {
        let mut doc = coi();
        doc.as_object_mut().unwrap().remove("policies");
        let record = coi_properties(&resolver(), &doc);
        assert_eq!(record.custom_properties.len(), 7);
    }
}
