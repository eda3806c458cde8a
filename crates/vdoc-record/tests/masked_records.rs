//! # Records Built From Masked Documents
//!
//! End-to-end: cleartext documents are masked in place with the redactor,
//! then turned into upload records. Masked fields must surface as
//! verification links, and no masked content may reach the record.

use serde_json::{json, Value};
use url::Url;
use vdoc_mask::{LinkBuilder, Redactor};
use vdoc_record::{build_properties, DocumentKind, DocumentProperties};
use vdoc_resolve::Resolver;

fn resource() -> Url {
    Url::parse("https://trellis.example/resources/audit-1").unwrap()
}

fn audit() -> Value {
    json!({
        "_type": "application/vnd.trellisfw.audit.sqfi.1+json",
        "scheme": {"name": "SQFI", "edition": "7.0"},
        "certificationid": {"id": "CERT-SECRET-ID"},
        "auditid": {"id": "A-1"},
        "certificate_validity_period": {"start": "01/02/2019", "end": "01/01/2020"},
        "organization": {
            "name": "Acme Farms",
            "location": {
                "street_address": "SECRET STREET",
                "city": "Fresno",
                "state": "CA",
                "postal_code": "93650",
                "country": "USA"
            }
        },
        "scope": {"products_observed": [{"name": "Apples"}, {"name": "SECRET PRODUCT"}]},
        "score": {"final": {"value": "88", "units": "%"}, "rating": "Good"},
        "conditions_during_audit": {"operation_observed_date": {"start": "2018-12-10"}},
        "certifying_body": {"name": "Cert Co", "auditors": [{"FName": "Ada", "LName": "Lovelace"}]}
    })
}

fn coi() -> Value {
    json!({
        "_type": "application/vnd.trellisfw.coi.accord.1+json",
        "certificate": {"certnum": "C-1", "docdate": "2020-01-15"},
        "producer": {"name": "Broker"},
        "insured": {"name": "Acme"},
        "holder": {"name": "Grocer", "location": {"city": "Lansing"}},
        "policies": {
            "P1": {"number": "P1", "effective_date": "2020-01-01", "expire_date": "2021-01-01"},
            "P2": {"number": "SECRET POLICY", "effective_date": "2020-06-01", "expire_date": "2021-06-01"}
        }
    })
}

fn assert_no_secret(record: &DocumentProperties) {
    let text = serde_json::to_string(record).unwrap();
    assert!(!text.contains("SECRET"), "record leaked masked content: {text}");
}

fn is_link(value: &str) -> bool {
    value.starts_with(&LinkBuilder::default().prefix())
}

#[test]
fn masked_audit_fields_become_links() {
    let mut doc = audit();
    for path in [
        "certificationid",
        "organization/location/street_address",
        "scope/products_observed/1",
    ] {
        Redactor.mask_path(&mut doc, path, &resource()).unwrap();
    }

    let resolver: Resolver = Resolver::default();
    let record = build_properties(&resolver, &doc).unwrap();
    assert_no_secret(&record);

    assert!(is_link(&record.custom("Certification id").unwrap().value));
    let location = &record.custom("Organization location").unwrap().value;
    let lines: Vec<&str> = location.split(",\n").collect();
    assert!(is_link(lines[0]));
    assert_eq!(&lines[1..], ["Fresno", "CA", "93650", "USA"]);

    let products = &record.custom("Products").unwrap().value;
    let (first, second) = products.split_once(", ").unwrap();
    assert_eq!(first, "Apples");
    assert!(is_link(second));

    assert_eq!(record.custom("Scheme").unwrap().value, "SQF - SQF Code 7th Edition");
    assert_eq!(record.issue_date, "2019-01-02");
}

#[test]
fn masked_organization_links_every_organization_field() {
    let mut doc = audit();
    Redactor.mask_path(&mut doc, "organization", &resource()).unwrap();

    let resolver: Resolver = Resolver::default();
    let record = build_properties(&resolver, &doc).unwrap();
    let name = &record.custom("Organization").unwrap().value;
    assert!(is_link(name));
    assert_eq!(&record.custom("Organization location").unwrap().value, name);
    assert_eq!(record.document_title, format!("SQFI Audit - {name}"));
}

#[test]
fn masked_dates_stay_links() {
    let mut doc = audit();
    Redactor
        .mask_path(&mut doc, "certificate_validity_period", &resource())
        .unwrap();

    let resolver: Resolver = Resolver::default();
    let record = build_properties(&resolver, &doc).unwrap();
    assert!(is_link(&record.issue_date));
    assert_eq!(record.expiry_date.as_deref(), Some(record.issue_date.as_str()));
}

#[test]
fn masked_policy_and_holder_location() {
    let mut doc = coi();
    Redactor.mask_path(&mut doc, "policies/P2", &resource()).unwrap();
    Redactor.mask_path(&mut doc, "holder/location", &resource()).unwrap();

    let resolver: Resolver = Resolver::default();
    let record = build_properties(&resolver, &doc).unwrap();
    assert_no_secret(&record);
    assert!(!serde_json::to_string(&record).unwrap().contains("Lansing"));
    assert_eq!(record.custom("Policy 1 number").unwrap().value, "P1");
    for label in ["Policy 2 number", "Policy 2 effective", "Policy 2 expire"] {
        assert!(is_link(&record.custom(label).unwrap().value), "{label}");
    }
    assert!(is_link(&record.custom("Holder location").unwrap().value));
}

#[test]
fn masked_policy_collection_is_one_link() {
    let mut doc = coi();
    Redactor.mask_path(&mut doc, "policies", &resource()).unwrap();

    let resolver: Resolver = Resolver::default();
    let record = build_properties(&resolver, &doc).unwrap();
    assert_no_secret(&record);
    assert!(is_link(&record.custom("Policies").unwrap().value));
    assert!(record.custom("Policy 1 number").is_none());
    assert!(record.custom("Holder location").unwrap().value.contains("Lansing"));
}

#[test]
fn kind_is_detected_before_building() {
    assert_eq!(DocumentKind::detect(&audit()).unwrap(), DocumentKind::Audit);
    assert_eq!(DocumentKind::detect(&coi()).unwrap(), DocumentKind::Coi);
}
