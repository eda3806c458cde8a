//! # Resolver Properties
//!
//! Property tests over generated documents: nested object chains with a leaf
//! value, optionally cut short by a Trellis mask at an arbitrary depth.

use proptest::prelude::*;
use serde_json::{json, Value};
use url::Url;
use vdoc_core::DocPath;
use vdoc_mask::{LinkBuilder, Redactor};
use vdoc_resolve::{Outcome, Projection, Resolver};

/// Wrap `leaf` in one single-member object per step, outermost first.
fn nest(steps: &[String], leaf: Value) -> Value {
    steps
        .iter()
        .rev()
        .fold(leaf, |inner, step| json!({ step.as_str(): inner }))
}

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z0-9 ]{0,20}".prop_map(Value::String),
    ]
}

fn steps() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z_]{1,8}", 1..6)
}

fn secret_mask(secret: &str) -> Value {
    let resource = Url::parse("https://trellis.example/resources/prop").unwrap();
    Redactor
        .mask_with_nonce(&json!(secret), &resource, "0f".repeat(32))
        .unwrap()
        .mask
}

fn resolver() -> Resolver {
    Resolver::default()
}

proptest! {
    /// Full resolution returns the same node as a plain nested lookup.
    #[test]
    fn full_resolution_matches_nested_lookup(steps in steps(), leaf in leaf_value()) {
        let doc = nest(&steps, leaf);
        let pointer = format!("/{}", steps.join("/"));
        let r = resolver().resolve(&doc, DocPath::from_steps(steps.clone()));
        prop_assert_eq!(r.outcome, Outcome::Resolved);
        prop_assert!(r.remaining.is_empty());
        prop_assert_eq!(r.value, doc.pointer(&pointer));
    }

    /// A mask reached after `k` steps stops resolution with exactly the
    /// steps from `k` onward left over.
    #[test]
    fn mask_at_depth_leaves_suffix(
        (steps, k) in steps().prop_flat_map(|s| { let n = s.len(); (Just(s), 0..=n) }),
        secret in "CLEAR[A-Z]{6,12}",
    ) {
        let mask = secret_mask(&secret);
        let doc = nest(&steps[..k], mask.clone());
        let path = DocPath::from_steps(steps.clone());
        let r = resolver().resolve(&doc, &path);
        prop_assert_eq!(r.outcome, Outcome::Masked);
        prop_assert_eq!(r.remaining.steps(), &steps[k..]);
        prop_assert_eq!(r.value, Some(&mask));
    }

    /// Projecting through a mask yields a verifier link that carries none of
    /// the hidden content.
    #[test]
    fn projected_link_never_leaks(
        (steps, k) in steps().prop_flat_map(|s| { let n = s.len(); (Just(s), 0..=n) }),
        secret in "CLEAR[A-Z]{6,12}",
    ) {
        let doc = nest(&steps[..k], secret_mask(&secret));
        let projection = resolver().project(&doc, DocPath::from_steps(steps));
        let link = match projection {
            Projection::Link(link) => link,
            other => return Err(TestCaseError::fail(format!("expected link, got {other:?}"))),
        };
        prop_assert!(link.as_str().starts_with(&LinkBuilder::default().prefix()));
        prop_assert!(!link.as_str().contains(&secret));
    }

    /// Resolving and projecting are pure.
    #[test]
    fn resolution_is_idempotent(steps in steps(), leaf in leaf_value(), cut in 0usize..6) {
        let mut doc = nest(&steps, leaf);
        if cut < steps.len() {
            let pointer = format!("/{}", steps[..cut].join("/"));
            if let Some(node) = doc.pointer_mut(&pointer) {
                *node = secret_mask("CLEARIDEMPOTENT");
            }
        }
        let path = DocPath::from_steps(steps);
        let r = resolver();
        prop_assert_eq!(r.resolve(&doc, &path), r.resolve(&doc, &path));
        prop_assert_eq!(r.project(&doc, &path), r.project(&doc, &path));
    }

    /// Extra steps past a present scalar are reported as missing, starting
    /// at the first step that could not be taken.
    #[test]
    fn stepping_past_leaf_is_missing(steps in steps(), extra in steps(), n in any::<i64>()) {
        let doc = nest(&steps, json!(n));
        let mut full = steps.clone();
        full.extend(extra.iter().cloned());
        let r = resolver().resolve(&doc, DocPath::from_steps(full));
        prop_assert_eq!(r.outcome, Outcome::Missing);
        prop_assert_eq!(r.remaining.steps(), extra.as_slice());
        prop_assert_eq!(r.value, None);
    }
}

#[test]
fn mask_sibling_cleartext_is_not_linked() {
    let mut mask = secret_mask("CLEARHIDDEN");
    mask["note"] = json!("CLEARSIBLING");
    let doc = json!({"organization": mask});
    let out = resolver().project_string(&doc, "organization/name");
    assert!(out.starts_with("https://trellisfw.github.io/reagan?trellis-mask="));
    assert!(!out.contains("CLEARSIBLING"));
    assert!(!out.contains("CLEARHIDDEN"));
}
