//! # Verification Links
//!
//! A verification link is a URL to an external verifier with the mask's
//! committed record embedded as a single query parameter:
//!
//! ```text
//! https://trellisfw.github.io/reagan?trellis-mask=%7B%22hashinfo%22%3A...
//! ```
//!
//! The record is serialized in JCS canonical form before percent-encoding, so
//! the same mask always yields the same link regardless of how its members
//! were ordered in the source document. A verifier holding only the link can
//! compare the commitment against a disclosed value out of band.
//!
//! Encoding follows `encodeURIComponent`: a space is `%20`, never `+`, so a
//! verifier that percent-decodes the parameter recovers the canonical JSON
//! byte for byte.
//!
//! ## Degradation
//!
//! Building a link never fails. An absent, null, or empty node, a node with
//! no recognizable commitment, or a record that cannot be canonicalized all
//! produce the empty link.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;
use vdoc_core::{MaskClassifier, MaskCommitment};

use crate::config::VerifierConfig;

/// Bytes escaped in a query component: everything except alphanumerics and
/// `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A URL string pointing at an external verifier, or the empty string when
/// no link could be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct VerificationLink(String);

impl VerificationLink {
    /// The empty link.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VerificationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VerificationLink> for String {
    fn from(link: VerificationLink) -> Self {
        link.0
    }
}

/// Builds verification links against a configured verifier endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBuilder {
    config: VerifierConfig,
}

impl LinkBuilder {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// The prefix every non-empty link starts with: the verifier URL followed
    /// by `?{param}=`.
    pub fn prefix(&self) -> String {
        format!(
            "{}?{}=",
            self.config.verifier_url(),
            utf8_percent_encode(&self.config.mask_param, COMPONENT)
        )
    }

    /// Build a link for `node` using `classifier` to locate the commitment.
    pub fn build<C>(&self, classifier: &C, node: Option<&Value>) -> VerificationLink
    where
        C: MaskClassifier + ?Sized,
    {
        let node = match node {
            None | Some(Value::Null) => return VerificationLink::empty(),
            Some(Value::Object(obj)) if obj.is_empty() => return VerificationLink::empty(),
            Some(node) => node,
        };
        match classifier.commitment(node) {
            Some(commitment) => self.link_for(&commitment),
            None => {
                tracing::debug!("mask node carries no commitment; emitting empty link");
                VerificationLink::empty()
            }
        }
    }

    /// Build a link for an already extracted commitment.
    pub fn link_for(&self, commitment: &MaskCommitment) -> VerificationLink {
        let canonical = match commitment.canonical_record() {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::warn!(error = %e, "mask commitment could not be canonicalized");
                return VerificationLink::empty();
            }
        };
        let encoded = utf8_percent_encode(canonical.as_str(), COMPONENT);
        VerificationLink(format!("{}{encoded}", self.prefix()))
    }
}
