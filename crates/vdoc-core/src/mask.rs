//! # Mask Classification Capability
//!
//! A *mask* is a subtree that stands in for a redacted value. It carries a
//! commitment (an algorithm and a hash over the hidden value) and may carry
//! sibling fields that stay in cleartext. Everything below a mask's boundary
//! is opaque.
//!
//! The resolver never inspects mask structure directly. It asks a
//! [`MaskClassifier`], which makes the concrete wire format pluggable and
//! lets tests substitute an in-memory fake.

use serde_json::{Map, Value};

use crate::canonical::CanonicalBytes;
use crate::error::CanonicalizationError;

/// Recognizes mask nodes and extracts their commitments.
pub trait MaskClassifier {
    /// Whether `node` is a mask placeholder.
    fn is_mask(&self, node: &Value) -> bool;

    /// The commitment carried by `node`, or `None` when `node` is not a mask
    /// or its commitment record is malformed.
    fn commitment(&self, node: &Value) -> Option<MaskCommitment>;
}

impl<C: MaskClassifier + ?Sized> MaskClassifier for &C {
    fn is_mask(&self, node: &Value) -> bool {
        (**self).is_mask(node)
    }

    fn commitment(&self, node: &Value) -> Option<MaskCommitment> {
        (**self).commitment(node)
    }
}

/// The committed data of a mask.
///
/// `algorithm` and `hash` are the extracted commitment; `record` is the full
/// committed record exactly as the mask carries it, which is what a
/// verification link embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskCommitment {
    /// Hash algorithm identifier, as written in the record.
    pub algorithm: String,
    /// Hash value, as written in the record.
    pub hash: String,
    /// The complete committed record.
    pub record: Map<String, Value>,
}

impl MaskCommitment {
    pub fn new(algorithm: impl Into<String>, hash: impl Into<String>, record: Map<String, Value>) -> Self {
        Self {
            algorithm: algorithm.into(),
            hash: hash.into(),
            record,
        }
    }

    /// Canonical serialization of the committed record.
    pub fn canonical_record(&self) -> Result<CanonicalBytes, CanonicalizationError> {
        CanonicalBytes::new(&self.record)
    }
}
