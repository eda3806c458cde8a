//! # Trellis Mask Classifier
//!
//! A Trellis mask is any JSON object with a `trellis-mask` member whose value
//! is an object. That inner object is the committed record:
//!
//! ```json
//! {
//!   "trellis-mask": {
//!     "version": "1.0",
//!     "hashinfo": { "alg": "SHA256", "hash": "9f86d0..." },
//!     "url": "https://trellis.example/resources/123",
//!     "nonceurl": "https://trellis.example/resources/123/_meta/nonce"
//!   },
//!   "name": "still visible"
//! }
//! ```
//!
//! Members next to `trellis-mask` are cleartext siblings.

use serde_json::Value;
use vdoc_core::{MaskClassifier, MaskCommitment};

/// Member name that marks a node as a mask.
pub const MASK_KEY: &str = "trellis-mask";

/// Version written into masks created by this crate.
pub const MASK_VERSION: &str = "1.0";

/// Classifier for the Trellis mask format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrellisMask;

impl MaskClassifier for TrellisMask {
    fn is_mask(&self, node: &Value) -> bool {
        node.get(MASK_KEY).is_some_and(Value::is_object)
    }

    /// Accepts either the whole mask node or the bare committed record, so a
    /// caller holding only the inner object still gets a commitment.
    fn commitment(&self, node: &Value) -> Option<MaskCommitment> {
        let record = match node.get(MASK_KEY) {
            Some(Value::Object(inner)) => inner,
            Some(_) => return None,
            None => node.as_object()?,
        };
        let hashinfo = record.get("hashinfo")?.as_object()?;
        let algorithm = hashinfo.get("alg")?.as_str()?;
        let hash = hashinfo.get("hash")?.as_str()?;
        Some(MaskCommitment::new(algorithm, hash, record.clone()))
    }
}
