//! # Redaction
//!
//! Creating masks and finding the ones a document already carries.
//!
//! ## Commitment Scheme
//!
//! To mask a value, a fresh 32-byte nonce is drawn and the commitment hash is
//! `sha256(JCS({"nonce": <hex nonce>, "value": <value>}))`. The mask records
//! the hash, the resource URL where the original lives, and where its nonce
//! can be fetched by an authorized party. The nonce itself is returned to the
//! caller and never written into the mask.

use rand::RngCore;
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;
use vdoc_core::path::step_index;
use vdoc_core::{sha256_digest, CanonicalBytes, CanonicalizationError, DocPath, MaskClassifier};

use crate::trellis::{TrellisMask, MASK_KEY, MASK_VERSION};

/// Error while masking a document.
#[derive(Error, Debug)]
pub enum RedactError {
    /// The path does not lead to a value.
    #[error("nothing to mask at '{0}'")]
    PathNotFound(String),

    /// The path reaches into, or targets, an existing mask.
    #[error("'{0}' is already masked")]
    AlreadyMasked(String),

    /// The root of a document cannot be masked in place.
    #[error("cannot mask the document root")]
    EmptyPath,

    /// The resource URL cannot carry a nonce path.
    #[error("resource url '{0}' cannot be a base url")]
    InvalidResourceUrl(String),

    /// The value could not be canonicalized for hashing.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// A freshly created mask and the nonce needed to later prove its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedValue {
    /// The mask node that replaces the cleartext value.
    pub mask: Value,
    /// Hex-encoded nonce mixed into the commitment hash.
    pub nonce: String,
    /// Hex-encoded commitment hash.
    pub hash: String,
}

/// Creates Trellis masks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Redactor;

impl Redactor {
    /// Mask `value`, recording `resource_url` as the location of the original.
    pub fn mask(&self, value: &Value, resource_url: &Url) -> Result<MaskedValue, RedactError> {
        let mut nonce_bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce: String = nonce_bytes.iter().map(|b| format!("{b:02x}")).collect();
        self.mask_with_nonce(value, resource_url, nonce)
    }

    /// Mask `value` with a caller-chosen nonce. Deterministic; intended for
    /// reproducible fixtures.
    pub fn mask_with_nonce(
        &self,
        value: &Value,
        resource_url: &Url,
        nonce: String,
    ) -> Result<MaskedValue, RedactError> {
        let preimage = CanonicalBytes::new(&json!({"nonce": nonce, "value": value}))?;
        let digest = sha256_digest(&preimage);
        let hash = digest.to_hex();

        let mut nonce_url = resource_url.clone();
        nonce_url
            .path_segments_mut()
            .map_err(|_| RedactError::InvalidResourceUrl(resource_url.to_string()))?
            .pop_if_empty()
            .extend(["_meta", "nonce"]);

        let mask = json!({
            MASK_KEY: {
                "version": MASK_VERSION,
                "hashinfo": {"alg": digest.algorithm.as_str(), "hash": hash},
                "url": resource_url.as_str(),
                "nonceurl": nonce_url.as_str(),
            }
        });
        Ok(MaskedValue { mask, nonce, hash })
    }

    /// Replace the subtree at `path` in `document` with a mask.
    ///
    /// The walk refuses to enter an existing mask: nothing below a mask
    /// boundary is addressable, so masking it again is an error rather than
    /// a silent no-op.
    pub fn mask_path(
        &self,
        document: &mut Value,
        path: impl Into<DocPath>,
        resource_url: &Url,
    ) -> Result<MaskedValue, RedactError> {
        let path = path.into();
        if path.is_empty() {
            return Err(RedactError::EmptyPath);
        }
        let mut node = document;
        for step in path.steps() {
            if TrellisMask.is_mask(node) {
                return Err(RedactError::AlreadyMasked(path.to_string()));
            }
            node = child_mut(node, step).ok_or_else(|| RedactError::PathNotFound(path.to_string()))?;
        }
        if TrellisMask.is_mask(node) {
            return Err(RedactError::AlreadyMasked(path.to_string()));
        }
        let masked = self.mask(node, resource_url)?;
        *node = masked.mask.clone();
        tracing::debug!(path = %path, hash = %masked.hash, "masked subtree");
        Ok(masked)
    }
}

fn child_mut<'a>(node: &'a mut Value, step: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(step),
        Value::Array(items) => step_index(step).and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

/// Paths of every mask in `document`, in document order.
///
/// Only outermost masks are reported: a mask is opaque, so the walk does not
/// descend into one.
pub fn find_mask_paths<C>(document: &Value, classifier: &C) -> Vec<DocPath>
where
    C: MaskClassifier + ?Sized,
{
    let mut found = Vec::new();
    collect(document, classifier, DocPath::root(), &mut found);
    found
}

fn collect<C>(node: &Value, classifier: &C, here: DocPath, found: &mut Vec<DocPath>)
where
    C: MaskClassifier + ?Sized,
{
    if classifier.is_mask(node) {
        found.push(here);
        return;
    }
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                collect(child, classifier, here.child(key.as_str()), found);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect(child, classifier, here.child(i.to_string()), found);
            }
        }
        _ => {}
    }
}
