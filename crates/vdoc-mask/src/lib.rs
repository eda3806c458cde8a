//! # vdoc-mask: Trellis Masks
//!
//! Concrete support for the Trellis mask format:
//!
//! - **Classifier** (`trellis.rs`): [`TrellisMask`] implements
//!   [`vdoc_core::MaskClassifier`] for nodes of the form
//!   `{"trellis-mask": {"version", "hashinfo": {"alg", "hash"}, "url", "nonceurl"}}`.
//!
//! - **Verification links** (`link.rs`): [`LinkBuilder`] serializes a mask's
//!   committed record into a self-contained URL for an external verifier.
//!
//! - **Configuration** (`config.rs`): verifier endpoint loaded from the
//!   environment.
//!
//! - **Redaction** (`redact.rs`): replacing cleartext subtrees with masks,
//!   and enumerating the masks already present in a document.
//!
//! ## Invariant
//!
//! A verification link only ever carries the committed record. Cleartext
//! siblings of the mask and the hidden value's nonce never reach it.

pub mod config;
pub mod link;
pub mod redact;
pub mod trellis;

pub use config::{ConfigError, VerifierConfig};
pub use link::{LinkBuilder, VerificationLink};
pub use redact::{find_mask_paths, MaskedValue, RedactError, Redactor};
pub use trellis::{TrellisMask, MASK_KEY};
