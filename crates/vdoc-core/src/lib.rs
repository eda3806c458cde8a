//! # vdoc-core: Foundational Types for the Virtual Document Stack
//!
//! This crate defines the primitives every other `vdoc-*` crate builds on.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`DocPath` for every path.** Resolution, masking, and mask discovery
//!    all speak in `DocPath` values. Raw strings are parsed exactly once, at
//!    the `From<&str>` boundary.
//!
//! 2. **`CanonicalBytes` newtype.** Every deterministic serialization (link
//!    payloads, commitment hashing) flows through `CanonicalBytes::new()`.
//!    No raw `serde_json::to_vec()` where byte stability matters.
//!
//! 3. **Mask classification is a capability.** The [`MaskClassifier`] trait
//!    is the only way the rest of the stack learns whether a node is a mask.
//!    Concrete mask formats live in `vdoc-mask`; tests can supply an
//!    in-memory fake.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vdoc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod mask;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest, DigestAlgorithm};
pub use error::CanonicalizationError;
pub use mask::{MaskClassifier, MaskCommitment};
pub use path::DocPath;
