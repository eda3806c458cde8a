//! # Error Types
//!
//! Errors raised by the foundational types. Path parsing and resolution
//! never fail (misses and mask boundaries are results), so the only
//! fallible operation at this layer is canonical serialization.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// The value could not be converted into a JSON tree.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
