//! # vdoc-resolve: Redaction-Aware Path Resolution
//!
//! Walks paths into JSON documents in which any subtree may have been
//! replaced by a mask.
//!
//! - **Resolver** (`resolver.rs`): consumes a path step by step and stops at
//!   the first missing member or mask boundary, reporting the unconsumed
//!   suffix. Misses and masks are results, never errors.
//!
//! - **Projector** (`projector.rs`): turns a resolution into the real value,
//!   a verification link (when resolution ended on a mask), or absent.
//!
//! - **Display** (`display.rs`): postal-address and certification-scheme
//!   formatting built on the projector.
//!
//! ## Invariants
//!
//! - Presence is definedness: `0`, `""`, `false` and `null` are values.
//! - A mask is never descended into, even when the next step would exist
//!   structurally below it.
//! - The resolver holds no state across calls and never retains the
//!   document; every result borrows from the caller's document.

pub mod display;
pub mod projector;
pub mod resolver;

pub use display::{SchemeTable, ADDRESS_FIELDS};
pub use projector::Projection;
pub use resolver::{resolve, Outcome, Resolution, Resolver};
