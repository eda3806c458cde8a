//! # Path Resolver
//!
//! Consumes a [`DocPath`] against a document, one step at a time, and stops
//! at the first point where it cannot safely continue.
//!
//! ## Traversal
//!
//! For each step, while steps remain:
//!
//! 1. If the current node is a mask, stop. The unconsumed steps (current
//!    step included) and the mask itself are returned.
//! 2. Otherwise look the step up in the current node: an object member by
//!    name, an array element by decimal index. If nothing is there, stop.
//!    The unconsumed steps (current step included) and an absent value are
//!    returned.
//! 3. Otherwise descend.
//!
//! When every step is consumed the final node is returned with an empty
//! remaining path. That node may itself be a mask when the path names the
//! mask exactly; the outcome then reports `Masked`.
//!
//! ## Mask Boundary Timing
//!
//! The mask check runs on a node *before* the resolver tries to descend out
//! of it. For `{"a": M}` and the path `a/b/c`, `a` is consumed, `M` is found
//! and the remaining path is `b/c`. The check takes precedence over the key
//! lookup: even if `M` happens to have a `b` member, it is never read.
//!
//! ## Presence
//!
//! A member is present when it exists, whatever its value. `0`, `""`,
//! `false` and `null` all resolve. Stepping *through* a scalar or `null`
//! finds nothing and reports the step as missing.

use serde::Serialize;
use serde_json::Value;
use vdoc_core::path::step_index;
use vdoc_core::{DocPath, MaskClassifier};
use vdoc_mask::{LinkBuilder, TrellisMask, VerifierConfig};

use crate::display::SchemeTable;

/// How a resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every step was consumed against present, non-mask nodes.
    Resolved,
    /// Traversal ended on a mask, either mid-path or as the path's target.
    Masked,
    /// A step named something that is not there.
    Missing,
}

/// The result of resolving a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<'d> {
    /// Steps that were not consumed. Empty on full resolution and when the
    /// path targets a mask exactly.
    pub remaining: DocPath,
    /// The node where traversal stopped: the resolved value, the mask at
    /// the boundary, or `None` when a member was missing.
    pub value: Option<&'d Value>,
    /// How traversal ended.
    pub outcome: Outcome,
}

impl<'d> Resolution<'d> {
    /// True only for full resolution to a non-mask value.
    pub fn is_resolved(&self) -> bool {
        self.outcome == Outcome::Resolved
    }

    pub fn is_masked(&self) -> bool {
        self.outcome == Outcome::Masked
    }

    pub fn is_missing(&self) -> bool {
        self.outcome == Outcome::Missing
    }
}

/// Resolve `path` in `document`, consulting `classifier` for mask
/// boundaries.
pub fn resolve<'d, C>(classifier: &C, document: &'d Value, path: &DocPath) -> Resolution<'d>
where
    C: MaskClassifier + ?Sized,
{
    let mut node = document;
    for (depth, step) in path.steps().iter().enumerate() {
        if classifier.is_mask(node) {
            tracing::debug!(path = %path, depth, "resolution stopped at mask boundary");
            return Resolution {
                remaining: path.suffix(depth),
                value: Some(node),
                outcome: Outcome::Masked,
            };
        }
        match child(node, step) {
            Some(next) => node = next,
            None => {
                tracing::debug!(path = %path, depth, step = %step, "resolution stopped at missing member");
                return Resolution {
                    remaining: path.suffix(depth),
                    value: None,
                    outcome: Outcome::Missing,
                };
            }
        }
    }

    let outcome = if classifier.is_mask(node) {
        Outcome::Masked
    } else {
        Outcome::Resolved
    };
    Resolution {
        remaining: path.suffix(path.len()),
        value: Some(node),
        outcome,
    }
}

fn child<'d>(node: &'d Value, step: &str) -> Option<&'d Value> {
    match node {
        Value::Object(map) => map.get(step),
        Value::Array(items) => step_index(step).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// A configured resolver: mask classifier, verification link builder, and
/// the certification scheme table used by the display formatters.
///
/// Holds no per-document state; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct Resolver<C = TrellisMask> {
    classifier: C,
    links: LinkBuilder,
    schemes: SchemeTable,
}

impl Resolver<TrellisMask> {
    /// A Trellis-mask resolver with links pointing at `config`'s verifier.
    pub fn trellis(config: VerifierConfig) -> Self {
        Self::new(TrellisMask, LinkBuilder::new(config))
    }
}

impl Default for Resolver<TrellisMask> {
    fn default() -> Self {
        Self::new(TrellisMask, LinkBuilder::default())
    }
}

impl<C: MaskClassifier> Resolver<C> {
    pub fn new(classifier: C, links: LinkBuilder) -> Self {
        Self {
            classifier,
            links,
            schemes: SchemeTable::default(),
        }
    }

    /// Replace the certification scheme table.
    pub fn with_schemes(mut self, schemes: SchemeTable) -> Self {
        self.schemes = schemes;
        self
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }

    pub fn schemes(&self) -> &SchemeTable {
        &self.schemes
    }

    /// Resolve `path` in `document`.
    pub fn resolve<'d>(&self, document: &'d Value, path: impl Into<DocPath>) -> Resolution<'d> {
        resolve(&self.classifier, document, &path.into())
    }
}
