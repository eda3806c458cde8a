//! # Value-or-Link Projection
//!
//! Wraps the resolver for callers that want *something to show*: the real
//! value, a verification link when the value is masked, or absent.
//!
//! A mask found anywhere along the path becomes a link, including a mask the
//! path names exactly. A partial resolution that did not end on a mask
//! surfaces as [`Projection::Absent`], the same as a missing member; callers
//! choose their own default for display.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use vdoc_core::{DocPath, MaskClassifier};
use vdoc_mask::VerificationLink;

use crate::resolver::{Outcome, Resolver};

/// What a path projects to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Projection<'d> {
    /// The path fully resolved to a non-mask value.
    Value(&'d Value),
    /// The path hit a mask; this links to its verifier.
    Link(VerificationLink),
    /// Nothing at the path.
    Absent,
}

impl<'d> Projection<'d> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_value(&self) -> Option<&'d Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&VerificationLink> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }
}

/// Display rendering: strings without quotes, `null` and absent as the empty
/// string, links as their URL, anything else as compact JSON.
impl fmt::Display for Projection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(Value::String(s)) => f.write_str(s),
            Self::Value(Value::Null) | Self::Absent => Ok(()),
            Self::Value(other) => write!(f, "{other}"),
            Self::Link(link) => write!(f, "{link}"),
        }
    }
}

impl<C: MaskClassifier> Resolver<C> {
    /// Project `path` in `document` to a value, a link, or absent.
    pub fn project<'d>(&self, document: &'d Value, path: impl Into<DocPath>) -> Projection<'d> {
        let resolution = self.resolve(document, path);
        match (resolution.outcome, resolution.value) {
            (Outcome::Masked, mask) => {
                Projection::Link(self.links().build(self.classifier(), mask))
            }
            (Outcome::Resolved, Some(value)) => Projection::Value(value),
            _ => Projection::Absent,
        }
    }

    /// [`project`](Self::project), rendered for display.
    pub fn project_string(&self, document: &Value, path: impl Into<DocPath>) -> String {
        self.project(document, path).to_string()
    }
}
