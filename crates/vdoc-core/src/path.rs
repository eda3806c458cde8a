//! # Document Paths
//!
//! A `DocPath` is an ordered list of steps into a JSON document. Paths are
//! written with `.` or `/` between steps (`organization.location.city`,
//! `/organization/location/city`); a leading delimiter is optional and
//! ignored. Array elements are addressed by their decimal index.
//!
//! ## Limitations
//!
//! There is no escape syntax. A member name containing `.` or `/` cannot be
//! addressed from a path string; build the path from pre-split steps instead
//! (`DocPath::from_steps`).
//!
//! ## Rendering
//!
//! A parsed path remembers the first delimiter it saw and renders with it, so
//! the unconsumed suffix of `a.b.c` prints as `b.c` and of `a/b/c` as `b/c`.
//! Paths built from steps render with `/`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Delimiter used when a path was not parsed from text.
pub const DEFAULT_DELIMITER: char = '/';

fn is_delimiter(c: char) -> bool {
    c == '.' || c == '/'
}

/// Interpret a step as an array index. Only plain decimal digits qualify, so
/// `+1` or ` 1` address nothing in an array.
pub fn step_index(step: &str) -> Option<usize> {
    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    step.parse().ok()
}

/// An ordered sequence of steps into a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocPath {
    steps: Vec<String>,
    delimiter: char,
}

impl DocPath {
    /// The empty path. Resolves to the document root.
    pub fn root() -> Self {
        Self {
            steps: Vec::new(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Parse a path string. Only a *leading* empty step is dropped; inner and
    /// trailing empty steps are kept and address the `""` member.
    pub fn parse(raw: &str) -> Self {
        let delimiter = raw.chars().find(|c| is_delimiter(*c)).unwrap_or(DEFAULT_DELIMITER);
        let mut steps: Vec<String> = raw.split(is_delimiter).map(str::to_owned).collect();
        if steps.first().is_some_and(String::is_empty) {
            steps.remove(0);
        }
        Self { steps, delimiter }
    }

    /// Build a path from steps that are already split. No step is dropped.
    pub fn from_steps<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// The steps of this path, in traversal order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// The delimiter used to render this path.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps from index `from` onward, rendered with the same delimiter.
    /// An index past the end yields the empty path.
    pub fn suffix(&self, from: usize) -> Self {
        Self {
            steps: self.steps.get(from..).map(<[String]>::to_vec).unwrap_or_default(),
            delimiter: self.delimiter,
        }
    }

    /// A new path with `step` appended.
    pub fn child(&self, step: impl Into<String>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step.into());
        Self {
            steps,
            delimiter: self.delimiter,
        }
    }
}

impl Default for DocPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.delimiter)?;
            }
            f.write_str(step)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for DocPath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for DocPath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl From<&str> for DocPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for DocPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&String> for DocPath {
    fn from(raw: &String) -> Self {
        Self::parse(raw)
    }
}

impl From<Vec<String>> for DocPath {
    fn from(steps: Vec<String>) -> Self {
        Self::from_steps(steps)
    }
}

impl From<&[&str]> for DocPath {
    fn from(steps: &[&str]) -> Self {
        Self::from_steps(steps.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for DocPath {
    fn from(steps: [&str; N]) -> Self {
        Self::from_steps(steps)
    }
}

impl From<&DocPath> for DocPath {
    fn from(path: &DocPath) -> Self {
        path.clone()
    }
}

impl Serialize for DocPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
