//! Key paths: ordered lookup steps into a [`Node`](crate::Node).
//!
//! A [`KeyPath`] renders as an RFC 6901 JSON Pointer, so error messages point
//! at the offending field in a form most tooling already understands.
//!
//! ```
//! use nodemap_node::KeyPath;
//!
//! let path = KeyPath::from("people").index(1).key("first_name");
//! assert_eq!(path.to_string(), "/people/1/first_name");
//!
//! let dotted = KeyPath::from("groups.boys");
//! assert_eq!(dotted.len(), 2);
//! ```

use std::fmt;

use crate::error::PathError;

/// One lookup step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathStep {
    /// Mapping key.
    Key(String),
    /// Sequence index.
    Index(usize),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(&escape_component(key)),
            PathStep::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

/// An ordered sequence of [`PathStep`]s. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    steps: Vec<PathStep>,
}

impl KeyPath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Splits a dotted path (`"a.b.c"`) into key steps. `""` is the root.
    pub fn parse_dotted(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self {
            steps: path.split('.').map(PathStep::from).collect(),
        }
    }

    /// Parses an absolute JSON Pointer. Every token becomes a key step.
    ///
    /// ```
    /// use nodemap_node::{KeyPath, PathStep};
    ///
    /// let path = KeyPath::parse_pointer("/a~1b/~0k").unwrap();
    /// assert_eq!(path.steps(), &[PathStep::from("a/b"), PathStep::from("~k")]);
    /// assert!(KeyPath::parse_pointer("a/b").is_err());
    /// ```
    pub fn parse_pointer(pointer: &str) -> Result<Self, PathError> {
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        if !pointer.starts_with('/') {
            return Err(PathError::NotAbsolute);
        }
        Ok(Self {
            steps: pointer
                .split('/')
                .skip(1)
                .map(|token| PathStep::Key(unescape_component(token)))
                .collect(),
        })
    }

    /// Appends a key step.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(PathStep::Key(key.into()));
        self
    }

    /// Appends an index step.
    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::Index(index));
        self
    }

    pub fn push(&mut self, step: impl Into<PathStep>) {
        self.steps.push(step.into());
    }

    /// Returns `self` followed by the steps of `other`.
    pub fn join(&self, other: &KeyPath) -> KeyPath {
        let mut steps = Vec::with_capacity(self.steps.len() + other.steps.len());
        steps.extend_from_slice(&self.steps);
        steps.extend_from_slice(&other.steps);
        KeyPath { steps }
    }

    /// Inserts `prefix` in front of this path.
    pub fn prepend(&mut self, prefix: &KeyPath) {
        if prefix.is_root() {
            return;
        }
        self.steps.splice(0..0, prefix.steps.iter().cloned());
    }

    pub fn truncate(&mut self, len: usize) {
        self.steps.truncate(len);
    }

    /// The path without its last step, or `None` at the root.
    pub fn parent(&self) -> Option<KeyPath> {
        let (_, init) = self.steps.split_last()?;
        Some(KeyPath {
            steps: init.to_vec(),
        })
    }

    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// JSON Pointer form. The root is `""`.
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            out.push('/');
            out.push_str(&step.to_string());
        }
        out
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pointer())
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::parse_dotted(path)
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        Self::parse_dotted(&path)
    }
}

impl From<&String> for KeyPath {
    fn from(path: &String) -> Self {
        Self::parse_dotted(path)
    }
}

impl From<usize> for KeyPath {
    fn from(index: usize) -> Self {
        Self {
            steps: vec![PathStep::Index(index)],
        }
    }
}

impl From<PathStep> for KeyPath {
    fn from(step: PathStep) -> Self {
        Self { steps: vec![step] }
    }
}

impl From<Vec<PathStep>> for KeyPath {
    fn from(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }
}

/// Key segments taken verbatim, so keys that contain `.` stay reachable.
impl From<&[&str]> for KeyPath {
    fn from(keys: &[&str]) -> Self {
        Self {
            steps: keys.iter().map(|k| PathStep::from(*k)).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(keys: [&str; N]) -> Self {
        Self::from(&keys[..])
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl FromIterator<PathStep> for KeyPath {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Unescapes one JSON Pointer token: `~1` → `/`, then `~0` → `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one JSON Pointer token: `~` → `~0`, then `/` → `~1`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}
