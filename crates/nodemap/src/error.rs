//! Error taxonomy for decoding and encoding.
//!
//! Every failure is one [`Error`]: the [`KeyPath`] of the offending field,
//! relative to the value being converted, plus an [`ErrorKind`]. Paths grow
//! from the inside out: an element conversion fails with an empty path, the
//! sequence conversion prepends the index, the field extraction prepends the
//! field path, and so on up to the decoded root.

use std::error::Error as StdError;
use std::fmt;

use nodemap_node::{KeyPath, Node, NodeKind, PathError, PathStep};
use thiserror::Error;

use crate::shape::Shape;

/// Failure raised by a user transform.
pub type TransformError = Box<dyn StdError + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A non-optional shape was requested at a path that resolved to nothing.
    #[error("required value missing")]
    RequiredValueMissing,
    /// A present scalar could not be converted to the requested type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: Node },
    /// The present node's structural kind cannot satisfy the requested shape.
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: Shape, found: NodeKind },
    /// A user transform failed.
    #[error("transform rejected value: {0}")]
    TransformRejected(#[source] TransformError),
    #[error("invalid context usage: {0}")]
    InvalidContextUsage(String),
}

#[derive(Debug)]
pub struct Error {
    path: KeyPath,
    kind: ErrorKind,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            path: KeyPath::root(),
            kind,
        }
    }

    pub fn required() -> Self {
        Self::new(ErrorKind::RequiredValueMissing)
    }

    pub fn type_mismatch(expected: &'static str, found: &Node) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected,
            found: found.clone(),
        })
    }

    pub fn shape_mismatch(expected: Shape, found: NodeKind) -> Self {
        Self::new(ErrorKind::ShapeMismatch { expected, found })
    }

    pub fn transform_rejected(source: impl Into<TransformError>) -> Self {
        Self::new(ErrorKind::TransformRejected(source.into()))
    }

    pub fn invalid_context(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidContextUsage(message.into()))
    }

    /// Path of the offending node, relative to the value being converted.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Prepends one step to the error path.
    pub fn within(mut self, step: PathStep) -> Self {
        self.path.prepend(&KeyPath::from(step));
        self
    }

    /// Prepends `prefix` to the error path.
    pub fn under(mut self, prefix: &KeyPath) -> Self {
        self.path.prepend(prefix);
        self
    }

    /// Replaces the path. Used when the failure location is already absolute.
    pub fn at(mut self, path: KeyPath) -> Self {
        self.path = path;
        self
    }

    pub fn is_required_missing(&self) -> bool {
        matches!(self.kind, ErrorKind::RequiredValueMissing)
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::ShapeMismatch { .. })
    }

    pub fn is_transform_rejected(&self) -> bool {
        matches!(self.kind, ErrorKind::TransformRejected(_))
    }

    pub fn is_invalid_context(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidContextUsage(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{} at the root", self.kind)
        } else {
            write!(f, "{} at `{}`", self.kind, self.path)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.kind.source()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Write-side path failures during encode.
///
/// Writing through a scalar is a shape problem at the blocking node; an index
/// gap means the composite described its fields out of order.
impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotAContainer { at, found } => {
                Error::shape_mismatch(Shape::Composite, found).at(at)
            }
            PathError::IndexOutOfRange { ref at, .. } => {
                let at = at.clone();
                Error::invalid_context(err.to_string()).at(at)
            }
            PathError::NotAbsolute => Error::invalid_context(err.to_string()),
        }
    }
}
