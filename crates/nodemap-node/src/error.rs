use thiserror::Error;

use crate::node::NodeKind;
use crate::path::KeyPath;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("json pointer must be absolute or empty")]
    NotAbsolute,
    #[error("cannot descend into {found} at `{at}`")]
    NotAContainer { at: KeyPath, found: NodeKind },
    #[error("index {index} is past the end of the sequence at `{at}` (length {len})")]
    IndexOutOfRange { at: KeyPath, index: usize, len: usize },
}
