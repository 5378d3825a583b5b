//! Declarative two-way mapping between [`Node`] trees and typed values.
//!
//! A field's target type picks its shape: `T` is required, `Option<T>` is
//! optional, `Vec<T>` is a sequence (a single present value is wrapped into a
//! one-element sequence), `Vec<Vec<T>>` is a nested sequence, `HashSet<T>`
//! is a de-duplicated sequence, `HashMap<String, T>` is a keyed mapping and
//! `HashMap<String, Vec<T>>` a keyed mapping of sequences. Composite types
//! implement [`Mappable`] and describe their fields once per direction.
//!
//! Errors are one of five kinds (see [`ErrorKind`]) and always name the full
//! key path of the offending field.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use nodemap::{decode, ErrorKind, Mappable, MappingContext, Node, Result};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Roster {
//!     groups: HashMap<String, Vec<String>>,
//!     captain: Option<String>,
//! }
//!
//! impl Mappable for Roster {
//!     fn decode(map: &mut MappingContext<'_>) -> Result<Self> {
//!         Ok(Roster {
//!             groups: map.extract_field("groups")?,
//!             captain: map.extract_field("captain")?,
//!         })
//!     }
//!
//!     fn encode(&self, map: &mut MappingContext<'_>) -> Result<()> {
//!         map.write_field("groups", &self.groups)?;
//!         map.write_field("captain", &self.captain)
//!     }
//! }
//!
//! let node = Node::from(json!({"groups": {"boys": ["Joe", "Phil"], "girls": "Jane"}}));
//! let roster: Roster = decode(&node).unwrap();
//! assert_eq!(roster.groups["girls"], ["Jane"]);
//! assert_eq!(roster.captain, None);
//!
//! let err = decode::<Roster>(&Node::from(json!({"groups": [1]}))).unwrap_err();
//! assert!(matches!(err.kind(), ErrorKind::ShapeMismatch { .. }));
//! assert_eq!(err.path().to_string(), "/groups");
//! ```

mod context;
mod convert;
mod error;
mod field;
mod mapping;
mod shape;
mod transform;

pub use context::{Context, Options};
pub use convert::NodeConvertible;
pub use error::{Error, ErrorKind, Result, TransformError};
pub use field::{extract, extract_at, extract_with, Field};
pub use mapping::{Direction, Mappable, MappingContext};
pub use shape::Shape;
pub use transform::Transform;

pub use nodemap_node::{KeyPath, Mapping, Node, NodeKind, Number, PathStep};

use tracing::{debug, trace_span};

/// Decodes a `T` from `node` with the default [`Context`].
pub fn decode<T: NodeConvertible>(node: &Node) -> Result<T> {
    decode_with(node, &Context::new())
}

pub fn decode_with<T: NodeConvertible>(node: &Node, context: &Context) -> Result<T> {
    let _span = trace_span!("decode", type_name = std::any::type_name::<T>()).entered();
    T::from_node(node, context).inspect_err(|err| {
        debug!(path = %err.path(), error = %err.kind(), "decode failed");
    })
}

/// Encodes `value` into a [`Node`] with the default [`Context`].
pub fn encode<T: NodeConvertible>(value: &T) -> Result<Node> {
    encode_with(value, &Context::new())
}

pub fn encode_with<T: NodeConvertible>(value: &T, context: &Context) -> Result<Node> {
    let _span = trace_span!("encode", type_name = std::any::type_name::<T>()).entered();
    value.to_node(context).inspect_err(|err| {
        debug!(path = %err.path(), error = %err.kind(), "encode failed");
    })
}
