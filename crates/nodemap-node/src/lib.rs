//! The data model under nodemap: an immutable JSON-like [`Node`] tree, the
//! [`KeyPath`] used to address it, and the resolver that walks one into the
//! other.
//!
//! # Example
//!
//! ```
//! use nodemap_node::{resolve, KeyPath, Node};
//! use serde_json::json;
//!
//! let doc = Node::from(json!({"people": [{"first_name": "Joe"}]}));
//! let path = KeyPath::from("people").index(0).key("first_name");
//! assert_eq!(resolve(&doc, &path), Some(&Node::from("Joe")));
//! assert_eq!(path.to_string(), "/people/0/first_name");
//! ```

mod error;
mod json;
mod node;
mod number;
pub mod path;
mod resolve;

pub use error::PathError;
pub use node::{Mapping, Node, NodeKind};
pub use number::Number;
pub use path::{KeyPath, PathStep};
pub use resolve::{insert_at, resolve, resolve_mut};
