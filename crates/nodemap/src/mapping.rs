//! Mapping contexts and the composite mapper trait.
//!
//! A composite type describes its fields twice, once per direction, against
//! a [`MappingContext`]:
//!
//! ```
//! use nodemap::{decode, encode, Mappable, MappingContext, Node, Result};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     first_name: String,
//!     nickname: Option<String>,
//! }
//!
//! impl Mappable for Person {
//!     fn decode(map: &mut MappingContext<'_>) -> Result<Self> {
//!         Ok(Person {
//!             first_name: map.extract_field("first_name")?,
//!             nickname: map.extract_field("nickname")?,
//!         })
//!     }
//!
//!     fn encode(&self, map: &mut MappingContext<'_>) -> Result<()> {
//!         map.write_field("first_name", &self.first_name)?;
//!         map.write_field("nickname", &self.nickname)
//!     }
//! }
//!
//! let node = Node::from(json!({"first_name": "Joe"}));
//! let joe: Person = decode(&node).unwrap();
//! assert_eq!(joe, Person { first_name: "Joe".into(), nickname: None });
//! assert_eq!(encode(&joe).unwrap(), node);
//! ```

use nodemap_node::{insert_at, resolve, KeyPath, Node};

use crate::context::{self, Context};
use crate::convert::NodeConvertible;
use crate::error::{Error, Result, TransformError};
use crate::field::{self, Field};
use crate::shape::Shape;
use crate::transform::Transform;

/// Which way a [`MappingContext`] converts. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Node to value.
    Decode,
    /// Value to node.
    Encode,
}

/// A per-call session over one node (decode) or one output tree (encode).
///
/// Field operations take paths relative to the current prefix (see
/// [`MappingContext::nested`]). Extraction on an encode context, writing on
/// a decode context, and extraction from an unbound context all fail with
/// `InvalidContextUsage`.
#[derive(Debug)]
pub struct MappingContext<'a> {
    direction: Direction,
    source: Option<&'a Node>,
    output: Node,
    prefix: KeyPath,
    context: &'a Context,
}

impl<'a> MappingContext<'a> {
    pub fn decoding(node: &'a Node, context: &'a Context) -> Self {
        Self {
            direction: Direction::Decode,
            source: Some(node),
            output: Node::Null,
            prefix: KeyPath::root(),
            context,
        }
    }

    pub fn encoding(context: &'a Context) -> Self {
        Self {
            direction: Direction::Encode,
            source: None,
            output: Node::mapping(),
            prefix: KeyPath::root(),
            context,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn context(&self) -> &'a Context {
        self.context
    }

    /// The node being decoded, if any.
    pub fn node(&self) -> Option<&'a Node> {
        self.source
    }

    pub fn prefix(&self) -> &KeyPath {
        &self.prefix
    }

    /// Extracts the field at `path`, with the shape of `T`.
    pub fn extract_field<T: Field>(&self, path: impl Into<KeyPath>) -> Result<T> {
        let (full, found) = self.locate(path.into(), "extract_field")?;
        T::extract(found, self.context).map_err(|e| e.under(&full))
    }

    /// Extracts a raw `R` at `path` and maps it through `transform`.
    pub fn extract_with<R, T, E>(
        &self,
        path: impl Into<KeyPath>,
        transform: impl FnOnce(R) -> std::result::Result<T, E>,
    ) -> Result<T>
    where
        R: Field,
        E: Into<TransformError>,
    {
        let (full, found) = self.locate(path.into(), "extract_with")?;
        field::extract_with(found, self.context, transform).map_err(|e| e.under(&full))
    }

    pub fn extract_transformed<R: Field, T>(
        &self,
        path: impl Into<KeyPath>,
        transform: &Transform<R, T>,
    ) -> Result<T> {
        self.extract_with(path, |raw| transform.decode(raw))
    }

    /// Writes `value` at `path`. `None` optionals leave the field out.
    pub fn write_field<T: Field>(&mut self, path: impl Into<KeyPath>, value: &T) -> Result<()> {
        let full = self.target(path.into(), "write_field")?;
        let node = value.emit(self.context).map_err(|e| e.under(&full))?;
        self.insert(&full, node)
    }

    /// Maps `value` through `transform` and writes the result at `path`.
    pub fn write_with<T, R, E>(
        &mut self,
        path: impl Into<KeyPath>,
        value: &T,
        transform: impl FnOnce(&T) -> std::result::Result<R, E>,
    ) -> Result<()>
    where
        R: Field,
        E: Into<TransformError>,
    {
        let full = self.target(path.into(), "write_with")?;
        let raw = transform(value).map_err(|e| Error::transform_rejected(e).under(&full))?;
        let node = raw.emit(self.context).map_err(|e| e.under(&full))?;
        self.insert(&full, node)
    }

    pub fn write_transformed<R: Field, T>(
        &mut self,
        path: impl Into<KeyPath>,
        value: &T,
        transform: &Transform<R, T>,
    ) -> Result<()> {
        self.write_with(path, value, |v| transform.encode(v))
    }

    /// Runs `f` with `path` appended to the prefix, in either direction.
    ///
    /// ```
    /// use nodemap::{Context, MappingContext, Node};
    /// use serde_json::json;
    ///
    /// let ctx = Context::new();
    /// let mut map = MappingContext::encoding(&ctx);
    /// map.nested("address", |map| {
    ///     map.write_field("city", &"Oslo".to_string())?;
    ///     map.write_field("zip", &150u32)
    /// })
    /// .unwrap();
    /// assert_eq!(
    ///     map.into_node().unwrap(),
    ///     Node::from(json!({"address": {"city": "Oslo", "zip": 150}}))
    /// );
    /// ```
    pub fn nested<R>(
        &mut self,
        path: impl Into<KeyPath>,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        let depth = self.prefix.len();
        self.prefix = self.prefix.join(&path.into());
        let out = f(self);
        self.prefix.truncate(depth);
        out
    }

    /// Finishes an encode context and returns the written tree.
    pub fn into_node(self) -> Result<Node> {
        match self.direction {
            Direction::Encode => Ok(self.output),
            Direction::Decode => Err(Error::invalid_context(
                "into_node called on a decode context",
            )),
        }
    }

    fn locate(&self, path: KeyPath, op: &str) -> Result<(KeyPath, Option<&'a Node>)> {
        let full = self.prefix.join(&path);
        let source = match (self.direction, self.source) {
            (Direction::Decode, Some(node)) => node,
            (Direction::Decode, None) => {
                return Err(Error::invalid_context(format!(
                    "{op} on a decode context with no bound node"
                ))
                .at(full))
            }
            (Direction::Encode, _) => {
                return Err(
                    Error::invalid_context(format!("{op} on an encode context")).at(full)
                )
            }
        };
        let found = resolve(source, &full)
            .filter(|node| !(self.context.options().null_is_absent && node.is_null()));
        Ok((full, found))
    }

    fn target(&self, path: KeyPath, op: &str) -> Result<KeyPath> {
        let full = self.prefix.join(&path);
        match self.direction {
            Direction::Encode => Ok(full),
            Direction::Decode => {
                Err(Error::invalid_context(format!("{op} on a decode context")).at(full))
            }
        }
    }

    fn insert(&mut self, full: &KeyPath, node: Option<Node>) -> Result<()> {
        match node {
            Some(node) => insert_at(&mut self.output, full, node).map_err(Error::from),
            None => Ok(()),
        }
    }
}

/// An unbound decode context. Every extraction from it is `InvalidContextUsage`.
impl Default for MappingContext<'_> {
    fn default() -> Self {
        Self {
            direction: Direction::Decode,
            source: None,
            output: Node::Null,
            prefix: KeyPath::root(),
            context: &context::EMPTY,
        }
    }
}

/// A composite type, described field by field in both directions.
///
/// `decode` and `encode` should visit the same fields at the same paths
/// with the same types; that keeps `decode(encode(x)) == x`.
pub trait Mappable: Sized {
    fn decode(map: &mut MappingContext<'_>) -> Result<Self>;

    fn encode(&self, map: &mut MappingContext<'_>) -> Result<()>;
}

/// Composites read from a mapping node only. Any other present node is a
/// `ShapeMismatch`, the same rule collections follow.
impl<T: Mappable> NodeConvertible for T {
    const SHAPE: Shape = Shape::Composite;

    fn from_node(node: &Node, context: &Context) -> Result<Self> {
        if !node.is_mapping() {
            return Err(Error::shape_mismatch(Shape::Composite, node.kind()));
        }
        let mut map = MappingContext::decoding(node, context);
        T::decode(&mut map)
    }

    fn to_node(&self, context: &Context) -> Result<Node> {
        let mut map = MappingContext::encoding(context);
        self.encode(&mut map)?;
        map.into_node()
    }
}
