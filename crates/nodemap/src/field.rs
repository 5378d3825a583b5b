//! The extraction engine.
//!
//! [`Field`] is implemented for every [`NodeConvertible`] type (the required
//! shapes) and for `Option<T>` (the optional shapes), so the target type at a
//! call site picks the policy:
//!
//! | located    | required `T`              | `Option<T>`            |
//! |------------|---------------------------|------------------------|
//! | absent     | `RequiredValueMissing`    | `None`                 |
//! | present    | `T::from_node`            | `Some(T::from_node)`   |
//!
//! Everything shape-specific (wrap coercion, nested promotion, set
//! de-duplication, keyed mappings) lives in the `NodeConvertible` impls.

use nodemap_node::{resolve, KeyPath, Node};

use crate::context::Context;
use crate::convert::NodeConvertible;
use crate::error::{Error, Result, TransformError};
use crate::shape::Shape;

/// A type that can be the target of a field extraction or the source of a
/// field write.
pub trait Field: Sized {
    const SHAPE: Shape;

    /// Produces a value from the located node, or from its absence.
    fn extract(found: Option<&Node>, context: &Context) -> Result<Self>;

    /// Produces the node to write, or `None` to leave the field out.
    fn emit(&self, context: &Context) -> Result<Option<Node>>;
}

impl<T: NodeConvertible> Field for T {
    const SHAPE: Shape = <T as NodeConvertible>::SHAPE;

    fn extract(found: Option<&Node>, context: &Context) -> Result<Self> {
        match found {
            Some(node) => T::from_node(node, context),
            None => Err(Error::required()),
        }
    }

    fn emit(&self, context: &Context) -> Result<Option<Node>> {
        self.to_node(context).map(Some)
    }
}

impl<T: NodeConvertible> Field for Option<T> {
    const SHAPE: Shape = <T as NodeConvertible>::SHAPE.optional();

    fn extract(found: Option<&Node>, context: &Context) -> Result<Self> {
        match found {
            Some(node) => T::from_node(node, context).map(Some),
            None => Ok(None),
        }
    }

    fn emit(&self, context: &Context) -> Result<Option<Node>> {
        match self {
            Some(value) => value.to_node(context).map(Some),
            None => Ok(None),
        }
    }
}

/// Extracts a `T` from a located node (or its absence).
///
/// ```
/// use nodemap::{extract, Context, Node};
///
/// let ctx = Context::new();
/// assert_eq!(extract::<i64>(Some(&Node::from(272)), &ctx).unwrap(), 272);
/// assert_eq!(extract::<Option<i64>>(None, &ctx).unwrap(), None);
/// assert!(extract::<i64>(None, &ctx).unwrap_err().is_required_missing());
/// assert_eq!(extract::<Vec<i64>>(Some(&Node::from(272)), &ctx).unwrap(), vec![272]);
/// ```
pub fn extract<T: Field>(found: Option<&Node>, context: &Context) -> Result<T> {
    T::extract(found, context)
}

/// Extracts a raw `R` and passes it through `transform`.
///
/// Failures extracting `R` keep their kind; a transform `Err` is reported as
/// `TransformRejected`.
pub fn extract_with<R, T, E>(
    found: Option<&Node>,
    context: &Context,
    transform: impl FnOnce(R) -> std::result::Result<T, E>,
) -> Result<T>
where
    R: Field,
    E: Into<TransformError>,
{
    let raw = R::extract(found, context)?;
    transform(raw).map_err(Error::transform_rejected)
}

/// Resolves `path` in `node` and extracts a `T` there. Errors carry the full path.
pub fn extract_at<T: Field>(node: &Node, path: impl Into<KeyPath>, context: &Context) -> Result<T> {
    let path = path.into();
    T::extract(resolve(node, &path), context).map_err(|e| e.under(&path))
}
