//! The conversion capability: building a value from a [`Node`] and back.

mod collections;
mod primitives;

use nodemap_node::{Node, NodeKind, PathStep};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::shape::Shape;

/// A type that can be produced from a [`Node`] and turned back into one.
///
/// Implemented for the primitive numbers, `bool`, `String`, `char`, [`Node`]
/// itself, the std and `indexmap` collections, and (through a blanket impl)
/// every [`Mappable`](crate::Mappable) composite.
///
/// A type that implements `Mappable` gets this trait for free and must not
/// implement it by hand.
pub trait NodeConvertible: Sized {
    /// Shape of a field of this type.
    const SHAPE: Shape = Shape::Scalar;

    fn from_node(node: &Node, context: &Context) -> Result<Self>;

    fn to_node(&self, context: &Context) -> Result<Node>;

    /// Converts `node` into a sequence of `Self`, for collection impls.
    ///
    /// The default applies the wrap coercion. `Vec<T>` and the set types
    /// override it so that a flat sequence requested as a nested one is
    /// promoted one level.
    #[doc(hidden)]
    fn sequence_from_node(node: &Node, expected: Shape, context: &Context) -> Result<Vec<Self>> {
        wrap_sequence(node, expected, context)
    }
}

/// Sequence conversion with the wrap coercion.
///
/// A sequence converts element by element and the first failing element
/// aborts with its index prepended to the error path. A mapping never
/// satisfies a sequence shape. Any other node becomes a one-element sequence
/// unless [`Options::wrap_singletons`](crate::Options::wrap_singletons) is off.
pub(crate) fn wrap_sequence<T: NodeConvertible>(
    node: &Node,
    expected: Shape,
    context: &Context,
) -> Result<Vec<T>> {
    match node {
        Node::Sequence(items) => convert_elements(items, context, T::from_node),
        Node::Mapping(_) => Err(Error::shape_mismatch(expected, NodeKind::Mapping)),
        single if context.options().wrap_singletons => Ok(vec![T::from_node(single, context)?]),
        other => Err(Error::shape_mismatch(expected, other.kind())),
    }
}

/// Sequence conversion for element types that are themselves sequences.
///
/// A sequence that contains sequences (or is empty) converts element by
/// element; a flat sequence is promoted to a single outer element; anything
/// else goes through the wrap coercion twice.
pub(crate) fn promote_sequence<C: NodeConvertible>(
    node: &Node,
    expected: Shape,
    context: &Context,
) -> Result<Vec<C>> {
    match node {
        Node::Sequence(items)
            if items.is_empty()
                || items.iter().any(Node::is_sequence)
                || !context.options().wrap_singletons =>
        {
            convert_elements(items, context, C::from_node)
        }
        Node::Sequence(_) => Ok(vec![C::from_node(node, context)?]),
        _ => wrap_sequence(node, expected, context),
    }
}

pub(crate) fn convert_elements<T>(
    items: &[Node],
    context: &Context,
    convert: impl Fn(&Node, &Context) -> Result<T>,
) -> Result<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| convert(item, context).map_err(|e| e.within(PathStep::Index(index))))
        .collect()
}
