//! Sequence, set and keyed-mapping conversions.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use nodemap_node::{Mapping, Node, PathStep};

use super::{convert_elements, promote_sequence, NodeConvertible};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::shape::Shape;

impl<T: NodeConvertible> NodeConvertible for Vec<T> {
    const SHAPE: Shape = if <T as NodeConvertible>::SHAPE.is_sequence() {
        Shape::NestedSequence
    } else {
        Shape::Sequence
    };

    fn from_node(node: &Node, context: &Context) -> Result<Self> {
        T::sequence_from_node(node, Self::SHAPE, context)
    }

    fn to_node(&self, context: &Context) -> Result<Node> {
        encode_elements(self.iter(), context)
    }

    fn sequence_from_node(node: &Node, expected: Shape, context: &Context) -> Result<Vec<Self>> {
        promote_sequence(node, expected, context)
    }
}

impl<T, S> NodeConvertible for HashSet<T, S>
where
    T: NodeConvertible + Eq + Hash,
    S: BuildHasher + Default,
{
    const SHAPE: Shape = Shape::UniqueSequence;

    fn from_node(node: &Node, context: &Context) -> Result<Self> {
        let items = T::sequence_from_node(node, Self::SHAPE, context)?;
        Ok(items.into_iter().collect())
    }

    fn to_node(&self, context: &Context) -> Result<Node> {
        encode_elements(self.iter(), context)
    }

    fn sequence_from_node(node: &Node, expected: Shape, context: &Context) -> Result<Vec<Self>> {
        promote_sequence(node, expected, context)
    }
}

impl<T: NodeConvertible + Ord> NodeConvertible for BTreeSet<T> {
    const SHAPE: Shape = Shape::UniqueSequence;

    fn from_node(node: &Node, context: &Context) -> Result<Self> {
        let items = T::sequence_from_node(node, Self::SHAPE, context)?;
        Ok(items.into_iter().collect())
    }

    fn to_node(&self, context: &Context) -> Result<Node> {
        encode_elements(self.iter(), context)
    }

    fn sequence_from_node(node: &Node, expected: Shape, context: &Context) -> Result<Vec<Self>> {
        promote_sequence(node, expected, context)
    }
}

const fn keyed_shape(value: Shape) -> Shape {
    if value.is_sequence() {
        Shape::KeyedMappingOfSequences
    } else {
        Shape::KeyedMapping
    }
}

impl<T, S> NodeConvertible for HashMap<String, T, S>
where
    T: NodeConvertible,
    S: BuildHasher + Default,
{
    const SHAPE: Shape = keyed_shape(<T as NodeConvertible>::SHAPE);

    fn from_node(node: &Node, context: &Context) -> Result<Self> {
        decode_entries(node, Self::SHAPE, context)
    }

    fn to_node(&self, context: &Context) -> Result<Node> {
        encode_entries(self.iter(), context)
    }
}

impl<T: NodeConvertible> NodeConvertible for BTreeMap<String, T> {
    const SHAPE: Shape = keyed_shape(<T as NodeConvertible>::SHAPE);

    fn from_node(node: &Node, context: &Context) -> Result<Self> {
        decode_entries(node, Self::SHAPE, context)
    }

    fn to_node(&self, context: &Context) -> Result<Node> {
        encode_entries(self.iter(), context)
    }
}

/// Keeps the key order of the source mapping.
impl<T, S> NodeConvertible for IndexMap<String, T, S>
where
    T: NodeConvertible,
    S: BuildHasher + Default,
{
    const SHAPE: Shape = keyed_shape(<T as NodeConvertible>::SHAPE);

    fn from_node(node: &Node, context: &Context) -> Result<Self> {
        decode_entries(node, Self::SHAPE, context)
    }

    fn to_node(&self, context: &Context) -> Result<Node> {
        encode_entries(self.iter(), context)
    }
}

fn decode_entries<T, M>(node: &Node, expected: Shape, context: &Context) -> Result<M>
where
    T: NodeConvertible,
    M: FromIterator<(String, T)>,
{
    let Node::Mapping(map) = node else {
        return Err(Error::shape_mismatch(expected, node.kind()));
    };
    map.iter()
        .map(|(key, value)| {
            T::from_node(value, context)
                .map(|v| (key.clone(), v))
                .map_err(|e| e.within(PathStep::Key(key.clone())))
        })
        .collect()
}

fn encode_entries<'a, T: NodeConvertible + 'a>(
    entries: impl Iterator<Item = (&'a String, &'a T)>,
    context: &Context,
) -> Result<Node> {
    let mut out = Mapping::new();
    for (key, value) in entries {
        let node = value
            .to_node(context)
            .map_err(|e| e.within(PathStep::Key(key.clone())))?;
        out.insert(key.clone(), node);
    }
    Ok(Node::Mapping(out))
}

fn encode_elements<'a, T: NodeConvertible + 'a>(
    items: impl Iterator<Item = &'a T>,
    context: &Context,
) -> Result<Node> {
    items
        .enumerate()
        .map(|(index, item)| {
            item.to_node(context)
                .map_err(|e| e.within(PathStep::Index(index)))
        })
        .collect::<Result<Vec<Node>>>()
        .map(Node::Sequence)
}
