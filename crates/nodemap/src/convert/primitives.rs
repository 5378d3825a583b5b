//! Conversions for numbers, `bool`, strings, `char`, and raw [`Node`]s.
//!
//! Integers accept any number with an integral value that fits the target
//! width (`272.0` decodes as `272u16`); floats accept any number. Nothing is
//! parsed out of strings. A sequence or mapping under a primitive target is a
//! shape mismatch, any other wrong scalar a type mismatch.

use nodemap_node::{Node, Number};

use super::NodeConvertible;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::shape::Shape;

fn mismatch(expected: &'static str, node: &Node) -> Error {
    match node {
        Node::Sequence(_) | Node::Mapping(_) => Error::shape_mismatch(Shape::Scalar, node.kind()),
        _ => Error::type_mismatch(expected, node),
    }
}

macro_rules! convert_signed {
    ($($t:ty),*) => {
        $(impl NodeConvertible for $t {
            fn from_node(node: &Node, _context: &Context) -> Result<Self> {
                node.as_number()
                    .and_then(Number::as_i64)
                    .and_then(|i| <$t>::try_from(i).ok())
                    .ok_or_else(|| mismatch(stringify!($t), node))
            }

            fn to_node(&self, _context: &Context) -> Result<Node> {
                Ok(Node::from(*self))
            }
        })*
    };
}

macro_rules! convert_unsigned {
    ($($t:ty),*) => {
        $(impl NodeConvertible for $t {
            fn from_node(node: &Node, _context: &Context) -> Result<Self> {
                node.as_number()
                    .and_then(Number::as_u64)
                    .and_then(|u| <$t>::try_from(u).ok())
                    .ok_or_else(|| mismatch(stringify!($t), node))
            }

            fn to_node(&self, _context: &Context) -> Result<Node> {
                Ok(Node::from(*self))
            }
        })*
    };
}

convert_signed!(i8, i16, i32, i64, isize);
convert_unsigned!(u8, u16, u32, u64, usize);

impl NodeConvertible for f64 {
    fn from_node(node: &Node, _context: &Context) -> Result<Self> {
        node.as_number()
            .map(Number::as_f64)
            .ok_or_else(|| mismatch("f64", node))
    }

    fn to_node(&self, _context: &Context) -> Result<Node> {
        Ok(Node::from(*self))
    }
}

impl NodeConvertible for f32 {
    fn from_node(node: &Node, _context: &Context) -> Result<Self> {
        node.as_number()
            .map(|n| n.as_f64() as f32)
            .ok_or_else(|| mismatch("f32", node))
    }

    fn to_node(&self, _context: &Context) -> Result<Node> {
        Ok(Node::from(*self))
    }
}

impl NodeConvertible for bool {
    fn from_node(node: &Node, _context: &Context) -> Result<Self> {
        node.as_bool()
            .ok_or_else(|| mismatch("bool", node))
    }

    fn to_node(&self, _context: &Context) -> Result<Node> {
        Ok(Node::Bool(*self))
    }
}

impl NodeConvertible for String {
    fn from_node(node: &Node, _context: &Context) -> Result<Self> {
        node.as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("String", node))
    }

    fn to_node(&self, _context: &Context) -> Result<Node> {
        Ok(Node::String(self.clone()))
    }
}

impl NodeConvertible for char {
    fn from_node(node: &Node, _context: &Context) -> Result<Self> {
        let mut chars = node.as_str().unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(mismatch("char", node)),
        }
    }

    fn to_node(&self, _context: &Context) -> Result<Node> {
        Ok(Node::String(self.to_string()))
    }
}

/// Identity: extracts the located sub-tree as-is.
impl NodeConvertible for Node {
    fn from_node(node: &Node, _context: &Context) -> Result<Self> {
        Ok(node.clone())
    }

    fn to_node(&self, _context: &Context) -> Result<Node> {
        Ok(self.clone())
    }
}
