//! Adapter between [`serde_json::Value`] and [`Node`].
//!
//! Numbers take the narrowest lossless variant: `i64`, then `u64`, then `f64`.
//! Non-finite floats have no JSON form and become `null` on the way out.

use serde_json::Value;

use crate::node::{Mapping, Node};
use crate::number::Number;

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(number_from_json(&n)),
            Value::String(s) => Node::String(s),
            Value::Array(arr) => Node::Sequence(arr.into_iter().map(Node::from).collect()),
            Value::Object(obj) => {
                Node::Mapping(obj.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for Node {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(number_from_json(n)),
            Value::String(s) => Node::String(s.clone()),
            Value::Array(arr) => Node::Sequence(arr.iter().map(Node::from).collect()),
            Value::Object(obj) => Node::Mapping(
                obj.iter()
                    .map(|(k, v)| (k.clone(), Node::from(v)))
                    .collect::<Mapping>(),
            ),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Number(Number::Int(i)) => Value::from(i),
            Node::Number(Number::UInt(u)) => Value::from(u),
            Node::Number(Number::Float(f)) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Node::String(s) => Value::String(s),
            Node::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Mapping(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

fn number_from_json(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Int(i)
    } else if let Some(u) = n.as_u64() {
        Number::UInt(u)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
