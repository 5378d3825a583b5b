//! Key path resolution and insertion.

use crate::error::PathError;
use crate::node::Node;
use crate::path::{KeyPath, PathStep};

/// Resolves `path` inside `node`.
///
/// Returns `None` ("absent") for a missing key, an out-of-range index, or any
/// step that does not fit the node it is applied to (a key against a
/// sequence, an index against a mapping, any step against a scalar). A
/// present `null` resolves to `Some(&Node::Null)`.
///
/// ```
/// use nodemap_node::{resolve, KeyPath, Node};
/// use serde_json::json;
///
/// let doc = Node::from(json!({"foo": {"bar": [1, null]}}));
/// assert_eq!(resolve(&doc, &KeyPath::from("foo.bar").index(0)), Some(&Node::from(1)));
/// assert_eq!(resolve(&doc, &KeyPath::from("foo.bar").index(1)), Some(&Node::Null));
/// assert_eq!(resolve(&doc, &KeyPath::from("foo.missing")), None);
/// ```
pub fn resolve<'a>(node: &'a Node, path: &KeyPath) -> Option<&'a Node> {
    let mut current = node;
    for step in path {
        current = match (current, step) {
            (Node::Mapping(map), PathStep::Key(key)) => map.get(key)?,
            (Node::Sequence(items), PathStep::Index(index)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(node: &'a mut Node, path: &KeyPath) -> Option<&'a mut Node> {
    let mut current = node;
    for step in path {
        current = match (current, step) {
            (Node::Mapping(map), PathStep::Key(key)) => map.get_mut(key)?,
            (Node::Sequence(items), PathStep::Index(index)) => items.get_mut(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Writes `value` at `path` inside `root`, creating intermediate containers.
///
/// Missing key steps create mappings, missing index steps create sequences;
/// an index equal to the sequence length appends. An existing value at the
/// final step is replaced. The root path replaces `root` itself.
///
/// # Errors
///
/// - [`PathError::NotAContainer`] if a step runs into a node that cannot hold
///   it (for example a key step against a number).
/// - [`PathError::IndexOutOfRange`] if an index is past the end of a sequence.
pub fn insert_at(root: &mut Node, path: &KeyPath, value: Node) -> Result<(), PathError> {
    let steps = path.steps();
    let Some((last, init)) = steps.split_last() else {
        *root = value;
        return Ok(());
    };

    let mut current = root;
    for (depth, step) in init.iter().enumerate() {
        let next = &steps[depth + 1];
        current = descend(current, step, next, &steps[..depth])?;
    }

    let at = &steps[..init.len()];
    match (current, last) {
        (Node::Mapping(map), PathStep::Key(key)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Node::Sequence(items), PathStep::Index(index)) => {
            let len = items.len();
            if *index < len {
                items[*index] = value;
                Ok(())
            } else if *index == len {
                items.push(value);
                Ok(())
            } else {
                Err(PathError::IndexOutOfRange {
                    at: KeyPath::from(at.to_vec()),
                    index: *index,
                    len,
                })
            }
        }
        (other, _) => Err(PathError::NotAContainer {
            at: KeyPath::from(at.to_vec()),
            found: other.kind(),
        }),
    }
}

fn descend<'a>(
    current: &'a mut Node,
    step: &PathStep,
    next: &PathStep,
    at: &[PathStep],
) -> Result<&'a mut Node, PathError> {
    match (current, step) {
        (Node::Mapping(map), PathStep::Key(key)) => Ok(map
            .entry(key.clone())
            .or_insert_with(|| container_for(next))),
        (Node::Sequence(items), PathStep::Index(index)) => {
            let len = items.len();
            if *index == len {
                items.push(container_for(next));
            }
            items
                .get_mut(*index)
                .ok_or_else(|| PathError::IndexOutOfRange {
                    at: KeyPath::from(at.to_vec()),
                    index: *index,
                    len,
                })
        }
        (other, _) => Err(PathError::NotAContainer {
            at: KeyPath::from(at.to_vec()),
            found: other.kind(),
        }),
    }
}

fn container_for(step: &PathStep) -> Node {
    match step {
        PathStep::Key(_) => Node::mapping(),
        PathStep::Index(_) => Node::sequence(),
    }
}
