//! Property tests: absence policy, wrap coercion, set semantics, shape
//! mismatches, and encode/decode round trips.

mod common;

use std::collections::{BTreeMap, HashSet};

use common::Person;
use nodemap::{
    decode, encode, extract, Context, Mappable, MappingContext, Node, Result,
};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Team {
    name: String,
    size: u32,
    rating: Option<f64>,
    captain: Person,
    members: Vec<Person>,
    rotations: Vec<Vec<Person>>,
    tags: BTreeMap<String, Vec<String>>,
    active: bool,
}

impl Mappable for Team {
    fn decode(map: &mut MappingContext<'_>) -> Result<Self> {
        Ok(Team {
            name: map.extract_field("name")?,
            size: map.extract_field("stats.size")?,
            rating: map.extract_field("stats.rating")?,
            captain: map.extract_field("captain")?,
            members: map.extract_field("members")?,
            rotations: map.extract_field("rotations")?,
            tags: map.extract_field("tags")?,
            active: map.extract_field("active")?,
        })
    }

    fn encode(&self, map: &mut MappingContext<'_>) -> Result<()> {
        map.write_field("name", &self.name)?;
        map.write_field("stats.size", &self.size)?;
        map.write_field("stats.rating", &self.rating)?;
        map.write_field("captain", &self.captain)?;
        map.write_field("members", &self.members)?;
        map.write_field("rotations", &self.rotations)?;
        map.write_field("tags", &self.tags)?;
        map.write_field("active", &self.active)
    }
}

fn person_strategy() -> impl Strategy<Value = Person> {
    ("[A-Z][a-z]{0,6}", "[A-Z][a-z]{0,6}")
        .prop_map(|(first, last)| Person::new(&first, &last))
}

fn team_strategy() -> impl Strategy<Value = Team> {
    (
        "[a-z ]{0,12}",
        any::<u32>(),
        proptest::option::of(-1.0e6f64..1.0e6),
        person_strategy(),
        proptest::collection::vec(person_strategy(), 0..4),
        // inner rotations are non-empty: an empty inner sequence cannot be
        // told apart from an empty outer one after the promotion rule
        proptest::collection::vec(proptest::collection::vec(person_strategy(), 1..3), 0..3),
        proptest::collection::btree_map(
            "[a-z]{1,5}",
            proptest::collection::vec("[a-z]{0,5}", 0..3),
            0..3,
        ),
        any::<bool>(),
    )
        .prop_map(
            |(name, size, rating, captain, members, rotations, tags, active)| Team {
                name,
                size,
                rating,
                captain,
                members,
                rotations,
                tags,
                active,
            },
        )
}

fn scalar_node_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::from),
        any::<i64>().prop_map(Node::from),
        "[a-z]{0,8}".prop_map(Node::from),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    scalar_node_strategy().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Node::Sequence),
            proptest::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| entries.into_iter().collect::<Node>()),
        ]
    })
}

proptest! {
    #[test]
    fn team_roundtrip(team in team_strategy()) {
        let node = encode(&team).unwrap();
        let back: Team = decode(&node).unwrap();
        prop_assert_eq!(back, team);
    }

    #[test]
    fn absent_optional_is_none(_seed in any::<u8>()) {
        let ctx = Context::new();
        prop_assert_eq!(extract::<Option<i64>>(None, &ctx).unwrap(), None);
        prop_assert_eq!(extract::<Option<Vec<String>>>(None, &ctx).unwrap(), None);
        prop_assert_eq!(extract::<Option<Vec<Vec<Person>>>>(None, &ctx).unwrap(), None);
        prop_assert_eq!(extract::<Option<HashSet<i64>>>(None, &ctx).unwrap(), None);
        prop_assert_eq!(
            extract::<Option<BTreeMap<String, Vec<Person>>>>(None, &ctx).unwrap(),
            None
        );
    }

    #[test]
    fn absent_required_is_missing(_seed in any::<u8>()) {
        let ctx = Context::new();
        prop_assert!(extract::<i64>(None, &ctx).unwrap_err().is_required_missing());
        prop_assert!(extract::<Person>(None, &ctx).unwrap_err().is_required_missing());
        prop_assert!(extract::<Vec<Vec<i64>>>(None, &ctx).unwrap_err().is_required_missing());
        prop_assert!(extract::<BTreeMap<String, i64>>(None, &ctx).unwrap_err().is_required_missing());
    }

    #[test]
    fn scalars_wrap_into_one_element_sequences(node in scalar_node_strategy()) {
        let ctx = Context::new();
        let wrapped: Vec<Node> = extract(Some(&node), &ctx).unwrap();
        prop_assert_eq!(wrapped, vec![node]);
    }

    #[test]
    fn integers_wrap_into_one_element_sequences(n in any::<i64>()) {
        let ctx = Context::new();
        let wrapped: Vec<i64> = extract(Some(&Node::from(n)), &ctx).unwrap();
        prop_assert_eq!(wrapped, vec![n]);
    }

    #[test]
    fn sets_keep_one_of_each(a in "[a-z]{1,4}", b in "[A-Z]{1,4}") {
        let ctx = Context::new();
        let node = Node::Sequence(vec![Node::from(a.as_str()), Node::from(a.as_str()), Node::from(b.as_str())]);
        let set: HashSet<String> = extract(Some(&node), &ctx).unwrap();
        prop_assert_eq!(set.len(), 2);
        prop_assert!(set.contains(&a) && set.contains(&b));
    }

    #[test]
    fn mappings_never_satisfy_sequences(
        entries in proptest::collection::vec(("[a-z]{1,4}", node_strategy()), 0..4)
    ) {
        let ctx = Context::new();
        let node: Node = entries.into_iter().collect();
        let err = extract::<Vec<Node>>(Some(&node), &ctx).unwrap_err();
        prop_assert!(err.is_shape_mismatch());
        let err = extract::<Vec<Vec<Node>>>(Some(&node), &ctx).unwrap_err();
        prop_assert!(err.is_shape_mismatch());
    }

    #[test]
    fn raw_nodes_roundtrip(node in node_strategy()) {
        let back: Node = decode(&encode(&node).unwrap()).unwrap();
        prop_assert_eq!(back, node);
    }
}
