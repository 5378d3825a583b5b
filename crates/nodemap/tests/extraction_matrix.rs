//! Field extraction across target shapes, over the shared people fixture.

mod common;

use std::collections::{BTreeSet, HashMap, HashSet};

use common::{fixture, jane, joe, justin, phil, Person};
use nodemap::{
    decode, ErrorKind, KeyPath, MappingContext, Context, Node, NodeKind, Shape,
};
use serde_json::json;

fn with_map<R>(f: impl FnOnce(&mut MappingContext<'_>) -> R) -> R {
    let node = fixture();
    let ctx = Context::new();
    let mut map = MappingContext::decoding(&node, &ctx);
    f(&mut map)
}

#[test]
fn basic_types() {
    with_map(|map| {
        let int: i64 = map.extract_field("int").unwrap();
        assert_eq!(int, 272);

        let optional_int: Option<i64> = map.extract_field("int").unwrap();
        assert_eq!(optional_int, Some(272));

        let strings: Vec<String> = map.extract_field("strings").unwrap();
        assert_eq!(strings, ["one", "two", "tre"]);

        let optional_strings: Option<Vec<String>> = map.extract_field("strings").unwrap();
        assert_eq!(optional_strings.unwrap(), ["one", "two", "tre"]);

        let string_int: String = map
            .extract_with("int", |n: i64| Ok::<_, String>(n.to_string()))
            .unwrap();
        assert_eq!(string_int, "272");

        let empty_int: Option<i64> = map.extract_field("i_dont_exist").unwrap();
        assert_eq!(empty_int, None);

        let empty_strings: Option<Vec<String>> = map.extract_field("i_dont_exist").unwrap();
        assert_eq!(empty_strings, None);
    });
}

#[test]
fn missing_required_scalar() {
    with_map(|map| {
        let err = map.extract_field::<i64>("missing").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::RequiredValueMissing));
        assert_eq!(err.path(), &KeyPath::from("missing"));
    });
}

#[test]
fn composite_over_scalar_is_a_shape_mismatch() {
    with_map(|map| {
        let err = map.extract_field::<Person>("int").unwrap_err();
        assert!(
            matches!(
                err.kind(),
                ErrorKind::ShapeMismatch {
                    expected: Shape::Composite,
                    found: NodeKind::Number
                }
            ),
            "got {err}"
        );
        assert_eq!(err.path(), &KeyPath::from("int"));

        let err = map.extract_field::<Option<Person>>("strings").unwrap_err();
        assert!(err.is_shape_mismatch());
    });
}

#[test]
fn scalar_over_container_is_a_shape_mismatch() {
    with_map(|map| {
        let err = map.extract_field::<i64>("person").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::ShapeMismatch {
                expected: Shape::Scalar,
                found: NodeKind::Mapping
            }
        ));
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected scalar, found mapping at `/person`"
        );

        let err = map.extract_field::<Option<String>>("strings").unwrap_err();
        assert!(err.is_shape_mismatch());
        assert_eq!(err.path(), &KeyPath::from("strings"));
    });
}

#[test]
fn mappable_object() {
    with_map(|map| {
        let person: Person = map.extract_field("person").unwrap();
        assert_eq!(person, joe());

        let optional_person: Option<Person> = map.extract_field("person").unwrap();
        assert_eq!(optional_person, Some(joe()));

        let empty_person: Option<Person> = map.extract_field("i_dont_exist").unwrap();
        assert_eq!(empty_person, None);
    });
}

#[test]
fn mappable_sequence_keeps_order() {
    with_map(|map| {
        let people: Vec<Person> = map.extract_field("people").unwrap();
        assert_eq!(people, [joe(), jane()]);

        let optional_people: Option<Vec<Person>> = map.extract_field("people").unwrap();
        assert_eq!(optional_people.unwrap(), [joe(), jane()]);

        let empty: Option<Vec<Person>> = map.extract_field("i_dont_exist").unwrap();
        assert_eq!(empty, None);
    });
}

#[test]
fn single_scalar_wraps_into_a_sequence() {
    with_map(|map| {
        let ints: Vec<i64> = map.extract_field("int").unwrap();
        assert_eq!(ints, [272]);

        let unique: HashSet<i64> = map.extract_field("int").unwrap();
        assert_eq!(unique.len(), 1);
    });
}

#[test]
fn single_mapping_does_not_wrap() {
    with_map(|map| {
        let err = map.extract_field::<Vec<Person>>("person").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::ShapeMismatch {
                expected: Shape::Sequence,
                found: NodeKind::Mapping
            }
        ));
    });
}

#[test]
fn sequence_of_sequences() {
    with_map(|map| {
        let ordered_groups: Vec<Vec<Person>> = map.extract_field("ordered_groups").unwrap();
        assert_eq!(
            ordered_groups,
            vec![vec![joe(), justin(), phil()], vec![jane()]]
        );

        let optional: Option<Vec<Vec<Person>>> = map.extract_field("ordered_groups").unwrap();
        assert_eq!(optional.unwrap().len(), 2);

        // a flat sequence is promoted to one outer element
        let promoted: Vec<Vec<Person>> = map.extract_field("people").unwrap();
        assert_eq!(promoted, vec![vec![joe(), jane()]]);

        let empty: Option<Vec<Vec<Person>>> = map.extract_field("i_dont_exist").unwrap();
        assert_eq!(empty, None);
    });
}

#[test]
fn unique_sequences() {
    with_map(|map| {
        let people: HashSet<Person> = map.extract_field("duplicated_people").unwrap();
        assert_eq!(people.len(), 2);
        assert!(people.contains(&joe()));
        assert!(people.contains(&jane()));

        let sorted: BTreeSet<Person> = map.extract_field("duplicated_people").unwrap();
        assert_eq!(sorted.into_iter().collect::<Vec<_>>(), [jane(), joe()]);

        let single: HashSet<String> = map.extract_field("strings").unwrap();
        assert_eq!(single.len(), 3);

        let promoted: Vec<HashSet<Person>> = map.extract_field("duplicated_people").unwrap();
        assert_eq!(promoted.len(), 1);
        assert_eq!(promoted[0].len(), 2);

        let grouped: Vec<BTreeSet<Person>> = map.extract_field("ordered_groups").unwrap();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[1].iter().collect::<Vec<_>>(), [&jane()]);
    });
}

#[test]
fn keyed_mapping() {
    with_map(|map| {
        let relationships: HashMap<String, Person> = map.extract_field("relationships").unwrap();
        assert_eq!(relationships.len(), 2);
        assert_eq!(relationships["best_friend"], phil());
        assert_eq!(relationships["cousin"], justin());

        let err = map
            .extract_field::<HashMap<String, Person>>("people")
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::ShapeMismatch {
                expected: Shape::KeyedMapping,
                found: NodeKind::Sequence
            }
        ));
    });
}

#[test]
fn keyed_mapping_of_sequences() {
    with_map(|map| {
        let groups: HashMap<String, Vec<Person>> = map.extract_field("groups").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["boys"], [joe(), justin(), phil()]);
        assert_eq!(groups["girls"], [jane()]);

        let optional: Option<HashMap<String, Vec<Person>>> =
            map.extract_field("i_dont_exist").unwrap();
        assert_eq!(optional, None);

        let err = map
            .extract_field::<HashMap<String, Vec<Person>>>("int")
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::ShapeMismatch {
                expected: Shape::KeyedMappingOfSequences,
                found: NodeKind::Number
            }
        ));
    });
}

#[test]
fn element_errors_name_the_full_path() {
    let node = Node::from(json!({
        "people": [
            {"first_name": "Joe", "last_name": "Fish"},
            {"first_name": "Jane"}
        ],
        "groups": {"boys": [{"first_name": 1, "last_name": "x"}]}
    }));
    let ctx = Context::new();
    let map = MappingContext::decoding(&node, &ctx);

    let err = map.extract_field::<Vec<Person>>("people").unwrap_err();
    assert!(err.is_required_missing());
    assert_eq!(err.path().to_string(), "/people/1/last_name");

    let err = map
        .extract_field::<HashMap<String, Vec<Person>>>("groups")
        .unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.path().to_string(), "/groups/boys/0/first_name");
    assert_eq!(
        err.to_string(),
        "type mismatch: expected String, found 1 at `/groups/boys/0/first_name`"
    );
}

#[test]
fn key_paths_reach_nested_fields() {
    with_map(|map| {
        let name: String = map.extract_field("person.first_name").unwrap();
        assert_eq!(name, "Joe");

        let name: String = map
            .extract_field(KeyPath::from("people").index(1).key("first_name"))
            .unwrap();
        assert_eq!(name, "Jane");

        let cousin: String = map
            .extract_field(["relationships", "cousin", "last_name"])
            .unwrap();
        assert_eq!(cousin, "Badger");

        let out_of_range: Option<Person> = map
            .extract_field(KeyPath::from("people").index(9))
            .unwrap();
        assert_eq!(out_of_range, None);
    });
}

#[test]
fn top_level_decode_of_a_composite() {
    let person: Person = decode(&Node::from(json!({"first_name": "Joe", "last_name": "Fish"}))).unwrap();
    assert_eq!(person, joe());

    let err = decode::<Person>(&Node::Null).unwrap_err();
    assert!(err.is_shape_mismatch());
    assert!(err.path().is_root());

    let people: Vec<Person> = decode(&fixture().get("people").cloned().unwrap()).unwrap();
    assert_eq!(people.len(), 2);
}

#[test]
fn raw_node_extraction() {
    with_map(|map| {
        let raw: Node = map.extract_field("relationships.cousin").unwrap();
        assert_eq!(raw, Node::from(json!({"first_name": "Justin", "last_name": "Badger"})));
    });
}
