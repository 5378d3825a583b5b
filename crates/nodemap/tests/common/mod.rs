#![allow(dead_code)]

use nodemap::{Mappable, MappingContext, Node, Result};
use serde_json::json;

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

impl Mappable for Person {
    fn decode(map: &mut MappingContext<'_>) -> Result<Self> {
        Ok(Person {
            first_name: map.extract_field(FIRST_NAME)?,
            last_name: map.extract_field(LAST_NAME)?,
        })
    }

    fn encode(&self, map: &mut MappingContext<'_>) -> Result<()> {
        map.write_field(FIRST_NAME, &self.first_name)?;
        map.write_field(LAST_NAME, &self.last_name)
    }
}

pub fn joe() -> Person {
    Person::new("Joe", "Fish")
}

pub fn jane() -> Person {
    Person::new("Jane", "Bear")
}

pub fn justin() -> Person {
    Person::new("Justin", "Badger")
}

pub fn phil() -> Person {
    Person::new("Phil", "Viper")
}

pub fn fixture() -> Node {
    let joe = json!({"first_name": "Joe", "last_name": "Fish"});
    let jane = json!({"first_name": "Jane", "last_name": "Bear"});
    let justin = json!({"first_name": "Justin", "last_name": "Badger"});
    let phil = json!({"first_name": "Phil", "last_name": "Viper"});
    Node::from(json!({
        "int": 272,
        "strings": ["one", "two", "tre"],
        "person": joe,
        "people": [joe, jane],
        "duplicated_people": [joe, joe, jane],
        "relationships": {
            "best_friend": phil,
            "cousin": justin
        },
        "groups": {
            "boys": [joe, justin, phil],
            "girls": [jane]
        },
        "ordered_groups": [
            [joe, justin, phil],
            [jane]
        ]
    }))
}
