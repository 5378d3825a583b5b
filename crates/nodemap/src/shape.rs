use std::fmt;

/// The static target a field is extracted into.
///
/// Never passed by callers: it is computed from the target type through
/// [`Field::SHAPE`](crate::Field::SHAPE) (`i64` is `Scalar`, `Vec<Vec<i64>>` is
/// `NestedSequence`, `Option<HashMap<String, Vec<T>>>` is
/// `OptionalKeyedMappingOfSequences`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    OptionalScalar,
    /// A type described by a [`Mappable`](crate::Mappable) impl. Needs a mapping node.
    Composite,
    Sequence,
    OptionalSequence,
    NestedSequence,
    OptionalNestedSequence,
    UniqueSequence,
    OptionalUniqueSequence,
    KeyedMapping,
    OptionalKeyedMapping,
    KeyedMappingOfSequences,
    OptionalKeyedMappingOfSequences,
}

impl Shape {
    /// The optional form of this shape. Optional shapes map to themselves.
    pub const fn optional(self) -> Shape {
        match self {
            Shape::Scalar | Shape::Composite | Shape::OptionalScalar => Shape::OptionalScalar,
            Shape::Sequence | Shape::OptionalSequence => Shape::OptionalSequence,
            Shape::NestedSequence | Shape::OptionalNestedSequence => Shape::OptionalNestedSequence,
            Shape::UniqueSequence | Shape::OptionalUniqueSequence => Shape::OptionalUniqueSequence,
            Shape::KeyedMapping | Shape::OptionalKeyedMapping => Shape::OptionalKeyedMapping,
            Shape::KeyedMappingOfSequences | Shape::OptionalKeyedMappingOfSequences => {
                Shape::OptionalKeyedMappingOfSequences
            }
        }
    }

    pub const fn is_optional(self) -> bool {
        matches!(
            self,
            Shape::OptionalScalar
                | Shape::OptionalSequence
                | Shape::OptionalNestedSequence
                | Shape::OptionalUniqueSequence
                | Shape::OptionalKeyedMapping
                | Shape::OptionalKeyedMappingOfSequences
        )
    }

    /// Whether values of this shape are read from a sequence node.
    pub const fn is_sequence(self) -> bool {
        matches!(
            self,
            Shape::Sequence
                | Shape::OptionalSequence
                | Shape::NestedSequence
                | Shape::OptionalNestedSequence
                | Shape::UniqueSequence
                | Shape::OptionalUniqueSequence
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Scalar => "scalar",
            Shape::OptionalScalar => "optional scalar",
            Shape::Composite => "composite mapping",
            Shape::Sequence => "sequence",
            Shape::OptionalSequence => "optional sequence",
            Shape::NestedSequence => "nested sequence",
            Shape::OptionalNestedSequence => "optional nested sequence",
            Shape::UniqueSequence => "unique sequence",
            Shape::OptionalUniqueSequence => "optional unique sequence",
            Shape::KeyedMapping => "keyed mapping",
            Shape::OptionalKeyedMapping => "optional keyed mapping",
            Shape::KeyedMappingOfSequences => "keyed mapping of sequences",
            Shape::OptionalKeyedMappingOfSequences => "optional keyed mapping of sequences",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
