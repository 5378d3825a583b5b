//! Two-way transforms between a raw field value and a domain value.

use std::fmt;

use crate::error::TransformError;

/// A pair of conversions between the raw form `R` stored in the node and the
/// domain value `T`, declared once and shared by decode and encode.
///
/// ```
/// use nodemap::{Transform, TransformError};
///
/// fn split(raw: String) -> Result<Vec<String>, TransformError> {
///     Ok(raw.split(',').map(str::to_string).collect())
/// }
///
/// fn join(tags: &Vec<String>) -> Result<String, TransformError> {
///     Ok(tags.join(","))
/// }
///
/// const TAGS: Transform<String, Vec<String>> = Transform::new(split, join);
///
/// let tags = TAGS.decode("a,b".to_string()).unwrap();
/// assert_eq!(tags, ["a", "b"]);
/// assert_eq!(TAGS.encode(&tags).unwrap(), "a,b");
/// ```
pub struct Transform<R, T> {
    decode: fn(R) -> Result<T, TransformError>,
    encode: fn(&T) -> Result<R, TransformError>,
}

impl<R, T> Transform<R, T> {
    pub const fn new(
        decode: fn(R) -> Result<T, TransformError>,
        encode: fn(&T) -> Result<R, TransformError>,
    ) -> Self {
        Self { decode, encode }
    }

    pub fn decode(&self, raw: R) -> Result<T, TransformError> {
        (self.decode)(raw)
    }

    pub fn encode(&self, value: &T) -> Result<R, TransformError> {
        (self.encode)(value)
    }
}

impl<R, T> Clone for Transform<R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T> Copy for Transform<R, T> {}

impl<R, T> fmt::Debug for Transform<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("raw", &std::any::type_name::<R>())
            .field("value", &std::any::type_name::<T>())
            .finish()
    }
}
