//! The numeric payload of [`Node::Number`](crate::Node::Number).

use std::fmt;

/// A JSON-like number.
///
/// Non-negative integers that fit in `i64` are always stored as [`Number::Int`];
/// [`Number::UInt`] only carries values above `i64::MAX`. The `From` impls keep
/// that invariant, and equality compares by numeric value across variants.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer greater than `i64::MAX`.
    UInt(u64),
    /// Floating-point number.
    Float(f64),
}

impl Number {
    /// Returns the value as `i64` if it is integral and in range.
    ///
    /// Floats with no fractional part are accepted (`272.0` → `272`).
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::UInt(u) => i64::try_from(u).ok(),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Returns the value as `u64` if it is integral, non-negative and in range.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Int(i) => u64::try_from(i).ok(),
            Number::UInt(u) => Some(u),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }

    /// Returns the value as `f64`. Large integers may lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::UInt(a), Number::UInt(b)) => a == b,
            (Number::Int(a), Number::UInt(b)) | (Number::UInt(b), Number::Int(a)) => {
                i128::from(a) == i128::from(b)
            }
            (Number::Float(a), Number::Float(b)) => a == b,
            // exact: no rounding through f64
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                Number::Float(f).as_i64() == Some(i)
            }
            (Number::UInt(u), Number::Float(f)) | (Number::Float(f), Number::UInt(u)) => {
                Number::Float(f).as_u64() == Some(u)
            }
        }
    }
}

macro_rules! number_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::Int(v as i64)
            }
        })*
    };
}

macro_rules! number_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(v: $t) -> Self {
                let v = v as u64;
                match i64::try_from(v) {
                    Ok(i) => Number::Int(i),
                    Err(_) => Number::UInt(v),
                }
            }
        })*
    };
}

number_from_signed!(i8, i16, i32, i64, isize);
number_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}
