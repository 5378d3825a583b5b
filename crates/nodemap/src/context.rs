//! Per-call settings threaded through every conversion.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Extraction behaviour switches. The defaults are the documented policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Treat a single present non-sequence node as a one-element sequence
    /// when a sequence shape is requested.
    pub wrap_singletons: bool,
    /// Treat a present `null` field as absent.
    pub null_is_absent: bool,
}

impl Options {
    pub const fn new() -> Self {
        Self {
            wrap_singletons: true,
            null_is_absent: false,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// Options plus an optional caller value (a locale, a unit system, a lookup
/// table) that conversions can read with [`Context::get`].
///
/// ```
/// use nodemap::Context;
///
/// struct Locale(&'static str);
///
/// let ctx = Context::new().with_value(Locale("de"));
/// assert_eq!(ctx.get::<Locale>().map(|l| l.0), Some("de"));
/// assert!(ctx.get::<String>().is_none());
/// ```
#[derive(Clone, Default)]
pub struct Context {
    options: Options,
    value: Option<Arc<dyn Any + Send + Sync>>,
}

pub(crate) static EMPTY: Context = Context::new();

impl Context {
    pub const fn new() -> Self {
        Self {
            options: Options::new(),
            value: None,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_value<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.value = Some(Arc::new(value));
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The caller value, if one of type `T` was supplied.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.value.as_deref()?.downcast_ref::<T>()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("options", &self.options)
            .field("value", &self.value.as_ref().map(|_| ".."))
            .finish()
    }
}
