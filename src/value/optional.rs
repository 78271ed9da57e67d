//! `Optional<T>`: a value that is either missing or present.

use crate::detect::Dynamic;
use crate::dispatch::DispatchRegistry;
use crate::error::{Error, Result};
use crate::value::StructuralValue;

/// Either `Missing` or `Present` with exactly one payload.
///
/// Unlike `Option`, an `Optional` takes part in structural dispatch: a
/// present value compares equal to another present value with an equal
/// payload, and also to a bare payload of the wrapped type.
///
/// ```
/// use flatval::{DispatchRegistry, Optional};
///
/// let registry = DispatchRegistry::new();
/// let a = Optional::present(String::from("xyz"));
/// let b = Optional::present(String::from("xyz"));
///
/// assert!(registry.are_equal(&a, &b));
/// assert!(!registry.are_equal(&a, &Optional::<String>::missing()));
/// ```
#[derive(Clone, Debug)]
pub enum Optional<T> {
    Missing,
    Present(T),
}

impl<T> Optional<T> {
    pub const fn missing() -> Self {
        Optional::Missing
    }

    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Present value from a nullable payload, rejecting null.
    pub fn try_present(value: Option<T>) -> Result<Self> {
        value.map(Optional::Present).ok_or(Error::NullPayload)
    }

    /// `Missing` for null, `Present` otherwise.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Missing,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Optional::Missing)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Missing => None,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Missing => Optional::Missing,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Missing => None,
        }
    }

    /// Transform the payload; `Missing` stays `Missing`.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Missing => Optional::Missing,
        }
    }

    /// [`map`](Self::map) with a mapper that may produce no value, which is an error.
    pub fn try_map<U, F>(self, f: F) -> Result<Optional<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Optional::Present(value) => f(value)
                .map(Optional::Present)
                .ok_or(Error::NullMapping { operation: "Optional::try_map" }),
            Optional::Missing => Ok(Optional::Missing),
        }
    }

    pub fn get_value_or_default<U>(self, fallback: U) -> U
    where
        T: Into<U>,
    {
        match self {
            Optional::Present(value) => value.into(),
            Optional::Missing => fallback,
        }
    }

    /// Invoke exactly one of the handlers.
    pub fn match_with<R>(&self, on_present: impl FnOnce(&T) -> R, on_missing: impl FnOnce() -> R) -> R {
        match self {
            Optional::Present(value) => on_present(value),
            Optional::Missing => on_missing(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Missing
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Optional::Present(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

/// String form of a missing value.
pub const MISSING_STRING: &str = "{Missing}";

impl<T: Dynamic> StructuralValue for Optional<T> {
    fn equals(&self, other: &dyn Dynamic, dispatch: &DispatchRegistry) -> bool {
        if let Some(other) = other.as_any().downcast_ref::<Self>() {
            return match (self, other) {
                (Optional::Missing, Optional::Missing) => true,
                (Optional::Present(a), Optional::Present(b)) => dispatch.are_equal(a, b),
                _ => false,
            };
        }
        // a present value also matches its bare payload
        match self {
            Optional::Present(value) => dispatch.are_equal(value, other),
            Optional::Missing => false,
        }
    }

    fn hash_code(&self, dispatch: &DispatchRegistry) -> i32 {
        match self {
            Optional::Present(value) => dispatch.hash_of(value),
            Optional::Missing => 0,
        }
    }

    fn to_display_string(&self, dispatch: &DispatchRegistry) -> String {
        match self {
            Optional::Present(value) => dispatch.string_of(value),
            Optional::Missing => MISSING_STRING.to_owned(),
        }
    }
}

#[cfg(feature = "global")]
crate::impl_std_via_dispatch!(impl<T> Optional<T>);
