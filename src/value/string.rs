//! Flattened string values.

use core::fmt;
use core::ops::Deref;
use core::str::FromStr;
use std::sync::Arc;

use crate::detect::Dynamic;
use crate::dispatch::DispatchRegistry;
use crate::error::{Error, Result};
use crate::primitives::string_hash;
use crate::value::StructuralValue;

// =============================================================================
// NonBlankTrimmedString
// =============================================================================

/// A string that is never blank and never has leading or trailing whitespace.
///
/// Construction trims the input and rejects blank or whitespace-only text.
/// Two values are equal only when they have the same concrete type and the
/// same text, so a [`ClassName`] never equals a `NonBlankTrimmedString`.
///
/// ```
/// use flatval::{Error, NonBlankTrimmedString};
///
/// let value = NonBlankTrimmedString::new("  xyz ")?;
/// assert_eq!(value.as_str(), "xyz");
/// assert_eq!(NonBlankTrimmedString::new(" \t"), Err(Error::BlankString));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone)]
pub struct NonBlankTrimmedString {
    value: Arc<str>,
}

impl NonBlankTrimmedString {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::BlankString);
        }
        Ok(Self {
            value: Arc::from(trimmed),
        })
    }

    /// Like [`new`](Self::new), treating a null input as blank.
    pub fn try_from_nullable(value: Option<&str>) -> Result<Self> {
        value.map_or(Err(Error::BlankString), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl StructuralValue for NonBlankTrimmedString {
    fn equals(&self, other: &dyn Dynamic, _dispatch: &DispatchRegistry) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.value == other.value)
    }

    fn hash_code(&self, _dispatch: &DispatchRegistry) -> i32 {
        string_hash(&self.value)
    }

    fn to_display_string(&self, _dispatch: &DispatchRegistry) -> String {
        self.value.to_string()
    }
}

impl fmt::Debug for NonBlankTrimmedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NonBlankTrimmedString").field(&&*self.value).finish()
    }
}

impl Deref for NonBlankTrimmedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl AsRef<str> for NonBlankTrimmedString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for NonBlankTrimmedString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for NonBlankTrimmedString {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for NonBlankTrimmedString {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<NonBlankTrimmedString> for String {
    fn from(value: NonBlankTrimmedString) -> Self {
        value.value.to_string()
    }
}

// =============================================================================
// ClassName
// =============================================================================

/// A CSS class name: a non-blank trimmed string of its own type.
#[derive(Clone, Debug, crate::StructuralValue)]
#[structural(transparent)]
pub struct ClassName(NonBlankTrimmedString);

impl ClassName {
    pub fn new(value: &str) -> Result<Self> {
        NonBlankTrimmedString::new(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonBlankTrimmedString> for ClassName {
    fn from(value: NonBlankTrimmedString) -> Self {
        Self(value)
    }
}

impl Deref for ClassName {
    type Target = NonBlankTrimmedString;

    fn deref(&self) -> &NonBlankTrimmedString {
        &self.0
    }
}

#[cfg(feature = "global")]
crate::impl_std_via_dispatch!(NonBlankTrimmedString);
#[cfg(feature = "global")]
crate::impl_std_via_dispatch!(ClassName);
