//! `ResultOrError<T>`: exactly one of a result or an error message.
//!
//! The branches are not exposed as public variants. Callers go through
//! [`ResultOrError::match_with`], which takes a handler for each branch, so
//! no call site can quietly handle only one of them.

use core::any::Any;
use core::convert::Infallible;
use core::fmt;
use std::sync::Arc;

use crate::detect::Dynamic;
use crate::dispatch::DispatchRegistry;
use crate::error::{Error, Result};
use crate::primitives::HashCombiner;
use crate::value::{NonBlankTrimmedString, Optional, StructuralValue};

enum Branch<T> {
    Result(T),
    Error(NonBlankTrimmedString),
}

/// A result or an error message, never both and never neither.
///
/// Instances are immutable and share their payload on clone, so
/// [`ptr_eq`](Self::ptr_eq) reports whether two handles are the same instance.
pub struct ResultOrError<T> {
    branch: Arc<Branch<T>>,
}

impl<T> ResultOrError<T> {
    pub fn from_result(result: T) -> Self {
        Self {
            branch: Arc::new(Branch::Result(result)),
        }
    }

    pub fn from_error(message: NonBlankTrimmedString) -> Self {
        Self {
            branch: Arc::new(Branch::Error(message)),
        }
    }

    /// Result from a nullable payload, rejecting null.
    pub fn try_from_result(result: Option<T>) -> Result<Self> {
        result.map(Self::from_result).ok_or(Error::NullPayload)
    }

    /// Error from raw message text, rejecting blank text.
    pub fn try_from_error(message: &str) -> Result<Self> {
        NonBlankTrimmedString::new(message).map(Self::from_error)
    }

    /// Build from both optional halves; exactly one must be defined.
    pub fn from_parts(result: Optional<T>, error: Optional<NonBlankTrimmedString>) -> Result<Self> {
        match (result, error) {
            (Optional::Present(result), Optional::Missing) => Ok(Self::from_result(result)),
            (Optional::Missing, Optional::Present(message)) => Ok(Self::from_error(message)),
            (result, error) => Err(Error::AmbiguousOutcome {
                result_defined: result.is_defined(),
                error_defined: error.is_defined(),
            }),
        }
    }

    pub fn is_result(&self) -> bool {
        matches!(*self.branch, Branch::Result(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(*self.branch, Branch::Error(_))
    }

    pub fn result(&self) -> Option<&T> {
        match &*self.branch {
            Branch::Result(result) => Some(result),
            Branch::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&NonBlankTrimmedString> {
        match &*self.branch {
            Branch::Result(_) => None,
            Branch::Error(message) => Some(message),
        }
    }

    /// Invoke exactly one of the handlers, exactly once.
    pub fn match_with<R>(
        &self,
        on_result: impl FnOnce(&T) -> R,
        on_error: impl FnOnce(&NonBlankTrimmedString) -> R,
    ) -> R {
        match &*self.branch {
            Branch::Result(result) => on_result(result),
            Branch::Error(message) => on_error(message),
        }
    }

    /// Whether both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.branch, &other.branch)
    }
}

impl<T: Dynamic> ResultOrError<T> {
    /// Transform the result branch, carrying an error over unchanged.
    ///
    /// When `U` is `T` and nothing changed (an error, or a mapped value equal
    /// to the original under `dispatch`), this instance itself is returned.
    pub fn map_with<U, F>(&self, dispatch: &DispatchRegistry, f: F) -> ResultOrError<U>
    where
        U: Dynamic,
        F: FnOnce(&T) -> U,
    {
        match self.map_branch(dispatch, |result| Ok::<U, Infallible>(f(result))) {
            Ok(mapped) => mapped,
            Err(never) => match never {},
        }
    }

    /// [`map_with`](Self::map_with) with a mapper that may produce no value, which is an error.
    pub fn try_map_with<U, F>(&self, dispatch: &DispatchRegistry, f: F) -> Result<ResultOrError<U>>
    where
        U: Dynamic,
        F: FnOnce(&T) -> Option<U>,
    {
        self.map_branch(dispatch, |result| {
            f(result).ok_or(Error::NullMapping {
                operation: "ResultOrError::try_map",
            })
        })
    }

    /// [`map_with`](Self::map_with) on the process-wide registry.
    #[cfg(feature = "global")]
    pub fn map<U, F>(&self, f: F) -> ResultOrError<U>
    where
        U: Dynamic,
        F: FnOnce(&T) -> U,
    {
        self.map_with(crate::dispatch::global(), f)
    }

    /// [`try_map_with`](Self::try_map_with) on the process-wide registry.
    #[cfg(feature = "global")]
    pub fn try_map<U, F>(&self, f: F) -> Result<ResultOrError<U>>
    where
        U: Dynamic,
        F: FnOnce(&T) -> Option<U>,
    {
        self.try_map_with(crate::dispatch::global(), f)
    }

    fn map_branch<U, E, F>(&self, dispatch: &DispatchRegistry, f: F) -> core::result::Result<ResultOrError<U>, E>
    where
        U: Dynamic,
        F: FnOnce(&T) -> core::result::Result<U, E>,
    {
        let same = (self as &dyn Any).downcast_ref::<ResultOrError<U>>();
        match &*self.branch {
            Branch::Result(result) => {
                let mapped = f(result)?;
                if let Some(same) = same {
                    if dispatch.are_equal(result, &mapped) {
                        return Ok(same.clone());
                    }
                }
                Ok(ResultOrError::from_result(mapped))
            }
            Branch::Error(message) => Ok(match same {
                Some(same) => same.clone(),
                None => ResultOrError::from_error(message.clone()),
            }),
        }
    }
}

impl<T> Clone for ResultOrError<T> {
    fn clone(&self) -> Self {
        Self {
            branch: Arc::clone(&self.branch),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ResultOrError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.branch {
            Branch::Result(result) => f.debug_tuple("Result").field(result).finish(),
            Branch::Error(message) => f.debug_tuple("Error").field(message).finish(),
        }
    }
}

impl<T: Dynamic> StructuralValue for ResultOrError<T> {
    fn equals(&self, other: &dyn Dynamic, dispatch: &DispatchRegistry) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };
        if self.ptr_eq(other) {
            return true;
        }
        match (&*self.branch, &*other.branch) {
            (Branch::Result(a), Branch::Result(b)) => dispatch.are_equal(a, b),
            (Branch::Error(a), Branch::Error(b)) => dispatch.are_equal(a, b),
            _ => false,
        }
    }

    // Combines (result, error) with 0 standing in for the absent half
    fn hash_code(&self, dispatch: &DispatchRegistry) -> i32 {
        let (result, error) = match &*self.branch {
            Branch::Result(result) => (dispatch.hash_of(result), 0),
            Branch::Error(message) => (0, dispatch.hash_of(message)),
        };
        HashCombiner::new().add(result).add(error).finish()
    }

    fn to_display_string(&self, dispatch: &DispatchRegistry) -> String {
        match &*self.branch {
            Branch::Result(result) => format!("Result({})", dispatch.string_of(result)),
            Branch::Error(message) => format!("Error({})", message.as_str()),
        }
    }
}

#[cfg(feature = "global")]
crate::impl_std_via_dispatch!(impl<T> ResultOrError<T>);

// =============================================================================
// Outcome helpers
// =============================================================================

impl<T> ResultOrError<Optional<T>> {
    /// Turn a missing result into an error with `message`.
    pub fn replace_missing_result_with_error(&self, message: NonBlankTrimmedString) -> ResultOrError<T>
    where
        T: Clone,
    {
        self.match_with(
            |result| match result {
                Optional::Present(result) => ResultOrError::from_result(result.clone()),
                Optional::Missing => ResultOrError::from_error(message),
            },
            |error| ResultOrError::from_error(error.clone()),
        )
    }
}

impl<T> Optional<ResultOrError<T>> {
    /// Three-way match over "no value yet", a result, and an error.
    pub fn match_outcome<R>(
        &self,
        on_missing: impl FnOnce() -> R,
        on_result: impl FnOnce(&T) -> R,
        on_error: impl FnOnce(&NonBlankTrimmedString) -> R,
    ) -> R {
        match self {
            Optional::Present(outcome) => outcome.match_with(on_result, on_error),
            Optional::Missing => on_missing(),
        }
    }

    /// The result, when there is a value and it is not an error.
    pub fn try_to_get_result(&self) -> Optional<&T> {
        match self {
            Optional::Present(outcome) => Optional::from_nullable(outcome.result()),
            Optional::Missing => Optional::Missing,
        }
    }
}

impl<T: Dynamic> Optional<ResultOrError<T>> {
    /// [`ResultOrError::map_with`] under the optional; `Missing` stays `Missing`.
    pub fn map_result_with<U, F>(&self, dispatch: &DispatchRegistry, f: F) -> Optional<ResultOrError<U>>
    where
        U: Dynamic,
        F: FnOnce(&T) -> U,
    {
        match self {
            Optional::Present(outcome) => Optional::Present(outcome.map_with(dispatch, f)),
            Optional::Missing => Optional::Missing,
        }
    }

    /// [`map_result_with`](Self::map_result_with) on the process-wide registry.
    #[cfg(feature = "global")]
    pub fn map_result<U, F>(&self, f: F) -> Optional<ResultOrError<U>>
    where
        U: Dynamic,
        F: FnOnce(&T) -> U,
    {
        self.map_result_with(crate::dispatch::global(), f)
    }
}
