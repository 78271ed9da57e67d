//! Error types for flatval.
//!
//! Every failure here is a precondition violation raised at the call site:
//! blank strings, missing payloads, ambiguous outcomes. None of them are
//! retried; they surface directly to the caller.

use thiserror::Error;

/// Result type for fallible flatval constructors and mappers.
pub type Result<T> = core::result::Result<T, Error>;

/// Precondition violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Null, blank or whitespace-only input to a non-blank string type.
    #[error("null, blank or whitespace-only value specified")]
    BlankString,

    /// A present optional value was constructed without a payload.
    #[error("a present value requires a payload")]
    NullPayload,

    /// A result-or-error was constructed with both branches or neither.
    #[error(
        "precisely one of result and error must have a value \
         (result defined: {result_defined}, error defined: {error_defined})"
    )]
    AmbiguousOutcome {
        result_defined: bool,
        error_defined: bool,
    },

    /// A mapping delegate produced no value where one is required.
    #[error("the mapper passed to {operation} returned no value")]
    NullMapping { operation: &'static str },

    /// An attempt to store a null element in a persistent set.
    #[error("persistent sets never store null elements")]
    NullElement,

    /// `init_global` was called after the process-wide registry already existed.
    #[error("the process-wide dispatch registry is already initialized")]
    GlobalAlreadyInitialized,
}
