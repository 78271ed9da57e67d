#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - global: default, enables the process-wide registry and std trait bridging
// - detect: default, enables compile-time is_structural! detection

//! # flatval
//!
//! Structural value semantics for flattened value types.
//!
//! **Equality, hashing and string conversion that follow a value's fields,
//! not its address.**
//!
//! ## Architecture
//!
//! Every value the dispatch layer sees is a [`Dynamic`] host object. Types
//! that want structural behaviour implement [`StructuralValue`]; nothing
//! else is required to register them.
//!
//! ### 1. Resolution
//! The [`TypeIdentityCache`] maps each concrete type (generic arguments
//! included) to its custom implementation, or to "none", probing each type
//! once.
//!
//! ```text
//! value -> TypeDescriptor (TypeId) -> cache -> Option<CustomHandle>
//! ```
//!
//! ### 2. Dispatch
//! [`DispatchRegistry::are_equal`] tries the left operand's custom equality,
//! then the right operand's with the arguments reversed, then the host
//! default. Either side can establish a match, which lets a wrapper such as
//! [`Optional`] compare equal to the value it wraps.
//!
//! ### 3. Values
//! [`Optional`], [`ResultOrError`] and [`PersistentSet`] are immutable and
//! compare structurally through the registry.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - TypeDescriptor, FNV-1a string hash, HashCombiner               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Host Object Protocol                                    |
//! |  - Dynamic, host primitives, autoref detection                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch                                                |
//! |  - TypeIdentityCache, DispatchRegistry, process-wide registry     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Flattened Values                                        |
//! |  - StructuralValue, Optional, ResultOrError, PersistentSet        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use flatval::prelude::*;
//!
//! #[derive(Clone, Debug, StructuralValue)]
//! struct Money {
//!     amount: i64,
//!     currency: NonBlankTrimmedString,
//! }
//!
//! let registry = DispatchRegistry::new();
//! let a = Money { amount: 5, currency: NonBlankTrimmedString::new("EUR")? };
//! let b = Money { amount: 5, currency: NonBlankTrimmedString::new(" EUR ")? };
//!
//! assert!(registry.are_equal(&a, &b));
//! assert_eq!(registry.hash_of(&a), registry.hash_of(&b));
//! assert_eq!(registry.string_of(&a), "Money { amount: 5, currency: EUR }");
//! # Ok::<(), flatval::Error>(())
//! ```

// Allow `::flatval` to work inside the crate itself
extern crate self as flatval;

pub mod error;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Host Object Protocol
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 3: Flattened Values
// =============================================================================
pub mod value;

// Syntax macros (host_value!, is_structural!, impl_std_via_dispatch!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::{Error, Result};
pub use primitives::{HashCombiner, TypeDescriptor};
pub use detect::Dynamic;
pub use dispatch::{DispatchConfig, DispatchRegistry, EqualityChaining, TypeIdentityCache};
pub use value::{
    ClassName, CustomHandle, NonBlankTrimmedString, Optional, PersistentSet, ResultOrError,
    StructuralValue,
};

// Re-export proc-macros
pub use macros::StructuralValue;

/// Common items for working with flattened values.
pub mod prelude {
    pub use crate::detect::Dynamic;
    pub use crate::dispatch::{DispatchConfig, DispatchRegistry, EqualityChaining};
    pub use crate::value::{
        ClassName, NonBlankTrimmedString, Optional, PersistentSet, ResultOrError, StructuralValue,
    };
    pub use macros::StructuralValue;
    // Note: host_value!, is_structural! and impl_std_via_dispatch! are
    // #[macro_export] so they're at crate root
}
