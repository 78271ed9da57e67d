//! Procedural macros for the flatval value-semantics layer
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(StructuralValue)]` | struct | Field-wise structural equality / hash / string |
//! | `#[structural(transparent)]` | single-field struct | Hash and print as the field |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Debug, StructuralValue)]
//! struct Money {
//!     amount: i64,
//!     currency: NonBlankTrimmedString,
//! }
//!
//! #[derive(Clone, Debug, StructuralValue)]
//! #[structural(transparent)]
//! struct ClassName(NonBlankTrimmedString);
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive the structural value contract from a struct's fields.
///
/// Every field type must implement `flatval::Dynamic`; type parameters get
/// that bound automatically.
#[proc_macro_derive(StructuralValue, attributes(structural))]
pub fn derive_structural_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_structural(input).into()
}
