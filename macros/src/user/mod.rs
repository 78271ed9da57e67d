//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(StructuralValue)]` | on struct | Field-wise structural contract |

pub mod structural;

pub use structural::expand_derive_structural;
