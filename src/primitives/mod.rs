//! # Layer 0: Primitives
//!
//! Building blocks with no dependencies on the rest of the crate:
//! - `descriptor.rs`: run-time type identity (`TypeDescriptor`).
//! - `hash.rs`: const FNV-1a hashing and field hash combination.

pub mod descriptor;
pub mod hash;

// Re-export key types at this level
pub use descriptor::TypeDescriptor;
pub use hash::{HashCombiner, fnv1a_64, fnv1a_64_str, fold_u64, string_hash};
