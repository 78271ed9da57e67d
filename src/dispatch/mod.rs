//! # Layer 2: Dispatch
//!
//! ## Module Structure
//!
//! ```text
//! dispatch/
//! ├── cache.rs    - TypeIdentityCache (descriptor -> resolved handle)
//! ├── config.rs   - DispatchConfig, EqualityChaining
//! ├── registry.rs - DispatchRegistry (are_equal, hash_of, string_of)
//! └── global.rs   - process-wide registry (feature "global")
//! ```

pub mod cache;
pub mod config;
pub mod registry;

#[cfg(feature = "global")]
pub mod global;

// Re-export key types
pub use cache::TypeIdentityCache;
pub use config::{DispatchConfig, EqualityChaining};
pub use registry::DispatchRegistry;

#[cfg(feature = "global")]
pub use global::{are_equal, global, hash_of, init_global, string_of};
