//! # Layer 3: Flattened Values
//!
//! ## Module Structure
//!
//! ```text
//! value/
//! ├── structural.rs - StructuralValue contract, CustomHandle
//! ├── string.rs     - NonBlankTrimmedString, ClassName
//! ├── optional.rs   - Optional<T>
//! ├── outcome.rs    - ResultOrError<T> and its Optional helpers
//! └── set.rs        - PersistentSet<T>
//! ```

pub mod optional;
pub mod outcome;
pub mod set;
pub mod string;
pub mod structural;

pub use optional::Optional;
pub use outcome::ResultOrError;
pub use set::PersistentSet;
pub use string::{ClassName, NonBlankTrimmedString};
pub use structural::{CustomHandle, StructuralValue};
