//! # Layer 1: Host Object Protocol
//!
//! Every value the dispatch layer sees implements [`Dynamic`]. The trait
//! carries what a host runtime attaches to each object: run-time type
//! metadata, `Any` access, a probe for custom structural implementations,
//! and the host's default equality / hash / string behaviour.
//!
//! ## Host defaults
//!
//! | Kind | Equality | Hash | String |
//! |------|----------|------|--------|
//! | host primitives (`String`, `&'static str`, numbers, ...) | by value | by value | `Display` |
//! | everything else | identity (same type, same address) | address | type name |
//!
//! ## Sources of `Dynamic`
//!
//! - Every [`StructuralValue`](crate::StructuralValue) gets `Dynamic` through
//!   a blanket impl whose probe yields its [`CustomHandle`].
//! - Host primitives are implemented in [`host`].
//! - Ordinary types opt in with [`host_value!`](crate::host_value).

use core::any::Any;
use core::fmt;

use crate::primitives::{TypeDescriptor, fold_u64};
use crate::value::{CustomHandle, StructuralValue};

pub mod host;

#[cfg(feature = "detect")]
pub mod autoref;

// =============================================================================
// Dynamic
// =============================================================================

/// Host object protocol.
pub trait Dynamic: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Run-time type metadata of the concrete type.
    fn descriptor(&self) -> TypeDescriptor;

    /// Type-level probe for a custom structural implementation.
    ///
    /// The answer depends only on the concrete type, never on the instance;
    /// the dispatch cache calls this at most once per descriptor.
    fn custom_handle(&self) -> Option<CustomHandle> {
        None
    }

    /// Text content when this value is a host string.
    fn host_str(&self) -> Option<&str> {
        None
    }

    /// Host default equality.
    fn host_equals(&self, other: &dyn Dynamic) -> bool {
        same_instance(self.as_any(), other.as_any())
    }

    /// Host default hash code.
    fn host_hash(&self) -> i32 {
        address_hash(self.as_any())
    }

    /// Host default string conversion.
    fn host_to_string(&self) -> String {
        self.descriptor().name().to_owned()
    }
}

impl<T: StructuralValue> Dynamic for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<T>()
    }

    fn custom_handle(&self) -> Option<CustomHandle> {
        Some(CustomHandle::of::<T>())
    }
}

// =============================================================================
// Reference semantics
// =============================================================================

/// Identity comparison: same concrete type at the same address.
pub fn same_instance(a: &dyn Any, b: &dyn Any) -> bool {
    Any::type_id(a) == Any::type_id(b) && core::ptr::addr_eq(a as *const dyn Any, b as *const dyn Any)
}

/// Hash code derived from a value's address.
pub fn address_hash(value: &dyn Any) -> i32 {
    let address = (value as *const dyn Any).cast::<()>() as usize;
    fold_u64(address as u64)
}
