//! The structural value contract and the handle the dispatch cache stores.

use core::any::Any;
use core::fmt;

use crate::detect::Dynamic;
use crate::dispatch::DispatchRegistry;
use crate::primitives::TypeDescriptor;

// =============================================================================
// StructuralValue
// =============================================================================

/// Contract of a flattened value type.
///
/// Implementations operate only on the value's own fields and must be
/// deterministic. Whenever `equals` reports true for two values of the same
/// type, `hash_code` must agree for them. Returning true for a value of a
/// *different* type is allowed (a wrapper matching its wrapped value) but the
/// implementer then owns hash agreement for that pair as well.
///
/// Nested values go back through `dispatch` so that flattened fields compare
/// structurally too.
///
/// Implementing this trait is the whole registration: a blanket impl makes
/// the type [`Dynamic`] and the dispatch cache discovers it on first use.
/// `#[derive(StructuralValue)]` generates an implementation from the fields.
pub trait StructuralValue: Any + fmt::Debug {
    /// Structural equality with `other`, this value being the receiver.
    fn equals(&self, other: &dyn Dynamic, dispatch: &DispatchRegistry) -> bool;

    fn hash_code(&self, dispatch: &DispatchRegistry) -> i32;

    fn to_display_string(&self, dispatch: &DispatchRegistry) -> String;
}

// =============================================================================
// CustomHandle
// =============================================================================

type EqualsFn = fn(&dyn Dynamic, &dyn Dynamic, &DispatchRegistry) -> Option<bool>;
type HashFn = fn(&dyn Dynamic, &DispatchRegistry) -> Option<i32>;
type ToStringFn = fn(&dyn Dynamic, &DispatchRegistry) -> Option<String>;

/// Resolved custom implementation of one concrete type.
///
/// Each entry point checks that the receiver really is the handle's type and
/// answers `None` otherwise, so a handle can never run against a different
/// generic instantiation.
#[derive(Clone, Copy)]
pub struct CustomHandle {
    descriptor: TypeDescriptor,
    equals: EqualsFn,
    hash_code: HashFn,
    to_string: ToStringFn,
}

impl CustomHandle {
    /// Handle for the structural implementation of `T`.
    pub fn of<T: StructuralValue>() -> Self {
        Self {
            descriptor: TypeDescriptor::of::<T>(),
            equals: equals_via::<T>,
            hash_code: hash_via::<T>,
            to_string: to_string_via::<T>,
        }
    }

    /// The concrete type this handle was resolved for.
    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }

    pub fn equals(&self, receiver: &dyn Dynamic, other: &dyn Dynamic, dispatch: &DispatchRegistry) -> Option<bool> {
        (self.equals)(receiver, other, dispatch)
    }

    pub fn hash_code(&self, receiver: &dyn Dynamic, dispatch: &DispatchRegistry) -> Option<i32> {
        (self.hash_code)(receiver, dispatch)
    }

    pub fn to_display_string(&self, receiver: &dyn Dynamic, dispatch: &DispatchRegistry) -> Option<String> {
        (self.to_string)(receiver, dispatch)
    }
}

impl PartialEq for CustomHandle {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor
    }
}

impl Eq for CustomHandle {}

impl fmt::Debug for CustomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomHandle({})", self.descriptor.name())
    }
}

fn equals_via<T: StructuralValue>(receiver: &dyn Dynamic, other: &dyn Dynamic, dispatch: &DispatchRegistry) -> Option<bool> {
    receiver
        .as_any()
        .downcast_ref::<T>()
        .map(|receiver| receiver.equals(other, dispatch))
}

fn hash_via<T: StructuralValue>(receiver: &dyn Dynamic, dispatch: &DispatchRegistry) -> Option<i32> {
    receiver
        .as_any()
        .downcast_ref::<T>()
        .map(|receiver| receiver.hash_code(dispatch))
}

fn to_string_via<T: StructuralValue>(receiver: &dyn Dynamic, dispatch: &DispatchRegistry) -> Option<String> {
    receiver
        .as_any()
        .downcast_ref::<T>()
        .map(|receiver| receiver.to_display_string(dispatch))
}
