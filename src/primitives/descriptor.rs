//! Run-time type identity.

use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Identity of a concrete type, generic arguments included.
///
/// `Wrapper<A>` and `Wrapper<B>` always produce distinct descriptors because
/// the identity is the `TypeId` of the fully instantiated type. The name is
/// carried for diagnostics only and takes no part in comparisons.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Descriptor for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name, generic arguments included.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this descriptor denotes `T`.
    ///
    /// ```
    /// use flatval::{Optional, TypeDescriptor};
    ///
    /// let descriptor = TypeDescriptor::of::<Optional<i32>>();
    /// assert!(descriptor.is::<Optional<i32>>());
    /// assert!(!descriptor.is::<Optional<i64>>());
    /// ```
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({})", self.name)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
