//! Declarative macros: host opt-in, compile-time detection, std trait bridging.

// =============================================================================
// host_value! - Opt an ordinary type into the host protocol
// =============================================================================

/// Implement [`Dynamic`](crate::Dynamic) for ordinary types with host defaults.
///
/// The types get reference semantics under dispatch: identity equality, an
/// address hash and their type name as string form. Flattened types
/// implement [`StructuralValue`](crate::StructuralValue) instead.
///
/// ```
/// use flatval::{DispatchRegistry, host_value};
///
/// #[derive(Debug)]
/// struct Connection(u32);
/// host_value!(Connection);
///
/// let registry = DispatchRegistry::new();
/// let a = Connection(1);
/// let b = Connection(1);
/// assert!(registry.are_equal(&a, &a));
/// assert!(!registry.are_equal(&a, &b));
/// ```
#[macro_export]
macro_rules! host_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Dynamic for $ty {
                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }

                fn descriptor(&self) -> $crate::TypeDescriptor {
                    $crate::TypeDescriptor::of::<$ty>()
                }
            }
        )+
    };
}

// =============================================================================
// is_structural! / is_dynamic! - Compile-time detection
// =============================================================================

/// Whether a concrete type implements [`StructuralValue`](crate::StructuralValue).
///
/// Resolved at compile time; only meaningful for concrete types.
///
/// ```
/// use flatval::{NonBlankTrimmedString, is_structural};
///
/// assert!(is_structural!(NonBlankTrimmedString));
/// assert!(!is_structural!(String));
/// ```
#[cfg(feature = "detect")]
#[macro_export]
macro_rules! is_structural {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::StructuralValueFallback as _;
        $crate::detect::autoref::Detect::<$ty>::IS_STRUCTURAL
    }};
}

/// Whether a concrete type takes part in dispatch at all.
#[cfg(feature = "detect")]
#[macro_export]
macro_rules! is_dynamic {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::DynamicFallback as _;
        $crate::detect::autoref::Detect::<$ty>::IS_DYNAMIC
    }};
}

// =============================================================================
// impl_std_via_dispatch! - PartialEq / Eq / Hash / Display
// =============================================================================

/// Implement `PartialEq`, `Eq`, `Hash` and `Display` through the
/// process-wide registry.
///
/// Generic types list their parameters after a leading `impl`; each
/// parameter receives a [`Dynamic`](crate::Dynamic) bound.
///
/// `Eq` is asserted unconditionally. A payload whose host equality is not
/// reflexive (`f32::NAN`, `f64::NAN`) breaks it: two separate
/// `Optional::present(f64::NAN)` values compare unequal. Keep such types
/// out of hashed collections.
///
/// ```ignore
/// impl_std_via_dispatch!(Money);
/// impl_std_via_dispatch!(impl<T> Tagged<T>);
/// ```
#[cfg(feature = "global")]
#[macro_export]
macro_rules! impl_std_via_dispatch {
    (impl<$($gen:ident),*> $ty:ty) => {
        impl<$($gen: $crate::Dynamic),*> ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::dispatch::global().are_equal(self, other)
            }
        }

        impl<$($gen: $crate::Dynamic),*> ::core::cmp::Eq for $ty {}

        impl<$($gen: $crate::Dynamic),*> ::core::hash::Hash for $ty {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::dispatch::global().hash_of(self));
            }
        }

        impl<$($gen: $crate::Dynamic),*> ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::dispatch::global().string_of(self))
            }
        }
    };
    ($ty:ty) => {
        $crate::impl_std_via_dispatch!(impl<> $ty);
    };
}
