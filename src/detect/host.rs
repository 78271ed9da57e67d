//! Host primitives: value types whose default behaviour is already structural.
//!
//! Strings compare across representations (`String`, `&'static str`,
//! `Box<str>`, `Arc<str>`) the way a host compares its string primitive.
//! Numbers compare within their own type only.

use core::any::Any;
use std::sync::Arc;

use super::Dynamic;
use crate::primitives::{TypeDescriptor, fold_u64, string_hash};

// =============================================================================
// Strings
// =============================================================================

macro_rules! host_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dynamic for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn descriptor(&self) -> TypeDescriptor {
                    TypeDescriptor::of::<$ty>()
                }

                fn host_str(&self) -> Option<&str> {
                    Some(AsRef::<str>::as_ref(self))
                }

                fn host_equals(&self, other: &dyn Dynamic) -> bool {
                    other.host_str() == Some(AsRef::<str>::as_ref(self))
                }

                fn host_hash(&self) -> i32 {
                    string_hash(AsRef::<str>::as_ref(self))
                }

                fn host_to_string(&self) -> String {
                    AsRef::<str>::as_ref(self).to_owned()
                }
            }
        )*
    };
}

host_string!(String, &'static str, Box<str>, Arc<str>);

// =============================================================================
// Numbers, bool, char
// =============================================================================

macro_rules! host_primitive {
    ($($ty:ty => |$v:ident| $hash:expr),* $(,)?) => {
        $(
            impl Dynamic for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn descriptor(&self) -> TypeDescriptor {
                    TypeDescriptor::of::<$ty>()
                }

                fn host_equals(&self, other: &dyn Dynamic) -> bool {
                    other.as_any().downcast_ref::<$ty>().is_some_and(|other| self == other)
                }

                fn host_hash(&self) -> i32 {
                    let $v = *self;
                    $hash
                }

                fn host_to_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

host_primitive! {
    bool => |v| v as i32,
    char => |v| v as i32,
    i8 => |v| v as i32,
    i16 => |v| v as i32,
    i32 => |v| v,
    u8 => |v| v as i32,
    u16 => |v| v as i32,
    u32 => |v| v as i32,
    i64 => |v| fold_u64(v as u64),
    u64 => |v| fold_u64(v),
    i128 => |v| fold_u64((v ^ (v >> 64)) as u64),
    u128 => |v| fold_u64((v ^ (v >> 64)) as u64),
    isize => |v| fold_u64(v as u64),
    usize => |v| fold_u64(v as u64),
    // +0.0 and -0.0 compare equal, so they must hash equal
    f32 => |v| if v == 0.0 { 0 } else { v.to_bits() as i32 },
    f64 => |v| if v == 0.0 { 0 } else { fold_u64(v.to_bits()) },
}

// =============================================================================
// Unit
// =============================================================================

impl Dynamic for () {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<()>()
    }

    fn host_equals(&self, other: &dyn Dynamic) -> bool {
        other.as_any().is::<()>()
    }

    fn host_hash(&self) -> i32 {
        0
    }

    fn host_to_string(&self) -> String {
        String::new()
    }
}
