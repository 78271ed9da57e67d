//! Common parsing utilities
//!
//! Shared helpers for reading `#[structural(...)]` attributes.

use syn::{Attribute, Fields};

// =============================================================================
// #[structural(...)] arguments
// =============================================================================

/// Arguments accepted by `#[structural(...)]`.
///
/// - `transparent`: the single field stands for the whole value in hashing
///   and string conversion
#[derive(Default)]
pub struct StructuralArgs {
    pub transparent: bool,
}

impl StructuralArgs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("structural")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("transparent") {
                    args.transparent = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported structural attribute, expected `transparent`"))
                }
            })?;
        }
        Ok(args)
    }
}

/// Number of fields, counting a unit struct as zero.
pub fn field_count(fields: &Fields) -> usize {
    match fields {
        Fields::Named(named) => named.named.len(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.len(),
        Fields::Unit => 0,
    }
}

// =============================================================================
// Hash seed
// =============================================================================

/// Per-type hash seed: FNV-1a of the type name folded to 32 bits.
///
/// Unsigned so the emitted literal is always a single token.
pub fn type_seed(name: &str) -> u32 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in name.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    (hash ^ (hash >> 32)) as u32
}
