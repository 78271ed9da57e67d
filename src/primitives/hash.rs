//! Const hashing utilities.
//!
//! Host hash codes are `i32`, matching the hash surface the dispatch layer
//! exposes. Strings hash with FNV-1a so that hash codes are stable across
//! runs and platforms.

// =============================================================================
// FNV-1a
// =============================================================================

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a 64-bit hash over raw bytes (const fn)
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// FNV-1a 64-bit hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    fnv1a_64(s.as_bytes())
}

/// Fold a 64-bit hash into the 32-bit host hash space.
pub const fn fold_u64(hash: u64) -> i32 {
    (hash ^ (hash >> 32)) as i32
}

/// Host hash code of a string value.
pub const fn string_hash(s: &str) -> i32 {
    fold_u64(fnv1a_64_str(s))
}

// =============================================================================
// Hash combination
// =============================================================================

/// Order-sensitive combination of field hash codes (`hash * 23 + field`).
///
/// Overflow wraps.
///
/// ```
/// use flatval::HashCombiner;
///
/// let a = HashCombiner::new().add(1).add(2).finish();
/// let b = HashCombiner::new().add(2).add(1).finish();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCombiner(i32);

impl HashCombiner {
    /// Seed used when a type has no seed of its own.
    pub const SEED: i32 = 17;
    const FACTOR: i32 = 23;

    pub const fn new() -> Self {
        Self(Self::SEED)
    }

    pub const fn with_seed(seed: i32) -> Self {
        Self(seed)
    }

    #[must_use]
    pub const fn add(self, hash: i32) -> Self {
        Self(self.0.wrapping_mul(Self::FACTOR).wrapping_add(hash))
    }

    pub const fn finish(self) -> i32 {
        self.0
    }
}

impl Default for HashCombiner {
    fn default() -> Self {
        Self::new()
    }
}
