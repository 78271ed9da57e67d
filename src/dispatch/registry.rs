//! The dispatch registry: equality, hash-code and string-conversion dispatchers.

use tracing::{debug, trace};

use super::cache::TypeIdentityCache;
use super::config::{DispatchConfig, EqualityChaining};
use crate::detect::Dynamic;
use crate::value::CustomHandle;

/// Routes equality, hashing and string conversion to custom structural
/// implementations, falling through to host defaults.
///
/// A registry is cheap to create; tests can use a fresh one each. Code that
/// needs a process-wide instance uses [`global`](super::global).
///
/// ```
/// use flatval::{DispatchRegistry, NonBlankTrimmedString, Optional};
///
/// let registry = DispatchRegistry::new();
/// let text = NonBlankTrimmedString::new("xyz")?;
/// let wrapped = Optional::present(text.clone());
///
/// assert!(registry.are_equal(&wrapped, &text));
/// assert!(registry.are_equal(&text, &wrapped));
/// assert_eq!(registry.string_of(&wrapped), "xyz");
/// # Ok::<(), flatval::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct DispatchRegistry {
    cache: TypeIdentityCache,
    config: DispatchConfig,
}

impl DispatchRegistry {
    /// Create a registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        debug!(chaining = ?config.chaining, "created dispatch registry");
        Self {
            cache: TypeIdentityCache::new(),
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn cache(&self) -> &TypeIdentityCache {
        &self.cache
    }

    /// Custom implementation of `value`'s concrete type, resolved through the cache.
    pub fn resolve(&self, value: &dyn Dynamic) -> Option<CustomHandle> {
        self.cache.resolve(value.descriptor(), || value.custom_handle())
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Dispatched equality of two values.
    ///
    /// 1. `x`'s custom equality, receiving `y`; true wins.
    /// 2. With [`EqualityChaining::Bidirectional`], `y`'s custom equality
    ///    receiving `x`; true wins.
    /// 3. The host default.
    ///
    /// Either side's custom logic can establish equality, so the relation is
    /// not guaranteed to be transitive.
    pub fn are_equal(&self, x: &dyn Dynamic, y: &dyn Dynamic) -> bool {
        if self.custom_equals(x, y) {
            return true;
        }
        if self.config.chaining == EqualityChaining::Bidirectional && self.custom_equals(y, x) {
            return true;
        }
        if self.config.trace_fallthrough {
            trace!(
                left = x.descriptor().name(),
                right = y.descriptor().name(),
                "equality fell through to host default"
            );
        }
        x.host_equals(y)
    }

    /// [`are_equal`](Self::are_equal) with null operands.
    ///
    /// Null operands are never probed: two nulls are equal, a null and a
    /// value are not.
    pub fn are_equal_nullable(&self, x: Option<&dyn Dynamic>, y: Option<&dyn Dynamic>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => self.are_equal(x, y),
            _ => false,
        }
    }

    fn custom_equals(&self, receiver: &dyn Dynamic, other: &dyn Dynamic) -> bool {
        self.resolve(receiver)
            .and_then(|handle| handle.equals(receiver, other, self))
            .unwrap_or(false)
    }

    // =========================================================================
    // Hash code
    // =========================================================================

    /// Dispatched hash code: the custom hash if the type has one, else the host default.
    pub fn hash_of(&self, x: &dyn Dynamic) -> i32 {
        match self.resolve(x).and_then(|handle| handle.hash_code(x, self)) {
            Some(hash) => hash,
            None => {
                if self.config.trace_fallthrough {
                    trace!(type_name = x.descriptor().name(), "hash fell through to host default");
                }
                x.host_hash()
            }
        }
    }

    /// [`hash_of`](Self::hash_of) with a null operand, which hashes to 0.
    pub fn hash_of_nullable(&self, x: Option<&dyn Dynamic>) -> i32 {
        x.map_or(0, |x| self.hash_of(x))
    }

    // =========================================================================
    // String conversion
    // =========================================================================

    /// Dispatched string conversion: the custom conversion if the type has one, else the host default.
    pub fn string_of(&self, x: &dyn Dynamic) -> String {
        match self.resolve(x).and_then(|handle| handle.to_display_string(x, self)) {
            Some(text) => text,
            None => {
                if self.config.trace_fallthrough {
                    trace!(type_name = x.descriptor().name(), "string conversion fell through to host default");
                }
                x.host_to_string()
            }
        }
    }

    /// [`string_of`](Self::string_of) with a null operand, which converts to the empty string.
    pub fn string_of_nullable(&self, x: Option<&dyn Dynamic>) -> String {
        x.map(|x| self.string_of(x)).unwrap_or_default()
    }
}
