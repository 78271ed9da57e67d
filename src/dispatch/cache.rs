//! TypeIdentity cache.
//!
//! Maps a [`TypeDescriptor`] to the resolved custom implementation of that
//! type, or to "no custom implementation". Entries are never evicted or
//! overwritten: once a descriptor is resolved the answer is fixed for the
//! lifetime of the cache.
//!
//! ## Concurrency
//!
//! Lookups take a read lock. A miss runs the probe with no lock held, then
//! takes the write lock and keeps whichever answer landed first. Two threads
//! missing on the same descriptor both probe; the answers are identical, so
//! the race costs duplicate work only.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::primitives::TypeDescriptor;
use crate::value::CustomHandle;

/// Process-lifetime cache of dispatch decisions keyed by concrete type.
#[derive(Debug, Default)]
pub struct TypeIdentityCache {
    entries: RwLock<HashMap<TypeDescriptor, Option<CustomHandle>>>,
    probes: AtomicUsize,
}

impl TypeIdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `descriptor`, running `probe` only when it has never been resolved.
    ///
    /// A probed handle for some other type is rejected and cached as "no
    /// custom implementation".
    pub fn resolve<F>(&self, descriptor: TypeDescriptor, probe: F) -> Option<CustomHandle>
    where
        F: FnOnce() -> Option<CustomHandle>,
    {
        if let Some(resolved) = self.lookup(descriptor) {
            return resolved;
        }

        self.probes.fetch_add(1, Ordering::Relaxed);
        let resolved = probe().filter(|handle| {
            let matches = handle.descriptor() == descriptor;
            if !matches {
                warn!(
                    expected = descriptor.name(),
                    found = handle.descriptor().name(),
                    "probe returned a handle for another type, ignoring it"
                );
            }
            matches
        });

        match write_recovering(&self.entries).entry(descriptor) {
            Entry::Occupied(existing) => *existing.get(),
            Entry::Vacant(slot) => {
                debug!(
                    type_name = descriptor.name(),
                    custom = resolved.is_some(),
                    "resolved dispatch target"
                );
                *slot.insert(resolved)
            }
        }
    }

    /// Cached decision for `descriptor`, if it was ever resolved.
    ///
    /// The outer `Option` is "resolved at all", the inner one "has a custom
    /// implementation".
    pub fn lookup(&self, descriptor: TypeDescriptor) -> Option<Option<CustomHandle>> {
        read_recovering(&self.entries).get(&descriptor).copied()
    }

    pub fn contains(&self, descriptor: TypeDescriptor) -> bool {
        read_recovering(&self.entries).contains_key(&descriptor)
    }

    /// Number of resolved descriptors, negative answers included.
    pub fn len(&self) -> usize {
        read_recovering(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of probes actually executed.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }
}

// =============================================================================
// Lock recovery
// =============================================================================
//
// Entries are immutable once written and a panicking probe runs outside the
// lock, so a poisoned map is still consistent.

fn read_recovering<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("dispatch cache lock poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

fn write_recovering<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("dispatch cache lock poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
