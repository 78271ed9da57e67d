//! Test the TypeIdentity cache: probe-once resolution keyed by concrete type

use std::cell::Cell;
use std::thread;

use flatval::{
    CustomHandle, DispatchRegistry, NonBlankTrimmedString, StructuralValue, TypeDescriptor,
    TypeIdentityCache,
};

#[derive(Clone, Debug, StructuralValue)]
struct Holder<T> {
    value: T,
}

fn text(value: &str) -> NonBlankTrimmedString {
    NonBlankTrimmedString::new(value).unwrap()
}

#[test]
fn test_resolve_probes_once_per_type() {
    let registry = DispatchRegistry::new();
    let a = text("a");
    let b = text("b");

    registry.hash_of(&a);
    registry.hash_of(&b);
    registry.string_of(&a);

    assert_eq!(registry.cache().probe_count(), 1);
    assert_eq!(registry.cache().len(), 1);
    assert!(registry.cache().contains(TypeDescriptor::of::<NonBlankTrimmedString>()));
}

#[test]
fn test_absence_of_custom_implementation_is_cached() {
    let registry = DispatchRegistry::new();
    registry.hash_of(&5i32);
    registry.hash_of(&6i32);

    assert_eq!(registry.cache().probe_count(), 1);
    assert_eq!(registry.cache().lookup(TypeDescriptor::of::<i32>()), Some(None));
}

#[test]
fn test_unresolved_type_has_no_entry() {
    let cache = TypeIdentityCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.lookup(TypeDescriptor::of::<String>()), None);
    assert!(!cache.contains(TypeDescriptor::of::<String>()));
}

#[test]
fn test_resolve_returns_same_decision_without_reprobing() {
    let cache = TypeIdentityCache::new();
    let descriptor = TypeDescriptor::of::<NonBlankTrimmedString>();
    let calls = Cell::new(0);
    let probe = || {
        calls.set(calls.get() + 1);
        Some(CustomHandle::of::<NonBlankTrimmedString>())
    };

    let first = cache.resolve(descriptor, probe);
    let second = cache.resolve(descriptor, probe);

    assert_eq!(first, second);
    assert_eq!(first.map(|handle| handle.descriptor()), Some(descriptor));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_handle_for_another_type_is_rejected() {
    let cache = TypeIdentityCache::new();
    let descriptor = TypeDescriptor::of::<i32>();

    let resolved = cache.resolve(descriptor, || Some(CustomHandle::of::<NonBlankTrimmedString>()));

    assert!(resolved.is_none());
    assert_eq!(cache.lookup(descriptor), Some(None));
}

// =============================================================================
// Generic instantiations
// =============================================================================

#[test]
fn test_generic_instantiations_resolve_independently() {
    let registry = DispatchRegistry::new();
    let of_text = Holder { value: text("abc") };
    let of_string = Holder {
        value: String::from("abc"),
    };

    let text_handle = registry.resolve(&of_text);
    let string_handle = registry.resolve(&of_string);

    assert_eq!(registry.cache().len(), 2);
    assert_eq!(registry.cache().probe_count(), 2);
    assert_ne!(text_handle, string_handle);
    assert_eq!(
        text_handle.map(|handle| handle.descriptor()),
        Some(TypeDescriptor::of::<Holder<NonBlankTrimmedString>>())
    );
    assert_eq!(
        string_handle.map(|handle| handle.descriptor()),
        Some(TypeDescriptor::of::<Holder<String>>())
    );
    assert!(text_handle.is_some_and(|handle| handle.descriptor().is::<Holder<NonBlankTrimmedString>>()));
    assert!(string_handle.is_some_and(|handle| !handle.descriptor().is::<Holder<NonBlankTrimmedString>>()));
}

#[test]
fn test_generic_instantiations_never_share_equality() {
    let registry = DispatchRegistry::new();
    let of_text = Holder { value: text("abc") };
    let of_string = Holder {
        value: String::from("abc"),
    };

    // prime the cache with one instantiation before comparing across both
    assert!(registry.are_equal(&of_text, &Holder { value: text("abc") }));
    assert!(!registry.are_equal(&of_text, &of_string));
    assert!(!registry.are_equal(&of_string, &of_text));
    assert!(!registry.are_equal(&of_string, &String::from("abc")));
}

#[test]
fn test_handle_refuses_a_receiver_of_another_type() {
    let registry = DispatchRegistry::new();
    let handle = CustomHandle::of::<Holder<String>>();
    let other = Holder { value: text("abc") };

    assert_eq!(handle.equals(&other, &other, &registry), None);
    assert_eq!(handle.hash_code(&other, &registry), None);
    assert_eq!(handle.to_display_string(&other, &registry), None);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_resolution_settles_on_one_entry() {
    let registry = DispatchRegistry::new();
    let expected = registry.hash_of(&text("shared"));
    let fresh = DispatchRegistry::new();

    let hashes: Vec<i32> = thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| fresh.hash_of(&text("shared"))))
            .collect();
        workers.into_iter().map(|worker| worker.join().unwrap()).collect()
    });

    assert!(hashes.iter().all(|hash| *hash == expected));
    assert_eq!(fresh.cache().len(), 1);
    assert!((1..=8).contains(&fresh.cache().probe_count()));
}
