//! Test compile-time detection with is_structural! / is_dynamic!

#![cfg(feature = "detect")]

use flatval::{
    ClassName, NonBlankTrimmedString, Optional, PersistentSet, ResultOrError, StructuralValue,
    host_value, is_dynamic, is_structural,
};

#[allow(dead_code)]
#[derive(Clone, Debug, StructuralValue)]
struct Flattened {
    value: i32,
}

#[allow(dead_code)]
#[derive(Debug)]
struct Hosted;
host_value!(Hosted);

#[allow(dead_code)]
#[derive(Debug)]
struct Plain;

#[test]
fn test_flattened_types_are_structural() {
    assert!(is_structural!(NonBlankTrimmedString));
    assert!(is_structural!(ClassName));
    assert!(is_structural!(Optional<String>));
    assert!(is_structural!(ResultOrError<i32>));
    assert!(is_structural!(PersistentSet<NonBlankTrimmedString>));
    assert!(is_structural!(Flattened));
}

#[test]
fn test_host_types_are_dynamic_but_not_structural() {
    assert!(!is_structural!(String));
    assert!(!is_structural!(i64));
    assert!(!is_structural!(Hosted));
    assert!(is_dynamic!(String));
    assert!(is_dynamic!(Hosted));
    assert!(is_dynamic!(Flattened));
}

#[test]
fn test_plain_types_are_neither() {
    assert!(!is_structural!(Plain));
    assert!(!is_dynamic!(Plain));
    assert!(!is_dynamic!(Vec<u8>));
}
