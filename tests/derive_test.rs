//! Test #[derive(StructuralValue)] on named, tuple, unit and generic structs

use flatval::{DispatchRegistry, NonBlankTrimmedString, Optional, StructuralValue};

fn text(value: &str) -> NonBlankTrimmedString {
    NonBlankTrimmedString::new(value).unwrap()
}

#[derive(Clone, Debug, StructuralValue)]
struct Money {
    amount: i64,
    currency: NonBlankTrimmedString,
}

#[derive(Clone, Debug, StructuralValue)]
struct Point(i32, i32);

#[derive(Clone, Debug, StructuralValue)]
struct Marker;

#[derive(Clone, Debug, StructuralValue)]
struct Celsius {
    degrees: i32,
}

#[derive(Clone, Debug, StructuralValue)]
struct Fahrenheit {
    degrees: i32,
}

#[derive(Clone, Debug, StructuralValue)]
struct Pair<A, B> {
    left: A,
    right: B,
}

#[derive(Clone, Debug, StructuralValue)]
struct Tag {
    r#type: NonBlankTrimmedString,
}

fn money(amount: i64, currency: &str) -> Money {
    Money {
        amount,
        currency: text(currency),
    }
}

#[test]
fn test_named_struct_compares_field_by_field() {
    let registry = DispatchRegistry::new();
    assert!(registry.are_equal(&money(5, "EUR"), &money(5, " EUR")));
    assert!(!registry.are_equal(&money(5, "EUR"), &money(6, "EUR")));
    assert!(!registry.are_equal(&money(5, "EUR"), &money(5, "USD")));
    assert_eq!(registry.hash_of(&money(5, "EUR")), registry.hash_of(&money(5, "EUR ")));
}

#[test]
fn test_string_forms() {
    let registry = DispatchRegistry::new();
    assert_eq!(registry.string_of(&money(5, "EUR")), "Money { amount: 5, currency: EUR }");
    assert_eq!(registry.string_of(&Point(1, 2)), "Point(1, 2)");
    assert_eq!(registry.string_of(&Marker), "Marker");
    assert_eq!(registry.string_of(&Tag { r#type: text("x") }), "Tag { type: x }");
}

#[test]
fn test_unit_structs_are_all_equal() {
    let registry = DispatchRegistry::new();
    assert!(registry.are_equal(&Marker, &Marker));
    assert_eq!(registry.hash_of(&Marker), registry.hash_of(&Marker));
}

#[test]
fn test_same_fields_on_different_types_are_not_equal() {
    let registry = DispatchRegistry::new();
    let c = Celsius { degrees: 10 };
    let f = Fahrenheit { degrees: 10 };
    assert!(!registry.are_equal(&c, &f));
    assert!(!registry.are_equal(&f, &c));
    assert_ne!(registry.hash_of(&c), registry.hash_of(&f));
}

#[test]
fn test_generic_instantiations_are_distinct_types() {
    let registry = DispatchRegistry::new();
    let a = Pair { left: 1, right: text("r") };
    let b = Pair { left: 1, right: text("r") };
    let c = Pair { left: 1, right: "r" };

    assert!(registry.are_equal(&a, &b));
    assert!(!registry.are_equal(&a, &c));
    assert_eq!(registry.string_of(&c), "Pair { left: 1, right: r }");
}

#[test]
fn test_derived_values_nest_inside_containers() {
    let registry = DispatchRegistry::new();
    let a = Optional::present(Pair {
        left: money(1, "EUR"),
        right: Optional::present(Point(0, 0)),
    });
    let b = Optional::present(Pair {
        left: money(1, "EUR"),
        right: Optional::present(Point(0, 0)),
    });
    assert!(registry.are_equal(&a, &b));
    assert_eq!(registry.hash_of(&a), registry.hash_of(&b));
}

#[cfg(feature = "global")]
flatval::impl_std_via_dispatch!(Money);
#[cfg(feature = "global")]
flatval::impl_std_via_dispatch!(impl<A, B> Pair<A, B>);

#[cfg(feature = "global")]
#[test]
fn test_std_traits_bridge_derived_types() {
    use std::collections::HashSet;

    assert_eq!(money(5, "EUR"), money(5, " EUR "));
    assert_ne!(money(5, "EUR"), money(6, "EUR"));
    assert_eq!(money(5, "EUR").to_string(), "Money { amount: 5, currency: EUR }");

    let pairs: HashSet<Pair<i32, NonBlankTrimmedString>> = [
        Pair { left: 1, right: text("r") },
        Pair { left: 1, right: text("r ") },
        Pair { left: 2, right: text("r") },
    ]
    .into_iter()
    .collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(format!("{}", Pair { left: 1, right: "r" }), "Pair { left: 1, right: r }");
}
