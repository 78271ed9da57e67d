//! Test NonBlankTrimmedString and ClassName as flattened values

use flatval::{ClassName, DispatchRegistry, Dynamic, Error, NonBlankTrimmedString, StructuralValue};

fn text(value: &str) -> NonBlankTrimmedString {
    NonBlankTrimmedString::new(value).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_input_is_trimmed() {
    assert_eq!(text("  xyz\t").as_str(), "xyz");
    assert_eq!(text("a b").as_str(), "a b");
}

#[test]
fn test_blank_input_is_rejected() {
    assert_eq!(NonBlankTrimmedString::new("").unwrap_err(), Error::BlankString);
    assert_eq!(NonBlankTrimmedString::new(" \n\t ").unwrap_err(), Error::BlankString);
    assert_eq!(NonBlankTrimmedString::try_from_nullable(None).unwrap_err(), Error::BlankString);
    assert_eq!(ClassName::new("   ").unwrap_err(), Error::BlankString);
}

#[test]
fn test_conversions() {
    let parsed: NonBlankTrimmedString = " parsed ".parse().unwrap();
    assert_eq!(&*parsed, "parsed");

    let converted = NonBlankTrimmedString::try_from(String::from("owned ")).unwrap();
    assert_eq!(converted.len(), 5);
    assert_eq!(String::from(converted), "owned");

    let class = ClassName::from(text("btn"));
    assert_eq!(class.as_str(), "btn");
}

// =============================================================================
// Equality across types
// =============================================================================

#[test]
fn test_same_value_is_equal_to_itself_and_to_a_copy() {
    let registry = DispatchRegistry::new();
    let x = text("xyz");
    let y = text("xyz");
    assert!(registry.are_equal(&x, &x));
    assert!(registry.are_equal(&x, &y));
    assert!(!registry.are_equal(&x, &text("xyzz")));
}

#[test]
fn test_class_name_is_never_equal_to_plain_text() {
    let registry = DispatchRegistry::new();
    let plain = text("xyz");
    let class = ClassName::new("xyz").unwrap();

    assert!(!registry.are_equal(&plain, &class));
    assert!(!registry.are_equal(&class, &plain));
    assert!(registry.are_equal(&class, &ClassName::new(" xyz").unwrap()));
}

#[test]
fn test_flattened_text_is_not_a_host_string() {
    let registry = DispatchRegistry::new();
    assert!(!registry.are_equal(&text("xyz"), &"xyz"));
    assert!(!registry.are_equal(&String::from("xyz"), &text("xyz")));
}

#[test]
fn test_string_forms() {
    let registry = DispatchRegistry::new();
    assert_eq!(registry.string_of(&text("xyz")), "xyz");
    assert_eq!(registry.string_of(&ClassName::new("btn-primary").unwrap()), "btn-primary");
    assert_eq!(registry.hash_of(&text("xyz")), registry.hash_of(&ClassName::new("xyz").unwrap()));
}

// =============================================================================
// Generic type parameters
// =============================================================================

#[derive(Clone, Debug, StructuralValue)]
#[structural(transparent)]
struct LangKey(i32);

struct TextBoxModel<K> {
    key: K,
}

impl<K: Dynamic> TextBoxModel<K> {
    fn test_value(&self, registry: &DispatchRegistry) -> String {
        registry.string_of(&self.key)
    }
}

#[test]
fn test_flattened_generic_parameter_converts_through_dispatch() {
    let registry = DispatchRegistry::new();
    let model = TextBoxModel { key: LangKey(1) };
    assert_eq!(model.test_value(&registry), "1");
}

// =============================================================================
// Map keys
// =============================================================================

#[cfg(feature = "global")]
#[test]
fn test_equal_values_find_the_same_map_entry() {
    use std::collections::HashMap;

    let mut lookup = HashMap::new();
    lookup.insert(text("xyz"), 123);

    assert!(lookup.contains_key(&text("xyz")));
    assert!(lookup.contains_key(&text(" xyz ")));
    assert!(!lookup.contains_key(&text("abc")));
}

#[cfg(feature = "global")]
#[test]
fn test_display_in_interpolation() {
    let value = text("xyz");
    assert_eq!(format!("{}", value), "xyz");
    assert_eq!(format!("<{}>", ClassName::new("btn").unwrap()), "<btn>");
    assert_eq!(String::new() + &value.to_string(), "xyz");
}
