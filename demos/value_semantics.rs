// This example walks through structural dispatch on flattened values.
//
// Equality, hashing and string conversion go through a DispatchRegistry.
// Types opt in by implementing (or deriving) StructuralValue; everything
// else keeps host defaults.

use flatval::prelude::*;

#[derive(Clone, Debug, StructuralValue)]
struct Money {
    amount: i64,
    currency: NonBlankTrimmedString,
}

fn main() -> flatval::Result<()> {
    let registry = DispatchRegistry::new();

    // Two distinct instances with the same fields are equal
    let a = Money { amount: 5, currency: NonBlankTrimmedString::new("EUR")? };
    let b = Money { amount: 5, currency: NonBlankTrimmedString::new(" EUR ")? };
    println!("{} == {}: {}", registry.string_of(&a), registry.string_of(&b), registry.are_equal(&a, &b));

    // A present Optional matches its bare payload from either side
    let name = NonBlankTrimmedString::new("test")?;
    let wrapped = Optional::present(name.clone());
    println!("Present(test) == test: {}", registry.are_equal(&wrapped, &name));
    println!("test == Present(test): {}", registry.are_equal(&name, &wrapped));

    // ...but never a ResultOrError carrying the same value
    let outcome = ResultOrError::from_result(name);
    println!("Present(test) == Result(test): {}", registry.are_equal(&wrapped, &outcome));

    // Persistent sets share structure and return themselves when unchanged
    let set = PersistentSet::empty().insert("a").insert("b");
    let same = set.remove(|value| *value == "z");
    println!("{} unchanged by remove: {}", registry.string_of(&set), same.ptr_eq(&set));

    println!(
        "resolved {} types with {} probes",
        registry.cache().len(),
        registry.cache().probe_count()
    );
    Ok(())
}
