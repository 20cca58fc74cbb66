//! Basic Variant usage example

use polyvariant::{visit, Monostate, Variant, Visit, VisitOutput};

type Value = Variant<(Monostate, i64, f64, String)>;

struct Describe;

impl VisitOutput for Describe {
    type Output = String;
}

impl<'a, T: std::fmt::Debug> Visit<&'a T> for Describe {
    fn visit(self, value: &'a T) -> String {
        format!("{value:?}")
    }
}

fn main() -> anyhow::Result<()> {
    println!("Variant Basic Usage Example");
    println!("===========================");

    let mut value = Value::default();
    println!("Default: index {} ({:?})", value.index(), value.alternative_name());

    // Assignment activates the alternative of the value's type
    value.set(42i64);
    println!("After set(42): index {}, payload {}", value.index(), value.get::<i64, _>()?);

    // Mismatched access is an error, not a crash
    match value.get::<String, _>() {
        Ok(text) => println!("  unexpected text {text}"),
        Err(err) => println!("  get::<String> failed: {err}"),
    }

    // Access by ordinal
    *value.emplace_at::<3>(String::from("hello")) += ", world";
    println!("After emplace_at::<3>: {}", value.get_at::<3>()?);

    // Visitation
    for v in [Value::new(1.5f64), Value::new(-7i64), value.clone()] {
        println!("  visit -> {}", visit(Describe, &v)?);
    }

    // Comparison orders by ordinal first
    let small = Value::new(1000i64);
    let large = Value::new(0.0f64);
    println!("1000i64 < 0.0f64 as variants: {}", small < large);

    Ok(())
}
