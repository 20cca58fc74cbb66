#![cfg(feature = "wide")]

use num_traits::ToPrimitive;
use polyvariant::{visit, visit_all, BadVariantAccess, Variant, Visit, VisitOutput};
use std::panic::{self, AssertUnwindSafe};

type Twelve = Variant<(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, char, String)>;

/// Sums five or six numeric payloads.
struct Total;

impl VisitOutput for Total {
    type Output = f64;
}

impl<'a, A, B, C, D, E> Visit<(&'a A, &'a B, &'a C, &'a D, &'a E)> for Total
where
    A: ToPrimitive,
    B: ToPrimitive,
    C: ToPrimitive,
    D: ToPrimitive,
    E: ToPrimitive,
{
    fn visit(self, (a, b, c, d, e): (&'a A, &'a B, &'a C, &'a D, &'a E)) -> f64 {
        [a.to_f64(), b.to_f64(), c.to_f64(), d.to_f64(), e.to_f64()]
            .into_iter()
            .map(|x| x.unwrap_or(f64::NAN))
            .sum()
    }
}

impl<'a, A, B, C, D, E, F> Visit<(&'a A, &'a B, &'a C, &'a D, &'a E, &'a F)> for Total
where
    A: ToPrimitive,
    B: ToPrimitive,
    C: ToPrimitive,
    D: ToPrimitive,
    E: ToPrimitive,
    F: ToPrimitive,
{
    fn visit(self, (a, b, c, d, e, f): (&'a A, &'a B, &'a C, &'a D, &'a E, &'a F)) -> f64 {
        [a.to_f64(), b.to_f64(), c.to_f64(), d.to_f64(), e.to_f64(), f.to_f64()]
            .into_iter()
            .map(|x| x.unwrap_or(f64::NAN))
            .sum()
    }
}

/// Names the active payload type.
struct Name;

impl VisitOutput for Name {
    type Output = &'static str;
}

impl<'a, T> Visit<&'a T> for Name {
    fn visit(self, _: &'a T) -> &'static str {
        core::any::type_name::<T>()
    }
}

type Small = Variant<(u8, i64)>;

#[test]
fn test_twelve_alternatives() {
    assert_eq!(polyvariant::MAX_ALTERNATIVES, 12);
    assert_eq!(polyvariant::variant_size::<Twelve>(), 12);

    let text = Twelve::new(String::from("last"));
    assert_eq!(text.index(), 11);
    assert_eq!(text.get_at::<11>().map(String::as_str), Ok("last"));
    assert_eq!(text.get_at::<0>(), Err(BadVariantAccess));
    assert_eq!(visit(Name, &text), Ok(core::any::type_name::<String>()));

    let letter = Twelve::new('z');
    assert_eq!(letter.index(), 10);
    assert!(letter < text);
    assert!(Twelve::new(1.5f64) < letter);
    assert_eq!(Twelve::new(3u64), Twelve::new(3u64));
    assert_ne!(Twelve::new(3u64), Twelve::new(3i64));
}

#[test]
fn test_twelve_alternatives_valueless() {
    let mut v = Twelve::new(0u8);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        v.emplace_with::<String, _>(|| panic!("no text"));
    }));
    assert!(result.is_err());
    assert!(v.valueless_by_exception());
    assert_eq!(v.get_at::<11>(), Err(BadVariantAccess));
    assert_eq!(visit(Name, &v), Err(BadVariantAccess));

    v.emplace_at::<11>(String::from("back"));
    assert_eq!(v.index(), 11);
}

#[test]
fn test_five_variant_visit() {
    let (a, b, c, d, e) = (Small::new(1u8), Small::new(2i64), Small::new(3u8), Small::new(4i64), Small::new(5u8));
    assert_eq!(polyvariant::visit!(Total, &a, &b, &c, &d, &e), Ok(15.0));
}

#[test]
fn test_six_variant_visit() {
    assert_eq!(polyvariant::MAX_VISIT_ARITY, 6);
    let (a, b, c, d, e) = (Small::new(1u8), Small::new(2i64), Small::new(3u8), Small::new(4i64), Small::new(5u8));
    let out = visit_all(Total, (&a, (&b, (&c, (&d, (&e, (&Small::new(10i64), ())))))));
    assert_eq!(out, Ok(25.0));
    assert_eq!(polyvariant::visit!(Total, &e, &d, &c, &b, &a, &Small::new(-15i64)), Ok(0.0));
}
