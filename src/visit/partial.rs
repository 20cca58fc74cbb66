//! Multi-variant dispatch, one variant at a time.
//!
//! A chain `(&v0, (&v1, ()))` is resolved by dispatching `v0` with a
//! [`Partial`] visitor. When `v0` yields `&T0`, the partial pushes it onto its
//! bound arguments and resolves the rest of the chain the same way. At the end
//! of the chain the real visitor is called with every bound argument.
//!
//! Every step reports `Result<V::Output, BadVariantAccess>`, where the output
//! type is fixed by the visitor, so a chain never grows nested output types.

use super::{Accept, Visit, VisitOutput};
use crate::error::BadVariantAccess;
use crate::list::TypeList;
use crate::Variant;

/// Appends `X` to a tuple.
pub trait Push<X> {
    /// The longer tuple.
    type Output;

    /// Returns `self` with `x` appended.
    fn push(self, x: X) -> Self::Output;
}

impl<X> Push<X> for () {
    type Output = (X,);

    #[inline]
    fn push(self, x: X) -> (X,) {
        (x,)
    }
}

macro_rules! impl_push {
    ($(($($t:ident . $i:tt),+))+) => {
        $(
            impl<$($t,)+ X> Push<X> for ($($t,)+) {
                type Output = ($($t,)+ X);

                #[inline]
                fn push(self, x: X) -> Self::Output {
                    ($(self.$i,)+ x)
                }
            }
        )+
    };
}

impl_push! {
    (A.0)
    (A.0, B.1)
    (A.0, B.1, C.2)
}

#[cfg(feature = "wide")]
impl_push! {
    (A.0, B.1, C.2, D.3)
    (A.0, B.1, C.2, D.3, E.4)
}

/// A visitor with some arguments already bound and part of the chain left.
pub struct Partial<V, Bound, Rest> {
    visitor: V,
    bound: Bound,
    rest: Rest,
}

impl<V: VisitOutput, Bound, Rest> VisitOutput for Partial<V, Bound, Rest> {
    type Output = Result<V::Output, BadVariantAccess>;
}

impl<'a, X, V, Bound, Rest> Visit<&'a X> for Partial<V, Bound, Rest>
where
    V: VisitOutput,
    Bound: Push<&'a X>,
    Rest: Resolve<'a, V, <Bound as Push<&'a X>>::Output>,
{
    #[inline]
    fn visit(self, value: &'a X) -> Self::Output {
        self.rest.resolve(self.visitor, self.bound.push(value))
    }
}

/// A chain of variant references that can be resolved for visitor `V`,
/// given the arguments `Bound` so far.
pub trait Resolve<'a, V: VisitOutput, Bound> {
    /// Dispatches every remaining variant, then calls the visitor.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] as soon as a valueless variant is found.
    fn resolve(self, visitor: V, bound: Bound) -> Result<V::Output, BadVariantAccess>;
}

impl<'a, V, Bound> Resolve<'a, V, Bound> for ()
where
    V: Visit<Bound>,
{
    #[inline]
    fn resolve(self, visitor: V, bound: Bound) -> Result<V::Output, BadVariantAccess> {
        Ok(<V as Visit<Bound>>::visit(visitor, bound))
    }
}

impl<'a, L, Rest, V, Bound> Resolve<'a, V, Bound> for (&'a Variant<L>, Rest)
where
    V: VisitOutput,
    L: TypeList + Accept<'a, Partial<V, Bound, Rest>>,
{
    #[inline]
    fn resolve(self, visitor: V, bound: Bound) -> Result<V::Output, BadVariantAccess> {
        let (head, rest) = self;
        L::accept(head.storage(), Partial { visitor, bound, rest }).and_then(core::convert::identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::visit_all;

    struct Describe;

    impl VisitOutput for Describe {
        type Output = String;
    }

    impl<'a, A: core::fmt::Debug, B: core::fmt::Debug, C: core::fmt::Debug> Visit<(&'a A, &'a B, &'a C)> for Describe {
        fn visit(self, (a, b, c): (&'a A, &'a B, &'a C)) -> String {
            format!("{a:?}/{b:?}/{c:?}")
        }
    }

    #[test]
    fn test_push_appends() {
        assert_eq!(().push(1), (1,));
        assert_eq!((1,).push('x'), (1, 'x'));
        assert_eq!((1, 'x').push("s"), (1, 'x', "s"));
    }

    #[test]
    fn test_three_variants_in_order() {
        let a = Variant::<(u8, char)>::new('a');
        let b = Variant::<(bool, i32)>::new(true);
        let c = Variant::<(&str, u8)>::new(9u8);
        let out = visit_all(Describe, (&a, (&b, (&c, ()))));
        assert_eq!(out.as_deref(), Ok("'a'/true/9"));
    }

    #[test]
    fn test_stops_at_valueless() {
        let a = Variant::<(u8, char)>::new(1u8);
        let mut b = Variant::<(bool, i32)>::new(2i32);
        let c = Variant::<(&str, u8)>::new("c");
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            b.emplace_with::<bool, _>(|| panic!("constructor failed"));
        }));
        assert!(caught.is_err());
        assert_eq!(visit_all(Describe, (&a, (&b, (&c, ())))), Err(BadVariantAccess));
    }
}
