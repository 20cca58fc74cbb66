//! Visitation: calling a visitor with the active alternative(s) unwrapped.
//!
//! A visitor names its result once through [`VisitOutput`] and implements
//! [`Visit`] once per argument shape it accepts. Rust has no generic
//! closures, so the usual way to accept every alternative is a single
//! generic impl:
//!
//! ```rust
//! use polyvariant::{visit, Variant, Visit, VisitOutput};
//!
//! struct Stringify;
//!
//! impl VisitOutput for Stringify {
//!     type Output = String;
//! }
//!
//! impl<'a, T: ToString> Visit<&'a T> for Stringify {
//!     fn visit(self, value: &'a T) -> String {
//!         value.to_string()
//!     }
//! }
//!
//! let v = Variant::<(i32, String)>::new(42i32);
//! assert_eq!(visit(Stringify, &v).as_deref(), Ok("42"));
//! ```
//!
//! Several variants are visited with [`visit!`](crate::visit!) or
//! [`visit_all`]; the visitor then receives a tuple of references, one per
//! variant, in order. Dispatch proceeds variant by variant through
//! [`partial::Partial`], which binds the arguments resolved so far.

mod accept;
pub mod partial;

pub use accept::{Accept, AcceptMut};
pub use partial::{Partial, Push, Resolve};

use crate::error::BadVariantAccess;
use crate::list::TypeList;
use crate::Variant;

/// The result type of a visitor, shared by every argument shape it accepts.
pub trait VisitOutput {
    /// What the visitor produces.
    type Output;
}

/// A visitor accepting `Args`.
///
/// `Args` is `&T` (or `&mut T`) for single-variant visits and a tuple of
/// references for multi-variant visits.
pub trait Visit<Args>: VisitOutput {
    /// Consumes the visitor with the unwrapped argument(s).
    fn visit(self, args: Args) -> Self::Output;
}

/// Calls `visitor` with the active alternative of `variant`.
///
/// # Errors
/// Returns [`BadVariantAccess`] without calling the visitor when `variant`
/// is valueless.
#[inline]
pub fn visit<'a, V, L>(visitor: V, variant: &'a Variant<L>) -> Result<V::Output, BadVariantAccess>
where
    V: VisitOutput,
    L: Accept<'a, V>,
{
    L::accept(variant.storage(), visitor)
}

/// Calls `visitor` with the active alternative of `variant`, mutably.
///
/// # Errors
/// Returns [`BadVariantAccess`] without calling the visitor when `variant`
/// is valueless.
#[inline]
pub fn visit_mut<'a, V, L>(visitor: V, variant: &'a mut Variant<L>) -> Result<V::Output, BadVariantAccess>
where
    V: VisitOutput,
    L: AcceptMut<'a, V>,
{
    L::accept_mut(variant.storage_mut(), visitor)
}

/// Calls `visitor` with the active alternatives of a chain of variants.
///
/// `variants` is a cons chain `(&a, (&b, (&c, ())))`; the [`visit!`](crate::visit!)
/// macro builds it. The visitor receives `(&A, &B, &C)`.
///
/// # Errors
/// Returns [`BadVariantAccess`] without calling the visitor when any variant
/// is valueless.
#[inline]
pub fn visit_all<'a, V, Vs>(visitor: V, variants: Vs) -> Result<V::Output, BadVariantAccess>
where
    V: VisitOutput,
    Vs: Resolve<'a, V, ()>,
{
    variants.resolve(visitor, ())
}

impl<L: TypeList> Variant<L> {
    /// Calls `visitor` with the active alternative. See [`visit()`].
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] when the variant is valueless.
    #[inline]
    pub fn visit<'a, V>(&'a self, visitor: V) -> Result<V::Output, BadVariantAccess>
    where
        V: VisitOutput,
        L: Accept<'a, V>,
    {
        visit(visitor, self)
    }

    /// Calls `visitor` with the active alternative, mutably. See
    /// [`visit_mut()`].
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] when the variant is valueless.
    #[inline]
    pub fn visit_mut<'a, V>(&'a mut self, visitor: V) -> Result<V::Output, BadVariantAccess>
    where
        V: VisitOutput,
        L: AcceptMut<'a, V>,
    {
        visit_mut(visitor, self)
    }
}

/// Visits one or more variants.
///
/// With one variant the visitor gets `&T`; with several it gets a tuple of
/// references in argument order.
///
/// ```rust
/// use polyvariant::{visit, Variant, Visit, VisitOutput};
///
/// struct Sum;
///
/// impl VisitOutput for Sum {
///     type Output = f64;
/// }
///
/// impl<'a, A: Copy + Into<f64>, B: Copy + Into<f64>> Visit<(&'a A, &'a B)> for Sum {
///     fn visit(self, (a, b): (&'a A, &'a B)) -> f64 {
///         (*a).into() + (*b).into()
///     }
/// }
///
/// let x = Variant::<(i32, f32)>::new(2i32);
/// let y = Variant::<(u8, f64)>::new(0.5f64);
/// assert_eq!(visit!(Sum, &x, &y), Ok(2.5));
/// ```
#[macro_export]
macro_rules! visit {
    ($visitor:expr, $variant:expr $(,)?) => {
        $crate::visit::visit($visitor, $variant)
    };
    ($visitor:expr, $($variant:expr),+ $(,)?) => {
        $crate::visit::visit_all($visitor, $crate::__visit_chain!($($variant),+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __visit_chain {
    () => {
        ()
    };
    ($head:expr $(, $tail:expr)*) => {
        ($head, $crate::__visit_chain!($($tail),*))
    };
}
