//! Free-function forms of the accessors and the compile-time queries.
//!
//! The `get_if*` functions take an optional reference so a missing variant
//! and a mismatched one are answered the same way.

use super::Variant;
use crate::error::BadVariantAccess;
use crate::list::{AlternativeAt, Member, TypeList};

/// Compile-time alternative count of a variant type.
pub trait VariantSize {
    /// Number of alternatives.
    const SIZE: usize;
}

impl<L: TypeList> VariantSize for Variant<L> {
    const SIZE: usize = L::LEN;
}

/// Returns the number of alternatives of the variant type `V`.
///
/// ```rust
/// use polyvariant::{variant_size, Variant};
///
/// const N: usize = variant_size::<Variant<(u8, char, String)>>();
/// assert_eq!(N, 3);
/// ```
pub const fn variant_size<V: VariantSize>() -> usize {
    V::SIZE
}

/// Compile-time lookup of the alternative type at ordinal `N`.
pub trait VariantAlternative<const N: usize> {
    /// The alternative type.
    type Type;
}

impl<L: AlternativeAt<N>, const N: usize> VariantAlternative<N> for Variant<L> {
    type Type = <L as AlternativeAt<N>>::Type;
}

/// The alternative type at ordinal `N` of the variant type `V`.
pub type VariantAlternativeT<V, const N: usize> = <V as VariantAlternative<N>>::Type;

/// Returns `true` if `T` is the active alternative of `v`.
#[inline]
pub fn holds_alternative<T, I, L>(v: &Variant<L>) -> bool
where
    L: Member<T, I>,
{
    v.holds_alternative::<T, I>()
}

/// Borrows the payload of `v` if `T` is active.
///
/// # Errors
/// Returns [`BadVariantAccess`] on mismatch or when `v` is valueless.
#[inline]
pub fn get<T, I, L>(v: &Variant<L>) -> Result<&T, BadVariantAccess>
where
    L: Member<T, I>,
{
    v.get::<T, I>()
}

/// Mutably borrows the payload of `v` if `T` is active.
///
/// # Errors
/// Returns [`BadVariantAccess`] on mismatch or when `v` is valueless.
#[inline]
pub fn get_mut<T, I, L>(v: &mut Variant<L>) -> Result<&mut T, BadVariantAccess>
where
    L: Member<T, I>,
{
    v.get_mut::<T, I>()
}

/// Borrows the payload of `v` if alternative `N` is active.
///
/// # Errors
/// Returns [`BadVariantAccess`] on mismatch or when `v` is valueless.
#[inline]
pub fn get_at<const N: usize, L>(v: &Variant<L>) -> Result<&<L as AlternativeAt<N>>::Type, BadVariantAccess>
where
    L: AlternativeAt<N>,
{
    v.get_at::<N>()
}

/// Mutably borrows the payload of `v` if alternative `N` is active.
///
/// # Errors
/// Returns [`BadVariantAccess`] on mismatch or when `v` is valueless.
#[inline]
pub fn get_at_mut<const N: usize, L>(
    v: &mut Variant<L>,
) -> Result<&mut <L as AlternativeAt<N>>::Type, BadVariantAccess>
where
    L: AlternativeAt<N>,
{
    v.get_at_mut::<N>()
}

/// Borrows the payload if `v` is present and `T` is active.
#[inline]
pub fn get_if<T, I, L>(v: Option<&Variant<L>>) -> Option<&T>
where
    L: Member<T, I>,
{
    v.and_then(Variant::get_if::<T, I>)
}

/// Mutably borrows the payload if `v` is present and `T` is active.
#[inline]
pub fn get_if_mut<T, I, L>(v: Option<&mut Variant<L>>) -> Option<&mut T>
where
    L: Member<T, I>,
{
    v.and_then(Variant::get_if_mut::<T, I>)
}

/// Borrows the payload if `v` is present and alternative `N` is active.
#[inline]
pub fn get_if_at<const N: usize, L>(v: Option<&Variant<L>>) -> Option<&<L as AlternativeAt<N>>::Type>
where
    L: AlternativeAt<N>,
{
    v.and_then(Variant::get_if_at::<N>)
}

/// Mutably borrows the payload if `v` is present and alternative `N` is
/// active.
#[inline]
pub fn get_if_at_mut<const N: usize, L>(v: Option<&mut Variant<L>>) -> Option<&mut <L as AlternativeAt<N>>::Type>
where
    L: AlternativeAt<N>,
{
    v.and_then(Variant::get_if_at_mut::<N>)
}

/// Exchanges the contents of `a` and `b`.
#[inline]
pub fn swap<L: TypeList>(a: &mut Variant<L>, b: &mut Variant<L>) {
    a.swap(b);
}
