//! `Variant`, a tagged union over a fixed list of alternative types.
//!
//! The container owns one storage block (see [`crate::list`]) and nothing
//! else: the active ordinal is the storage arm. All writes go through a small
//! state machine whose only failure point is the construction of a new
//! alternative after the old one was dropped. When that construction panics
//! the variant is left valueless and the panic continues to the caller; the
//! old value is not restored.
//!
//! Access is split across submodules:
//! - `access`: typed borrows by type or ordinal.
//! - `relations`: equality, ordering, hashing and formatting.
//! - `free`: the free-function surface and compile-time queries.

mod access;
pub mod free;
mod relations;
#[cfg(feature = "serde")]
mod serde_impl;

use core::mem::{self, align_of, size_of};

use crate::list::ops::ListClone;
use crate::list::{AlternativeAt, Member, TypeList, VARIANT_NPOS};

#[cfg(feature = "serde")]
pub use serde_impl::{ListDeserialize, ListSerialize};

/// A value that is exactly one of the alternatives in `L`, or valueless.
///
/// `L` is a tuple of alternative types, e.g. `Variant<(char, i32, String)>`.
///
/// # Example
///
/// ```rust
/// use polyvariant::Variant;
///
/// let mut v = Variant::<(i32, String)>::new(7i32);
/// assert_eq!(v.index(), 0);
///
/// v.set(String::from("hello"));
/// assert_eq!(v.index(), 1);
/// assert_eq!(v.get::<String, _>().map(String::as_str), Ok("hello"));
/// assert!(v.get::<i32, _>().is_err());
/// ```
pub struct Variant<L: TypeList> {
    storage: L::Storage,
}

impl<L: TypeList> Variant<L> {
    #[inline]
    fn from_storage(storage: L::Storage) -> Self {
        const {
            assert!(size_of::<L::Storage>() >= L::MAX_SIZE);
            assert!(align_of::<L::Storage>() >= L::MAX_ALIGN);
        }
        Self { storage }
    }

    /// Creates a variant holding `value`, activating the alternative of its type.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        L: Member<T, I>,
    {
        Self::from_storage(<L as Member<T, I>>::wrap(value))
    }

    /// Creates a variant holding `value` as alternative `N`.
    ///
    /// Unlike [`Variant::new`] this works when the list repeats a type.
    #[inline]
    pub fn new_at<const N: usize>(value: <L as AlternativeAt<N>>::Type) -> Self
    where
        L: AlternativeAt<N>,
    {
        Self::from_storage(<L as AlternativeAt<N>>::wrap(value))
    }

    /// Creates a variant holding alternative `T` converted from `value`.
    #[inline]
    pub fn new_from<T, I>(value: impl Into<T>) -> Self
    where
        L: Member<T, I>,
    {
        Self::new::<T, I>(value.into())
    }

    /// Constructs alternative `T` directly from `make`.
    #[inline]
    pub fn in_place_type<T, I>(make: impl FnOnce() -> T) -> Self
    where
        L: Member<T, I>,
    {
        Self::from_storage(<L as Member<T, I>>::wrap(make()))
    }

    /// Constructs alternative `N` directly from `make`.
    #[inline]
    pub fn in_place_index<const N: usize>(make: impl FnOnce() -> <L as AlternativeAt<N>>::Type) -> Self
    where
        L: AlternativeAt<N>,
    {
        Self::from_storage(<L as AlternativeAt<N>>::wrap(make()))
    }

    /// Returns the active ordinal, or [`VARIANT_NPOS`] when valueless.
    #[inline]
    pub fn index(&self) -> usize {
        L::index(&self.storage)
    }

    /// Returns the active ordinal, or `None` when valueless.
    #[inline]
    pub fn try_index(&self) -> Option<usize> {
        match self.index() {
            VARIANT_NPOS => None,
            index => Some(index),
        }
    }

    /// Returns `true` if no alternative is live.
    ///
    /// Only a panicking construction during a write leaves a variant in this
    /// state; the next successful write leaves it again.
    #[inline]
    pub fn valueless_by_exception(&self) -> bool {
        self.index() == VARIANT_NPOS
    }

    /// Type name of the active alternative.
    pub fn alternative_name(&self) -> Option<&'static str> {
        L::alternative_name(self.index())
    }

    /// Drops the active alternative, leaving the variant valueless.
    #[inline]
    fn release(&mut self) {
        if !self.valueless_by_exception() {
            trace_transition!(from = self.index(), "variant: releasing active alternative");
            self.storage = L::valueless();
        }
    }

    /// Move-assigns `source` into `self`.
    ///
    /// - both valueless: nothing happens;
    /// - `source` valueless: `self` drops its value and becomes valueless;
    /// - same alternative: the payload is assigned in place;
    /// - otherwise the old payload is dropped and the new one moved in.
    pub fn assign(&mut self, source: Self) {
        match (self.valueless_by_exception(), source.valueless_by_exception()) {
            (true, true) => {}
            (false, true) => self.release(),
            _ => {
                trace_transition!(from = self.index(), to = source.index(), "variant: move assignment");
                L::assign(&mut self.storage, source.storage);
            }
        }
    }

    /// Copy-assigns `source` into `self`; the state machine behind
    /// [`Clone::clone_from`].
    ///
    /// Same alternative: the payload's own `clone_from` runs in place.
    /// Otherwise `self` drops its value first, and a panicking clone leaves it
    /// valueless.
    pub fn assign_from(&mut self, source: &Self)
    where
        L: ListClone,
    {
        match (self.valueless_by_exception(), source.valueless_by_exception()) {
            (true, true) => {}
            (false, true) => self.release(),
            _ => {
                if L::clone_assign_same(&mut self.storage, &source.storage) {
                    return;
                }
                trace_transition!(from = self.index(), to = source.index(), "variant: cross-alternative copy");
                self.release();
                self.storage = L::clone_storage(&source.storage);
            }
        }
    }

    /// Assigns `value`, activating its alternative.
    ///
    /// If `T` is already active the payload is assigned in place, so it keeps
    /// its address.
    pub fn set<T, I>(&mut self, value: T)
    where
        L: Member<T, I>,
    {
        if let Some(slot) = <L as Member<T, I>>::project_mut(&mut self.storage) {
            *slot = value;
            return;
        }
        trace_transition!(from = self.index(), "variant: cross-alternative assignment");
        self.storage = <L as Member<T, I>>::wrap(value);
    }

    /// Assigns a clone of `value`, activating its alternative.
    ///
    /// If `T` is already active this is `clone_from` in place. Otherwise the
    /// old value is dropped first; should `T::clone` panic, the variant is
    /// left valueless.
    pub fn set_cloned<T, I>(&mut self, value: &T)
    where
        L: Member<T, I>,
        T: Clone,
    {
        if let Some(slot) = <L as Member<T, I>>::project_mut(&mut self.storage) {
            slot.clone_from(value);
            return;
        }
        self.release();
        self.storage = <L as Member<T, I>>::wrap(value.clone());
    }

    /// Replaces the current value with `value` and borrows it.
    pub fn emplace<T, I>(&mut self, value: T) -> &mut T
    where
        L: Member<T, I>,
    {
        self.release();
        <L as Member<T, I>>::emplace(&mut self.storage, value)
    }

    /// Drops the current value, then constructs alternative `T` from `make`.
    ///
    /// A panic in `make` leaves the variant valueless.
    pub fn emplace_with<T, I>(&mut self, make: impl FnOnce() -> T) -> &mut T
    where
        L: Member<T, I>,
    {
        self.release();
        let value = make();
        <L as Member<T, I>>::emplace(&mut self.storage, value)
    }

    /// Replaces the current value with alternative `N` and borrows it.
    pub fn emplace_at<const N: usize>(&mut self, value: <L as AlternativeAt<N>>::Type) -> &mut <L as AlternativeAt<N>>::Type
    where
        L: AlternativeAt<N>,
    {
        self.release();
        <L as AlternativeAt<N>>::emplace(&mut self.storage, value)
    }

    /// Drops the current value, then constructs alternative `N` from `make`.
    ///
    /// A panic in `make` leaves the variant valueless.
    pub fn emplace_at_with<const N: usize>(
        &mut self,
        make: impl FnOnce() -> <L as AlternativeAt<N>>::Type,
    ) -> &mut <L as AlternativeAt<N>>::Type
    where
        L: AlternativeAt<N>,
    {
        self.release();
        let value = make();
        <L as AlternativeAt<N>>::emplace(&mut self.storage, value)
    }

    /// Exchanges the contents of two variants.
    ///
    /// Two valueless variants are left alone. Otherwise the live objects
    /// trade places; a swap never makes either side valueless.
    pub fn swap(&mut self, other: &mut Self) {
        if self.valueless_by_exception() && other.valueless_by_exception() {
            return;
        }
        trace_transition!(left = self.index(), right = other.index(), "variant: swap");
        mem::swap(&mut self.storage, &mut other.storage);
    }

    /// Moves the payload out if `T` is active, otherwise returns the variant.
    pub fn into_alternative<T, I>(self) -> Result<T, Self>
    where
        L: Member<T, I>,
    {
        <L as Member<T, I>>::extract(self.storage).map_err(Self::from_storage)
    }

    /// Moves the payload out if alternative `N` is active, otherwise returns
    /// the variant.
    pub fn into_alternative_at<const N: usize>(self) -> Result<<L as AlternativeAt<N>>::Type, Self>
    where
        L: AlternativeAt<N>,
    {
        <L as AlternativeAt<N>>::extract(self.storage).map_err(Self::from_storage)
    }

    #[inline]
    pub(crate) fn storage(&self) -> &L::Storage {
        &self.storage
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut L::Storage {
        &mut self.storage
    }
}

impl<L> Default for Variant<L>
where
    L: AlternativeAt<0>,
    <L as AlternativeAt<0>>::Type: Default,
{
    /// Constructs alternative 0 with its `Default`.
    fn default() -> Self {
        Self::new_at::<0>(Default::default())
    }
}

impl<L: ListClone> Clone for Variant<L> {
    fn clone(&self) -> Self {
        Self::from_storage(L::clone_storage(&self.storage))
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    struct Brittle;

    impl Clone for Brittle {
        fn clone(&self) -> Self {
            panic!("Brittle::clone");
        }
    }

    fn make_valueless() -> Variant<(u8, Brittle)> {
        let mut v = Variant::<(u8, Brittle)>::new(1u8);
        let result = panic::catch_unwind(AssertUnwindSafe(|| v.set_cloned(&Brittle)));
        assert!(result.is_err());
        v
    }

    #[test]
    fn test_default_constructs_first_alternative() {
        let v = Variant::<(u32, String)>::default();
        assert_eq!(v.index(), 0);
        assert_eq!(v.try_index(), Some(0));
        assert!(!v.valueless_by_exception());
    }

    #[test]
    fn test_panicking_clone_leaves_valueless() {
        let v = make_valueless();
        assert!(v.valueless_by_exception());
        assert_eq!(v.index(), VARIANT_NPOS);
        assert_eq!(v.try_index(), None);
        assert_eq!(v.alternative_name(), None);
    }

    #[test]
    fn test_valueless_is_left_by_next_write() {
        let mut v = make_valueless();
        v.set(5u8);
        assert_eq!(v.index(), 0);

        let mut v = make_valueless();
        *v.emplace_at::<0>(0) += 2;
        assert_eq!(v.into_alternative::<u8, _>().ok(), Some(2));
    }

    #[test]
    fn test_assign_covers_all_cases() {
        let mut a = make_valueless();
        a.assign(make_valueless());
        assert!(a.valueless_by_exception());

        let mut b = Variant::<(u8, Brittle)>::new(3u8);
        b.assign(make_valueless());
        assert!(b.valueless_by_exception());

        b.assign(Variant::new(Brittle));
        assert_eq!(b.index(), 1);
        b.assign(Variant::new(9u8));
        assert_eq!(b.into_alternative_at::<0>().ok(), Some(9));
    }

    #[test]
    fn test_swap_valueless_with_live() {
        let mut a = make_valueless();
        let mut b = Variant::<(u8, Brittle)>::new(4u8);
        a.swap(&mut b);
        assert_eq!(a.index(), 0);
        assert!(b.valueless_by_exception());
    }

    #[test]
    fn test_emplace_with_panic_leaves_valueless() {
        let mut v = Variant::<(u8, String)>::new(String::from("kept?"));
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            v.emplace_with::<String, _>(|| panic!("constructor failed"));
        }));
        assert!(result.is_err());
        assert!(v.valueless_by_exception());
    }
}
