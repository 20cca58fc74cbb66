//! Typed borrows of the active alternative, by type or by ordinal.

use super::Variant;
use crate::error::BadVariantAccess;
use crate::list::{AlternativeAt, Member, TypeList};

impl<L: TypeList> Variant<L> {
    /// Returns `true` if `T` is the active alternative.
    #[inline]
    pub fn holds_alternative<T, I>(&self) -> bool
    where
        L: Member<T, I>,
    {
        self.index() == <L as Member<T, I>>::INDEX
    }

    /// Borrows the payload if `T` is active.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if another alternative is active or the
    /// variant is valueless.
    #[inline]
    pub fn get<T, I>(&self) -> Result<&T, BadVariantAccess>
    where
        L: Member<T, I>,
    {
        self.get_if::<T, I>().ok_or(BadVariantAccess)
    }

    /// Mutably borrows the payload if `T` is active.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if another alternative is active or the
    /// variant is valueless.
    #[inline]
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, BadVariantAccess>
    where
        L: Member<T, I>,
    {
        self.get_if_mut::<T, I>().ok_or(BadVariantAccess)
    }

    /// Borrows the payload if alternative `N` is active.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if another alternative is active or the
    /// variant is valueless.
    #[inline]
    pub fn get_at<const N: usize>(&self) -> Result<&<L as AlternativeAt<N>>::Type, BadVariantAccess>
    where
        L: AlternativeAt<N>,
    {
        self.get_if_at::<N>().ok_or(BadVariantAccess)
    }

    /// Mutably borrows the payload if alternative `N` is active.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] if another alternative is active or the
    /// variant is valueless.
    #[inline]
    pub fn get_at_mut<const N: usize>(&mut self) -> Result<&mut <L as AlternativeAt<N>>::Type, BadVariantAccess>
    where
        L: AlternativeAt<N>,
    {
        self.get_if_at_mut::<N>().ok_or(BadVariantAccess)
    }

    /// Borrows the payload if `T` is active; `None` otherwise.
    #[inline]
    pub fn get_if<T, I>(&self) -> Option<&T>
    where
        L: Member<T, I>,
    {
        <L as Member<T, I>>::project(self.storage())
    }

    /// Mutably borrows the payload if `T` is active; `None` otherwise.
    #[inline]
    pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Member<T, I>,
    {
        <L as Member<T, I>>::project_mut(self.storage_mut())
    }

    /// Borrows the payload if alternative `N` is active; `None` otherwise.
    #[inline]
    pub fn get_if_at<const N: usize>(&self) -> Option<&<L as AlternativeAt<N>>::Type>
    where
        L: AlternativeAt<N>,
    {
        <L as AlternativeAt<N>>::project(self.storage())
    }

    /// Mutably borrows the payload if alternative `N` is active; `None`
    /// otherwise.
    #[inline]
    pub fn get_if_at_mut<const N: usize>(&mut self) -> Option<&mut <L as AlternativeAt<N>>::Type>
    where
        L: AlternativeAt<N>,
    {
        <L as AlternativeAt<N>>::project_mut(self.storage_mut())
    }
}
