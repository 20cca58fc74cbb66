//! Type-list utilities over the ordered alternative tuple.
//!
//! The layer is stratified the same way as the rest of the crate:
//! - [`TypeList`] is the minimal per-tuple surface (count, layout, storage).
//! - [`AlternativeAt`] maps an ordinal to its type.
//! - [`Member`] maps a type to its ordinal, resolved by inference.
//! - [`ops`] holds the capability traits (clone, compare, hash, format) that
//!   perform the ordinal switch for the container layer above.
//!
//! Everything here is generated per arity from one table, see `tuples`.

pub mod ops;
mod tuples;

pub use tuples::{
    Storage1, Storage2, Storage3, Storage4, Storage5, Storage6, Storage7,
};
#[cfg(feature = "wide")]
pub use tuples::{Storage10, Storage11, Storage12, Storage8, Storage9};

/// The index reported for a variant that holds no alternative.
pub const VARIANT_NPOS: usize = usize::MAX;

/// Largest supported number of alternatives.
#[cfg(not(feature = "wide"))]
pub const MAX_ALTERNATIVES: usize = 7;
/// Largest supported number of alternatives.
#[cfg(feature = "wide")]
pub const MAX_ALTERNATIVES: usize = 12;

/// Largest number of variants a single multi-variant visit may take.
#[cfg(not(feature = "wide"))]
pub const MAX_VISIT_ARITY: usize = 4;
/// Largest number of variants a single multi-variant visit may take.
#[cfg(feature = "wide")]
pub const MAX_VISIT_ARITY: usize = 6;

/// Returns the largest value in `values`, or `0` for an empty slice.
pub const fn max_of(values: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < values.len() {
        if values[i] > max {
            max = values[i];
        }
        i += 1;
    }
    max
}

/// Position marker used to resolve [`Member`] by inference.
///
/// Callers never name it: write `_` in its place, e.g. `v.get::<String, _>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ix<const N: usize>;

/// An ordered, fixed-length list of alternative types.
///
/// Implemented for tuples of one up to [`MAX_ALTERNATIVES`] elements.
pub trait TypeList: Sized {
    /// Number of alternatives.
    const LEN: usize;
    /// Largest `size_of` among the alternatives.
    const MAX_SIZE: usize;
    /// Largest `align_of` among the alternatives.
    const MAX_ALIGN: usize;

    /// The storage block: one arm per alternative plus a valueless arm.
    type Storage;

    /// Returns the active ordinal, or [`VARIANT_NPOS`] when valueless.
    fn index(storage: &Self::Storage) -> usize;

    /// Returns the storage holding no alternative.
    fn valueless() -> Self::Storage;

    /// Returns the type name of the alternative at `ordinal`.
    fn alternative_name(ordinal: usize) -> Option<&'static str>;

    /// Move-assigns `src` into `dst`.
    ///
    /// When both hold the same alternative the payload is assigned in place;
    /// otherwise `dst` is replaced wholesale.
    fn assign(dst: &mut Self::Storage, src: Self::Storage);
}

/// The alternative at ordinal `N`.
///
/// Naming an ordinal past the end of the list is a compile error.
pub trait AlternativeAt<const N: usize>: TypeList {
    /// The alternative type.
    type Type;

    /// Wraps a value as storage with ordinal `N` active.
    fn wrap(value: Self::Type) -> Self::Storage;

    /// Borrows the payload when ordinal `N` is active.
    fn project(storage: &Self::Storage) -> Option<&Self::Type>;

    /// Mutably borrows the payload when ordinal `N` is active.
    fn project_mut(storage: &mut Self::Storage) -> Option<&mut Self::Type>;

    /// Moves the payload out when ordinal `N` is active, otherwise hands the
    /// storage back.
    fn extract(storage: Self::Storage) -> Result<Self::Type, Self::Storage>;

    /// Replaces whatever `storage` holds with `value` and borrows it.
    fn emplace(storage: &mut Self::Storage, value: Self::Type) -> &mut Self::Type;
}

/// `T` is an alternative of the list, at the position encoded by `I`.
///
/// `I` is always inferred. A type that is not in the list has no impl, and a
/// type that is in the list twice has two, which makes the use site ambiguous;
/// both are compile errors.
pub trait Member<T, I>: TypeList {
    /// Ordinal of `T`.
    const INDEX: usize;

    /// Wraps a value as storage with `T` active.
    fn wrap(value: T) -> Self::Storage;

    /// Borrows the payload when `T` is active.
    fn project(storage: &Self::Storage) -> Option<&T>;

    /// Mutably borrows the payload when `T` is active.
    fn project_mut(storage: &mut Self::Storage) -> Option<&mut T>;

    /// Moves the payload out when `T` is active.
    fn extract(storage: Self::Storage) -> Result<T, Self::Storage>;

    /// Replaces whatever `storage` holds with `value` and borrows it.
    fn emplace(storage: &mut Self::Storage, value: T) -> &mut T;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem;

    #[test]
    fn test_max_of() {
        assert_eq!(max_of(&[]), 0);
        assert_eq!(max_of(&[3]), 3);
        assert_eq!(max_of(&[1, 8, 2, 4]), 8);
    }

    #[test]
    fn test_layout_constants() {
        type L = (u8, u32, [u8; 13], u16);
        assert_eq!(L::LEN, 4);
        assert_eq!(L::MAX_SIZE, 13);
        assert_eq!(L::MAX_ALIGN, mem::align_of::<u32>());

        let storage = <L as AlternativeAt<2>>::wrap([7; 13]);
        assert!(mem::size_of_val(&storage) >= L::MAX_SIZE);
        assert!(mem::align_of_val(&storage) >= L::MAX_ALIGN);
    }

    #[test]
    fn test_member_resolves_ordinal() {
        type L = (char, i32, i64, String);
        assert_eq!(<L as Member<char, _>>::INDEX, 0);
        assert_eq!(<L as Member<i64, _>>::INDEX, 2);
        assert_eq!(<L as Member<String, _>>::INDEX, 3);
    }

    #[test]
    fn test_index_and_valueless() {
        type L = (u8, String);
        let s = <L as Member<String, _>>::wrap("x".to_owned());
        assert_eq!(L::index(&s), 1);
        assert_eq!(L::index(&L::valueless()), VARIANT_NPOS);
    }

    #[test]
    fn test_extract_hands_back_mismatch() {
        type L = (u8, String);
        let s = <L as AlternativeAt<0>>::wrap(9);
        let back = <L as AlternativeAt<1>>::extract(s).unwrap_err();
        assert_eq!(<L as AlternativeAt<0>>::extract(back).ok(), Some(9));
    }

    #[test]
    fn test_alternative_names() {
        type L = (u8, String);
        assert_eq!(L::alternative_name(0), Some("u8"));
        assert!(L::alternative_name(1).unwrap().ends_with("String"));
        assert_eq!(L::alternative_name(2), None);
    }

    #[test]
    fn test_assign_same_alternative_keeps_slot() {
        type L = (u8, Vec<u8>);
        let mut dst = <L as AlternativeAt<1>>::wrap(vec![1]);
        let before = <L as AlternativeAt<1>>::project(&dst).unwrap() as *const Vec<u8>;
        L::assign(&mut dst, <L as AlternativeAt<1>>::wrap(vec![2, 3]));
        let after = <L as AlternativeAt<1>>::project(&dst).unwrap();
        assert_eq!(after, &vec![2, 3]);
        assert_eq!(before, after as *const Vec<u8>);
    }

    #[test]
    fn test_emplace_from_every_state() {
        type L = (u8, String, Vec<u8>);
        let starts = [
            <L as AlternativeAt<0>>::wrap(1),
            <L as AlternativeAt<1>>::wrap("old".to_owned()),
            <L as AlternativeAt<2>>::wrap(vec![4]),
            L::valueless(),
        ];
        for mut storage in starts {
            let text = <L as AlternativeAt<1>>::emplace(&mut storage, "new".to_owned());
            text.push('!');
            assert_eq!(L::index(&storage), 1);
            assert_eq!(<L as AlternativeAt<1>>::project(&storage).map(String::as_str), Some("new!"));

            *<L as Member<u8, _>>::emplace(&mut storage, 5) += 1;
            assert_eq!(<L as AlternativeAt<0>>::project(&storage), Some(&6));
        }
    }
}
