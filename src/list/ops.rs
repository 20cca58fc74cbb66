//! Capability traits performing the ordinal switch for whole-list operations.
//!
//! A list implements a capability when every alternative does, e.g.
//! `(A, B): ListClone` iff `A: Clone, B: Clone`. The container layer then
//! implements the matching std trait for `Variant<L>` generically.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

#[allow(clippy::wildcard_imports)]
use super::tuples::*;
use super::{TypeList, VARIANT_NPOS};

/// Ordinal as an `Option`, so that valueless sorts before every live ordinal.
#[inline]
fn ordinal<L: TypeList>(storage: &L::Storage) -> Option<usize> {
    match L::index(storage) {
        VARIANT_NPOS => None,
        index => Some(index),
    }
}

/// Every alternative is `Clone`.
pub trait ListClone: TypeList {
    /// Clones the active alternative into fresh storage.
    fn clone_storage(storage: &Self::Storage) -> Self::Storage;

    /// Runs the alternative's own `clone_from` in place when `dst` and `src`
    /// hold the same alternative.
    ///
    /// Returns `false`, leaving `dst` untouched, when they differ or when both
    /// are valueless.
    fn clone_assign_same(dst: &mut Self::Storage, src: &Self::Storage) -> bool;
}

/// Every alternative is `PartialEq`.
pub trait ListPartialEq: TypeList {
    /// Same ordinal and, unless both are valueless, equal payloads.
    fn eq_storage(a: &Self::Storage, b: &Self::Storage) -> bool;
}

/// Every alternative is `Eq`.
pub trait ListEq: ListPartialEq {}

/// Every alternative is `PartialOrd`.
pub trait ListPartialOrd: ListPartialEq {
    /// Orders by ordinal first (valueless lowest), then by payload.
    fn partial_cmp_storage(a: &Self::Storage, b: &Self::Storage) -> Option<Ordering>;
}

/// Every alternative is `Ord`.
pub trait ListOrd: ListEq + ListPartialOrd {
    /// Total version of [`ListPartialOrd::partial_cmp_storage`].
    fn cmp_storage(a: &Self::Storage, b: &Self::Storage) -> Ordering;
}

/// Every alternative is `Hash`.
pub trait ListHash: TypeList {
    /// Feeds the ordinal (the sentinel when valueless) and then the payload.
    fn hash_storage<H: Hasher>(storage: &Self::Storage, state: &mut H);
}

/// Every alternative is `Debug`.
pub trait ListDebug: TypeList {
    /// Formats as `AltN(payload)` or `Valueless`.
    fn fmt_debug(storage: &Self::Storage, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Every alternative is `Display`.
pub trait ListDisplay: TypeList {
    /// Displays the payload, or `<valueless>`.
    fn fmt_display(storage: &Self::Storage, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_ops {
    ($len:literal, $storage:ident, [$($all:ident),+], [$(($n:literal, $alt:ident, $t:ident)),+]) => {
        impl<$($t: Clone),+> ListClone for ($($t,)+) {
            #[inline]
            fn clone_storage(storage: &Self::Storage) -> Self::Storage {
                match storage {
                    $($storage::$alt(value) => $storage::$alt(value.clone()),)+
                    $storage::Valueless => $storage::Valueless,
                }
            }

            #[inline]
            fn clone_assign_same(dst: &mut Self::Storage, src: &Self::Storage) -> bool {
                match (dst, src) {
                    $(
                        ($storage::$alt(d), $storage::$alt(s)) => {
                            d.clone_from(s);
                            true
                        }
                    )+
                    _ => false,
                }
            }
        }

        impl<$($t: PartialEq),+> ListPartialEq for ($($t,)+) {
            #[inline]
            fn eq_storage(a: &Self::Storage, b: &Self::Storage) -> bool {
                match (a, b) {
                    $(($storage::$alt(x), $storage::$alt(y)) => x == y,)+
                    ($storage::Valueless, $storage::Valueless) => true,
                    _ => false,
                }
            }
        }

        impl<$($t: Eq),+> ListEq for ($($t,)+) {}

        impl<$($t: PartialOrd),+> ListPartialOrd for ($($t,)+) {
            #[inline]
            fn partial_cmp_storage(a: &Self::Storage, b: &Self::Storage) -> Option<Ordering> {
                match (a, b) {
                    $(($storage::$alt(x), $storage::$alt(y)) => x.partial_cmp(y),)+
                    _ => Some(ordinal::<Self>(a).cmp(&ordinal::<Self>(b))),
                }
            }
        }

        impl<$($t: Ord),+> ListOrd for ($($t,)+) {
            #[inline]
            fn cmp_storage(a: &Self::Storage, b: &Self::Storage) -> Ordering {
                match (a, b) {
                    $(($storage::$alt(x), $storage::$alt(y)) => x.cmp(y),)+
                    _ => ordinal::<Self>(a).cmp(&ordinal::<Self>(b)),
                }
            }
        }

        impl<$($t: Hash),+> ListHash for ($($t,)+) {
            fn hash_storage<Hs: Hasher>(storage: &Self::Storage, state: &mut Hs) {
                Self::index(storage).hash(state);
                match storage {
                    $($storage::$alt(value) => value.hash(state),)+
                    $storage::Valueless => {}
                }
            }
        }

        impl<$($t: fmt::Debug),+> ListDebug for ($($t,)+) {
            fn fmt_debug(storage: &Self::Storage, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match storage {
                    $($storage::$alt(value) => f.debug_tuple(stringify!($alt)).field(value).finish(),)+
                    $storage::Valueless => f.write_str("Valueless"),
                }
            }
        }

        impl<$($t: fmt::Display),+> ListDisplay for ($($t,)+) {
            fn fmt_display(storage: &Self::Storage, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match storage {
                    $($storage::$alt(value) => fmt::Display::fmt(value, f),)+
                    $storage::Valueless => f.write_str("<valueless>"),
                }
            }
        }
    };
}

for_each_arity!(impl_ops);
