//! Per-arity storage enums and the core list impls.

use core::any::type_name;
use core::mem::{align_of, size_of};

use super::{max_of, AlternativeAt, Ix, Member, TypeList, VARIANT_NPOS};

macro_rules! impl_positions {
    ($storage:ident, [$($all:ident),+];) => {};
    (
        $storage:ident, [$($all:ident),+];
        ($n:literal, $alt:ident, $t:ident) $(, $rest:tt)*
    ) => {
        impl<$($all),+> AlternativeAt<$n> for ($($all,)+) {
            type Type = $t;

            #[inline]
            fn wrap(value: $t) -> Self::Storage {
                $storage::$alt(value)
            }

            #[inline]
            fn project(storage: &Self::Storage) -> Option<&$t> {
                match storage {
                    $storage::$alt(value) => Some(value),
                    _ => None,
                }
            }

            #[inline]
            fn project_mut(storage: &mut Self::Storage) -> Option<&mut $t> {
                match storage {
                    $storage::$alt(value) => Some(value),
                    _ => None,
                }
            }

            #[inline]
            fn extract(storage: Self::Storage) -> Result<$t, Self::Storage> {
                match storage {
                    $storage::$alt(value) => Ok(value),
                    other => Err(other),
                }
            }

            #[inline]
            fn emplace(storage: &mut Self::Storage, value: $t) -> &mut $t {
                *storage = $storage::$alt(value);
                match storage {
                    $storage::$alt(value) => value,
                    // SAFETY: the line above wrote this arm.
                    _ => unsafe { core::hint::unreachable_unchecked() },
                }
            }
        }

        impl<$($all),+> Member<$t, Ix<$n>> for ($($all,)+) {
            const INDEX: usize = $n;

            #[inline]
            fn wrap(value: $t) -> Self::Storage {
                <Self as AlternativeAt<$n>>::wrap(value)
            }

            #[inline]
            fn project(storage: &Self::Storage) -> Option<&$t> {
                <Self as AlternativeAt<$n>>::project(storage)
            }

            #[inline]
            fn project_mut(storage: &mut Self::Storage) -> Option<&mut $t> {
                <Self as AlternativeAt<$n>>::project_mut(storage)
            }

            #[inline]
            fn extract(storage: Self::Storage) -> Result<$t, Self::Storage> {
                <Self as AlternativeAt<$n>>::extract(storage)
            }

            #[inline]
            fn emplace(storage: &mut Self::Storage, value: $t) -> &mut $t {
                <Self as AlternativeAt<$n>>::emplace(storage, value)
            }
        }

        impl_positions!($storage, [$($all),+]; $($rest),*);
    };
}

macro_rules! impl_list {
    ($len:literal, $storage:ident, [$($all:ident),+], [$(($n:literal, $alt:ident, $t:ident)),+]) => {
        #[doc = concat!("Storage block for ", stringify!($len), " alternatives.")]
        ///
        /// Exactly one arm is live at a time; `Valueless` means none is.
        pub enum $storage<$($all),+> {
            $(
                #[doc = concat!("Alternative ", stringify!($n), " is live.")]
                $alt($t),
            )+
            /// No alternative is live.
            Valueless,
        }

        impl<$($all),+> TypeList for ($($all,)+) {
            const LEN: usize = $len;
            const MAX_SIZE: usize = max_of(&[$(size_of::<$t>()),+]);
            const MAX_ALIGN: usize = max_of(&[$(align_of::<$t>()),+]);

            type Storage = $storage<$($all),+>;

            #[inline]
            fn index(storage: &Self::Storage) -> usize {
                match storage {
                    $($storage::$alt(_) => $n,)+
                    $storage::Valueless => VARIANT_NPOS,
                }
            }

            #[inline]
            fn valueless() -> Self::Storage {
                $storage::Valueless
            }

            fn alternative_name(ordinal: usize) -> Option<&'static str> {
                match ordinal {
                    $($n => Some(type_name::<$t>()),)+
                    _ => None,
                }
            }

            #[inline]
            fn assign(dst: &mut Self::Storage, src: Self::Storage) {
                match (dst, src) {
                    $(($storage::$alt(d), $storage::$alt(s)) => *d = s,)+
                    (dst, src) => *dst = src,
                }
            }
        }

        impl_positions!($storage, [$($all),+]; $(($n, $alt, $t)),+);
    };
}

for_each_arity!(impl_list);
