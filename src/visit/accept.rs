//! The ordinal switch behind visitation.

use super::{Visit, VisitOutput};
use crate::error::BadVariantAccess;
use crate::list::TypeList;

/// The list can dispatch `V` on a shared borrow of its active alternative.
///
/// Implemented for a tuple `(A, B, ..)` when `V: Visit<&A> + Visit<&B> + ..`.
pub trait Accept<'a, V: VisitOutput>: TypeList {
    /// Calls `visitor` with the active payload.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] for a valueless storage.
    fn accept(storage: &'a Self::Storage, visitor: V) -> Result<V::Output, BadVariantAccess>;
}

/// The list can dispatch `V` on a mutable borrow of its active alternative.
pub trait AcceptMut<'a, V: VisitOutput>: TypeList {
    /// Calls `visitor` with the active payload.
    ///
    /// # Errors
    /// Returns [`BadVariantAccess`] for a valueless storage.
    fn accept_mut(storage: &'a mut Self::Storage, visitor: V) -> Result<V::Output, BadVariantAccess>;
}

macro_rules! impl_accept {
    ($len:literal, $storage:ident, [$($all:ident),+], [$(($n:literal, $alt:ident, $t:ident)),+]) => {
        impl<'a, Vis, $($t: 'a),+> Accept<'a, Vis> for ($($t,)+)
        where
            Vis: VisitOutput $(+ Visit<&'a $t>)+,
        {
            #[inline]
            fn accept(storage: &'a Self::Storage, visitor: Vis) -> Result<Vis::Output, BadVariantAccess> {
                match storage {
                    $($crate::list::$storage::$alt(value) => Ok(<Vis as Visit<&'a $t>>::visit(visitor, value)),)+
                    $crate::list::$storage::Valueless => Err(BadVariantAccess),
                }
            }
        }

        impl<'a, Vis, $($t: 'a),+> AcceptMut<'a, Vis> for ($($t,)+)
        where
            Vis: VisitOutput $(+ Visit<&'a mut $t>)+,
        {
            #[inline]
            fn accept_mut(storage: &'a mut Self::Storage, visitor: Vis) -> Result<Vis::Output, BadVariantAccess> {
                match storage {
                    $($crate::list::$storage::$alt(value) => Ok(<Vis as Visit<&'a mut $t>>::visit(visitor, value)),)+
                    $crate::list::$storage::Valueless => Err(BadVariantAccess),
                }
            }
        }
    };
}

for_each_arity!(impl_accept);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::AlternativeAt;

    struct Width;

    impl VisitOutput for Width {
        type Output = usize;
    }

    impl<'a, T: ToString> Visit<&'a T> for Width {
        fn visit(self, value: &'a T) -> usize {
            value.to_string().len()
        }
    }

    struct Clear;

    impl VisitOutput for Clear {
        type Output = ();
    }

    impl<'a, T: Default> Visit<&'a mut T> for Clear {
        fn visit(self, value: &'a mut T) {
            *value = T::default();
        }
    }

    type L = (u16, String);

    #[test]
    fn test_accept_dispatches_on_active_arm() {
        let storage = <L as AlternativeAt<1>>::wrap(String::from("four"));
        assert_eq!(L::accept(&storage, Width), Ok(4));
        let storage = <L as AlternativeAt<0>>::wrap(12345);
        assert_eq!(L::accept(&storage, Width), Ok(5));
    }

    #[test]
    fn test_accept_on_valueless_is_bad_access() {
        assert_eq!(L::accept(&L::valueless(), Width), Err(BadVariantAccess));
        assert_eq!(L::accept_mut(&mut L::valueless(), Clear), Err(BadVariantAccess));
    }

    #[test]
    fn test_accept_mut_writes_through() {
        let mut storage = <L as AlternativeAt<1>>::wrap(String::from("gone"));
        assert_eq!(L::accept_mut(&mut storage, Clear), Ok(()));
        assert_eq!(<L as AlternativeAt<1>>::project(&storage).map(String::len), Some(0));
    }
}
