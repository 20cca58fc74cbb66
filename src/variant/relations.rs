//! Equality, ordering, hashing and formatting for `Variant`.
//!
//! Ordering compares the active ordinal first and the payloads only when the
//! ordinals match. A valueless variant sorts before every live one.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::Variant;
use crate::list::ops::{ListDebug, ListDisplay, ListEq, ListHash, ListOrd, ListPartialEq, ListPartialOrd};

impl<L: ListPartialEq> PartialEq for Variant<L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        L::eq_storage(self.storage(), other.storage())
    }
}

impl<L: ListEq> Eq for Variant<L> {}

impl<L: ListPartialOrd> PartialOrd for Variant<L> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        L::partial_cmp_storage(self.storage(), other.storage())
    }
}

impl<L: ListOrd> Ord for Variant<L> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        L::cmp_storage(self.storage(), other.storage())
    }
}

impl<L: ListHash> Hash for Variant<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        L::hash_storage(self.storage(), state);
    }
}

impl<L: ListDebug> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        L::fmt_debug(self.storage(), f)
    }
}

impl<L: ListDisplay> fmt::Display for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        L::fmt_display(self.storage(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_compare_same_ordinal() {
        let v = Variant::<(i32, f64)>::new(3i32);
        let w = Variant::<(i32, f64)>::new(7i32);
        assert!(v < w);
        assert!(w > v);
        assert!(v == v);
        assert!(v != w);
        assert!(v <= v && v >= v);
    }

    #[test]
    fn test_ordinal_beats_payload() {
        let int = Variant::<(i32, f64)>::new(1000i32);
        let float = Variant::<(i32, f64)>::new(-1.0f64);
        assert!(int < float);
        assert_ne!(int, Variant::<(i32, f64)>::new(1000.0f64));
    }

    #[test]
    fn test_hash_follows_value() {
        let a = Variant::<(u8, String)>::new(String::from("x"));
        let b = Variant::<(u8, String)>::new(String::from("x"));
        let c = Variant::<(u8, String)>::new(7u8);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn test_formatting() {
        let v = Variant::<(u8, String)>::new(String::from("hi"));
        assert_eq!(format!("{v:?}"), "Alt1(\"hi\")");
        assert_eq!(v.to_string(), "hi");
        assert_eq!(Variant::<(u8, String)>::new(4u8).to_string(), "4");
    }
}
