//! `Monostate`, the well-behaved empty alternative.
//!
//! Placing it first makes a variant default-constructible even when none of
//! the other alternatives is `Default`.

/// A unit alternative. All monostates are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monostate;
