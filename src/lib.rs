//! # `polyvariant` - Tagged-Union Value Container
//!
//! A value container that holds exactly one of a fixed, ordered list of
//! alternative types, with typed access, visitation, relational operators
//! and hashing.
//!
//! ## Guarantees
//!
//! - **Safe storage**: the storage is a generated enum with one arm per
//!   alternative, so layout and drop are left to the compiler. The only
//!   `unsafe` is an unreachable hint after an arm has just been written.
//! - **One error policy**: a mismatched access or a visit of a valueless
//!   variant returns [`BadVariantAccess`]; nothing in the crate aborts.
//! - **Weak guarantee on panics**: a write whose construction panics leaves
//!   the variant valueless. It never holds a half-built value.
//!
//! ## Architecture
//!
//! The crate is stratified bottom-up:
//!
//! 1. **Type lists** ([`list`]): tuple `(A, B, ..)` of alternatives, the
//!    generated storage block, ordinal/type lookup, layout constants.
//! 2. **Capabilities** ([`list::ops`]): clone, compare, hash and format
//!    performed by an ordinal switch over the storage.
//! 3. **Container** ([`Variant`]): the lifecycle state machine.
//! 4. **Visitation** ([`visit`](mod@visit)): single and multi-variant
//!    dispatch through the [`Visit`] trait.
//!
//! Alternatives are selected either by type, resolved through an inferred
//! marker written as `_`, or by ordinal through a const generic:
//!
//! ```rust
//! use polyvariant::{Monostate, Variant};
//!
//! let mut v = Variant::<(Monostate, u32, String)>::default();
//! assert_eq!(v.index(), 0);
//!
//! v.set(7u32);
//! assert_eq!(v.get::<u32, _>(), Ok(&7));
//!
//! v.emplace_at::<2>(String::from("seven"));
//! assert_eq!(v.get_at::<2>().map(String::len), Ok(5));
//! ```
//!
//! ## Features
//!
//! - `wide`: raise the alternative limit to 12 and the visit limit to 6.
//! - `tracing`: emit `trace` events for state-machine transitions.
//! - `serde`: (de)serialize a variant as `(ordinal, payload)`.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod list;
pub mod monostate;
pub mod variant;
pub mod visit;

pub use error::BadVariantAccess;
pub use list::{AlternativeAt, Ix, Member, TypeList, MAX_ALTERNATIVES, MAX_VISIT_ARITY, VARIANT_NPOS};
pub use monostate::Monostate;
pub use variant::free::{
    get, get_at, get_at_mut, get_if, get_if_at, get_if_at_mut, get_if_mut, get_mut, holds_alternative, swap,
    variant_size, VariantAlternative, VariantAlternativeT, VariantSize,
};
pub use variant::Variant;
#[cfg(feature = "serde")]
pub use variant::{ListDeserialize, ListSerialize};
pub use visit::{visit, visit_all, visit_mut, Visit, VisitOutput};

// Compile-time layout checks
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Monostate>() == 0);

    // The layout constants follow the widest alternative.
    assert!(<(u8, u64, u16) as TypeList>::MAX_SIZE == 8);
    assert!(<(u8, u16) as TypeList>::MAX_ALIGN == 2);
    assert!(<(Monostate,) as TypeList>::MAX_SIZE == 0);

    // A variant is no larger than its widest alternative plus one aligned tag.
    assert!(mem::size_of::<Variant<(u8, u32)>>() <= 2 * mem::size_of::<u32>());
    assert!(mem::align_of::<Variant<(u8, u64)>>() == mem::align_of::<u64>());

    // The valueless arm fits in a pointer niche.
    assert!(mem::size_of::<Variant<(Box<u8>,)>>() == mem::size_of::<Box<u8>>());
};
