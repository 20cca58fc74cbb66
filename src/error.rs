//! The error reported by fallible variant access.

/// The error returned when a variant is accessed as an alternative it does
/// not currently hold, or visited while valueless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadVariantAccess;

impl BadVariantAccess {
    /// The fixed description, also produced by `Display`.
    pub const MESSAGE: &'static str = "bad variant access";
}

impl core::fmt::Display for BadVariantAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for BadVariantAccess {}
