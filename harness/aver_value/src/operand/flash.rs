//! Flash/ROM-resident string representation.

use std::fmt;

/// A string resident in a flash/ROM-like region.
///
/// `FlashStr` is deliberately not interchangeable with the constant and
/// transient representations: it wraps its storage in a distinct type so
/// a flash operand can only meet another operand through an arm of the
/// string comparison matrix.
///
/// Equality between two flash strings is reference identity, not content:
/// flash storage sits at a fixed address, and the homogeneous comparison
/// asks whether both operands name the same constant. Equal content at
/// distinct addresses compares unequal. Mixed pairs and the ordering
/// relations compare content. See the dispatcher's string matrix.
#[derive(Copy, Clone, Debug)]
pub struct FlashStr(&'static str);

impl FlashStr {
    /// Wrap program-lifetime storage as a flash string.
    pub const fn new(s: &'static str) -> Self {
        FlashStr(s)
    }

    /// The character content.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Reference identity: true iff both wrap the same storage.
    pub fn ptr_eq(&self, other: &FlashStr) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl fmt::Display for FlashStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
