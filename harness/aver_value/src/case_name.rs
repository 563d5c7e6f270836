//! Tagged constant-or-transient string for naming a test case.
//!
//! A test case is named either by a program-lifetime literal or by a
//! read-only borrow of storage built at run time. The tag lets callers
//! tell which representation is held without any unchecked access: the
//! accessors return `Option`, and `resolve` reads the payload through an
//! exhaustive match.
//!
//! A `CaseName` never owns the referenced storage. For the transient
//! variant the lifetime parameter makes the outlives requirement a
//! compile-time fact rather than a caller convention.

use std::fmt;

/// Discriminator for the two `CaseName` representations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CaseNameTag {
    /// Program-lifetime literal.
    Constant,
    /// Read-only borrow of runtime-built storage.
    Transient,
}

/// Name of a test case: a constant literal or a transient borrow.
///
/// Constructed once when the case is registered and never mutated.
#[derive(Copy, Clone, Debug)]
pub enum CaseName<'a> {
    /// Program-lifetime literal.
    Constant(&'static str),
    /// Read-only borrow; the storage must outlive the name.
    Transient(&'a str),
}

impl<'a> CaseName<'a> {
    /// Name a case with a program-lifetime literal.
    pub const fn constant(name: &'static str) -> Self {
        CaseName::Constant(name)
    }

    /// Name a case with a borrow of runtime-built storage.
    pub const fn transient(name: &'a str) -> Self {
        CaseName::Transient(name)
    }

    /// Which representation this name holds.
    pub fn tag(&self) -> CaseNameTag {
        match self {
            CaseName::Constant(_) => CaseNameTag::Constant,
            CaseName::Transient(_) => CaseNameTag::Transient,
        }
    }

    /// The constant payload, or `None` for a transient name.
    pub fn as_constant(&self) -> Option<&'static str> {
        match self {
            CaseName::Constant(name) => Some(name),
            CaseName::Transient(_) => None,
        }
    }

    /// The transient payload, or `None` for a constant name.
    pub fn as_transient(&self) -> Option<&'a str> {
        match self {
            CaseName::Constant(_) => None,
            CaseName::Transient(name) => Some(name),
        }
    }

    /// The name regardless of representation.
    pub fn resolve(&self) -> &'a str {
        match self {
            CaseName::Constant(name) => name,
            CaseName::Transient(name) => name,
        }
    }
}

impl fmt::Display for CaseName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resolve())
    }
}
