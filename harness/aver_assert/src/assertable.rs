//! Statically-selected assertion entry points.
//!
//! One impl per supported operand pairing: the seven same-type scalar
//! categories and the nine ordered pairs of string representations. The
//! trait is sealed with no blanket impls, so a pairing that is not listed
//! - `i32` beside `f64`, a string beside a boolean - has no impl and
//! fails to compile at the macro call site. Overload resolution cannot
//! reach a comparison through a conversion, because there is nothing for
//! it to resolve through.

use aver_value::{FlashStr, Relation, StrOperand};

use crate::context::{AssertContext, SourceLocation};

mod sealed {
    use aver_value::FlashStr;

    pub trait Sealed<Rhs> {}

    impl Sealed<bool> for bool {}
    impl Sealed<char> for char {}
    impl Sealed<i32> for i32 {}
    impl Sealed<u32> for u32 {}
    impl Sealed<i64> for i64 {}
    impl Sealed<u64> for u64 {}
    impl Sealed<f64> for f64 {}
    impl Sealed<&'static str> for &'static str {}
    impl Sealed<String> for &'static str {}
    impl Sealed<FlashStr> for &'static str {}
    impl Sealed<&'static str> for String {}
    impl Sealed<String> for String {}
    impl Sealed<FlashStr> for String {}
    impl Sealed<&'static str> for FlashStr {}
    impl Sealed<String> for FlashStr {}
    impl Sealed<FlashStr> for FlashStr {}
}

/// One checked comparison between `self` and an `Rhs` operand.
///
/// Implemented for exactly the supported pairings; the compiler selects
/// the entry point from the operand types at the call boundary.
pub trait Assertable<Rhs = Self>: sealed::Sealed<Rhs> {
    /// Apply `rel`, report, record, and return the outcome.
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: Rhs) -> bool;
}

impl Assertable for bool {
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: bool) -> bool {
        ctx.check_bool(loc, self, rel, rhs)
    }
}

impl Assertable for char {
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: char) -> bool {
        ctx.check_char(loc, self, rel, rhs)
    }
}

impl Assertable for i32 {
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: i32) -> bool {
        ctx.check_int(loc, self, rel, rhs)
    }
}

impl Assertable for u32 {
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: u32) -> bool {
        ctx.check_uint(loc, self, rel, rhs)
    }
}

impl Assertable for i64 {
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: i64) -> bool {
        ctx.check_long(loc, self, rel, rhs)
    }
}

impl Assertable for u64 {
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: u64) -> bool {
        ctx.check_ulong(loc, self, rel, rhs)
    }
}

impl Assertable for f64 {
    fn check(self, ctx: &mut AssertContext, loc: SourceLocation, rel: Relation, rhs: f64) -> bool {
        ctx.check_float(loc, self, rel, rhs)
    }
}

// The nine string-representation pairs. Each arm hands the dispatcher the
// two representations unchanged; which comparison applies is decided by
// the string matrix, never by a conversion here.

impl Assertable for &'static str {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: &'static str,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Constant(self), rel, StrOperand::Constant(rhs))
    }
}

impl Assertable<String> for &'static str {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: String,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Constant(self), rel, StrOperand::Transient(rhs))
    }
}

impl Assertable<FlashStr> for &'static str {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: FlashStr,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Constant(self), rel, StrOperand::Flash(rhs))
    }
}

impl Assertable<&'static str> for String {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: &'static str,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Transient(self), rel, StrOperand::Constant(rhs))
    }
}

impl Assertable for String {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: String,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Transient(self), rel, StrOperand::Transient(rhs))
    }
}

impl Assertable<FlashStr> for String {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: FlashStr,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Transient(self), rel, StrOperand::Flash(rhs))
    }
}

impl Assertable<&'static str> for FlashStr {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: &'static str,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Flash(self), rel, StrOperand::Constant(rhs))
    }
}

impl Assertable<String> for FlashStr {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: String,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Flash(self), rel, StrOperand::Transient(rhs))
    }
}

impl Assertable for FlashStr {
    fn check(
        self,
        ctx: &mut AssertContext,
        loc: SourceLocation,
        rel: Relation,
        rhs: FlashStr,
    ) -> bool {
        ctx.check_str(loc, StrOperand::Flash(self), rel, StrOperand::Flash(rhs))
    }
}
