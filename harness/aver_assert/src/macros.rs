//! Assertion macros.
//!
//! Each comparison macro dispatches through [`Assertable`](crate::Assertable)
//! and performs an early `return` from the enclosing function when the
//! assertion fails: a failed assertion abandons the rest of the test body.
//! It does not panic and it does not abort the run - the outcome has
//! already been printed and recorded by the time the macro returns.
//!
//! The context argument must evaluate to a `&mut AssertContext` (a test
//! body's `ctx` parameter, or `&mut ctx` for a locally owned context).
//! Runtime-built strings participate as owned `String` operands;
//! `&'static str` is the constant representation and
//! [`FlashStr`](crate::FlashStr) the flash one.

/// Shared expansion for the comparison macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __aver_check_op {
    ($ctx:expr, $lhs:expr, $rel:expr, $rhs:expr) => {{
        let loc = $crate::SourceLocation {
            file: ::core::file!(),
            line: ::core::line!(),
        };
        if !$crate::Assertable::check($lhs, &mut *$ctx, loc, $rel, $rhs) {
            return;
        }
    }};
}

/// Assert `lhs == rhs`; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_equal {
    ($ctx:expr, $lhs:expr, $rhs:expr) => {
        $crate::__aver_check_op!($ctx, $lhs, $crate::Relation::Equal, $rhs)
    };
}

/// Assert `lhs != rhs`; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_not_equal {
    ($ctx:expr, $lhs:expr, $rhs:expr) => {
        $crate::__aver_check_op!($ctx, $lhs, $crate::Relation::NotEqual, $rhs)
    };
}

/// Assert `lhs < rhs`; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_less {
    ($ctx:expr, $lhs:expr, $rhs:expr) => {
        $crate::__aver_check_op!($ctx, $lhs, $crate::Relation::Less, $rhs)
    };
}

/// Assert `lhs > rhs`; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_more {
    ($ctx:expr, $lhs:expr, $rhs:expr) => {
        $crate::__aver_check_op!($ctx, $lhs, $crate::Relation::More, $rhs)
    };
}

/// Assert `lhs <= rhs`; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_less_or_equal {
    ($ctx:expr, $lhs:expr, $rhs:expr) => {
        $crate::__aver_check_op!($ctx, $lhs, $crate::Relation::LessOrEqual, $rhs)
    };
}

/// Assert `lhs >= rhs`; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_more_or_equal {
    ($ctx:expr, $lhs:expr, $rhs:expr) => {
        $crate::__aver_check_op!($ctx, $lhs, $crate::Relation::MoreOrEqual, $rhs)
    };
}

/// Assert that `x` is true; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_true {
    ($ctx:expr, $x:expr) => {
        $crate::assert_equal!($ctx, $x, true)
    };
}

/// Assert that `x` is false; returns from the enclosing function on failure.
#[macro_export]
macro_rules! assert_false {
    ($ctx:expr, $x:expr) => {
        $crate::assert_equal!($ctx, $x, false)
    };
}
