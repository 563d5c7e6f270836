//! Aver Assert - typed assertion dispatch for the aver harness.
//!
//! Test code writes `assert_equal!(ctx, a, b)`-style statements over a
//! fixed heterogeneous type set and gets the intended semantic comparison,
//! never one reached through an implicit conversion. A C-string binding to
//! a boolean overload is the class of bug this crate exists to rule out.
//!
//! # Architecture
//!
//! - `compare` / `compare_str`: direct enum-based dispatch over the fixed
//!   operand set; an unlisted pairing is an explicit rejection, not a
//!   fallback
//! - `AssertContext`: the dispatcher state - output sink, verbosity
//!   policy, and the sticky pass/fail accumulator
//! - `Assertable`: a sealed trait supplying the statically-selected entry
//!   points (seven scalar categories plus the nine string-representation
//!   pairs); an unsupported pairing fails to compile at the call site
//! - assertion macros that early-`return` from the enclosing test function
//!   on failure
//!
//! # Re-exports
//!
//! The value model (`aver_value`) and the reporting pieces (`aver_report`)
//! are re-exported so assertion call sites need only this crate.

mod assertable;
mod compare;
mod context;
#[macro_use]
mod macros;

#[cfg(test)]
mod tests;

pub use assertable::Assertable;
pub use compare::{compare, compare_str};
pub use context::{AssertContext, SourceLocation};

// Re-export the reporting pieces assertion call sites configure.
pub use aver_report::{
    buffer_sink, silent_sink, stdout_sink, BufferSink, RunState, SharedSink, SinkImpl, StdoutSink,
    Verbosity,
};

// Re-export the value model.
pub use aver_value::{
    operand_mismatch, relate, CaseName, CaseNameTag, CompareError, CompareResult, FlashStr,
    Operand, Relation, StrOperand,
};
