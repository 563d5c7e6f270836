//! The assertion dispatch context.
//!
//! `AssertContext` carries the three collaborators every checked assertion
//! needs: where diagnostics go, which outcomes are worth printing, and the
//! pass/fail accumulator. They are plain values held by the context, so a
//! test of the harness itself swaps in a buffer sink and reads the run
//! state directly - no process-wide statics.

use aver_report::{RunState, SharedSink, Verbosity};
use aver_value::{relate, CompareResult, Operand, Relation, StrOperand};

use crate::compare::{compare, compare_str};

/// Source position of an assertion call site.
///
/// Diagnostic-only; never consulted for correctness.
#[derive(Copy, Clone, Debug)]
pub struct SourceLocation {
    /// File identifier, as produced by `file!()`.
    pub file: &'static str,
    /// Line number, as produced by `line!()`.
    pub line: u32,
}

/// Dispatch state for one test run.
///
/// Every checked assertion, whichever entry point it comes through:
///
/// 1. applies the relational operator to the operands,
/// 2. emits exactly one diagnostic line through the sink when the
///    verbosity policy enables the outcome, and nothing otherwise,
/// 3. records the outcome into the run state (failure is sticky),
/// 4. returns the outcome.
///
/// A failing comparison is a normal, fully handled outcome. No entry
/// point panics or returns an error for it.
pub struct AssertContext {
    sink: SharedSink,
    verbosity: Verbosity,
    state: RunState,
}

impl AssertContext {
    /// A context writing to `sink` under `verbosity`, with a clean run.
    pub fn new(sink: SharedSink, verbosity: Verbosity) -> Self {
        AssertContext {
            sink,
            verbosity,
            state: RunState::new(),
        }
    }

    /// The accumulator for this run.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Whether any assertion has failed this run.
    pub fn is_failed(&self) -> bool {
        self.state.is_failed()
    }

    /// The active output policy.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Change the output policy mid-run.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Clear the accumulator for the next run.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Check a boolean pair.
    pub fn check_bool(&mut self, loc: SourceLocation, lhs: bool, rel: Relation, rhs: bool) -> bool {
        let ok = relate(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::Bool(lhs), rel, &Operand::Bool(rhs))
    }

    /// Check a character pair.
    pub fn check_char(&mut self, loc: SourceLocation, lhs: char, rel: Relation, rhs: char) -> bool {
        let ok = relate(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::Char(lhs), rel, &Operand::Char(rhs))
    }

    /// Check a standard-width signed integer pair.
    pub fn check_int(&mut self, loc: SourceLocation, lhs: i32, rel: Relation, rhs: i32) -> bool {
        let ok = relate(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::Int(lhs), rel, &Operand::Int(rhs))
    }

    /// Check a standard-width unsigned integer pair.
    pub fn check_uint(&mut self, loc: SourceLocation, lhs: u32, rel: Relation, rhs: u32) -> bool {
        let ok = relate(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::UInt(lhs), rel, &Operand::UInt(rhs))
    }

    /// Check an extended-width signed integer pair.
    pub fn check_long(&mut self, loc: SourceLocation, lhs: i64, rel: Relation, rhs: i64) -> bool {
        let ok = relate(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::Long(lhs), rel, &Operand::Long(rhs))
    }

    /// Check an extended-width unsigned integer pair.
    pub fn check_ulong(&mut self, loc: SourceLocation, lhs: u64, rel: Relation, rhs: u64) -> bool {
        let ok = relate(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::ULong(lhs), rel, &Operand::ULong(rhs))
    }

    /// Check a floating-point pair.
    pub fn check_float(&mut self, loc: SourceLocation, lhs: f64, rel: Relation, rhs: f64) -> bool {
        let ok = relate(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::Float(lhs), rel, &Operand::Float(rhs))
    }

    /// Check a pair of string operands, in any of the nine representation
    /// pairings.
    pub fn check_str(
        &mut self,
        loc: SourceLocation,
        lhs: StrOperand,
        rel: Relation,
        rhs: StrOperand,
    ) -> bool {
        let ok = compare_str(&lhs, rel, &rhs);
        self.conclude(loc, ok, &Operand::Str(lhs), rel, &Operand::Str(rhs))
    }

    /// Value-level entry for dynamically built operands.
    ///
    /// A mismatched pair is rejected before any output is produced or the
    /// accumulator is touched.
    pub fn check_values(
        &mut self,
        loc: SourceLocation,
        lhs: &Operand,
        rel: Relation,
        rhs: &Operand,
    ) -> CompareResult {
        let ok = compare(lhs, rel, rhs)?;
        Ok(self.conclude(loc, ok, lhs, rel, rhs))
    }

    fn conclude(
        &mut self,
        loc: SourceLocation,
        ok: bool,
        lhs: &Operand,
        rel: Relation,
        rhs: &Operand,
    ) -> bool {
        tracing::trace!(
            file = loc.file,
            line = loc.line,
            op = rel.symbol(),
            ok,
            "assertion dispatched"
        );
        let printed = (ok && self.verbosity.contains(Verbosity::ASSERTION_PASSED))
            || (!ok && self.verbosity.contains(Verbosity::ASSERTION_FAILED));
        if printed {
            let verdict = if ok { "passed" } else { "failed" };
            self.sink.println(&format!(
                "Assertion {verdict}: ({lhs}) {} ({rhs}), file {}, line {}.",
                rel.symbol(),
                loc.file,
                loc.line
            ));
        }
        self.state.record(ok);
        ok
    }
}
