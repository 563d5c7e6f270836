//! Error type for the comparison dispatch.
//!
//! Exactly one failure category exists at this layer: asking the
//! value-level dispatch to compare operands of different semantic types.
//! Everything else an assertion can do - including failing - is a normal
//! outcome, not an error.

use std::fmt;

/// Result of a value-level comparison.
pub type CompareResult = Result<bool, CompareError>;

/// Rejection of a comparison between operands of different semantic types.
///
/// Carries the type names of both operands for diagnostics. Produced only
/// by the value-level dispatch path; the statically-typed entry points
/// cannot construct a mismatched pair in the first place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareError {
    left: &'static str,
    right: &'static str,
}

impl CompareError {
    /// Type name of the left operand.
    pub fn left_type(&self) -> &'static str {
        self.left
    }

    /// Type name of the right operand.
    pub fn right_type(&self) -> &'static str {
        self.right
    }
}

/// Comparison rejected: the operands are of different semantic types.
pub fn operand_mismatch(left: &'static str, right: &'static str) -> CompareError {
    CompareError { left, right }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot compare `{}` with `{}`: no conversion is applied between operand types",
            self.left, self.right
        )
    }
}

impl std::error::Error for CompareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_carries_both_type_names() {
        let err = operand_mismatch("int", "float");
        assert_eq!(err.left_type(), "int");
        assert_eq!(err.right_type(), "float");
    }

    #[test]
    fn display_names_both_sides() {
        let err = operand_mismatch("bool", "constant str");
        let msg = err.to_string();
        assert!(msg.contains("`bool`"));
        assert!(msg.contains("`constant str`"));
    }
}
