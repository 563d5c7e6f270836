//! Property tests: the dispatcher never alters the native result of a
//! relation, and the algebraic relationships between relations hold for
//! arbitrary operands.

use proptest::prelude::*;

use crate::compare::compare;
use crate::context::{AssertContext, SourceLocation};
use aver_report::{silent_sink, Verbosity};
use aver_value::{relate, Operand, Relation};

const LOC: SourceLocation = SourceLocation {
    file: "property.rs",
    line: 1,
};

proptest! {
    #[test]
    fn int_dispatch_matches_native(a in any::<i32>(), b in any::<i32>()) {
        for rel in Relation::ALL {
            prop_assert_eq!(
                compare(&Operand::Int(a), rel, &Operand::Int(b)),
                Ok(relate(&a, rel, &b))
            );
        }
    }

    #[test]
    fn ulong_dispatch_matches_native(a in any::<u64>(), b in any::<u64>()) {
        for rel in Relation::ALL {
            prop_assert_eq!(
                compare(&Operand::ULong(a), rel, &Operand::ULong(b)),
                Ok(relate(&a, rel, &b))
            );
        }
    }

    #[test]
    fn float_dispatch_matches_native(a in any::<f64>(), b in any::<f64>()) {
        for rel in Relation::ALL {
            prop_assert_eq!(
                compare(&Operand::Float(a), rel, &Operand::Float(b)),
                Ok(relate(&a, rel, &b))
            );
        }
    }

    #[test]
    fn equal_is_the_negation_of_not_equal(a in any::<i64>(), b in any::<i64>()) {
        let eq = compare(&Operand::Long(a), Relation::Equal, &Operand::Long(b));
        let ne = compare(&Operand::Long(a), Relation::NotEqual, &Operand::Long(b));
        prop_assert_eq!(eq.map(|ok| !ok), ne);
    }

    #[test]
    fn transient_string_equality_is_content_equality(a in ".{0,24}", b in ".{0,24}") {
        let outcome = compare(
            &Operand::transient_str(a.clone()),
            Relation::Equal,
            &Operand::transient_str(b.clone()),
        );
        prop_assert_eq!(outcome, Ok(a == b));
    }

    #[test]
    fn constant_transient_ordering_is_lexicographic(b in "[a-z]{0,12}") {
        let outcome = compare(
            &Operand::constant_str("mmm"),
            Relation::Less,
            &Operand::transient_str(b.clone()),
        );
        prop_assert_eq!(outcome, Ok("mmm" < b.as_str()));
    }

    #[test]
    fn run_state_counts_every_dispatch(outcomes in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut ctx = AssertContext::new(silent_sink(), Verbosity::empty());
        for &expected in &outcomes {
            // `x == true` holds exactly when `x` does.
            let ok = ctx.check_bool(LOC, expected, Relation::Equal, true);
            prop_assert_eq!(ok, expected);
        }
        prop_assert_eq!(ctx.state().assertion_count() as usize, outcomes.len());
        prop_assert_eq!(ctx.is_failed(), outcomes.contains(&false));
    }
}
