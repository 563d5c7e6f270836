//! The relational operator set.
//!
//! Six named relations, each a pure function from a pair of same-typed
//! operands to a boolean, with the operator token used in diagnostic
//! output.

use std::fmt;

/// A relational operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Relation {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    More,
    /// `<=`
    LessOrEqual,
    /// `>=`
    MoreOrEqual,
}

impl Relation {
    /// Every relation, in symbol order. Handy for exhaustive test sweeps.
    pub const ALL: [Relation; 6] = [
        Relation::Equal,
        Relation::NotEqual,
        Relation::Less,
        Relation::More,
        Relation::LessOrEqual,
        Relation::MoreOrEqual,
    ];

    /// The operator token rendered in diagnostic lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::Less => "<",
            Relation::More => ">",
            Relation::LessOrEqual => "<=",
            Relation::MoreOrEqual => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply a relation with the native semantics of the operand type.
///
/// Floats follow IEEE 754 partial ordering: every relation involving NaN
/// is false except `NotEqual`, which is true.
pub fn relate<T>(lhs: &T, rel: Relation, rhs: &T) -> bool
where
    T: PartialOrd + ?Sized,
{
    match rel {
        Relation::Equal => lhs == rhs,
        Relation::NotEqual => lhs != rhs,
        Relation::Less => lhs < rhs,
        Relation::More => lhs > rhs,
        Relation::LessOrEqual => lhs <= rhs,
        Relation::MoreOrEqual => lhs >= rhs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_operator_tokens() {
        assert_eq!(Relation::Equal.symbol(), "==");
        assert_eq!(Relation::NotEqual.symbol(), "!=");
        assert_eq!(Relation::Less.symbol(), "<");
        assert_eq!(Relation::More.symbol(), ">");
        assert_eq!(Relation::LessOrEqual.symbol(), "<=");
        assert_eq!(Relation::MoreOrEqual.symbol(), ">=");
    }

    #[test]
    fn all_lists_six_distinct_relations() {
        for (i, a) in Relation::ALL.iter().enumerate() {
            for b in &Relation::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn relate_integers() {
        assert!(relate(&5, Relation::Less, &6));
        assert!(relate(&6, Relation::More, &5));
        assert!(relate(&5, Relation::Equal, &5));
        assert!(relate(&5, Relation::NotEqual, &6));
        assert!(relate(&5, Relation::LessOrEqual, &5));
        assert!(relate(&5, Relation::MoreOrEqual, &5));
        assert!(!relate(&6, Relation::Less, &5));
    }

    #[test]
    fn relate_strings_is_lexicographic() {
        assert!(relate("apple", Relation::Less, "banana"));
        assert!(relate("banana", Relation::More, "apple"));
        assert!(relate("apple", Relation::Equal, "apple"));
    }

    #[test]
    fn relate_float_nan_only_satisfies_not_equal() {
        let nan = f64::NAN;
        assert!(relate(&nan, Relation::NotEqual, &1.0));
        assert!(relate(&nan, Relation::NotEqual, &nan));
        for rel in [
            Relation::Equal,
            Relation::Less,
            Relation::More,
            Relation::LessOrEqual,
            Relation::MoreOrEqual,
        ] {
            assert!(!relate(&nan, rel, &1.0));
            assert!(!relate(&nan, rel, &nan));
        }
    }

    #[test]
    fn relate_bool_orders_false_below_true() {
        assert!(relate(&false, Relation::Less, &true));
        assert!(relate(&true, Relation::MoreOrEqual, &false));
        assert!(relate(&true, Relation::Equal, &true));
    }
}
