//! Comparison dispatch over the fixed operand type set.
//!
//! The type set is closed, so pattern matching is preferred over trait
//! objects: the compiler checks exhaustiveness, and an unsupported pairing
//! stays an explicit rejection arm instead of a silent fallback.

use aver_value::{operand_mismatch, relate, CompareResult, FlashStr, Operand, Relation, StrOperand};

/// Apply `rel` to two operands of the same semantic type.
///
/// Operands of different semantic types are rejected with a
/// [`CompareError`](aver_value::CompareError). Nothing converts between
/// categories on the way in: `Int` beside `Long` is as mismatched as
/// `Int` beside `Bool`.
pub fn compare(lhs: &Operand, rel: Relation, rhs: &Operand) -> CompareResult {
    match (lhs, rhs) {
        (Operand::Bool(a), Operand::Bool(b)) => Ok(relate(a, rel, b)),
        (Operand::Char(a), Operand::Char(b)) => Ok(relate(a, rel, b)),
        (Operand::Int(a), Operand::Int(b)) => Ok(relate(a, rel, b)),
        (Operand::UInt(a), Operand::UInt(b)) => Ok(relate(a, rel, b)),
        (Operand::Long(a), Operand::Long(b)) => Ok(relate(a, rel, b)),
        (Operand::ULong(a), Operand::ULong(b)) => Ok(relate(a, rel, b)),
        (Operand::Float(a), Operand::Float(b)) => Ok(relate(a, rel, b)),
        (Operand::Str(a), Operand::Str(b)) => Ok(compare_str(a, rel, b)),
        _ => Err(operand_mismatch(lhs.type_name(), rhs.type_name())),
    }
}

/// Apply `rel` to two string operands.
///
/// Each of the nine representation pairs has its own arm. Eight compare
/// content byte-for-byte. Flash against flash compares `Equal` and
/// `NotEqual` by reference identity - both operands naming the same
/// constant - while the four ordering relations follow content. Equal
/// content at distinct flash addresses is therefore *not* equal; see
/// [`FlashStr`] for the contract.
pub fn compare_str(lhs: &StrOperand, rel: Relation, rhs: &StrOperand) -> bool {
    use StrOperand::{Constant, Flash, Transient};
    match (lhs, rhs) {
        (Constant(a), Constant(b)) => relate(*a, rel, *b),
        (Constant(a), Transient(b)) => relate(*a, rel, b.as_str()),
        (Constant(a), Flash(b)) => relate(*a, rel, b.as_str()),
        (Transient(a), Constant(b)) => relate(a.as_str(), rel, *b),
        (Transient(a), Transient(b)) => relate(a.as_str(), rel, b.as_str()),
        (Transient(a), Flash(b)) => relate(a.as_str(), rel, b.as_str()),
        (Flash(a), Constant(b)) => relate(a.as_str(), rel, *b),
        (Flash(a), Transient(b)) => relate(a.as_str(), rel, b.as_str()),
        (Flash(a), Flash(b)) => compare_flash(*a, rel, *b),
    }
}

fn compare_flash(lhs: FlashStr, rel: Relation, rhs: FlashStr) -> bool {
    match rel {
        Relation::Equal => lhs.ptr_eq(&rhs),
        Relation::NotEqual => !lhs.ptr_eq(&rhs),
        Relation::Less | Relation::More | Relation::LessOrEqual | Relation::MoreOrEqual => {
            relate(lhs.as_str(), rel, rhs.as_str())
        }
    }
}
