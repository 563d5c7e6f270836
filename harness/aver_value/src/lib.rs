//! Aver Value - operand model for the aver assertion core.
//!
//! This crate defines the fixed set of value types an assertion can compare:
//!
//! - `Operand`: the operand sum type (boolean, character, four integer
//!   categories, floating point, and strings)
//! - `StrOperand` / `FlashStr`: the three mutually-incompatible string
//!   representations
//! - `CaseName`: the tagged constant-or-transient string naming a test case
//! - `Relation` / `relate`: the six relational operators and their pure
//!   application
//! - `CompareError`: rejection of a comparison between operands of
//!   different semantic types
//!
//! The type set is closed. There are no conversions between categories or
//! between string representations anywhere in this crate; a pairing that is
//! not listed is a rejected pairing.

mod case_name;
pub mod errors;
mod operand;
mod relation;

pub use case_name::{CaseName, CaseNameTag};
pub use errors::{operand_mismatch, CompareError, CompareResult};
pub use operand::{FlashStr, Operand, StrOperand};
pub use relation::{relate, Relation};
