//! Assertion operands.
//!
//! `Operand` is the closed sum of every type an assertion can compare.
//! Scalar categories hold their value inline; the three string
//! representations are nested in `StrOperand` so that string comparisons
//! resolve through a single exhaustive 3x3 match.
//!
//! The four integer categories are distinct. `Int` next to `Long` is a
//! mismatched pairing like any other; no widening happens on the way into
//! an operand.

mod flash;

#[cfg(test)]
mod tests;

use std::fmt;

pub use flash::FlashStr;

/// One of the three string representations.
#[derive(Clone, Debug)]
pub enum StrOperand {
    /// Program-lifetime literal.
    Constant(&'static str),
    /// Runtime-built string, owned for the duration of the assertion.
    Transient(String),
    /// Flash/ROM-resident string with its own access path.
    Flash(FlashStr),
}

impl StrOperand {
    /// Representation name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            StrOperand::Constant(_) => "constant str",
            StrOperand::Transient(_) => "transient str",
            StrOperand::Flash(_) => "flash str",
        }
    }

    /// The character content, whichever region it lives in.
    pub fn content(&self) -> &str {
        match self {
            StrOperand::Constant(s) => s,
            StrOperand::Transient(s) => s,
            StrOperand::Flash(s) => s.as_str(),
        }
    }
}

impl fmt::Display for StrOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}

/// An assertion operand.
#[derive(Clone, Debug)]
pub enum Operand {
    /// Boolean value.
    Bool(bool),
    /// Character value.
    Char(char),
    /// Standard-width signed integer.
    Int(i32),
    /// Standard-width unsigned integer.
    UInt(u32),
    /// Extended-width signed integer.
    Long(i64),
    /// Extended-width unsigned integer.
    ULong(u64),
    /// Floating-point value.
    Float(f64),
    /// String value in one of the three representations.
    Str(StrOperand),
}

// Factory methods for the string representations. Scalars construct
// directly through their variants.
impl Operand {
    /// A constant-string operand.
    #[inline]
    pub fn constant_str(s: &'static str) -> Self {
        Operand::Str(StrOperand::Constant(s))
    }

    /// A transient-string operand.
    #[inline]
    pub fn transient_str(s: impl Into<String>) -> Self {
        Operand::Str(StrOperand::Transient(s.into()))
    }

    /// A flash-string operand.
    #[inline]
    pub fn flash_str(s: FlashStr) -> Self {
        Operand::Str(StrOperand::Flash(s))
    }

    /// Category name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Bool(_) => "bool",
            Operand::Char(_) => "char",
            Operand::Int(_) => "int",
            Operand::UInt(_) => "uint",
            Operand::Long(_) => "long",
            Operand::ULong(_) => "ulong",
            Operand::Float(_) => "float",
            Operand::Str(s) => s.type_name(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Bool(v) => write!(f, "{v}"),
            Operand::Char(v) => write!(f, "{v}"),
            Operand::Int(v) => write!(f, "{v}"),
            Operand::UInt(v) => write!(f, "{v}"),
            Operand::Long(v) => write!(f, "{v}"),
            Operand::ULong(v) => write!(f, "{v}"),
            Operand::Float(v) => write!(f, "{v}"),
            Operand::Str(s) => write!(f, "{s}"),
        }
    }
}
