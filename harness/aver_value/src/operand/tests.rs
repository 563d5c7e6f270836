use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn string_factories_pick_the_right_representation() {
    assert!(matches!(
        Operand::constant_str("lit"),
        Operand::Str(StrOperand::Constant("lit"))
    ));
    assert!(matches!(
        Operand::transient_str(String::from("built")),
        Operand::Str(StrOperand::Transient(_))
    ));
    assert!(matches!(
        Operand::flash_str(FlashStr::new("rom")),
        Operand::Str(StrOperand::Flash(_))
    ));
}

#[test]
fn transient_factory_accepts_str_and_string() {
    let from_slice = Operand::transient_str("copied");
    let from_owned = Operand::transient_str(String::from("copied"));
    assert_eq!(from_slice.to_string(), from_owned.to_string());
}

// === Type names ===

#[test]
fn scalar_type_names() {
    assert_eq!(Operand::Bool(true).type_name(), "bool");
    assert_eq!(Operand::Char('q').type_name(), "char");
    assert_eq!(Operand::Int(-1).type_name(), "int");
    assert_eq!(Operand::UInt(1).type_name(), "uint");
    assert_eq!(Operand::Long(-1).type_name(), "long");
    assert_eq!(Operand::ULong(1).type_name(), "ulong");
    assert_eq!(Operand::Float(0.5).type_name(), "float");
}

#[test]
fn string_type_names_distinguish_representations() {
    assert_eq!(Operand::constant_str("a").type_name(), "constant str");
    assert_eq!(Operand::transient_str("a").type_name(), "transient str");
    assert_eq!(
        Operand::flash_str(FlashStr::new("a")).type_name(),
        "flash str"
    );
}

// === Display ===

#[test]
fn display_uses_native_formatting() {
    assert_eq!(Operand::Bool(true).to_string(), "true");
    assert_eq!(Operand::Char('x').to_string(), "x");
    assert_eq!(Operand::Int(5).to_string(), "5");
    assert_eq!(Operand::Long(-9).to_string(), "-9");
    assert_eq!(Operand::Float(2.5).to_string(), "2.5");
}

#[test]
fn display_renders_string_content_unquoted() {
    assert_eq!(Operand::constant_str("apple").to_string(), "apple");
    assert_eq!(Operand::transient_str("pear").to_string(), "pear");
    assert_eq!(
        Operand::flash_str(FlashStr::new("plum")).to_string(),
        "plum"
    );
}

// === Flash identity ===

#[test]
fn flash_ptr_eq_holds_for_the_same_storage() {
    let rom = FlashStr::new("shared");
    assert!(rom.ptr_eq(&rom));
    let copy = rom;
    assert!(rom.ptr_eq(&copy));
}

#[test]
fn flash_ptr_eq_rejects_distinct_storage_with_equal_content() {
    let a = FlashStr::new("twin");
    // Leaked so the second "twin" provably lives at its own address.
    let b = FlashStr::new(Box::leak(String::from("twin").into_boxed_str()));
    assert_eq!(a.as_str(), b.as_str());
    assert!(!a.ptr_eq(&b));
}

#[test]
fn str_operand_content_reads_every_region() {
    assert_eq!(StrOperand::Constant("c").content(), "c");
    assert_eq!(StrOperand::Transient(String::from("t")).content(), "t");
    assert_eq!(StrOperand::Flash(FlashStr::new("f")).content(), "f");
}
