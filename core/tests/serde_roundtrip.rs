#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use tessera_core::ir::{
    BeqInstr, CopyInstr, GetArrayInstr, Instruction, JumpInstr, Label, LabelInstr, Operand,
    ReturnInstr, Variable,
};
use tessera_core::values::Value;

fn program() -> Vec<Instruction> {
    let top = Label::new("top");
    vec![
        CopyInstr::new(
            Variable::new("xs"),
            Operand::array([Operand::fixnum(1), Operand::var("y"), Operand::SelfValue]),
        )
        .into(),
        LabelInstr::new(top.clone()).into(),
        GetArrayInstr::new(Variable::new("rest"), Operand::var("xs"), 1, true).into(),
        BeqInstr::new(Operand::var("rest"), Operand::nil(), top.clone()).into(),
        JumpInstr::new(top).into(),
        ReturnInstr::new(Operand::Constant(Value::array([
            Value::str("a\"b"),
            Value::float(1.5),
            Value::Bool(true),
        ])))
        .into(),
    ]
}

#[test]
fn instructions_roundtrip_through_postcard() {
    let original = program();
    let bytes = postcard::to_allocvec(&original).unwrap();
    let decoded: Vec<Instruction> = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn array_tail_serializes_only_visible_elements() {
    let full = Value::array((0..5).map(Value::fixnum));
    let tail = Value::Array(full.as_array().unwrap().tail(3));

    let bytes = postcard::to_allocvec(&tail).unwrap();
    let decoded: Value = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, Value::array([Value::fixnum(3), Value::fixnum(4)]));
}
