//! Tests for GET_ARRAY across all three phases.

use crate::ToString;
use crate::interpreter::{ExecutionContext, Frame, InterpretError};
use crate::ir::{
    GetArrayInstr, InlineError, InlinerInfo, Instr, Instruction, Label, Operand, Operation,
    ValueMap, Variable,
};
use crate::values::Value;

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::fixnum))
}

fn literal(values: &[i64]) -> Operand {
    Operand::array(values.iter().copied().map(Operand::fixnum))
}

/// Run a single GET_ARRAY over `source` and return what it stored.
fn extract(source: Value, index: usize, take_rest: bool) -> Value {
    let src = Variable::new("src");
    let dest = Variable::new("dest");
    let mut frame = Frame::new();
    frame.bind(&src, source);

    let instr = GetArrayInstr::new(dest.clone(), src.into(), index, take_rest);
    assert_eq!(instr.interpret(&mut frame, &Value::Nil), Ok(None));
    frame.get(&dest).cloned().expect("destination not written")
}

/// Fold GET_ARRAY over a literal and evaluate the folded operand.
fn fold(source: Operand, index: usize, take_rest: bool) -> Value {
    let instr = GetArrayInstr::new(Variable::new("dest"), source, index, take_rest);
    let simplified = instr.simplify(&ValueMap::new());
    simplified
        .result
        .expect("literal source should fold")
        .retrieve(&Frame::new(), &Value::Nil)
        .expect("folded operand should be retrievable")
}

#[test]
fn test_single_element_boundaries() {
    assert_eq!(extract(ints(&[1, 2, 3]), 2, false), Value::fixnum(3));
    assert_eq!(extract(ints(&[1, 2, 3]), 3, false), Value::Nil);
    assert_eq!(extract(ints(&[1, 2, 3]), 5, false), Value::Nil);
    assert_eq!(extract(ints(&[]), 0, false), Value::Nil);
}

#[test]
fn test_tail_boundaries() {
    assert_eq!(extract(ints(&[1, 2, 3]), 0, true), ints(&[1, 2, 3]));
    assert_eq!(extract(ints(&[1, 2, 3]), 3, true), ints(&[]));
    assert_eq!(extract(ints(&[1, 2, 3]), 5, true), ints(&[]));
}

#[test]
fn test_folding_agrees_with_interpretation() {
    let elements = [1, 2, 3];
    for index in 0..5 {
        for take_rest in [false, true] {
            assert_eq!(
                fold(literal(&elements), index, take_rest),
                extract(ints(&elements), index, take_rest),
                "index={} take_rest={}",
                index,
                take_rest
            );
        }
    }
}

#[test]
fn test_tail_is_fresh_array() {
    let src = Variable::new("src");
    let dest = Variable::new("dest");
    let mut frame = Frame::new();
    frame.bind(&src, ints(&[10, 20, 30, 40]));

    GetArrayInstr::new(dest.clone(), src.clone().into(), 1, true)
        .interpret(&mut frame, &Value::Nil)
        .unwrap();
    assert_eq!(frame.get(&dest), Some(&ints(&[20, 30, 40])));

    // Writes through the result stay in the result.
    frame
        .get_mut(&dest)
        .and_then(Value::as_array_mut)
        .unwrap()
        .set(0, Value::fixnum(-1));
    assert_eq!(frame.get(&src), Some(&ints(&[10, 20, 30, 40])));
    assert_eq!(frame.get(&dest), Some(&ints(&[-1, 30, 40])));

    // Writes through the source stay in the source.
    frame
        .get_mut(&src)
        .and_then(Value::as_array_mut)
        .unwrap()
        .push(Value::fixnum(50));
    assert_eq!(frame.get(&dest), Some(&ints(&[-1, 30, 40])));
}

#[test]
fn test_full_tail_is_not_aliased() {
    let mut source = ints(&[1, 2]);
    let mut rest = extract(source.clone(), 0, true);

    rest.as_array_mut().unwrap().push(Value::fixnum(3));
    assert_eq!(source, ints(&[1, 2]));

    source.as_array_mut().unwrap().set(0, Value::fixnum(9));
    assert_eq!(rest, ints(&[1, 2, 3]));
}

#[test]
fn test_interpret_non_array_source() {
    let src = Variable::new("src");
    let mut frame = Frame::new();
    frame.bind(&src, Value::fixnum(3));

    let instr = GetArrayInstr::new(Variable::new("dest"), src.clone().into(), 0, false);
    assert_eq!(
        instr.interpret(&mut frame, &Value::Nil),
        Err(InterpretError::NotAnArray {
            operand: Operand::Variable(src),
            found: "fixnum",
        })
    );
    assert!(frame.load(&Variable::new("dest")).is_none());
}

#[test]
fn test_interpret_receiver_source() {
    let dest = Variable::new("dest");
    let mut frame = Frame::new();
    let instr = GetArrayInstr::new(dest.clone(), Operand::SelfValue, 1, false);

    instr.interpret(&mut frame, &ints(&[7, 8])).unwrap();
    assert_eq!(frame.get(&dest), Some(&Value::fixnum(8)));
}

#[test]
fn test_simplify_resolves_through_value_map() {
    let mut values = ValueMap::new();
    values.insert(Variable::new("arr"), literal(&[4, 5, 6]));

    let instr = GetArrayInstr::new(Variable::new("x"), Operand::var("arr"), 1, true);
    let simplified = instr.simplify(&values);

    assert_eq!(simplified.result, Some(literal(&[5, 6])));
    assert_eq!(
        simplified.instruction,
        Instruction::from(GetArrayInstr::new(Variable::new("x"), literal(&[4, 5, 6]), 1, true))
    );
    // The original is untouched.
    assert_eq!(instr.array(), &Operand::var("arr"));
}

#[test]
fn test_simplify_unknown_source() {
    let instr = GetArrayInstr::new(Variable::new("x"), Operand::var("arr"), 0, false);
    let simplified = instr.simplify(&ValueMap::new());
    assert_eq!(simplified.result, None);
    assert_eq!(simplified.instruction, Instruction::from(instr));
}

#[test]
fn test_simplify_literal_with_unknown_elements() {
    let source = Operand::array([Operand::var("a"), Operand::var("b")]);
    let instr = GetArrayInstr::new(Variable::new("x"), source, 1, false);
    assert_eq!(instr.simplify(&ValueMap::new()).result, Some(Operand::var("b")));
}

#[test]
fn test_clone_for_inlining() {
    let mut info = InlinerInfo::new(Operand::SelfValue, Variable::new("%v_r"), Label::new("_LBL_exit"));
    info.add_variable(Variable::new("x"), Variable::new("%v_0"));
    info.add_variable(Variable::new("arr"), Variable::new("%v_1"));

    let instr = GetArrayInstr::new(Variable::new("x"), Operand::var("arr"), 2, true);
    let cloned = instr.clone_for_inlining(&info).unwrap();

    assert_eq!(cloned.to_string(), "%v_0 = %v_1[2:END] (GET_ARRAY)");
    assert_eq!(instr.to_string(), "x = arr[2:END] (GET_ARRAY)");
}

#[test]
fn test_clone_for_inlining_receiver_source() {
    let mut info = InlinerInfo::new(
        Operand::var("obj"),
        Variable::new("%v_r"),
        Label::new("_LBL_exit"),
    );
    info.add_variable(Variable::new("x"), Variable::new("%v_0"));

    let instr = GetArrayInstr::new(Variable::new("x"), Operand::SelfValue, 0, false);
    assert_eq!(
        instr.clone_for_inlining(&info).unwrap().to_string(),
        "%v_0 = obj[0] (GET_ARRAY)"
    );
}

#[test]
fn test_clone_for_inlining_missing_destination() {
    let mut info = InlinerInfo::new(Operand::SelfValue, Variable::new("%v_r"), Label::new("_LBL_exit"));
    info.add_variable(Variable::new("arr"), Variable::new("%v_1"));

    let instr = GetArrayInstr::new(Variable::new("x"), Operand::var("arr"), 0, false);
    assert_eq!(
        instr.clone_for_inlining(&info),
        Err(InlineError::MissingVariable(Variable::new("x")))
    );
}

#[test]
fn test_render() {
    let single = GetArrayInstr::new(Variable::new("a"), Operand::var("%v_0"), 0, false);
    let rest = GetArrayInstr::new(Variable::new("dest"), Operand::var("source"), 2, true);

    assert_eq!(single.to_string(), "a = %v_0[0] (GET_ARRAY)");
    assert_eq!(rest.to_string(), "dest = source[2:END] (GET_ARRAY)");
    // Rendering has no side effects.
    assert_eq!(rest.to_string(), rest.to_string());
    assert_eq!(rest.operation(), Operation::GetArray);
    assert_eq!(rest.result(), Some(&Variable::new("dest")));
    assert_eq!(rest.operands().as_slice(), &[&Operand::var("source")]);
}
