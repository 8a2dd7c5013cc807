use super::{ArrayValue, Value};

fn ints(values: &[i64]) -> ArrayValue {
    values.iter().copied().map(Value::fixnum).collect()
}

#[test]
fn test_entry_in_and_out_of_bounds() {
    let array = ints(&[1, 2, 3]);
    assert_eq!(array.entry(2), Value::fixnum(3));
    assert_eq!(array.entry(3), Value::Nil);
    assert_eq!(array.entry(100), Value::Nil);
}

#[test]
fn test_tail_boundaries() {
    let array = ints(&[1, 2, 3]);
    assert_eq!(array.tail(0), ints(&[1, 2, 3]));
    assert_eq!(array.tail(2), ints(&[3]));
    assert!(array.tail(3).is_empty());
    assert!(array.tail(5).is_empty());
}

#[test]
fn test_tail_shares_until_written() {
    let source = ints(&[10, 20, 30, 40]);
    let mut rest = source.tail(1);
    assert!(rest.shares_storage_with(&source));

    rest.set(0, Value::fixnum(99));
    assert!(!rest.shares_storage_with(&source));
    assert_eq!(rest, ints(&[99, 30, 40]));
    assert_eq!(source, ints(&[10, 20, 30, 40]));
}

#[test]
fn test_writing_source_leaves_tail_alone() {
    let mut source = ints(&[10, 20, 30]);
    let rest = source.tail(1);

    source.set(1, Value::str("changed"));
    source.push(Value::fixnum(4));

    assert_eq!(rest, ints(&[20, 30]));
    assert_eq!(source.len(), 4);
}

#[test]
fn test_tail_of_tail() {
    let source = ints(&[1, 2, 3, 4, 5]);
    let middle = source.tail(1).tail(2);
    assert_eq!(middle, ints(&[4, 5]));
    assert_eq!(middle.entry(0), Value::fixnum(4));
}

#[test]
fn test_set_past_end_pads_with_nil() {
    let mut array = ints(&[1]);
    array.set(3, Value::fixnum(4));
    assert_eq!(
        array.as_slice(),
        &[Value::fixnum(1), Value::Nil, Value::Nil, Value::fixnum(4)]
    );
}

#[test]
fn test_clone_then_push_is_private() {
    let original = ints(&[1, 2]);
    let mut copy = original.clone();
    copy.push(Value::fixnum(3));
    assert_eq!(original, ints(&[1, 2]));
    assert_eq!(copy, ints(&[1, 2, 3]));
}
