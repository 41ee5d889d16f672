use fieldmap::map::coerce;
use fieldmap::record::FieldSlotMut;
use fieldmap::value::{Nullable, Type};
use fieldmap::Value;

fn coerced(from: impl Into<Value>, ty: Type, prior: impl Into<Value>) -> Value {
    let mut value = prior.into();
    coerce(
        &from.into(),
        FieldSlotMut {
            ty: &ty,
            value: &mut value,
        },
    );
    value
}

// ---------------------------------------------------------------------------
// Optional sources
// ---------------------------------------------------------------------------

#[test]
fn present_source_unwraps_to_referent() {
    assert_eq!(coerced(Value::ptr(5_i64), Type::I64, 0_i64), Value::I64(5));
}

#[test]
fn absent_source_skips_the_field() {
    assert_eq!(coerced(Value::null_ptr(), Type::I64, 9_i64), Value::I64(9));
}

#[test]
fn referent_continues_through_parse_rules() {
    assert_eq!(coerced(Value::ptr("88"), Type::I64, 0_i64), Value::I64(88));
}

#[test]
fn referent_nullable_unwraps_too() {
    assert_eq!(
        coerced(Value::ptr(Nullable::String(None)), Type::String, "prior"),
        Value::from(" ")
    );
}

// ---------------------------------------------------------------------------
// Optional destinations receive through a present referent
// ---------------------------------------------------------------------------

#[test]
fn present_destination_referent_receives_value() {
    assert_eq!(
        coerced(5_i64, Type::ptr(Type::I64), Value::ptr(0_i64)),
        Value::ptr(5_i64)
    );
}

#[test]
fn absent_destination_referent_is_noop() {
    assert_eq!(
        coerced(5_i64, Type::ptr(Type::I64), Value::null_ptr()),
        Value::null_ptr()
    );
}

#[test]
fn float_truncates_into_destination_referent() {
    assert_eq!(
        coerced(Value::ptr(9.9_f64), Type::ptr(Type::I64), Value::ptr(0_i64)),
        Value::ptr(9_i64)
    );
}

#[test]
fn absent_source_leaves_destination_referent() {
    assert_eq!(
        coerced(Value::null_ptr(), Type::ptr(Type::I64), Value::ptr(4_i64)),
        Value::ptr(4_i64)
    );
}
