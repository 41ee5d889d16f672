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
// A held value that fits the slot is assigned as-is
// ---------------------------------------------------------------------------

#[test]
fn held_value_of_matching_type() {
    assert_eq!(coerced(Value::any(42_i64), Type::I64, 0_i64), Value::I64(42));
}

#[test]
fn held_string_into_string_slot() {
    assert_eq!(
        coerced(Value::any("held"), Type::String, ""),
        Value::from("held")
    );
}

// ---------------------------------------------------------------------------
// Held values stringify under a textual slot
// ---------------------------------------------------------------------------

#[test]
fn held_float_formats_to_shortest_text() {
    assert_eq!(
        coerced(Value::any(123.345_f64), Type::String, ""),
        Value::from("123.345")
    );
}

#[test]
fn held_int_formats_to_text() {
    assert_eq!(
        coerced(Value::any(-17_i16), Type::String, ""),
        Value::from("-17")
    );
}

#[test]
fn held_bool_under_textual_slot_is_noop() {
    assert_eq!(
        coerced(Value::any(true), Type::String, "keep"),
        Value::from("keep")
    );
}

// ---------------------------------------------------------------------------
// A non-assignable held value continues through the remaining rules
// ---------------------------------------------------------------------------

#[test]
fn held_string_parses_into_int_slot() {
    assert_eq!(
        coerced(Value::any("1,234"), Type::I64, 0_i64),
        Value::I64(1234)
    );
}

#[test]
fn held_invalid_nullable_defaults_to_zero() {
    assert_eq!(
        coerced(Value::any(Nullable::I64(None)), Type::I64, 9_i64),
        Value::I64(0)
    );
}

#[test]
fn held_float_truncates_into_int_slot() {
    assert_eq!(coerced(Value::any(9.9_f64), Type::I64, 0_i64), Value::I64(9));
}

// ---------------------------------------------------------------------------
// Absent containers and container destinations
// ---------------------------------------------------------------------------

#[test]
fn absent_any_into_int_slot_is_noop() {
    assert_eq!(coerced(Value::null_any(), Type::I64, 5_i64), Value::I64(5));
}

#[test]
fn absent_any_into_any_slot_assigns() {
    assert_eq!(
        coerced(Value::null_any(), Type::Any, Value::any(1_i64)),
        Value::null_any()
    );
}

#[test]
fn concrete_value_into_any_slot_is_wrapped() {
    assert_eq!(
        coerced(42_i64, Type::Any, Value::null_any()),
        Value::any(42_i64)
    );
}

#[test]
fn held_value_into_any_slot_stays_wrapped() {
    assert_eq!(
        coerced(Value::any("x"), Type::Any, Value::null_any()),
        Value::any("x")
    );
}
