use fieldmap::value::{Nullable, NullableKind, Type};
use fieldmap::Value;

#[test]
fn primitive_widths_are_strict() {
    assert!(Value::I64(1).is_a(&Type::I64));
    assert!(!Value::I32(1).is_a(&Type::I64));
    assert!(!Value::I64(1).is_a(&Type::U64));
    assert!(Value::F32(1.0).is_a(&Type::F32));
    assert!(!Value::F32(1.0).is_a(&Type::F64));
}

#[test]
fn everything_fits_an_any_slot() {
    assert!(Value::I64(1).is_a(&Type::Any));
    assert!(Value::from("x").is_a(&Type::Any));
    assert!(Value::null_ptr().is_a(&Type::Any));
    assert!(Value::null_any().is_a(&Type::Any));
}

#[test]
fn ptr_checks_the_referent() {
    assert!(Value::ptr(1_i64).is_a(&Type::ptr(Type::I64)));
    assert!(!Value::ptr(1_i64).is_a(&Type::ptr(Type::String)));
    assert!(Value::null_ptr().is_a(&Type::ptr(Type::String)));
    assert!(!Value::ptr(1_i64).is_a(&Type::I64));
}

#[test]
fn nullable_matches_on_kind() {
    assert!(Value::Nullable(Nullable::I64(None)).is_a(&Type::Nullable(NullableKind::I64)));
    assert!(!Value::Nullable(Nullable::I64(None)).is_a(&Type::Nullable(NullableKind::F64)));
    assert!(!Value::I64(1).is_a(&Type::Nullable(NullableKind::I64)));
}

#[test]
fn null_fits_anything() {
    assert!(Value::Null.is_a(&Type::I64));
    assert!(Value::Null.is_a(&Type::String));
    assert!(Value::Null.is_a(&Type::ptr(Type::Bool)));
}
