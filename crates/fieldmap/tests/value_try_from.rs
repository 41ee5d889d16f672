use fieldmap::Value;

// ---------------------------------------------------------------------------
// Widening and parsing succeed
// ---------------------------------------------------------------------------

#[test]
fn i64_from_narrower_signed() {
    assert_eq!(i64::try_from(Value::I32(12)).unwrap(), 12);
    assert_eq!(i64::try_from(Value::I8(-3)).unwrap(), -3);
}

#[test]
fn i64_from_string() {
    assert_eq!(i64::try_from(Value::from("1234")).unwrap(), 1234);
}

#[test]
fn u64_from_unsigned() {
    assert_eq!(u64::try_from(Value::U32(7)).unwrap(), 7);
}

#[test]
fn f64_from_int_and_float() {
    assert_eq!(f64::try_from(Value::I64(3)).unwrap(), 3.0);
    assert_eq!(f64::try_from(Value::F32(0.5)).unwrap(), 0.5);
}

#[test]
fn string_from_string() {
    assert_eq!(String::try_from(Value::from("x")).unwrap(), "x");
}

// ---------------------------------------------------------------------------
// Range and kind mismatches report errors
// ---------------------------------------------------------------------------

#[test]
fn i64_from_huge_u64_is_out_of_range() {
    let err = i64::try_from(Value::U64(u64::MAX)).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert U64 to i64");
}

#[test]
fn u64_from_negative_is_out_of_range() {
    assert!(u64::try_from(Value::I64(-1)).is_err());
}

#[test]
fn i64_from_garbage_string_fails() {
    assert!(i64::try_from(Value::from("nope")).is_err());
}

#[test]
fn string_from_int_fails() {
    let err = String::try_from(Value::I64(42)).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert I64 to String");
}

#[test]
fn bool_from_int_fails() {
    assert!(bool::try_from(Value::I64(1)).is_err());
}
