use super::Value;
use crate::Error;

macro_rules! impl_num {
    (
        $( $variant:ident($ty:ty), )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

// Caller-facing accessors for reading mapped fields back out of a record.
// These are the only place the crate's Error type is produced; the coercion
// path never fails.

macro_rules! try_convert_range {
    ($val:expr, $variant:ident, $target_ty:ty) => {
        $val.try_into()
            .map_err(|_| Error::type_conversion(&Value::$variant($val), stringify!($target_ty)))
    };
}

macro_rules! parse_string {
    ($s:expr, $target_ty:ty) => {
        match $s.parse::<$target_ty>() {
            Ok(v) => Ok(v),
            Err(_) => Err(Error::type_conversion(
                &Value::String($s),
                stringify!($target_ty),
            )),
        }
    };
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I64(v) => Ok(v),
            Value::I8(v) => Ok(v.into()),
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            Value::U8(v) => Ok(v.into()),
            Value::U16(v) => Ok(v.into()),
            Value::U32(v) => Ok(v.into()),
            Value::U64(v) => try_convert_range!(v, U64, i64),
            Value::String(s) => parse_string!(s, i64),
            value => Err(Error::type_conversion(&value, "i64")),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U64(v) => Ok(v),
            Value::U8(v) => Ok(v.into()),
            Value::U16(v) => Ok(v.into()),
            Value::U32(v) => Ok(v.into()),
            Value::I8(v) => try_convert_range!(v, I8, u64),
            Value::I16(v) => try_convert_range!(v, I16, u64),
            Value::I32(v) => try_convert_range!(v, I32, u64),
            Value::I64(v) => try_convert_range!(v, I64, u64),
            Value::String(s) => parse_string!(s, u64),
            value => Err(Error::type_conversion(&value, "u64")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v.into()),
            Value::I8(v) => Ok(v.into()),
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v as f64),
            Value::U8(v) => Ok(v.into()),
            Value::U16(v) => Ok(v.into()),
            Value::U32(v) => Ok(v.into()),
            Value::U64(v) => Ok(v as f64),
            Value::String(s) => parse_string!(s, f64),
            value => Err(Error::type_conversion(&value, "f64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(&value, "String")),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(&value, "bool")),
        }
    }
}
