use super::Value;

/// A nullable-primitive wrapper: a payload paired with a validity flag.
///
/// The set of wrapped kinds is closed and deliberately small; the mapper
/// only special-cases these five.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nullable {
    /// Nullable signed 16-bit integer
    I16(Option<i16>),

    /// Nullable signed 32-bit integer
    I32(Option<i32>),

    /// Nullable signed 64-bit integer
    I64(Option<i64>),

    /// Nullable 64-bit floating point value
    F64(Option<f64>),

    /// Nullable string
    String(Option<String>),
}

/// Identifies one of the nullable wrapper kinds without carrying a payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullableKind {
    I16,
    I32,
    I64,
    F64,
    String,
}

impl Nullable {
    pub fn kind(&self) -> NullableKind {
        match self {
            Self::I16(_) => NullableKind::I16,
            Self::I32(_) => NullableKind::I32,
            Self::I64(_) => NullableKind::I64,
            Self::F64(_) => NullableKind::F64,
            Self::String(_) => NullableKind::String,
        }
    }

    pub const fn is_valid(&self) -> bool {
        match self {
            Self::I16(v) => v.is_some(),
            Self::I32(v) => v.is_some(),
            Self::I64(v) => v.is_some(),
            Self::F64(v) => v.is_some(),
            Self::String(v) => v.is_some(),
        }
    }

    /// Unwraps to the payload when valid, or to the kind's fixed default
    /// when invalid: zero for numeric kinds, a single space for strings.
    ///
    /// An invalid string wrapper unwraps to `" "`, not `""`.
    pub fn unwrap_or_default(&self) -> Value {
        match self {
            Self::I16(Some(v)) => Value::I16(*v),
            Self::I16(None) => Value::I16(0),
            Self::I32(Some(v)) => Value::I32(*v),
            Self::I32(None) => Value::I32(0),
            Self::I64(Some(v)) => Value::I64(*v),
            Self::I64(None) => Value::I64(0),
            Self::F64(Some(v)) => Value::F64(*v),
            Self::F64(None) => Value::F64(0.0),
            Self::String(Some(v)) => Value::String(v.clone()),
            Self::String(None) => Value::String(" ".to_string()),
        }
    }
}
