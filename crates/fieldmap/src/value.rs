mod nullable;
pub use nullable::{Nullable, NullableKind};

mod num;

mod ty;
pub use ty::Type;

/// A single field value.
///
/// This is a closed tagged union over the kinds the mapper understands:
/// primitives, text, an optional/pointer-like wrapper, an open "any held
/// value" container, and the nullable-primitive wrappers.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// No value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point value
    F32(f32),

    /// 64-bit floating point value
    F64(f64),

    /// String value
    String(String),

    /// Optional/pointer-like value: a present referent or absent
    Ptr(Option<Box<Value>>),

    /// Polymorphic container: a concrete held value or absent
    Any(Option<Box<Value>>),

    /// Nullable-primitive wrapper: a payload paired with a validity flag
    Nullable(Nullable),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Creates a present optional value referencing `value`.
    pub fn ptr(value: impl Into<Self>) -> Self {
        Self::Ptr(Some(Box::new(value.into())))
    }

    /// Creates an absent optional value.
    pub const fn null_ptr() -> Self {
        Self::Ptr(None)
    }

    /// Creates a polymorphic container holding `value`.
    pub fn any(value: impl Into<Self>) -> Self {
        Self::Any(Some(Box::new(value.into())))
    }

    /// Creates an absent polymorphic container.
    pub const fn null_any() -> Self {
        Self::Any(None)
    }

    pub const fn is_ptr(&self) -> bool {
        matches!(self, Self::Ptr(_))
    }

    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any(_))
    }

    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    /// Widens any signed-integer variant to `i64`.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    /// Widens any unsigned-integer variant to `u64`.
    pub fn as_uint(&self) -> Option<u64> {
        match *self {
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v),
            _ => None,
        }
    }

    /// Widens any floating-point variant to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if the value can be stored as-is in a slot of the given
    /// declared type.
    ///
    /// Numeric widths must match exactly; an `I32` is not a value of type
    /// `I64`. Every value fits an `Any` slot.
    pub fn is_a(&self, ty: &Type) -> bool {
        match (self, ty) {
            (_, Type::Any) => true,
            (Self::Null, _) => true,
            (Self::Bool(_), Type::Bool) => true,
            (Self::I8(_), Type::I8) => true,
            (Self::I16(_), Type::I16) => true,
            (Self::I32(_), Type::I32) => true,
            (Self::I64(_), Type::I64) => true,
            (Self::U8(_), Type::U8) => true,
            (Self::U16(_), Type::U16) => true,
            (Self::U32(_), Type::U32) => true,
            (Self::U64(_), Type::U64) => true,
            (Self::F32(_), Type::F32) => true,
            (Self::F64(_), Type::F64) => true,
            (Self::String(_), Type::String) => true,
            (Self::Ptr(Some(referent)), Type::Ptr(inner)) => referent.is_a(inner),
            (Self::Ptr(None), Type::Ptr(_)) => true,
            (Self::Nullable(value), Type::Nullable(kind)) => value.kind() == *kind,
            _ => false,
        }
    }

    /// The name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Ptr(_) => "Ptr",
            Self::Any(_) => "Any",
            Self::Nullable(_) => "Nullable",
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Nullable> for Value {
    fn from(src: Nullable) -> Self {
        Self::Nullable(src)
    }
}
