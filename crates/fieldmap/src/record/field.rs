use super::FieldSlotMut;
use crate::value::{Type, Value};

/// One field of a record: a declared type plus the current value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    ty: Type,
    value: Value,
}

impl Field {
    pub fn new(ty: Type, value: Value) -> Self {
        Self { ty, value }
    }

    /// Gets the declared type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Gets the current value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub(crate) fn slot_mut(&mut self) -> FieldSlotMut<'_> {
        FieldSlotMut {
            ty: &self.ty,
            value: &mut self.value,
        }
    }
}
