use crate::value::{Type, Value};

/// A mutable handle into one field slot of one record instance.
///
/// Scoped to a single mapping call; it never escapes.
pub struct FieldSlotMut<'a> {
    /// The slot's declared type
    pub ty: &'a Type,

    /// The slot's current value
    pub value: &'a mut Value,
}

impl FieldSlotMut<'_> {
    /// Stores `value` in the slot, wrapping it when the slot's declared
    /// type is the polymorphic container.
    pub fn assign(&mut self, value: Value) {
        *self.value = match (self.ty, &value) {
            (Type::Any, Value::Any(_)) => value,
            (Type::Any, _) => Value::Any(Some(Box::new(value))),
            _ => value,
        };
    }
}
