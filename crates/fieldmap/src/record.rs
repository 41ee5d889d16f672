mod field;
pub use field::Field;

mod slot;
pub use slot::FieldSlotMut;

use crate::value::{Type, Value};

use indexmap::IndexMap;

/// A record instance: an ordered set of named, typed field slots.
///
/// Field order is declaration (insertion) order, which is also the order
/// the mapper walks source fields in.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    fields: IndexMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field, builder-style. Re-declaring a name replaces the
    /// earlier field in place.
    pub fn with(mut self, name: impl Into<String>, ty: Type, value: impl Into<Value>) -> Self {
        self.insert(name, ty, value);
        self
    }

    /// Declares a field.
    pub fn insert(&mut self, name: impl Into<String>, ty: Type, value: impl Into<Value>) {
        self.fields.insert(name.into(), Field::new(ty, value.into()));
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The current value of the named field, if the field exists.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(Field::value)
    }

    /// Replaces the named field's value as-is, without coercion. Returns
    /// false when no field of that name exists.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> bool {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.set_value(value.into());
                true
            }
            None => false,
        }
    }

    /// A mutable slot handle for the named field, if the field exists.
    pub fn slot_mut(&mut self, name: &str) -> Option<FieldSlotMut<'_>> {
        self.fields.get_mut(name).map(Field::slot_mut)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
