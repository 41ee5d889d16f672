use crate::value::Value;

use std::fmt;

#[derive(Debug)]
pub(crate) struct TypeConversionError {
    source_kind: &'static str,
    target: &'static str,
}

impl TypeConversionError {
    pub(crate) fn new(value: &Value, target: &'static str) -> Self {
        Self {
            source_kind: value.kind_name(),
            target,
        }
    }
}

impl fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert {} to {}", self.source_kind, self.target)
    }
}
