mod type_conversion;

use std::sync::Arc;
use type_conversion::TypeConversionError;

use crate::value::Value;

/// An error that can occur when reading values back out of a record.
///
/// The mapping path itself never produces one of these; an unconvertible
/// field is a silent no-op by contract. Errors only surface from the
/// caller-facing `TryFrom<Value>` accessors.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    TypeConversion(TypeConversionError),
}

impl Error {
    /// Creates an error describing a failed conversion from `value` to the
    /// named target type.
    pub fn type_conversion(value: &Value, target: &'static str) -> Self {
        Self::from(ErrorKind::TypeConversion(TypeConversionError::new(
            value, target,
        )))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::TypeConversion(_) => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &*self.kind {
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::TypeConversion(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::from(ErrorKind::Anyhow(err))
    }
}
