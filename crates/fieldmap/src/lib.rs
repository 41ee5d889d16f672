mod error;
pub use error::Error;

pub mod map;
pub use map::map_fields;

pub mod record;
pub use record::Record;

pub mod value;
pub use value::Value;

/// A Result type alias that uses Fieldmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
