use crate::{error::ConvertError, value::Value};

mod arrays;
mod json_value;
mod objects;
mod options;
mod primitives;
mod strings;

/// Conversion from a parsed [`Value`] tree into a Rust type.
///
/// Implemented for primitives, strings, containers and [`Value`] itself, and
/// derivable for structs with named fields via `#[derive(FromValue)]`.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ConvertError>;

    /// Called by derived impls when the object has no member for `name`.
    fn missing_field(name: &str) -> Result<Self, ConvertError> {
        Err(ConvertError::MissingField(name.to_string()))
    }
}

/// Convert a whole tree, as in `from_value::<Vec<u8>>(value)`.
pub fn from_value<T: FromValue>(value: Value) -> Result<T, ConvertError> {
    T::from_value(value)
}

fn mismatch(expected: &'static str, found: &Value) -> ConvertError {
    ConvertError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}
