use crate::{ConvertError, FromValue, Value};

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        T::from_value(value).map(Box::new)
    }

    fn missing_field(name: &str) -> Result<Self, ConvertError> {
        T::missing_field(name).map(Box::new)
    }
}
