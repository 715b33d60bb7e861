use super::mismatch;
use crate::{ConvertError, FromValue, Value};

// Escape sequences arrive undecoded, exactly as the scanner captured them
impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::String(val) => Ok(val),
            other => Err(mismatch("string", &other)),
        }
    }
}
