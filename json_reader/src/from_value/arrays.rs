use super::mismatch;
use crate::{ConvertError, FromValue, Value};

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        let elems = match value {
            Value::Array(elems) => elems,
            other => return Err(mismatch("array", &other)),
        };

        elems
            .into_iter()
            .enumerate()
            .map(|(index, elem)| T::from_value(elem).map_err(|err| err.in_element(index)))
            .collect()
    }
}
