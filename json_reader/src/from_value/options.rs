use crate::{ConvertError, FromValue, Value};

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        match value {
            Value::Null => Ok(None),
            other => Ok(Some(T::from_value(other)?)),
        }
    }

    // An absent member reads the same as an explicit `null`
    fn missing_field(_name: &str) -> Result<Self, ConvertError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_null() {
        let result = Option::<u32>::from_value(parse("null").unwrap());
        assert_eq!(Ok(None), result);
    }

    #[test]
    fn test_nested_option_null() {
        let result = Option::<Option<u32>>::from_value(parse("null").unwrap());
        assert_eq!(Ok(None), result);
    }

    #[test]
    fn test_with_value() {
        let result = Option::<String>::from_value(parse("\"42\"").unwrap());
        assert_eq!(Ok(Some("42".to_string())), result);
    }

    #[test]
    fn test_nested_with_value() {
        let result = Option::<Option<bool>>::from_value(parse("true").unwrap());
        assert_eq!(Ok(Some(Some(true))), result);
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(Ok(None), Option::<bool>::missing_field("flag"));
        assert_eq!(
            Err(ConvertError::MissingField("flag".to_string())),
            bool::missing_field("flag")
        );
    }

    #[test]
    fn test_nested_with_incorrect_type() {
        let result = Option::<bool>::from_value(parse("5").unwrap());
        assert_eq!(
            Err(ConvertError::TypeMismatch {
                expected: "boolean",
                found: "number",
            }),
            result
        );
    }
}
