use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use super::mismatch;
use crate::{ConvertError, FromValue, Value};

fn members<T, M>(value: Value) -> Result<M, ConvertError>
where
    T: FromValue,
    M: FromIterator<(String, T)>,
{
    let object = match value {
        Value::Object(object) => object,
        other => return Err(mismatch("object", &other)),
    };

    object
        .into_iter()
        .map(|(key, value)| match T::from_value(value) {
            Ok(value) => Ok((key, value)),
            Err(err) => Err(err.in_field(&key)),
        })
        .collect()
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        members(value)
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        members(value)
    }
}

impl<T: FromValue> FromValue for IndexMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ConvertError> {
        members(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_empty() {
        let result = HashMap::<String, Value>::from_value(parse("{}").unwrap());
        assert_eq!(Ok(HashMap::new()), result);
    }

    #[test]
    fn test_float_only() {
        let result = HashMap::<String, f64>::from_value(
            parse(r#"{"prop1": 5, "prop2": 300, "prop3": 16.9}"#).unwrap(),
        );

        let expected = HashMap::from([
            ("prop1".to_string(), 5.0),
            ("prop2".to_string(), 300.0),
            ("prop3".to_string(), 16.9),
        ]);

        assert_eq!(Ok(expected), result);
    }

    #[test]
    fn test_mixed() {
        let result = BTreeMap::<String, Value>::from_value(
            parse(r#"{"prop1": 5, "prop2": true, "prop3": "test"}"#).unwrap(),
        );

        let expected = BTreeMap::from([
            ("prop1".to_string(), Value::Number(5.0)),
            ("prop2".to_string(), Value::Bool(true)),
            ("prop3".to_string(), Value::String("test".to_string())),
        ]);

        assert_eq!(Ok(expected), result);
    }

    #[test]
    fn test_keeps_order() {
        let result =
            IndexMap::<String, u32>::from_value(parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap())
                .unwrap();
        let keys: Vec<&str> = result.keys().map(String::as_str).collect();

        assert_eq!(vec!["z", "a", "m"], keys);
    }

    #[test]
    fn test_bad_member() {
        let result =
            HashMap::<String, bool>::from_value(parse(r#"{"ok": true, "bad": 1}"#).unwrap());
        assert_eq!(
            Err(ConvertError::TypeMismatch {
                expected: "boolean",
                found: "number",
            }
            .in_field("bad")),
            result
        );
    }

    #[test]
    fn test_not_an_object() {
        let result = HashMap::<String, bool>::from_value(parse("[true]").unwrap());
        assert_eq!(
            Err(ConvertError::TypeMismatch {
                expected: "object",
                found: "array",
            }),
            result
        );
    }
}
