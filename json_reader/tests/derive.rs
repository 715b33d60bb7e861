use std::collections::HashMap;

use json_reader::{ConvertError, Error, FromValue, Value, from_str, parse};

#[derive(FromValue, Debug, PartialEq)]
struct Address {
    street: String,
    city: String,
    zipcode: String,
}

#[derive(FromValue, Debug, PartialEq)]
struct Contact {
    email: String,
    phone: Option<String>,
    address: Address,
}

#[derive(FromValue, Debug, PartialEq)]
struct Login {
    login: String,
    success: bool,
}

#[derive(FromValue, Debug, PartialEq)]
struct Profile {
    name: String,
    age: u8,
    is_verified: bool,
    balance: f64,
    nickname: Option<String>,
    contact: Contact,
    tags: Vec<String>,
    history: Vec<Login>,
    unicode_example: String,
    numbers: HashMap<String, f64>,
}

#[derive(FromValue, Debug, PartialEq)]
struct Test {
    name: Option<String>,
    age: i64,
}

#[derive(FromValue, Debug, PartialEq)]
struct Keyword {
    r#type: String,
}

#[derive(FromValue, Debug, PartialEq)]
struct Wrapper<T> {
    inner: T,
    extra: Option<Box<Value>>,
}

#[test]
fn test_profile() {
    let profile: Profile = from_str(include_str!("data/profile.json")).unwrap();

    assert_eq!("Jane Doe", profile.name);
    assert_eq!(32, profile.age);
    assert!(profile.is_verified);
    assert_eq!(10457.89, profile.balance);
    assert_eq!(None, profile.nickname);
    assert_eq!(
        Contact {
            email: "jane.doe@example.com".to_string(),
            phone: Some("+1-555-123-4567".to_string()),
            address: Address {
                street: "123 Maple Street".to_string(),
                city: "Springfield".to_string(),
                zipcode: "12345".to_string(),
            },
        },
        profile.contact
    );
    assert_eq!(vec!["user", "admin", "editor"], profile.tags);
    assert_eq!(
        vec![
            Login {
                login: "2025-07-01T12:34:56Z".to_string(),
                success: true,
            },
            Login {
                login: "2025-06-30T08:21:12Z".to_string(),
                success: false,
            },
        ],
        profile.history
    );
    assert_eq!(Some(&-5.0), profile.numbers.get("negative"));
}

#[test]
fn test_optional_field_absent() {
    let result = from_str::<Test>(r#"{"age": 3}"#);
    assert_eq!(Ok(Test { name: None, age: 3 }), result);

    let result = from_str::<Test>(r#"{"name": "hi", "age": 3}"#);
    assert_eq!(
        Ok(Test {
            name: Some("hi".to_string()),
            age: 3,
        }),
        result
    );
}

#[test]
fn test_missing_field() {
    let result = from_str::<Test>(r#"{"name": "hi"}"#);
    assert_eq!(
        Err(Error::Convert(ConvertError::MissingField("age".to_string()))),
        result
    );
}

#[test]
fn test_unknown_field() {
    let result = from_str::<Test>(r#"{"age": 3, "height": 180}"#);
    assert_eq!(
        Err(Error::Convert(ConvertError::UnknownField("height".to_string()))),
        result
    );
}

#[test]
fn test_nested_error_path() {
    let source = r#"{"email": "a@b.c", "address": {"street": "x", "city": 7, "zipcode": "1"}}"#;
    let err = from_str::<Contact>(source).unwrap_err();

    assert_eq!(
        "convert error: field `address`: field `city`: expected string, found number",
        err.to_string()
    );
}

#[test]
fn test_not_an_object() {
    let result = Test::from_value(parse("[1]").unwrap());
    assert_eq!(
        Err(ConvertError::TypeMismatch {
            expected: "object",
            found: "array",
        }),
        result
    );
}

#[test]
fn test_raw_identifier_key() {
    let result = from_str::<Keyword>(r#"{"type": "admin"}"#);
    assert_eq!(
        Ok(Keyword {
            r#type: "admin".to_string(),
        }),
        result
    );
}

#[test]
fn test_generic_struct() {
    let result = from_str::<Wrapper<Vec<u32>>>(r#"{"inner": [1, 2], "extra": {"k": null}}"#).unwrap();
    assert_eq!(vec![1, 2], result.inner);
    assert_eq!(Some(true), result.extra.map(|extra| extra.is_object()));

    let result = from_str::<Wrapper<bool>>(r#"{"inner": true}"#);
    assert_eq!(
        Ok(Wrapper {
            inner: true,
            extra: None,
        }),
        result
    );
}

#[test]
fn test_parse_failure_surfaces_before_conversion() {
    let err = from_str::<Test>(r#"{"age": 3,}"#).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}
