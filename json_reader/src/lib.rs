//! A small JSON reader: a scanner that turns text into [`Token`]s and a
//! recursive-descent [`Parser`] that turns tokens into a [`Value`].
//!
//! Supported subset: numbers are `-?[0-9]+(\.[0-9]+)?` (no exponents), and
//! string escapes are kept raw rather than decoded.
//!
//! ```
//! use json_reader::{parse, Value};
//!
//! let value = parse(r#"{"a": [1, {"b": null}]}"#).unwrap();
//! assert_eq!(Some(&Value::Null), value.get("a").and_then(|a| a.get_index(1)).and_then(|o| o.get("b")));
//! ```

mod error;
mod from_value;
mod options;
mod parser;
mod scanner;
mod token;
mod value;

pub use error::{ConvertError, Error, LexError, LexErrorKind, ParseError, ParseErrorKind, Stage};
pub use from_value::{FromValue, from_value};
pub use json_reader_macros::FromValue;
pub use options::ParseOptions;
pub use parser::{Parser, parse_tokens, parse_tokens_with_options};
pub use scanner::{Scanner, tokenize};
pub use token::{Token, TokenKind};
pub use value::{Object, Value};

/// Tokenize and parse a complete document with [`ParseOptions::strict`].
pub fn parse(input: &str) -> Result<Value, Error> {
    parse_with_options(input, ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Value, Error> {
    if input.is_empty() {
        tracing::debug!("rejecting empty input");
        return Err(Error::EmptyInput);
    }

    let tokens = tokenize(input)?;
    let value = parse_tokens_with_options(&tokens, options)?;

    tracing::debug!(tokens = tokens.len(), root = value.type_name(), "parsed document");
    Ok(value)
}

/// Parse a document and convert it into `T`.
pub fn from_str<T: FromValue>(input: &str) -> Result<T, Error> {
    let value = parse(input)?;
    Ok(T::from_value(value)?)
}
