use std::fmt;

use thiserror::Error;

/// Failure while scanning raw text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset into the source
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Malformed number")]
    MalformedNumber,
}

/// Failure while building a value from a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Index into the token sequence
    pub position: usize,
    /// Text of the offending token, `None` when the tokens ran out
    pub lexeme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Expected value")]
    ExpectedValue,
    #[error("Expected string key")]
    ExpectedStringKey,
    #[error("Expected colon")]
    ExpectedColon,
    #[error("Expected comma or closing brace")]
    ExpectedCommaOrBrace,
    #[error("Expected comma or closing bracket")]
    ExpectedCommaOrBracket,
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Invalid number literal")]
    InvalidNumber,
    #[error("Unexpected trailing token")]
    TrailingTokens,
    #[error("Nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Failure while converting a [`Value`](crate::Value) into a Rust type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("number {value} does not fit in {target}")]
    NumberOutOfRange { value: f64, target: &'static str },
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        source: Box<ConvertError>,
    },
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    pub fn in_field(self, field: &str) -> Self {
        Self::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    pub fn in_element(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Input,
    Lex,
    Parse,
    Convert,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "input",
            Self::Lex => "lex",
            Self::Parse => "parse",
            Self::Convert => "convert",
        })
    }
}

/// Any failure surfaced by the crate's entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("input error: Invalid JSON input at position 0")]
    EmptyInput,
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("convert error: {0}")]
    Convert(#[from] ConvertError),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Self::EmptyInput => Stage::Input,
            Self::Lex(_) => Stage::Lex,
            Self::Parse(_) => Stage::Parse,
            Self::Convert(_) => Stage::Convert,
        }
    }

    /// Byte offset for lex errors, token index for parse errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => Some(0),
            Self::Lex(err) => Some(err.position),
            Self::Parse(err) => Some(err.position),
            Self::Convert(_) => None,
        }
    }
}
