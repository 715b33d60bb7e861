use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw lexeme. String literals keep only the payload between the quotes,
    /// with escape sequences left undecoded.
    pub text: String,
    /// Byte offset of the token's first character in the source
    pub offset: usize,
}

impl Token {
    pub fn init(kind: TokenKind, text: &str, offset: usize) -> Self {
        Self {
            kind,
            text: text.to_string(),
            offset,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}  {:<12} {}", self.offset, self.kind, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenObject,
    CloseObject,

    OpenArray,
    CloseArray,

    Colon,
    Comma,

    StringLit,
    NumberLit,
    BoolLit,
    NullLit,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OpenObject => "OpenObject",
            Self::CloseObject => "CloseObject",
            Self::OpenArray => "OpenArray",
            Self::CloseArray => "CloseArray",
            Self::Colon => "Colon",
            Self::Comma => "Comma",
            Self::StringLit => "StringLit",
            Self::NumberLit => "NumberLit",
            Self::BoolLit => "BoolLit",
            Self::NullLit => "NullLit",
        };

        // `pad` so width/alignment flags in the token dump apply
        f.pad(name)
    }
}
