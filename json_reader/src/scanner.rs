use crate::{
    error::{LexError, LexErrorKind},
    token::{Token, TokenKind},
};

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    token_start: usize,
    current: usize,
}

impl<'a> Scanner<'a> {
    pub fn init(source: &'a str) -> Self {
        Self {
            source,
            current: 0,
            token_start: 0,
        }
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let start = self.token_start;
        self.token_start = self.current;

        Token::init(kind, &self.source[start..self.current], start)
    }

    fn make_err(&self, kind: LexErrorKind, position: usize) -> LexError {
        LexError { kind, position }
    }

    fn advance(&mut self) -> Option<char> {
        // Step over the whole UTF-8 sequence, not just one byte
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }

        count
    }

    fn number(&mut self) -> Result<Token, LexError> {
        // Optional sign, then at least one digit
        if self.peek() == Some('-') {
            self.advance();
        }

        if self.digits() == 0 {
            return Err(self.make_err(LexErrorKind::MalformedNumber, self.current));
        }

        // A `.` must be followed by at least one digit. Exponents are not part of
        // the grammar, so an `e` is left for the next scan to reject.
        if self.peek() == Some('.') {
            self.advance();
            if self.digits() == 0 {
                return Err(self.make_err(LexErrorKind::MalformedNumber, self.current));
            }
        }

        Ok(self.make_token(TokenKind::NumberLit))
    }

    fn string(&mut self) -> Result<Token, LexError> {
        let open = self.token_start;

        // Skip opening quote
        self.advance();

        loop {
            match self.advance() {
                None => return Err(self.make_err(LexErrorKind::UnterminatedString, open)),
                Some('"') => break,
                Some('\\') => {
                    // Keep the escape and the escaped character as-is
                    if self.advance().is_none() {
                        return Err(self.make_err(LexErrorKind::UnterminatedString, open));
                    }
                }
                Some(_) => {}
            }
        }

        let payload = &self.source[open + 1..self.current - 1];
        let token = Token::init(TokenKind::StringLit, payload, open);
        self.token_start = self.current;

        Ok(token)
    }

    fn keyword(&mut self, word: &str, kind: TokenKind) -> Result<Token, LexError> {
        if !self.source[self.current..].starts_with(word) {
            let c = self.peek().unwrap_or_default();
            return Err(self.make_err(LexErrorKind::UnexpectedCharacter(c), self.current));
        }

        self.current += word.len();
        Ok(self.make_token(kind))
    }

    fn symbol(&mut self, kind: TokenKind) -> Token {
        self.advance();
        self.make_token(kind)
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();
        self.token_start = self.current;

        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let token = match c {
            '{' => self.symbol(TokenKind::OpenObject),
            '}' => self.symbol(TokenKind::CloseObject),
            '[' => self.symbol(TokenKind::OpenArray),
            ']' => self.symbol(TokenKind::CloseArray),
            ':' => self.symbol(TokenKind::Colon),
            ',' => self.symbol(TokenKind::Comma),
            '"' => self.string()?,
            't' => self.keyword("true", TokenKind::BoolLit)?,
            'f' => self.keyword("false", TokenKind::BoolLit)?,
            'n' => self.keyword("null", TokenKind::NullLit)?,
            c if c.is_ascii_digit() || c == '-' => self.number()?,
            c => {
                return Err(self.make_err(LexErrorKind::UnexpectedCharacter(c), self.current));
            }
        };

        Ok(Some(token))
    }
}

/// Scan `source` into its full token sequence.
///
/// Empty or whitespace-only input gives an empty sequence; rejecting it is up to
/// the caller.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::init(source);
    let mut tokens = Vec::new();

    loop {
        match scanner.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(err) => {
                tracing::debug!(%err, "tokenizing failed");
                return Err(err);
            }
        }
    }

    tracing::trace!(count = tokens.len(), bytes = source.len(), "tokenized input");
    Ok(tokens)
}
