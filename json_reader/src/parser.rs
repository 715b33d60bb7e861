use crate::{
    error::{ParseError, ParseErrorKind},
    options::ParseOptions,
    token::{Token, TokenKind},
    value::{Object, Value},
};

/// Recursive-descent parser over a borrowed token sequence.
///
/// The cursor lives inside the parser and [`Parser::parse`] consumes it, so a
/// token sequence can be parsed any number of times but never from a position
/// left behind by an earlier parse.
#[derive(Debug, Clone)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], options: ParseOptions) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
            options,
        }
    }

    pub fn parse(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;

        if !self.options.allow_trailing_tokens && self.cursor < self.tokens.len() {
            return Err(self.make_err(ParseErrorKind::TrailingTokens));
        }

        Ok(value)
    }

    fn make_err(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            position: self.cursor,
            lexeme: self.peek().map(|token| token.text.clone()),
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn peek_next_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.cursor + 1).map(|token| token.kind)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }

    /// Consume a token of `kind`, or fail with `kind_err`.
    fn consume(
        &mut self,
        kind: TokenKind,
        kind_err: ParseErrorKind,
    ) -> Result<&'t Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.cursor += 1;
                Ok(token)
            }
            Some(_) => Err(self.make_err(kind_err)),
            None => Err(self.make_err(ParseErrorKind::UnexpectedEnd)),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(self.make_err(ParseErrorKind::NestingTooDeep(self.options.max_depth)));
        }

        self.depth += 1;
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.make_err(ParseErrorKind::ExpectedValue));
        };

        let value = match token.kind {
            TokenKind::OpenObject => return self.parse_object(),
            TokenKind::OpenArray => return self.parse_array(),
            TokenKind::StringLit => Value::String(token.text.clone()),
            TokenKind::NumberLit => {
                let number = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| self.make_err(ParseErrorKind::InvalidNumber))?;
                Value::Number(number)
            }
            // NOTE: the scanner only emits `true` or `false` for this kind
            TokenKind::BoolLit => Value::Bool(token.text == "true"),
            TokenKind::NullLit => Value::Null,
            _ => return Err(self.make_err(ParseErrorKind::ExpectedValue)),
        };

        self.advance();
        Ok(value)
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.consume(TokenKind::OpenObject, ParseErrorKind::ExpectedValue)?;

        let mut object = Object::new();

        // Loop through all members, until reaching the closing brace
        loop {
            match self.peek_kind() {
                None => return Err(self.make_err(ParseErrorKind::UnexpectedEnd)),
                Some(TokenKind::CloseObject) => break,
                Some(_) => {}
            }

            let key = self.consume(TokenKind::StringLit, ParseErrorKind::ExpectedStringKey)?;
            self.consume(TokenKind::Colon, ParseErrorKind::ExpectedColon)?;

            let value = self.parse_value()?;
            object.insert(key.text.clone(), value);

            // A comma directly before `}` is a trailing comma and falls through
            // to the error below
            match self.peek_kind() {
                Some(TokenKind::Comma) if self.peek_next_kind() != Some(TokenKind::CloseObject) => {
                    self.advance();
                }
                Some(TokenKind::CloseObject) => {}
                None => return Err(self.make_err(ParseErrorKind::UnexpectedEnd)),
                Some(_) => return Err(self.make_err(ParseErrorKind::ExpectedCommaOrBrace)),
            }
        }

        self.consume(TokenKind::CloseObject, ParseErrorKind::ExpectedCommaOrBrace)?;
        self.depth -= 1;

        Ok(Value::Object(object))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.consume(TokenKind::OpenArray, ParseErrorKind::ExpectedValue)?;

        let mut elems = Vec::new();

        // Loop through all elements, until reaching the closing bracket
        loop {
            match self.peek_kind() {
                None => return Err(self.make_err(ParseErrorKind::UnexpectedEnd)),
                Some(TokenKind::CloseArray) => break,
                Some(_) => {}
            }

            elems.push(self.parse_value()?);

            match self.peek_kind() {
                Some(TokenKind::Comma) if self.peek_next_kind() != Some(TokenKind::CloseArray) => {
                    self.advance();
                }
                Some(TokenKind::CloseArray) => {}
                None => return Err(self.make_err(ParseErrorKind::UnexpectedEnd)),
                Some(_) => return Err(self.make_err(ParseErrorKind::ExpectedCommaOrBracket)),
            }
        }

        self.consume(TokenKind::CloseArray, ParseErrorKind::ExpectedCommaOrBracket)?;
        self.depth -= 1;

        Ok(Value::Array(elems))
    }
}

/// Parse a token sequence with [`ParseOptions::strict`].
pub fn parse_tokens(tokens: &[Token]) -> Result<Value, ParseError> {
    parse_tokens_with_options(tokens, ParseOptions::default())
}

pub fn parse_tokens_with_options(
    tokens: &[Token],
    options: ParseOptions,
) -> Result<Value, ParseError> {
    let result = Parser::new(tokens, options).parse();

    match &result {
        Ok(value) => tracing::trace!(kind = value.type_name(), "parsed token sequence"),
        Err(err) => tracing::debug!(%err, lexeme = ?err.lexeme, "parsing failed"),
    }

    result
}
