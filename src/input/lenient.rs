//! Recursive-descent parser for JavaScript object-literal data.
//!
//! Accepts a superset of JSON: unquoted identifier or numeric keys,
//! single-quoted strings, `//` and `/* */` comments, trailing commas,
//! explicit `+` signs, bare leading or trailing decimal points and
//! hexadecimal integers. Integers with a leading zero (`010`) are rejected
//! rather than guessed as octal or decimal. Produces a [`serde_json::Value`]; nothing is ever
//! evaluated.

use serde_json::{Map, Number, Value};

use crate::error::ParseError;

/// Nesting limit guarding the recursion against pathological input.
const MAX_DEPTH: usize = 128;

/// Parses `text` as a single object-literal value.
///
/// # Errors
///
/// Returns `ParseError::Syntax` with the 1-based line and column of the
/// first offending character.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text);
    parser.skip_trivia()?;
    let value = parser.value(0)?;
    parser.skip_trivia()?;
    if parser.peek().is_some() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, pos: usize, message: impl Into<String>) -> ParseError {
        let consumed = &self.src[..pos.min(self.src.len())];
        let line = consumed.matches('\n').count() + 1;
        let column = consumed
            .rsplit('\n')
            .next()
            .map_or(0, |l| l.chars().count())
            + 1;
        ParseError::Syntax {
            line,
            column,
            message: message.into(),
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", char::from(byte))))
        }
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(b), _) if b.is_ascii_whitespace() => self.pos += 1,
                (Some(b'/'), Some(b'/')) => {
                    while let Some(b) = self.bump() {
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                (Some(b'/'), Some(b'*')) => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        match self.bump() {
                            Some(b'*') if self.peek() == Some(b'/') => {
                                self.pos += 1;
                                break;
                            }
                            Some(_) => {}
                            None => return Err(self.error_at(start, "unterminated comment")),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn value(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        match self.peek() {
            Some(b'{') => self.object(depth),
            Some(b'[') => self.array(depth),
            Some(q @ (b'"' | b'\'')) => self.string(q).map(Value::String),
            Some(b'+' | b'-' | b'.' | b'0'..=b'9') => self.number(),
            Some(b) if is_ident_start(b) => {
                let start = self.pos;
                match self.identifier() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    "NaN" | "Infinity" => {
                        Err(self.error_at(start, "non-finite numbers are not supported"))
                    }
                    other => Err(self.error_at(start, format!("unexpected identifier '{other}'"))),
                }
            }
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn object(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.expect(b'{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(b'}') {
                self.pos += 1;
                return Ok(Value::Object(map));
            }
            let key = self.key()?;
            self.skip_trivia()?;
            self.expect(b':')?;
            self.skip_trivia()?;
            let value = self.value(depth + 1)?;
            map.insert(key, value);
            self.skip_trivia()?;
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.error("expected ',' or '}'")),
            }
        }
    }

    fn array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(b']') {
                self.pos += 1;
                return Ok(Value::Array(items));
            }
            items.push(self.value(depth + 1)?);
            self.skip_trivia()?;
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.error("expected ',' or ']'")),
            }
        }
    }

    fn key(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(q @ (b'"' | b'\'')) => self.string(q),
            Some(b) if is_ident_start(b) => Ok(self.identifier().to_owned()),
            Some(b'0'..=b'9' | b'.') => {
                let start = self.pos;
                self.number()?;
                Ok(self.src[start..self.pos].to_owned())
            }
            _ => Err(self.error("expected property name")),
        }
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn string(&mut self, quote: u8) -> Result<String, ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        loop {
            let Some(c) = self.src[self.pos..].chars().next() else {
                return Err(self.error_at(start, "unterminated string"));
            };
            self.pos += c.len_utf8();
            match c {
                '\n' | '\r' => return Err(self.error_at(start, "unterminated string")),
                '\\' => out.push(self.escape()?),
                c if c == char::from(quote) => return Ok(out),
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, ParseError> {
        let at = self.pos;
        let Some(b) = self.bump() else {
            return Err(self.error_at(at, "unterminated escape sequence"));
        };
        let c = match b {
            b'n' => '\n',
            b't' => '\t',
            b'r' => '\r',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'v' => '\u{b}',
            b'0' => '\0',
            b'x' => self.hex_char(2, at)?,
            b'u' => self.hex_char(4, at)?,
            b'\\' | b'"' | b'\'' | b'/' => char::from(b),
            _ => return Err(self.error_at(at, "invalid escape sequence")),
        };
        Ok(c)
    }

    fn hex_char(&mut self, digits: usize, at: usize) -> Result<char, ParseError> {
        let end = self.pos + digits;
        let code = self
            .src
            .get(self.pos..end)
            .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|h| u32::from_str_radix(h, 16).ok())
            .and_then(char::from_u32)
            .ok_or_else(|| self.error_at(at, "invalid escape sequence"))?;
        self.pos = end;
        Ok(code)
    }

    #[allow(clippy::cast_precision_loss)]
    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        let magnitude = if self.peek() == Some(b'0') && matches!(self.peek_at(1), Some(b'x' | b'X'))
        {
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            u64::from_str_radix(&self.src[digits_start..self.pos], 16)
                .ok()
                .map(|v| v as f64)
        } else {
            let digits_start = self.pos;
            let int_digits = self.digits();
            if int_digits > 1 && self.bytes[digits_start] == b'0' {
                return Err(self.error_at(start, "leading zeros are not supported"));
            }
            let mut frac_digits = 0;
            if self.peek() == Some(b'.') {
                self.pos += 1;
                frac_digits = self.digits();
            }
            if int_digits + frac_digits == 0 {
                return Err(self.error_at(start, "invalid number"));
            }
            if matches!(self.peek(), Some(b'e' | b'E')) {
                self.pos += 1;
                if matches!(self.peek(), Some(b'+' | b'-')) {
                    self.pos += 1;
                }
                if self.digits() == 0 {
                    return Err(self.error_at(start, "invalid number exponent"));
                }
            }
            self.src[digits_start..self.pos].parse::<f64>().ok()
        };

        if self.peek().is_some_and(is_ident_continue) {
            return Err(self.error_at(start, "invalid number"));
        }
        let magnitude = magnitude.ok_or_else(|| self.error_at(start, "invalid number"))?;
        let value = if negative { -magnitude } else { magnitude };
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| self.error_at(start, "non-finite numbers are not supported"))
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}
