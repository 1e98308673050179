//! The validating reader.
//!
//! A whole-buffer recursive-descent JSON parser whose strictness is
//! controlled by [`ReaderOptions`]. The baseline grammar is RFC 8259 with
//! two permanent relaxations aimed at the generator's number vocabulary: a
//! leading `+` sign is always accepted, and integer parts may carry leading
//! zeros. Everything else is opt-in per flag.
//!
//! # Examples
//!
//! ```rust
//! use jsonforge::{Reader, ReaderOptions, Value};
//!
//! let reader = Reader::new(ReaderOptions::default());
//! assert_eq!(reader.parse("[+0]").unwrap(), Value::Array(vec![Value::Number(0.0)]));
//! assert!(reader.parse("[1,2,]").is_err());
//! ```

use alloc::{
    string::String,
    vec::Vec,
};
use core::{iter::Peekable, str::Chars};

use crate::{
    error::{ReaderError, SyntaxError},
    options::ReaderOptions,
    value::{Array, Map, Value},
};

/// Nesting ceiling protecting the reader's own recursion from adversarial
/// input. The generator never exceeds depth 8; this bound exists for the
/// reader's other callers (the fuzz targets feed it arbitrary text).
const MAX_NESTING: usize = 512;

/// A configured JSON reader.
///
/// Construction is cheap; one `Reader` may validate any number of
/// documents.
#[derive(Debug, Clone, Copy)]
pub struct Reader {
    options: ReaderOptions,
}

impl Reader {
    #[must_use]
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Parses one JSON document, discarding any collected comments.
    ///
    /// # Errors
    ///
    /// Returns a [`ReaderError`] carrying the syntax error and its 1-based
    /// line/column position.
    pub fn parse(&self, text: &str) -> Result<Value, ReaderError> {
        self.parse_with_comments(text).map(|(value, _)| value)
    }

    /// Parses one JSON document and returns the comments seen along the way.
    ///
    /// The comment list is empty unless both `allow_comments` and
    /// `collect_comments` are set. Comment text includes its `//` or
    /// `/* */` delimiters.
    ///
    /// # Errors
    ///
    /// Returns a [`ReaderError`] carrying the syntax error and its 1-based
    /// line/column position.
    pub fn parse_with_comments(&self, text: &str) -> Result<(Value, Vec<String>), ReaderError> {
        let mut parse = Parse::new(text, self.options);
        let root = parse.parse_root()?;
        Ok((root, parse.comments))
    }
}

struct Parse<'a> {
    chars: Peekable<Chars<'a>>,
    options: ReaderOptions,
    line: usize,
    column: usize,
    comments: Vec<String>,
}

impl<'a> Parse<'a> {
    fn new(text: &'a str, options: ReaderOptions) -> Self {
        Self {
            chars: text.chars().peekable(),
            options,
            line: 1,
            column: 1,
            comments: Vec::new(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        c
    }

    fn err(&self, source: SyntaxError) -> ReaderError {
        ReaderError {
            source,
            line: self.line,
            column: self.column,
        }
    }

    fn parse_root(&mut self) -> Result<Value, ReaderError> {
        if self.options.skip_bom && self.peek() == Some('\u{feff}') {
            self.bump();
        }
        self.skip_whitespace()?;

        let root_line = self.line;
        let root_column = self.column;
        let root = self.parse_value(0)?;
        if self.options.strict_root && !root.is_collection() {
            return Err(ReaderError {
                source: SyntaxError::NonCollectionRoot,
                line: root_line,
                column: root_column,
            });
        }

        // Trailing input is inspected only when it can fail the parse;
        // otherwise even garbage after the root is left untouched.
        if self.options.fail_if_extra {
            self.skip_whitespace()?;
            if self.peek().is_some() {
                return Err(self.err(SyntaxError::ExtraData));
            }
        }
        Ok(root)
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ReaderError> {
        if depth >= MAX_NESTING {
            return Err(self.err(SyntaxError::SyntaxError("exceeded maximum nesting depth")));
        }
        match self.peek() {
            None => Err(self.err(SyntaxError::UnexpectedEndOfInput)),
            Some('{') => self.parse_object(depth),
            Some('[') => self.parse_array(depth),
            Some('"') => Ok(Value::String(self.parse_string('"')?)),
            Some('\'') if self.options.allow_single_quotes => {
                Ok(Value::String(self.parse_string('\'')?))
            }
            Some('t') => {
                self.expect_keyword("true")?;
                Ok(Value::Boolean(true))
            }
            Some('f') => {
                self.expect_keyword("false")?;
                Ok(Value::Boolean(false))
            }
            Some('n') => {
                self.expect_keyword("null")?;
                Ok(Value::Null)
            }
            Some('N') if self.options.allow_special_floats => {
                self.expect_keyword("NaN")?;
                Ok(Value::Number(f64::NAN))
            }
            Some('I') if self.options.allow_special_floats => {
                self.expect_keyword("Infinity")?;
                Ok(Value::Number(f64::INFINITY))
            }
            Some(c) if c == '-' || c == '+' || c.is_ascii_digit() => self.parse_number(),
            Some(c) => Err(self.err(SyntaxError::InvalidCharacter(c))),
        }
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), ReaderError> {
        for expected in keyword.chars() {
            match self.peek() {
                Some(c) if c == expected => {
                    self.bump();
                }
                Some(c) => return Err(self.err(SyntaxError::InvalidCharacter(c))),
                None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
            }
        }
        Ok(())
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ReaderError> {
        self.bump(); // opening '['
        let mut items = Array::new();
        self.skip_whitespace()?;
        if self.peek() == Some(']') {
            self.bump();
            return Ok(Value::Array(items));
        }
        loop {
            self.skip_whitespace()?;
            match self.peek() {
                // Elided element: the comma is consumed as the separator
                // below.
                Some(',') if self.options.allow_dropped_null_placeholders => {
                    items.push(Value::Null);
                }
                Some(']') if self.options.allow_trailing_commas => {
                    self.bump();
                    return Ok(Value::Array(items));
                }
                _ => items.push(self.parse_value(depth + 1)?),
            }
            self.skip_whitespace()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    return Ok(Value::Array(items));
                }
                Some(c) => return Err(self.err(SyntaxError::InvalidCharacter(c))),
                None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ReaderError> {
        self.bump(); // opening '{'
        let mut map = Map::new();
        self.skip_whitespace()?;
        if self.peek() == Some('}') {
            self.bump();
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_whitespace()?;
            if self.options.allow_trailing_commas && self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Object(map));
            }
            let (key, key_line, key_column) = self.parse_key()?;
            self.skip_whitespace()?;
            match self.peek() {
                Some(':') => {
                    self.bump();
                }
                Some(c) => return Err(self.err(SyntaxError::InvalidCharacter(c))),
                None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
            }
            self.skip_whitespace()?;
            let value = self.parse_value(depth + 1)?;
            if self.options.reject_dup_keys && map.contains_key(&key) {
                return Err(ReaderError {
                    source: SyntaxError::DuplicateKey(key),
                    line: key_line,
                    column: key_column,
                });
            }
            map.insert(key, value);
            self.skip_whitespace()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                Some(c) => return Err(self.err(SyntaxError::InvalidCharacter(c))),
                None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
            }
        }
    }

    /// Parses an object key, returning the key text and its position for
    /// duplicate-key reporting.
    fn parse_key(&mut self) -> Result<(String, usize, usize), ReaderError> {
        let line = self.line;
        let column = self.column;
        match self.peek() {
            Some('"') => Ok((self.parse_string('"')?, line, column)),
            Some('\'') if self.options.allow_single_quotes => {
                Ok((self.parse_string('\'')?, line, column))
            }
            Some(c)
                if self.options.allow_numeric_keys
                    && (c == '-' || c == '+' || c.is_ascii_digit()) =>
            {
                // The key keeps the number's exact spelling.
                let mut raw = String::new();
                match self.peek() {
                    Some(s @ ('-' | '+')) => {
                        raw.push(s);
                        self.bump();
                    }
                    _ => {}
                }
                self.scan_number_tail(&mut raw)?;
                Ok((raw, line, column))
            }
            Some(c) => Err(self.err(SyntaxError::InvalidCharacter(c))),
            None => Err(self.err(SyntaxError::UnexpectedEndOfInput)),
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, ReaderError> {
        self.bump(); // opening quote
        let mut s = String::new();
        loop {
            match self.peek() {
                None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(s);
                }
                Some('\\') => {
                    self.bump();
                    match self.peek() {
                        None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
                        Some(e @ ('"' | '\\' | '/')) => {
                            s.push(e);
                            self.bump();
                        }
                        Some('\'') if quote == '\'' => {
                            s.push('\'');
                            self.bump();
                        }
                        Some('b') => {
                            s.push('\u{0008}');
                            self.bump();
                        }
                        Some('f') => {
                            s.push('\u{000C}');
                            self.bump();
                        }
                        Some('n') => {
                            s.push('\n');
                            self.bump();
                        }
                        Some('r') => {
                            s.push('\r');
                            self.bump();
                        }
                        Some('t') => {
                            s.push('\t');
                            self.bump();
                        }
                        Some('u') => {
                            self.bump();
                            let c = self.parse_unicode_escape()?;
                            s.push(c);
                        }
                        Some(e) => return Err(self.err(SyntaxError::InvalidCharacter(e))),
                    }
                }
                // Raw control characters must be escaped.
                Some(c) if (c as u32) < 0x20 => {
                    return Err(self.err(SyntaxError::InvalidCharacter(c)));
                }
                Some(c) => {
                    s.push(c);
                    self.bump();
                }
            }
        }
    }

    /// Decodes `\uXXXX` after the `u`, pairing surrogates where required.
    fn parse_unicode_escape(&mut self) -> Result<char, ReaderError> {
        let code = self.read_hex4()?;
        if (0xD800..=0xDBFF).contains(&code) {
            // High surrogate: a low surrogate escape must follow.
            match self.peek() {
                Some('\\') => {
                    self.bump();
                }
                _ => return Err(self.err(SyntaxError::InvalidUnicodeEscapeSequence(code))),
            }
            match self.peek() {
                Some('u') => {
                    self.bump();
                }
                _ => return Err(self.err(SyntaxError::InvalidUnicodeEscapeSequence(code))),
            }
            let low = self.read_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(self.err(SyntaxError::InvalidUnicodeEscapeSequence(low)));
            }
            let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
            char::from_u32(combined)
                .ok_or_else(|| self.err(SyntaxError::InvalidUnicodeEscapeSequence(combined)))
        } else if (0xDC00..=0xDFFF).contains(&code) {
            Err(self.err(SyntaxError::InvalidUnicodeEscapeSequence(code)))
        } else {
            char::from_u32(code)
                .ok_or_else(|| self.err(SyntaxError::InvalidUnicodeEscapeSequence(code)))
        }
    }

    fn read_hex4(&mut self) -> Result<u32, ReaderError> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.peek() {
                None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
                Some(c) => match c.to_digit(16) {
                    Some(d) => {
                        code = code * 16 + d;
                        self.bump();
                    }
                    None => return Err(self.err(SyntaxError::InvalidUnicodeEscapeChar(c))),
                },
            }
        }
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<Value, ReaderError> {
        let mut raw = String::new();
        match self.peek() {
            Some(s @ ('-' | '+')) => {
                raw.push(s);
                self.bump();
            }
            _ => {}
        }
        if self.options.allow_special_floats && self.peek() == Some('I') {
            self.expect_keyword("Infinity")?;
            let inf = if raw.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            return Ok(Value::Number(inf));
        }
        self.scan_number_tail(&mut raw)?;
        let n = raw
            .parse::<f64>()
            .map_err(|_| self.err(SyntaxError::SyntaxError("invalid number literal")))?;
        Ok(Value::Number(n))
    }

    /// Scans digits, fraction, and exponent after any sign into `raw`.
    fn scan_number_tail(&mut self, raw: &mut String) -> Result<(), ReaderError> {
        self.scan_digits_into(raw)?;
        if self.peek() == Some('.') {
            raw.push('.');
            self.bump();
            self.scan_digits_into(raw)?;
        }
        match self.peek() {
            Some(e @ ('e' | 'E')) => {
                raw.push(e);
                self.bump();
                match self.peek() {
                    Some(s @ ('-' | '+')) => {
                        raw.push(s);
                        self.bump();
                    }
                    _ => {}
                }
                self.scan_digits_into(raw)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn scan_digits_into(&mut self, raw: &mut String) -> Result<(), ReaderError> {
        let mut any = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                raw.push(c);
                self.bump();
                any = true;
            } else {
                break;
            }
        }
        if any {
            return Ok(());
        }
        match self.peek() {
            Some(c) => Err(self.err(SyntaxError::InvalidCharacter(c))),
            None => Err(self.err(SyntaxError::UnexpectedEndOfInput)),
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), ReaderError> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.bump();
                }
                Some('/') if self.options.allow_comments => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), ReaderError> {
        let line = self.line;
        let column = self.column;
        self.bump(); // leading '/'
        let mut text = String::from("/");
        match self.peek() {
            Some('/') => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    text.push(c);
                    self.bump();
                }
            }
            Some('*') => {
                self.bump();
                text.push('*');
                let mut star = false;
                loop {
                    match self.peek() {
                        None => return Err(self.err(SyntaxError::UnexpectedEndOfInput)),
                        Some(c) => {
                            text.push(c);
                            self.bump();
                            if star && c == '/' {
                                break;
                            }
                            star = c == '*';
                        }
                    }
                }
            }
            _ => {
                return Err(ReaderError {
                    source: SyntaxError::InvalidCharacter('/'),
                    line,
                    column,
                });
            }
        }
        if self.options.collect_comments {
            self.comments.push(text);
        }
        Ok(())
    }
}
