//! The document encoder: a recursive descent over an opaque byte cursor
//! that always lands on a syntactically valid JSON document.

use alloc::string::String;

use crate::{
    cursor::ByteCursor,
    tokens::{NUMBER_TOKENS, STRING_TOKENS, Token},
};

/// Hard ceilings bounding a single encode call.
///
/// Both bounds are checked *before* any recursive work, so termination and
/// output size never depend on the input containing a particular byte. They
/// are runtime configuration rather than constants so tests can shrink them.
///
/// # Default
///
/// `max_depth = 8`, `max_nodes = 1024`.
#[derive(Debug, Clone, Copy)]
pub struct EncoderOptions {
    /// Maximum nesting of arrays and objects.
    pub max_depth: usize,
    /// Maximum number of values emitted across the whole document.
    pub max_nodes: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_nodes: 1024,
        }
    }
}

/// Maps a finite byte sequence onto one guaranteed-valid JSON document.
///
/// Each value position consumes one byte: the upper five bits pick a token
/// kind out of a closed 25-entry vocabulary, the lower three bits size any
/// array or object composite (0..=7 children). Exhausted input reads as
/// zero bytes, which resolve to the `false` literal.
///
/// # Examples
///
/// ```rust
/// use jsonforge::DocumentEncoder;
///
/// // An empty buffer still produces a document: the zero sentinel selects
/// // token 0, the `false` literal.
/// let mut encoder = DocumentEncoder::new(&[]);
/// assert_eq!(encoder.encode(), "false");
/// ```
#[derive(Debug)]
pub struct DocumentEncoder<'a> {
    cursor: ByteCursor<'a>,
    options: EncoderOptions,
    depth: usize,
    nodes: usize,
    out: String,
}

impl<'a> DocumentEncoder<'a> {
    /// Creates an encoder over `data` with the default ceilings.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, EncoderOptions::default())
    }

    /// Creates an encoder over `data` with explicit ceilings.
    #[must_use]
    pub fn with_options(data: &'a [u8], options: EncoderOptions) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            options,
            depth: 0,
            nodes: 0,
            out: String::new(),
        }
    }

    /// Emits exactly one JSON value and returns it as text.
    ///
    /// Depth, node count, and the output buffer reset on every call; the
    /// byte cursor keeps advancing, so a second call continues from where
    /// the first stopped reading. Use a fresh encoder to replay a buffer.
    pub fn encode(&mut self) -> String {
        self.out.clear();
        self.depth = 0;
        self.nodes = 0;
        self.emit_value();
        core::mem::take(&mut self.out)
    }

    /// Number of values emitted by the most recent [`encode`] call.
    ///
    /// Ceiling-fallback `null`s are not counted; the guard fires before the
    /// node is counted or a byte is consumed.
    ///
    /// [`encode`]: DocumentEncoder::encode
    #[must_use]
    pub fn nodes_emitted(&self) -> usize {
        self.nodes
    }

    fn emit_value(&mut self) {
        // Ceilings are enforced before any byte is consumed; past either
        // bound every value position degrades to `null`.
        if self.depth >= self.options.max_depth || self.nodes >= self.options.max_nodes {
            self.out.push_str("null");
            return;
        }
        self.nodes += 1;

        let b = self.cursor.next_byte();
        let size = usize::from(b & 0x07);

        match Token::from_kind_bits(b >> 3) {
            Token::False => self.out.push_str("false"),
            Token::True => self.out.push_str("true"),
            Token::Null => self.out.push_str("null"),
            Token::Str(idx) => self.out.push_str(STRING_TOKENS[idx]),
            Token::Number(idx) => self.out.push_str(NUMBER_TOKENS[idx]),
            Token::Array => self.emit_array(size),
            Token::Object => self.emit_object(size),
        }
    }

    fn emit_array(&mut self, count: usize) {
        // A composite must never open past the depth ceiling, even when
        // called without emit_value's guard.
        if self.depth >= self.options.max_depth {
            self.out.push_str("null");
            return;
        }
        self.out.push('[');
        self.depth += 1;
        for i in 0..count {
            if i > 0 {
                self.out.push(',');
            }
            self.emit_value();
        }
        self.depth -= 1;
        self.out.push(']');
    }

    fn emit_object(&mut self, count: usize) {
        if self.depth >= self.options.max_depth {
            self.out.push_str("null");
            return;
        }
        self.out.push('{');
        self.depth += 1;
        for i in 0..count {
            if i > 0 {
                self.out.push(',');
            }
            self.emit_key();
            self.out.push(':');
            self.emit_value();
        }
        self.depth -= 1;
        self.out.push('}');
    }

    /// Keys reduce a full byte over the 14-entry string table, so a key can
    /// carry the same pathological escapes as a string value.
    fn emit_key(&mut self) {
        let b = self.cursor.next_byte();
        self.out.push_str(STRING_TOKENS[usize::from(b) % STRING_TOKENS.len()]);
    }
}
