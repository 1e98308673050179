//! The closed token vocabulary the encoder draws from.
//!
//! Twenty-five general tokens: three singleton literals, fourteen string
//! literals, six numbers, one array composite, one object composite. The
//! tables are process-wide constants; the only runtime decision is the
//! reduction of a byte's upper five bits onto a table index.

/// String vocabulary, shared by value positions and object keys.
///
/// Each entry is a complete JSON token, quotes included. The set is
/// intentionally pathological: an escaped double quote, a single quote,
/// backspace/carriage-return/newline escapes, an explicit `\u0000`, and a
/// bare space, to probe how far a consuming parser's string handling bends.
pub(crate) const STRING_TOKENS: [&str; 14] = [
    "\"a\"",
    "\"A\"",
    "\"!\"",
    "\"\\\"\"",
    "\"'\"",
    "\"0\"",
    "\"Cool1\"",
    "\"2Cool!\"",
    "\"!Yay?\"",
    "\"\\b\"",
    "\"\\r\"",
    "\"\\u0000\"",
    "\"\\n\"",
    "\" \"",
];

/// Number vocabulary. Signed zeros and leading `+` probe numeric-literal
/// strictness in the consuming parser.
pub(crate) const NUMBER_TOKENS: [&str; 6] = ["0", "1", "-1", "+0", "-0", "+3"];

/// Count of general tokens: 3 literals + 14 strings + 6 numbers + array +
/// object.
pub(crate) const GENERAL_TOKEN_COUNT: u8 = 25;

/// One of the 25 general token kinds, decoded from a byte's upper five bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    False,
    True,
    Null,
    /// Index into [`STRING_TOKENS`].
    Str(usize),
    /// Index into [`NUMBER_TOKENS`].
    Number(usize),
    Array,
    Object,
}

impl Token {
    /// Decode the five kind bits (0..=31) into a token.
    ///
    /// The 32-value bit space folds onto 25 tokens mod 25, so kinds 25..=31
    /// wrap around onto tokens 0..=6. The resulting double weighting of the
    /// low tokens is part of the generator's fixed statistical shape; do not
    /// flatten it.
    pub(crate) fn from_kind_bits(bits: u8) -> Self {
        match bits % GENERAL_TOKEN_COUNT {
            0 => Token::False,
            1 => Token::True,
            2 => Token::Null,
            i @ 3..=16 => Token::Str(usize::from(i) - 3),
            i @ 17..=22 => Token::Number(usize::from(i) - 17),
            23 => Token::Array,
            _ => Token::Object,
        }
    }
}
