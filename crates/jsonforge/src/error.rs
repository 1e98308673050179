use alloc::string::String;

use thiserror::Error;

/// A syntax error together with the 1-based line and column it occurred at.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{source} at {line}:{column}")]
pub struct ReaderError {
    pub(crate) source: SyntaxError,
    pub line: usize,
    pub column: usize,
}

impl ReaderError {
    /// The underlying syntax error, without position information.
    #[must_use]
    pub fn syntax(&self) -> &SyntaxError {
        &self.source
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("invalid unicode escape sequence at character: '{0}'")]
    InvalidUnicodeEscapeChar(char),
    #[error("invalid unicode escape sequence \\u{0:X}")]
    InvalidUnicodeEscapeSequence(u32),
    #[error("duplicate object key \"{0}\"")]
    DuplicateKey(String),
    #[error("extra non-whitespace after the root value")]
    ExtraData,
    #[error("root value must be an array or an object")]
    NonCollectionRoot,
    #[error("{0}")]
    SyntaxError(&'static str),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
