//! The line-oriented corpus session tying the generator to the reader.
//!
//! Mirrors the external harness contract: two configuration bytes up
//! front, then one generated-and-validated document per non-empty input
//! line.

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

use crate::{
    encoder::{DocumentEncoder, EncoderOptions},
    error::ReaderError,
    options::ReaderOptions,
    reader::Reader,
    value::Value,
};

/// The generated document and reader verdict for one corpus line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// The generated JSON document.
    pub document: String,
    /// The configured reader's verdict on that document.
    pub parsed: Result<Value, ReaderError>,
}

/// Runs one corpus session over raw input bytes.
///
/// The first two bytes select the reader configuration via
/// [`ReaderOptions::from_config_bytes`]; missing bytes read as zero, the
/// same sentinel the encoder's cursor uses. The remaining bytes are split
/// into lines (`\n` or `\r\n`), empty lines are skipped, and each
/// surviving line's raw bytes drive one [`DocumentEncoder`] whose output
/// is judged by the reader.
///
/// # Examples
///
/// ```rust
/// use jsonforge::{EncoderOptions, run_corpus};
///
/// // Zero config bytes: the strict default reader. One line of entropy.
/// let outcomes = run_corpus(b"\x00\x00\xBB\x10\x10\x10\n", EncoderOptions::default());
/// assert_eq!(outcomes.len(), 1);
/// assert_eq!(outcomes[0].document, "[null,null,null]");
/// assert!(outcomes[0].parsed.is_ok());
/// ```
#[must_use]
pub fn run_corpus(input: &[u8], limits: EncoderOptions) -> Vec<LineOutcome> {
    let (a, b, rest) = match input {
        [a, b, rest @ ..] => (*a, *b, rest),
        [a] => (*a, 0, &[][..]),
        [] => (0, 0, &[][..]),
    };
    let reader = Reader::new(ReaderOptions::from_config_bytes(a, b));

    let mut outcomes = Vec::new();
    for line in rest.lines() {
        if line.is_empty() {
            continue;
        }
        let mut encoder = DocumentEncoder::with_options(line, limits);
        let document = encoder.encode();
        let parsed = reader.parse(&document);
        outcomes.push(LineOutcome { document, parsed });
    }
    outcomes
}
