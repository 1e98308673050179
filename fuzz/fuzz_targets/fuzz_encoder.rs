#![no_main]

use arbitrary::Arbitrary;
use jsonforge::{DocumentEncoder, Reader, ReaderOptions};
use libfuzzer_sys::fuzz_target;

/// One corpus line plus the two reader-configuration bytes the harness
/// would have read up front.
#[derive(Debug, Arbitrary)]
struct Input {
    config: [u8; 2],
    line: Vec<u8>,
}

// The generator's contract: every byte sequence maps to a document the
// *default* reader accepts, and no flag combination may panic the reader.
fuzz_target!(|input: Input| {
    let mut encoder = DocumentEncoder::new(&input.line);
    let document = encoder.encode();
    assert!(!document.is_empty());

    let strict = Reader::new(ReaderOptions::default());
    strict
        .parse(&document)
        .expect("generated document rejected by the default reader");

    let configured = Reader::new(ReaderOptions::from_config_bytes(
        input.config[0],
        input.config[1],
    ));
    // Any verdict is acceptable here (strict_root may legitimately refuse
    // scalar roots); it just must not panic.
    let _ = configured.parse(&document);
});
