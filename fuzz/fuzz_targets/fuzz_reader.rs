#![no_main]

use jsonforge::{Reader, ReaderOptions};
use libfuzzer_sys::fuzz_target;

// The reader must never panic, whatever the text and flag combination.
fuzz_target!(|data: &[u8]| {
    let [a, b, rest @ ..] = data else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let reader = Reader::new(ReaderOptions::from_config_bytes(*a, *b));
    let _ = reader.parse(text);
    let _ = reader.parse_with_comments(text);
});
