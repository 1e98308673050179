use crate::{EncoderOptions, SyntaxError, run_corpus};

#[test]
fn one_outcome_per_non_empty_line() {
    // Config bytes 0x00 0x00, then three lines with one empty in between.
    let outcomes = run_corpus(b"\x00\x00\xBB\x10\x10\x10\n\n\xFF\n", EncoderOptions::default());
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].document, "[null,null,null]");
    assert_eq!(outcomes[1].document, "\"\\\"\"");
    assert!(outcomes.iter().all(|o| o.parsed.is_ok()));
}

#[test]
fn final_line_needs_no_terminator() {
    let outcomes = run_corpus(b"\x00\x00\x41", EncoderOptions::default());
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].document, "\"0\"");
}

#[test]
fn crlf_terminators_are_line_breaks() {
    let outcomes = run_corpus(b"\x00\x00\x41\r\n\x41\r\n", EncoderOptions::default());
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].document, outcomes[1].document);
}

#[test]
fn config_bytes_reach_the_reader() {
    // Byte A = 0x08 sets strict_root; line byte 0x41 generates a bare
    // string, which the strict reader must refuse.
    let outcomes = run_corpus(b"\x08\x00\x41\n", EncoderOptions::default());
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].document, "\"0\"");
    let err = outcomes[0].parsed.as_ref().unwrap_err();
    assert_eq!(*err.syntax(), SyntaxError::NonCollectionRoot);

    // Same corpus under the all-clear configuration is accepted.
    let outcomes = run_corpus(b"\x00\x00\x41\n", EncoderOptions::default());
    assert!(outcomes[0].parsed.is_ok());
}

#[test]
fn short_input_yields_no_outcomes() {
    assert!(run_corpus(b"", EncoderOptions::default()).is_empty());
    assert!(run_corpus(b"\x00", EncoderOptions::default()).is_empty());
    assert!(run_corpus(b"\x00\x00", EncoderOptions::default()).is_empty());
}

#[test]
fn encoder_limits_are_honored_per_line() {
    let limits = EncoderOptions {
        max_depth: 1,
        max_nodes: 16,
    };
    // A line of array headers: nesting stops at depth 1.
    let outcomes = run_corpus(b"\x00\x00\xBF\xBF\xBF\n", limits);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(
        outcomes[0].document,
        "[null,null,null,null,null,null,null]"
    );
}
