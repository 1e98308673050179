//! Line-oriented harness binary.
//!
//! Reads raw corpus bytes from stdin (two reader-configuration bytes, then
//! one entropy line per document), prints each generated document followed
//! by the configured reader's verdict.

use std::io::{self, Read, Write};

use jsonforge::{EncoderOptions, run_corpus};

fn main() -> io::Result<()> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for outcome in run_corpus(&input, EncoderOptions::default()) {
        writeln!(out, "{}", outcome.document)?;
        match outcome.parsed {
            Ok(_) => writeln!(out, "OK")?,
            Err(err) => writeln!(out, "ERR: {err}")?,
        }
    }
    Ok(())
}
