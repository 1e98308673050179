//! Deterministic, bounded JSON document generation from raw byte streams,
//! plus a configurable validating reader used to check the output.
//!
//! The generator maps *any* finite byte sequence onto one syntactically
//! valid JSON document: each consumed byte selects a token kind (upper five
//! bits) and a composite size (lower three bits) from a closed vocabulary,
//! and hard depth/node ceilings guarantee termination regardless of input.
//!
//! ```rust
//! use jsonforge::DocumentEncoder;
//!
//! let mut encoder = DocumentEncoder::new(b"\xBB\x10\x10\x10");
//! assert_eq!(encoder.encode(), "[null,null,null]");
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod encoder;
mod error;
mod options;
mod reader;
mod session;
mod tokens;
mod value;

#[cfg(test)]
mod tests;

pub use encoder::{DocumentEncoder, EncoderOptions};
pub use error::{ReaderError, SyntaxError};
pub use options::ReaderOptions;
pub use reader::Reader;
pub use session::{LineOutcome, run_corpus};
pub use value::{Array, Map, Value};
