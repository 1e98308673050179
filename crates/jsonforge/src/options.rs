#![allow(clippy::struct_excessive_bools)]

/// Configuration options for the validating reader.
///
/// The reader's baseline is strict RFC 8259 syntax (with the two
/// generator-facing relaxations documented on [`Reader`]); each option
/// widens or narrows one behavior. The full set can be unpacked from two
/// raw configuration bytes with [`ReaderOptions::from_config_bytes`].
///
/// # Examples
///
/// ```rust
/// use jsonforge::{Reader, ReaderOptions};
///
/// let reader = Reader::new(ReaderOptions {
///     allow_trailing_commas: true,
///     ..Default::default()
/// });
/// assert!(reader.parse("[1,2,]").is_ok());
/// ```
///
/// # Default
///
/// All options default to `false`.
///
/// [`Reader`]: crate::Reader
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderOptions {
    /// Whether to retain comment text while parsing.
    ///
    /// Only meaningful together with [`allow_comments`]; collected text is
    /// returned by [`Reader::parse_with_comments`].
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`allow_comments`]: ReaderOptions::allow_comments
    /// [`Reader::parse_with_comments`]: crate::Reader::parse_with_comments
    pub collect_comments: bool,

    /// Whether `//` line comments and `/* */` block comments are treated as
    /// whitespace.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_comments: bool,

    /// Whether a comma directly before a closing `]` or `}` is accepted.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_commas: bool,

    /// Whether the root value must be an array or an object.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_root: bool,

    /// Whether an elided array element reads as `null`.
    ///
    /// When `true`, `[1,,2]` parses as `[1,null,2]` and `[,1]` as
    /// `[null,1]`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_dropped_null_placeholders: bool,

    /// Whether an unquoted number is accepted in object-key position.
    ///
    /// The key becomes a string spelled exactly as the number was written.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_numeric_keys: bool,

    /// Whether `'...'` strings (and keys) are accepted alongside `"..."`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_single_quotes: bool,

    /// Whether non-whitespace input after the root value is an error.
    ///
    /// When `false`, trailing input is silently ignored.
    ///
    /// # Default
    ///
    /// `false`
    pub fail_if_extra: bool,

    /// Whether a repeated object key is an error.
    ///
    /// When `false`, the last occurrence wins.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_dup_keys: bool,

    /// Whether `NaN`, `Infinity`, and `-Infinity` are accepted as numbers.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_special_floats: bool,

    /// Whether a leading U+FEFF byte-order mark is skipped.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_bom: bool,
}

impl ReaderOptions {
    /// Unpacks the option set from two raw configuration bytes.
    ///
    /// Bit `k` of `a` toggles the `k`-th option in declaration order
    /// (`collect_comments` through `fail_if_extra`); bits 0..=2 of `b`
    /// toggle the remaining three. Higher bits of `b` are ignored.
    #[must_use]
    pub fn from_config_bytes(a: u8, b: u8) -> Self {
        Self {
            collect_comments: a & 0x01 != 0,
            allow_comments: a & 0x02 != 0,
            allow_trailing_commas: a & 0x04 != 0,
            strict_root: a & 0x08 != 0,
            allow_dropped_null_placeholders: a & 0x10 != 0,
            allow_numeric_keys: a & 0x20 != 0,
            allow_single_quotes: a & 0x40 != 0,
            fail_if_extra: a & 0x80 != 0,
            reject_dup_keys: b & 0x01 != 0,
            allow_special_floats: b & 0x02 != 0,
            skip_bom: b & 0x04 != 0,
        }
    }
}
