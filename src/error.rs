use bitstream::ParseBitsError;
use thiserror::Error;

/// Everything that can go wrong while building a tree, encoding or decoding.
///
/// The coder is deterministic and pure, there is no transient failure class:
/// every error is final and surfaces at the point of occurrence.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HuffError {
    /// The tree builder was given nothing to work with, a zero weight, or a
    /// repeated symbol.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The encoder met a symbol that has no entry in the code table.
    #[error("symbol {0:#04x} has no entry in the code table")]
    UnknownSymbol(u8),

    /// The decoder was handed a bit-string that does not end on a code
    /// boundary, or bit text containing tokens other than '0'/'1'.
    #[error("malformed bit stream: {0}")]
    MalformedStream(String),
}

impl From<ParseBitsError> for HuffError {
    fn from(err: ParseBitsError) -> Self {
        HuffError::MalformedStream(err.to_string())
    }
}
