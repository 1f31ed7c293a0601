//! Error types for mnemonic encoding and decoding.
use thiserror::Error;

/// Failures of mnemonic construction, decoding and deserialization.
///
/// Every variant is a deterministic consequence of bad input; none is
/// transient or worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("invalid entropy length: {bits} bits")] InvalidEntropyLength { bits: usize },
    #[error("unsupported language: {0}")] UnsupportedLanguage(String),
    #[error("ambiguous checksum: {words} words carry no checksum bits")] AmbiguousChecksum { words: usize },
    #[error("invalid word count: {words}")] InvalidWordCount { words: usize },
    #[error("unknown word at position {index}")] UnknownWord { index: usize },
    #[error("could not determine phrase language")] UnknownLanguage,
    #[error("invalid checksum")] ChecksumMismatch,
    #[error("malformed serialization: {0}")] MalformedSerialization(String),
}

/// Failures of the binary wire reader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("unexpected end of data: need {need}, have {have}")] UnexpectedEof { need: usize, have: usize },
    #[error("non-canonical varint")] NonCanonicalVarInt,
    #[error("length overflow: {0}")] LengthOverflow(u64),
    #[error("invalid utf-8 string")] InvalidUtf8,
    #[error("trailing data: {0} bytes")] TrailingData(usize),
}

impl From<EncodingError> for MnemonicError {
    fn from(e: EncodingError) -> Self {
        MnemonicError::MalformedSerialization(e.to_string())
    }
}
