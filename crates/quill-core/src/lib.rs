//! # quill-core
//! Deterministic building blocks for BIP-39 mnemonics: wordlists, entropy,
//! checksum, bit packing, the phrase codec and the binary wire format.

pub mod bits;
pub mod checksum;
pub mod constants;
pub mod encoding;
pub mod entropy;
pub mod error;
pub mod language;
pub mod phrase;
pub mod wordlist;

pub use entropy::{Entropy, EntropyBits};
pub use error::{EncodingError, MnemonicError};
pub use language::Language;
pub use phrase::{DecodedPhrase, PhraseCodec};
pub use wordlist::{Wordlist, WordlistRegistry};
