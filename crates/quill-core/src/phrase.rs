//! Bidirectional mapping between entropy and mnemonic phrases.
//!
//! # Layout
//! ```text
//! entropy (ENT bits) || SHA-256(entropy)[..ENT/32 bits]
//! ```
//! read as consecutive 11-bit big-endian indices into the language's
//! wordlist. Words are joined with a space, or U+3000 for Japanese.
//!
//! Decoding infers the language from the first word. When that word appears
//! in several lists, each candidate is tried in enumeration order and the
//! first that decodes with a valid checksum wins.
//!
//! A single substituted word still passes the checksum with probability
//! `2^-(ENT/32)`. That false-accept rate is inherent to the format.

use zeroize::Zeroizing;

use crate::bits::{pack_indices, unpack_indices};
use crate::checksum;
use crate::constants::{BITS_PER_WORD, ENTROPY_STEP, IDEOGRAPHIC_SPACE, WORD_SEPARATOR};
use crate::entropy::{Entropy, EntropyBits};
use crate::error::MnemonicError;
use crate::language::Language;
use crate::wordlist::WordlistRegistry;

/// Result of decoding a phrase without a language hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPhrase {
    pub entropy: Entropy,
    pub language: Language,
}

/// Phrase encoder/decoder over a wordlist registry.
#[derive(Debug, Clone, Copy)]
pub struct PhraseCodec<'a> {
    registry: &'a WordlistRegistry,
}

impl Default for PhraseCodec<'static> {
    fn default() -> Self {
        Self::new(WordlistRegistry::global())
    }
}

impl<'a> PhraseCodec<'a> {
    pub fn new(registry: &'a WordlistRegistry) -> Self {
        Self { registry }
    }

    /// Encode entropy as a phrase in `language`.
    pub fn encode(&self, entropy: &Entropy, language: Language) -> String {
        let bits = entropy.bits();
        let digest = checksum::digest(entropy.as_bytes());

        let mut buf = Zeroizing::new(Vec::with_capacity(bits.bytes() + 1));
        buf.extend_from_slice(entropy.as_bytes());
        buf.extend_from_slice(&digest[..bits.checksum_bits().div_ceil(8)]);

        let indices = Zeroizing::new(unpack_indices(&buf, bits.word_count()));
        let list = self.registry.get(language);
        let separator = language.separator();

        let mut phrase = String::new();
        for (i, index) in indices.iter().enumerate() {
            if i > 0 {
                phrase.push(separator);
            }
            phrase.push_str(list.word(*index));
        }
        phrase
    }

    /// Decode a phrase, inferring its language.
    pub fn decode(&self, phrase: &str) -> Result<DecodedPhrase, MnemonicError> {
        let words = split_words(phrase);
        let bits = entropy_bits_for(words.len())?;

        let mut first_err = None;
        for language in self.registry.languages_of(words[0]) {
            match self.decode_words(&words, language, bits) {
                Ok(entropy) => return Ok(DecodedPhrase { entropy, language }),
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }
        Err(first_err.unwrap_or(MnemonicError::UnknownLanguage))
    }

    /// Decode a phrase known to be in `language`.
    pub fn decode_in(&self, phrase: &str, language: Language) -> Result<Entropy, MnemonicError> {
        let words = split_words(phrase);
        let bits = entropy_bits_for(words.len())?;
        self.decode_words(&words, language, bits)
    }

    fn decode_words(
        &self,
        words: &[&str],
        language: Language,
        bits: EntropyBits,
    ) -> Result<Entropy, MnemonicError> {
        let list = self.registry.get(language);
        let indices = words
            .iter()
            .enumerate()
            .map(|(index, word)| list.index_of(word).ok_or(MnemonicError::UnknownWord { index }))
            .collect::<Result<Vec<u16>, _>>()?;
        let indices = Zeroizing::new(indices);

        let packed = Zeroizing::new(pack_indices(&indices));
        let (entropy, field) = packed.split_at(bits.bytes());
        checksum::verify(entropy, field, bits.checksum_bits())?;
        Entropy::from_bytes(entropy)
    }
}

/// Split a phrase on runs of ASCII space or U+3000, dropping empty words.
pub fn split_words(phrase: &str) -> Vec<&str> {
    phrase
        .split([WORD_SEPARATOR, IDEOGRAPHIC_SPACE])
        .filter(|w| !w.is_empty())
        .collect()
}

/// Entropy length carried by a phrase of `words` words.
pub fn entropy_bits_for(words: usize) -> Result<EntropyBits, MnemonicError> {
    let total = words * BITS_PER_WORD;
    let checksum_bits = total % ENTROPY_STEP;
    if checksum_bits == 0 {
        return Err(MnemonicError::AmbiguousChecksum { words });
    }
    let bits = EntropyBits::new(total - checksum_bits)?;
    if bits.checksum_bits() != checksum_bits {
        return Err(MnemonicError::InvalidWordCount { words });
    }
    Ok(bits)
}

/// Encode with the process-wide registry.
pub fn encode(entropy: &Entropy, language: Language) -> String {
    PhraseCodec::default().encode(entropy, language)
}

/// Decode with the process-wide registry.
pub fn decode(phrase: &str) -> Result<DecodedPhrase, MnemonicError> {
    PhraseCodec::default().decode(phrase)
}

/// Decode in a known language with the process-wide registry.
pub fn decode_in(phrase: &str, language: Language) -> Result<Entropy, MnemonicError> {
    PhraseCodec::default().decode_in(phrase, language)
}
