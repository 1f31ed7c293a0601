//! Construction options for [`Mnemonic`].

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroize;

use quill_core::{Entropy, EntropyBits, Language, MnemonicError};

use crate::mnemonic::Mnemonic;

/// Options accepted by [`Mnemonic::from_options`].
///
/// A `phrase` wins over `entropy`; with neither, entropy of `bits` is drawn
/// lazily. `bits` is validated even when unused. Missing fields read as
/// `None`.
#[derive(Clone, Default, Deserialize)]
pub struct MnemonicOptions {
    pub bits: Option<usize>,
    pub language: Option<Language>,
    /// Hex-encoded entropy.
    pub entropy: Option<String>,
    pub phrase: Option<String>,
    pub passphrase: Option<String>,
}

impl MnemonicOptions {
    pub fn with_bits(mut self, bits: usize) -> Self {
        self.bits = Some(bits);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_entropy(mut self, hex: impl Into<String>) -> Self {
        self.entropy = Some(hex.into());
        self
    }

    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }
}

impl Drop for MnemonicOptions {
    fn drop(&mut self) {
        self.entropy.zeroize();
        self.phrase.zeroize();
        self.passphrase.zeroize();
    }
}

impl fmt::Debug for MnemonicOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicOptions")
            .field("bits", &self.bits)
            .field("language", &self.language)
            .field("entropy", &self.entropy.as_ref().map(|_| "[REDACTED]"))
            .field("phrase", &self.phrase.as_ref().map(|_| "[REDACTED]"))
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Mnemonic {
    /// Build a mnemonic from `options`.
    ///
    /// A `phrase` always carries its own language, inferred from its words;
    /// `language` only applies to `entropy` and to generated mnemonics. Use
    /// [`Mnemonic::from_phrase_in`] to pin the decoding language.
    pub fn from_options(options: &MnemonicOptions) -> Result<Self, MnemonicError> {
        let bits = options
            .bits
            .map(EntropyBits::new)
            .transpose()?
            .unwrap_or_default();
        let language = options.language.unwrap_or_default();

        let mut mnemonic = if let Some(phrase) = &options.phrase {
            Self::from_phrase(phrase)?
        } else if let Some(hex) = &options.entropy {
            Self::from_parts(Entropy::from_hex(hex)?, language)
        } else {
            Self::with_bits(bits, language)
        };

        if let Some(passphrase) = &options.passphrase {
            mnemonic.set_passphrase(passphrase.as_str());
        }
        Ok(mnemonic)
    }
}
