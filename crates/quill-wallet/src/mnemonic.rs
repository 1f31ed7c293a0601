//! The mnemonic aggregate: entropy, its phrase, and an optional passphrase.
//!
//! Entropy and phrase are materialized at most once. A mnemonic built with
//! [`Mnemonic::with_bits`] draws entropy on first use; one recovered from a
//! phrase already holds both. [`Mnemonic::destroy`] is the only transition
//! that clears them.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use quill_core::constants::Network;
use quill_core::phrase;
use quill_core::{Entropy, EntropyBits, Language, MnemonicError};

use crate::error::WalletError;
use crate::hd::{HdPrivateKey, KeySource};
use crate::seed::{Seed, derive_seed, derive_seed_blocking};

/// A BIP-39 mnemonic.
///
/// Reads take `&self`; [`destroy`](Self::destroy) takes `&mut self`, so
/// disposal can never overlap a read of the same instance.
#[derive(Clone)]
pub struct Mnemonic {
    bits: EntropyBits,
    language: Language,
    entropy: OnceLock<Entropy>,
    phrase: OnceLock<Zeroizing<String>>,
    passphrase: Zeroizing<String>,
}

impl Default for Mnemonic {
    fn default() -> Self {
        Self::with_bits(EntropyBits::default(), Language::default())
    }
}

impl Mnemonic {
    /// A 128-bit English mnemonic whose entropy is drawn on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mnemonic of `bits` entropy in `language`, generated lazily.
    pub fn with_bits(bits: EntropyBits, language: Language) -> Self {
        Self {
            bits,
            language,
            entropy: OnceLock::new(),
            phrase: OnceLock::new(),
            passphrase: Zeroizing::new(String::new()),
        }
    }

    /// Wrap existing entropy.
    pub fn from_entropy(bytes: &[u8], language: Language) -> Result<Self, MnemonicError> {
        let entropy = Entropy::from_bytes(bytes)?;
        Ok(Self::from_parts(entropy, language))
    }

    /// Recover from a phrase, inferring its language.
    pub fn from_phrase(phrase: &str) -> Result<Self, MnemonicError> {
        let decoded = phrase::decode(phrase)?;
        debug!(
            language = %decoded.language,
            bits = decoded.entropy.bits().get(),
            "recovered mnemonic"
        );
        Ok(Self::recovered(decoded.entropy, decoded.language))
    }

    /// Recover from a phrase known to be in `language`.
    pub fn from_phrase_in(phrase: &str, language: Language) -> Result<Self, MnemonicError> {
        let entropy = phrase::decode_in(phrase, language)?;
        debug!(%language, bits = entropy.bits().get(), "recovered mnemonic");
        Ok(Self::recovered(entropy, language))
    }

    pub(crate) fn from_parts(entropy: Entropy, language: Language) -> Self {
        Self {
            bits: entropy.bits(),
            language,
            entropy: OnceLock::from(entropy),
            phrase: OnceLock::new(),
            passphrase: Zeroizing::new(String::new()),
        }
    }

    /// Store the canonical phrase so seeds ignore separator noise.
    fn recovered(entropy: Entropy, language: Language) -> Self {
        let canonical = Zeroizing::new(phrase::encode(&entropy, language));
        let mut mnemonic = Self::from_parts(entropy, language);
        mnemonic.set_phrase(canonical);
        mnemonic
    }

    /// Caller guarantees `phrase` is the encoding of the held entropy.
    pub(crate) fn set_phrase(&mut self, phrase: Zeroizing<String>) {
        self.phrase = OnceLock::from(phrase);
    }

    pub fn bits(&self) -> EntropyBits {
        self.bits
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub fn set_passphrase(&mut self, passphrase: impl Into<String>) {
        self.passphrase = Zeroizing::new(passphrase.into());
    }

    /// The entropy, generated from the OS RNG on first call if absent.
    pub fn entropy(&self) -> &Entropy {
        self.entropy.get_or_init(|| {
            debug!(bits = self.bits.get(), "generating entropy");
            Entropy::generate(self.bits)
        })
    }

    /// The phrase, encoded from [`entropy`](Self::entropy) on first call.
    pub fn phrase(&self) -> &str {
        self.phrase
            .get_or_init(|| Zeroizing::new(phrase::encode(self.entropy(), self.language)))
    }

    /// The 64-byte seed for `passphrase`, or the stored passphrase if it is
    /// `None` or empty.
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        let passphrase = self.effective_passphrase(passphrase);
        debug!(language = %self.language, bits = self.bits.get(), "deriving seed");
        derive_seed(self.phrase(), passphrase)
    }

    /// [`to_seed`](Self::to_seed) on the runtime's blocking thread pool.
    pub async fn to_seed_offloaded(&self, passphrase: Option<&str>) -> Result<Seed, WalletError> {
        let passphrase = self.effective_passphrase(passphrase);
        let passphrase = Zeroizing::new(passphrase.to_string());
        let phrase = Zeroizing::new(self.phrase().to_string());
        derive_seed_blocking(phrase, passphrase).await
    }

    fn effective_passphrase<'a>(&'a self, passphrase: Option<&'a str>) -> &'a str {
        match passphrase {
            Some(p) if !p.is_empty() => p,
            _ => self.passphrase.as_str(),
        }
    }

    /// The BIP-32 root key for this mnemonic.
    ///
    /// `network` defaults to mainnet.
    pub fn to_key(
        &self,
        passphrase: Option<&str>,
        network: Option<Network>,
    ) -> Result<HdPrivateKey, WalletError> {
        let seed = self.to_seed(passphrase);
        let key = HdPrivateKey::from_seed(&seed, network.unwrap_or_default())?;
        Ok(key.with_source(KeySource {
            language: self.language,
            bits: self.bits,
        }))
    }

    /// Wipe all secret state and reset to a fresh 128-bit English mnemonic.
    ///
    /// A later [`entropy`](Self::entropy) call generates new entropy.
    pub fn destroy(&mut self) {
        drop(self.wipe_entropy());
        if let Some(mut phrase) = self.phrase.take() {
            phrase.zeroize();
        }
        self.passphrase.zeroize();
        self.bits = EntropyBits::default();
        self.language = Language::default();
        debug!("mnemonic destroyed");
    }

    fn wipe_entropy(&mut self) -> Option<Entropy> {
        let mut entropy = self.entropy.take()?;
        entropy.zeroize();
        Some(entropy)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("bits", &self.bits.get())
            .field("language", &self.language)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}
