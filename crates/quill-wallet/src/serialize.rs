//! JSON and raw binary forms of a [`Mnemonic`].
//!
//! Raw layout, integers little-endian:
//!
//! ```text
//! bits        u16
//! language    u8      wire index
//! entropy     bits/8 bytes
//! phrase      CompactSize length + UTF-8
//! passphrase  CompactSize length + UTF-8
//! ```
//!
//! Both decoders check `bits` and `language` before reading further, and
//! reject a non-empty phrase that does not encode the entropy.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use quill_core::encoding::{WireReader, WireWriter, varint_len};
use quill_core::phrase;
use quill_core::{Entropy, EntropyBits, Language, MnemonicError};

use crate::mnemonic::Mnemonic;

/// JSON representation of a mnemonic.
///
/// Holds secrets in the clear; zeroized on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct MnemonicJson {
    /// Any whole, non-negative JSON number; `128.0` reads as `128`.
    #[serde(deserialize_with = "deserialize_bits")]
    pub bits: u64,
    pub language: String,
    pub entropy: String,
    pub phrase: String,
    pub passphrase: String,
}

impl fmt::Debug for MnemonicJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicJson")
            .field("bits", &self.bits)
            .field("language", &self.language)
            .field("entropy", &"[REDACTED]")
            .field("phrase", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

fn deserialize_bits<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    struct BitsVisitor;

    impl Visitor<'_> for BitsVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole, non-negative number of bits")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if v.fract() == 0.0 && v >= 0.0 {
                // Saturates above u64::MAX, which is out of range anyway.
                Ok(v as u64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(BitsVisitor)
}

fn malformed(e: impl fmt::Display) -> MnemonicError {
    MnemonicError::MalformedSerialization(e.to_string())
}

impl Mnemonic {
    /// JSON form. Materializes entropy and phrase if needed.
    pub fn to_json(&self) -> MnemonicJson {
        MnemonicJson {
            bits: self.bits().get() as u64,
            language: self.language().name().to_string(),
            entropy: self.entropy().to_hex(),
            phrase: self.phrase().to_string(),
            passphrase: self.passphrase().to_string(),
        }
    }

    pub fn to_json_string(&self) -> Result<String, MnemonicError> {
        serde_json::to_string(&self.to_json()).map_err(malformed)
    }

    pub fn from_json(json: &MnemonicJson) -> Result<Self, MnemonicError> {
        let bits = usize::try_from(json.bits)
            .map_err(|_| MnemonicError::InvalidEntropyLength { bits: usize::MAX })
            .and_then(EntropyBits::new)?;
        let language: Language = json.language.parse()?;
        let entropy = Entropy::from_hex(&json.entropy)?;
        if entropy.bits() != bits {
            return Err(malformed(format!(
                "entropy is {} bits, header says {bits}",
                entropy.bits()
            )));
        }
        Self::assemble(entropy, language, &json.phrase, &json.passphrase)
    }

    pub fn from_json_str(s: &str) -> Result<Self, MnemonicError> {
        let json: MnemonicJson = serde_json::from_str(s).map_err(malformed)?;
        Self::from_json(&json)
    }

    /// Encoded size of the raw form.
    pub fn raw_size(&self) -> usize {
        let phrase = self.phrase().len();
        let passphrase = self.passphrase().len();
        2 + 1
            + self.bits().bytes()
            + varint_len(phrase as u64)
            + phrase
            + varint_len(passphrase as u64)
            + passphrase
    }

    /// Append the raw form to `w`. Materializes entropy and phrase if needed.
    pub fn write_raw(&self, w: &mut WireWriter) {
        w.write_u16(self.bits().get() as u16);
        w.write_u8(self.language().wire_index());
        w.write_bytes(self.entropy().as_bytes());
        w.write_var_str(self.phrase());
        w.write_var_str(self.passphrase());
    }

    pub fn to_raw(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(self.raw_size());
        self.write_raw(&mut w);
        w.into_vec()
    }

    /// Read one raw record from `r`, leaving any following bytes unread.
    pub fn read_raw(r: &mut WireReader<'_>) -> Result<Self, MnemonicError> {
        let bits = EntropyBits::new(usize::from(r.read_u16()?))?;
        let language = Language::from_wire_index(r.read_u8()?)?;
        let entropy = Entropy::from_bytes(r.read_bytes(bits.bytes())?)?;
        let phrase = r.read_var_str()?;
        let passphrase = r.read_var_str()?;
        Self::assemble(entropy, language, phrase, passphrase)
    }

    /// Decode exactly one raw record.
    pub fn from_raw(data: &[u8]) -> Result<Self, MnemonicError> {
        let mut r = WireReader::new(data);
        let mnemonic = Self::read_raw(&mut r)?;
        r.finish()?;
        Ok(mnemonic)
    }

    fn assemble(
        entropy: Entropy,
        language: Language,
        phrase: &str,
        passphrase: &str,
    ) -> Result<Self, MnemonicError> {
        let canonical = Zeroizing::new(phrase::encode(&entropy, language));
        if !phrase.is_empty() && phrase::split_words(phrase) != phrase::split_words(&canonical) {
            return Err(malformed("phrase does not match entropy"));
        }
        let mut mnemonic = Self::from_parts(entropy, language);
        mnemonic.set_passphrase(passphrase);
        if !phrase.is_empty() {
            mnemonic.set_phrase(canonical);
        }
        Ok(mnemonic)
    }
}
