//! Entropy lengths and secure random entropy.

use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{
    checksum_bits, word_count, DEFAULT_ENTROPY, ENTROPY_STEP, MAX_ENTROPY, MAX_ENTROPY_BYTES,
    MIN_ENTROPY,
};
use crate::error::MnemonicError;

/// A validated entropy length in bits.
///
/// Always a multiple of 32 within `[MIN_ENTROPY, MAX_ENTROPY]`.
///
/// # Examples
///
/// ```
/// use quill_core::entropy::EntropyBits;
/// let bits = EntropyBits::new(192).unwrap();
/// assert_eq!(bits.bytes(), 24);
/// assert_eq!(bits.word_count(), 18);
/// assert!(EntropyBits::new(130).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntropyBits(u16);

impl EntropyBits {
    /// Validate a bit length.
    pub fn new(bits: usize) -> Result<Self, MnemonicError> {
        if !(MIN_ENTROPY..=MAX_ENTROPY).contains(&bits) || bits % ENTROPY_STEP != 0 {
            return Err(MnemonicError::InvalidEntropyLength { bits });
        }
        Ok(Self(bits as u16))
    }

    /// Length in bits.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Length in bytes.
    pub fn bytes(self) -> usize {
        self.get() / 8
    }

    /// Checksum bits appended by the phrase codec.
    pub fn checksum_bits(self) -> usize {
        checksum_bits(self.get())
    }

    /// Words in the encoded phrase.
    pub fn word_count(self) -> usize {
        word_count(self.get())
    }

    /// Every supported length, shortest first.
    pub fn all() -> impl Iterator<Item = EntropyBits> {
        (MIN_ENTROPY..=MAX_ENTROPY)
            .step_by(ENTROPY_STEP)
            .map(|b| EntropyBits(b as u16))
    }
}

impl Default for EntropyBits {
    fn default() -> Self {
        Self(DEFAULT_ENTROPY as u16)
    }
}

impl TryFrom<usize> for EntropyBits {
    type Error = MnemonicError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl fmt::Display for EntropyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw mnemonic entropy.
///
/// Stored in a fixed buffer that is zeroized on drop; the length survives
/// zeroization so a wiped value reads back as all-zero bytes.
pub struct Entropy {
    buf: [u8; MAX_ENTROPY_BYTES],
    bits: EntropyBits,
}

impl Entropy {
    /// Fresh entropy from the OS cryptographic RNG.
    pub fn generate(bits: EntropyBits) -> Self {
        Self::generate_with(bits, &mut rand::rngs::OsRng)
    }

    /// Fresh entropy from a caller-supplied cryptographic RNG.
    pub fn generate_with<R: RngCore + CryptoRng>(bits: EntropyBits, rng: &mut R) -> Self {
        let mut buf = [0u8; MAX_ENTROPY_BYTES];
        rng.fill_bytes(&mut buf[..bits.bytes()]);
        Self { buf, bits }
    }

    /// Copy entropy from raw bytes, validating the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MnemonicError> {
        let bits = EntropyBits::new(bytes.len() * 8)?;
        let mut buf = [0u8; MAX_ENTROPY_BYTES];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { buf, bits })
    }

    /// Decode lowercase or uppercase hex entropy.
    pub fn from_hex(s: &str) -> Result<Self, MnemonicError> {
        let bytes = zeroize::Zeroizing::new(
            hex::decode(s).map_err(|e| MnemonicError::MalformedSerialization(e.to_string()))?,
        );
        Self::from_bytes(&bytes)
    }

    /// Length of this entropy.
    pub fn bits(&self) -> EntropyBits {
        self.bits
    }

    /// The entropy bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.bits.bytes()]
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl Zeroize for Entropy {
    fn zeroize(&mut self) {
        self.buf.zeroize();
    }
}

impl Drop for Entropy {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Entropy {}

impl Clone for Entropy {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            bits: self.bits,
        }
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Entropy {}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bits.get())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
