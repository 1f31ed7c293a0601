//! SHA-256 checksum over mnemonic entropy.
//!
//! Only the leading `bits / 32` bits of the digest are used.

use sha2::{Digest, Sha256};

use crate::error::MnemonicError;

/// SHA-256 of the raw entropy bytes.
pub fn digest(entropy: &[u8]) -> [u8; 32] {
    Sha256::digest(entropy).into()
}

/// Bit `i` of `bytes`, most significant bit first.
fn bit(bytes: &[u8], i: usize) -> u8 {
    (bytes[i / 8] >> (7 - i % 8)) & 1
}

/// Check that the leading `checksum_bits` bits of `field` equal those of
/// `SHA-256(entropy)`. Bits of `field` past `checksum_bits` are padding.
pub fn verify(entropy: &[u8], field: &[u8], checksum_bits: usize) -> Result<(), MnemonicError> {
    if field.len() * 8 < checksum_bits || checksum_bits > 256 {
        return Err(MnemonicError::ChecksumMismatch);
    }
    let expected = digest(entropy);
    for i in 0..checksum_bits {
        if bit(field, i) != bit(&expected, i) {
            return Err(MnemonicError::ChecksumMismatch);
        }
    }
    Ok(())
}
