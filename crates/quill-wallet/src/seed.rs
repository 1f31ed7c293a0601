//! Seed derivation from a finished phrase.
//!
//! `PBKDF2-HMAC-SHA512(NFKD(phrase), NFKD("mnemonic" || passphrase), 2048)`
//! truncated to 64 bytes. The passphrase is not covered by the phrase
//! checksum: any passphrase yields a valid, different seed.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use quill_core::constants::{PBKDF2_ROUNDS, SEED_LEN, SEED_SALT_PREFIX};

use crate::error::WalletError;

/// A 64-byte seed for hierarchical key derivation.
///
/// Secret material is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    /// Create a seed from raw bytes.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self { bytes }
    }

    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl Clone for Seed {
    fn clone(&self) -> Self {
        Self { bytes: self.bytes }
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the seed for `phrase` and `passphrase`.
///
/// CPU-bound (2048 HMAC-SHA512 rounds). Inside an async runtime prefer
/// [`derive_seed_blocking`].
pub fn derive_seed(phrase: &str, passphrase: &str) -> Seed {
    let password: Zeroizing<String> = Zeroizing::new(phrase.nfkd().collect());
    let salt: Zeroizing<String> = Zeroizing::new(
        SEED_SALT_PREFIX
            .chars()
            .chain(passphrase.chars())
            .nfkd()
            .collect(),
    );
    trace!(rounds = PBKDF2_ROUNDS, "pbkdf2 seed derivation");

    let mut bytes = [0u8; SEED_LEN];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut bytes);
    Seed { bytes }
}

/// [`derive_seed`] on the runtime's blocking thread pool.
pub async fn derive_seed_blocking(
    phrase: Zeroizing<String>,
    passphrase: Zeroizing<String>,
) -> Result<Seed, WalletError> {
    tokio::task::spawn_blocking(move || derive_seed(&phrase, &passphrase))
        .await
        .map_err(|e| WalletError::Task(e.to_string()))
}
