//! # quill-wallet: mnemonic lifecycle, seeds and root keys.
//!
//! Builds on `quill-core` to provide the [`Mnemonic`] aggregate with lazy
//! entropy generation and disposal, PBKDF2 seed derivation, the BIP-32
//! master key, and JSON and raw binary serialization.
//!
//! # Modules
//!
//! - [`error`]: `WalletError` enum
//! - [`mnemonic`]: `Mnemonic` aggregate
//! - [`seed`]: `Seed`, PBKDF2-HMAC-SHA512 derivation
//! - [`hd`]: BIP-32 master private key
//! - [`serialize`]: JSON and raw encodings
//! - [`options`]: `MnemonicOptions`

pub mod error;
pub mod hd;
pub mod mnemonic;
pub mod options;
pub mod seed;
pub mod serialize;

// Re-exports for convenient access
pub use error::WalletError;
pub use hd::{HdPrivateKey, KeySource};
pub use mnemonic::Mnemonic;
pub use options::MnemonicOptions;
pub use quill_core::constants::Network;
pub use quill_core::{Entropy, EntropyBits, Language, MnemonicError};
pub use seed::{Seed, derive_seed, derive_seed_blocking};
pub use serialize::MnemonicJson;
