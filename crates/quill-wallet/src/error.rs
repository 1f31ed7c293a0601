//! Wallet error types.

use quill_core::error::MnemonicError;
use thiserror::Error;

/// Errors that can occur in mnemonic and key operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Mnemonic construction, decoding or deserialization failure.
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),

    /// Root key derivation or extended key parsing failure.
    #[error("key derivation: {0}")]
    KeyDerivation(String),

    /// A background derivation task failed to complete.
    #[error("task: {0}")]
    Task(String),
}
