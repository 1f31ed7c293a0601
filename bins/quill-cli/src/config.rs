//! CLI defaults loaded from environment variables.
//!
//! Command-line flags override every value here.

use anyhow::{Context, Result};
use quill_core::constants::Network;
use quill_core::{EntropyBits, Language};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Entropy length for `generate` (`QUILL_BITS`, default 128).
    pub bits: EntropyBits,
    /// Wordlist for `generate` (`QUILL_LANGUAGE`, default english).
    pub language: Language,
    /// Network for `master-key` (`QUILL_NETWORK`, default mainnet).
    pub network: Network,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bits = match lookup("QUILL_BITS") {
            Some(raw) => {
                let bits: usize = raw
                    .trim()
                    .parse()
                    .context("QUILL_BITS must be a positive integer")?;
                EntropyBits::new(bits).context("QUILL_BITS must be 128, 160, 192, 224 or 256")?
            }
            None => EntropyBits::default(),
        };

        let language = match lookup("QUILL_LANGUAGE") {
            Some(raw) => raw.parse().context("QUILL_LANGUAGE is not a supported language")?,
            None => Language::default(),
        };

        let network = match lookup("QUILL_NETWORK") {
            Some(raw) => raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("QUILL_NETWORK must be mainnet, testnet or regtest")?,
            None => Network::default(),
        };

        Ok(CliConfig {
            bits,
            language,
            network,
        })
    }
}
