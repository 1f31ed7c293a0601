//! Protocol constants for mnemonic encoding and seed derivation.

/// Smallest supported entropy length in bits (12 words).
pub const MIN_ENTROPY: usize = 128;

/// Largest supported entropy length in bits (24 words).
pub const MAX_ENTROPY: usize = 256;

/// Entropy lengths must be a multiple of this many bits.
pub const ENTROPY_STEP: usize = 32;

/// Entropy length used when none is requested.
pub const DEFAULT_ENTROPY: usize = MIN_ENTROPY;

/// Largest entropy buffer in bytes.
pub const MAX_ENTROPY_BYTES: usize = MAX_ENTROPY / 8;

/// Number of words in every wordlist.
pub const WORDLIST_SIZE: usize = 2048;

/// Bits encoded by a single word (`log2(WORDLIST_SIZE)`).
pub const BITS_PER_WORD: usize = 11;

/// Separator used when joining words for every language except Japanese.
pub const WORD_SEPARATOR: char = ' ';

/// Ideographic space, used to join Japanese phrases.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// PBKDF2 iteration count for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = 64;

/// Prefix prepended to the passphrase to form the PBKDF2 salt.
pub const SEED_SALT_PREFIX: &str = "mnemonic";

/// HMAC key for BIP-32 master key generation.
pub const HD_MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Length of a serialized extended key before base58check.
pub const EXTENDED_KEY_LEN: usize = 78;

/// Order of the secp256k1 group, big-endian. Master secrets must be below it.
pub const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// Number of checksum bits appended to `entropy_bits` of entropy.
///
/// # Examples
///
/// ```
/// use quill_core::constants::checksum_bits;
/// assert_eq!(checksum_bits(128), 4);
/// assert_eq!(checksum_bits(256), 8);
/// ```
pub const fn checksum_bits(entropy_bits: usize) -> usize {
    entropy_bits / ENTROPY_STEP
}

/// Number of words in a phrase encoding `entropy_bits` of entropy.
///
/// # Examples
///
/// ```
/// use quill_core::constants::word_count;
/// assert_eq!(word_count(128), 12);
/// assert_eq!(word_count(256), 24);
/// ```
pub const fn word_count(entropy_bits: usize) -> usize {
    (entropy_bits + checksum_bits(entropy_bits)) / BITS_PER_WORD
}

/// Network selector for root key serialization.
///
/// Controls the version prefix of extended private keys.
///
/// # Examples
///
/// ```
/// use quill_core::constants::Network;
/// let net = Network::default();
/// assert_eq!(net, Network::Mainnet);
/// assert_eq!(net.xprv_version(), 0x0488_ADE4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Production network.
    #[default]
    Mainnet,
    /// Public test network.
    Testnet,
    /// Local regression-test network. Shares testnet key prefixes.
    Regtest,
}

impl Network {
    /// Four-byte version prefix for serialized extended private keys.
    pub fn xprv_version(&self) -> u32 {
        match self {
            Self::Mainnet => 0x0488_ADE4,
            Self::Testnet | Self::Regtest => 0x0435_8394,
        }
    }

    /// Network for an extended private key version prefix.
    ///
    /// Test-network prefixes resolve to [`Network::Testnet`].
    pub fn from_xprv_version(version: u32) -> Option<Self> {
        match version {
            0x0488_ADE4 => Some(Self::Mainnet),
            0x0435_8394 => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Lowercase network name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Regtest => "regtest",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            "regtest" => Ok(Self::Regtest),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_bounds_are_aligned() {
        assert_eq!(MIN_ENTROPY % ENTROPY_STEP, 0);
        assert_eq!(MAX_ENTROPY % ENTROPY_STEP, 0);
        assert_eq!(MAX_ENTROPY_BYTES, 32);
    }

    #[test]
    fn wordlist_size_matches_bits_per_word() {
        assert_eq!(1usize << BITS_PER_WORD, WORDLIST_SIZE);
    }

    #[test]
    fn every_valid_length_fills_whole_words() {
        for bits in (MIN_ENTROPY..=MAX_ENTROPY).step_by(ENTROPY_STEP) {
            assert_eq!((bits + checksum_bits(bits)) % BITS_PER_WORD, 0, "bits={bits}");
        }
        assert_eq!(word_count(160), 15);
        assert_eq!(word_count(192), 18);
        assert_eq!(word_count(224), 21);
    }

    #[test]
    fn network_versions() {
        assert_eq!(Network::Testnet.xprv_version(), Network::Regtest.xprv_version());
        assert_ne!(Network::Mainnet.xprv_version(), Network::Testnet.xprv_version());
        assert_eq!(
            Network::from_xprv_version(Network::Mainnet.xprv_version()),
            Some(Network::Mainnet)
        );
        assert_eq!(Network::from_xprv_version(0), None);
    }

    #[test]
    fn network_parse_and_display() {
        assert_eq!("Testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("regtest".parse::<Network>().unwrap(), Network::Regtest);
        assert!("signet".parse::<Network>().is_err());
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
    }

    #[test]
    fn secp256k1_order_prefix() {
        assert_eq!(SECP256K1_ORDER[0], 0xFF);
        assert_eq!(SECP256K1_ORDER[31], 0x41);
    }
}
