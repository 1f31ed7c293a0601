//! BIP-32 master (root) private keys.
//!
//! Only the root of the hierarchy is produced here: child derivation and
//! public keys need elliptic-curve arithmetic and live with the consumer.

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use quill_core::constants::{EXTENDED_KEY_LEN, HD_MASTER_HMAC_KEY, Network, SECP256K1_ORDER};
use quill_core::{EntropyBits, Language};

use crate::error::WalletError;
use crate::seed::Seed;

type HmacSha512 = Hmac<Sha512>;

/// Where a root key came from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySource {
    pub language: Language,
    pub bits: EntropyBits,
}

/// An extended private key at the root of a BIP-32 hierarchy.
///
/// Secret key and chain code are zeroized on drop. Equality ignores
/// [`KeySource`] provenance.
pub struct HdPrivateKey {
    network: Network,
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: u32,
    chain_code: [u8; 32],
    secret: [u8; 32],
    source: Option<KeySource>,
}

impl HdPrivateKey {
    /// Derive the master key for `seed`.
    ///
    /// Fails if the left half of `HMAC-SHA512("Bitcoin seed", seed)` is zero
    /// or not below the curve order.
    pub fn from_seed(seed: &Seed, network: Network) -> Result<Self, WalletError> {
        let mut mac = HmacSha512::new_from_slice(HD_MASTER_HMAC_KEY)
            .map_err(|e| WalletError::KeyDerivation(e.to_string()))?;
        mac.update(seed.as_bytes());
        let mut out = Zeroizing::new([0u8; 64]);
        out.copy_from_slice(&mac.finalize().into_bytes());

        let mut secret = [0u8; 32];
        let mut chain_code = [0u8; 32];
        secret.copy_from_slice(&out[..32]);
        chain_code.copy_from_slice(&out[32..]);
        let key = Self {
            network,
            depth: 0,
            parent_fingerprint: [0; 4],
            child_number: 0,
            chain_code,
            secret,
            source: None,
        };
        check_secret(&key.secret)?;
        Ok(key)
    }

    /// Attach provenance.
    pub fn with_source(mut self, source: KeySource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    pub fn child_number(&self) -> u32 {
        self.child_number
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// The 32-byte secret key. Handle with care.
    pub fn secret_bytes(&self) -> &[u8; 32] {
        &self.secret
    }

    pub fn source(&self) -> Option<KeySource> {
        self.source
    }

    /// Serialize to the 78-byte extended key layout with base58check.
    ///
    /// `version(4) depth(1) fingerprint(4) child(4) chain_code(32) 0x00 secret(32)`,
    /// integers big-endian.
    pub fn to_base58(&self) -> String {
        let mut raw = Zeroizing::new(Vec::with_capacity(EXTENDED_KEY_LEN));
        raw.extend_from_slice(&self.network.xprv_version().to_be_bytes());
        raw.push(self.depth);
        raw.extend_from_slice(&self.parent_fingerprint);
        raw.extend_from_slice(&self.child_number.to_be_bytes());
        raw.extend_from_slice(&self.chain_code);
        raw.push(0);
        raw.extend_from_slice(&self.secret);
        bs58::encode(raw.as_slice()).with_check().into_string()
    }

    /// Parse a base58check extended private key.
    ///
    /// Test-network prefixes parse as [`Network::Testnet`].
    pub fn from_base58(s: &str) -> Result<Self, WalletError> {
        let raw = Zeroizing::new(
            bs58::decode(s)
                .with_check(None)
                .into_vec()
                .map_err(|e| WalletError::KeyDerivation(format!("base58: {e}")))?,
        );
        if raw.len() != EXTENDED_KEY_LEN {
            return Err(WalletError::KeyDerivation(format!(
                "extended key is {} bytes, expected {EXTENDED_KEY_LEN}",
                raw.len()
            )));
        }

        let version = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
        let network = Network::from_xprv_version(version).ok_or_else(|| {
            WalletError::KeyDerivation(format!("unknown version {version:#010x}"))
        })?;
        if raw[45] != 0 {
            return Err(WalletError::KeyDerivation("not a private key".into()));
        }

        let mut key = Self {
            network,
            depth: raw[4],
            parent_fingerprint: [raw[5], raw[6], raw[7], raw[8]],
            child_number: u32::from_be_bytes([raw[9], raw[10], raw[11], raw[12]]),
            chain_code: [0; 32],
            secret: [0; 32],
            source: None,
        };
        key.chain_code.copy_from_slice(&raw[13..45]);
        key.secret.copy_from_slice(&raw[46..78]);
        check_secret(&key.secret)?;
        Ok(key)
    }
}

fn check_secret(secret: &[u8; 32]) -> Result<(), WalletError> {
    if secret.iter().all(|&b| b == 0) {
        return Err(WalletError::KeyDerivation("secret key is zero".into()));
    }
    if *secret >= SECP256K1_ORDER {
        return Err(WalletError::KeyDerivation("secret key out of range".into()));
    }
    Ok(())
}

impl Drop for HdPrivateKey {
    fn drop(&mut self) {
        self.secret.zeroize();
        self.chain_code.zeroize();
    }
}

impl ZeroizeOnDrop for HdPrivateKey {}

impl Clone for HdPrivateKey {
    fn clone(&self) -> Self {
        Self {
            network: self.network,
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_number: self.child_number,
            chain_code: self.chain_code,
            secret: self.secret,
            source: self.source,
        }
    }
}

impl PartialEq for HdPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network
            && self.depth == other.depth
            && self.parent_fingerprint == other.parent_fingerprint
            && self.child_number == other.child_number
            && self.chain_code == other.chain_code
            && self.secret == other.secret
    }
}

impl Eq for HdPrivateKey {}

impl fmt::Display for HdPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for HdPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdPrivateKey")
            .field("network", &self.network)
            .field("depth", &self.depth)
            .field("source", &self.source)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl FromStr for HdPrivateKey {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::derive_seed;

    const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const TREZOR_XPRV: &str = "xprv9s21ZrQH143K3h3fDYiay8mocZ3afhfULfb5GX8kCBdno77K4HiA15Tg23wpbeF1pLfs1c5SPmYHrEpTuuRhxMwvKDwqdKiGJS9XFKzUsAF";
    const TREZOR_TPRV: &str = "tprv8ZgxMBicQKsPeWHBt7a68nPnvgTnuDhUgDWC8wZCgA8GahrQ3f3uWpq7wE7Uc1dLBnCe1hhCZ886K6ND37memRDWqsA9HgSKDXtwh2Qxo6J";

    fn raw_key(version: u32, marker: u8, secret: [u8; 32]) -> String {
        let mut raw = Vec::with_capacity(EXTENDED_KEY_LEN);
        raw.extend_from_slice(&version.to_be_bytes());
        raw.extend_from_slice(&[0u8; 9]);
        raw.extend_from_slice(&[0x11; 32]);
        raw.push(marker);
        raw.extend_from_slice(&secret);
        bs58::encode(raw).with_check().into_string()
    }

    #[test]
    fn master_key_vector_mainnet() {
        let seed = derive_seed(ZERO_PHRASE, "TREZOR");
        let key = HdPrivateKey::from_seed(&seed, Network::Mainnet).unwrap();
        assert_eq!(key.to_base58(), TREZOR_XPRV);
        assert_eq!(key.to_string(), TREZOR_XPRV);
        assert_eq!(
            hex::encode(key.secret_bytes()),
            "cbedc75b0d6412c85c79bc13875112ef912fd1e756631b5a00330866f22ff184"
        );
        assert_eq!(key.depth(), 0);
        assert_eq!(key.child_number(), 0);
        assert_eq!(key.parent_fingerprint(), [0; 4]);
    }

    #[test]
    fn master_key_vector_test_networks() {
        let seed = derive_seed(ZERO_PHRASE, "TREZOR");
        for network in [Network::Testnet, Network::Regtest] {
            let key = HdPrivateKey::from_seed(&seed, network).unwrap();
            assert_eq!(key.to_base58(), TREZOR_TPRV);
        }
    }

    #[test]
    fn parse_roundtrip() {
        let key: HdPrivateKey = TREZOR_XPRV.parse().unwrap();
        assert_eq!(key.network(), Network::Mainnet);
        assert_eq!(key.to_base58(), TREZOR_XPRV);
        let test_key = HdPrivateKey::from_base58(TREZOR_TPRV).unwrap();
        assert_eq!(test_key.network(), Network::Testnet);
        assert_eq!(test_key.chain_code(), key.chain_code());
    }

    #[test]
    fn equality_ignores_source() {
        let seed = derive_seed(ZERO_PHRASE, "TREZOR");
        let key = HdPrivateKey::from_seed(&seed, Network::Mainnet)
            .unwrap()
            .with_source(KeySource {
                language: Language::English,
                bits: EntropyBits::default(),
            });
        assert!(key.source().is_some());
        let parsed = HdPrivateKey::from_base58(&key.to_base58()).unwrap();
        assert!(parsed.source().is_none());
        assert_eq!(key, parsed);
        assert_eq!(key.clone(), key);
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let mut s = TREZOR_XPRV.to_string();
        s.pop();
        s.push('B');
        assert!(matches!(
            HdPrivateKey::from_base58(&s),
            Err(WalletError::KeyDerivation(_))
        ));
    }

    #[test]
    fn wrong_length_rejected() {
        let short = bs58::encode([0u8; 40]).with_check().into_string();
        assert!(HdPrivateKey::from_base58(&short).is_err());
    }

    #[test]
    fn unknown_version_rejected() {
        // xpub prefix.
        let s = raw_key(0x0488_B21E, 0, [1; 32]);
        assert!(HdPrivateKey::from_base58(&s).is_err());
    }

    #[test]
    fn missing_private_marker_rejected() {
        let s = raw_key(0x0488_ADE4, 0x02, [1; 32]);
        assert!(HdPrivateKey::from_base58(&s).is_err());
    }

    #[test]
    fn secret_range_enforced() {
        assert!(HdPrivateKey::from_base58(&raw_key(0x0488_ADE4, 0, [1; 32])).is_ok());
        assert_eq!(
            HdPrivateKey::from_base58(&raw_key(0x0488_ADE4, 0, [0; 32])),
            Err(WalletError::KeyDerivation("secret key is zero".into()))
        );
        assert_eq!(
            HdPrivateKey::from_base58(&raw_key(0x0488_ADE4, 0, SECP256K1_ORDER)),
            Err(WalletError::KeyDerivation("secret key out of range".into()))
        );
        assert!(check_secret(&[0xFF; 32]).is_err());
    }

    #[test]
    fn debug_redacts_secret() {
        let key = HdPrivateKey::from_base58(TREZOR_XPRV).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("cbedc75b"));
    }
}
