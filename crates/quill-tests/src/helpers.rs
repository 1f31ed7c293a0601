//! Shared test helpers for vector, property and end-to-end tests.

use quill_core::phrase::split_words;
use quill_core::{Entropy, EntropyBits, Language};
use quill_wallet::Mnemonic;

/// 16 zero bytes, English.
pub const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// Seed of [`ZERO_PHRASE`] with passphrase `TREZOR`.
pub const ZERO_PHRASE_TREZOR_SEED: &str = "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04";

/// Mainnet master key of [`ZERO_PHRASE`] with passphrase `TREZOR`.
pub const ZERO_PHRASE_TREZOR_XPRV: &str = "xprv9s21ZrQH143K3h3fDYiay8mocZ3afhfULfb5GX8kCBdno77K4HiA15Tg23wpbeF1pLfs1c5SPmYHrEpTuuRhxMwvKDwqdKiGJS9XFKzUsAF";

/// Entropy of `bits` bits with every byte set to `fill`.
pub fn filled_entropy(bits: usize, fill: u8) -> Entropy {
    let bits = EntropyBits::new(bits).unwrap();
    Entropy::from_bytes(&vec![fill; bits.bytes()]).unwrap()
}

/// Mnemonic over `bytes` in `language`.
pub fn mnemonic_in(bytes: &[u8], language: Language) -> Mnemonic {
    Mnemonic::from_entropy(bytes, language).unwrap()
}

/// Number of words in a phrase.
pub fn word_count(phrase: &str) -> usize {
    split_words(phrase).len()
}
