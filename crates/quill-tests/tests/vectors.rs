//! Known-answer vectors and cross-checks against the `bip39` crate.
//!
//! Phrase vectors are the published English BIP-39 test vectors; seeds use
//! passphrase `TREZOR`. Every language and length is compared word for
//! word with an independent implementation.

use quill_core::phrase::{decode, encode, split_words};
use quill_core::{EntropyBits, Language, MnemonicError};
use quill_tests::helpers::*;
use quill_wallet::{HdPrivateKey, Mnemonic, Network, derive_seed};

fn reference(language: Language) -> bip39::Language {
    match language {
        Language::SimplifiedChinese => bip39::Language::SimplifiedChinese,
        Language::TraditionalChinese => bip39::Language::TraditionalChinese,
        Language::English => bip39::Language::English,
        Language::French => bip39::Language::French,
        Language::Italian => bip39::Language::Italian,
        Language::Japanese => bip39::Language::Japanese,
    }
}

// ---------------------------------------------------------------------------
// Published English vectors
// ---------------------------------------------------------------------------

const ENGLISH_VECTORS: &[(usize, u8, &str)] = &[
    (128, 0x00, ZERO_PHRASE),
    (
        128,
        0x7f,
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
    ),
    (
        128,
        0x80,
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
    ),
    (
        128,
        0xff,
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
    ),
    (
        256,
        0x00,
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
    ),
    (
        256,
        0x7f,
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth title",
    ),
];

#[test]
fn english_phrase_vectors() {
    for &(bits, fill, phrase) in ENGLISH_VECTORS {
        let entropy = filled_entropy(bits, fill);
        assert_eq!(encode(&entropy, Language::English), phrase, "bits={bits} fill={fill:#x}");

        let decoded = decode(phrase).unwrap();
        assert_eq!(decoded.language, Language::English);
        assert_eq!(decoded.entropy, entropy);
    }
}

#[test]
fn trezor_seed_vectors() {
    assert_eq!(
        derive_seed(ZERO_PHRASE, "TREZOR").to_hex(),
        ZERO_PHRASE_TREZOR_SEED
    );

    let zero_256 = Mnemonic::from_entropy(&[0u8; 32], Language::English).unwrap();
    assert_eq!(
        zero_256.to_seed(Some("TREZOR")).to_hex(),
        "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8"
    );
}

#[test]
fn trezor_master_key_vector() {
    let seed = derive_seed(ZERO_PHRASE, "TREZOR");
    let key = HdPrivateKey::from_seed(&seed, Network::Mainnet).unwrap();
    assert_eq!(key.to_string(), ZERO_PHRASE_TREZOR_XPRV);

    let via_mnemonic = Mnemonic::from_phrase(ZERO_PHRASE)
        .unwrap()
        .to_key(Some("TREZOR"), None)
        .unwrap();
    assert_eq!(via_mnemonic, key);
}

#[test]
fn all_abandon_is_not_a_valid_phrase() {
    let phrase = vec!["abandon"; 12].join(" ");
    assert_eq!(decode(&phrase).unwrap_err(), MnemonicError::ChecksumMismatch);
}

// ---------------------------------------------------------------------------
// Cross-implementation compatibility
// ---------------------------------------------------------------------------

#[test]
fn phrases_match_reference_for_every_language_and_length() {
    for language in Language::ALL {
        for bits in EntropyBits::all() {
            for fill in [0x00u8, 0x5a, 0xa7, 0xff] {
                let entropy = filled_entropy(bits.get(), fill);
                let ours = encode(&entropy, language);
                let theirs = bip39::Mnemonic::from_entropy_in(reference(language), entropy.as_bytes())
                    .unwrap()
                    .to_string();
                let theirs: Vec<&str> = theirs.split_whitespace().collect();
                assert_eq!(split_words(&ours), theirs, "{language} {bits} {fill:#x}");
            }
        }
    }
}

#[test]
fn japanese_phrases_join_with_ideographic_space() {
    let entropy = filled_entropy(160, 0x3c);
    let phrase = encode(&entropy, Language::Japanese);
    assert_eq!(phrase.matches('\u{3000}').count(), 14);
    assert!(!phrase.contains(' '));
}

#[test]
fn seeds_match_reference() {
    for (fill, passphrase) in [(0x00u8, "TREZOR"), (0x80, ""), (0x3e, "correct horse")] {
        let mnemonic = mnemonic_in(&[fill; 16], Language::English);
        let reference = bip39::Mnemonic::from_entropy_in(bip39::Language::English, &[fill; 16])
            .unwrap()
            .to_seed_normalized(passphrase);
        assert_eq!(mnemonic.to_seed(Some(passphrase)).as_bytes(), &reference);
    }
}

#[test]
fn word_counts_per_length() {
    for (bits, words) in [(128, 12), (160, 15), (192, 18), (224, 21), (256, 24)] {
        let m = mnemonic_in(&vec![0x11; bits / 8], Language::Italian);
        assert_eq!(word_count(m.phrase()), words);
    }
}
