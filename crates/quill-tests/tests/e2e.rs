//! End-to-end lifecycle tests across quill-core and quill-wallet.
//!
//! Each test walks a mnemonic through generation or recovery, seed and key
//! derivation, serialization and disposal the way a wallet would.

use quill_core::phrase::split_words;
use quill_core::{EntropyBits, Language, MnemonicError};
use quill_tests::helpers::*;
use quill_wallet::{HdPrivateKey, Mnemonic, MnemonicOptions, Network, derive_seed_blocking};
use zeroize::Zeroizing;

#[test]
fn generate_backup_restore() {
    for language in Language::ALL {
        let original = Mnemonic::with_bits(EntropyBits::new(256).unwrap(), language);
        let backup = original.phrase().to_string();
        assert_eq!(word_count(&backup), 24);

        let restored = Mnemonic::from_phrase_in(&backup, language).unwrap();
        assert_eq!(restored.entropy(), original.entropy());
        assert_eq!(restored.to_seed(Some("pw")), original.to_seed(Some("pw")));
    }
}

#[test]
fn restore_tolerates_separator_noise() {
    let m = mnemonic_in(&[0x7f; 16], Language::English);
    let noisy = format!("\u{3000} {}  ", split_words(m.phrase()).join("  \u{3000}"));
    let restored = Mnemonic::from_phrase(&noisy).unwrap();
    assert_eq!(restored.phrase(), m.phrase());
    assert_eq!(restored.to_seed(None), m.to_seed(None));
}

#[test]
fn recovery_reports_typos_by_position() {
    let mut words: Vec<&str> = split_words(ZERO_PHRASE);
    words[7] = "abandn";
    let err = Mnemonic::from_phrase(&words.join(" ")).unwrap_err();
    assert_eq!(err, MnemonicError::UnknownWord { index: 7 });
    assert!(!err.to_string().contains("abandn"));
}

#[test]
fn key_derivation_through_options() {
    let options: MnemonicOptions = serde_json::from_value(serde_json::json!({
        "phrase": ZERO_PHRASE,
        "passphrase": "TREZOR",
    }))
    .unwrap();
    let m = Mnemonic::from_options(&options).unwrap();
    assert_eq!(m.to_seed(None).to_hex(), ZERO_PHRASE_TREZOR_SEED);

    let key = m.to_key(None, Some(Network::Mainnet)).unwrap();
    assert_eq!(key.to_base58(), ZERO_PHRASE_TREZOR_XPRV);
    let parsed: HdPrivateKey = ZERO_PHRASE_TREZOR_XPRV.parse().unwrap();
    assert_eq!(parsed, key);
}

#[test]
fn serialize_across_formats() {
    let mut m = Mnemonic::with_bits(EntropyBits::new(192).unwrap(), Language::French);
    m.set_passphrase("mot de passe");

    let from_json = Mnemonic::from_json_str(&m.to_json_string().unwrap()).unwrap();
    let from_raw = Mnemonic::from_raw(&from_json.to_raw()).unwrap();

    assert_eq!(from_raw.entropy(), m.entropy());
    assert_eq!(from_raw.phrase(), m.phrase());
    assert_eq!(from_raw.passphrase(), "mot de passe");
    assert_eq!(from_raw.to_seed(None), m.to_seed(None));
}

#[test]
fn destroy_then_reuse() {
    let mut m = mnemonic_in(&[0x42; 32], Language::Japanese);
    m.set_passphrase("secret");
    let old_entropy = m.entropy().to_hex();

    m.destroy();
    assert_eq!(m.bits().get(), 128);
    assert_eq!(m.language(), Language::English);
    assert_eq!(m.passphrase(), "");

    let fresh = m.entropy().to_hex();
    assert_ne!(fresh, old_entropy);
    assert_ne!(fresh, "00".repeat(16));
    assert_eq!(word_count(m.phrase()), 12);
}

#[tokio::test]
async fn seed_derivation_offloaded_from_runtime() {
    let m = Mnemonic::from_phrase(ZERO_PHRASE).unwrap();
    let offloaded = m.to_seed_offloaded(Some("TREZOR")).await.unwrap();
    assert_eq!(offloaded.to_hex(), ZERO_PHRASE_TREZOR_SEED);

    let direct = derive_seed_blocking(
        Zeroizing::new(ZERO_PHRASE.to_string()),
        Zeroizing::new("TREZOR".to_string()),
    )
    .await
    .unwrap();
    assert_eq!(direct, offloaded);
}

#[tokio::test]
async fn concurrent_seed_derivations() {
    let handles: Vec<_> = (0u8..4)
        .map(|i| {
            tokio::spawn(async move {
                let m = Mnemonic::from_entropy(&[i; 16], Language::English).unwrap();
                m.to_seed_offloaded(None).await.unwrap()
            })
        })
        .collect();

    let mut seeds = Vec::new();
    for handle in handles {
        seeds.push(handle.await.unwrap());
    }
    for (i, seed) in seeds.iter().enumerate() {
        let m = Mnemonic::from_entropy(&[i as u8; 16], Language::English).unwrap();
        assert_eq!(seed, &m.to_seed(None));
    }
}
