//! Criterion benchmarks for quill-wallet.
//!
//! Covers: PBKDF2 seed derivation, master key derivation, and the JSON and
//! raw serializers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quill_wallet::{derive_seed, HdPrivateKey, Language, Mnemonic, Network};

const PHRASE: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";

fn bench_seed(c: &mut Criterion) {
    c.bench_function("derive_seed_2048_rounds", |b| {
        b.iter(|| derive_seed(black_box(PHRASE), black_box("TREZOR")))
    });

    let seed = derive_seed(PHRASE, "TREZOR");
    c.bench_function("master_key_from_seed", |b| {
        b.iter(|| HdPrivateKey::from_seed(black_box(&seed), Network::Mainnet))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let mnemonic = Mnemonic::from_entropy(&[0x7F; 32], Language::French).unwrap();
    let raw = mnemonic.to_raw();
    let json = mnemonic.to_json_string().unwrap();

    c.bench_function("mnemonic_to_raw", |b| b.iter(|| black_box(&mnemonic).to_raw()));

    c.bench_function("mnemonic_from_raw", |b| {
        b.iter(|| Mnemonic::from_raw(black_box(&raw)))
    });

    c.bench_function("mnemonic_from_json", |b| {
        b.iter(|| Mnemonic::from_json_str(black_box(&json)))
    });
}

criterion_group!(benches, bench_seed, bench_serialize);
criterion_main!(benches);
