//! quill-cli: command-line interface for BIP-39 mnemonics.
//!
//! Generates and recovers phrases, derives seeds and BIP-32 root keys, and
//! converts between the JSON and raw binary forms. Phrases and passphrases
//! are read with a no-echo prompt unless given as flags.

mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quill_core::constants::Network;
use quill_core::{EntropyBits, Language};
use quill_wallet::Mnemonic;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "quill-cli")]
#[command(version, about = "BIP-39 mnemonic phrases, seeds and root keys.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new mnemonic.
    Generate(GenerateArgs),
    /// Validate a phrase and show what it encodes.
    Recover(PhraseArgs),
    /// Derive the 64-byte seed for a phrase.
    Seed(PhraseArgs),
    /// Derive the BIP-32 master private key for a phrase.
    MasterKey(MasterKeyArgs),
    /// Print the raw binary form of a mnemonic as hex.
    ExportRaw(PhraseArgs),
    /// Decode a hex raw mnemonic and print it as JSON.
    ImportRaw(ImportRawArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Entropy length in bits (default: QUILL_BITS or 128).
    #[arg(short, long)]
    bits: Option<usize>,

    /// Wordlist language (default: QUILL_LANGUAGE or english).
    #[arg(short, long)]
    language: Option<Language>,

    /// Print the full JSON form instead of the phrase.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PhraseArgs {
    /// Mnemonic phrase. If not provided, will prompt securely.
    #[arg(short, long)]
    phrase: Option<String>,

    /// Decode the phrase in this language only. Inferred when omitted.
    #[arg(short, long)]
    language: Option<Language>,

    /// Prompt for a passphrase.
    #[arg(long)]
    passphrase: bool,
}

#[derive(Args)]
struct MasterKeyArgs {
    #[command(flatten)]
    phrase: PhraseArgs,

    /// Network (default: QUILL_NETWORK or mainnet).
    #[arg(short, long)]
    network: Option<Network>,
}

#[derive(Args)]
struct ImportRawArgs {
    /// Hex-encoded raw mnemonic.
    hex: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Generate(args) => generate(args, &config),
        Commands::Recover(args) => recover(args),
        Commands::Seed(args) => seed(args).await,
        Commands::MasterKey(args) => master_key(args, &config),
        Commands::ExportRaw(args) => export_raw(args),
        Commands::ImportRaw(args) => import_raw(args),
    }
}

/// Generate a fresh mnemonic.
fn generate(args: GenerateArgs, config: &CliConfig) -> Result<()> {
    let bits = match args.bits {
        Some(bits) => EntropyBits::new(bits).context("Invalid entropy length")?,
        None => config.bits,
    };
    let language = args.language.unwrap_or(config.language);
    debug!(%bits, %language, "generating mnemonic");
    let mnemonic = Mnemonic::with_bits(bits, language);

    if args.json {
        println!("{}", mnemonic.to_json_string()?);
    } else {
        println!("{mnemonic}");
    }
    Ok(())
}

/// Decode a phrase and report its language, length and entropy.
fn recover(args: PhraseArgs) -> Result<()> {
    let mnemonic = load_mnemonic(&args)?;
    println!("Language: {}", mnemonic.language());
    println!("Bits:     {}", mnemonic.bits());
    println!("Entropy:  {}", mnemonic.entropy().to_hex());
    Ok(())
}

/// Print the hex seed, deriving it off the async runtime's worker threads.
async fn seed(args: PhraseArgs) -> Result<()> {
    let mnemonic = load_mnemonic(&args)?;
    let seed = mnemonic
        .to_seed_offloaded(None)
        .await
        .context("Seed derivation failed")?;
    println!("{}", seed.to_hex());
    Ok(())
}

/// Print the BIP-32 master private key.
fn master_key(args: MasterKeyArgs, config: &CliConfig) -> Result<()> {
    let mnemonic = load_mnemonic(&args.phrase)?;
    let network = args.network.unwrap_or(config.network);
    debug!(%network, "deriving master key");
    let key = mnemonic
        .to_key(None, Some(network))
        .context("Master key derivation failed")?;
    println!("{key}");
    Ok(())
}

/// Print the raw binary form as hex.
fn export_raw(args: PhraseArgs) -> Result<()> {
    let mnemonic = load_mnemonic(&args)?;
    println!("{}", hex::encode(mnemonic.to_raw()));
    Ok(())
}

/// Decode a raw hex mnemonic and print its JSON form.
fn import_raw(args: ImportRawArgs) -> Result<()> {
    let raw = Zeroizing::new(hex::decode(args.hex.trim()).context("Invalid hex")?);
    let mnemonic = Mnemonic::from_raw(&raw).context("Invalid raw mnemonic")?;
    println!("{}", mnemonic.to_json_string()?);
    Ok(())
}

/// Build a mnemonic from flags, prompting for anything secret left out.
fn load_mnemonic(args: &PhraseArgs) -> Result<Mnemonic> {
    let phrase = match &args.phrase {
        Some(phrase) => Zeroizing::new(phrase.clone()),
        None => prompt_secret("Enter mnemonic phrase")?,
    };
    let mut mnemonic = match args.language {
        Some(language) => Mnemonic::from_phrase_in(&phrase, language),
        None => Mnemonic::from_phrase(&phrase),
    }
    .context("Invalid mnemonic")?;
    if args.passphrase {
        mnemonic.set_passphrase(prompt_secret("Enter passphrase")?.as_str());
    }
    Ok(mnemonic)
}

/// Prompt for a secret securely (no echo).
fn prompt_secret(prompt: &str) -> Result<Zeroizing<String>> {
    rpassword::prompt_password(format!("{prompt}: "))
        .map(Zeroizing::new)
        .context("Failed to read input")
}
