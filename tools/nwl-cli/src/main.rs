//! NWL Command Line Tool
//!
//! Provides commands for debugging signing parity with the gateway:
//! - encode: Print the canonical query string for a field file
//! - encrypt: Encrypt a field file to the PostData_ ciphertext
//! - digest: Compute the HashData_ digest for a ciphertext
//! - payload: Print the full signed field set as JSON
//!
//! Field files are JSON objects of string or integer members; member order
//! is significant and is preserved through encoding.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nwl_core::{Credentials, FieldMap};
use nwl_sign::{digest, encode, encrypt, sign_fields};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nwl")]
#[command(version)]
#[command(about = "NewebPay logistics signing tool - Encode, encrypt, and digest request fields")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical query string for a field file
    #[command(about = "Print the canonical application/x-www-form-urlencoded string")]
    Encode {
        /// Path to the JSON field file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Encrypt a field file to the PostData_ ciphertext
    #[command(about = "Encrypt fields with AES-256-CBC and print uppercase hex")]
    Encrypt {
        /// Path to the JSON field file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Merchant HashKey (32 bytes)
        #[arg(long)]
        key: String,

        /// Merchant HashIV (16 bytes)
        #[arg(long)]
        iv: String,
    },

    /// Compute the HashData_ digest for a ciphertext
    #[command(about = "Compute the SHA-256 integrity digest for a ciphertext")]
    Digest {
        /// The uppercase hex ciphertext
        #[arg(value_name = "CIPHERTEXT")]
        ciphertext: String,

        /// Merchant HashKey (32 bytes)
        #[arg(long)]
        key: String,

        /// Merchant HashIV (16 bytes)
        #[arg(long)]
        iv: String,
    },

    /// Print the full signed field set as JSON
    #[command(about = "Sign a field file and print the transmittable payload")]
    Payload {
        /// Path to the JSON field file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Merchant identifier
        #[arg(long)]
        merchant_id: String,

        /// Merchant HashKey (32 bytes)
        #[arg(long)]
        key: String,

        /// Merchant HashIV (16 bytes)
        #[arg(long)]
        iv: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { file } => handle_encode(&file),
        Commands::Encrypt { file, key, iv } => handle_encrypt(&file, &key, &iv),
        Commands::Digest { ciphertext, key, iv } => handle_digest(&ciphertext, &key, &iv),
        Commands::Payload { file, merchant_id, key, iv } => {
            handle_payload(&file, &merchant_id, &key, &iv)
        }
    }
}

fn read_fields(file: &PathBuf) -> Result<FieldMap> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let value: serde_json::Value =
        serde_json::from_str(&json).context("Failed to parse JSON")?;

    FieldMap::from_json_object(&value).context("Invalid field file")
}

fn handle_encode(file: &PathBuf) -> Result<()> {
    let fields = read_fields(file)?;
    println!("{}", encode(&fields));
    Ok(())
}

fn handle_encrypt(file: &PathBuf, key: &str, iv: &str) -> Result<()> {
    let fields = read_fields(file)?;
    let ciphertext = encrypt(&fields, key, iv).context("Encryption failed")?;
    println!("{ciphertext}");
    Ok(())
}

fn handle_digest(ciphertext: &str, key: &str, iv: &str) -> Result<()> {
    println!("{}", digest(ciphertext, key, iv));
    Ok(())
}

fn handle_payload(file: &PathBuf, merchant_id: &str, key: &str, iv: &str) -> Result<()> {
    let fields = read_fields(file)?;
    let credentials = Credentials::new(merchant_id, key, iv);
    let payload = sign_fields(&credentials, &fields).context("Signing failed")?;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
