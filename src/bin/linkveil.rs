//! Linkveil CLI - Passphrase-veiled integer link tokens
//!
//! Command-line interface for encoding ranges of integers into opaque
//! URL-safe tokens and decoding them back, keyed by a passphrase.

use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use std::process;
use url::Url;

use linkveil::carrier;
use linkveil::error::Result;
use linkveil::key::derive_key;
use linkveil::numcrypt;
use linkveil::passphrase::{PassphraseReader, ReaderPassphraseReader, TerminalPassphraseReader};

#[derive(Parser)]
#[command(name = "linkveil")]
#[command(version)]
#[command(about = "Passphrase-veiled integer link tokens.", long_about = None)]
struct Cli {
    /// Read passphrase from stdin instead of from terminal
    #[arg(long, global = true)]
    passphrase_stdin: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a range of values as tokens or veiled links
    #[command(alias = "e")]
    Encode {
        /// First value to encode
        #[arg(short, long, value_name = "VALUE", default_value = "1")]
        begin: BigUint,

        /// How many consecutive values to encode
        #[arg(short, long, value_name = "COUNT", default_value_t = 1)]
        num: u64,

        /// Base URL to attach each token to as the lk query parameter
        #[arg(short, long, value_name = "URL")]
        url: Option<Url>,
    },

    /// Decode a token, or a link carrying one
    #[command(alias = "d")]
    Decode {
        /// Token text or URL with an lk query parameter
        #[arg(allow_hyphen_values = true)]
        carrier: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut reader = get_passphrase_reader(cli.passphrase_stdin);
    let result = match cli.command {
        Commands::Encode { begin, num, url } => {
            run_encode(&mut *reader, begin, num, url.as_ref())
        }
        Commands::Decode { carrier } => run_decode(&mut *reader, &carrier),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_encode(
    reader: &mut dyn PassphraseReader,
    begin: BigUint,
    num: u64,
    base: Option<&Url>,
) -> Result<()> {
    let passphrase = reader.read_passphrase()?;
    let key = derive_key(&passphrase);

    let mut value = begin;
    for _ in 0..num {
        let token = numcrypt::encode(&key, &value);
        match base {
            Some(base) => println!("{} {}", value, carrier::veil_link(base, &token)),
            None => println!("{} {}", value, token),
        }
        value += 1u32;
    }
    Ok(())
}

fn run_decode(reader: &mut dyn PassphraseReader, carrier_text: &str) -> Result<()> {
    let passphrase = reader.read_passphrase()?;
    let key = derive_key(&passphrase);

    let value = numcrypt::decode(&key, carrier_text)?;
    println!("{}", value);
    Ok(())
}

fn get_passphrase_reader(use_stdin: bool) -> Box<dyn PassphraseReader> {
    if use_stdin {
        Box::new(ReaderPassphraseReader::new(Box::new(std::io::stdin())))
    } else {
        Box::new(TerminalPassphraseReader)
    }
}
