//! dsig CLI - sign JSON documents and verify compact signatures.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod keyfile;
mod output;

use commands::{canonicalize, inspect, public_key, sign, verify};

#[derive(Parser)]
#[command(name = "dsig")]
#[command(about = "Sign JSON payloads and verify compact signatures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a JSON payload and print the compact token
    Sign {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Path to the private key file (base64url P-256 scalar)
        #[arg(long)]
        key: String,
        /// Key ID written to the `kid` header
        #[arg(long)]
        kid: String,
        /// Key lookup URL written to the `jku` header
        #[arg(long)]
        jku: Option<String>,
    },
    /// Verify a compact token and print its payload
    Verify {
        /// Compact token (or stdin if not provided)
        token: Option<String>,
        /// Path to the public key file (base64url SEC1 point)
        #[arg(long)]
        public_key: String,
        /// Output header and payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the header and payload of a token without verifying it
    Inspect {
        /// Compact token (or stdin if not provided)
        token: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Print the public key for a private key file
    PublicKey {
        /// Path to the private key file
        #[arg(long)]
        key: String,
        /// Emit the uncompressed SEC1 point
        #[arg(long)]
        uncompressed: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sign {
            input,
            key,
            kid,
            jku,
        } => sign::run(input, key, kid, jku),
        Commands::Verify {
            token,
            public_key,
            json,
        } => verify::run(token, public_key, json),
        Commands::Inspect { token, json } => inspect::run(token, json),
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::PublicKey { key, uncompressed } => public_key::run(key, uncompressed),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
