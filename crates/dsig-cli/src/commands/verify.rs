//! Verify command implementation.

use dsig_core::Signature;
use serde_json::Value;

use crate::input::read_token;
use crate::keyfile::load_public_key;
use crate::output::{format_json, signature_summary};

/// Verifies a token against the public key file and prints its payload.
pub fn run(
    token: Option<String>,
    public_key: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = load_public_key(&public_key)?;
    let signature = Signature::parse(&read_token(token)?)?;

    let payload: Value = signature.verify_payload(&key)?;
    tracing::info!(kid = signature.key_id(), "signature verified");

    if json_output {
        println!("{}", format_json(&signature_summary(&signature, payload, true)));
    } else {
        println!("{}", format_json(&payload));
    }
    Ok(())
}
