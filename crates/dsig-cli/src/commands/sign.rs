//! Sign command implementation.

use dsig_core::SignerOptions;
use serde_json::Value;

use crate::input::read_file_or_stdin;
use crate::keyfile::load_private_key;

/// Signs the input JSON with the key file and prints the compact token.
pub fn run(
    input: Option<String>,
    key: String,
    kid: String,
    jku: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = load_private_key(&key, kid)?;

    let json_str = read_file_or_stdin(input)?;
    let payload: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;

    let mut options = SignerOptions::new();
    if let Some(jku) = jku {
        options = options.with_jku(jku);
    }

    let signature = dsig_core::sign(&key, &payload, &options)?;
    println!("{}", signature);
    Ok(())
}
