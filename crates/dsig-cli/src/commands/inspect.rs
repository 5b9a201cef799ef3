//! Inspect command implementation.

use dsig_core::Signature;
use serde_json::Value;

use crate::input::read_token;
use crate::output::{format_json, print_header_table, signature_summary};

/// Prints the header and unverified payload of a token.
pub fn run(token: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let signature = Signature::parse(&read_token(token)?)?;

    // Decoding may fail for payloads that are not JSON; show the raw text instead.
    let payload = signature
        .unverified_payload::<Value>()
        .unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(signature.unverified_bytes()).into_owned())
        });

    if json_output {
        println!("{}", format_json(&signature_summary(&signature, payload, false)));
    } else {
        print_header_table(&signature);
        println!("PAYLOAD (unverified)");
        println!("{}", format_json(&payload));
    }
    Ok(())
}
