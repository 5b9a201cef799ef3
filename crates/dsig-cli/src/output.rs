//! Output formatting utilities.

use dsig_core::Signature;
use serde_json::{json, Value};

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Header fields and payload of a signature as one JSON object.
pub fn signature_summary(signature: &Signature, payload: Value, verified: bool) -> Value {
    json!({
        "alg": signature.algorithm().name(),
        "kid": signature.key_id(),
        "jku": signature.jku(),
        "verified": verified,
        "payload": payload,
    })
}

/// Prints the header fields as an aligned table.
#[allow(clippy::print_literal)]
pub fn print_header_table(signature: &Signature) {
    println!("{:<8} {}", "ALG", signature.algorithm());
    println!("{:<8} {}", "KID", or_dash(signature.key_id()));
    println!("{:<8} {}", "JKU", or_dash(signature.jku()));
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
