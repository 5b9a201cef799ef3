//! Canonicalize command implementation.

use serde_json::Value;

use crate::input::read_file_or_stdin;

/// Prints the canonical JSON bytes of the input.
pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = read_file_or_stdin(input)?;

    let value: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;

    let bytes = dsig_canonical::canonicalize(&value)
        .map_err(|e| format!("Canonicalization failed: {}", e))?;

    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
