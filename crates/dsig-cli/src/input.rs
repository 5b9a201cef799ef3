//! Reading command input from a file, an argument or stdin.

use std::io::{self, Read};

/// Reads the whole input file, or stdin when no path is given.
pub fn read_file_or_stdin(path: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Returns the token argument, or the token read from stdin, without surrounding whitespace.
pub fn read_token(token: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let token = match token {
        Some(token) => token,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(token.trim().to_string())
}
