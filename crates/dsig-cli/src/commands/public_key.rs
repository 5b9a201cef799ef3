//! Public-key command implementation.

use dsig_canonical::encode_segment;

use crate::keyfile::load_private_key;

/// Prints the base64url SEC1 public key for a private key file.
pub fn run(key: String, uncompressed: bool) -> Result<(), Box<dyn std::error::Error>> {
    // The key ID plays no part in deriving the public key.
    let key = load_private_key(&key, String::new())?;
    let sec1 = key.public_key().to_sec1_bytes(!uncompressed);
    println!("{}", encode_segment(&sec1));
    Ok(())
}
