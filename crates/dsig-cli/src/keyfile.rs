//! Key files: a single base64url line holding raw key bytes.

use dsig_canonical::{decode_segment, EncodingError, KeyId};
use dsig_core::{EcPrivateKey, EcPublicKey, KeyError};
use thiserror::Error;

/// Errors while loading a key file.
#[derive(Error, Debug)]
pub enum KeyFileError {
    /// The file could not be read.
    #[error("failed to read key file {path}: {source}")]
    Read {
        /// Path of the key file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not base64url.
    #[error("key file {path} is not base64url: {source}")]
    Encoding {
        /// Path of the key file.
        path: String,
        /// Underlying decoding error.
        source: EncodingError,
    },
    /// The bytes are not a key.
    #[error("key file {path} does not hold a P-256 key: {source}")]
    Key {
        /// Path of the key file.
        path: String,
        /// Underlying key error.
        source: KeyError,
    },
}

fn read_bytes(path: &str) -> Result<Vec<u8>, KeyFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| KeyFileError::Read {
        path: path.to_string(),
        source,
    })?;
    decode_segment(text.trim()).map_err(|source| KeyFileError::Encoding {
        path: path.to_string(),
        source,
    })
}

/// Loads a private key; the key ID is checked when signing, not here.
pub fn load_private_key(path: &str, kid: String) -> Result<EcPrivateKey, KeyFileError> {
    let bytes = read_bytes(path)?;
    EcPrivateKey::from_bytes(KeyId::new(kid), &bytes).map_err(|source| KeyFileError::Key {
        path: path.to_string(),
        source,
    })
}

/// Loads a SEC1 encoded public key.
pub fn load_public_key(path: &str) -> Result<EcPublicKey, KeyFileError> {
    let bytes = read_bytes(path)?;
    EcPublicKey::from_sec1_bytes(&bytes).map_err(|source| KeyFileError::Key {
        path: path.to_string(),
        source,
    })
}
