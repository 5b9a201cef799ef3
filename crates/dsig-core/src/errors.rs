use thiserror::Error;

use crate::keys::KeyError;

/// Errors returned by signing, parsing and verification.
///
/// Nothing is retried internally; every variant is returned to the caller,
/// who decides whether to reject the document or request a new signature.
#[derive(Error, Debug)]
pub enum DsigError {
    /// The private key failed structural validation; nothing was signed.
    #[error("private key is invalid: {0}")]
    KeyInvalid(#[source] KeyError),
    /// The key's algorithm does not map to a supported signing scheme.
    #[error("unsupported key: {0}")]
    UnsupportedKey(#[source] KeyError),
    /// The payload could not be serialized to canonical JSON.
    #[error("payload encoding failed: {0}")]
    PayloadEncode(#[from] dsig_canonical::CanonicalizationError),
    /// The cryptographic signing operation failed.
    #[error("signing failed: {0}")]
    Signing(String),
    /// The compact token is structurally malformed.
    #[error("invalid signature: {0}")]
    Parse(String),
    /// The token declares an algorithm outside the allow-list.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// The signature does not verify against the supplied public key.
    ///
    /// Wrong keys, tampered segments and malformed signature bytes all end up
    /// here without further detail.
    #[error("signature does not match key")]
    KeyMismatch,
    /// The payload is not valid JSON for the requested type.
    #[error("payload decoding failed: {0}")]
    PayloadDecode(#[source] serde_json::Error),
}

/// Discriminant of a [`DsigError`], convenient for matching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`DsigError::KeyInvalid`].
    KeyInvalid,
    /// See [`DsigError::UnsupportedKey`].
    UnsupportedKey,
    /// See [`DsigError::PayloadEncode`].
    PayloadEncodeFailure,
    /// See [`DsigError::Signing`].
    SigningFailure,
    /// See [`DsigError::Parse`].
    ParseFailure,
    /// See [`DsigError::UnsupportedAlgorithm`].
    UnsupportedAlgorithm,
    /// See [`DsigError::KeyMismatch`].
    KeyMismatch,
    /// See [`DsigError::PayloadDecode`].
    PayloadDecodeFailure,
}

impl DsigError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DsigError::KeyInvalid(_) => ErrorKind::KeyInvalid,
            DsigError::UnsupportedKey(_) => ErrorKind::UnsupportedKey,
            DsigError::PayloadEncode(_) => ErrorKind::PayloadEncodeFailure,
            DsigError::Signing(_) => ErrorKind::SigningFailure,
            DsigError::Parse(_) => ErrorKind::ParseFailure,
            DsigError::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            DsigError::KeyMismatch => ErrorKind::KeyMismatch,
            DsigError::PayloadDecode(_) => ErrorKind::PayloadDecodeFailure,
        }
    }
}
