//! Key adapter contract.
//!
//! Key generation, storage and rotation live outside this crate. Signing and
//! verification only need what the [`PrivateKey`] and [`PublicKey`] traits
//! expose; [`EcPrivateKey`] and [`EcPublicKey`] are the adapter for raw
//! P-256 keys.

use std::fmt;

use dsig_canonical::{KeyId, ValidationError};
use p256::ecdsa::{SigningKey, VerifyingKey};
use thiserror::Error;

use crate::algorithm::Algorithm;

/// Errors reported by key adapters.
#[derive(Error, Debug)]
pub enum KeyError {
    /// The key identifier is not well formed.
    #[error("invalid key id: {0}")]
    InvalidId(#[from] ValidationError),
    /// The key bytes do not describe a usable key.
    #[error("invalid key material")]
    InvalidMaterial,
    /// The key has no algorithm on the allow-list.
    #[error("key has no supported signature algorithm")]
    NoSupportedAlgorithm,
}

/// Borrowed private key material handed to a signing scheme.
#[derive(Clone, Copy)]
pub enum SigningMaterial<'a> {
    /// NIST P-256 ECDSA key.
    P256(&'a SigningKey),
}

/// Borrowed public key material handed to a verification scheme.
#[derive(Clone, Copy)]
pub enum VerifyingMaterial<'a> {
    /// NIST P-256 ECDSA key.
    P256(&'a VerifyingKey),
}

/// A key that can produce signatures.
///
/// Implementations must be safe to read from several threads at once.
pub trait PrivateKey {
    /// Structural validation, run before any signing is attempted.
    fn validate(&self) -> Result<(), KeyError>;
    /// Algorithm this key signs with.
    fn signature_algorithm(&self) -> Result<Algorithm, KeyError>;
    /// Identifier written to the `kid` header.
    fn id(&self) -> &str;
    /// Material used by the signing scheme.
    fn signing_material(&self) -> SigningMaterial<'_>;
}

/// A key that can check signatures.
pub trait PublicKey {
    /// Material used by the verification scheme.
    fn verifying_material(&self) -> VerifyingMaterial<'_>;
}

/// P-256 private key with its identifier.
#[derive(Clone)]
pub struct EcPrivateKey {
    id: KeyId,
    key: SigningKey,
}

impl EcPrivateKey {
    /// Wraps an existing signing key.
    pub fn new(id: KeyId, key: SigningKey) -> Self {
        Self { id, key }
    }

    /// Builds a key from a 32-byte big-endian scalar.
    pub fn from_bytes(id: KeyId, scalar: &[u8]) -> Result<Self, KeyError> {
        let key = SigningKey::from_slice(scalar).map_err(|_| KeyError::InvalidMaterial)?;
        Ok(Self { id, key })
    }

    /// Identifier of this key.
    pub fn key_id(&self) -> &KeyId {
        &self.id
    }

    /// Public half of this key.
    pub fn public_key(&self) -> EcPublicKey {
        EcPublicKey {
            key: VerifyingKey::from(&self.key),
        }
    }
}

impl fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivateKey")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl PrivateKey for EcPrivateKey {
    fn validate(&self) -> Result<(), KeyError> {
        self.id.validate()?;
        Ok(())
    }

    fn signature_algorithm(&self) -> Result<Algorithm, KeyError> {
        Ok(Algorithm::Es256)
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn signing_material(&self) -> SigningMaterial<'_> {
        SigningMaterial::P256(&self.key)
    }
}

/// P-256 public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPublicKey {
    key: VerifyingKey,
}

impl EcPublicKey {
    /// Parses a SEC1 encoded point, compressed or uncompressed.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(|key| Self { key })
            .map_err(|_| KeyError::InvalidMaterial)
    }

    /// SEC1 encoding of this key.
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        self.key.to_encoded_point(compress).as_bytes().to_vec()
    }
}

impl From<VerifyingKey> for EcPublicKey {
    fn from(key: VerifyingKey) -> Self {
        Self { key }
    }
}

impl PublicKey for EcPublicKey {
    fn verifying_material(&self) -> VerifyingMaterial<'_> {
        VerifyingMaterial::P256(&self.key)
    }
}
