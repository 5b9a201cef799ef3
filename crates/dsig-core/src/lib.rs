//! Signed JSON envelopes for documents that need a trust anchor.
//!
//! This crate provides:
//! - A narrow key adapter contract ([`PrivateKey`], [`PublicKey`]) with a
//!   P-256 implementation
//! - A fixed algorithm allow-list (currently `ES256` only)
//! - Signing of any serializable payload into a [`Signature`]
//! - The compact `header.payload.signature` codec and its JSON string form
//! - Verification that collapses every failure into [`DsigError::KeyMismatch`]
//!
//! Core invariants:
//! - A [`Signature`] is always fully populated; "no signature" is `None`
//! - An algorithm outside the allow-list is rejected at parse time
//! - The `kid` header of a fresh signature is the signing key's ID
//! - Payload bytes are the canonical JSON of the signed value
//!
//! ## Quick Start
//!
//! ```rust
//! use dsig_canonical::KeyId;
//! use dsig_core::{sign, EcPrivateKey, Signature, SignerOptions};
//! use serde_json::{json, Value};
//!
//! let key = EcPrivateKey::from_bytes(KeyId::parse("K1")?, &[7u8; 32])?;
//! let signature = sign(&key, &json!({"x": 1}), &SignerOptions::default())?;
//! let token = signature.to_string();
//!
//! let parsed: Signature = token.parse()?;
//! let payload: Value = parsed.verify_payload(&key.public_key())?;
//! assert_eq!(payload, json!({"x": 1}));
//! assert_eq!(parsed.key_id(), "K1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// Signature algorithms and the allow-list.
pub mod algorithm;
/// Compact and JSON envelope encodings.
pub mod codec;
/// Error types for envelope operations.
pub mod errors;
/// Protected header fields.
pub mod header;
/// Key adapter contract and the P-256 adapter.
pub mod keys;
/// The signature aggregate and its accessors.
pub mod signature;
/// Signing of payloads.
pub mod signer;
/// Verification and payload extraction.
pub mod verifier;

pub use algorithm::Algorithm;
pub use codec::{from_json, serialize, to_json};
pub use errors::{DsigError, ErrorKind};
pub use header::Header;
pub use keys::{
    EcPrivateKey, EcPublicKey, KeyError, PrivateKey, PublicKey, SigningMaterial,
    VerifyingMaterial,
};
pub use signature::Signature;
pub use signer::{sign, SignerOptions};
