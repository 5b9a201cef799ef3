//! Canonical byte-level primitives for dsig envelopes.
//!
//! Everything that ends up inside a signed envelope passes through this crate:
//! payloads are reduced to RFC 8785 canonical JSON, envelope segments are
//! encoded as base64url without padding, and key identifiers are validated
//! against a fixed pattern.
//!
#![deny(missing_docs)]

/// Canonical JSON encoding for payloads.
pub mod canonicalizer;
/// Base64url segment encoding.
pub mod encoding;
mod finite;
/// Key identifier newtype.
pub mod identifiers;
/// Validation errors for canonical primitives.
pub mod validation;

pub use canonicalizer::{canonicalize, to_canonical_vec, CanonicalizationError};
pub use encoding::{decode_segment, encode_segment, EncodingError};
pub use identifiers::KeyId;
pub use validation::ValidationError;
