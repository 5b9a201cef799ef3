//! Base64url (no padding) encoding of envelope segments.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Error returned when a segment is not strict unpadded base64url.
#[derive(thiserror::Error, Debug)]
#[error("invalid base64url segment: {0}")]
pub struct EncodingError(#[from] base64::DecodeError);

/// Encodes bytes as base64url without padding.
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes an unpadded base64url segment.
///
/// Padding characters, the standard alphabet's `+` and `/`, and non-zero
/// trailing bits are all rejected, so every accepted segment re-encodes to
/// exactly the same text.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(URL_SAFE_NO_PAD.decode(segment)?)
}
