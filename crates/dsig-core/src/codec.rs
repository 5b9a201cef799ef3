//! Compact and JSON encodings of a [`Signature`].
//!
//! The compact form is `b64url(header) "." b64url(payload) "." b64url(signature)`.
//! The JSON form is a JSON string holding the compact form, with `""` standing
//! for "no signature yet".

use std::fmt;
use std::str::FromStr;

use dsig_canonical::{decode_segment, encode_segment};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::DsigError;
use crate::header::Header;
use crate::signature::Signature;

/// Bytes covered by the signature: `b64url(protected) "." b64url(payload)`.
pub(crate) fn signing_input(protected: &[u8], payload: &[u8]) -> String {
    format!("{}.{}", encode_segment(protected), encode_segment(payload))
}

impl Signature {
    /// Parses a compact token.
    ///
    /// The header is decoded and checked against the algorithm allow-list
    /// before the payload and signature segments are looked at. No
    /// cryptographic check happens here.
    pub fn parse(compact: &str) -> Result<Self, DsigError> {
        let mut segments = compact.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(DsigError::Parse(
                "expected three dot-separated segments".to_string(),
            ));
        };

        let protected =
            decode_segment(header).map_err(|e| DsigError::Parse(format!("header: {e}")))?;
        let header = Header::from_json(&protected)?;
        let payload =
            decode_segment(payload).map_err(|e| DsigError::Parse(format!("payload: {e}")))?;
        let signature =
            decode_segment(signature).map_err(|e| DsigError::Parse(format!("signature: {e}")))?;

        tracing::debug!(
            alg = header.alg.name(),
            kid = header.kid.as_deref().unwrap_or_default(),
            "parsed signature"
        );
        Ok(Signature::from_parts(header, protected, payload, signature))
    }

    pub(crate) fn signing_input(&self) -> String {
        signing_input(&self.protected, &self.payload)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            encode_segment(&self.protected),
            encode_segment(&self.payload),
            encode_segment(&self.signature)
        )
    }
}

impl FromStr for Signature {
    type Err = DsigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::parse(s)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let compact = String::deserialize(deserializer)?;
        Signature::parse(&compact).map_err(de::Error::custom)
    }
}

/// Compact form of an optional signature; `""` when there is none.
pub fn serialize(signature: Option<&Signature>) -> String {
    signature.map(Signature::to_string).unwrap_or_default()
}

/// JSON string form of an optional signature.
pub fn to_json(signature: Option<&Signature>) -> String {
    serde_json::Value::String(serialize(signature)).to_string()
}

/// Decodes the JSON string form. An empty string yields `None`.
pub fn from_json(data: &[u8]) -> Result<Option<Signature>, DsigError> {
    let compact: String = serde_json::from_slice(data)
        .map_err(|e| DsigError::Parse(format!("expected a JSON string: {e}")))?;
    if compact.is_empty() {
        return Ok(None);
    }
    Signature::parse(&compact).map(Some)
}

/// Serde adapter for `Option<Signature>` fields that use `""` for "unsigned".
///
/// ```rust
/// use dsig_core::Signature;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Envelope {
///     #[serde(with = "dsig_core::codec::optional", default)]
///     sig: Option<Signature>,
/// }
///
/// let unsigned: Envelope = serde_json::from_str(r#"{"sig":""}"#)?;
/// assert!(unsigned.sig.is_none());
/// assert_eq!(serde_json::to_string(&unsigned)?, r#"{"sig":""}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub mod optional {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    use crate::signature::Signature;

    /// Writes the compact form, or `""` for `None`.
    pub fn serialize<S: Serializer>(
        signature: &Option<Signature>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::serialize(signature.as_ref()))
    }

    /// Reads the compact form; `""` becomes `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Signature>, D::Error> {
        let compact = String::deserialize(deserializer)?;
        if compact.is_empty() {
            return Ok(None);
        }
        Signature::parse(&compact).map(Some).map_err(de::Error::custom)
    }
}
