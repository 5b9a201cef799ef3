use serde::Serialize;
use serde_json::{Map, Value};

use crate::algorithm::Algorithm;
use crate::errors::DsigError;

/// Protected header bound into the signed material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Signature algorithm, always on the allow-list.
    pub alg: Algorithm,
    /// ID of the key that produced the signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// URL where the public key may be looked up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jku: Option<String>,
}

impl Header {
    /// Decodes a protected header and applies the algorithm allow-list.
    ///
    /// A missing, non-string or unknown `alg` is an unsupported algorithm.
    /// A `crit` member, or a `kid` that is neither a string nor null, is
    /// malformed. A `jku` that is not a string is dropped.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DsigError> {
        let fields: Map<String, Value> = serde_json::from_slice(bytes)
            .map_err(|e| DsigError::Parse(format!("header is not a JSON object: {e}")))?;

        let alg = match fields.get("alg") {
            Some(Value::String(name)) => Algorithm::from_name(name)
                .ok_or_else(|| DsigError::UnsupportedAlgorithm(name.clone()))?,
            Some(other) => return Err(DsigError::UnsupportedAlgorithm(other.to_string())),
            None => return Err(DsigError::UnsupportedAlgorithm("none".to_string())),
        };

        // No header extensions are understood, so none can be critical.
        if fields.contains_key("crit") {
            return Err(DsigError::Parse(
                "critical header extensions are not supported".to_string(),
            ));
        }

        let kid = match fields.get("kid") {
            None | Some(Value::Null) => None,
            Some(Value::String(kid)) => Some(kid.clone()),
            Some(_) => return Err(DsigError::Parse("kid header must be a string".to_string())),
        };

        let jku = match fields.get("jku") {
            Some(Value::String(jku)) => Some(jku.clone()),
            _ => None,
        };

        Ok(Header { alg, kid, jku })
    }

    /// Encodes the header as compact JSON with fields in `alg`, `kid`, `jku` order.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
