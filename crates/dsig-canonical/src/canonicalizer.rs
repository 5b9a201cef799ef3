use canonical_json::to_string;
use serde::Serialize;
use serde_json::Value;

use crate::finite::{FiniteCheck, FiniteCheckError};

/// Error returned when a payload cannot be reduced to canonical bytes.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The value could not be represented as JSON at all.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The JSON value was rejected by the RFC 8785 encoder.
    #[error("canonical encoding failed: {0}")]
    Encoding(String),
    /// A float was NaN or infinite; JSON has no representation for it.
    #[error("non-finite number: {0}")]
    NonFiniteNumber(String),
}

/// Produces RFC 8785 canonical bytes for an already-parsed JSON value.
///
/// Object members are sorted by key and insignificant whitespace is removed,
/// so two values that compare equal always canonicalize to the same bytes.
pub fn canonicalize(value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
    let canonical =
        to_string(value).map_err(|err| CanonicalizationError::Encoding(err.to_string()))?;
    Ok(canonical.into_bytes())
}

/// Serializes any value to JSON and returns its canonical bytes.
///
/// Fails if the value's `Serialize` implementation errors or produces
/// something JSON cannot hold (for example a map with non-string keys, or a
/// NaN or infinite float).
pub fn to_canonical_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CanonicalizationError> {
    // Custom errors are left for `to_value` to report.
    if let Err(FiniteCheckError::NonFinite(number)) = value.serialize(FiniteCheck) {
        return Err(CanonicalizationError::NonFiniteNumber(number));
    }
    let value = serde_json::to_value(value)?;
    canonicalize(&value)
}
