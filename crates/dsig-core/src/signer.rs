use dsig_canonical::to_canonical_vec;
use serde::Serialize;

use crate::codec::signing_input;
use crate::errors::DsigError;
use crate::header::Header;
use crate::keys::PrivateKey;
use crate::signature::Signature;

/// Optional header values for [`sign`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignerOptions {
    jku: Option<String>,
}

impl SignerOptions {
    /// Options with no optional headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `jku` header pointing at where the public key can be looked up.
    ///
    /// An empty URL leaves the header out.
    pub fn with_jku(mut self, jku: impl Into<String>) -> Self {
        let jku = jku.into();
        self.jku = (!jku.is_empty()).then_some(jku);
        self
    }

    /// The configured `jku`, if any.
    pub fn jku(&self) -> Option<&str> {
        self.jku.as_deref()
    }
}

/// Signs `payload` with `key`.
///
/// The key is validated first and nothing is signed if that fails. The
/// algorithm comes from the key, the `kid` header is the key's ID and the
/// payload is stored as canonical JSON.
///
/// # Errors
///
/// - [`DsigError::KeyInvalid`] if `key.validate()` fails
/// - [`DsigError::UnsupportedKey`] if the key has no supported algorithm
/// - [`DsigError::PayloadEncode`] if the payload cannot be serialized
/// - [`DsigError::Signing`] if the signing operation fails
pub fn sign<K, T>(key: &K, payload: &T, options: &SignerOptions) -> Result<Signature, DsigError>
where
    K: PrivateKey + ?Sized,
    T: Serialize + ?Sized,
{
    key.validate().map_err(DsigError::KeyInvalid)?;
    let alg = key
        .signature_algorithm()
        .map_err(DsigError::UnsupportedKey)?;

    let kid = key.id();
    let header = Header {
        alg,
        kid: (!kid.is_empty()).then(|| kid.to_string()),
        jku: options.jku.clone(),
    };
    let protected = header
        .to_json()
        .map_err(|e| DsigError::Signing(format!("header encoding failed: {e}")))?;

    let payload = to_canonical_vec(payload)?;

    let input = signing_input(&protected, &payload);
    let signature = (alg.scheme().sign)(key.signing_material(), input.as_bytes())
        .map_err(|e| DsigError::Signing(e.to_string()))?;

    tracing::debug!(alg = alg.name(), kid, "signed payload");
    Ok(Signature::from_parts(header, protected, payload, signature))
}
