use std::fmt;

use p256::ecdsa::signature;
use serde::{Serialize, Serializer};

use crate::keys::{SigningMaterial, VerifyingMaterial};

/// Signature algorithms accepted in the `alg` header.
///
/// Every variant has an entry in the scheme table. A token naming any other
/// algorithm never parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// ECDSA over NIST P-256 with SHA-256, signatures as 64-byte `r || s`.
    Es256,
}

type SignFn = fn(SigningMaterial<'_>, &[u8]) -> Result<Vec<u8>, signature::Error>;
type VerifyFn = fn(VerifyingMaterial<'_>, &[u8], &[u8]) -> Result<(), signature::Error>;

/// One allow-listed algorithm with its sign and verify operations.
pub(crate) struct Scheme {
    pub(crate) algorithm: Algorithm,
    pub(crate) sign: SignFn,
    pub(crate) verify: VerifyFn,
}

static ES256: Scheme = Scheme {
    algorithm: Algorithm::Es256,
    sign: es256::sign,
    verify: es256::verify,
};

static ALLOW_LIST: [&Scheme; 1] = [&ES256];

impl Algorithm {
    /// Name used in the `alg` header.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Es256 => "ES256",
        }
    }

    /// Looks up an allow-listed algorithm by header name.
    ///
    /// Matching is case-sensitive; `"none"` and every other unknown name
    /// return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        ALLOW_LIST
            .iter()
            .map(|scheme| scheme.algorithm)
            .find(|algorithm| algorithm.name() == name)
    }

    /// Every algorithm on the allow-list.
    pub fn allowed() -> impl Iterator<Item = Algorithm> {
        ALLOW_LIST.iter().map(|scheme| scheme.algorithm)
    }

    pub(crate) fn scheme(self) -> &'static Scheme {
        match self {
            Algorithm::Es256 => &ES256,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

mod es256 {
    use p256::ecdsa::signature::{self, Signer, Verifier};
    use p256::ecdsa::Signature;

    use crate::keys::{SigningMaterial, VerifyingMaterial};

    pub(super) fn sign(key: SigningMaterial<'_>, message: &[u8]) -> Result<Vec<u8>, signature::Error> {
        let SigningMaterial::P256(key) = key;
        let signature: Signature = key.try_sign(message)?;
        Ok(signature.to_bytes().to_vec())
    }

    pub(super) fn verify(
        key: VerifyingMaterial<'_>,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), signature::Error> {
        let VerifyingMaterial::P256(key) = key;
        let signature = Signature::from_slice(signature)?;
        key.verify(message, &signature)
    }
}
