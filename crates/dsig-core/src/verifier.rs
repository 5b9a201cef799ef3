use serde::de::DeserializeOwned;

use crate::errors::DsigError;
use crate::keys::PublicKey;
use crate::signature::Signature;

impl Signature {
    /// Checks the signature against `key` and returns the signed payload bytes.
    ///
    /// Every failure is reported as [`DsigError::KeyMismatch`], whatever the
    /// underlying cause.
    pub fn verify<K: PublicKey + ?Sized>(&self, key: &K) -> Result<&[u8], DsigError> {
        let input = self.signing_input();
        let scheme = self.header.alg.scheme();
        if (scheme.verify)(key.verifying_material(), input.as_bytes(), &self.signature).is_err() {
            tracing::debug!(
                alg = self.header.alg.name(),
                kid = self.key_id(),
                "signature did not verify"
            );
            return Err(DsigError::KeyMismatch);
        }
        Ok(&self.payload)
    }

    /// Verifies with `key`, then decodes the payload as `T`.
    ///
    /// # Errors
    ///
    /// [`DsigError::KeyMismatch`] if verification fails,
    /// [`DsigError::PayloadDecode`] if the verified payload is not a `T`.
    pub fn verify_payload<T, K>(&self, key: &K) -> Result<T, DsigError>
    where
        T: DeserializeOwned,
        K: PublicKey + ?Sized,
    {
        let data = self.verify(key)?;
        serde_json::from_slice(data).map_err(DsigError::PayloadDecode)
    }

    /// Payload bytes **without any signature check**.
    ///
    /// Only for diagnostics, or for data whose signing key is unavailable or
    /// was checked elsewhere.
    pub fn unverified_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// Decodes the payload as `T` **without any signature check**.
    ///
    /// Only for diagnostics, or for data whose signing key is unavailable or
    /// was checked elsewhere. Fails only with [`DsigError::PayloadDecode`].
    pub fn unverified_payload<T: DeserializeOwned>(&self) -> Result<T, DsigError> {
        serde_json::from_slice(&self.payload).map_err(DsigError::PayloadDecode)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ErrorKind;
    use crate::keys::EcPrivateKey;
    use crate::signer::{sign, SignerOptions};
    use dsig_canonical::KeyId;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i64,
    }

    fn key(scalar: u8) -> EcPrivateKey {
        EcPrivateKey::from_bytes(KeyId::parse("K1").unwrap(), &[scalar; 32]).unwrap()
    }

    #[test]
    fn verify_returns_payload_bytes() {
        let signer = key(5);
        let sig = sign(&signer, &json!({"x": 1}), &SignerOptions::new()).unwrap();
        assert_eq!(sig.verify(&signer.public_key()).unwrap(), br#"{"x":1}"#);
        assert_eq!(sig.verify_payload::<Point, _>(&signer.public_key()).unwrap(), Point { x: 1 });
    }

    #[test]
    fn wrong_key_is_a_mismatch() {
        let sig = sign(&key(5), &json!({"x": 1}), &SignerOptions::new()).unwrap();
        let err = sig.verify(&key(6).public_key()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMismatch);
        let err = sig.verify_payload::<Point, _>(&key(6).public_key()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyMismatch);
    }

    #[test]
    fn decode_failure_is_distinct_from_mismatch() {
        let signer = key(5);
        let sig = sign(&signer, &json!({"y": "text"}), &SignerOptions::new()).unwrap();
        let err = sig.verify_payload::<Point, _>(&signer.public_key()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PayloadDecodeFailure);
    }

    #[test]
    fn unverified_payload_ignores_signature() {
        let sig = sign(&key(5), &json!({"x": 3}), &SignerOptions::new()).unwrap();
        let mut corrupted = sig.clone();
        corrupted.signature = vec![0xff; 64];

        assert_eq!(corrupted.unverified_payload::<Point>().unwrap(), Point { x: 3 });
        assert_eq!(corrupted.unverified_bytes(), br#"{"x":3}"#);
        assert_eq!(
            corrupted.verify(&key(5).public_key()).unwrap_err().kind(),
            ErrorKind::KeyMismatch
        );
    }

    #[test]
    fn unverified_payload_reports_decode_errors_only() {
        let sig = sign(&key(5), &json!([1, 2]), &SignerOptions::new()).unwrap();
        let err = sig.unverified_payload::<Point>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PayloadDecodeFailure);
    }
}
