use crate::algorithm::Algorithm;
use crate::header::Header;

/// A signed envelope: protected header, payload and signature bytes.
///
/// Values only come from [`sign`](crate::sign) or from parsing a compact
/// token, and are never modified afterwards. Parsing does not verify; call
/// [`Signature::verify`] or [`Signature::verify_payload`] before trusting the
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub(crate) header: Header,
    /// Header bytes exactly as signed, so re-encoding reproduces the token.
    pub(crate) protected: Vec<u8>,
    pub(crate) payload: Vec<u8>,
    pub(crate) signature: Vec<u8>,
}

impl Signature {
    pub(crate) fn from_parts(
        header: Header,
        protected: Vec<u8>,
        payload: Vec<u8>,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            header,
            protected,
            payload,
            signature,
        }
    }

    /// ID of the key that produced this signature, or `""` when the header has none.
    pub fn key_id(&self) -> &str {
        self.header.kid.as_deref().unwrap_or_default()
    }

    /// Key lookup URL from the `jku` header, or `""` when absent.
    pub fn jku(&self) -> &str {
        self.header.jku.as_deref().unwrap_or_default()
    }

    /// Algorithm named in the header.
    pub fn algorithm(&self) -> Algorithm {
        self.header.alg
    }

    /// Decoded protected header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Raw protected header bytes.
    pub fn protected_header(&self) -> &[u8] {
        &self.protected
    }

    /// Raw signature bytes.
    pub fn signature_bytes(&self) -> &[u8] {
        &self.signature
    }
}
