use dsig_canonical::{decode_segment, encode_segment, KeyId};
use dsig_core::{
    from_json, serialize, sign, to_json, EcPrivateKey, EcPublicKey, ErrorKind, Signature,
    SignerOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

fn make_key(id: &str, scalar: u8) -> EcPrivateKey {
    EcPrivateKey::from_bytes(KeyId::parse(id).unwrap(), &[scalar; 32]).unwrap()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Invoice {
    code: String,
    currency: String,
    lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Line {
    item: String,
    quantity: String,
    price: String,
}

fn make_invoice() -> Invoice {
    Invoice {
        code: "INV-0001".to_string(),
        currency: "EUR".to_string(),
        lines: vec![
            Line {
                item: "Development services".to_string(),
                quantity: "20".to_string(),
                price: "90.00".to_string(),
            },
            Line {
                item: "Hosting".to_string(),
                quantity: "1".to_string(),
                price: "15.50".to_string(),
            },
        ],
    }
}

/// Rebuilds a compact token after flipping one bit in one decoded segment.
fn flip_bit(token: &str, segment: usize, index: usize) -> Option<String> {
    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    let mut bytes = decode_segment(&segments[segment]).unwrap();
    if index >= bytes.len() {
        return None;
    }
    bytes[index] ^= 1 << (index % 8);
    segments[segment] = encode_segment(&bytes);
    Some(segments.join("."))
}

#[test]
fn sign_serialize_parse_verify_round_trip() {
    let key = make_key("K1", 21);
    let invoice = make_invoice();

    let signature = sign(&key, &invoice, &SignerOptions::new()).unwrap();
    let token = signature.to_string();
    let parsed = Signature::parse(&token).unwrap();

    assert_eq!(parsed, signature);
    assert_eq!(parsed.to_string(), token);

    let bytes = parsed.verify(&key.public_key()).unwrap();
    assert_eq!(bytes, dsig_canonical::to_canonical_vec(&invoice).unwrap());

    let decoded: Invoice = parsed.verify_payload(&key.public_key()).unwrap();
    assert_eq!(decoded, invoice);
}

#[test]
fn concrete_scenario_x_equals_one() {
    let key = make_key("K1", 21);
    let token = sign(&key, &json!({"x": 1}), &SignerOptions::new())
        .unwrap()
        .to_string();

    let parsed: Signature = token.parse().unwrap();
    let bytes = parsed.verify(&key.public_key()).unwrap();
    let value: Value = serde_json::from_slice(bytes).unwrap();
    assert_eq!(value, json!({"x": 1}));
    assert_eq!(parsed.key_id(), "K1");
}

#[test]
fn not_a_valid_token_fails_to_parse() {
    let err = Signature::parse("not-a-valid-token").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn invalid_key_produces_no_signature() {
    let key = EcPrivateKey::from_bytes(KeyId::new(String::new()), &[21; 32]).unwrap();
    let err = sign(&key, &json!({"x": 1}), &SignerOptions::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyInvalid);
}

#[test]
fn key_id_matches_signing_key() {
    for (id, scalar) in [("K1", 1u8), ("a3b1c2d4-0000-4000-8000-000000000001", 2), ("urn:key:7", 3)] {
        let key = make_key(id, scalar);
        let signature = sign(&key, &json!({"n": scalar}), &SignerOptions::new()).unwrap();
        assert_eq!(signature.key_id(), id);
        assert_eq!(Signature::parse(&signature.to_string()).unwrap().key_id(), id);
    }
}

#[test]
fn jku_survives_round_trip() {
    let key = make_key("K1", 21);
    let options = SignerOptions::new().with_jku("https://keys.example.com/.well-known/jwks.json");
    let token = sign(&key, &json!({}), &options).unwrap().to_string();

    let parsed = Signature::parse(&token).unwrap();
    assert_eq!(parsed.jku(), "https://keys.example.com/.well-known/jwks.json");
    assert!(parsed.verify(&key.public_key()).is_ok());
}

#[test]
fn any_single_bit_flip_is_detected() {
    let key = make_key("K1", 21);
    let public = key.public_key();
    let token = sign(&key, &json!({"x": 1, "note": "tamper"}), &SignerOptions::new())
        .unwrap()
        .to_string();

    for segment in 0..3 {
        let mut index = 0;
        while let Some(tampered) = flip_bit(&token, segment, index) {
            match Signature::parse(&tampered) {
                Ok(parsed) => assert_eq!(
                    parsed.verify(&public).unwrap_err().kind(),
                    ErrorKind::KeyMismatch,
                    "segment {segment} byte {index}"
                ),
                Err(err) => assert!(
                    matches!(
                        err.kind(),
                        ErrorKind::ParseFailure | ErrorKind::UnsupportedAlgorithm
                    ),
                    "segment {segment} byte {index}: {err}"
                ),
            }
            index += 1;
        }
        assert!(index > 0);
    }
}

#[test]
fn wrong_public_key_is_a_mismatch() {
    let token = sign(&make_key("K1", 21), &json!({"x": 1}), &SignerOptions::new())
        .unwrap()
        .to_string();
    let other: EcPublicKey = make_key("K2", 22).public_key();

    let parsed = Signature::parse(&token).unwrap();
    assert_eq!(parsed.verify(&other).unwrap_err().kind(), ErrorKind::KeyMismatch);
}

#[test]
fn disallowed_algorithms_never_parse() {
    let payload = encode_segment(br#"{"x":1}"#);
    for header in [
        r#"{"alg":"none"}"#,
        r#"{"alg":"none","kid":"K1"}"#,
        r#"{"alg":"HS256","kid":"K1"}"#,
        r#"{"alg":"ES384"}"#,
        r#"{"alg":"EdDSA"}"#,
        r#"{"kid":"K1"}"#,
    ] {
        let token = format!("{}.{}.", encode_segment(header.as_bytes()), payload);
        let err = Signature::parse(&token).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedAlgorithm, "{header}");
    }
}

/// Signs an arbitrary protected header with the raw P-256 key behind `make_key(_, scalar)`.
fn hand_signed(header: &str, payload: &str, scalar: u8) -> String {
    use p256::ecdsa::signature::Signer;
    use p256::ecdsa::{Signature as EcdsaSignature, SigningKey};

    let key = SigningKey::from_slice(&[scalar; 32]).unwrap();
    let input = format!(
        "{}.{}",
        encode_segment(header.as_bytes()),
        encode_segment(payload.as_bytes())
    );
    let signature: EcdsaSignature = key.sign(input.as_bytes());
    format!("{input}.{}", encode_segment(&signature.to_bytes()))
}

#[test]
fn critical_header_extensions_are_refused() {
    let public = make_key("K1", 21).public_key();

    let plain = hand_signed(r#"{"alg":"ES256","kid":"K1"}"#, r#"{"x":1}"#, 21);
    let parsed = Signature::parse(&plain).unwrap();
    assert_eq!(parsed.verify(&public).unwrap(), br#"{"x":1}"#);

    let critical = hand_signed(
        r#"{"alg":"ES256","kid":"K1","crit":["exp"],"exp":1}"#,
        r#"{"x":1}"#,
        21,
    );
    let err = Signature::parse(&critical).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
    assert!(from_json(to_json_string(&critical).as_bytes()).is_err());
}

fn to_json_string(compact: &str) -> String {
    Value::String(compact.to_string()).to_string()
}

#[test]
fn unverified_payload_survives_corrupted_signature() {
    let key = make_key("K1", 21);
    let invoice = make_invoice();
    let token = sign(&key, &invoice, &SignerOptions::new()).unwrap().to_string();

    let (signed, _) = token.rsplit_once('.').unwrap();
    let corrupted = format!("{signed}.{}", encode_segment(&[0x42; 64]));
    let parsed = Signature::parse(&corrupted).unwrap();

    assert_eq!(parsed.unverified_payload::<Invoice>().unwrap(), invoice);
    assert_eq!(
        parsed.verify(&key.public_key()).unwrap_err().kind(),
        ErrorKind::KeyMismatch
    );
}

#[test]
fn unset_signature_handling() {
    assert_eq!(serialize(None), "");
    assert_eq!(to_json(None), r#""""#);
    assert_eq!(from_json(br#""""#).unwrap(), None);

    let unset: Option<Signature> = None;
    assert_eq!(unset.as_ref().map_or("", Signature::key_id), "");
    assert_eq!(unset.as_ref().map_or("", Signature::jku), "");
}

#[test]
fn header_without_kid_reports_empty_key_id() {
    let token = format!(
        "{}.{}.",
        encode_segment(br#"{"alg":"ES256"}"#),
        encode_segment(b"{}")
    );
    let parsed = Signature::parse(&token).unwrap();
    assert_eq!(parsed.key_id(), "");
    assert_eq!(parsed.jku(), "");
}

#[test]
fn signature_nests_in_documents() {
    #[derive(Debug, Serialize, Deserialize)]
    struct Document {
        body: Invoice,
        #[serde(with = "dsig_core::codec::optional", default)]
        signature: Option<Signature>,
    }

    let key = make_key("K1", 21);
    let invoice = make_invoice();
    let document = Document {
        signature: Some(sign(&key, &invoice, &SignerOptions::new()).unwrap()),
        body: invoice,
    };

    let json = serde_json::to_string(&document).unwrap();
    let decoded: Document = serde_json::from_str(&json).unwrap();
    let signature = decoded.signature.unwrap();
    let verified: Invoice = signature.verify_payload(&key.public_key()).unwrap();
    assert_eq!(verified, decoded.body);

    let unsigned: Document =
        serde_json::from_value(json!({"body": make_invoice(), "signature": ""})).unwrap();
    assert!(unsigned.signature.is_none());
}

#[test]
fn verification_from_many_threads() {
    let key = make_key("K1", 21);
    let public = key.public_key();
    let signature = sign(&key, &make_invoice(), &SignerOptions::new()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let invoice: Invoice = signature.verify_payload(&public).unwrap();
                assert_eq!(invoice.code, "INV-0001");
            });
        }
    });
}
