#![forbid(unsafe_code)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use yardc::{TokenSigner, VerificationError};

fn signer() -> TokenSigner {
    TokenSigner::new("tamper-test-secret").expect("signer")
}

fn flip_last_char(token: &str) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    let last = chars.last_mut().expect("token is not empty");
    *last = if *last == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}

fn verify(signer: &TokenSigner, token: &str) -> Result<Value, VerificationError> {
    signer.verify(token)
}

#[test]
fn tampering_is_detected() {
    let signer = signer();
    let payload = json!({"drawnAreas": [{"id": 1, "area": 50, "type": "Powerwash"}]});
    let token = signer.sign(&payload).expect("sign");

    // Baseline verification succeeds.
    assert_eq!(verify(&signer, &token).expect("verify baseline"), payload);

    // Flipping the last character corrupts the digest.
    let err = verify(&signer, &flip_last_char(&token)).expect_err("flipped digest");
    assert!(matches!(err, VerificationError::InvalidSignature), "got {err:?}");

    // Swapping in a different payload keeps the old digest.
    let segments: Vec<&str> = token.split('.').collect();
    let forged_payload = STANDARD.encode(r#"{"drawnAreas":[{"id":1,"area":5000,"type":"Powerwash"}]}"#);
    let forged = format!("{}.{}.{}", segments[0], forged_payload, segments[2]);
    let err = verify(&signer, &forged).expect_err("forged payload");
    assert!(matches!(err, VerificationError::InvalidSignature), "got {err:?}");

    // Garbage in the digest segment is a bad signature, not a crash.
    let garbage = format!("{}.{}.@@@@", segments[0], segments[1]);
    let err = verify(&signer, &garbage).expect_err("garbage digest");
    assert!(matches!(err, VerificationError::InvalidSignature), "got {err:?}");
}

#[test]
fn wrong_secret_is_rejected() {
    let token = signer().sign(&json!({"sub": "x"})).expect("sign");
    let other = TokenSigner::new("some-other-secret").expect("signer");

    let err = verify(&other, &token).expect_err("wrong secret");
    assert!(matches!(err, VerificationError::InvalidSignature));
}

#[test]
fn segment_count_must_be_three() {
    let signer = signer();
    let token = signer.sign(&json!({"sub": "x"})).expect("sign");

    for candidate in [
        String::new(),
        "onlyone".to_string(),
        token.rsplit_once('.').expect("three segments").0.to_string(),
        format!("{token}.extra"),
    ] {
        let err = verify(&signer, &candidate).expect_err("malformed");
        assert!(
            matches!(err, VerificationError::Malformed(_)),
            "{candidate:?} gave {err:?}"
        );
    }
}

#[test]
fn undecodable_header_is_malformed() {
    let signer = signer();
    let token = signer.sign(&json!({"sub": "x"})).expect("sign");
    let (_, rest) = token.split_once('.').expect("segments");

    let err = verify(&signer, &format!("!!!.{rest}")).expect_err("bad header");
    assert!(matches!(err, VerificationError::Malformed(_)), "got {err:?}");
}

#[test]
fn other_algorithms_are_refused() {
    let signer = signer();
    let token = signer.sign(&json!({"sub": "x"})).expect("sign");
    let (_, rest) = token.split_once('.').expect("segments");

    let none_header = STANDARD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let err = verify(&signer, &format!("{none_header}.{rest}")).expect_err("alg none");
    match err {
        VerificationError::UnsupportedAlgorithm { algorithm } => assert_eq!(algorithm, "none"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn payload_of_wrong_shape_is_reported() {
    let signer = signer();
    let token = signer.sign(&json!({"count": "seven"})).expect("sign");

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Counted {
        count: u32,
    }

    let err = signer.verify::<Counted>(&token).expect_err("wrong payload type");
    assert!(matches!(err, VerificationError::Payload(_)), "got {err:?}");
}
