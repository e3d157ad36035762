#![forbid(unsafe_code)]

use base64::Engine as _;
use hmac::Mac;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::{ALGORITHM, SEGMENT, TokenSigner};

/// Errors that may occur while verifying a token.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("token algorithm {algorithm} is not supported")]
    UnsupportedAlgorithm { algorithm: String },
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token payload could not be parsed: {0}")]
    Payload(#[source] serde_json::Error),
}

pub(super) fn verify_token<T>(signer: &TokenSigner, token: &str) -> Result<T, VerificationError>
where
    T: DeserializeOwned,
{
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [encoded_header, encoded_payload, encoded_signature] = segments.as_slice() else {
        return Err(VerificationError::Malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };

    let header = decode_text(encoded_header, "header")?;
    let payload = decode_text(encoded_payload, "payload")?;

    let algorithm = header_algorithm(&header)?;
    if algorithm != ALGORITHM {
        return Err(VerificationError::UnsupportedAlgorithm { algorithm });
    }

    // An undecodable digest segment cannot match, so it is reported as a bad signature.
    let signature = SEGMENT
        .decode(encoded_signature)
        .map_err(|_| VerificationError::InvalidSignature)?;

    signer
        .keyed_digest(&header, &payload)
        .verify_slice(&signature)
        .map_err(|_| VerificationError::InvalidSignature)?;

    debug!(payload_len = payload.len(), "verified token");

    serde_json::from_str(&payload).map_err(VerificationError::Payload)
}

fn decode_text(segment: &str, label: &str) -> Result<String, VerificationError> {
    let bytes = SEGMENT
        .decode(segment)
        .map_err(|err| VerificationError::Malformed(format!("{label} is not valid base64: {err}")))?;
    String::from_utf8(bytes)
        .map_err(|err| VerificationError::Malformed(format!("{label} is not valid UTF-8: {err}")))
}

fn header_algorithm(header: &str) -> Result<String, VerificationError> {
    let value: Value = serde_json::from_str(header)
        .map_err(|err| VerificationError::Malformed(format!("header is not valid JSON: {err}")))?;
    value
        .get("alg")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| VerificationError::Malformed("header does not declare alg".to_string()))
}
