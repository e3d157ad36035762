#![forbid(unsafe_code)]

use base64::Engine as _;
use hmac::Mac;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::{HEADER_JSON, SEGMENT, TokenSigner};

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("invalid signing key: {0}")]
    InvalidKey(String),
    #[error("failed to serialise token payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub(super) fn sign_token<T>(signer: &TokenSigner, payload: &T) -> Result<String, SigningError>
where
    T: Serialize + ?Sized,
{
    let payload_json = serde_json::to_string(payload)?;

    let digest = signer
        .keyed_digest(HEADER_JSON, &payload_json)
        .finalize()
        .into_bytes();

    debug!(payload_len = payload_json.len(), "signed token");

    Ok(format!(
        "{}.{}.{}",
        SEGMENT.encode(HEADER_JSON),
        SEGMENT.encode(&payload_json),
        SEGMENT.encode(digest)
    ))
}
