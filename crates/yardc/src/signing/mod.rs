#![forbid(unsafe_code)]

//! Compact HS256 tokens: `base64(header).base64(payload).base64(digest)`.
//!
//! The digest is an HMAC-SHA256 over `header_json + "." + payload_json`, keyed
//! with a secret supplied once at construction.

use std::fmt;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::Sha256;

pub mod signer;
pub mod verify;

pub use signer::SigningError;
pub use verify::VerificationError;

type HmacSha256 = Hmac<Sha256>;

/// The only algorithm tokens are issued or accepted with.
pub const ALGORITHM: &str = "HS256";

/// Fixed token header.
pub const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Token segment encoding; pads on encode and accepts either form on decode.
pub(crate) const SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Signs and verifies tokens with a symmetric secret.
#[derive(Clone)]
pub struct TokenSigner {
    keyed: HmacSha256,
}

impl TokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, SigningError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(SigningError::InvalidKey(
                "signing secret must not be empty".to_string(),
            ));
        }
        let keyed = HmacSha256::new_from_slice(&secret)
            .map_err(|err| SigningError::InvalidKey(err.to_string()))?;
        Ok(Self { keyed })
    }

    /// Produces a signed token carrying `payload` as JSON.
    pub fn sign<T>(&self, payload: &T) -> Result<String, SigningError>
    where
        T: Serialize + ?Sized,
    {
        signer::sign_token(self, payload)
    }

    /// Checks the token's digest and returns its payload.
    pub fn verify<T>(&self, token: &str) -> Result<T, VerificationError>
    where
        T: DeserializeOwned,
    {
        verify::verify_token(self, token)
    }

    fn keyed_digest(&self, header: &str, payload: &str) -> HmacSha256 {
        let mut mac = self.keyed.clone();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        mac
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
