use axum::http::HeaderMap;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Error)]
#[error("API key must not be empty")]
pub struct EmptyApiKey;

/// The configured shared secret. Constructed once at startup and carried
/// in application state; the empty-secret case is unrepresentable.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(secret: impl Into<String>) -> Result<Self, EmptyApiKey> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(EmptyApiKey);
        }
        Ok(Self(secret))
    }

    /// Check the designated header against the configured secret.
    ///
    /// Pure allow/deny decision: missing header, non-matching value, or a
    /// value that is not valid header text all deny.
    pub fn verify(&self, headers: &HeaderMap) -> bool {
        let Some(value) = headers.get(API_KEY_HEADER) else {
            return false;
        };
        let Ok(presented) = value.to_str() else {
            return false;
        };
        constant_time_eq(presented.as_bytes(), self.0.as_bytes())
    }
}

// Keep the secret out of debug output
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

/// Equality check whose timing does not depend on where the inputs
/// diverge. Both sides are hashed and the digests compared, so neither
/// the secret's length nor a matching prefix shortens the comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    Sha256::digest(a) == Sha256::digest(b)
}
