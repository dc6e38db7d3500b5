//! Refresh-token hashing configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Keying material for the refresh-token digest adapter
#[derive(Debug, Clone, Deserialize)]
pub struct HashingConfig {
    /// HMAC key for refresh-token digests
    pub hmac_key: SecretString,
}

impl HashingConfig {
    /// Validate hashing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let key = self.hmac_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("GATEKEEPER__HASHING__HMAC_KEY"));
        }
        if key.len() < 32 {
            return Err(ValidationError::HmacKeyTooShort);
        }
        Ok(())
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            hmac_key: SecretString::new(String::new()),
        }
    }
}
