//! HMAC-SHA256 refresh-token hasher.
//!
//! Implements the `TokenHasher` port with a keyed digest, so a leaked
//! session table alone is not enough to forge refresh tokens - the HMAC
//! key lives in configuration, not in the database.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::ports::TokenHasher;

type HmacSha256 = Hmac<Sha256>;

/// Keyed refresh-token hasher.
pub struct HmacSha256TokenHasher {
    key: SecretString,
}

impl HmacSha256TokenHasher {
    /// Creates a hasher with the given HMAC key.
    ///
    /// Key length is enforced by configuration validation, not here.
    pub fn new(key: SecretString) -> Self {
        Self { key }
    }
}

impl TokenHasher for HmacSha256TokenHasher {
    fn digest(&self, raw_token: &SecretString) -> String {
        let mut mac = HmacSha256::new_from_slice(self.key.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(raw_token.expose_secret().as_bytes());
        let bytes = mac.finalize().into_bytes();

        hex_encode(&bytes)
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
