//! Refresh-token digest value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::domain::foundation::ValidationError;

/// One-way digest of a refresh token.
///
/// Only the digest ever reaches this type; hashing is the `TokenHasher`
/// port's job and the raw token never enters the domain layer. Two digests
/// are equal iff their underlying strings are equal, compared in constant
/// time so a lookup cannot leak prefix information.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshTokenDigest(String);

impl RefreshTokenDigest {
    /// Wraps a precomputed digest, returning error if empty.
    pub fn new(digest: impl Into<String>) -> Result<Self, ValidationError> {
        let digest = digest.into();
        if digest.is_empty() {
            return Err(ValidationError::empty_field("refresh_token_digest"));
        }
        Ok(Self(digest))
    }

    /// Returns the digest string (for persistence, never for clients).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for RefreshTokenDigest {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).unwrap_u8() == 1
    }
}

impl Eq for RefreshTokenDigest {}

// Keeps the digest out of logs and error output.
impl fmt::Debug for RefreshTokenDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshTokenDigest(..)")
    }
}
