//! Token hasher port.
//!
//! Produces the one-way digest stored on a session in place of the raw
//! refresh token. How tokens are hashed (algorithm, keying) is policy owned
//! by the adapter; the domain only carries and compares the result through
//! `RefreshTokenDigest`.

use secrecy::SecretString;

/// One-way digest of a refresh token.
///
/// # Contract
///
/// - Deterministic: the same raw token always digests to the same string,
///   so a presented token can be matched against the stored digest later
/// - One-way: the raw token is not recoverable from the output
pub trait TokenHasher: Send + Sync {
    /// Digest a raw refresh token.
    fn digest(&self, raw_token: &SecretString) -> String;
}
