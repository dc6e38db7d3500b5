//! Session domain module.
//!
//! Owns the Session aggregate and its supporting value objects. A session
//! is created on sign-in, optionally replaced on refresh-token rotation,
//! and terminated by revocation.
//!
//! # Events
//!
//! - `SessionCreated` - Staged when a new session is created
//! - `SessionRevoked` - Staged when a session is revoked

mod aggregate;
mod errors;
mod events;
mod token_digest;

pub use aggregate::{NewSession, Session};
pub use errors::SessionError;
pub use events::{SessionCreated, SessionEvent, SessionRevoked};
pub use token_digest::RefreshTokenDigest;
