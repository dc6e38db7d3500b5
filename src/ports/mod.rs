//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the session core and the outside world. Adapters implement these ports.
//!
//! - `CredentialVerifier` - Verifies identifier/secret pairs
//! - `TokenHasher` - Digests raw refresh tokens
//! - `SessionRepository` - Persists sessions, drains and publishes their events
//! - `EventPublisher` - Delivers domain events at-least-once

mod credential_verifier;
mod event_publisher;
mod session_repository;
mod token_hasher;

pub use credential_verifier::CredentialVerifier;
pub use event_publisher::EventPublisher;
pub use session_repository::SessionRepository;
pub use token_hasher::TokenHasher;
