//! Session repository port (write side).
//!
//! Defines the contract for persisting and retrieving Session aggregates.
//!
//! # Design
//!
//! - **Write-focused**: Optimized for aggregate persistence
//! - **Event draining**: On a successful save/update, implementations drain
//!   the aggregate's uncommitted events and publish them at-least-once;
//!   on failure the buffer is left untouched so nothing staged is lost
//! - **User-scoped**: Listing queries are by user_id

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::Session;
use async_trait::async_trait;

/// Repository port for Session aggregate persistence.
///
/// `save` and `update` take `&mut Session` because the successful path
/// drains the aggregate's event buffer (the read-and-clear is this
/// collaborator's responsibility, not the aggregate's).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session and publish its staged events.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure; staged events remain
    ///   on the aggregate
    async fn save(&self, session: &mut Session) -> Result<(), DomainError>;

    /// Update an existing session and publish its staged events.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &mut Session) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Find all sessions owned by a user, most recently updated first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Session>, DomainError>;
}
