//! Session domain events.
//!
//! Events staged when session lifecycle changes occur:
//! - `SessionCreated` - New session established on sign-in
//! - `SessionRevoked` - Session terminated, permanently

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, DomainEvent, EventEnvelope, EventId, SerializableDomainEvent, SessionId,
    Timestamp, UserId,
};

// ════════════════════════════════════════════════════════════════════════════
// SessionCreated
// ════════════════════════════════════════════════════════════════════════════

/// Staged when a new session is created.
///
/// Carries the minimal facts needed to audit the transition; the session's
/// device binding and expiry live on the aggregate record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created session.
    pub session_id: SessionId,

    /// User the session belongs to.
    pub user_id: UserId,

    /// When the session was created.
    pub occurred_at: Timestamp,
}

domain_event!(
    SessionCreated,
    event_type = "session.created.v1",
    schema_version = 1,
    aggregate_id = session_id,
    aggregate_type = "Session",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SessionRevoked
// ════════════════════════════════════════════════════════════════════════════

/// Staged when a session is revoked.
///
/// Revocation is terminal; there is no corresponding "unrevoked" event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRevoked {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the revoked session.
    pub session_id: SessionId,

    /// When the revocation took effect.
    pub occurred_at: Timestamp,
}

domain_event!(
    SessionRevoked,
    event_type = "session.revoked.v1",
    schema_version = 1,
    aggregate_id = session_id,
    aggregate_type = "Session",
    occurred_at = occurred_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SessionEvent
// ════════════════════════════════════════════════════════════════════════════

/// Any event the Session aggregate can stage in its uncommitted buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Created(SessionCreated),
    Revoked(SessionRevoked),
}

impl SessionEvent {
    /// Returns the routing type of the wrapped event.
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::Created(e) => e.event_type(),
            SessionEvent::Revoked(e) => e.event_type(),
        }
    }

    /// Returns when the wrapped event occurred.
    pub fn occurred_at(&self) -> Timestamp {
        match self {
            SessionEvent::Created(e) => e.occurred_at,
            SessionEvent::Revoked(e) => e.occurred_at,
        }
    }

    /// Converts the wrapped event into a transport envelope.
    pub fn to_envelope(&self) -> EventEnvelope {
        match self {
            SessionEvent::Created(e) => e.to_envelope(),
            SessionEvent::Revoked(e) => e.to_envelope(),
        }
    }
}
