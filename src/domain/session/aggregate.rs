//! Session aggregate entity.
//!
//! A Session records one authenticated presence of a user on one client
//! device. It owns the security-critical invariants of the service:
//! the refresh token is held as a one-way digest only, the device binding
//! comes from a closed set, revocation is terminal, and every state
//! transition is staged as a domain event for the persistence layer to
//! publish.
//!
//! # Event discipline
//!
//! Mutating operations stage events into an uncommitted buffer on the
//! instance. The repository drains the buffer with
//! [`Session::take_uncommitted_events`] only after a successful write, so
//! a failed save leaves the events staged and nothing is lost.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Device, DomainError, EventId, SessionId, Timestamp, UserId,
};
use crate::domain::session::{
    RefreshTokenDigest, SessionCreated, SessionEvent, SessionRevoked,
};

/// Input for [`Session::create`].
///
/// `device` arrives as the raw client-supplied string and is validated
/// against the recognized set during construction. When `id` is `None` a
/// fresh one is generated.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub id: Option<SessionId>,
    pub user_id: UserId,
    pub refresh_token_digest: RefreshTokenDigest,
    pub device: String,
    pub device_id: String,
    pub user_agent: String,
    pub ip: String,
    pub expires_at: Timestamp,
}

/// Session aggregate - one authenticated presence of a user.
///
/// # Invariants
///
/// - `device` is a member of the recognized set (checked at construction)
/// - `expires_at` is strictly after `created_at`
/// - `revoked_at`, once set, never changes and never clears
/// - the uncommitted buffer holds exactly the events staged since the
///   instance was created or last drained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// User this session belongs to.
    user_id: UserId,

    /// One-way digest of the refresh token bound to this session.
    refresh_token_digest: RefreshTokenDigest,

    /// Classified client device type.
    device: Device,

    /// Opaque identifier of the physical/client instance.
    device_id: String,

    /// Advisory user-agent string.
    user_agent: String,

    /// Advisory IP literal.
    ip: String,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last mutated.
    updated_at: Timestamp,

    /// When the session stops being valid.
    expires_at: Timestamp,

    /// Set iff the session has been revoked. First revoke wins.
    revoked_at: Option<Timestamp>,

    /// Events staged since creation or the last drain.
    #[serde(skip)]
    uncommitted_events: Vec<SessionEvent>,
}

impl Session {
    /// Create a new session, staging one `SessionCreated` event.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `device` is not a recognized device type
    /// - `EmptyField` if `device_id` is empty
    /// - `ValidationFailed` if `expires_at` is not after the creation time
    pub fn create(props: NewSession) -> Result<Self, DomainError> {
        let device = Device::parse(&props.device)?;

        if props.device_id.is_empty() {
            return Err(DomainError::validation(
                "device_id",
                "Device id cannot be empty",
            ));
        }

        let now = Timestamp::now();
        if !props.expires_at.is_after(&now) {
            return Err(DomainError::validation(
                "expires_at",
                "Session expiry must be after its creation time",
            ));
        }

        let id = props.id.unwrap_or_default();
        let mut session = Self {
            id,
            user_id: props.user_id,
            refresh_token_digest: props.refresh_token_digest,
            device,
            device_id: props.device_id,
            user_agent: props.user_agent,
            ip: props.ip,
            created_at: now,
            updated_at: now,
            expires_at: props.expires_at,
            revoked_at: None,
            uncommitted_events: Vec::new(),
        };

        session.uncommitted_events.push(SessionEvent::Created(SessionCreated {
            event_id: EventId::new(),
            session_id: session.id,
            user_id: session.user_id.clone(),
            occurred_at: now,
        }));

        Ok(session)
    }

    /// Reconstitute a session from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        user_id: UserId,
        refresh_token_digest: RefreshTokenDigest,
        device: Device,
        device_id: String,
        user_agent: String,
        ip: String,
        created_at: Timestamp,
        updated_at: Timestamp,
        expires_at: Timestamp,
        revoked_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            user_id,
            refresh_token_digest,
            device,
            device_id,
            user_agent,
            ip,
            created_at,
            updated_at,
            expires_at,
            revoked_at,
            uncommitted_events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owning user's ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the refresh-token digest.
    pub fn refresh_token_digest(&self) -> &RefreshTokenDigest {
        &self.refresh_token_digest
    }

    /// Returns the classified device type.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Returns the client instance identifier.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the advisory user-agent string.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the advisory IP literal.
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last mutated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns when the session expires.
    pub fn expires_at(&self) -> &Timestamp {
        &self.expires_at
    }

    /// Returns the revocation time, if revoked.
    pub fn revoked_at(&self) -> Option<&Timestamp> {
        self.revoked_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State checks
    // ─────────────────────────────────────────────────────────────────────────

    /// True iff the session has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// True iff the current time is at or after `expires_at`.
    pub fn is_expired(&self) -> bool {
        !self.expires_at.is_after(&Timestamp::now())
    }

    /// True iff the session is neither revoked nor expired.
    pub fn is_active(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }

    /// Compares a presented refresh-token digest against this session's,
    /// in constant time.
    pub fn matches_refresh_token(&self, digest: &RefreshTokenDigest) -> bool {
        &self.refresh_token_digest == digest
    }

    /// Checks if the given user owns this session.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Revoke the session. Idempotent: the first call wins.
    ///
    /// The first call sets `revoked_at`, advances `updated_at`, and stages
    /// one `SessionRevoked` event; later calls change nothing and stage
    /// nothing. Exclusive access (`&mut self`) is the per-instance guard:
    /// a shared instance must sit behind a lock, and then two concurrent
    /// callers cannot both observe `revoked_at` unset.
    pub fn revoke(&mut self) {
        if self.revoked_at.is_some() {
            return;
        }

        let now = Timestamp::now();
        self.revoked_at = Some(now);
        self.updated_at = now;

        self.uncommitted_events.push(SessionEvent::Revoked(SessionRevoked {
            event_id: EventId::new(),
            session_id: self.id,
            occurred_at: now,
        }));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event buffer
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the staged events in the order they occurred, without
    /// clearing them.
    pub fn uncommitted_events(&self) -> &[SessionEvent] {
        &self.uncommitted_events
    }

    /// Drains the staged events.
    ///
    /// The persistence collaborator calls this after a successful write;
    /// on failure it must leave the buffer alone so the events are
    /// retried with the next save.
    pub fn take_uncommitted_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
