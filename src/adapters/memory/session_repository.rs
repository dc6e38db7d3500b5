//! In-memory session repository for testing.
//!
//! Models the full repository contract including the event side: on a
//! successful save or update the aggregate's uncommitted events are
//! drained, stamped with the owning user, and handed to the configured
//! `EventPublisher`. A simulated write failure leaves the buffer alone.
//!
//! Testing only; locks panic when poisoned, like the in-memory event bus.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserId};
use crate::domain::session::Session;
use crate::ports::{EventPublisher, SessionRepository};

/// HashMap-backed session store that publishes drained events.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, Session>>,
    publisher: Arc<dyn EventPublisher>,
    fail_writes: AtomicBool,
}

impl InMemorySessionRepository {
    /// Creates an empty repository publishing to the given bus.
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            publisher,
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes subsequent writes fail (for error-path tests).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns the number of stored sessions.
    pub fn session_count(&self) -> usize {
        self.sessions
            .read()
            .expect("InMemorySessionRepository: lock poisoned")
            .len()
    }

    async fn write(&self, session: &mut Session, must_exist: bool) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated write failure",
            ));
        }

        {
            let mut sessions = self
                .sessions
                .write()
                .expect("InMemorySessionRepository: lock poisoned");
            if must_exist && !sessions.contains_key(session.id()) {
                return Err(DomainError::new(
                    ErrorCode::SessionNotFound,
                    format!("Session not found: {}", session.id()),
                ));
            }
            sessions.insert(*session.id(), session.clone());
        }

        // Drain only after the write landed; a failed write retries the
        // same events with the next save.
        let envelopes: Vec<_> = session
            .take_uncommitted_events()
            .into_iter()
            .map(|event| {
                event
                    .to_envelope()
                    .with_user_id(session.user_id().to_string())
            })
            .collect();
        if !envelopes.is_empty() {
            self.publisher.publish_all(envelopes).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &mut Session) -> Result<(), DomainError> {
        self.write(session, false).await
    }

    async fn update(&self, session: &mut Session) -> Result<(), DomainError> {
        self.write(session, true).await
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self
            .sessions
            .read()
            .expect("InMemorySessionRepository: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Session>, DomainError> {
        let mut sessions: Vec<Session> = self
            .sessions
            .read()
            .expect("InMemorySessionRepository: lock poisoned")
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));
        Ok(sessions)
    }
}
