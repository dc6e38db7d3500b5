//! RevokeSessionHandler - Command handler for terminating sessions.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, SessionId, UserId};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// Command to revoke a session.
#[derive(Debug, Clone)]
pub struct RevokeSessionCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
}

/// Handler for the revoke command.
///
/// Returns only a success/failure signal; revocation has no payload.
pub struct RevokeSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl RevokeSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RevokeSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<(), SessionError> {
        // 1. Load session
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        // 2. Authorize - user must own the session
        if !session.is_owner(&cmd.user_id) {
            tracing::warn!(
                session_id = %cmd.session_id,
                user_id = %cmd.user_id,
                correlation_id = %metadata.correlation_id(),
                "revoke rejected: requester does not own session"
            );
            return Err(SessionError::Forbidden);
        }

        // 3. Revoke (idempotent: a repeat call stages nothing)
        session.revoke();

        // 4. Persist; the repository publishes the staged event, if any
        self.repository.update(&mut session).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            user_id = %cmd.user_id,
            correlation_id = %metadata.correlation_id(),
            "session revoked"
        );

        Ok(())
    }
}
