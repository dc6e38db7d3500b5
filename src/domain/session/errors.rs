//! Session-specific error types.

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, SessionId};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// User is not authorized to act on this session.
    Forbidden,
    /// Credential verification failed.
    InvalidCredentials,
    /// Presented refresh token did not match a live session.
    InvalidRefreshToken,
    /// Session has been revoked.
    Revoked,
    /// Session has expired.
    Expired,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::Forbidden => ErrorCode::Forbidden,
            SessionError::InvalidCredentials => ErrorCode::InvalidCredentials,
            SessionError::InvalidRefreshToken => ErrorCode::InvalidRefreshToken,
            SessionError::Revoked => ErrorCode::SessionRevoked,
            SessionError::Expired => ErrorCode::SessionExpired,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::Forbidden => "Permission denied".to_string(),
            SessionError::InvalidCredentials => "Invalid credentials".to_string(),
            SessionError::InvalidRefreshToken => "Invalid or expired refresh token".to_string(),
            SessionError::Revoked => "Session has been revoked".to_string(),
            SessionError::Expired => "Session has expired".to_string(),
            SessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => SessionError::Infrastructure(err.to_string()),
            ErrorCode::Forbidden | ErrorCode::Unauthorized => SessionError::Forbidden,
            ErrorCode::SessionRevoked => SessionError::Revoked,
            ErrorCode::SessionExpired => SessionError::Expired,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => SessionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.to_string(),
            },
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}

impl From<AuthError> for SessionError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::AccountDisabled => {
                SessionError::InvalidCredentials
            }
            AuthError::InvalidRefreshToken => SessionError::InvalidRefreshToken,
            AuthError::ServiceUnavailable(msg) => SessionError::Infrastructure(msg),
        }
    }
}
