//! Session lifetime configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// How long a session (and its refresh token) stays valid, in hours
    #[serde(default = "default_refresh_ttl_hours")]
    pub refresh_ttl_hours: i64,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.refresh_ttl_hours <= 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_ttl_hours: default_refresh_ttl_hours(),
        }
    }
}

fn default_refresh_ttl_hours() -> i64 {
    720 // 30 days
}
