use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When disabled, the server accepts dev tokens only - never run
    /// disabled outside development
    pub enabled: bool,
    /// HS256 shared secret for ID token verification
    pub jwt_secret: Option<String>,
    /// Path (relative to the config dir) of the provider's RS256 public key
    pub jwt_public_key_path: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(_), Some(_)) => Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            )),
            _ => Ok(()),
        }
    }
}
