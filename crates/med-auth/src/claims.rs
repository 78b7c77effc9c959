use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// ID token claims - matches the identity provider's token format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// Subject (provider-side user id)
    pub sub: String,
    /// Verified phone number, present on phone-auth tokens
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl IdTokenClaims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Extract the phone number claim. A token without one cannot identify
    /// a user in a phone-keyed system.
    #[track_caller]
    pub fn require_phone_number(&self) -> AuthErrorResult<&str> {
        match self.phone_number.as_deref() {
            Some(phone) if !phone.is_empty() => Ok(phone),
            _ => Err(AuthError::MissingPhoneNumber {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
