//! Development-mode oracle with no cryptographic verification.

use crate::{AuthError, Result as AuthErrorResult, TokenVerifier, VerifiedIdentity};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Accepts tokens of the form `dev:<phone>` and attests that phone number.
/// Wired up only when auth is disabled in configuration; production uses
/// `JwtVerifier`.
#[derive(Debug, Default)]
pub struct DevTokenVerifier;

#[async_trait]
impl TokenVerifier for DevTokenVerifier {
    async fn verify(&self, id_token: &str) -> AuthErrorResult<VerifiedIdentity> {
        match id_token.strip_prefix("dev:") {
            Some(phone) if !phone.is_empty() => Ok(VerifiedIdentity {
                subject: format!("dev-{}", phone),
                phone_number: phone.to_string(),
            }),
            _ => Err(AuthError::InvalidToken {
                message: "not a dev token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
