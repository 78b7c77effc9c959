//! The token-verification oracle boundary.

use crate::Result as AuthErrorResult;

use async_trait::async_trait;

/// Identity attested by the oracle. A phone number is only ever trusted
/// when it came out of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Provider-side subject identifier
    pub subject: String,
    /// The phone number the client proved ownership of
    pub phone_number: String,
}

/// Converts an opaque client-supplied token into a verified phone number,
/// or fails. The token is an untrusted input; implementations must not
/// derive identity from anything else.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> AuthErrorResult<VerifiedIdentity>;
}
