//! User entity - one row per verified phone number.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user is created on the first successful token verification for a phone
/// number and keyed by it. Exactly one row exists per phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Verified phone number, the external identity key (unique)
    pub phone_number: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user in the pre-onboarding UNKNOWN role
    pub fn new(phone_number: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone_number,
            name,
            role: Role::Unknown,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if role assignment has happened
    pub fn is_onboarded(&self) -> bool {
        self.role != Role::Unknown
    }
}
