use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A user's function in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Assigned at first login, before onboarding picks a real role
    #[default]
    Unknown,
    Patient,
    Doctor,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Patient => "PATIENT",
            Self::Doctor => "DOCTOR",
        }
    }

    /// UNKNOWN is a pre-onboarding placeholder and can never be assigned back
    pub fn is_assignable(&self) -> bool {
        matches!(self, Self::Patient | Self::Doctor)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "UNKNOWN" => Ok(Self::Unknown),
            "PATIENT" => Ok(Self::Patient),
            "DOCTOR" => Ok(Self::Doctor),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
