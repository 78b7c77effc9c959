use med_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Foreign key constraint violated: {message} {location}")]
    ForeignKeyViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Serialization error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    /// Constraint violations become their own variants so callers can map
    /// them to typed errors instead of passing driver failures through raw.
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db_err) = source {
            match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return Self::UniqueViolation {
                        message: db_err.message().to_string(),
                        location,
                    };
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return Self::ForeignKeyViolation {
                        message: db_err.message().to_string(),
                        location,
                    };
                }
                _ => {}
            }
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
