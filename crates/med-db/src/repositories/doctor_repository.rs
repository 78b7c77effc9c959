//! Doctor repository - read-only profile listing.

use crate::{DbError, Result as DbErrorResult};

use med_core::Doctor;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct DoctorRow {
    id: String,
    user_id: String,
    name: String,
    specialization: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<DoctorRow> for Doctor {
    type Error = DbError;

    fn try_from(r: DoctorRow) -> DbErrorResult<Doctor> {
        Ok(Doctor {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in doctors.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            user_id: Uuid::parse_str(&r.user_id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in doctors.user_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: r.name,
            specialization: r.specialization,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in doctors.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(r.updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in doctors.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

pub struct DoctorRepository {
    pool: SqlitePool,
}

impl DoctorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Doctor>> {
        let rows = sqlx::query_as::<_, DoctorRow>(
            r#"
                SELECT id, user_id, name, specialization, created_at, updated_at
                FROM doctors
                ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Doctor::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
