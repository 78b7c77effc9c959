//! Prescription repository - issuance inserts and patient history reads.
//!
//! The medicine list round-trips through the `medicines` column as JSON;
//! the entry order the doctor chose is preserved.

use crate::{DbError, Result as DbErrorResult};

use med_core::{Medicine, Prescription};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PrescriptionRow {
    id: String,
    appointment_id: String,
    patient_id: String,
    doctor_id: String,
    medicines: String,
    notes: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<PrescriptionRow> for Prescription {
    type Error = DbError;

    fn try_from(r: PrescriptionRow) -> DbErrorResult<Prescription> {
        let medicines: Vec<Medicine> =
            serde_json::from_str(&r.medicines).map_err(|e| DbError::Serialization {
                message: format!("Invalid JSON in prescriptions.medicines: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Prescription {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in prescriptions.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            appointment_id: Uuid::parse_str(&r.appointment_id).map_err(|e| {
                DbError::Initialization {
                    message: format!("Invalid UUID in prescriptions.appointment_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            patient_id: Uuid::parse_str(&r.patient_id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in prescriptions.patient_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            doctor_id: Uuid::parse_str(&r.doctor_id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in prescriptions.doctor_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            medicines,
            notes: r.notes,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in prescriptions.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(r.updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in prescriptions.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

pub struct PrescriptionRepository {
    pool: SqlitePool,
}

impl PrescriptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a prescription. A missing appointment, patient or doctor
    /// surfaces as `DbError::ForeignKeyViolation` and nothing is inserted.
    pub async fn create(&self, prescription: &Prescription) -> DbErrorResult<()> {
        let medicines = serde_json::to_string(&prescription.medicines).map_err(|e| {
            DbError::Serialization {
                message: format!("Failed to serialize medicines: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        sqlx::query(
            r#"
                INSERT INTO prescriptions (
                    id, appointment_id, patient_id, doctor_id,
                    medicines, notes, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(prescription.id.to_string())
        .bind(prescription.appointment_id.to_string())
        .bind(prescription.patient_id.to_string())
        .bind(prescription.doctor_id.to_string())
        .bind(medicines)
        .bind(&prescription.notes)
        .bind(prescription.created_at.timestamp())
        .bind(prescription.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All prescriptions issued to a patient, most recent first.
    pub async fn find_by_patient(&self, patient_id: Uuid) -> DbErrorResult<Vec<Prescription>> {
        let rows = sqlx::query_as::<_, PrescriptionRow>(
            r#"
                SELECT id, appointment_id, patient_id, doctor_id,
                    medicines, notes, created_at, updated_at
                FROM prescriptions
                WHERE patient_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(patient_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Prescription::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
