//! Appointment repository - booking inserts and doctor schedule reads.

use crate::{DbError, Result as DbErrorResult};

use med_core::{Appointment, AppointmentStatus, DoctorAppointment};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct DoctorAppointmentRow {
    id: String,
    patient_id: String,
    doctor_id: String,
    timeslot: String,
    status: String,
    created_at: i64,
    patient_name: String,
}

impl TryFrom<DoctorAppointmentRow> for DoctorAppointment {
    type Error = DbError;

    fn try_from(r: DoctorAppointmentRow) -> DbErrorResult<DoctorAppointment> {
        Ok(DoctorAppointment {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in appointments.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            patient_id: Uuid::parse_str(&r.patient_id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in appointments.patient_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            doctor_id: Uuid::parse_str(&r.doctor_id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in appointments.doctor_id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            timeslot: r.timeslot,
            status: AppointmentStatus::from_str(&r.status).map_err(|e| {
                DbError::Initialization {
                    message: format!("Invalid status in appointments.status: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in appointments.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            patient_name: r.patient_name,
        })
    }
}

pub struct AppointmentRepository {
    pool: SqlitePool,
}

impl AppointmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a booking. A missing patient or doctor surfaces as
    /// `DbError::ForeignKeyViolation` and nothing is inserted.
    pub async fn create(&self, appointment: &Appointment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO appointments (
                    id, patient_id, doctor_id, timeslot, status,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(appointment.id.to_string())
        .bind(appointment.patient_id.to_string())
        .bind(appointment.doctor_id.to_string())
        .bind(&appointment.timeslot)
        .bind(appointment.status.as_str())
        .bind(appointment.created_at.timestamp())
        .bind(appointment.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All appointments for a doctor, joined with each patient's name,
    /// most recent first. An empty result is valid.
    pub async fn find_by_doctor(&self, doctor_id: Uuid) -> DbErrorResult<Vec<DoctorAppointment>> {
        let rows = sqlx::query_as::<_, DoctorAppointmentRow>(
            r#"
                SELECT
                    a.id, a.patient_id, a.doctor_id, a.timeslot, a.status,
                    a.created_at, p.name AS patient_name
                FROM appointments a
                INNER JOIN users p ON a.patient_id = p.id
                WHERE a.doctor_id = ?
                ORDER BY a.created_at DESC
            "#,
        )
        .bind(doctor_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(DoctorAppointment::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }
}
