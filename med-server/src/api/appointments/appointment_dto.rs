use med_core::Appointment;

use serde::Serialize;

/// Appointment DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub timeslot: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Appointment> for AppointmentDto {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id.to_string(),
            patient_id: a.patient_id.to_string(),
            doctor_id: a.doctor_id.to_string(),
            timeslot: a.timeslot,
            status: a.status.as_str().to_string(),
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
