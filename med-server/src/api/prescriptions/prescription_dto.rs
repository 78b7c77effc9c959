use med_core::{Medicine, Prescription};

use serde::Serialize;

/// Prescription DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDto {
    pub id: String,
    pub appointment_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub medicines: Vec<Medicine>,
    pub notes: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Prescription> for PrescriptionDto {
    fn from(p: Prescription) -> Self {
        Self {
            id: p.id.to_string(),
            appointment_id: p.appointment_id.to_string(),
            patient_id: p.patient_id.to_string(),
            doctor_id: p.doctor_id.to_string(),
            medicines: p.medicines,
            notes: p.notes,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
