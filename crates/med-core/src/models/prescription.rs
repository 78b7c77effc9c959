//! Prescription entity - medicines issued against an appointment.

use crate::Medicine;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prescription is tied to the appointment it was issued in. The medicine
/// list is ordered and never empty for a stored prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub medicines: Vec<Medicine>,
    /// Free-text notes, empty when the doctor added none
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prescription {
    /// Create a new prescription with server-assigned id and timestamps
    pub fn new(
        appointment_id: Uuid,
        patient_id: Uuid,
        doctor_id: Uuid,
        medicines: Vec<Medicine>,
        notes: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            appointment_id,
            patient_id,
            doctor_id,
            medicines,
            notes,
            created_at: now,
            updated_at: now,
        }
    }
}
