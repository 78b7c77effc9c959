use med_core::Medicine;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    /// Appointment the prescription was issued in (required)
    #[serde(default)]
    pub appointment_id: String,

    /// Patient's user id (required)
    #[serde(default)]
    pub patient_id: String,

    /// Doctor's user id (required)
    #[serde(default)]
    pub doctor_id: String,

    /// Ordered medicine entries (required, at least one)
    #[serde(default)]
    pub medicines: Vec<Medicine>,

    /// Free-text notes; empty when omitted
    #[serde(default)]
    pub notes: String,
}
