use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    /// Doctor's user id (required)
    #[serde(default)]
    pub doctor_id: String,

    /// Requested point in time (required, passed through verbatim)
    #[serde(default)]
    pub timeslot: String,

    /// Patient's user id (required)
    #[serde(default)]
    pub patient_id: String,
}
