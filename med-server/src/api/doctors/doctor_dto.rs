use med_core::Doctor;

use serde::Serialize;

/// Doctor profile DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub specialization: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Doctor> for DoctorDto {
    fn from(d: Doctor) -> Self {
        Self {
            id: d.id.to_string(),
            user_id: d.user_id.to_string(),
            name: d.name,
            specialization: d.specialization,
            created_at: d.created_at.timestamp(),
            updated_at: d.updated_at.timestamp(),
        }
    }
}
