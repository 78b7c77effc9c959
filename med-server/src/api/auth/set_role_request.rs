use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    /// Phone number of the user being onboarded (required)
    #[serde(default)]
    pub phone_number: String,

    /// "PATIENT" or "DOCTOR" (required)
    #[serde(default)]
    pub role: String,

    /// Display name replacing the signup placeholder (required)
    #[serde(default)]
    pub name: String,
}
