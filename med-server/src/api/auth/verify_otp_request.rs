use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    /// Identity-provider ID token obtained after OTP entry (required)
    #[serde(default)]
    pub id_token: String,
}
