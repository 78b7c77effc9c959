use crate::UserDto;

use serde::Serialize;

/// Login response: the resolved user plus the first-time-login flag
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub user: UserDto,
    pub is_new_user: bool,
}
