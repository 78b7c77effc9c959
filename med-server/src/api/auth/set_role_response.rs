use crate::UserDto;

use serde::Serialize;

/// Role assignment confirmation carrying the updated user
#[derive(Debug, Serialize)]
pub struct SetRoleResponse {
    pub user: UserDto,
}
