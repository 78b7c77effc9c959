use crate::AppointmentDto;

use serde::Serialize;

/// Single appointment response
#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub appointment: AppointmentDto,
}
