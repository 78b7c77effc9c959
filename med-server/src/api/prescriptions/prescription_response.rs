use crate::PrescriptionDto;

use serde::Serialize;

/// Single prescription response
#[derive(Debug, Serialize)]
pub struct PrescriptionResponse {
    pub prescription: PrescriptionDto,
}
