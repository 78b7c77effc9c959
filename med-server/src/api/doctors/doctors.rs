//! Doctor REST API handlers
//!
//! Read-only: profiles are provisioned out of band.

use crate::{ApiResult, AppState, DoctorDto};

use med_db::DoctorRepository;

use axum::{Json, extract::State};

/// GET /api/doctors
///
/// List all doctor profiles
pub async fn list_doctors(State(state): State<AppState>) -> ApiResult<Json<Vec<DoctorDto>>> {
    let repo = DoctorRepository::new(state.pool.clone());
    let doctors = repo.find_all().await?;

    Ok(Json(doctors.into_iter().map(DoctorDto::from).collect()))
}
