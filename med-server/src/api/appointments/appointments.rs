//! Appointment REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AppointmentResponse, BookAppointmentRequest,
    DoctorAppointmentDto,
};

use med_core::Appointment;
use med_db::AppointmentRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/appointments/doctor/{doctor_id}
///
/// A doctor's schedule, most recent booking first, each entry carrying the
/// patient's name. A doctor with no bookings gets an empty list.
pub async fn list_doctor_appointments(
    State(state): State<AppState>,
    Path(doctor_id): Path<String>,
) -> ApiResult<Json<Vec<DoctorAppointmentDto>>> {
    let doctor_uuid = Uuid::parse_str(&doctor_id)?;

    let repo = AppointmentRepository::new(state.pool.clone());
    let schedule = repo.find_by_doctor(doctor_uuid).await?;

    Ok(Json(
        schedule.into_iter().map(DoctorAppointmentDto::from).collect(),
    ))
}

/// POST /api/appointments/book
pub async fn book_appointment(
    State(state): State<AppState>,
    Json(req): Json<BookAppointmentRequest>,
) -> ApiResult<(StatusCode, Json<AppointmentResponse>)> {
    // 1. Validate before any storage call
    if req.doctor_id.is_empty() {
        return Err(ApiError::missing_field("doctorId"));
    }
    if req.timeslot.is_empty() {
        return Err(ApiError::missing_field("timeslot"));
    }
    if req.patient_id.is_empty() {
        return Err(ApiError::missing_field("patientId"));
    }

    let doctor_id = Uuid::parse_str(&req.doctor_id)?;
    let patient_id = Uuid::parse_str(&req.patient_id)?;

    // 2. Insert; the store's foreign keys decide whether both references
    //    exist. Timeslot clashes are not rejected.
    let appointment = Appointment::new(patient_id, doctor_id, req.timeslot);
    let repo = AppointmentRepository::new(state.pool.clone());
    repo.create(&appointment).await?;

    log::info!(
        "Booked appointment {} (doctor {}, patient {})",
        appointment.id,
        doctor_id,
        patient_id
    );

    Ok((
        StatusCode::CREATED,
        Json(AppointmentResponse {
            appointment: appointment.into(),
        }),
    ))
}
