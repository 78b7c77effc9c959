//! Prescription REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreatePrescriptionRequest, PrescriptionDto,
    PrescriptionResponse,
};

use med_core::Prescription;
use med_db::PrescriptionRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// POST /api/prescriptions/create
pub async fn create_prescription(
    State(state): State<AppState>,
    Json(req): Json<CreatePrescriptionRequest>,
) -> ApiResult<(StatusCode, Json<PrescriptionResponse>)> {
    // 1. Validate before any storage call
    if req.appointment_id.is_empty() {
        return Err(ApiError::missing_field("appointmentId"));
    }
    if req.patient_id.is_empty() {
        return Err(ApiError::missing_field("patientId"));
    }
    if req.doctor_id.is_empty() {
        return Err(ApiError::missing_field("doctorId"));
    }
    if req.medicines.is_empty() {
        return Err(ApiError::Validation {
            message: "medicines must contain at least one entry".to_string(),
            field: Some("medicines".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.medicines.iter().any(|m| m.name.is_empty()) {
        return Err(ApiError::Validation {
            message: "every medicine entry needs a name".to_string(),
            field: Some("medicines".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let appointment_id = Uuid::parse_str(&req.appointment_id)?;
    let patient_id = Uuid::parse_str(&req.patient_id)?;
    let doctor_id = Uuid::parse_str(&req.doctor_id)?;

    // 2. Insert; the appointment reference is checked by the store
    let prescription = Prescription::new(
        appointment_id,
        patient_id,
        doctor_id,
        req.medicines,
        req.notes,
    );
    let repo = PrescriptionRepository::new(state.pool.clone());
    repo.create(&prescription).await?;

    log::info!(
        "Created prescription {} for appointment {}",
        prescription.id,
        appointment_id
    );

    Ok((
        StatusCode::CREATED,
        Json(PrescriptionResponse {
            prescription: prescription.into(),
        }),
    ))
}

/// GET /api/prescriptions/patient/{patient_id}
///
/// A patient's prescription history, most recent first. Empty history is a
/// valid result.
pub async fn list_patient_prescriptions(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> ApiResult<Json<Vec<PrescriptionDto>>> {
    let patient_uuid = Uuid::parse_str(&patient_id)?;

    let repo = PrescriptionRepository::new(state.pool.clone());
    let prescriptions = repo.find_by_patient(patient_uuid).await?;

    Ok(Json(
        prescriptions
            .into_iter()
            .map(PrescriptionDto::from)
            .collect(),
    ))
}
