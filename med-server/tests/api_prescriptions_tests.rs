//! Integration tests for the prescription handlers
mod common;

use crate::common::{
    count_prescriptions, create_test_app_state, create_test_appointment, create_test_user,
    get_json, post_json,
};

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use med_server::build_router;

#[tokio::test]
async fn test_create_prescription_empty_medicines_returns_400() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, body) = post_json(
        &app,
        "/api/prescriptions/create",
        json!({
            "appointmentId": Uuid::new_v4().to_string(),
            "patientId": Uuid::new_v4().to_string(),
            "doctorId": Uuid::new_v4().to_string(),
            "medicines": [],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "medicines");
    assert_eq!(count_prescriptions(&state.pool).await, 0);
}

#[tokio::test]
async fn test_create_prescription_missing_appointment_id_returns_400() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, body) = post_json(
        &app,
        "/api/prescriptions/create",
        json!({
            "patientId": Uuid::new_v4().to_string(),
            "doctorId": Uuid::new_v4().to_string(),
            "medicines": [{"name": "Paracetamol"}],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "appointmentId");
    assert_eq!(count_prescriptions(&state.pool).await, 0);
}

#[tokio::test]
async fn test_create_prescription_unknown_appointment_returns_reference_error() {
    let state = create_test_app_state().await;
    let patient_id = create_test_user(&state.pool, "+15551230001", "Asha", "PATIENT").await;
    let doctor_id = create_test_user(&state.pool, "+15551230002", "Dr. Rao", "DOCTOR").await;
    let app = build_router(state.clone());

    let (status, body) = post_json(
        &app,
        "/api/prescriptions/create",
        json!({
            "appointmentId": Uuid::new_v4().to_string(),
            "patientId": patient_id.to_string(),
            "doctorId": doctor_id.to_string(),
            "medicines": [{"name": "Paracetamol"}],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "REFERENCE_ERROR");
    assert_eq!(count_prescriptions(&state.pool).await, 0);
}

#[tokio::test]
async fn test_create_prescription_success_returns_201_with_defaulted_notes() {
    let state = create_test_app_state().await;
    let patient_id = create_test_user(&state.pool, "+15551230001", "Asha", "PATIENT").await;
    let doctor_id = create_test_user(&state.pool, "+15551230002", "Dr. Rao", "DOCTOR").await;
    let appointment_id =
        create_test_appointment(&state.pool, patient_id, doctor_id, "2024-05-01T10:00Z", 0).await;
    let app = build_router(state.clone());

    // notes omitted on purpose
    let (status, body) = post_json(
        &app,
        "/api/prescriptions/create",
        json!({
            "appointmentId": appointment_id.to_string(),
            "patientId": patient_id.to_string(),
            "doctorId": doctor_id.to_string(),
            "medicines": [
                {"name": "Paracetamol", "dosage": "500mg", "frequency": "twice daily"},
                {"name": "Cetirizine"},
            ],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let prescription = &body["prescription"];
    assert!(!prescription["id"].as_str().unwrap().is_empty());
    assert_eq!(prescription["notes"], "");
    assert_eq!(prescription["medicines"].as_array().unwrap().len(), 2);
    assert_eq!(prescription["medicines"][0]["name"], "Paracetamol");
    assert_eq!(count_prescriptions(&state.pool).await, 1);
}

#[tokio::test]
async fn test_created_prescription_appears_in_patient_history() {
    let state = create_test_app_state().await;
    let patient_id = create_test_user(&state.pool, "+15551230001", "Asha", "PATIENT").await;
    let doctor_id = create_test_user(&state.pool, "+15551230002", "Dr. Rao", "DOCTOR").await;
    let appointment_id =
        create_test_appointment(&state.pool, patient_id, doctor_id, "2024-05-01T10:00Z", 0).await;
    let app = build_router(state.clone());

    let (_, created) = post_json(
        &app,
        "/api/prescriptions/create",
        json!({
            "appointmentId": appointment_id.to_string(),
            "patientId": patient_id.to_string(),
            "doctorId": doctor_id.to_string(),
            "medicines": [{"name": "Paracetamol", "dosage": "500mg"}],
            "notes": "Plenty of fluids",
        }),
    )
    .await;

    let (status, history) =
        get_json(&app, &format!("/api/prescriptions/patient/{}", patient_id)).await;

    assert_eq!(status, StatusCode::OK);
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], created["prescription"]["id"]);
    assert_eq!(entries[0]["notes"], "Plenty of fluids");
    assert_eq!(entries[0]["medicines"][0]["dosage"], "500mg");
}

#[tokio::test]
async fn test_patient_with_no_prescriptions_returns_empty_list() {
    let state = create_test_app_state().await;
    let patient_id = create_test_user(&state.pool, "+15551230001", "Asha", "PATIENT").await;
    let app = build_router(state);

    let (status, history) =
        get_json(&app, &format!("/api/prescriptions/patient/{}", patient_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 0);
}
