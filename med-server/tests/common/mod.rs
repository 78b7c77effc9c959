#![allow(dead_code)]

//! Test infrastructure for med-server API tests

use med_auth::DevTokenVerifier;
use med_server::AppState;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/med-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing. The dev verifier accepts `dev:<phone>`
/// tokens and rejects everything else.
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        verifier: Arc::new(DevTokenVerifier),
    }
}

/// Create a test user, returning its id
pub async fn create_test_user(pool: &SqlitePool, phone: &str, name: &str, role: &str) -> Uuid {
    let user_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO users (id, phone_number, name, role, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id.to_string())
    .bind(phone)
    .bind(name)
    .bind(role)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");

    user_id
}

/// Create a test doctor profile, returning its id
pub async fn create_test_doctor_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    name: &str,
    specialization: Option<&str>,
) -> Uuid {
    let doctor_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO doctors (id, user_id, name, specialization, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(doctor_id.to_string())
    .bind(user_id.to_string())
    .bind(name)
    .bind(specialization)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test doctor profile");

    doctor_id
}

/// Create a test appointment directly in storage, returning its id
pub async fn create_test_appointment(
    pool: &SqlitePool,
    patient_id: Uuid,
    doctor_id: Uuid,
    timeslot: &str,
    seconds_offset: i64,
) -> Uuid {
    let appointment_id = Uuid::new_v4();
    let at = chrono::Utc::now().timestamp() + seconds_offset;

    sqlx::query(
        "INSERT INTO appointments (id, patient_id, doctor_id, timeslot, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(appointment_id.to_string())
    .bind(patient_id.to_string())
    .bind(doctor_id.to_string())
    .bind(timeslot)
    .bind("PENDING")
    .bind(at)
    .bind(at)
    .execute(pool)
    .await
    .expect("Failed to create test appointment");

    appointment_id
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

pub async fn count_appointments(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM appointments")
        .fetch_one(pool)
        .await
        .expect("Failed to count appointments")
}

pub async fn count_prescriptions(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prescriptions")
        .fetch_one(pool)
        .await
        .expect("Failed to count prescriptions")
}

/// POST a JSON body and return status plus parsed response body
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// GET a path and return status plus parsed response body
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
