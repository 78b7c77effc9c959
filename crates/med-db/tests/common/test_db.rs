use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    // Create in-memory database connection options
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    // Create pool
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row to serve as a foreign key target
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid, name: &str) {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO users (id, phone_number, name, role, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id.to_string())
    .bind(format!("+1-{}", user_id))
    .bind(name)
    .bind("PATIENT")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");
}

/// Inserts a doctor profile row, returning its id
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
