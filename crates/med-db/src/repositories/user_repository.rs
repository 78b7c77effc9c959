//! User repository - identity rows keyed by phone number.
//!
//! The uniqueness constraint on `users.phone_number` is the source of truth
//! for identity. `find_or_create_by_phone` builds the login insert-or-fetch
//! on top of it: a lost insert race is converted into a second lookup, so
//! callers never observe a duplicate user or a raw constraint error.

use crate::{DbError, Result as DbErrorResult};

use med_core::{Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    phone_number: String,
    name: String,
    role: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<User> {
        Ok(User {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            phone_number: r.phone_number,
            name: r.name,
            role: Role::from_str(&r.role).map_err(|e| DbError::Initialization {
                message: format!("Invalid role in users.role: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(r.updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, phone_number, name, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.phone_number)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_phone(&self, phone_number: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, phone_number, name, role, created_at, updated_at
                FROM users
                WHERE phone_number = ?
            "#,
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, phone_number, name, role, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Look up the user for a verified phone number, creating the row on
    /// first contact. Returns the user plus `is_new = true` iff this call
    /// performed the insert.
    ///
    /// Two concurrent first logins can both see "not found" and race the
    /// insert; the unique constraint lets exactly one win. The loser's
    /// unique-violation turns into a second lookup returning the winner's
    /// row with `is_new = false`.
    pub async fn find_or_create_by_phone(
        &self,
        phone_number: &str,
        placeholder_name: &str,
    ) -> DbErrorResult<(User, bool)> {
        if let Some(user) = self.find_by_phone(phone_number).await? {
            return Ok((user, false));
        }

        let user = User::new(phone_number.to_string(), placeholder_name.to_string());
        match self.create(&user).await {
            Ok(()) => Ok((user, true)),
            Err(DbError::UniqueViolation { .. }) => {
                let user = self.find_by_phone(phone_number).await?.ok_or_else(|| {
                    DbError::Initialization {
                        message: "User row missing after losing the insert race".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                Ok((user, false))
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite role and name for the user with this phone number.
    /// Returns the number of rows touched; 0 means no such user exists and
    /// the caller must report the absence.
    pub async fn update_role_and_name(
        &self,
        phone_number: &str,
        role: Role,
        name: &str,
    ) -> DbErrorResult<u64> {
        let updated_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET role = ?, name = ?, updated_at = ?
                WHERE phone_number = ?
            "#,
        )
        .bind(role.as_str())
        .bind(name)
        .bind(updated_at)
        .bind(phone_number)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
