use crate::{DbError, Result as DbErrorResult};

use idp_core::{ErrorLocation, Identity, NewIdentity};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct IdentityRow {
    id: String,
    name: String,
    username: String,
    email: String,
    password_hash: String,
    created_at: i64,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: IdentityRow) -> DbErrorResult<Self> {
        let id = Uuid::parse_str(&row.id).map_err(|e| DbError::InvalidRow {
            message: format!("identities.id '{}' is not a UUID: {}", row.id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let created_at =
            DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| DbError::InvalidRow {
                message: format!("identities.created_at {} is out of range", row.created_at),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Identity {
            id,
            name: row.name,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            created_at,
        })
    }
}

/// Read/insert access to the `identities` table
pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity, assigning its id and creation time.
    ///
    /// Returns `DbError::UniqueViolation` when the username is already taken.
    pub async fn create(&self, new_identity: NewIdentity) -> DbErrorResult<Identity> {
        let location = Location::caller();

        let now = Utc::now().timestamp();
        let created_at = DateTime::from_timestamp(now, 0).unwrap_or_else(Utc::now);
        let identity = new_identity.into_identity(Uuid::new_v4(), created_at);

        let result = sqlx::query(
            r#"
              INSERT INTO identities (id, name, username, email, password_hash, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.name)
        .bind(&identity.username)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(now)
        .execute(&self.pool)
        .await;

        if let Err(source) = result {
            let unique_violation = matches!(
                &source,
                sqlx::Error::Database(db_error) if db_error.is_unique_violation()
            );

            return Err(if unique_violation {
                DbError::UniqueViolation {
                    field: "username".to_string(),
                    location: ErrorLocation::from(location),
                }
            } else {
                DbError::Sqlx {
                    source,
                    location: ErrorLocation::from(location),
                }
            });
        }

        Ok(identity)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, name, username, email, password_hash, created_at
              FROM identities
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, name, username, email, password_hash, created_at
              FROM identities
              WHERE username = ?
              "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Identity::try_from).transpose()
    }

    pub async fn exists_by_username(&self, username: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identities WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identities")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
