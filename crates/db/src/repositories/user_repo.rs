//! Repository for the `users` table.
//!
//! User rows are provisioned by the external auth service; this crate only
//! needs lookups plus an insert used by tests and provisioning scripts.

use sqlx::PgPool;

use promptly_core::types::DbId;

use crate::models::user::User;

const COLUMNS: &str = "id, email, name, created_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn create(pool: &PgPool, email: &str, name: &str) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
