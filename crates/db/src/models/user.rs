//! User identity model.
//!
//! Rows are provisioned by the external authentication service; this
//! backend only reads them as the FK anchor for prompt ownership.

use serde::Serialize;
use sqlx::FromRow;

use promptly_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub created_at: Timestamp,
}
