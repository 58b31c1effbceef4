//! src/domain/user.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted user record. `id` and both timestamps are generated by the
/// database; records are never updated or deleted after creation.
#[derive(Debug, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
