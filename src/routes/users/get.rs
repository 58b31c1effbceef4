//! src/routes/users/get.rs

use actix_web::{web, HttpResponse};
use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{User, UserId};
use crate::error::{ApiResult, Error};

#[tracing::instrument(name = "Listing all users.", skip(pool))]
pub async fn list_users(pool: web::Data<PgPool>) -> ApiResult<HttpResponse> {
    let users = fetch_all_users(pool.as_ref())
        .await
        .context("Failed to fetch users from the database.")?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "count": users.len(),
        "users": users,
    })))
}

#[tracing::instrument(name = "Getting a user by id.", skip(pool))]
pub async fn get_user_by_id(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let user_id = UserId::parse(path.into_inner())?;
    // An id which is not a UUID can never have been issued by the store.
    let user_id = Uuid::parse_str(user_id.as_ref()).map_err(|_| Error::NotFoundError)?;
    let user = fetch_user_by_id(pool.as_ref(), user_id)
        .await
        .context("Failed to fetch user from the database.")?
        .ok_or(Error::NotFoundError)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "user": user })))
}

#[tracing::instrument(name = "Fetching all users from the database.", skip(pool))]
pub async fn fetch_all_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, name, created_at, updated_at FROM users \
        ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })
}

#[tracing::instrument(name = "Fetching a user by id from the database.", skip(pool))]
pub async fn fetch_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, name, created_at, updated_at FROM users \
        WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })
}
