//! src/routes/users/post.rs

use actix_web::{web, HttpResponse};
use anyhow::Context;
use sqlx::postgres::PgDatabaseError;
use sqlx::PgPool;

use crate::domain::{NewUser, User, UserEmail, UserName, ValidationError};
use crate::error::{ApiResult, Error};

/// Checks if err results from inserting the same email twice
fn is_duplicate_email_err(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.is_unique_violation() {
            if let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() {
                if pg_err.table() == Some("users") && pg_err.constraint() == Some("users_email_key")
                {
                    return true;
                }
            }
        }
    }
    false
}

#[derive(serde::Deserialize)]
pub struct CreateUserBody {
    email: Option<String>,
    name: Option<String>,
}

impl TryFrom<CreateUserBody> for NewUser {
    type Error = ValidationError;

    fn try_from(value: CreateUserBody) -> Result<Self, Self::Error> {
        let email = UserEmail::parse(value.email.unwrap_or_default())?;
        let name = value.name.and_then(UserName::parse);
        Ok(Self { email, name })
    }
}

#[tracing::instrument(
    name = "Creating a new user.",
    skip(body, pool),
    fields(
        user_email = %body.email.as_deref().unwrap_or_default()
    )
)]
pub async fn create_user(
    body: web::Json<CreateUserBody>,
    pool: web::Data<PgPool>,
) -> ApiResult<HttpResponse> {
    let new_user: NewUser = body.into_inner().try_into()?;
    // Lookup before insert gives a deterministic 409 on the sequential
    // duplicate; the unique constraint on `users.email` closes the
    // concurrent window the lookup cannot see.
    let existing_user = find_user_by_email(pool.as_ref(), &new_user.email)
        .await
        .context("Failed to check for an existing user with the same email.")?;
    if existing_user.is_some() {
        return Err(Error::ConflictError);
    }
    let user = match insert_user(pool.as_ref(), &new_user).await {
        Ok(user) => user,
        Err(err) if is_duplicate_email_err(&err) => return Err(Error::ConflictError),
        Err(err) => {
            return Err(anyhow::Error::from(err)
                .context("Failed to insert new user into the database.")
                .into())
        }
    };
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "User created successfully",
        "user": user,
    })))
}

#[tracing::instrument(name = "Looking up a user by email in the database.", skip(pool))]
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &UserEmail,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, name, created_at, updated_at FROM users \
        WHERE email = $1",
    )
    .bind(email.as_ref())
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })
}

#[tracing::instrument(name = "Saving new user details in the database.", skip(pool, new_user))]
pub async fn insert_user(pool: &PgPool, new_user: &NewUser) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, name) VALUES ($1, $2) \
        RETURNING id, email, name, created_at, updated_at",
    )
    .bind(new_user.email.as_ref())
    .bind(new_user.name.as_ref().map(|n| n.as_ref()))
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })
}
