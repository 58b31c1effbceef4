//! src/error.rs

use crate::configuration::Environment;
use crate::domain::ValidationError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

pub type ApiResult<T> = Result<T, Error>;

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("User with this email already exists.")]
    ConflictError,
    #[error("User not found.")]
    NotFoundError,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ValidationError(_) => StatusCode::BAD_REQUEST,
            Error::ConflictError => StatusCode::CONFLICT,
            Error::NotFoundError => StatusCode::NOT_FOUND,
            Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::UnexpectedError(_) => {
                tracing::error!(
                    error.cause_chain = ?self,
                    error.message = %self,
                    "Unexpected error while handling request"
                );
                let mut body = serde_json::json!({ "error": "Internal server error" });
                // Raw error detail is only exposed in a development-like
                // environment to avoid leaking internals in production.
                if matches!(Environment::detect(), Environment::Local) {
                    body["message"] = serde_json::Value::String(self.to_string());
                }
                HttpResponse::build(self.status_code()).json(body)
            }
            _ => HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "error": self.to_string() })),
        }
    }
}
