//! src/routes/health_check.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::configuration::Environment;
use crate::startup::StartTime;

/// Liveness probe: a trivial round-trip query against the connection pool.
/// Healthy if and only if the round-trip succeeds.
#[tracing::instrument(name = "Checking service health.", skip(pool, start_time))]
pub async fn health_check(
    pool: web::Data<PgPool>,
    start_time: web::Data<StartTime>,
) -> HttpResponse {
    match sqlx::query("SELECT 1").execute(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "timestamp": Utc::now(),
            "uptime": start_time.0.elapsed().as_secs_f64(),
            "database": "connected",
            "environment": Environment::detect().as_str(),
        })),
        Err(e) => {
            tracing::error!("Health check round-trip failed: {:?}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "timestamp": Utc::now(),
                "database": "disconnected",
                "error": e.to_string(),
            }))
        }
    }
}
