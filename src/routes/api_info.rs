//! src/routes/api_info.rs

use actix_web::HttpResponse;

/// Static catalog of the available endpoints. No side effects.
pub async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "User Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "users": {
                "create": "POST /api/users",
                "getAll": "GET /api/users",
                "getById": "GET /api/users/:id",
            },
        },
    }))
}
