//! tests/api/api_info.rs

use crate::helpers::spawn_app;

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn root_returns_the_endpoint_catalog() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.get_api_info().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(payload["endpoints"]["health"], "/health");
    assert_eq!(payload["endpoints"]["users"]["create"], "POST /api/users");
}
