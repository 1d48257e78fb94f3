use axum::Json;

use crate::models::HealthResponse;

/// Health check endpoint; the body is constant.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Chatbot API is running",
    })
}
