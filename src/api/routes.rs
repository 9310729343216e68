//! Application route configuration.

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::{AppError, AppResult};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/users", user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy letting the browser front end at `origin` call the API.
pub fn cors_layer(origin: &str) -> AppResult<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| AppError::configuration(format!("Invalid allowed origin {}: {}", origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
