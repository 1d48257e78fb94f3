//! Application startup and lifecycle management.

use crate::config::ChatbotConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{request_id_middleware, REQUEST_ID_HEADER};
use crate::models::PresetPrompt;
use crate::services::prompt::PRESET_PROMPTS;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::TextProvider;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state, immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ChatbotConfig,
    pub text_provider: Arc<dyn TextProvider>,
    pub prompts: &'static [PresetPrompt],
}

/// Build the router with all routes and middleware applied.
pub fn build_router(state: AppState) -> Router {
    // The chatbot widget is embedded on storefront pages served from other
    // origins, so CORS stays wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chatbot/prompts", get(handlers::list_prompts))
        .route("/api/chatbot/ask", post(handlers::ask_question))
        .route("/api/chatbot/health", get(handlers::health_check))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the given configuration, selecting the
    /// Gemini provider when an API key is configured and the mock otherwise.
    pub async fn build(config: ChatbotConfig) -> Result<Self, AppError> {
        let text_provider: Arc<dyn TextProvider> = if config.google.api_key.is_empty() {
            tracing::warn!("GOOGLE_API_KEY not set, using mock text provider");
            Arc::new(MockTextProvider::new(true))
        } else {
            tracing::info!(
                model = %config.models.text_model,
                "Initialized Gemini text provider"
            );
            Arc::new(GeminiTextProvider::new(GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.models.text_model.clone(),
            }))
        };

        Self::build_with_provider(config, text_provider).await
    }

    /// Build the application with an explicit provider (used by tests).
    pub async fn build_with_provider(
        config: ChatbotConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            text_provider,
            prompts: &PRESET_PROMPTS,
        };

        let app = build_router(state);

        // Port 0 = random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
