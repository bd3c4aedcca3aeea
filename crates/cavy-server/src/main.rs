use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod config;
mod models;
mod routes;

use adapters::OpenAiCompletion;
use cavy::{CompletionOptions, CompletionProvider, ResponderRouter};
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ResponderRouter>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Cavy API is running - the herd is listening for wheeks".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🐹 Cavy API initializing...");

    let config = ServerConfig::from_env()?;
    let provider = Arc::new(OpenAiCompletion::new(&config));
    tracing::info!(
        "🥕 Completion provider: {} ({}) - max_tokens={}, temperature={}",
        provider.provider_name(),
        provider.model_id(),
        config.max_tokens,
        config.temperature
    );
    let options = CompletionOptions {
        max_tokens: Some(config.max_tokens),
        temperature: Some(config.temperature),
    };
    let state = AppState {
        router: Arc::new(ResponderRouter::new(provider, options)),
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::chat::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Cavy API ready on {} - the herd awaits", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
