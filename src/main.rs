use qr_site::{ services::QrService, AppError, Config, Result };
use axum::{ Router, routing::get };
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "qr_site=debug,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| AppError::Config(e.to_string()))?;

    tracing::info!("Starting qr-site for base URL: {}", config.base_url);

    let config = Arc::new(config);
    let qr_service = Arc::new(QrService::new());

    // Create app state
    let app_state = qr_site::api::AppState::new(qr_service, config.clone());

    // Build application router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(qr_site::api::qr::index))
        .route("/qr/website", get(qr_site::api::qr::website_qr))
        .route("/qr/website/download", get(qr_site::api::qr::website_qr_download))
        .route("/qr/custom", get(qr_site::api::qr::custom_qr))
        .route("/qr/custom/download", get(qr_site::api::qr::custom_qr_download))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener
        ::bind(&addr).await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    axum::serve(listener, app).await.map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
