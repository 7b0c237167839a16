//! HTTP surface: router construction and the serve loop.

pub mod error;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::db::initialize::open_store;
use crate::errors::{AppError, AppResult};
use state::AppState;

/// Build the application router with its middleware stack.
pub fn build_router(state: AppState) -> AppResult<Router> {
    let cors = build_cors_layer(&state.config.cors_origins)?;

    Ok(Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state))
}

/// `*` allows any origin; otherwise only the listed ones.
fn build_cors_layer(origins: &[String]) -> AppResult<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let parsed = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| AppError::Config(format!("Invalid CORS origin '{o}': {e}")))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(parsed)))
}

/// Prepare the store, bind and serve until SIGINT/SIGTERM.
pub async fn serve(config: Config) -> AppResult<()> {
    let db_path = config.database.clone();
    tokio::task::spawn_blocking(move || open_store(&db_path).map(|_| ()))
        .await
        .map_err(|e| AppError::Other(format!("store init task failed: {e}")))??;
    tracing::info!(database = %config.database, "Database ready");

    let ip = config
        .host
        .parse()
        .map_err(|_| AppError::Config(format!("Invalid HOST address '{}'", config.host)))?;
    let addr = SocketAddr::new(ip, config.port);

    let app = build_router(AppState::new(config))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
