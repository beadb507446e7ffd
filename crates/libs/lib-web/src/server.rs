//! # Server Setup
//!
//! Tracing initialisation, route registration, and HTTP server startup with
//! graceful shutdown.

// region: --- Imports
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::FromRef,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use lib_auth::TokenManager;
use lib_core::{create_pool, run_migrations, Config, SqliteStore};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::handlers;
use crate::middleware::{handle_panic, log_requests, require_auth, stamp_req, RequestStamp};
use crate::services::CompanyService;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CompanyService>,
}

impl FromRef<AppState> for Arc<CompanyService> {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}
// endregion: --- AppState

// region: --- Tracing
/// Install the global `fmt` subscriber, filtered by `LOG_LEVEL`.
///
/// Accepts `trace`, `debug`, `info`, `warn` or `error`; anything else falls
/// back to `info`.
pub fn init_tracing() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => log_level.as_str(),
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))?;

    info!("Log level: {}", level);
    Ok(())
}
// endregion: --- Tracing

// region: --- Server Setup
/// Load configuration, open the store, and serve until Ctrl-C or SIGTERM.
pub async fn start_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    info!("COMPANY API STARTING");

    let config = Config::from_env()?;
    config.validate()?;

    info!("Connecting to database: {}", config.database_url);
    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    info!("Migrations complete");

    let tokens = TokenManager::new(&config.jwt_secret, config.access_token_ttl_secs)?;
    let service = Arc::new(CompanyService::new(
        Arc::new(SqliteStore::new(pool.clone())),
        tokens,
    ));

    let app = create_router(AppState { service });

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("SERVER READY: http://{}", bind_address);
    log_server_info();

    let grace = Duration::from_secs(config.shutdown_timeout_secs);
    serve_until_shutdown(listener, app, grace).await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Build the router with every route and the middleware stack.
///
/// Layers run outermost first: panic recovery, request stamp, trace span,
/// latency logging, then the auth gate.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/companies",
            post(handlers::company::create_company).put(handlers::company::update_company),
        )
        .route(
            "/v1/companies/{id}",
            get(handlers::company::get_company).delete(handlers::company::delete_company),
        )
        .route("/v1/users", post(handlers::users::create_user))
        .route("/v1/login", post(handlers::users::login))
        .route("/health", get(handlers::health))
        .layer(from_fn_with_state(state.clone(), require_auth))
        .layer(from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(stamp_req))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
// endregion: --- Server Setup

// region: --- Shutdown
/// Serve until a shutdown signal, then give in-flight requests `grace` to
/// finish before dropping them.
async fn serve_until_shutdown(
    listener: TcpListener,
    app: Router,
    grace: Duration,
) -> anyhow::Result<()> {
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = signalled_tx.send(());
            })
            .await
    });

    tokio::select! {
        joined = &mut server => return Ok(joined??),
        _ = signalled_rx => {
            info!("Shutdown signal received, draining for up to {:?}", grace);
        }
    }

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => Ok(joined??),
        Err(_) => {
            warn!("Graceful shutdown timed out after {:?}, aborting", grace);
            server.abort();
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
// endregion: --- Shutdown

fn log_server_info() {
    info!(" COMPANIES:");
    info!("   • GET    /v1/companies/{{id}}");
    info!("   • POST   /v1/companies        (Bearer token)");
    info!("   • PUT    /v1/companies        (Bearer token)");
    info!("   • DELETE /v1/companies/{{id}}  (Bearer token)");
    info!(" USERS:");
    info!("   • POST   /v1/users");
    info!("   • POST   /v1/login");
    info!(" HEALTH:");
    info!("   • GET    /health");
}
