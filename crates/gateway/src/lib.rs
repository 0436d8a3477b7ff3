//! HTTP API gateway for Supperplan.
//!
//! Serves the embedded frontend, a health check, the access-code check, and
//! the two generation endpoints. Every generation request awaits exactly one
//! upstream call; the shared state is read-only.
//!
//! Built on Axum.

pub mod access;
pub mod api;
pub mod frontend;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Method, header},
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use supperplan_config::AppConfig;
use supperplan_planner::Planner;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Request bodies larger than this are rejected with 413.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared application state for the gateway.
pub struct GatewayState {
    /// The passphrase clients must present
    pub access_code: String,
    pub planner: Arc<Planner>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl GatewayState {
    pub fn new(access_code: impl Into<String>, planner: Arc<Planner>) -> Self {
        Self {
            access_code: access_code.into(),
            planner,
            started_at: chrono::Utc::now(),
        }
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// Layers applied:
/// - CORS restricted to `cors_origins` (empty = same-origin only)
/// - Request body size limit (1 MB)
/// - HTTP trace logging
pub fn build_router(state: SharedState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/verify", post(api::verify_handler))
        .route("/api/generate-menu", post(api::generate_menu_handler))
        .route("/api/generate-cookbook", post(api::generate_cookbook_handler))
        .with_state(state)
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(cors_origins))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Start the gateway HTTP server and serve until Ctrl-C.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr();

    let planner = Arc::new(Planner::from_config(&config));
    let state = Arc::new(GatewayState::new(config.access_code.clone(), planner.clone()));
    let app = build_router(state, &config.gateway.cors_origins);

    info!(
        addr = %addr,
        model = planner.model(),
        provider_configured = planner.is_configured(),
        "Gateway starting"
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    provider_configured: bool,
    uptime_secs: i64,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider_configured: state.planner.is_configured(),
        uptime_secs: (chrono::Utc::now() - state.started_at).num_seconds(),
    })
}
