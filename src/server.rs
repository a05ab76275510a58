//! Gemini Proxy Server
//!
//! Exposes the prompt proxy over HTTP:
//!
//! ```text
//! POST    /, /api/gemini   - Forward prompt to Gemini (text or TTS)
//! OPTIONS /, /api/gemini   - CORS preflight
//! GET     /health          - Health check
//! ```
//!
//! Successful responses carry `Access-Control-Allow-Origin: *`; the preflight
//! handler answers any origin for `POST` with a `Content-Type` header.

use crate::config::ProxyConfig;
use crate::proxy::PromptProxy;
use crate::error::ProxyError;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

// ============================================================================
// /api/gemini ENDPOINT
// ============================================================================

/// POST - Forward a prompt to Gemini
///
/// Takes the raw body so the API key check runs before any body validation.
/// A body that cannot be read (e.g. over the default 2 MiB limit) still gets
/// the key check first, then counts as a missing prompt.
pub async fn generate(
    State(proxy): State<Arc<PromptProxy>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => proxy.handle(&body).await,
        Err(rejection) => proxy.require_api_key().and_then(|_| {
            warn!("Rejecting request: {}", rejection.body_text());
            Err(ProxyError::PromptRequired)
        }),
    };

    match result {
        Ok(data) => (
            StatusCode::OK,
            [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(data),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// OPTIONS - CORS preflight
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

// ============================================================================
// /health ENDPOINT
// ============================================================================

pub async fn health_check() -> &'static str {
    "OK"
}

// ============================================================================
// SERVER STARTUP
// ============================================================================

pub fn router(proxy: Arc<PromptProxy>) -> Router {
    Router::new()
        .route("/", post(generate).options(preflight))
        .route("/api/gemini", post(generate).options(preflight))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(proxy)
}

/// One boxed banner line; long values are cut to keep the right edge aligned.
fn banner_row(label: &str, value: &str) -> String {
    format!("║  {:<14}{:45.45} ║", label, value)
}

pub async fn run_server(config: ProxyConfig, host: &str, port: u16) -> anyhow::Result<()> {
    if config.configured_api_key().is_none() {
        warn!("GEMINI_API_KEY is not set; every prompt request will fail with 500");
    }

    let text_model = config.text_model.clone();
    let tts_model = config.tts_model.clone();
    let app = router(Arc::new(PromptProxy::new(config)));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("╔══════════════════════════════════════════════════════════════╗");
    info!("║                      Gemini API Proxy                        ║");
    info!("╠══════════════════════════════════════════════════════════════╣");
    info!("{}", banner_row("Listening on:", &addr));
    info!("{}", banner_row("Text model:", &text_model));
    info!("{}", banner_row("TTS model:", &tts_model));
    info!("╠══════════════════════════════════════════════════════════════╣");
    info!("║  Endpoints:                                                  ║");
    info!("║    POST    /api/gemini - Forward prompt to Gemini            ║");
    info!("║    OPTIONS /api/gemini - CORS preflight                      ║");
    info!("║    GET     /health     - Health check                        ║");
    info!("╚══════════════════════════════════════════════════════════════╝");

    axum::serve(listener, app).await?;

    Ok(())
}
