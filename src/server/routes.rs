//! HTTP routes and handlers for the shell server
//!
//! The shell routes mirror the locale-segmented URL layout: `/{locale}` and
//! `/{locale}/{*path}` both render the document shell, the bare root
//! redirects to the default locale, and `/health` serves a JSON health
//! check.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::Error;
use crate::i18n::TranslationBundle;
use crate::locale::Locale;
use crate::request::RequestContext;

use super::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            // Terminal not-found outcome: no content, no metadata
            tracing::debug!(error = %self, "request terminated as not found");
            StatusCode::NOT_FOUND.into_response()
        } else {
            tracing::error!(error = %self, "shell request failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Create the shell router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .route("/{locale}", get(shell_root))
        .route("/{locale}/{*path}", get(shell_page))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// Redirect the bare root to the default locale
async fn root_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&format!("/{}", state.config.site.default_locale))
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: uptime,
    })
}

/// Render the shell for a locale root (`/{locale}`)
async fn shell_root(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
) -> Result<Html<String>, Error> {
    render_shell(&state, &locale, &headers)
}

/// Render the shell for a nested path (`/{locale}/{*path}`)
async fn shell_page(
    State(state): State<AppState>,
    Path((locale, _path)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Html<String>, Error> {
    render_shell(&state, &locale, &headers)
}

/// Shared shell rendering flow
///
/// Locale validation happens first; on rejection nothing is rendered and no
/// metadata is computed. All other failures bubble up as server errors.
fn render_shell(
    state: &AppState,
    raw_locale: &str,
    headers: &HeaderMap,
) -> Result<Html<String>, Error> {
    let locale = Locale::parse(raw_locale, &state.supported)?;
    let ctx = RequestContext::from_headers(locale, headers);
    let bundle = TranslationBundle::new(ctx.locale().clone());

    let metadata = state.resolver.resolve(&ctx, &bundle, None);
    let content = page_content(&bundle);
    let html = state.renderer.render(&ctx, &bundle, &metadata, &content)?;

    tracing::debug!(
        locale = %ctx.locale(),
        path = %ctx.invoked_path(),
        "rendered shell"
    );

    Ok(Html(html))
}

/// Localized page content embedded in the shell
///
/// The shell treats this as an opaque pre-rendered fragment.
fn page_content(bundle: &TranslationBundle) -> String {
    format!(
        "<main>\n  <h1>{}</h1>\n  <p>{}</p>\n</main>",
        bundle.message("shell.welcome.heading"),
        bundle.message("shell.welcome.body")
    )
}

// ============================================================================
// Tests
// ============================================================================
