//! Per-request context
//!
//! One [`RequestContext`] exists per handled request and is threaded
//! explicitly through metadata resolution and shell rendering. Nothing in it
//! is persisted or shared between requests.

use axum::http::HeaderMap;

use crate::locale::Locale;

/// Header carrying the originally invoked path, set by the fronting proxy
pub const INVOKED_PATH_HEADER: &str = "x-invoke-path";

/// Transient per-request data: the validated locale and the originally
/// invoked path used for canonical URL construction
#[derive(Debug, Clone)]
pub struct RequestContext {
    locale: Locale,
    invoked_path: String,
}

impl RequestContext {
    /// Build a context from a validated locale and an invoked path
    pub fn new(locale: Locale, invoked_path: impl Into<String>) -> Self {
        Self {
            locale,
            invoked_path: invoked_path.into(),
        }
    }

    /// Build a context from request headers
    ///
    /// A missing or non-UTF-8 `x-invoke-path` header defaults to the empty
    /// path, which canonicalizes to the site root.
    pub fn from_headers(locale: Locale, headers: &HeaderMap) -> Self {
        let invoked_path = headers
            .get(INVOKED_PATH_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        Self {
            locale,
            invoked_path,
        }
    }

    /// The validated request locale
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The originally invoked path, possibly empty
    pub fn invoked_path(&self) -> &str {
        &self.invoked_path
    }
}
