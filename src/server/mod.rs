//! Shell server implementation
//!
//! Wires configuration, locale validation, metadata resolution, and shell
//! rendering into an axum HTTP server. Each request is handled
//! independently; the only shared state is the immutable [`AppState`].

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::locale::LocaleSet;
use crate::metadata::MetadataResolver;
use crate::shell::ShellRenderer;

mod routes;

pub use routes::create_router;

// ============================================================================
// App State
// ============================================================================

/// Shared application state
///
/// Everything in here is immutable after startup; handlers clone the state
/// and never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Supported-locale set
    pub supported: Arc<LocaleSet>,

    /// Metadata resolver
    pub resolver: Arc<MetadataResolver>,

    /// Shell renderer
    pub renderer: Arc<ShellRenderer>,

    /// Server start time
    pub start_time: Instant,
}

// ============================================================================
// Shell Server
// ============================================================================

/// Main shell server
pub struct ShellServer {
    config: AppConfig,
    state: AppState,
}

impl ShellServer {
    /// Create a new shell server from validated configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let supported = Arc::new(LocaleSet::new(&config.site.locales)?);
        let resolver = Arc::new(MetadataResolver::new(
            &config.site.root_domain,
            (*supported).clone(),
        ));
        let renderer = Arc::new(ShellRenderer::new(&config.site)?);

        let state = AppState {
            config: Arc::new(config.clone()),
            supported,
            resolver,
            renderer,
            start_time: Instant::now(),
        };

        Ok(Self { config, state })
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.server.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        if self.config.server.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Start the server
    pub async fn start(&self) -> Result<()> {
        let router = self.build_router();
        let addr = self.config.server.bind_address;

        tracing::info!("Starting shell server on {}", addr);

        let listener = bind(addr).await?;
        axum::serve(listener, router).await.map_err(Error::Serve)?;

        Ok(())
    }

    /// Start with graceful shutdown
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let router = self.build_router();
        let addr = self.config.server.bind_address;

        tracing::info!("Starting shell server on {} (with graceful shutdown)", addr);

        let listener = bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(Error::Serve)?;

        tracing::info!("Shell server shutdown complete");
        Ok(())
    }

    /// Get server info
    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            bind_address: self.config.server.bind_address,
            root_domain: self.config.site.root_domain.clone(),
            locales: self.config.site.locales.clone(),
            default_locale: self.config.site.default_locale.clone(),
            analytics_enabled: self.config.site.analytics_id.is_some(),
            cors_enabled: self.config.server.enable_cors,
            request_logging_enabled: self.config.server.enable_request_logging,
        }
    }
}

async fn bind(addr: SocketAddr) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })
}

/// Server information
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub bind_address: SocketAddr,
    pub root_domain: String,
    pub locales: Vec<String>,
    pub default_locale: String,
    pub analytics_enabled: bool,
    pub cors_enabled: bool,
    pub request_logging_enabled: bool,
}

impl ServerInfo {
    /// Format as display string
    pub fn display(&self) -> String {
        format!(
            "Shell Server\n\
             {:-<40}\n\
             Bind Address: {}\n\
             Root Domain: {}\n\
             Locales: {}\n\
             Default Locale: {}\n\
             Analytics: {}\n\
             CORS: {}\n\
             Request Logging: {}",
            "",
            self.bind_address,
            self.root_domain,
            self.locales.join(", "),
            self.default_locale,
            if self.analytics_enabled { "enabled" } else { "disabled" },
            if self.cors_enabled { "enabled" } else { "disabled" },
            if self.request_logging_enabled { "enabled" } else { "disabled" }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let config = AppConfig::default();
        let server = ShellServer::new(config);
        assert!(server.is_ok());
    }

    #[test]
    fn test_server_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.site.locales.clear();
        assert!(ShellServer::new(config).is_err());
    }

    #[test]
    fn test_server_info() {
        let config = AppConfig::default();
        let server = ShellServer::new(config).unwrap();
        let info = server.info();

        assert_eq!(info.root_domain, "example.com");
        assert_eq!(info.default_locale, "en");
        assert!(!info.analytics_enabled);
        assert!(info.cors_enabled);

        let display = info.display();
        assert!(display.contains("example.com"));
        assert!(display.contains("en, es, ko"));
    }

    #[test]
    fn test_state_components() {
        let config = AppConfig::default();
        let server = ShellServer::new(config).unwrap();
        let state = server.state();

        assert_eq!(state.supported.len(), 3);
        assert!(state.supported.contains("ko"));
        assert!(!state.supported.contains("fr"));
    }
}
