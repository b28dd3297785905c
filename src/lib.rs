//! vitrine - Locale-scoped page shell server
//!
//! A small HTTP service that serves a localized HTML document shell: it
//! validates the request locale against a configured allow-list, loads the
//! matching translation bundle, computes page metadata (title, description,
//! canonical URL, locale alternates), and renders a document shell that
//! carries locale, translations, and theme to nested content.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`locale`] - Supported-locale set and locale validation
//! - [`i18n`] - Translation bundles over the embedded catalogs
//! - [`request`] - Per-request context (locale, invoked path)
//! - [`metadata`] - Page metadata resolution
//! - [`shell`] - Document shell rendering
//! - [`server`] - HTTP surface (routing, handlers, lifecycle)
//!
//! # Example
//!
//! ```no_run
//! use vitrine::config::AppConfig;
//! use vitrine::server::ShellServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let server = ShellServer::new(config)?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

// Initialize rust-i18n at crate root level
rust_i18n::i18n!("locales", fallback = "en");

pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod metadata;
pub mod request;
pub mod server;
pub mod shell;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::error::{Error, Result};
    pub use crate::i18n::TranslationBundle;
    pub use crate::locale::{Locale, LocaleSet};
    pub use crate::metadata::{AlternateLink, PageMetadata};
    pub use crate::request::RequestContext;
    pub use crate::server::ShellServer;
    pub use crate::shell::ShellRenderer;
}

// Direct re-exports for convenience
pub use error::{Error, Result};
pub use locale::{Locale, LocaleSet};
