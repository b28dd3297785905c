//! Unified error handling for the vitrine crate
//!
//! The shell has exactly one domain error: a request carrying a locale that
//! is not in the configured supported set. Everything else (template
//! registration or rendering, I/O, server lifecycle) is infrastructure
//! failure and bubbles up through [`Result`] untouched.

use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Unified error type for the vitrine crate
#[derive(Error, Debug)]
pub enum Error {
    /// Request locale is not in the configured supported set.
    ///
    /// This is the only error the shell handles itself: the request
    /// terminates with a not-found outcome before any metadata or
    /// rendering work happens.
    #[error("unsupported locale: {locale}")]
    UnsupportedLocale { locale: String },

    /// Configuration errors
    #[error("config error: {0}")]
    Config(String),

    /// Template registration errors
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template rendering errors
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to bind the listen address
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// Server runtime error
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unsupported-locale error
    pub fn unsupported_locale(locale: impl Into<String>) -> Self {
        Self::UnsupportedLocale {
            locale: locale.into(),
        }
    }

    /// Whether this error terminates the request as a not-found outcome
    /// rather than a server failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnsupportedLocale { .. })
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
