//! Pubtrawl: a keyword-driven publications directory crawler
//!
//! This crate walks the paginated result listing of a research portal's
//! publications search, extracts one record per authored result, and
//! aggregates everything into a snapshot that can be exported as CSV.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

pub use crawler::{FetchError, NavigationError};
pub use output::OutputError;

/// Main error type for Pubtrawl operations
#[derive(Debug, Error)]
pub enum TrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The crawl could not start; no page was processed.
    #[error("Session initialization failed: {0}")]
    SessionInit(String),

    /// The first listing page could not be fetched.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector for '{name}': {message}")]
    InvalidSelector { name: String, message: String },
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Cannot resolve '{href}' against {base}")]
    Unresolvable { href: String, base: String },
}

/// Result type alias for Pubtrawl operations
pub type Result<T> = std::result::Result<T, TrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlOutcome, PaginationDriver};
pub use state::{CrawlSession, CrawlSnapshot, PublicationRecord, TerminationReason, VisitLedger};
