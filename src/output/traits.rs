//! Exporter trait and error types
//!
//! Exporters consume a finished crawl's snapshot and own the output format;
//! the crawl core never serializes anything itself.

use crate::state::CrawlSnapshot;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for export collaborators
pub trait Exporter {
    /// Writes the snapshot in the exporter's format
    ///
    /// # Arguments
    ///
    /// * `snapshot` - The read-only result of a crawl
    fn export(&self, snapshot: &CrawlSnapshot) -> OutputResult<()>;
}
