//! Output module for exporting crawl results
//!
//! This module handles:
//! - The `Exporter` interface consuming a finished crawl snapshot
//! - CSV export with the fixed column layout
//! - The console summary printed after a crawl

mod csv_export;
pub mod report;
mod traits;

pub use csv_export::{CsvExporter, CsvRow, CSV_HEADERS};
pub use report::{format_report, print_report};
pub use traits::{Exporter, OutputError, OutputResult};
