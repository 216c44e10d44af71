//! Console summary of a finished crawl
//!
//! This module renders the totals shown to the user once a crawl has
//! stopped and its results have been written.

use crate::crawler::CrawlReport;
use std::fmt::Write;
use std::path::Path;

/// Renders the crawl summary
///
/// # Arguments
///
/// * `report` - The finished crawl
/// * `csv_path` - Where the results were written
///
/// # Returns
///
/// The multi-line summary text
pub fn format_report(report: &CrawlReport, csv_path: &Path) -> String {
    let snapshot = &report.snapshot;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "=== Crawl Summary ===\n");
    let _ = writeln!(out, "Search query: {}", snapshot.search_query);
    let _ = writeln!(out, "Results written to: {}", csv_path.display());
    let _ = writeln!(out);

    let _ = writeln!(out, "Results:");
    let _ = writeln!(out, "  Total results: {}", snapshot.total_results);
    let _ = writeln!(out, "  With authors: {}", snapshot.accepted_count);
    let _ = writeln!(out, "  Without authors: {}", snapshot.unclassified_count);
    let _ = writeln!(out);

    let _ = writeln!(out, "Pages:");
    let _ = writeln!(out, "  Pages visited: {}", snapshot.pages_visited());
    let _ = writeln!(out, "  Fetch attempts: {}", report.outcome.fetch_attempts);
    if let Some(seconds) = snapshot.duration_seconds() {
        let _ = writeln!(out, "  Duration: {}s", seconds);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Stopped: {}", report.outcome.reason);
    if report.outcome.reason.is_interrupted() {
        let _ = writeln!(out, "  (partial results)");
    }

    out
}

/// Prints the crawl summary to stdout
pub fn print_report(report: &CrawlReport, csv_path: &Path) {
    print!("{}", format_report(report, csv_path));
}
