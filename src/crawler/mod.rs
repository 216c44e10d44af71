//! Crawler module for walking a paginated publications listing
//!
//! This module contains the core crawling logic, including:
//! - Fetching listing pages with retry for transient failures
//! - Extracting and classifying publication entries
//! - Discovering and following the next-page control
//! - Overall crawl coordination and termination

mod driver;
mod extractor;
mod fetcher;
mod navigator;

pub use driver::{CrawlOutcome, DriverSettings, Pacing, PaginationDriver, RetryPolicy};
pub use extractor::{EntryOutcome, PageExtraction, RecordExtractor};
pub use fetcher::{build_http_client, user_agent_string, Fetch, FetchError, HttpFetcher};
pub use navigator::{MarkupNavigator, Navigate, NavigationError, NextControl};

use crate::config::{validate, Config};
use crate::state::{CrawlSession, CrawlSnapshot, TerminationReason};
use crate::url::build_search_url;
use crate::{ConfigError, TrawlError};
use scraper::Selector;
use tokio_util::sync::CancellationToken;

/// Everything a finished crawl hands to the export step
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub snapshot: CrawlSnapshot,
    pub outcome: CrawlOutcome,
}

/// Runs a complete crawl for one search term
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration and build the listing URL for the query
/// 2. Acquire the HTTP client for the whole crawl
/// 3. Walk the result pages until the listing ends or the crawl is interrupted
/// 4. Release the client and return the final snapshot
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `search_query` - The term to search for
/// * `cancel` - Cancels the crawl; whatever was accepted is still returned
///
/// # Returns
///
/// * `Ok(CrawlReport)` - At least one listing page was reached, or the crawl
///   was stopped before the first fetch completed
/// * `Err(TrawlError)` - The configuration is invalid, the crawl could not
///   start, or the very first listing
///   page could not be fetched
///
/// # Example
///
/// ```no_run
/// use pubtrawl::config::Config;
/// use pubtrawl::crawler::crawl;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), pubtrawl::TrawlError> {
/// let report = crawl(&Config::default(), "machine learning", CancellationToken::new()).await?;
/// println!("{} results", report.snapshot.total_results);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    config: &Config,
    search_query: &str,
    cancel: CancellationToken,
) -> Result<CrawlReport, TrawlError> {
    validate(config)?;

    let query = search_query.trim();
    if query.is_empty() {
        return Err(TrawlError::SessionInit(
            "search query cannot be empty".to_string(),
        ));
    }

    let start_url = build_search_url(&config.site.base_url, &config.site.publications_path, query)
        .map_err(|e| TrawlError::SessionInit(format!("cannot build listing URL: {}", e)))?;

    let fetcher = HttpFetcher::from_user_agent(&config.user_agent)
        .map_err(|e| TrawlError::SessionInit(format!("cannot build HTTP client: {}", e)))?;
    let navigator = MarkupNavigator::new(&config.selectors.next, start_url.as_str())?;
    let extractor = RecordExtractor::new(&config.selectors, &config.site.publications_base())?;

    let mut driver = PaginationDriver::new(
        fetcher,
        navigator,
        extractor,
        DriverSettings::from_config(&config.crawler),
    )
    .with_cancellation(cancel);

    let mut session = CrawlSession::new(query);
    let outcome = driver.run(&mut session).await;
    // Releases the HTTP client on every path
    drop(driver);

    if outcome.pages_fetched == 0 {
        if let TerminationReason::FetchFailed { error, .. } = &outcome.reason {
            return Err(TrawlError::Fetch(error.clone()));
        }
    }

    Ok(CrawlReport {
        snapshot: session.finish(),
        outcome,
    })
}

/// Compiles a configured selector, naming it in the error
pub(crate) fn compile_selector(name: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        name: name.to_string(),
        message: e.to_string(),
    })
}
