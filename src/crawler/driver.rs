//! Pagination driver - the crawl loop
//!
//! This module walks the result listing one page at a time:
//! - Fetches the current page (with bounded retries for transient failures)
//! - Hands the markup to the record extractor and folds the outcome into the session
//! - Looks for the next control and follows it, with fixed politeness waits
//! - Stops at the end of results, on a fetch failure, at the page ceiling,
//!   on cancellation, or when the crawl timeout elapses
//!
//! Every suspension point (fetches and waits) races against the cancellation
//! token and the deadline, so an interrupted crawl still leaves everything
//! accepted so far in the session.

use crate::config::CrawlerConfig;
use crate::crawler::extractor::{EntryOutcome, RecordExtractor};
use crate::crawler::fetcher::Fetch;
use crate::crawler::navigator::Navigate;
use crate::state::{CrawlSession, CrawlState, PageTally, PublicationRecord, TerminationReason};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Fixed waits around advancing to the next page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Before looking for the next control
    pub discovery: Duration,
    /// Between finding the control and activating it
    pub pre_click: Duration,
    /// After activation, before fetching the next page
    pub settle: Duration,
}

impl Pacing {
    /// No waits at all
    pub fn none() -> Self {
        Self {
            discovery: Duration::ZERO,
            pre_click: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

/// How transient fetch failures are retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub retries: u32,
    /// Fixed pause between attempts
    pub delay: Duration,
}

/// Limits and timings for a driver run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSettings {
    pub max_pages: u32,
    pub pacing: Pacing,
    pub retry: RetryPolicy,
    pub timeout: Option<Duration>,
}

impl DriverSettings {
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            pacing: Pacing {
                discovery: Duration::from_millis(config.discovery_delay_ms),
                pre_click: Duration::from_millis(config.pre_click_delay_ms),
                settle: Duration::from_millis(config.settle_delay_ms),
            },
            retry: RetryPolicy {
                retries: config.fetch_retries,
                delay: Duration::from_millis(config.retry_delay_ms),
            },
            timeout: config.crawl_timeout(),
        }
    }
}

/// How a driver run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    pub reason: TerminationReason,
    /// Listing pages fetched successfully
    pub pages_fetched: u32,
    /// Fetch calls made, including retries
    pub fetch_attempts: u32,
}

/// Drives the fetch → extract → advance loop over a paginated listing
pub struct PaginationDriver<F, N> {
    fetcher: F,
    navigator: N,
    extractor: RecordExtractor,
    settings: DriverSettings,
    cancel: CancellationToken,
    pages_fetched: u32,
    fetch_attempts: u32,
}

impl<F: Fetch, N: Navigate> PaginationDriver<F, N> {
    /// Creates a driver that starts at the navigator's current page
    pub fn new(fetcher: F, navigator: N, extractor: RecordExtractor, settings: DriverSettings) -> Self {
        Self {
            fetcher,
            navigator,
            extractor,
            settings,
            cancel: CancellationToken::new(),
            pages_fetched: 0,
            fetch_attempts: 0,
        }
    }

    /// Uses `token` to cancel the crawl from outside
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Runs the crawl until it terminates
    ///
    /// Accepted records and unclassified counts accumulate in `session` as
    /// pages are processed; nothing is discarded when the crawl stops early.
    pub async fn run(&mut self, session: &mut CrawlSession) -> CrawlOutcome {
        self.pages_fetched = 0;
        self.fetch_attempts = 0;
        let deadline = self.settings.timeout.map(|t| Instant::now() + t);

        tracing::info!(
            query = session.search_query(),
            start = self.navigator.current_page_url(),
            max_pages = self.settings.max_pages,
            "Starting pagination"
        );

        let mut state = CrawlState::Fetching {
            url: self.navigator.current_page_url().to_string(),
        };

        let reason = loop {
            tracing::trace!("Pagination state: {}", state);
            state = match state {
                CrawlState::Fetching { url } => self.fetch_page(url, session, deadline).await,
                CrawlState::Extracting { url, markup } => {
                    self.process_page(url, markup, session, deadline).await
                }
                CrawlState::Terminated(reason) => break reason,
            };
        };

        if reason.is_interrupted() {
            tracing::warn!(
                "Crawl stopped early ({}); keeping {} accepted results",
                reason,
                session.accepted_count()
            );
        } else {
            tracing::info!("Crawl finished: {}", reason);
        }

        CrawlOutcome {
            reason,
            pages_fetched: self.pages_fetched,
            fetch_attempts: self.fetch_attempts,
        }
    }

    /// Fetching → Extracting, or Terminated
    async fn fetch_page(
        &mut self,
        url: String,
        session: &CrawlSession,
        deadline: Option<Instant>,
    ) -> CrawlState {
        if self.pages_fetched >= self.settings.max_pages {
            tracing::warn!("Page ceiling of {} reached", self.settings.max_pages);
            return CrawlState::Terminated(TerminationReason::PageCeiling {
                max_pages: self.settings.max_pages,
            });
        }

        if session.is_visited(&url) {
            tracing::warn!("Next page {} was already processed", url);
            return CrawlState::Terminated(TerminationReason::Revisit { url });
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            self.fetch_attempts += 1;
            tracing::debug!(attempt, "Fetching {}", url);

            let result = match guard(&self.cancel, deadline, self.fetcher.fetch(&url)).await {
                Ok(result) => result,
                Err(reason) => return CrawlState::Terminated(reason),
            };

            match result {
                Ok(markup) => {
                    self.pages_fetched += 1;
                    self.navigator.arrive(&url);
                    return CrawlState::Extracting { url, markup };
                }
                Err(e) if e.is_transient() && attempt <= self.settings.retry.retries => {
                    tracing::warn!(
                        "Fetch attempt {}/{} failed: {}",
                        attempt,
                        self.settings.retry.retries + 1,
                        e
                    );
                    if let Err(reason) = self.pause(self.settings.retry.delay, deadline).await {
                        return CrawlState::Terminated(reason);
                    }
                }
                Err(e) => {
                    tracing::error!("Giving up on {}: {}", url, e);
                    return CrawlState::Terminated(TerminationReason::FetchFailed { url, error: e });
                }
            }
        }
    }

    /// Extracting → Fetching, or Terminated
    async fn process_page(
        &mut self,
        url: String,
        markup: String,
        session: &mut CrawlSession,
        deadline: Option<Instant>,
    ) -> CrawlState {
        if !session.mark_visited(&url) {
            return CrawlState::Terminated(TerminationReason::Revisit { url });
        }

        let extraction = self.extractor.extract(&markup);
        let mut tally = PageTally::new(url.as_str());

        for outcome in extraction.outcomes {
            match outcome {
                EntryOutcome::Accepted(candidate) => {
                    log_accepted(session.add_accepted(candidate));
                    tally.accepted += 1;
                }
                EntryOutcome::Unclassified => {
                    session.add_unclassified(1);
                    tally.unclassified += 1;
                }
            }
        }

        tracing::info!(
            page = %url,
            accepted = tally.accepted,
            unclassified = tally.unclassified,
            total = session.total_results(),
            "Processed listing page"
        );
        session.record_page(tally);

        if let Err(reason) = self.pause(self.settings.pacing.discovery, deadline).await {
            return CrawlState::Terminated(reason);
        }

        let control = match self.navigator.find_next_control(&markup) {
            Some(control) => control,
            None => {
                tracing::info!("End of pages");
                return CrawlState::Terminated(TerminationReason::EndOfResults);
            }
        };

        if !control.is_enabled() {
            tracing::info!("End of pages (next control disabled)");
            return CrawlState::Terminated(TerminationReason::NextDisabled);
        }

        if let Err(reason) = self.pause(self.settings.pacing.pre_click, deadline).await {
            return CrawlState::Terminated(reason);
        }

        let next = match self.navigator.activate(&control) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!("Treating navigation failure as end of pages: {}", e);
                return CrawlState::Terminated(TerminationReason::NavigationFailed(e.to_string()));
            }
        };

        if let Err(reason) = self.pause(self.settings.pacing.settle, deadline).await {
            return CrawlState::Terminated(reason);
        }

        CrawlState::Fetching { url: next }
    }

    /// Fixed wait that still honors cancellation and the deadline
    async fn pause(&self, duration: Duration, deadline: Option<Instant>) -> Result<(), TerminationReason> {
        guard(&self.cancel, deadline, tokio::time::sleep(duration)).await
    }
}

/// Races `fut` against cancellation and the crawl deadline
async fn guard<T>(
    cancel: &CancellationToken,
    deadline: Option<Instant>,
    fut: impl Future<Output = T>,
) -> Result<T, TerminationReason> {
    let expiry = async move {
        match deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(TerminationReason::Cancelled),
        _ = expiry => Err(TerminationReason::TimedOut),
        value = fut => Ok(value),
    }
}

fn log_accepted(record: &PublicationRecord) {
    tracing::info!(
        result_no = record.sequence_number,
        title = %record.title,
        url = %record.canonical_url,
        authors = %record.author_names().join(", "),
        author_urls = %record.author_profile_links().join(", "),
        publish_date = %record.publish_date,
        "Accepted result"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;
    use crate::crawler::fetcher::FetchError;
    use crate::crawler::navigator::{MarkupNavigator, NavigationError, NextControl};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    const BASE: &str = "https://portal.example.ac.uk";

    fn page_url(n: u32) -> String {
        format!("{}/en/publications/?search=ai&page={}", BASE, n)
    }

    /// Serves canned responses and records every requested URL
    #[derive(Default)]
    struct ScriptedFetcher {
        pages: HashMap<String, Result<String, FetchError>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn page(mut self, url: String, markup: String) -> Self {
            self.pages.insert(url, Ok(markup));
            self
        }

        fn failing(mut self, url: String, error: FetchError) -> Self {
            self.pages.insert(url, Err(error));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for ScriptedFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.calls.lock().unwrap().push(url.to_string());
            self.pages.get(url).cloned().unwrap_or(Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }))
        }
    }

    /// Fails with a transient error a fixed number of times, then serves `markup`
    struct FlakyFetcher {
        failures_left: AtomicU32,
        attempts: AtomicU32,
        markup: String,
    }

    #[async_trait]
    impl Fetch for FlakyFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.failures_left.load(Ordering::SeqCst) > 0 {
                self.failures_left.fetch_sub(1, Ordering::SeqCst);
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: 503,
                });
            }
            Ok(self.markup.clone())
        }
    }

    /// Never answers within a test's lifetime
    struct StalledFetcher;

    #[async_trait]
    impl Fetch for StalledFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    /// Offers an enabled control whose activation always fails
    struct VanishingNavigator {
        current: String,
    }

    impl Navigate for VanishingNavigator {
        fn current_page_url(&self) -> &str {
            &self.current
        }

        fn arrive(&mut self, page_url: &str) {
            self.current = page_url.to_string();
        }

        fn find_next_control(&self, _markup: &str) -> Option<NextControl> {
            Some(NextControl::enabled("?page=1"))
        }

        fn activate(&mut self, _control: &NextControl) -> Result<String, NavigationError> {
            Err(NavigationError::ControlVanished {
                page: self.current.clone(),
            })
        }
    }

    fn entry(title: &str, authors: &[&str]) -> String {
        let links: String = authors
            .iter()
            .map(|a| format!(r#"<a rel="Person" href="/en/persons/{}">{}</a>"#, a.to_lowercase(), a))
            .collect();
        format!(
            r#"<li class="list-result-item list-result-item-0"><h3 class="title">{}</h3>{}<span class="date">2021</span></li>"#,
            title, links
        )
    }

    fn listing(entries: &[String], next: Option<u32>) -> String {
        let pager = match next {
            Some(n) => format!(
                r#"<ul class="pages"><li class="next"><a href="/en/publications/?search=ai&amp;page={}">Next</a></li></ul>"#,
                n
            ),
            None => String::new(),
        };
        format!(
            r#"<html><body><ul class="list-results">{}</ul>{}</body></html>"#,
            entries.concat(),
            pager
        )
    }

    fn settings() -> DriverSettings {
        DriverSettings {
            max_pages: 50,
            pacing: Pacing::none(),
            retry: RetryPolicy {
                retries: 0,
                delay: Duration::ZERO,
            },
            timeout: None,
        }
    }

    fn driver<F: Fetch>(fetcher: F, settings: DriverSettings) -> PaginationDriver<F, MarkupNavigator> {
        let extractor =
            RecordExtractor::new(&SelectorConfig::default(), &format!("{}/en/publications", BASE)).unwrap();
        let navigator = MarkupNavigator::new(".next", page_url(0)).unwrap();
        PaginationDriver::new(fetcher, navigator, extractor, settings)
    }

    #[tokio::test]
    async fn test_single_page_with_unclassified_entry() {
        let fetcher = ScriptedFetcher::default().page(
            page_url(0),
            listing(&[entry("Robot Ethics", &["A. Smith"]), entry("External Paper", &[])], None),
        );
        let mut driver = driver(fetcher, settings());
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;
        let snapshot = session.snapshot();

        assert_eq!(outcome.reason, TerminationReason::EndOfResults);
        assert_eq!(snapshot.accepted_count, 1);
        assert_eq!(snapshot.records[0].sequence_number, 1);
        assert_eq!(snapshot.unclassified_count, 1);
        assert_eq!(snapshot.total_results, 2);
    }

    #[tokio::test]
    async fn test_three_pages_then_no_next_control() {
        let fetcher = ScriptedFetcher::default()
            .page(page_url(0), listing(&[entry("One", &["A"])], Some(1)))
            .page(page_url(1), listing(&[entry("Two", &["B"])], Some(2)))
            .page(page_url(2), listing(&[entry("Three", &["C"])], None));
        let mut driver = driver(fetcher, settings());
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert_eq!(outcome.reason, TerminationReason::EndOfResults);
        assert_eq!(outcome.pages_fetched, 3);
        assert_eq!(driver.fetcher().calls(), vec![page_url(0), page_url(1), page_url(2)]);

        let numbers: Vec<u64> = session.records().iter().map(|r| r.sequence_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let titles: Vec<&str> = session.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_partial_results() {
        let fetcher = ScriptedFetcher::default()
            .page(page_url(0), listing(&[entry("One", &["A"])], Some(1)))
            .failing(
                page_url(1),
                FetchError::Timeout {
                    url: page_url(1),
                },
            )
            .page(page_url(2), listing(&[entry("Never", &["Z"])], None));
        let mut driver = driver(fetcher, settings());
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert!(matches!(
            outcome.reason,
            TerminationReason::FetchFailed { ref url, .. } if *url == page_url(1)
        ));
        assert_eq!(session.accepted_count(), 1);
        assert_eq!(driver.fetcher().calls(), vec![page_url(0), page_url(1)]);
    }

    #[tokio::test]
    async fn test_totals_match_per_page_tallies() {
        let fetcher = ScriptedFetcher::default()
            .page(
                page_url(0),
                listing(&[entry("A1", &["X"]), entry("A2", &[]), entry("A3", &[])], Some(1)),
            )
            .page(
                page_url(1),
                listing(&[entry("B1", &["Y", "Z"]), entry("B2", &[])], None),
            );
        let mut driver = driver(fetcher, settings());
        let mut session = CrawlSession::new("ai");

        driver.run(&mut session).await;
        let snapshot = session.finish();

        assert_eq!(snapshot.pages[0].unclassified, 2);
        assert_eq!(snapshot.pages[1].unclassified, 1);
        let per_page: u64 = snapshot.pages.iter().map(PageTally::total).sum();
        assert_eq!(snapshot.total_results, per_page);
        assert_eq!(snapshot.total_results, 5);
    }

    #[tokio::test]
    async fn test_disabled_next_control_ends_crawl() {
        let markup = r#"<html><body>
            <li class="list-result-item"><h3 class="title">Only</h3><a rel="Person">A</a></li>
            <ul class="pages"><li class="next disabled"><a href="?page=1">Next</a></li></ul>
            </body></html>"#;
        let fetcher = ScriptedFetcher::default().page(page_url(0), markup.to_string());
        let mut driver = driver(fetcher, settings());
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert_eq!(outcome.reason, TerminationReason::NextDisabled);
        assert_eq!(driver.fetcher().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_next_control_looping_back_is_not_refetched() {
        let fetcher = ScriptedFetcher::default()
            .page(page_url(0), listing(&[entry("One", &["A"])], Some(1)))
            .page(page_url(1), listing(&[entry("Two", &["B"])], Some(0)));
        let mut driver = driver(fetcher, settings());
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert_eq!(outcome.reason, TerminationReason::Revisit { url: page_url(0) });
        assert_eq!(driver.fetcher().calls().len(), 2);
        assert_eq!(session.accepted_count(), 2);
    }

    #[tokio::test]
    async fn test_page_ceiling() {
        let fetcher = ScriptedFetcher::default()
            .page(page_url(0), listing(&[entry("One", &["A"])], Some(1)))
            .page(page_url(1), listing(&[entry("Two", &["B"])], Some(2)))
            .page(page_url(2), listing(&[entry("Three", &["C"])], None));
        let mut limited = settings();
        limited.max_pages = 2;
        let mut driver = driver(fetcher, limited);
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert_eq!(outcome.reason, TerminationReason::PageCeiling { max_pages: 2 });
        assert_eq!(outcome.pages_fetched, 2);
        assert_eq!(session.accepted_count(), 2);
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let fetcher = FlakyFetcher {
            failures_left: AtomicU32::new(2),
            attempts: AtomicU32::new(0),
            markup: listing(&[entry("One", &["A"])], None),
        };
        let mut retrying = settings();
        retrying.retry.retries = 2;
        let mut driver = driver(fetcher, retrying);
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert_eq!(outcome.reason, TerminationReason::EndOfResults);
        assert_eq!(outcome.fetch_attempts, 3);
        assert_eq!(driver.fetcher().attempts.load(Ordering::SeqCst), 3);
        assert_eq!(session.accepted_count(), 1);
    }

    #[tokio::test]
    async fn test_retries_are_bounded() {
        let fetcher = FlakyFetcher {
            failures_left: AtomicU32::new(10),
            attempts: AtomicU32::new(0),
            markup: String::new(),
        };
        let mut retrying = settings();
        retrying.retry.retries = 1;
        let mut driver = driver(fetcher, retrying);
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert!(matches!(outcome.reason, TerminationReason::FetchFailed { .. }));
        assert_eq!(outcome.fetch_attempts, 2);
    }

    #[tokio::test]
    async fn test_non_transient_failure_is_not_retried() {
        let fetcher = ScriptedFetcher::default();
        let mut retrying = settings();
        retrying.retry.retries = 3;
        let mut driver = driver(fetcher, retrying);
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert!(matches!(
            outcome.reason,
            TerminationReason::FetchFailed {
                error: FetchError::Status { status: 404, .. },
                ..
            }
        ));
        assert_eq!(outcome.fetch_attempts, 1);
    }

    #[tokio::test]
    async fn test_navigation_failure_ends_crawl_normally() {
        let fetcher = ScriptedFetcher::default()
            .page(page_url(0), listing(&[entry("One", &["A"])], Some(1)));
        let extractor =
            RecordExtractor::new(&SelectorConfig::default(), "/en/publications").unwrap();
        let navigator = VanishingNavigator { current: page_url(0) };
        let mut driver = PaginationDriver::new(fetcher, navigator, extractor, settings());
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert!(matches!(outcome.reason, TerminationReason::NavigationFailed(_)));
        assert!(outcome.reason.is_end_of_results());
        assert_eq!(session.accepted_count(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let fetcher = ScriptedFetcher::default().page(page_url(0), listing(&[], None));
        let mut driver = driver(fetcher, settings()).with_cancellation(token);
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert_eq!(outcome.reason, TerminationReason::Cancelled);
        assert_eq!(outcome.pages_fetched, 0);
    }

    #[tokio::test]
    async fn test_cancel_during_settle_keeps_first_page() {
        let token = CancellationToken::new();
        let fetcher = ScriptedFetcher::default()
            .page(page_url(0), listing(&[entry("One", &["A"])], Some(1)))
            .page(page_url(1), listing(&[entry("Two", &["B"])], None));
        let mut slow = settings();
        slow.pacing.settle = Duration::from_secs(30);
        let mut driver = driver(fetcher, slow).with_cancellation(token.clone());
        let mut session = CrawlSession::new("ai");

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        });
        let outcome = driver.run(&mut session).await;
        canceller.await.unwrap();

        assert_eq!(outcome.reason, TerminationReason::Cancelled);
        assert_eq!(session.accepted_count(), 1);
        assert_eq!(driver.fetcher().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_crawl_timeout() {
        let mut timed = settings();
        timed.timeout = Some(Duration::from_millis(50));
        let mut driver = driver(StalledFetcher, timed);
        let mut session = CrawlSession::new("ai");

        let outcome = driver.run(&mut session).await;

        assert_eq!(outcome.reason, TerminationReason::TimedOut);
        assert_eq!(session.total_results(), 0);
    }

    #[test]
    fn test_settings_from_config() {
        let config = CrawlerConfig::default();
        let settings = DriverSettings::from_config(&config);

        assert_eq!(settings.max_pages, 500);
        assert_eq!(settings.pacing.discovery, Duration::from_secs(5));
        assert_eq!(settings.pacing.pre_click, Duration::from_secs(3));
        assert_eq!(settings.pacing.settle, Duration::from_secs(5));
        assert_eq!(settings.retry.retries, 2);
        assert_eq!(settings.timeout, None);
    }
}
