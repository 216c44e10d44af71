use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Pubtrawl
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The publications portal being crawled
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host of the portal, e.g. `https://pureportal.coventry.ac.uk`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the publications listing; also the base of derived article URLs
    #[serde(rename = "publications-path")]
    pub publications_path: String,
}

impl SiteConfig {
    /// Absolute base of the publications listing, without a trailing slash
    pub fn publications_base(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.publications_path.trim_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pureportal.coventry.ac.uk".to_string(),
            publications_path: "/en/publications".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Hard ceiling on the number of listing pages fetched
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Wait before looking for the next control (milliseconds)
    #[serde(rename = "discovery-delay-ms")]
    pub discovery_delay_ms: u64,

    /// Wait between finding the next control and activating it (milliseconds)
    #[serde(rename = "pre-click-delay-ms")]
    pub pre_click_delay_ms: u64,

    /// Wait after activation before the next fetch (milliseconds)
    #[serde(rename = "settle-delay-ms")]
    pub settle_delay_ms: u64,

    /// Extra attempts for transient fetch failures
    #[serde(rename = "fetch-retries")]
    pub fetch_retries: u32,

    /// Pause between fetch attempts (milliseconds)
    #[serde(rename = "retry-delay-ms")]
    pub retry_delay_ms: u64,

    /// Overall crawl timeout in seconds, 0 disables it
    #[serde(rename = "crawl-timeout-secs")]
    pub crawl_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 500,
            discovery_delay_ms: 5000,
            pre_click_delay_ms: 3000,
            settle_delay_ms: 5000,
            fetch_retries: 2,
            retry_delay_ms: 2000,
            crawl_timeout_secs: 0,
        }
    }
}

impl CrawlerConfig {
    pub fn crawl_timeout(&self) -> Option<Duration> {
        (self.crawl_timeout_secs > 0).then(|| Duration::from_secs(self.crawl_timeout_secs))
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "pubtrawl".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}

/// CSS selectors describing the listing page structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// One result entry on a listing page
    pub entry: String,
    /// Title element within an entry
    pub title: String,
    /// Author-role links within an entry
    pub author: String,
    /// Publish date element within an entry
    pub date: String,
    /// The next-page control
    pub next: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            entry: "li.list-result-item".to_string(),
            title: "h3.title".to_string(),
            author: "a[rel~='Person']".to_string(),
            date: "span.date".to_string(),
            next: ".next".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the exported CSV file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "query_results.csv".to_string(),
        }
    }
}
