/// Crawl state definitions for the pagination driver
///
/// The driver moves Fetching → Extracting → Fetching … until it lands in
/// Terminated, which it never leaves.
use crate::crawler::FetchError;
use std::fmt;

/// Why a crawl stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    // ===== End of Results =====
    /// The last page had no next control
    EndOfResults,

    /// The next control exists but is disabled
    NextDisabled,

    /// The next control could not be activated; treated like end of results
    NavigationFailed(String),

    // ===== Guards =====
    /// The next control led back to a page that was already processed
    Revisit { url: String },

    /// The page ceiling was reached
    PageCeiling { max_pages: u32 },

    // ===== Interrupted =====
    /// A page could not be fetched, even after retries
    FetchFailed { url: String, error: FetchError },

    /// The cancellation signal fired
    Cancelled,

    /// The overall crawl timeout elapsed
    TimedOut,
}

impl TerminationReason {
    /// Returns true if the crawl ran to the end of the result listing
    pub fn is_end_of_results(&self) -> bool {
        matches!(
            self,
            Self::EndOfResults | Self::NextDisabled | Self::NavigationFailed(_)
        )
    }

    /// Returns true if the crawl was cut short by a failure or an interrupt
    pub fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed { .. } | Self::Cancelled | Self::TimedOut
        )
    }

    /// Short machine-friendly label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndOfResults => "end_of_results",
            Self::NextDisabled => "next_disabled",
            Self::NavigationFailed(_) => "navigation_failed",
            Self::Revisit { .. } => "revisit",
            Self::PageCeiling { .. } => "page_ceiling",
            Self::FetchFailed { .. } => "fetch_failed",
            Self::Cancelled => "cancelled",
            Self::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfResults => write!(f, "end of pages"),
            Self::NextDisabled => write!(f, "end of pages (next control disabled)"),
            Self::NavigationFailed(e) => write!(f, "end of pages (navigation failed: {})", e),
            Self::Revisit { url } => write!(f, "next page {} was already visited", url),
            Self::PageCeiling { max_pages } => write!(f, "page ceiling of {} reached", max_pages),
            Self::FetchFailed { error, .. } => write!(f, "{}", error),
            Self::Cancelled => write!(f, "cancelled"),
            Self::TimedOut => write!(f, "crawl timeout elapsed"),
        }
    }
}

/// Current state of the pagination driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlState {
    /// About to fetch the listing page at `url`
    Fetching { url: String },

    /// Holding the markup of `url`, ready for extraction
    Extracting { url: String, markup: String },

    /// Final state; no further fetches occur
    Terminated(TerminationReason),
}

impl CrawlState {
    /// Returns true once the crawl has stopped
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetching { .. } => "fetching",
            Self::Extracting { .. } => "extracting",
            Self::Terminated(_) => "terminated",
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetching { url } | Self::Extracting { url, .. } => {
                write!(f, "{} {}", self.name(), url)
            }
            Self::Terminated(reason) => write!(f, "terminated: {}", reason),
        }
    }
}
