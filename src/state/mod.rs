//! State module for tracking crawl progress
//!
//! This module owns everything the crawl mutates while it runs.
//!
//! # Components
//!
//! - `CrawlState`: The pagination driver's state machine (fetching, extracting, terminated)
//! - `VisitLedger`: At-most-once guard over listing page identifiers
//! - `CrawlSession`: The run's accepted records, unclassified count and per-page tallies
//! - `PublicationRecord`: One accepted result with its stable result number

mod crawl_state;
mod ledger;
mod record;
mod session;

// Re-export main types
pub use crawl_state::{CrawlState, TerminationReason};
pub use ledger::VisitLedger;
pub use record::{Author, CandidateRecord, PublicationRecord};
pub use session::{CrawlSession, CrawlSnapshot, PageTally};
