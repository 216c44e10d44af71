//! The crawl session aggregate
//!
//! A `CrawlSession` is created when a crawl starts, mutated only by the
//! pagination driver while pages are processed, and turned into a
//! read-only [`CrawlSnapshot`] when the crawl terminates.

use crate::state::ledger::VisitLedger;
use crate::state::record::{CandidateRecord, PublicationRecord};
use chrono::{DateTime, Utc};

/// Accepted and unclassified counts contributed by one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTally {
    pub page_url: String,
    pub accepted: u64,
    pub unclassified: u64,
}

impl PageTally {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            accepted: 0,
            unclassified: 0,
        }
    }

    /// Result entries accounted for on this page
    pub fn total(&self) -> u64 {
        self.accepted + self.unclassified
    }
}

/// Owned state of one crawl run
#[derive(Debug, Clone)]
pub struct CrawlSession {
    search_query: String,
    records: Vec<PublicationRecord>,
    unclassified_count: u64,
    ledger: VisitLedger,
    pages: Vec<PageTally>,
    started_at: DateTime<Utc>,
}

impl CrawlSession {
    /// Starts a session for `search_query`
    pub fn new(search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            records: Vec::new(),
            unclassified_count: 0,
            ledger: VisitLedger::new(),
            pages: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Numbers and stores an accepted entry
    ///
    /// The record receives the next result number, so the n-th accepted
    /// record always carries sequence number n.
    pub fn add_accepted(&mut self, candidate: CandidateRecord) -> &PublicationRecord {
        let sequence_number = self.records.len() as u64 + 1;
        let record = candidate.into_record(&self.search_query, sequence_number);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Counts `n` entries that listed no author
    pub fn add_unclassified(&mut self, n: u64) {
        self.unclassified_count += n;
    }

    /// Records a listing page as processed; false if it already was
    pub fn mark_visited(&mut self, page_id: &str) -> bool {
        self.ledger.mark_visited(page_id)
    }

    pub fn is_visited(&self, page_id: &str) -> bool {
        self.ledger.is_visited(page_id)
    }

    /// Keeps the per-page tally for diagnostics and reporting
    pub fn record_page(&mut self, tally: PageTally) {
        self.pages.push(tally);
    }

    pub fn records(&self) -> &[PublicationRecord] {
        &self.records
    }

    pub fn accepted_count(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn unclassified_count(&self) -> u64 {
        self.unclassified_count
    }

    /// Accepted plus unclassified entries seen so far
    pub fn total_results(&self) -> u64 {
        self.accepted_count() + self.unclassified_count
    }

    /// Copies the current state into a snapshot
    pub fn snapshot(&self) -> CrawlSnapshot {
        CrawlSnapshot {
            search_query: self.search_query.clone(),
            total_results: self.total_results(),
            accepted_count: self.accepted_count(),
            unclassified_count: self.unclassified_count,
            records: self.records.clone(),
            pages: self.pages.clone(),
            started_at: self.started_at,
            finished_at: None,
        }
    }

    /// Consumes the session once the crawl has terminated
    pub fn finish(self) -> CrawlSnapshot {
        CrawlSnapshot {
            total_results: self.total_results(),
            accepted_count: self.accepted_count(),
            unclassified_count: self.unclassified_count,
            search_query: self.search_query,
            records: self.records,
            pages: self.pages,
            started_at: self.started_at,
            finished_at: Some(Utc::now()),
        }
    }
}

/// Read-only view of a crawl handed to exporters
#[derive(Debug, Clone)]
pub struct CrawlSnapshot {
    pub search_query: String,
    pub total_results: u64,
    pub accepted_count: u64,
    pub unclassified_count: u64,
    pub records: Vec<PublicationRecord>,
    pub pages: Vec<PageTally>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlSnapshot {
    /// Number of listing pages that contributed to the snapshot
    pub fn pages_visited(&self) -> usize {
        self.pages.len()
    }

    /// Wall-clock duration of a finished crawl
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}
