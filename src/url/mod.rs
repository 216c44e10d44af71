//! URL handling module for Pubtrawl
//!
//! This module derives the best-effort article URLs recorded for each
//! publication, builds the search listing URL a crawl starts from, and
//! resolves next-page hrefs against the page they were found on.

mod canonical;
mod search;

// Re-export main functions
pub use canonical::{canonical_publication_url, slugify_title};
pub use search::{build_search_url, resolve_href};
