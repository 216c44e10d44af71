use std::collections::HashSet;

/// Tracks which listing pages have been processed during a crawl
///
/// Page identifiers are opaque strings (the page URLs). A page is processed
/// at most once per crawl; the pagination driver consults the ledger before
/// fetching so a next control that loops back ends the crawl instead of
/// reprocessing a page.
#[derive(Debug, Clone, Default)]
pub struct VisitLedger {
    visited: HashSet<String>,
}

impl VisitLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a page as visited
    ///
    /// Returns `true` the first time an id is seen and `false` on every
    /// later call with the same id.
    pub fn mark_visited(&mut self, page_id: &str) -> bool {
        if self.visited.contains(page_id) {
            return false;
        }
        self.visited.insert(page_id.to_string())
    }

    /// Returns true if the page has already been processed
    pub fn is_visited(&self, page_id: &str) -> bool {
        self.visited.contains(page_id)
    }

    /// Number of distinct pages visited
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_visited_is_idempotent() {
        let mut ledger = VisitLedger::new();
        assert!(ledger.mark_visited("https://portal.example.ac.uk/en/publications/?page=0"));
        assert!(!ledger.mark_visited("https://portal.example.ac.uk/en/publications/?page=0"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_distinct_ids_are_counted_once() {
        let mut ledger = VisitLedger::new();
        assert!(ledger.mark_visited("b"));
        assert!(ledger.mark_visited("a"));
        assert!(!ledger.mark_visited("b"));

        assert_eq!(ledger.len(), 2);
        assert!(ledger.is_visited("a"));
        assert!(!ledger.is_visited("c"));
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = VisitLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }
}
