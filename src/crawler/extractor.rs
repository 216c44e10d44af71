//! Record extractor for result listing pages
//!
//! This module turns the markup of one listing page into classified entries:
//! - Entries without a title are malformed and skipped without being counted
//! - Entries without any author link are unclassified
//! - Everything else becomes a candidate publication record
//!
//! The selectors describing the listing structure come from configuration,
//! so a change to the portal's markup only touches `[selectors]`.

use crate::config::SelectorConfig;
use crate::crawler::compile_selector;
use crate::state::{Author, CandidateRecord};
use crate::url::canonical_publication_url;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};

/// Classification of one result entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The entry lists at least one author
    Accepted(CandidateRecord),

    /// The entry lists no author; counted but discarded
    Unclassified,
}

/// Classified entries of one listing page, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    pub outcomes: Vec<EntryOutcome>,
}

impl PageExtraction {
    pub fn accepted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Accepted(_)))
            .count()
    }

    pub fn unclassified_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Unclassified))
            .count()
    }
}

/// Compiled selectors for a listing page
#[derive(Debug, Clone)]
struct EntrySelectors {
    entry: Selector,
    title: Selector,
    author: Selector,
    date: Selector,
}

/// Extracts publication records from listing page markup
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    selectors: EntrySelectors,
    publications_base: String,
}

impl RecordExtractor {
    /// Builds an extractor
    ///
    /// # Arguments
    ///
    /// * `selectors` - CSS selectors for entries, titles, authors and dates
    /// * `publications_base` - Base that derived article URLs are appended to
    ///
    /// # Returns
    ///
    /// * `Ok(RecordExtractor)` - All selectors compiled
    /// * `Err(ConfigError)` - A selector is not valid CSS
    pub fn new(selectors: &SelectorConfig, publications_base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            selectors: EntrySelectors {
                entry: compile_selector("entry", &selectors.entry)?,
                title: compile_selector("title", &selectors.title)?,
                author: compile_selector("author", &selectors.author)?,
                date: compile_selector("date", &selectors.date)?,
            },
            publications_base: publications_base.to_string(),
        })
    }

    /// Classifies every entry on a listing page
    ///
    /// # Example
    ///
    /// ```
    /// use pubtrawl::config::SelectorConfig;
    /// use pubtrawl::crawler::RecordExtractor;
    ///
    /// let html = r#"<ul><li class="list-result-item list-result-item-0">
    ///   <h3 class="title"><a><span>Deep Learning Methods</span></a></h3>
    ///   <a rel="Person" href="https://portal/en/persons/a-smith"><span>A. Smith</span></a>
    ///   <span class="date">12 Mar 2020</span>
    /// </li></ul>"#;
    ///
    /// let extractor = RecordExtractor::new(&SelectorConfig::default(), "https://portal/en/publications").unwrap();
    /// let page = extractor.extract(html);
    /// assert_eq!(page.accepted_count(), 1);
    /// ```
    pub fn extract(&self, markup: &str) -> PageExtraction {
        let document = Html::parse_document(markup);
        let mut outcomes = Vec::new();

        for (index, entry) in document.select(&self.selectors.entry).enumerate() {
            match self.classify(entry) {
                Some(outcome) => outcomes.push(outcome),
                None => tracing::debug!(entry = index, "Skipping result entry without a title"),
            }
        }

        PageExtraction { outcomes }
    }

    /// Classifies a single entry; `None` means malformed
    fn classify(&self, entry: ElementRef<'_>) -> Option<EntryOutcome> {
        let title = entry
            .select(&self.selectors.title)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())?;

        let authors: Vec<Author> = entry
            .select(&self.selectors.author)
            .map(|link| {
                let profile_url = link
                    .value()
                    .attr("href")
                    .map(|href| href.trim().to_string())
                    .filter(|href| !href.is_empty());
                Author::new(element_text(link), profile_url)
            })
            .collect();

        if authors.is_empty() {
            tracing::debug!(title = %title, "Result entry lists no author");
            return Some(EntryOutcome::Unclassified);
        }

        let publish_date = entry
            .select(&self.selectors.date)
            .next()
            .map(element_text)
            .unwrap_or_default();

        Some(EntryOutcome::Accepted(CandidateRecord {
            canonical_url: canonical_publication_url(&self.publications_base, &title),
            title,
            authors,
            publish_date,
        }))
    }
}

/// Concatenated, trimmed text content of an element
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
