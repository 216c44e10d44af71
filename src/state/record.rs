//! Publication records produced by the crawl

/// One author-role link within a result entry
///
/// Name and profile link come from the same element, so they can never be
/// paired with the wrong person. Authors without profile markup keep their
/// position with `profile_url: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub profile_url: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>, profile_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            profile_url,
        }
    }
}

/// An entry the extractor classified as accepted, before it is numbered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Trimmed, non-empty title text
    pub title: String,

    /// Best-effort article URL derived from the title
    pub canonical_url: String,

    /// At least one author, in document order
    pub authors: Vec<Author>,

    /// Display text of the publish date, empty when absent
    pub publish_date: String,
}

impl CandidateRecord {
    /// Promotes the candidate to a numbered record of `search_query`
    pub fn into_record(self, search_query: &str, sequence_number: u64) -> PublicationRecord {
        PublicationRecord {
            search_query: search_query.to_string(),
            sequence_number,
            title: self.title,
            canonical_url: self.canonical_url,
            authors: self.authors,
            publish_date: self.publish_date,
        }
    }
}

/// One accepted result of a crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    /// The term the crawl was run for
    pub search_query: String,

    /// 1-based position in acceptance order
    pub sequence_number: u64,

    pub title: String,

    /// Derived from the title; never verified to resolve
    pub canonical_url: String,

    pub authors: Vec<Author>,

    pub publish_date: String,
}

impl PublicationRecord {
    /// Author names in document order
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }

    /// Profile links parallel to [`author_names`](Self::author_names)
    ///
    /// Authors without a profile link yield an empty string at their position.
    pub fn author_profile_links(&self) -> Vec<&str> {
        self.authors
            .iter()
            .map(|a| a.profile_url.as_deref().unwrap_or(""))
            .collect()
    }
}
