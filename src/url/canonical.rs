/// Turns a publication title into the path segment the portal uses for it
///
/// The title is lower-cased and every space becomes a hyphen. No other
/// characters are touched, so punctuation survives as-is.
pub fn slugify_title(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Derives the article URL for a publication title
///
/// This is a guess built from the portal's URL scheme, not a link found in
/// the markup; it is never fetched and may not resolve.
///
/// # Example
///
/// ```
/// use pubtrawl::url::canonical_publication_url;
///
/// let url = canonical_publication_url("https://portal.example.ac.uk/en/publications", "Deep Learning Methods");
/// assert_eq!(url, "https://portal.example.ac.uk/en/publications/deep-learning-methods");
/// ```
pub fn canonical_publication_url(publications_base: &str, title: &str) -> String {
    format!(
        "{}/{}",
        publications_base.trim_end_matches('/'),
        slugify_title(title)
    )
}
