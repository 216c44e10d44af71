use crate::{UrlError, UrlResult};
use url::Url;

/// Builds the listing URL for a keyword search on the portal
///
/// This is the page the portal lands on after a query is submitted through
/// its search box: `{base}{publications_path}/?search=..&originalSearch=..`.
///
/// # Arguments
///
/// * `base_url` - Scheme and host of the portal
/// * `publications_path` - Path of the publications listing
/// * `query` - The search term
///
/// # Returns
///
/// * `Ok(Url)` - The first listing page for the query
/// * `Err(UrlError)` - The base URL could not be parsed or is not http(s)
pub fn build_search_url(base_url: &str, publications_path: &str, query: &str) -> UrlResult<Url> {
    let listing = format!(
        "{}/{}/",
        base_url.trim_end_matches('/'),
        publications_path.trim_matches('/')
    );

    let mut url = Url::parse(&listing).map_err(|e| UrlError::Parse(format!("{}: {}", listing, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    url.query_pairs_mut()
        .append_pair("search", query)
        .append_pair("originalSearch", query);

    Ok(url)
}

/// Resolves an href found on `base` into an absolute http(s) URL
pub fn resolve_href(base: &str, href: &str) -> UrlResult<Url> {
    let href = href.trim();
    let unresolvable = || UrlError::Unresolvable {
        href: href.to_string(),
        base: base.to_string(),
    };

    if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
        return Err(unresolvable());
    }

    let base_url = Url::parse(base).map_err(|e| UrlError::Parse(format!("{}: {}", base, e)))?;
    let resolved = base_url.join(href).map_err(|_| unresolvable())?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return Err(UrlError::InvalidScheme(resolved.scheme().to_string()));
    }

    Ok(resolved)
}
