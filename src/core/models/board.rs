//! Board model
//!
//! The notice board being watched: where its listing lives and how its
//! detail pages are addressed.

use url::Url;

/// Query parameter carrying the numeric article id on detail pages
pub const ARTICLE_PARAM: &str = "articleNo";

/// The single notice board being watched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    list_url: Url,
}

impl Board {
    /// Create a board from its listing URL
    #[must_use]
    pub const fn new(list_url: Url) -> Self {
        Self { list_url }
    }

    /// Parse a listing URL string
    pub fn parse(list_url: &str) -> Result<Self, url::ParseError> {
        Url::parse(list_url).map(Self::new)
    }

    /// The listing URL (including any campus/date/page-size query)
    #[must_use]
    pub const fn list_url(&self) -> &Url {
        &self.list_url
    }

    /// Resolve a link target found on the listing page to an absolute URL
    ///
    /// Returns `None` for placeholder targets (`#`, `javascript:`, `mailto:`)
    /// and anything that is not http(s).
    #[must_use]
    pub fn resolve(&self, href: &str) -> Option<Url> {
        let href = href.trim();
        let lower = href.to_ascii_lowercase();
        if href.is_empty()
            || href.starts_with('#')
            || lower.starts_with("javascript:")
            || lower.starts_with("mailto:")
        {
            return None;
        }
        let url = self.list_url.join(href).ok()?;
        matches!(url.scheme(), "http" | "https").then_some(url)
    }

    /// Build the detail page URL for a numeric article id
    #[must_use]
    pub fn detail_url(&self, article_no: &str) -> String {
        let mut base = self.list_url.clone();
        base.set_query(None);
        base.set_fragment(None);
        format!("{base}?mode=view&{ARTICLE_PARAM}={article_no}")
    }

    /// Whether a resolved link points back at the listing itself
    ///
    /// Pagination and filter links share the listing path but never carry
    /// `mode=view` or an article number.
    #[must_use]
    pub fn is_listing_page(&self, url: &Url) -> bool {
        if url.host_str() != self.list_url.host_str() || url.path() != self.list_url.path() {
            return false;
        }
        !url
            .query_pairs()
            .any(|(k, v)| (k == "mode" && v == "view") || k == ARTICLE_PARAM)
    }

    /// Whether a resolved link has the shape of a detail page
    /// (`mode=view` plus a numeric article number)
    #[must_use]
    pub fn is_detail_link(url: &Url) -> bool {
        let mut view = false;
        let mut numbered = false;
        for (k, v) in url.query_pairs() {
            if k == "mode" && v == "view" {
                view = true;
            }
            if k == ARTICLE_PARAM && !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()) {
                numbered = true;
            }
        }
        view && numbered
    }
}
