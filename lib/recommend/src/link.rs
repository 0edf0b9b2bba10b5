//! Detail-link resolution
//!
//! Every presented restaurant gets a usable link: the table's own URL when it
//! has one, otherwise a web search for the restaurant name.

/// Placeholder the source data uses for "no URL"
pub const URL_PLACEHOLDER: &str = "-";

/// Search endpoint used when a row has no usable URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLinkConfig {
    pub base_url: String,
    /// Appended to the name to steer the search towards restaurants
    pub keyword: String,
}

impl Default for SearchLinkConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.google.com/search".to_string(),
            keyword: "ร้านอาหาร".to_string(),
        }
    }
}

impl SearchLinkConfig {
    /// Search URL for `name`, query form-urlencoded
    pub fn search_url(&self, name: &str) -> String {
        let query = format!("{} {}", name, self.keyword);
        let encoded: String = url::form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
        format!("{}?q={}", self.base_url, encoded)
    }
}

/// Whether a raw URL field is worth showing as-is
pub fn is_usable_url(url: Option<&str>) -> bool {
    match url.map(str::trim) {
        Some(u) => !u.is_empty() && u != URL_PLACEHOLDER,
        None => false,
    }
}

/// The raw URL unchanged when usable, otherwise a generated search link
pub fn resolve_url(name: &str, url: Option<&str>, config: &SearchLinkConfig) -> String {
    match url {
        Some(raw) if is_usable_url(url) => raw.to_string(),
        _ => config.search_url(name),
    }
}
