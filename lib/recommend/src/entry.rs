//! Result entries handed to the presentation layer
//!
//! Every recommender returns a `Vec<Recommendation>`. A "nothing found"
//! outcome is a single sentinel element rather than an error.

use crate::link::{resolve_url, SearchLinkConfig};
use dishx_core::Restaurant;
use serde::Serialize;
use std::fmt;

/// Message shown when a similarity query matches no restaurant name
pub const NO_SIMILAR_FOUND_MESSAGE: &str = "No similar restaurant found";

/// Message shown when no restaurant survives the filters
pub const NO_MATCH_MESSAGE: &str = "No restaurant matches the selected filters";

/// One renderable restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub name: String,
    pub category: String,
    pub price_level: String,
    pub street: String,
    /// Always usable: the table URL or a generated search link
    pub url: String,
}

impl ResultEntry {
    pub fn from_record(record: &Restaurant, links: &SearchLinkConfig) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            price_level: record.price_level.clone(),
            street: record.street().unwrap_or_default().to_string(),
            url: resolve_url(&record.name, record.url(), links),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    Restaurant(ResultEntry),
    /// Similarity query: no restaurant name matched
    NoSimilarFound,
    /// Filter query: no restaurant survived the filters
    NoMatch,
}

impl Recommendation {
    #[inline]
    pub fn entry(&self) -> Option<&ResultEntry> {
        match self {
            Recommendation::Restaurant(entry) => Some(entry),
            _ => None,
        }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Recommendation::Restaurant(_))
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🍽 **{}**", self.name)?;
        writeln!(f, "- **Category**: {}", self.category)?;
        writeln!(f, "- **Price**: {}", self.price_level)?;
        writeln!(f, "- **Address**: {}", self.street)?;
        write!(f, "- 🔗 [More details]({})", self.url)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Restaurant(entry) => fmt::Display::fmt(entry, f),
            Recommendation::NoSimilarFound => write!(f, "❌ {}", NO_SIMILAR_FOUND_MESSAGE),
            Recommendation::NoMatch => write!(f, "❌ {}", NO_MATCH_MESSAGE),
        }
    }
}

/// Entries of a result list, skipping sentinels
pub fn entries(results: &[Recommendation]) -> impl Iterator<Item = &ResultEntry> {
    results.iter().filter_map(Recommendation::entry)
}
