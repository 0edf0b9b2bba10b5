use serde::{Deserialize, Serialize};

/// Position of a record in table order
pub type RowId = usize;

/// A restaurant row as loaded from the source table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub category: String,
    pub cuisine: String,
    pub price_level: String,
    /// Street address, also the only location signal (province names live here)
    #[serde(default)]
    pub street: Option<String>,
    /// Detail page, may be missing or a `-` placeholder
    #[serde(default)]
    pub url: Option<String>,
}

impl Restaurant {
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        cuisine: impl Into<String>,
        price_level: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            cuisine: cuisine.into(),
            price_level: price_level.into(),
            street: None,
            url: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Text the feature indexer sees for this row.
    ///
    /// Derived on every call from `category`, `cuisine` and `price_level`;
    /// it is never stored, so it cannot drift from the source fields.
    #[must_use]
    pub fn combined_features(&self) -> String {
        format!("{} {} {}", self.category, self.cuisine, self.price_level)
    }

    #[inline]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
