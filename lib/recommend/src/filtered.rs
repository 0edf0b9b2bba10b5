// Browsing by province, category and price level
use crate::context::RecommenderContext;
use crate::entry::{Recommendation, ResultEntry};
use dishx_core::{Field, Filter, FilterCondition, RecordFilter};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_FILTER_TOP_N: usize = 5;

/// The three browse predicates, applied together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Case-insensitive substring of the street
    pub province: String,
    /// Case-insensitive substring of the category
    pub category: String,
    /// Exact price level
    pub price_level: String,
}

impl FilterQuery {
    pub fn new(
        province: impl Into<String>,
        category: impl Into<String>,
        price_level: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            category: category.into(),
            price_level: price_level.into(),
        }
    }

    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter::new(FilterCondition::And(vec![
            FilterCondition::Contains {
                field: Field::Street,
                value: self.province.clone(),
            },
            FilterCondition::Contains {
                field: Field::Category,
                value: self.category.clone(),
            },
            FilterCondition::Equals {
                field: Field::PriceLevel,
                value: self.price_level.clone(),
            },
        ]))
    }
}

/// The first `top_n` rows, in table order, that pass `query`.
///
/// No ranking happens here. No survivor yields `[NoMatch]`.
pub fn recommend_filtered(ctx: &RecommenderContext, query: &FilterQuery, top_n: usize) -> Vec<Recommendation> {
    let filter = query.to_filter();
    let mut survivors = ctx
        .dataset()
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .peekable();

    if survivors.peek().is_none() {
        debug!("No restaurant passes {:?}", query);
        return vec![Recommendation::NoMatch];
    }

    survivors
        .take(top_n)
        .map(|record| Recommendation::Restaurant(ResultEntry::from_record(record, ctx.search_links())))
        .collect()
}
