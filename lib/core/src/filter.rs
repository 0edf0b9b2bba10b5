// Record filters for browsing the table
use crate::record::Restaurant;

pub trait Filter {
    fn matches(&self, record: &Restaurant) -> bool;
}

/// Restaurant columns a condition can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Cuisine,
    PriceLevel,
    Street,
    Url,
}

impl Field {
    fn value<'a>(&self, record: &'a Restaurant) -> Option<&'a str> {
        match self {
            Field::Name => Some(record.name.as_str()),
            Field::Category => Some(record.category.as_str()),
            Field::Cuisine => Some(record.cuisine.as_str()),
            Field::PriceLevel => Some(record.price_level.as_str()),
            Field::Street => record.street(),
            Field::Url => record.url(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FilterCondition {
    /// Case-insensitive substring; an absent field never matches
    Contains { field: Field, value: String },
    /// Exact, case-sensitive equality
    Equals { field: Field, value: String },
    And(Vec<FilterCondition>),
}

#[derive(Debug, Clone)]
pub struct RecordFilter {
    condition: FilterCondition,
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl RecordFilter {
    pub fn new(condition: FilterCondition) -> Self {
        Self { condition }
    }

    pub fn condition(&self) -> &FilterCondition {
        &self.condition
    }

    fn matches_condition(condition: &FilterCondition, record: &Restaurant) -> bool {
        match condition {
            FilterCondition::Contains { field, value } => field
                .value(record)
                .map(|v| contains_ignore_case(v, value))
                .unwrap_or(false),
            FilterCondition::Equals { field, value } => field
                .value(record)
                .map(|v| v == value)
                .unwrap_or(false),
            FilterCondition::And(conditions) => {
                conditions.iter().all(|c| Self::matches_condition(c, record))
            }
        }
    }
}

impl Filter for RecordFilter {
    fn matches(&self, record: &Restaurant) -> bool {
        Self::matches_condition(&self.condition, record)
    }
}
