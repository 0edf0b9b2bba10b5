//! Restaurant table loading
//!
//! Reads the source CSV once into an immutable, table-ordered list of
//! [`Restaurant`] rows. Row order is significant: it is the tie-break order for
//! neighbor queries and the output order for filtered browsing.

use crate::record::{Restaurant, RowId};
use crate::{Error, Result};
use ahash::AHashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns every source table must carry
pub const REQUIRED_COLUMNS: [&str; 6] = ["name", "category", "cuisine", "price_level", "street", "url"];

/// An immutable, table-ordered set of restaurants
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Restaurant>,
}

impl Dataset {
    /// Build a dataset from already-parsed records
    pub fn from_records(records: Vec<Restaurant>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }
        for (row, record) in records.iter().enumerate() {
            validate_feature_fields(row, record)?;
        }
        Ok(Self { records })
    }

    /// Load a dataset from a CSV file with a header row
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading restaurants from {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a dataset from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn {
                    column: column.to_string(),
                    available: headers.iter().map(str::to_string).collect(),
                });
            }
        }

        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<Restaurant>().enumerate() {
            let record = result?;
            validate_feature_fields(row, &record)?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }

        info!("Loaded {} restaurants", records.len());
        debug!("Columns: {:?}", headers);
        Ok(Self { records })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, row: RowId) -> Option<&Restaurant> {
        self.records.get(row)
    }

    #[inline]
    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowId, &Restaurant)> {
        self.records.iter().enumerate()
    }

    /// Combined feature strings, one per row, in table order
    pub fn combined_features(&self) -> Vec<String> {
        self.records.iter().map(Restaurant::combined_features).collect()
    }

    /// Distinct non-empty streets, first-seen order
    pub fn streets(&self) -> Vec<&str> {
        distinct(self.records.iter().filter_map(|r| r.street()))
    }

    /// Distinct categories, first-seen order
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.category.as_str()))
    }

    /// Distinct price levels, first-seen order
    pub fn price_levels(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.price_level.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = AHashSet::new();
    values
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(*v))
        .collect()
}

fn validate_feature_fields(row: RowId, record: &Restaurant) -> Result<()> {
    let fields = [
        ("category", &record.category),
        ("cuisine", &record.cuisine),
        ("price_level", &record.price_level),
    ];
    for (column, value) in fields {
        if value.trim().is_empty() {
            return Err(Error::MissingField { row, column });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
name,category,cuisine,price_level,street,url,rating
Somtam Corner,Thai,Isaan,$,\"Ladprao Rd, Bangkok\",-,4.5
Green Curry House,Thai,Isaan,$,\"Silom, Bangkok\",https://example.com/gch,4.1
Pizza Nonna,Italian,Pizza,$$,\"Nimman, Chiang Mai\",,3.9
";

    #[test]
    fn test_load_from_reader() {
        let ds = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);

        let first = ds.get(0).unwrap();
        assert_eq!(first.name, "Somtam Corner");
        assert_eq!(first.street(), Some("Ladprao Rd, Bangkok"));
        assert_eq!(first.url(), Some("-"));

        let third = ds.get(2).unwrap();
        assert!(third.url().is_none());
    }

    #[test]
    fn test_combined_features_in_table_order() {
        let ds = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(
            ds.combined_features(),
            vec!["Thai Isaan $", "Thai Isaan $", "Italian Pizza $$"]
        );
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "name,category,cuisine,price_level,street\nA,Thai,Isaan,$,Bangkok\n";
        match Dataset::from_reader(csv.as_bytes()) {
            Err(Error::MissingColumn { column, available }) => {
                assert_eq!(column, "url");
                assert_eq!(available.len(), 5);
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_feature_field_is_an_error() {
        let csv = "name,category,cuisine,price_level,street,url\nA,Thai,,$,Bangkok,-\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(Error::MissingField { row: 0, column: "cuisine" })
        ));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv = "name,category,cuisine,price_level,street,url\n";
        assert!(matches!(Dataset::from_reader(csv.as_bytes()), Err(Error::EmptyDataset)));
        assert!(matches!(Dataset::from_records(Vec::new()), Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_selector_values_are_distinct_in_first_seen_order() {
        let ds = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ds.categories(), vec!["Thai", "Italian"]);
        assert_eq!(ds.price_levels(), vec!["$", "$$"]);
        assert_eq!(
            ds.streets(),
            vec!["Ladprao Rd, Bangkok", "Silom, Bangkok", "Nimman, Chiang Mai"]
        );
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shops.csv");
        std::fs::write(&path, CSV).unwrap();

        let ds = Dataset::from_path(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(matches!(
            Dataset::from_path(dir.path().join("missing.csv")),
            Err(Error::Io(_))
        ));
    }
}
