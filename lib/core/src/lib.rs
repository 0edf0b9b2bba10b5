//! # dishx Core
//!
//! Core library for the dishx restaurant recommender.
//!
//! This crate provides the table and the feature index:
//!
//! - [`Restaurant`] - A restaurant row and its combined feature string
//! - [`Dataset`] - CSV loading into an immutable, table-ordered set of rows
//! - [`TfidfVectorizer`] - Bounded-vocabulary TF-IDF over combined features
//! - [`SparseVector`] - Sparse term weights with cosine distance
//! - [`NearestNeighbors`] - Brute-force cosine k-NN
//! - [`RecordFilter`] - Field predicates for browsing
//!
//! ## Example
//!
//! ```rust
//! use dishx_core::{Dataset, NearestNeighbors, Restaurant, TfidfConfig, TfidfVectorizer};
//!
//! let dataset = Dataset::from_records(vec![
//!     Restaurant::new("Somtam Corner", "Thai", "Isaan", "$"),
//!     Restaurant::new("Green Curry House", "Thai", "Isaan", "$"),
//!     Restaurant::new("Pizza Nonna", "Italian", "Pizza", "$$"),
//! ]).unwrap();
//!
//! let (_, vectors) = TfidfVectorizer::fit_transform(
//!     TfidfConfig::default(),
//!     &dataset.combined_features(),
//! ).unwrap();
//! let index = NearestNeighbors::fit(vectors, 6).unwrap();
//!
//! let hits = index.kneighbors_of_row(0, 2).unwrap();
//! assert_eq!(hits[1].row, 1);
//! ```

pub mod error;
pub mod record;
pub mod dataset;
pub mod tokenizer;
pub mod sparse;
pub mod tfidf;
pub mod neighbors;
pub mod filter;

pub use error::{Error, Result};
pub use record::{Restaurant, RowId};
pub use dataset::{Dataset, REQUIRED_COLUMNS};
pub use tokenizer::{tokenize, StopWords};
pub use sparse::SparseVector;
pub use tfidf::{TfidfConfig, TfidfVectorizer, DEFAULT_MAX_FEATURES};
pub use neighbors::{Neighbor, NearestNeighbors, DEFAULT_N_NEIGHBORS};
pub use filter::{contains_ignore_case, Field, Filter, FilterCondition, RecordFilter};
