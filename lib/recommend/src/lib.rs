//! # dishx Recommend
//!
//! Restaurant recommenders over a [`RecommenderContext`].
//!
//! - **Similarity**: resolve a name query to a reference row and return its
//!   nearest neighbors by cosine distance over TF-IDF vectors
//! - **Filtering**: browse rows by province, category and exact price level
//! - **Links**: every result carries a usable detail URL
//!
//! ## Example
//!
//! ```rust
//! use dishx_core::{Dataset, Restaurant};
//! use dishx_recommend::{
//!     recommend_filtered, recommend_similar, FilterQuery, Recommendation,
//!     RecommenderConfig, RecommenderContext,
//! };
//!
//! let dataset = Dataset::from_records(vec![
//!     Restaurant::new("Somtam Corner", "Thai", "Isaan", "$").with_street("Ladprao, Bangkok"),
//!     Restaurant::new("Green Curry House", "Thai", "Isaan", "$").with_street("Silom, Bangkok"),
//!     Restaurant::new("Pizza Nonna", "Italian", "Pizza", "$$"),
//! ]).unwrap();
//! let ctx = RecommenderContext::build(dataset, RecommenderConfig::default()).unwrap();
//!
//! let similar = recommend_similar(&ctx, "somtam", 1);
//! assert_eq!(similar[0].entry().unwrap().name, "Green Curry House");
//!
//! let browse = recommend_filtered(&ctx, &FilterQuery::new("Bangkok", "Thai", "$$"), 5);
//! assert_eq!(browse, vec![Recommendation::NoMatch]);
//! ```
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Dataset   │────>│   TF-IDF    │────>│  k-NN index │
//! │   (rows)    │     │ (features)  │     │  (cosine)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       v                                        v
//! ┌─────────────┐                         ┌─────────────┐
//! │  Filtered   │                         │   Similar   │
//! └─────────────┘                         └─────────────┘
//!       │                                        │
//!       └──────────────> ResultEntry <───────────┘
//! ```

pub mod context;
pub mod entry;
pub mod filtered;
pub mod link;
pub mod similar;

pub use context::{ContextCache, RecommenderConfig, RecommenderContext};
pub use entry::{entries, Recommendation, ResultEntry, NO_MATCH_MESSAGE, NO_SIMILAR_FOUND_MESSAGE};
pub use filtered::{recommend_filtered, FilterQuery, DEFAULT_FILTER_TOP_N};
pub use link::{is_usable_url, resolve_url, SearchLinkConfig, URL_PLACEHOLDER};
pub use similar::{matching_rows, recommend_similar, recommend_similar_to_row, DEFAULT_SIMILAR_TOP_N};
