//! # dishx
//!
//! A small restaurant recommender over a CSV table of restaurants.
//!
//! dishx offers two ways to find somewhere to eat:
//!
//! - **Similar restaurants**: type part of a name, get the restaurants whose
//!   category, cuisine and price level look most alike (TF-IDF + cosine k-NN)
//! - **Filtered browsing**: pick a province, a category and a price level
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! dishx --data Lineman_Shops_Final_Clean.csv similar "Somtam"
//! dishx --data Lineman_Shops_Final_Clean.csv filter --province Bangkok --category Thai --price-level '$'
//! dishx --data Lineman_Shops_Final_Clean.csv shell
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use dishx::prelude::*;
//!
//! let ctx = RecommenderContext::load("shops.csv", RecommenderConfig::default()).unwrap();
//! for item in recommend_similar(&ctx, "Somtam", DEFAULT_SIMILAR_TOP_N) {
//!     println!("{}", item);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `dishx-core` - Records, CSV loading, TF-IDF, sparse vectors, k-NN, filters
//! - `dishx-recommend` - Recommender context, similarity and filter recommenders, links

// Re-export core types
pub use dishx_core::{
    Dataset, Restaurant, RowId,
    TfidfConfig, TfidfVectorizer, StopWords,
    SparseVector, NearestNeighbors, Neighbor,
    Filter, RecordFilter, FilterCondition, Field,
    Error, Result,
};

// Re-export recommenders
pub use dishx_recommend::{
    RecommenderContext, RecommenderConfig, ContextCache,
    Recommendation, ResultEntry, FilterQuery, SearchLinkConfig,
    recommend_similar, recommend_similar_to_row, matching_rows,
    recommend_filtered, resolve_url,
    DEFAULT_SIMILAR_TOP_N, DEFAULT_FILTER_TOP_N,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Dataset, Restaurant,
        TfidfConfig, StopWords,
        Error, Result,
        RecommenderContext, RecommenderConfig, ContextCache,
        Recommendation, ResultEntry, FilterQuery, SearchLinkConfig,
        recommend_similar, recommend_similar_to_row, matching_rows,
        recommend_filtered, resolve_url,
        DEFAULT_SIMILAR_TOP_N, DEFAULT_FILTER_TOP_N,
    };
}
