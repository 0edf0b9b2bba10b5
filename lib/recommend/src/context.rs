use crate::link::SearchLinkConfig;
use ahash::AHashMap;
use dishx_core::{
    Dataset, Error, NearestNeighbors, Result, SparseVector, TfidfConfig, TfidfVectorizer,
    DEFAULT_N_NEIGHBORS,
};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Configuration for building a recommender context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommenderConfig {
    pub indexer: TfidfConfig,
    pub n_neighbors: usize,
    pub search: SearchLinkConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            indexer: TfidfConfig::default(),
            n_neighbors: DEFAULT_N_NEIGHBORS,
            search: SearchLinkConfig::default(),
        }
    }
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<()> {
        self.indexer.validate()?;
        if self.n_neighbors == 0 {
            return Err(Error::InvalidConfig("n_neighbors must be at least 1".to_string()));
        }
        if self.search.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("search base URL cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Everything both recommenders read: the table, its fitted vocabulary,
/// one vector per row and the neighbor index over them.
///
/// Built once and never mutated afterwards.
#[derive(Debug)]
pub struct RecommenderContext {
    config: RecommenderConfig,
    dataset: Dataset,
    vectorizer: TfidfVectorizer,
    index: NearestNeighbors,
}

impl RecommenderContext {
    /// Fit the feature index over `dataset`
    pub fn build(dataset: Dataset, config: RecommenderConfig) -> Result<Self> {
        config.validate()?;

        let documents = dataset.combined_features();
        let (vectorizer, vectors) = TfidfVectorizer::fit_transform(config.indexer, &documents)?;
        let index = NearestNeighbors::fit(vectors, config.n_neighbors)?;

        info!(
            "Recommender ready: {} restaurants, {} terms",
            dataset.len(),
            vectorizer.vocabulary_len()
        );

        Ok(Self {
            config,
            dataset,
            vectorizer,
            index,
        })
    }

    /// Read the CSV at `path` and fit the feature index
    pub fn load<P: AsRef<Path>>(path: P, config: RecommenderConfig) -> Result<Self> {
        let dataset = Dataset::from_path(path)?;
        Self::build(dataset, config)
    }

    #[inline]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    #[inline]
    pub fn index(&self) -> &NearestNeighbors {
        &self.index
    }

    #[inline]
    pub fn vector(&self, row: usize) -> Option<&SparseVector> {
        self.index.vector(row)
    }

    #[inline]
    pub fn search_links(&self) -> &SearchLinkConfig {
        &self.config.search
    }
}

/// Memoizes loaded contexts by dataset path
///
/// The first request for a path pays for loading and fitting; later requests
/// share the same `Arc`. Entries stay until invalidated.
#[derive(Debug, Default)]
pub struct ContextCache {
    entries: RwLock<AHashMap<PathBuf, Arc<RecommenderContext>>>,
}

impl ContextCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load<P: AsRef<Path>>(
        &self,
        path: P,
        config: &RecommenderConfig,
    ) -> Result<Arc<RecommenderContext>> {
        let key = path.as_ref().to_path_buf();

        if let Some(ctx) = self.entries.read().get(&key) {
            if ctx.config() == config {
                debug!("Context cache hit for {:?}", key);
                return Ok(ctx.clone());
            }
        }

        let mut entries = self.entries.write();
        // Another caller may have loaded it while we waited for the lock
        if let Some(ctx) = entries.get(&key) {
            if ctx.config() == config {
                return Ok(ctx.clone());
            }
        }

        let ctx = Arc::new(RecommenderContext::load(&key, config.clone())?);
        entries.insert(key, ctx.clone());
        Ok(ctx)
    }

    /// Drop the cached context for `path`; returns whether one was cached
    pub fn invalidate<P: AsRef<Path>>(&self, path: P) -> bool {
        self.entries.write().remove(path.as_ref()).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
