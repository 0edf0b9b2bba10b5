//! TF-IDF vectorizer
//!
//! Fits a bounded vocabulary and smoothed inverse document frequencies over a
//! corpus, then maps documents to L2-normalised sparse vectors.
//!
//! ```text
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, d)   = count(t, d) * idf(t)
//! vector(d) = w(., d) / ||w(., d)||
//! ```

use crate::sparse::SparseVector;
use crate::tokenizer::{tokenize, StopWords};
use crate::{Error, Result};
use ahash::{AHashMap, AHashSet};
use tracing::{debug, info};

/// Default upper bound on vocabulary size
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Configuration for fitting a vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfidfConfig {
    pub max_features: usize,
    pub stop_words: StopWords,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            stop_words: StopWords::English,
        }
    }
}

impl TfidfConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(Error::InvalidConfig("max_features must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// A fitted vocabulary with per-term idf weights
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    config: TfidfConfig,
    /// Column order: lexicographic by term
    terms: Vec<String>,
    term_index: AHashMap<String, u32>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights from `documents`
    pub fn fit<S: AsRef<str>>(config: TfidfConfig, documents: &[S]) -> Result<Self> {
        config.validate()?;

        let n_docs = documents.len();
        let mut term_freq: AHashMap<String, usize> = AHashMap::new();
        let mut doc_freq: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = tokenize(doc.as_ref(), config.stop_words);
            let mut seen: AHashSet<&str> = AHashSet::new();
            for token in &tokens {
                *term_freq.entry(token.clone()).or_insert(0) += 1;
                if seen.insert(token.as_str()) {
                    *doc_freq.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        if term_freq.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let mut ranked: Vec<(String, usize)> = term_freq.into_iter().collect();
        if ranked.len() > config.max_features {
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            debug!(
                "Vocabulary capped at {} of {} terms",
                config.max_features,
                ranked.len()
            );
            ranked.truncate(config.max_features);
        }

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let term_index: AHashMap<String, u32> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx as u32))
            .collect();

        let n = n_docs as f32;
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f32;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        info!("Fitted TF-IDF vocabulary: {} terms over {} documents", terms.len(), n_docs);

        Ok(Self {
            config,
            terms,
            term_index,
            idf,
        })
    }

    /// Fit on `documents` and return one vector per document, in input order
    pub fn fit_transform<S: AsRef<str>>(
        config: TfidfConfig,
        documents: &[S],
    ) -> Result<(Self, Vec<SparseVector>)> {
        let vectorizer = Self::fit(config, documents)?;
        let vectors = documents.iter().map(|d| vectorizer.transform(d.as_ref())).collect();
        Ok((vectorizer, vectors))
    }

    /// Map a document onto the fitted vocabulary; unknown terms are dropped
    pub fn transform(&self, document: &str) -> SparseVector {
        let pairs: Vec<(u32, f32)> = tokenize(document, self.config.stop_words)
            .iter()
            .filter_map(|token| self.term_index.get(token.as_str()).copied())
            .map(|idx| (idx, 1.0))
            .collect();

        // SparseVector::new sums the repeated indices into raw counts
        let counts = SparseVector::new(pairs);
        let weighted: Vec<(u32, f32)> = counts
            .indices()
            .iter()
            .zip(counts.values())
            .map(|(&idx, &count)| (idx, count * self.idf[idx as usize]))
            .collect();

        let mut vector = SparseVector::new(weighted);
        vector.normalize();
        vector
    }

    #[inline]
    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn term_index(&self, term: &str) -> Option<u32> {
        self.term_index.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_index(term).map(|idx| self.idf[idx as usize])
    }
}
