use crate::record::RowId;
use crate::sparse::SparseVector;
use crate::{Error, Result};
use ordered_float::OrderedFloat;

/// Default neighbor count: five neighbors plus the query row itself
pub const DEFAULT_N_NEIGHBORS: usize = 6;

/// A neighbor hit: the row and its cosine distance from the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: RowId,
    pub distance: f32,
}

/// Brute-force cosine-distance k-NN over a fixed set of sparse vectors
///
/// Built once, read-only afterwards. Results are ordered by
/// `(distance, row)`, so equal distances come back in table order.
#[derive(Debug, Clone)]
pub struct NearestNeighbors {
    vectors: Vec<SparseVector>,
    n_neighbors: usize,
}

impl NearestNeighbors {
    pub fn fit(vectors: Vec<SparseVector>, n_neighbors: usize) -> Result<Self> {
        if n_neighbors == 0 {
            return Err(Error::InvalidConfig("n_neighbors must be at least 1".to_string()));
        }
        Ok(Self { vectors, n_neighbors })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    #[inline]
    pub fn vector(&self, row: RowId) -> Option<&SparseVector> {
        self.vectors.get(row)
    }

    /// The `k` closest rows to `query`, at most `len()` of them
    pub fn kneighbors(&self, query: &SparseVector, k: usize) -> Vec<Neighbor> {
        let mut hits: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(row, vector)| Neighbor {
                row,
                distance: query.cosine_distance(vector),
            })
            .collect();

        hits.sort_by_key(|n| (OrderedFloat(n.distance), n.row));
        hits.truncate(k);
        hits
    }

    /// Query with the configured neighbor count
    pub fn kneighbors_default(&self, query: &SparseVector) -> Vec<Neighbor> {
        self.kneighbors(query, self.n_neighbors)
    }

    /// Query with the stored vector of `row`
    pub fn kneighbors_of_row(&self, row: RowId, k: usize) -> Result<Vec<Neighbor>> {
        let query = self.vectors.get(row).ok_or(Error::RowOutOfRange {
            row,
            len: self.vectors.len(),
        })?;
        Ok(self.kneighbors(query, k))
    }
}
