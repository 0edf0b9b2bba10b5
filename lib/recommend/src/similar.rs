//! "More like this" recommendations
//!
//! A free-text name query is resolved to a reference row, and the rows whose
//! combined-feature vectors sit closest to it by cosine distance are returned.

use crate::context::RecommenderContext;
use crate::entry::{Recommendation, ResultEntry};
use dishx_core::{contains_ignore_case, Result, RowId};
use tracing::{debug, warn};

pub const DEFAULT_SIMILAR_TOP_N: usize = 3;

/// Rows whose name contains `query`, case-insensitively, in table order
pub fn matching_rows(ctx: &RecommenderContext, query: &str) -> Vec<RowId> {
    ctx.dataset()
        .iter()
        .filter(|(_, record)| contains_ignore_case(&record.name, query))
        .map(|(row, _)| row)
        .collect()
}

/// Up to `top_n` restaurants most similar to the first name match for `query`.
///
/// When several names match, the first one in table order is the reference;
/// callers that want to let the user choose should use [`matching_rows`] and
/// [`recommend_similar_to_row`]. No match yields `[NoSimilarFound]`.
pub fn recommend_similar(ctx: &RecommenderContext, query: &str, top_n: usize) -> Vec<Recommendation> {
    let matches = matching_rows(ctx, query);
    let Some(&reference) = matches.first() else {
        debug!("No restaurant name contains {:?}", query);
        return vec![Recommendation::NoSimilarFound];
    };

    if matches.len() > 1 {
        warn!(
            "{} restaurants match {:?}; using the first, {:?}",
            matches.len(),
            query,
            ctx.dataset().get(reference).map(|r| r.name.as_str()).unwrap_or_default()
        );
    }

    // `reference` came from the dataset, so the lookup cannot miss
    recommend_similar_to_row(ctx, reference, top_n).unwrap_or_default()
}

/// Up to `top_n` restaurants nearest to `row`, never including `row` itself
pub fn recommend_similar_to_row(
    ctx: &RecommenderContext,
    row: RowId,
    top_n: usize,
) -> Result<Vec<Recommendation>> {
    if top_n == 0 {
        return Ok(Vec::new());
    }

    let neighbors = ctx.index().kneighbors_of_row(row, top_n + 1)?;
    debug!("Row {} neighbors: {:?}", row, neighbors);

    Ok(neighbors
        .into_iter()
        // The reference is usually first at distance 0, but duplicates or a
        // zero vector can move it, so drop it by id
        .filter(|n| n.row != row)
        .take(top_n)
        .filter_map(|n| ctx.dataset().get(n.row))
        .map(|record| Recommendation::Restaurant(ResultEntry::from_record(record, ctx.search_links())))
        .collect())
}
