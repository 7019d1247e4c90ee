use super::normalize::normalize;
use super::score::window_score;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// A candidate that survived the length floor, with the keys it is ranked by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The candidate exactly as the caller supplied it.
    pub term: String,
    /// Fewest aligned mismatches against the search key over all windows.
    pub score: usize,
    /// Normalized length difference to the search key.
    pub length_delta: usize,
}

impl Suggestion {
    fn ranking_order(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.length_delta.cmp(&other.length_delta))
            .then_with(|| self.term.as_bytes().cmp(other.term.as_bytes()))
    }
}

/// Rank `candidates` against `search_term` and keep the best `count`.
///
/// Ordering is ascending on score, then length delta, then the raw term in byte order.
/// Blank candidates are skipped, candidates whose normalized key is shorter than the
/// search key are dropped, and an empty search key yields nothing at all. An absent
/// candidate list is an empty iterator (`Option<Vec<_>>` can be passed as
/// `opt.into_iter().flatten()`).
pub fn rank<I>(search_term: &str, candidates: I, count: usize) -> Vec<Suggestion>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let search_key = normalize(search_term);
    if search_key.is_empty() || count == 0 {
        debug!(search_term, count, "nothing to rank");
        return Vec::new();
    }

    let mut seen = 0usize;
    let mut scored: Vec<Suggestion> = candidates
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|raw| score_candidate(raw.as_ref(), &search_key))
        .collect();

    scored.sort_by(Suggestion::ranking_order);
    debug!(
        search_key = %search_key,
        candidates = seen,
        eligible = scored.len(),
        count,
        "ranked candidates"
    );

    scored.truncate(count);
    scored
}

/// Same ranking as [`rank`], returning only the raw candidate strings.
pub fn suggest<I>(search_term: &str, candidates: I, count: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    rank(search_term, candidates, count)
        .into_iter()
        .map(|suggestion| suggestion.term)
        .collect()
}

fn score_candidate(raw: &str, search_key: &str) -> Option<Suggestion> {
    if raw.trim().is_empty() {
        return None;
    }

    let key = normalize(raw);
    let Some(score) = window_score(&key, search_key) else {
        trace!(candidate = raw, "shorter than search key");
        return None;
    };
    let length_delta = key.len().abs_diff(search_key.len());
    trace!(candidate = raw, score, length_delta, "scored");

    Some(Suggestion {
        term: raw.to_string(),
        score,
        length_delta,
    })
}
