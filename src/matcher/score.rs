/// Minimum substitution distance between `search_key` and any equal-length window of
/// `candidate_key`.
///
/// Returns `None` when the candidate is shorter than the search key: such a candidate is
/// not eligible for ranking. Both keys are expected to come from
/// [`normalize`](super::normalize), so they are plain ASCII and compared byte by byte.
pub fn window_score(candidate_key: &str, search_key: &str) -> Option<usize> {
    let candidate = candidate_key.as_bytes();
    let search = search_key.as_bytes();

    if candidate.len() < search.len() {
        return None;
    }
    if search.is_empty() {
        return Some(0);
    }

    let mut best = usize::MAX;
    for window in candidate.windows(search.len()) {
        best = best.min(mismatches(window, search));
        if best == 0 {
            break;
        }
    }
    Some(best)
}

/// Hamming distance over two slices of equal length.
fn mismatches(window: &[u8], search: &[u8]) -> usize {
    window.iter().zip(search).filter(|(a, b)| a != b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_candidate_is_ineligible() {
        assert_eq!(window_score("gro", "gros"), None);
        assert_eq!(window_score("", "g"), None);
    }

    #[test]
    fn equal_length_compares_whole_keys() {
        assert_eq!(window_score("gros", "gros"), Some(0));
        assert_eq!(window_score("gras", "gros"), Some(1));
        assert_eq!(window_score("abcd", "test"), Some(4));
    }

    #[test]
    fn substring_scores_zero() {
        assert_eq!(window_score("grossir", "gros"), Some(0));
        assert_eq!(window_score("engros", "gros"), Some(0));
    }

    #[test]
    fn best_window_wins() {
        // "agressif": windows agre, gres, ress, essi, ssif -> "gres" differs once.
        assert_eq!(window_score("agressif", "gros"), Some(1));
        // "graisse": grai, rais, aiss, isse -> best is "grai" with two mismatches.
        assert_eq!(window_score("graisse", "gros"), Some(2));
    }

    #[test]
    fn no_insertions_or_deletions_are_modeled() {
        // One inserted letter shifts alignment: windows "grxo" and "rxos" both miss twice.
        assert_eq!(window_score("grxos", "gros"), Some(2));
    }

    #[test]
    fn empty_search_key_scores_zero() {
        assert_eq!(window_score("gros", ""), Some(0));
        assert_eq!(window_score("", ""), Some(0));
    }
}
