use strsim::normalized_damerau_levenshtein;

/// Minimum similarity score (0-100 scale) for a fuzzy name match.
pub const SIMILARITY_THRESHOLD: u32 = 70;

/// Similarity between a search term and a contact name on a 0-100 scale.
///
/// The term is compared against the whole lower-cased name and against each
/// whitespace-separated part of it; the best score wins. Normalized
/// Damerau-Levenshtein distance is the metric (transpositions count as one
/// edit), so "Jon" and "Jhon" both score 75 against "John Smith" via the
/// "john" part while "Jane Doe" stays at 50.
pub fn name_similarity(term: &str, name: &str) -> u32 {
    let term = term.trim().to_lowercase();
    let name = name.trim().to_lowercase();
    if term.is_empty() || name.is_empty() {
        return 0;
    }

    let mut best = normalized_damerau_levenshtein(&term, &name);
    for part in name.split_whitespace() {
        best = best.max(normalized_damerau_levenshtein(&term, part));
    }
    (best * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::{name_similarity, SIMILARITY_THRESHOLD};

    #[test]
    fn typo_in_first_name_still_matches() {
        assert!(name_similarity("Jon", "John Smith") >= SIMILARITY_THRESHOLD);
        assert!(name_similarity("Jhon", "John Smith") >= SIMILARITY_THRESHOLD);
    }

    #[test]
    fn unrelated_name_scores_below_threshold() {
        assert!(name_similarity("Jon", "Jane Doe") < SIMILARITY_THRESHOLD);
    }

    #[test]
    fn exact_match_scores_full() {
        assert_eq!(name_similarity("john smith", "John Smith"), 100);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(name_similarity("", "John"), 0);
        assert_eq!(name_similarity("John", "  "), 0);
    }
}
