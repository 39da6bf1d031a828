//! Text similarity utilities for keyword matching and headline clustering.
//!
//! All scores are on a 0-100 scale over Unicode scalar values, so Sinhala
//! and Tamil keywords compare the same way English ones do. The three
//! measures mirror the classic fuzzy-matching trio:
//!
//! - [`ratio`]: whole-string similarity.
//! - [`partial_ratio`]: best window of the longer string against the shorter.
//! - [`token_set_ratio`]: word-order-insensitive comparison via token sets.

use std::collections::BTreeSet;

/// Length of the longest common subsequence of two char slices.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr[0] = 0;
    }
    prev[b.len()]
}

/// Similarity of two char slices: 200 * matches / total length, rounded.
fn slice_ratio(a: &[char], b: &[char]) -> u32 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let matches = lcs_len(a, b);
    (200.0 * matches as f64 / total as f64).round() as u32
}

/// Whole-string similarity on a 0-100 scale.
///
/// Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    slice_ratio(&a, &b)
}

/// Best-window similarity: the shorter string against every equal-length
/// window of the longer, on a 0-100 scale.
///
/// A string that appears verbatim inside the other scores 100. An empty
/// string against a non-empty one scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let ac: Vec<char> = a.chars().collect();
    let bc: Vec<char> = b.chars().collect();
    let (short, long) = if ac.len() <= bc.len() {
        (&ac, &bc)
    } else {
        (&bc, &ac)
    };
    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    let m = short.len();
    let mut best = 0;
    for start in 0..=(long.len() - m) {
        let score = slice_ratio(short, &long[start..start + m]);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// Lowercased alphanumeric tokens of the text, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Token-set similarity on a 0-100 scale.
///
/// Both texts are tokenized into sorted word sets; the score is the best of
/// comparing the shared core against each full set and the two full sets
/// against each other. Word order and duplicates do not matter, so one
/// headline whose words are a subset of another's scores 100. Either text
/// tokenizing to nothing scores 0.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let set_a: BTreeSet<String> = tokenize(a).into_iter().collect();
    let set_b: BTreeSet<String> = tokenize(b).into_iter().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0;
    }

    let shared: Vec<&str> = set_a
        .intersection(&set_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = set_a.difference(&set_b).map(String::as_str).collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).map(String::as_str).collect();

    let core = shared.join(" ");
    let combined_a = join_nonempty(&core, &only_a.join(" "));
    let combined_b = join_nonempty(&core, &only_b.join(" "));

    ratio(&core, &combined_a)
        .max(ratio(&core, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// Join two fragments with a single space, dropping empty sides.
fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{} {}", left, right),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- ratio ---

    #[test]
    fn test_ratio_identical() {
        assert_eq!(ratio("flood", "flood"), 100);
        assert_eq!(ratio("", ""), 100);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(ratio("abcd", "wxyz"), 0);
    }

    #[test]
    fn test_ratio_near_match() {
        // 5 shared chars of 11 total: 200*5/11 = 90.9 -> 91.
        assert_eq!(ratio("flood", "floods"), 91);
    }

    // --- partial_ratio ---

    #[test]
    fn test_partial_ratio_substring_scores_full() {
        assert_eq!(partial_ratio("rain", "heavy rain warning issued"), 100);
        assert_eq!(partial_ratio("heavy rain warning issued", "rain"), 100);
    }

    #[test]
    fn test_partial_ratio_fuzzy_window() {
        // Best window "heavyrain " shares 9 of 10 chars: 90.
        assert_eq!(partial_ratio("heavy rain", "heavyrain warning issued"), 90);
    }

    #[test]
    fn test_partial_ratio_empty() {
        assert_eq!(partial_ratio("", "anything"), 0);
        assert_eq!(partial_ratio("", ""), 100);
    }

    // --- tokenize ---

    #[test]
    fn test_tokenize_splits_and_lowercases() {
        assert_eq!(
            tokenize("Flood-warning: Galle, Matara!"),
            vec!["flood", "warning", "galle", "matara"]
        );
        assert!(tokenize("--- ---").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_non_latin_words() {
        let tokens = tokenize("ගංවතුර in Galle");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "ගංවතුර");
    }

    // --- token_set_ratio ---

    #[test]
    fn test_token_set_ratio_subset_scores_full() {
        assert_eq!(token_set_ratio("galle flood", "flood in galle town"), 100);
        assert_eq!(token_set_ratio("Galle flood!", "flood galle"), 100);
    }

    #[test]
    fn test_token_set_ratio_unrelated_is_low() {
        assert!(token_set_ratio("fuel price revision", "dengue cases rising") < 30);
    }

    #[test]
    fn test_token_set_ratio_empty_side_is_zero() {
        assert_eq!(token_set_ratio("", "flood"), 0);
        assert_eq!(token_set_ratio("...", "flood"), 0);
    }

    #[test]
    fn test_token_set_ratio_partial_overlap() {
        // Shared {flood, galle} against extra words on both sides stays
        // below the clustering threshold.
        let a = "galle flood alert issued urgently";
        let c = "galle flood rescue operation deployed rapidly";
        assert!(token_set_ratio(a, c) < 75);
    }
}
