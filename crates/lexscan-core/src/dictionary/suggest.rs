//! "Did you mean" matching.
//!
//! Similarity is `strsim::normalized_levenshtein`: 1.0 for identical strings,
//! 0.0 for completely different ones. The best candidate at or above the
//! cutoff wins; on a tie the first candidate in iteration order is kept, which
//! for the dictionary's sorted keys is the lexicographically smallest.

/// Cutoff used unless configured otherwise.
pub const DEFAULT_SUGGESTION_CUTOFF: f64 = 0.6;

pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Closest candidate to `word` with similarity >= `cutoff`.
pub fn closest_match<'a, I, S>(word: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let candidate: &str = candidate.as_ref();
        let score = similarity(word, candidate);
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_bounds() {
        assert!((similarity("same", "same") - 1.0).abs() < 1e-9);
        assert!(similarity("abc", "xyz") < 1e-9);
    }

    #[test]
    fn picks_highest_score() {
        let words = ["cat", "cart", "dog"];
        assert_eq!(closest_match("carts", &words, 0.5), Some("cart"));
    }

    #[test]
    fn tie_keeps_first_candidate() {
        // "bat" and "cat" are both one substitution from "hat".
        let words = ["bat", "cat"];
        assert_eq!(closest_match("hat", &words, 0.5), Some("bat"));
    }

    #[test]
    fn below_cutoff_is_none() {
        let words = ["elephant"];
        assert_eq!(closest_match("ant", &words, 0.6), None);
    }

    #[test]
    fn works_with_owned_strings() {
        let words = vec!["koulu".to_string(), "oppilas".to_string()];
        assert_eq!(closest_match("koulo", &words, 0.6), Some("koulu"));
    }
}
