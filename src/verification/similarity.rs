use std::collections::HashSet;

/// Jaccard similarity of the whitespace-separated word sets of `a` and `b`.
///
/// Symmetric and bounded in `[0, 1]`. Two texts with no words score `0.0`.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let a_words: HashSet<&str> = a.split_whitespace().collect();
    let b_words: HashSet<&str> = b.split_whitespace().collect();

    let union = a_words.union(&b_words).count();
    if union == 0 {
        return 0.0;
    }

    let matches = a_words.intersection(&b_words).count();
    matches as f64 / union as f64
}
