//! Top-K sentence selection.

use std::cmp::Ordering;

/// Pick the `k` best-scoring indices and return them in document order.
///
/// Ties go to the earlier sentence. Never returns more than `scores.len()`.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    ranked.truncate(k);
    ranked.sort_unstable();
    ranked
}
