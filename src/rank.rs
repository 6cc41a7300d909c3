//! Score ranking helpers.

use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Indices and values of the `k` largest scores, highest first.
///
/// Ties prefer the lower index, and `NaN` entries are skipped, so callers
/// can mask nodes out of the ranking by overwriting their score with
/// `f64::NAN`.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 {
        return Vec::new();
    }

    // Min-heap over (score, Reverse(index)) keeps the k best seen so far.
    let mut heap: BinaryHeap<Reverse<(NotNan<f64>, Reverse<usize>)>> =
        BinaryHeap::with_capacity(k + 1);
    for (index, &score) in scores.iter().enumerate() {
        let Ok(score) = NotNan::new(score) else { continue };
        heap.push(Reverse((score, Reverse(index))));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut ranked: Vec<(usize, f64)> = heap
        .into_iter()
        .map(|Reverse((score, Reverse(index)))| (index, score.into_inner()))
        .collect();
    ranked.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0))
    });
    ranked
}
