//! Alphabet partitioning
//!
//! Splits the alphabet index range into per-worker sub-ranges. A sub-range
//! constrains only the leading symbol of a worker's candidates, so disjoint
//! sub-ranges give disjoint candidate subspaces.

use std::ops::Range;

/// Split `[0, k)` into `n` contiguous, disjoint ranges
///
/// Uses `chunk = ceil(k / n)`; range `i` is `[i * chunk, (i + 1) * chunk)`
/// clamped to `k`. When `n > k` the trailing ranges are empty.
///
/// # Arguments
/// * `k` - Alphabet size
/// * `n` - Number of partitions (must be > 0)
///
/// # Returns
/// Exactly `n` ranges whose union is `[0, k)`
pub fn partition(k: usize, n: usize) -> Vec<Range<usize>> {
    debug_assert!(n > 0, "partition count must be positive");
    let chunk = k.div_ceil(n.max(1));

    (0..n)
        .map(|i| {
            let lo = (i * chunk).min(k);
            let hi = ((i + 1) * chunk).min(k);
            lo..hi
        })
        .collect()
}

/// Number of candidates with leading index in a range of `width` symbols
///
/// `width * (1 + k + k^2 + ... + k^(max_len - 1))`, saturating at `u128::MAX`.
pub fn subspace_size(width: usize, k: usize, max_len: usize) -> u128 {
    let k = k as u128;
    let mut tail_total: u128 = 0;
    let mut power: u128 = 1;

    for _ in 0..max_len {
        tail_total = tail_total.saturating_add(power);
        power = power.saturating_mul(k);
    }

    tail_total.saturating_mul(width as u128)
}
