//! Workload generators for the gx container benchmarks.
//!
//! - [`insert_positions`]: deterministic pseudo-random insertion points
//! - [`filled_slice`]: a slice of `len` sequential values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gx_collections::Slice;

/// Generate `n` insertion positions, each valid for a slice that grows by
/// one element per insert, starting from `start_len`.
///
/// Positions are derived from `seed` with an LCG step, so the same seed
/// always yields the same workload.
pub fn insert_positions(start_len: usize, n: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as usize) % (start_len + i + 1)
        })
        .collect()
}

/// A slice holding `0..len`.
pub fn filled_slice(len: usize) -> Slice<u64> {
    (0..len as u64).collect()
}
