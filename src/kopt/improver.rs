//! The k-opt improvement loop.
//!
//! One sweep enumerates every strictly increasing choice of k cut
//! positions, prices all non-identity segment recombinations against the
//! broken edges, and remembers the best strict improvement; the winning
//! move is applied by copying segments (forward or reversed) into a
//! scratch buffer and swapping buffers. Sweeps repeat until a sweep finds
//! no improvement.

use tracing::trace;

use super::combinations::{Catalog, Combination};
use crate::tour::{DistanceMatrix, Improver, TourState};

/// Best-improvement k-opt over a fixed recombination catalog.
///
/// The catalog decides the move set: the normalized catalog yields full
/// k-opt, the pure catalog the restricted variant used by the incremental
/// driver stages.
pub(crate) struct KOptImprover {
    k: usize,
    combinations: Catalog,
}

impl KOptImprover {
    /// `combinations` must be a catalog for this `k`, identity entry
    /// first.
    pub(crate) fn new(k: usize, combinations: Catalog) -> Self {
        KOptImprover { k, combinations }
    }
}

impl Improver for KOptImprover {
    fn improve(&self, state: &TourState, tour: Vec<usize>) -> Vec<usize> {
        let k = self.k;
        let k2 = 2 * k;
        let n = state.vertex_count();
        let dist = state.dist();
        debug_assert!(n >= k, "caller must reject graphs smaller than k");

        let base_combination = &self.combinations[0];
        let recombinations = &self.combinations[1..];

        // Cut positions under scan, the best cut seen, and the vertex at
        // each segment bound for the current cut.
        let mut indices = vec![0usize; k];
        let mut best_indices = vec![0usize; k];
        let mut bounds = vec![0usize; k2];

        let mut tour = tour;
        let mut scratch = vec![0usize; n + 1];

        loop {
            let mut best_change = -state.min_cost_improvement();
            let mut best_combination: Option<&Combination> = None;

            initialize_indices(&mut indices);
            while increment_indices(&mut indices, n) {
                map_segment_bounds(&mut bounds, &indices, &tour);
                let base_cost = combination_cost(dist, base_combination, &bounds);

                for combination in recombinations {
                    let cost = combination_cost(dist, combination, &bounds);
                    let change = cost - base_cost;
                    if change < best_change {
                        best_change = change;
                        best_combination = Some(combination);
                        best_indices.copy_from_slice(&indices);
                    }
                }
            }

            let Some(combination) = best_combination else {
                return tour; // local optimum reached
            };

            // Translate each bound of the winning recombination into its
            // tour position: bounds pair up as (2j, 2j+1) per segment, so
            // position = cut_index[bound/2] + bound%2. Reuses the bounds
            // buffer.
            for (boundary, &bound) in bounds.iter_mut().zip(combination.iter()) {
                *boundary = best_indices[bound >> 1] + (bound & 1);
            }
            apply_move(&bounds, &tour, &mut scratch);
            std::mem::swap(&mut tour, &mut scratch);
            trace!(change = best_change, "applied segment recombination");
        }
    }
}

/// Starts the scan one step before (0, 1, ..., k-1) so the loop shape is
/// a single pre-step increment.
fn initialize_indices(indices: &mut [usize]) {
    for (i, index) in indices.iter_mut().enumerate() {
        *index = i;
    }
    let last = indices.len() - 1;
    indices[last] -= 1;
}

/// Advances to the next strictly increasing cut vector in lexicographic
/// order; returns false when the scan is exhausted.
///
/// The highest index stays below n: cutting the closing edge together
/// with no other constraint on position 0 would only re-enumerate each
/// tour in the opposite direction.
fn increment_indices(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();

    // fast path for the highest index
    indices[k - 1] += 1;
    if indices[k - 1] < n {
        return true;
    }

    for i in (0..k - 1).rev() {
        let limit = n - 1 - (k - 2 - i);
        indices[i] += 1;
        if indices[i] < limit {
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Records the vertex at each segment bound: cutting after position
/// `indices[j]` ends segment j with `tour[indices[j]]` (bound 2j) and
/// starts the next segment with `tour[indices[j] + 1]` (bound 2j+1).
fn map_segment_bounds(bounds: &mut [usize], indices: &[usize], tour: &[usize]) {
    for (j, &index) in indices.iter().enumerate() {
        bounds[2 * j] = tour[index];
        bounds[2 * j + 1] = tour[index + 1];
    }
}

/// Sums the edges a recombination creates: consecutive bound pairs name
/// the endpoints of one new edge each.
fn combination_cost(dist: &DistanceMatrix, combination: &[usize], bounds: &[usize]) -> f64 {
    combination
        .chunks_exact(2)
        .map(|edge| dist.get(bounds[edge[0]], bounds[edge[1]]))
        .sum()
}

/// Rebuilds the tour from the recombination's tour-position boundaries:
/// the prefix up to the first boundary, then one segment per interior
/// boundary pair (copied reversed when its bounds arrive swapped), then
/// the remaining tail including the closing vertex.
fn apply_move(boundaries: &[usize], tour: &[usize], new_tour: &mut [usize]) {
    let mut at = copy_segment(tour, 0, boundaries[0], new_tour, 0);
    for pair in boundaries[1..boundaries.len() - 1].chunks_exact(2) {
        at = copy_segment(tour, pair[0], pair[1], new_tour, at);
    }
    // Everything already written is exactly the part of the tour before
    // the tail, so the tail starts at the write position.
    copy_segment(tour, at, tour.len() - 1, new_tour, at);
}

/// Copies `source[start..=end]` to `target` at `at`, in reverse when
/// `start >= end`. Returns the position after the copied segment.
fn copy_segment(
    source: &[usize],
    start: usize,
    end: usize,
    target: &mut [usize],
    at: usize,
) -> usize {
    if start < end {
        let length = end - start + 1;
        target[at..at + length].copy_from_slice(&source[start..=end]);
        at + length
    } else {
        let mut at = at;
        for i in (end..=start).rev() {
            target[at] = source[i];
            at += 1;
        }
        at
    }
}
