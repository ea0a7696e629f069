//! Canonical segment-recombination catalogs.
//!
//! Cutting a closed tour at k edges yields k segments whose bounds are
//! numbered 0..2k: segment j ends at bound 2j and the next segment starts
//! at bound 2j+1. A recombination is a length-2k sequence of bounds read
//! in order around the new cycle; even positions are where a new edge
//! leaves, odd positions where it enters. Fixing bound 0 first and bound
//! 2k-1 last pins segment 0 in place, which quotients out cyclic
//! rotations, so the catalog holds exactly 2^(k-1)·(k-1)! entries.
//!
//! Catalogs are expensive to enumerate and identical across solver
//! instances, so both variants (all recombinations, and the "pure" subset
//! that replaces every broken edge with a different one) live in
//! process-wide [`ComputationCache`]s keyed by k.

use std::sync::{Arc, OnceLock};

use crate::cache::ComputationCache;
use crate::error::{Error, Result};

/// One canonical recombination: 2k bound indices, starting with 0 and
/// ending with 2k-1. The first catalog entry is always the identity
/// (0, 1, ..., 2k-1), which re-creates the broken edges and therefore
/// prices the unmodified tour.
pub(crate) type Combination = Box<[usize]>;

/// A catalog shared across solver instances.
pub(crate) type Catalog = Arc<Vec<Combination>>;

/// All canonical recombinations for `k`, identity first.
pub(crate) fn normalized(k: usize) -> Result<Catalog> {
    normalized_cache().get(k)
}

/// The pure subset for `k`: identity first, then every recombination in
/// which each of the k new edges differs from the edge it replaces.
///
/// An impure recombination leaves some broken edge re-created, so it is a
/// move a lower-order improver would already have found; the incremental
/// driver therefore scans only pure recombinations for its higher stages.
pub(crate) fn pure_normalized(k: usize) -> Result<Catalog> {
    pure_cache().get(k)
}

fn normalized_cache() -> &'static ComputationCache<usize, Vec<Combination>> {
    static CACHE: OnceLock<ComputationCache<usize, Vec<Combination>>> = OnceLock::new();
    CACHE.get_or_init(|| ComputationCache::new(|&k| build_normalized(k)))
}

fn pure_cache() -> &'static ComputationCache<usize, Vec<Combination>> {
    static CACHE: OnceLock<ComputationCache<usize, Vec<Combination>>> = OnceLock::new();
    // Re-enters the normalized cache for the same k; safe because the two
    // caches are distinct instances.
    CACHE.get_or_init(|| ComputationCache::new(|&k| build_pure(k)))
}

fn build_normalized(k: usize) -> Result<Vec<Combination>> {
    if k < 2 {
        return Err(Error::InvalidParameter(format!(
            "k must be at least two, got {k}"
        )));
    }

    // Grow partial recombinations segment by segment. Segment 0 is fixed,
    // so the seed is just its end bound; each round attaches one of the
    // not-yet-placed segments in forward or reversed orientation.
    let mut combinations: Vec<Vec<usize>> = vec![vec![0]];
    for segment in 1..k {
        let extensions = 2 * (k - segment);
        let mut extended = Vec::with_capacity(combinations.len() * extensions);
        for base in &combinations {
            for start_bound in (1..2 * k - 1).step_by(2) {
                if base.contains(&start_bound) {
                    continue;
                }
                let end_bound = start_bound + 1;

                let mut forward = Vec::with_capacity(base.len() + 2);
                forward.extend_from_slice(base);
                forward.extend([start_bound, end_bound]);
                extended.push(forward);

                let mut reversed = Vec::with_capacity(base.len() + 2);
                reversed.extend_from_slice(base);
                reversed.extend([end_bound, start_bound]);
                extended.push(reversed);
            }
        }
        combinations = extended;
    }

    let last_bound = 2 * k - 1;
    for combination in &mut combinations {
        combination.push(last_bound);
    }

    if combinations.len() != expected_count(k) {
        return Err(Error::InternalInvariant(format!(
            "expected {} segment recombinations for k={k}, generated {}",
            expected_count(k),
            combinations.len()
        )));
    }
    if combinations.iter().any(|c| c.len() != 2 * k) {
        return Err(Error::InternalInvariant(format!(
            "segment recombinations for k={k} must have {} entries",
            2 * k
        )));
    }

    Ok(combinations
        .into_iter()
        .map(Vec::into_boxed_slice)
        .collect())
}

fn build_pure(k: usize) -> Result<Vec<Combination>> {
    let normalized = normalized(k)?;
    let mut pure = Vec::with_capacity(normalized.len());
    // The identity stays first as the pricing baseline even though it is
    // the least pure move of all.
    pure.push(normalized[0].clone());
    pure.extend(normalized[1..].iter().filter(|c| is_pure(c)).cloned());
    Ok(pure)
}

/// A recombination is pure when every new edge differs from the broken
/// edge at the same position. Adjacent bounds (|entering - leaving| = 1)
/// re-create an original edge, reducing the move to a lower-order one.
fn is_pure(combination: &[usize]) -> bool {
    combination
        .chunks_exact(2)
        .all(|edge| edge[0].abs_diff(edge[1]) != 1)
}

/// 2(k-1) · 2(k-2) · ... · 2 = 2^(k-1)·(k-1)!
fn expected_count(k: usize) -> usize {
    (1..k).map(|placed| 2 * (k - placed)).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_cardinality() {
        for (k, expected) in [(2, 2), (3, 8), (4, 48), (5, 384), (6, 3840), (7, 46080)] {
            let catalog = normalized(k).unwrap();
            assert_eq!(
                catalog.len(),
                expected,
                "normalized catalog for k={k} has the wrong cardinality"
            );
        }
    }

    #[test]
    fn test_entries_are_canonical() {
        for k in 2..=6 {
            let catalog = normalized(k).unwrap();
            for combination in catalog.iter() {
                assert_eq!(combination.len(), 2 * k);
                assert_eq!(combination[0], 0, "segment 0's end bound is fixed first");
                assert_eq!(
                    combination[2 * k - 1],
                    2 * k - 1,
                    "segment 0's start bound is fixed last"
                );

                // Every other bound appears exactly once.
                for bound in 1..2 * k - 1 {
                    assert_eq!(
                        combination.iter().filter(|&&b| b == bound).count(),
                        1,
                        "bound {bound} must appear exactly once in {combination:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_identity_is_first() {
        for k in 2..=6 {
            let catalog = normalized(k).unwrap();
            let identity: Vec<usize> = (0..2 * k).collect();
            assert_eq!(&*catalog[0], &identity[..]);
        }
    }

    #[test]
    fn test_entries_are_distinct() {
        for k in 2..=6 {
            let catalog = normalized(k).unwrap();
            for (i, a) in catalog.iter().enumerate() {
                for b in &catalog[i + 1..] {
                    assert_ne!(a, b, "duplicate recombination for k={k}");
                }
            }
        }
    }

    #[test]
    fn test_pure_is_subset_with_identity_first() {
        for k in 2..=6 {
            let normalized = normalized(k).unwrap();
            let pure = pure_normalized(k).unwrap();

            assert_eq!(&pure[0], &normalized[0], "identity must stay first");
            for combination in &pure[1..] {
                assert!(
                    normalized.contains(combination),
                    "pure entries must come from the normalized catalog"
                );
                assert!(
                    combination
                        .chunks_exact(2)
                        .all(|edge| edge[0].abs_diff(edge[1]) != 1),
                    "impure recombination {combination:?} in pure catalog for k={k}"
                );
            }
        }
    }

    #[test]
    fn test_known_pure_three_opt_moves() {
        // 3-opt has exactly four reconnections that change all three
        // edges; plus the leading identity entry.
        let pure = pure_normalized(3).unwrap();
        assert_eq!(pure.len(), 5);
    }

    #[test]
    fn test_pure_two_opt_is_the_single_exchange() {
        let pure = pure_normalized(2).unwrap();
        assert_eq!(pure.len(), 2);
        assert_eq!(&*pure[1], &[0, 2, 1, 3]);
    }

    #[test]
    fn test_small_k_rejected() {
        assert!(matches!(
            normalized(1),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            normalized(0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_catalog_is_shared_between_requests() {
        let first = normalized(4).unwrap();
        let second = normalized(4).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
