//! Multi-pass solve loop shared by the improvement solvers.

use rayon::prelude::*;
use tracing::debug;

use super::types::{index_tour_to_path, path_to_index_tour, Improver, TourAlgorithm, TourState};
use crate::error::Result;
use crate::graph::{GraphPath, TourGraph};

/// Draws `passes` initial tours from `initializer`, improves each with
/// `improver`, and returns the cheapest result.
///
/// Initial tours are always drawn sequentially so that seeded initializers
/// stay deterministic; with `parallel` set the (expensive) improvement of
/// the independent passes runs on the rayon pool instead.
pub(crate) fn solve<G, I, M>(
    graph: &G,
    state: &TourState,
    initializer: &mut I,
    improver: &M,
    passes: usize,
    parallel: bool,
) -> Result<GraphPath<G::Vertex>>
where
    G: TourGraph,
    I: TourAlgorithm + ?Sized,
    M: Improver + ?Sized,
{
    let mut initial = Vec::with_capacity(passes);
    for _ in 0..passes {
        let path = initializer.compute_tour(graph)?;
        initial.push(path_to_index_tour(graph, &path)?);
    }

    let improved: Vec<Vec<usize>> = if parallel && passes > 1 {
        initial
            .into_par_iter()
            .map(|tour| improver.improve(state, tour))
            .collect()
    } else {
        initial
            .into_iter()
            .map(|tour| improver.improve(state, tour))
            .collect()
    };

    let mut best: Option<(Vec<usize>, f64)> = None;
    for (pass, tour) in improved.into_iter().enumerate() {
        let cost = state.tour_cost(&tour);
        debug!(pass, cost, "pass completed");
        if best.as_ref().is_none_or(|(_, best_cost)| cost < *best_cost) {
            best = Some((tour, cost));
        }
    }

    let (tour, _) = best.expect("passes is validated to be at least one before solve() is called");
    Ok(index_tour_to_path(graph, state, &tour))
}
