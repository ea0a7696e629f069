//! 2-opt improvement loop and solver surface.

use tracing::trace;

use super::config::TwoOptConfig;
use crate::constructive::RandomTour;
use crate::error::Result;
use crate::graph::{GraphPath, TourGraph};
use crate::tour::{
    self, DistanceMatrix, Improver, TourAlgorithm, TourState,
};

/// The bare 2-opt improvement step, shared with the incremental k-opt
/// driver.
///
/// Scans every ordered pair of cut positions (i, j) with i < j, evaluates
/// the exchange that reverses the segment between them, and applies the
/// best strict improvement until none remains. Scan order, threshold
/// handling, and move application are chosen to coincide exactly with the
/// k = 2 specialization of the k-opt improver.
pub(crate) struct TwoOptImprover;

impl Improver for TwoOptImprover {
    fn improve(&self, state: &TourState, mut tour: Vec<usize>) -> Vec<usize> {
        let n = state.vertex_count();
        let dist = state.dist();
        if n < 2 {
            return tour;
        }

        loop {
            let mut best_change = -state.min_cost_improvement();
            let mut best: Option<(usize, usize)> = None;

            for i in 0..n - 1 {
                for j in (i + 1)..n {
                    let change = dist.get(tour[i], tour[j]) + dist.get(tour[i + 1], tour[j + 1])
                        - dist.get(tour[i], tour[i + 1])
                        - dist.get(tour[j], tour[j + 1]);
                    if change < best_change {
                        best_change = change;
                        best = Some((i, j));
                    }
                }
            }

            let Some((i, j)) = best else {
                return tour;
            };
            tour[i + 1..=j].reverse();
            trace!(change = best_change, i, j, "applied edge exchange");
        }
    }
}

/// 2-opt local-search solver.
///
/// Produces tours with [`TourAlgorithm::compute_tour`] (initialize, then
/// improve, over one or more passes) or improves a caller-supplied cycle
/// with [`TwoOptSolver::improve_tour`]. The initializer defaults to
/// [`RandomTour`] seeded from the configuration and can be replaced with
/// any other [`TourAlgorithm`].
///
/// # Examples
///
/// ```
/// use tsp_heur::graph::WeightedGraph;
/// use tsp_heur::tour::TourAlgorithm;
/// use tsp_heur::two_opt::{TwoOptConfig, TwoOptSolver};
///
/// let points = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// let graph = WeightedGraph::complete(points, |a: &(f64, f64), b: &(f64, f64)| {
///     ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
/// });
///
/// let mut solver = TwoOptSolver::new(TwoOptConfig::default().with_seed(42)).unwrap();
/// let tour = solver.compute_tour(&graph).unwrap();
/// assert!((tour.weight() - 4.0).abs() < 1e-9);
/// ```
pub struct TwoOptSolver<I = RandomTour> {
    config: TwoOptConfig,
    initializer: I,
}

impl TwoOptSolver<RandomTour> {
    /// Creates a solver with the default random-tour initializer.
    pub fn new(config: TwoOptConfig) -> Result<Self> {
        config.validate()?;
        let initializer = match config.seed {
            Some(seed) => RandomTour::with_seed(seed),
            None => RandomTour::new(),
        };
        Ok(TwoOptSolver {
            config,
            initializer,
        })
    }
}

impl<I: TourAlgorithm> TwoOptSolver<I> {
    /// Replaces the initializer collaborator.
    pub fn with_initializer<J: TourAlgorithm>(self, initializer: J) -> TwoOptSolver<J> {
        TwoOptSolver {
            config: self.config,
            initializer,
        }
    }

    /// Improves an existing Hamiltonian cycle of `graph` to a 2-opt local
    /// optimum.
    pub fn improve_tour<G: TourGraph>(
        &self,
        graph: &G,
        tour: &GraphPath<G::Vertex>,
    ) -> Result<GraphPath<G::Vertex>> {
        let state = self.prepare(graph)?;
        let initial = tour::path_to_index_tour(graph, tour)?;
        let improved = TwoOptImprover.improve(&state, initial);
        Ok(tour::index_tour_to_path(graph, &state, &improved))
    }

    fn prepare<G: TourGraph>(&self, graph: &G) -> Result<TourState> {
        Ok(TourState::new(
            DistanceMatrix::from_graph(graph)?,
            self.config.min_cost_improvement,
        ))
    }
}

impl<I: TourAlgorithm> TourAlgorithm for TwoOptSolver<I> {
    fn compute_tour<G: TourGraph>(&mut self, graph: &G) -> Result<GraphPath<G::Vertex>> {
        let state = self.prepare(graph)?;
        tour::solve(
            graph,
            &state,
            &mut self.initializer,
            &TwoOptImprover,
            self.config.passes,
            false,
        )
    }
}
