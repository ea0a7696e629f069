//! k-opt solver surface.

use super::combinations;
use super::config::KOptConfig;
use super::improver::KOptImprover;
use crate::constructive::RandomTour;
use crate::error::{Error, Result};
use crate::graph::{GraphPath, TourGraph};
use crate::tour::{self, DistanceMatrix, Improver, TourAlgorithm, TourState};

/// k-opt local-search solver.
///
/// Produces tours with [`TourAlgorithm::compute_tour`] (initialize, then
/// improve, over one or more passes) or improves a caller-supplied cycle
/// with [`KOptSolver::improve_tour`]. The initializer defaults to
/// [`RandomTour`] seeded from the configuration and can be replaced with
/// any other [`TourAlgorithm`]; a nearest-neighbor preconditioner is
/// strongly recommended for k above 3.
///
/// # Examples
///
/// ```
/// use tsp_heur::constructive::NearestNeighbor;
/// use tsp_heur::graph::WeightedGraph;
/// use tsp_heur::kopt::{KOptConfig, KOptSolver};
/// use tsp_heur::tour::TourAlgorithm;
///
/// let points = vec![(0.0, 0.0), (3.0, 1.0), (2.0, 4.0), (-1.0, 2.0), (1.0, 1.0)];
/// let graph = WeightedGraph::complete(points, |a: &(f64, f64), b: &(f64, f64)| {
///     ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
/// });
///
/// let mut solver = KOptSolver::new(KOptConfig::new(3))
///     .unwrap()
///     .with_initializer(NearestNeighbor::from_start(0));
/// let tour = solver.compute_tour(&graph).unwrap();
/// assert_eq!(tour.vertices().len(), 6);
/// ```
pub struct KOptSolver<I = RandomTour> {
    config: KOptConfig,
    initializer: I,
    improver: KOptImprover,
}

impl KOptSolver<RandomTour> {
    /// Creates a solver with the default random-tour initializer.
    ///
    /// Resolves the segment-recombination catalog for `config.k`, which is
    /// computed on first use per process and shared afterwards.
    pub fn new(config: KOptConfig) -> Result<Self> {
        config.validate()?;
        let improver = KOptImprover::new(config.k, combinations::normalized(config.k)?);
        let initializer = match config.seed {
            Some(seed) => RandomTour::with_seed(seed),
            None => RandomTour::new(),
        };
        Ok(KOptSolver {
            config,
            initializer,
            improver,
        })
    }
}

impl<I: TourAlgorithm> KOptSolver<I> {
    /// Replaces the initializer collaborator.
    pub fn with_initializer<J: TourAlgorithm>(self, initializer: J) -> KOptSolver<J> {
        KOptSolver {
            config: self.config,
            initializer,
            improver: self.improver,
        }
    }

    /// Improves an existing Hamiltonian cycle of `graph` to a k-opt local
    /// optimum.
    pub fn improve_tour<G: TourGraph>(
        &self,
        graph: &G,
        tour: &GraphPath<G::Vertex>,
    ) -> Result<GraphPath<G::Vertex>> {
        let state = self.prepare(graph)?;
        let initial = tour::path_to_index_tour(graph, tour)?;
        let improved = self.improver.improve(&state, initial);
        Ok(tour::index_tour_to_path(graph, &state, &improved))
    }

    fn prepare<G: TourGraph>(&self, graph: &G) -> Result<TourState> {
        let dist = DistanceMatrix::from_graph(graph)?;
        if dist.vertex_count() < self.config.k {
            return Err(Error::InvalidInput(format!(
                "graph has {} vertices, fewer than k = {}",
                dist.vertex_count(),
                self.config.k
            )));
        }
        Ok(TourState::new(dist, self.config.min_cost_improvement))
    }
}

impl<I: TourAlgorithm> TourAlgorithm for KOptSolver<I> {
    fn compute_tour<G: TourGraph>(&mut self, graph: &G) -> Result<GraphPath<G::Vertex>> {
        let state = self.prepare(graph)?;
        tour::solve(
            graph,
            &state,
            &mut self.initializer,
            &self.improver,
            self.config.passes,
            self.config.parallel,
        )
    }
}
