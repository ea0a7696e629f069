//! Staged 2-opt .. k-opt driver.

use super::combinations;
use super::config::KOptConfig;
use super::improver::KOptImprover;
use crate::constructive::RandomTour;
use crate::error::{Error, Result};
use crate::graph::{GraphPath, TourGraph};
use crate::tour::{self, DistanceMatrix, Improver, TourAlgorithm, TourState};
use crate::two_opt::TwoOptImprover;

/// Runs 2-opt, 3-opt, ..., k-opt in sequence over one shared tour state.
///
/// Each stage drives the tour to its own local optimum before the next
/// stage starts. The stages above 2 scan only the pure recombination
/// catalogs: a move that re-creates one of its broken edges is really a
/// lower-order move, and the preceding stage has already exhausted those.
/// This makes one staged run much cheaper than full k-opt while typically
/// landing close to it, because the expensive high-k catalog only has to
/// polish an already-good tour.
pub struct IncrementalKOpt<I = RandomTour> {
    config: KOptConfig,
    initializer: I,
    stages: StageChain,
}

/// The stage improvers, applied in order. Itself an [`Improver`], so the
/// shared multi-pass driver sees the whole chain as one improvement step.
struct StageChain {
    stages: Vec<Box<dyn Improver>>,
}

impl Improver for StageChain {
    fn improve(&self, state: &TourState, mut tour: Vec<usize>) -> Vec<usize> {
        for stage in &self.stages {
            tour = stage.improve(state, tour);
        }
        tour
    }
}

impl IncrementalKOpt<RandomTour> {
    /// Creates a staged solver running 2-opt through `config.k`-opt.
    ///
    /// Resolves the pure recombination catalog for every stage above 2,
    /// computed on first use per process and shared afterwards.
    pub fn new(config: KOptConfig) -> Result<Self> {
        config.validate()?;

        let mut stages: Vec<Box<dyn Improver>> = vec![Box::new(TwoOptImprover)];
        for k in 3..=config.k {
            stages.push(Box::new(KOptImprover::new(
                k,
                combinations::pure_normalized(k)?,
            )));
        }

        let initializer = match config.seed {
            Some(seed) => RandomTour::with_seed(seed),
            None => RandomTour::new(),
        };
        Ok(IncrementalKOpt {
            config,
            initializer,
            stages: StageChain { stages },
        })
    }
}

impl<I: TourAlgorithm> IncrementalKOpt<I> {
    /// Replaces the initializer collaborator.
    pub fn with_initializer<J: TourAlgorithm>(self, initializer: J) -> IncrementalKOpt<J> {
        IncrementalKOpt {
            config: self.config,
            initializer,
            stages: self.stages,
        }
    }

    /// Improves an existing Hamiltonian cycle of `graph` through all
    /// stages once.
    pub fn improve_tour<G: TourGraph>(
        &self,
        graph: &G,
        tour: &GraphPath<G::Vertex>,
    ) -> Result<GraphPath<G::Vertex>> {
        let state = self.prepare(graph)?;
        let initial = tour::path_to_index_tour(graph, tour)?;
        let improved = self.stages.improve(&state, initial);
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

impl<I: TourAlgorithm> TourAlgorithm for IncrementalKOpt<I> {
    fn compute_tour<G: TourGraph>(&mut self, graph: &G) -> Result<GraphPath<G::Vertex>> {
        let state = self.prepare(graph)?;
        tour::solve(
            graph,
            &state,
            &mut self.initializer,
            &self.stages,
            self.config.passes,
            self.config.parallel,
        )
    }
}
