//! Uniformly random tour initializer.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::graph::{GraphPath, TourGraph};
use crate::tour::TourAlgorithm;

/// Produces a uniformly random Hamiltonian cycle.
///
/// Each call to [`compute_tour`](TourAlgorithm::compute_tour) draws a fresh
/// permutation, so successive calls on the same graph yield independent
/// starting tours.
pub struct RandomTour {
    rng: StdRng,
}

impl RandomTour {
    /// Creates an initializer seeded from entropy.
    pub fn new() -> Self {
        RandomTour::with_seed(rand::random())
    }

    /// Creates an initializer with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        RandomTour {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTour {
    fn default() -> Self {
        RandomTour::new()
    }
}

impl TourAlgorithm for RandomTour {
    fn compute_tour<G: TourGraph>(&mut self, graph: &G) -> Result<GraphPath<G::Vertex>> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(Error::InvalidInput("graph has no vertices".into()));
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);
        GraphPath::cycle(graph, &order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    fn unit_graph(n: usize) -> WeightedGraph<usize> {
        WeightedGraph::complete((0..n).collect(), |_, _| 1.0)
    }

    #[test]
    fn test_tour_is_hamiltonian() {
        let graph = unit_graph(8);
        let tour = RandomTour::with_seed(42).compute_tour(&graph).unwrap();
        let vertices = tour.vertices();

        assert_eq!(vertices.len(), 9);
        assert_eq!(vertices[0], vertices[8]);
        let mut interior: Vec<usize> = vertices[..8].to_vec();
        interior.sort_unstable();
        assert_eq!(interior, (0..8).collect::<Vec<_>>());
        assert!((tour.weight() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_same_tour() {
        let graph = unit_graph(12);
        let first = RandomTour::with_seed(7).compute_tour(&graph).unwrap();
        let second = RandomTour::with_seed(7).compute_tour(&graph).unwrap();

        assert_eq!(first.vertices(), second.vertices());
    }

    #[test]
    fn test_successive_calls_draw_new_tours() {
        let graph = unit_graph(16);
        let mut initializer = RandomTour::with_seed(7);
        let first = initializer.compute_tour(&graph).unwrap();
        let second = initializer.compute_tour(&graph).unwrap();

        assert_ne!(
            first.vertices(),
            second.vertices(),
            "16! permutations colliding under one seed would be a broken rng"
        );
    }

    #[test]
    fn test_rejects_empty_graph() {
        let graph: WeightedGraph<usize> = WeightedGraph::undirected();
        assert!(matches!(
            RandomTour::with_seed(1).compute_tour(&graph),
            Err(Error::InvalidInput(_))
        ));
    }
}
