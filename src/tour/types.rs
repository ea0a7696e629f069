//! Shared solver state, algorithm traits, and index-tour conversions.

use super::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::graph::{GraphPath, TourGraph};

/// An algorithm that produces a closed tour for a graph.
///
/// Implemented by the constructive initializers and by the improvement
/// solvers alike, so any implementation can serve as the initializer
/// collaborator of a solver. Takes `&mut self` because initializers that
/// draw starts from a random number generator or a start list advance
/// internal state on every call.
pub trait TourAlgorithm {
    /// Computes a closed tour of `graph`.
    fn compute_tour<G: TourGraph>(&mut self, graph: &G) -> Result<GraphPath<G::Vertex>>;
}

/// The read-only state one improvement run operates on: the distance
/// matrix and the improvement threshold.
///
/// Improvers borrow the state instead of owning matrix copies, which lets
/// the incremental driver run its whole stage chain against a single
/// matrix.
pub struct TourState {
    dist: DistanceMatrix,
    min_cost_improvement: f64,
}

impl TourState {
    pub(crate) fn new(dist: DistanceMatrix, min_cost_improvement: f64) -> Self {
        TourState {
            dist,
            min_cost_improvement,
        }
    }

    /// The distance matrix.
    pub fn dist(&self) -> &DistanceMatrix {
        &self.dist
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.dist.vertex_count()
    }

    /// Cost deltas above `-min_cost_improvement` are treated as noise and
    /// ignored, so every applied move strictly decreases the tour cost.
    pub fn min_cost_improvement(&self) -> f64 {
        self.min_cost_improvement
    }

    /// Total cost of a closed index tour.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        tour.windows(2)
            .map(|edge| self.dist.get(edge[0], edge[1]))
            .sum()
    }
}

/// A tour-improvement step: takes a closed index tour, returns a closed
/// index tour of equal or lower cost.
///
/// Object safe so the incremental driver can hold a heterogeneous stage
/// list; `Send + Sync` so independent passes can be improved in parallel.
pub(crate) trait Improver: Send + Sync {
    fn improve(&self, state: &TourState, tour: Vec<usize>) -> Vec<usize>;
}

/// Converts a caller-facing [`GraphPath`] into a closed index tour,
/// validating that it is a Hamiltonian cycle of `graph`.
pub(crate) fn path_to_index_tour<G: TourGraph>(
    graph: &G,
    path: &GraphPath<G::Vertex>,
) -> Result<Vec<usize>> {
    let n = graph.vertex_count();
    let vertices = path.vertices();
    if vertices.len() != n + 1 {
        return Err(Error::InvalidInput(format!(
            "tour visits {} vertices but a closed tour of this graph has {}",
            vertices.len(),
            n + 1
        )));
    }

    let mut tour = Vec::with_capacity(n + 1);
    let mut seen = vec![false; n];
    for vertex in &vertices[..n] {
        let index = (0..n)
            .find(|&i| graph.vertex(i) == vertex)
            .ok_or_else(|| Error::InvalidInput("tour visits a vertex not in the graph".into()))?;
        if seen[index] {
            return Err(Error::InvalidInput(format!(
                "tour visits vertex {index} more than once"
            )));
        }
        seen[index] = true;
        tour.push(index);
    }

    if vertices[n] != vertices[0] {
        return Err(Error::InvalidInput(
            "tour does not return to its first vertex".into(),
        ));
    }
    tour.push(tour[0]);
    Ok(tour)
}

/// Converts a closed index tour back into a [`GraphPath`], pricing it with
/// the distance matrix.
pub(crate) fn index_tour_to_path<G: TourGraph>(
    graph: &G,
    state: &TourState,
    tour: &[usize],
) -> GraphPath<G::Vertex> {
    let vertices = tour.iter().map(|&i| graph.vertex(i).clone()).collect();
    GraphPath::new(vertices, state.tour_cost(tour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    fn square() -> WeightedGraph<char> {
        WeightedGraph::complete(vec!['a', 'b', 'c', 'd'], |_, _| 1.0)
    }

    #[test]
    fn test_round_trip_between_path_and_index_tour() {
        let graph = square();
        let state = TourState::new(DistanceMatrix::from_graph(&graph).unwrap(), 1e-8);

        let path = GraphPath::cycle(&graph, &[2, 0, 3, 1]).unwrap();
        let tour = path_to_index_tour(&graph, &path).unwrap();
        assert_eq!(tour, [2, 0, 3, 1, 2]);

        let back = index_tour_to_path(&graph, &state, &tour);
        assert_eq!(back.vertices(), path.vertices());
        assert!((back.weight() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_unclosed_tour() {
        let graph = square();
        let path = GraphPath::new(vec!['a', 'b', 'c', 'd', 'b'], 4.0);

        assert!(matches!(
            path_to_index_tour(&graph, &path),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_repeated_vertex() {
        let graph = square();
        let path = GraphPath::new(vec!['a', 'b', 'b', 'd', 'a'], 4.0);

        assert!(matches!(
            path_to_index_tour(&graph, &path),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let graph = square();
        let path = GraphPath::new(vec!['a', 'b', 'a'], 2.0);

        assert!(matches!(
            path_to_index_tour(&graph, &path),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_foreign_vertex() {
        let graph = square();
        let path = GraphPath::new(vec!['a', 'b', 'z', 'd', 'a'], 4.0);

        assert!(matches!(
            path_to_index_tour(&graph, &path),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_tour_cost_sums_closed_edges() {
        let graph = WeightedGraph::complete(vec![0.0_f64, 1.0, 5.0], |a, b| (a - b).abs());
        let state = TourState::new(DistanceMatrix::from_graph(&graph).unwrap(), 1e-8);

        // 0 -> 1 -> 5 -> 0
        assert!((state.tour_cost(&[0, 1, 2, 0]) - 10.0).abs() < 1e-12);
    }
}
