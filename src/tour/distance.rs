//! Dense distance matrix built from a validated input graph.

use crate::error::{Error, Result};
use crate::graph::TourGraph;

/// An n×n matrix of pairwise distances, stored row-major.
///
/// Building the matrix is also where the solvers' input validation lives:
/// the graph must be undirected and complete with finite, non-negative
/// weights. Once built, the matrix is never mutated; lookups are plain
/// indexed reads. The diagonal is zero.
pub struct DistanceMatrix {
    n: usize,
    dist: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from `graph`, validating it as a symmetric TSP
    /// instance.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if the graph is empty, directed, incomplete,
    /// or carries a NaN, infinite, or negative edge weight.
    pub fn from_graph<G: TourGraph>(graph: &G) -> Result<Self> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(Error::InvalidInput("graph has no vertices".into()));
        }
        if graph.is_directed() {
            return Err(Error::InvalidInput(
                "tour search requires an undirected graph".into(),
            ));
        }

        let mut dist = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let weight = graph.edge_weight(i, j).ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "graph is not complete: no edge between vertices {i} and {j}"
                    ))
                })?;
                if !weight.is_finite() {
                    return Err(Error::InvalidInput(format!(
                        "edge between vertices {i} and {j} has non-finite weight {weight}"
                    )));
                }
                if weight < 0.0 {
                    return Err(Error::InvalidInput(format!(
                        "edge between vertices {i} and {j} has negative weight {weight}"
                    )));
                }
                dist[i * n + j] = weight;
                dist[j * n + i] = weight;
            }
        }

        Ok(DistanceMatrix { n, dist })
    }

    /// Distance between the vertices at indices `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.dist[i * self.n + j]
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn test_symmetric_lookup_and_zero_diagonal() {
        let graph = WeightedGraph::complete(vec![0.0_f64, 3.0, 7.0], |a, b| (a - b).abs());
        let dist = DistanceMatrix::from_graph(&graph).unwrap();

        assert_eq!(dist.vertex_count(), 3);
        assert_eq!(dist.get(0, 2), 7.0);
        assert_eq!(dist.get(2, 0), 7.0);
        assert_eq!(dist.get(1, 1), 0.0);
    }

    #[test]
    fn test_rejects_empty_graph() {
        let graph: WeightedGraph<u32> = WeightedGraph::undirected();

        assert!(matches!(
            DistanceMatrix::from_graph(&graph),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_directed_graph() {
        let mut graph = WeightedGraph::directed();
        graph.add_vertex('a');
        graph.add_vertex('b');
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 0, 1.0);

        assert!(matches!(
            DistanceMatrix::from_graph(&graph),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_incomplete_graph() {
        let mut graph = WeightedGraph::undirected();
        graph.add_vertex('a');
        graph.add_vertex('b');
        graph.add_vertex('c');
        graph.add_edge(0, 1, 20.0);
        graph.add_edge(0, 2, 42.0);

        assert!(matches!(
            DistanceMatrix::from_graph(&graph),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_nan_and_negative_weights() {
        let nan = WeightedGraph::complete(vec![0, 1], |_, _| f64::NAN);
        assert!(matches!(
            DistanceMatrix::from_graph(&nan),
            Err(Error::InvalidInput(_))
        ));

        let infinite = WeightedGraph::complete(vec![0, 1], |_, _| f64::INFINITY);
        assert!(matches!(
            DistanceMatrix::from_graph(&infinite),
            Err(Error::InvalidInput(_))
        ));

        let negative = WeightedGraph::complete(vec![0, 1], |_, _| -1.0);
        assert!(matches!(
            DistanceMatrix::from_graph(&negative),
            Err(Error::InvalidInput(_))
        ));
    }
}
