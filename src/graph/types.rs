//! Graph trait and tour path value.

use crate::error::{Error, Result};

/// Read access to a weighted graph, as needed by the tour solvers.
///
/// Vertices are addressed by their index in a stable iteration order
/// (`0..vertex_count()`); the order must not change while a solver holds
/// the graph. Edge weights are looked up per ordered index pair;
/// implementations of undirected graphs must answer both orders with the
/// same weight.
pub trait TourGraph {
    /// The vertex payload type.
    type Vertex: Clone + PartialEq;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// The vertex at `index` in the stable iteration order.
    ///
    /// # Panics
    /// Panics if `index >= vertex_count()`.
    fn vertex(&self, index: usize) -> &Self::Vertex;

    /// Weight of the edge between the vertices at `source` and `target`,
    /// or `None` if the graph has no such edge.
    fn edge_weight(&self, source: usize, target: usize) -> Option<f64>;

    /// Whether edges are directed. The tour solvers reject directed graphs.
    fn is_directed(&self) -> bool;
}

/// A closed tour through a graph: a vertex sequence whose first and last
/// entries are equal, together with the summed weight of its edges.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath<V> {
    vertices: Vec<V>,
    weight: f64,
}

impl<V: Clone + PartialEq> GraphPath<V> {
    /// Creates a path from an already-closed vertex sequence and its total
    /// weight. No validation is performed; use [`GraphPath::cycle`] to build
    /// a checked tour from a vertex order.
    pub fn new(vertices: Vec<V>, weight: f64) -> Self {
        GraphPath { vertices, weight }
    }

    /// Builds the closed tour visiting `order` (vertex indices into
    /// `graph`), closing it back to the first vertex and summing the edge
    /// weights along the way.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `order` is empty, an index is out of
    /// range, or a required edge is absent.
    pub fn cycle<G>(graph: &G, order: &[usize]) -> Result<Self>
    where
        G: TourGraph<Vertex = V>,
    {
        let n = graph.vertex_count();
        if order.is_empty() {
            return Err(Error::InvalidInput("tour must visit at least one vertex".into()));
        }
        if let Some(&bad) = order.iter().find(|&&v| v >= n) {
            return Err(Error::InvalidInput(format!(
                "tour references vertex {bad} but the graph has {n} vertices"
            )));
        }

        let mut vertices: Vec<V> = order.iter().map(|&v| graph.vertex(v).clone()).collect();
        vertices.push(vertices[0].clone());

        // A single-vertex graph has no edges; its closed tour has weight 0.
        let mut weight = 0.0;
        if order.len() > 1 {
            for pair in order.windows(2) {
                weight += required_edge(graph, pair[0], pair[1])?;
            }
            weight += required_edge(graph, order[order.len() - 1], order[0])?;
        }

        Ok(GraphPath { vertices, weight })
    }

    /// The closed vertex sequence (first entry equals last entry).
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Total weight of the tour's edges.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

fn required_edge<G: TourGraph>(graph: &G, source: usize, target: usize) -> Result<f64> {
    graph.edge_weight(source, target).ok_or_else(|| {
        Error::InvalidInput(format!("graph has no edge between vertices {source} and {target}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn test_cycle_closes_and_sums() {
        let graph = WeightedGraph::complete(vec!['a', 'b', 'c'], |_, _| 2.0);
        let path = GraphPath::cycle(&graph, &[0, 2, 1]).unwrap();

        assert_eq!(path.vertices(), ['a', 'c', 'b', 'a']);
        assert!((path.weight() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_cycle_single_vertex() {
        let graph = WeightedGraph::complete(vec!['a'], |_, _| 1.0);
        let path = GraphPath::cycle(&graph, &[0]).unwrap();

        assert_eq!(path.vertices(), ['a', 'a']);
        assert_eq!(path.weight(), 0.0);
    }

    #[test]
    fn test_cycle_rejects_missing_edge() {
        let mut graph = WeightedGraph::undirected();
        graph.add_vertex('a');
        graph.add_vertex('b');
        graph.add_vertex('c');
        graph.add_edge(0, 1, 1.0);

        assert!(matches!(
            GraphPath::cycle(&graph, &[0, 1, 2]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_cycle_rejects_out_of_range_vertex() {
        let graph = WeightedGraph::complete(vec!['a', 'b'], |_, _| 1.0);

        assert!(matches!(
            GraphPath::cycle(&graph, &[0, 5]),
            Err(Error::InvalidInput(_))
        ));
    }
}
