//! Bundled weighted-graph implementation.

use std::collections::HashMap;

use super::types::TourGraph;

/// A weighted graph held as a vertex list plus an edge-weight table.
///
/// Intended for callers that do not bring their own graph type: build it
/// vertex by vertex, or in one step with [`WeightedGraph::complete`]. The
/// solvers only accept undirected complete instances, but the type can
/// represent directed and incomplete graphs so that invalid input is
/// representable (and rejectable) rather than unconstructible.
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    edges: HashMap<(usize, usize), f64>,
    directed: bool,
}

impl<V: Clone + PartialEq> WeightedGraph<V> {
    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        WeightedGraph {
            vertices: Vec::new(),
            edges: HashMap::new(),
            directed: false,
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        WeightedGraph {
            vertices: Vec::new(),
            edges: HashMap::new(),
            directed: true,
        }
    }

    /// Builds the complete undirected graph over `vertices`, weighting each
    /// edge with `distance` applied to its endpoints.
    pub fn complete<F>(vertices: Vec<V>, distance: F) -> Self
    where
        F: Fn(&V, &V) -> f64,
    {
        let mut graph = WeightedGraph::undirected();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for i in 0..graph.vertices.len() {
            for j in (i + 1)..graph.vertices.len() {
                let weight = distance(&graph.vertices[i], &graph.vertices[j]);
                graph.edges.insert((i, j), weight);
            }
        }
        graph
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Sets the weight of the edge from `source` to `target` (one direction
    /// for directed graphs, both for undirected ones).
    ///
    /// # Panics
    /// Panics if either index is out of range or if `source == target`
    /// (self-loops are not representable).
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) {
        assert!(
            source < self.vertices.len() && target < self.vertices.len(),
            "edge endpoints must be existing vertices"
        );
        assert_ne!(source, target, "self-loops are not supported");
        self.edges.insert((source, target), weight);
    }
}

impl<V: Clone + PartialEq> TourGraph for WeightedGraph<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    fn edge_weight(&self, source: usize, target: usize) -> Option<f64> {
        let direct = self.edges.get(&(source, target)).copied();
        if self.directed {
            direct
        } else {
            direct.or_else(|| self.edges.get(&(target, source)).copied())
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_edge_answers_both_orders() {
        let mut graph = WeightedGraph::undirected();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge(0, 1, 4.5);

        assert_eq!(graph.edge_weight(0, 1), Some(4.5));
        assert_eq!(graph.edge_weight(1, 0), Some(4.5));
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = WeightedGraph::directed();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge(0, 1, 4.5);

        assert_eq!(graph.edge_weight(0, 1), Some(4.5));
        assert_eq!(graph.edge_weight(1, 0), None);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_complete_builder_covers_all_pairs() {
        let graph = WeightedGraph::complete(vec![0.0_f64, 1.0, 3.0], |a, b| (a - b).abs());

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_weight(0, 2), Some(3.0));
        assert_eq!(graph.edge_weight(2, 1), Some(2.0));
        assert_eq!(graph.edge_weight(1, 1), None);
    }
}
