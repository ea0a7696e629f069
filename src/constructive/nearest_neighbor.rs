//! Greedy nearest-neighbor tour initializer.
//!
//! # Algorithm
//!
//! Starting from a chosen vertex, repeatedly travel to the closest
//! not-yet-visited vertex until all vertices are visited, then close the
//! cycle. Ties are broken toward the lowest vertex index (the graph's
//! iteration order), so a given start vertex always yields the same tour.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::graph::{GraphPath, TourGraph};
use crate::tour::TourAlgorithm;

enum Start {
    /// Every call starts from the same vertex.
    Fixed(usize),
    /// Calls consume the provided start vertices in order.
    List(VecDeque<usize>),
    /// Every call draws a start vertex from the generator.
    Random(StdRng),
}

/// Nearest-neighbor construction with a configurable start vertex.
///
/// The start vertex appears first in the returned path.
pub struct NearestNeighbor {
    start: Start,
}

impl NearestNeighbor {
    /// Starts every tour from a random vertex (entropy-seeded).
    pub fn new() -> Self {
        NearestNeighbor::with_seed(rand::random())
    }

    /// Starts every tour from a random vertex drawn from a seeded
    /// generator.
    pub fn with_seed(seed: u64) -> Self {
        NearestNeighbor {
            start: Start::Random(StdRng::seed_from_u64(seed)),
        }
    }

    /// Starts every tour from the vertex at `start`.
    pub fn from_start(start: usize) -> Self {
        NearestNeighbor {
            start: Start::Fixed(start),
        }
    }

    /// Consumes one start vertex per call, in the given order. Once the
    /// list is exhausted, further calls fail with
    /// [`Error::InvalidParameter`].
    pub fn from_starts(starts: Vec<usize>) -> Self {
        NearestNeighbor {
            start: Start::List(starts.into()),
        }
    }

    fn next_start(&mut self, n: usize) -> Result<usize> {
        let start = match &mut self.start {
            Start::Fixed(start) => *start,
            Start::List(starts) => starts.pop_front().ok_or_else(|| {
                Error::InvalidParameter("start vertex list is exhausted".into())
            })?,
            Start::Random(rng) => rng.random_range(0..n),
        };
        if start >= n {
            return Err(Error::InvalidParameter(format!(
                "start vertex {start} is out of range for a graph with {n} vertices"
            )));
        }
        Ok(start)
    }
}

impl Default for NearestNeighbor {
    fn default() -> Self {
        NearestNeighbor::new()
    }
}

impl TourAlgorithm for NearestNeighbor {
    fn compute_tour<G: TourGraph>(&mut self, graph: &G) -> Result<GraphPath<G::Vertex>> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(Error::InvalidInput("graph has no vertices".into()));
        }
        let start = self.next_start(n)?;

        let mut order = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        order.push(start);
        visited[start] = true;

        let mut current = start;
        for _ in 1..n {
            let mut nearest: Option<(usize, f64)> = None;
            for candidate in 0..n {
                if visited[candidate] {
                    continue;
                }
                let weight = graph.edge_weight(current, candidate).ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "graph is not complete: no edge between vertices {current} and {candidate}"
                    ))
                })?;
                // Strict comparison keeps the lowest-index vertex on ties.
                if nearest.is_none_or(|(_, best)| weight < best) {
                    nearest = Some((candidate, weight));
                }
            }
            let (next, _) = nearest.ok_or_else(|| {
                Error::InternalInvariant("unvisited vertex expected but none found".into())
            })?;
            order.push(next);
            visited[next] = true;
            current = next;
        }

        GraphPath::cycle(graph, &order)
    }
}
