//! Graph surface consumed and produced by the tour solvers.
//!
//! Solvers read graphs through the [`TourGraph`] trait (vertex count, stable
//! vertex order, edge-weight lookup) and return tours as [`GraphPath`]
//! values. [`WeightedGraph`] is the bundled implementation used by callers
//! that do not already have a graph type of their own.

mod types;
mod weighted;

pub use types::{GraphPath, TourGraph};
pub use weighted::WeightedGraph;
