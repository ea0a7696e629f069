//! Tour representation and the machinery shared by all improvement solvers.
//!
//! A tour is held internally as a closed index sequence of length n+1
//! (first entry repeated at the end) over a dense [`DistanceMatrix`].
//! [`TourState`] bundles the matrix with the improvement threshold and is
//! borrowed by every improver, so composed improvers share one matrix.

mod distance;
mod driver;
mod types;

pub use distance::DistanceMatrix;
pub use types::{TourAlgorithm, TourState};

pub(crate) use driver::solve;
pub(crate) use types::{index_tour_to_path, path_to_index_tour, Improver};
