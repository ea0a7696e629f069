//! Constructive tour initializers.
//!
//! These algorithms build a first Hamiltonian cycle from nothing. They are
//! cheap, and their output quality strongly conditions the runtime of the
//! improvement solvers, so the solvers accept any of them (or any other
//! [`TourAlgorithm`](crate::tour::TourAlgorithm)) as an injected
//! collaborator.

mod nearest_neighbor;
mod random_tour;

pub use nearest_neighbor::NearestNeighbor;
pub use random_tour::RandomTour;
