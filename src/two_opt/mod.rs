//! 2-opt tour improvement.
//!
//! The classic edge-exchange heuristic: repeatedly replace two tour edges
//! by the two edges that reconnect the same cut with one segment reversed,
//! as long as that shortens the tour.
//!
//! # Reference
//!
//! Croes, G. A. (1958). "A method for solving traveling-salesman problems",
//! *Operations Research* 6(6), 791-812.

mod config;
mod solver;

pub use config::TwoOptConfig;
pub use solver::TwoOptSolver;

pub(crate) use solver::TwoOptImprover;
