//! Local-search heuristics for the symmetric travelling salesperson problem.
//!
//! Provides k-opt tour improvement together with the supporting pieces a
//! complete solver needs:
//!
//! - **2-opt** ([`two_opt`]): the classic edge-exchange heuristic, kept as a
//!   dedicated implementation because it is the reference point for the
//!   k = 2 specialization of k-opt.
//! - **k-opt** ([`kopt`]): cuts the tour into k segments and evaluates every
//!   canonical recombination (reordering and per-segment reversal) of those
//!   segments, applying the best improvement until a local optimum is
//!   reached. Includes an incremental driver that chains 2-opt, 3-opt, ...,
//!   k-opt using only "pure" moves for the higher stages.
//! - **Constructive initializers** ([`constructive`]): nearest-neighbor and
//!   random-tour starting solutions, usable standalone or as collaborators
//!   injected into the improvement solvers.
//! - **Concurrent computation cache** ([`cache`]): a keyed memo with
//!   at-most-one computation per key and no cross-key blocking. The segment
//!   recombination catalogs grow super-exponentially in k and are shared
//!   process-wide through this cache.
//!
//! # Architecture
//!
//! Solvers operate on anything implementing [`graph::TourGraph`] and return
//! a [`graph::GraphPath`]. Internally a tour is a closed index sequence over
//! a dense [`tour::DistanceMatrix`]; improvement passes share a borrowed
//! [`tour::TourState`] so that composed improvers (the incremental driver)
//! never duplicate the matrix.

pub mod cache;
pub mod constructive;
pub mod error;
pub mod graph;
pub mod kopt;
pub mod tour;
pub mod two_opt;

pub use error::{Error, Result};
