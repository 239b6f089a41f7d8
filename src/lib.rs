//! Ant Colony Optimization with local search for the Euclidean TSP.
//!
//! Computes near-optimal closed tours over a set of planar points:
//!
//! - **Construction**: nearest-neighbor or pheromone-guided ant sampling
//!   ([`construction`]).
//! - **Local search**: 2-opt and 3-opt hill climbing ([`local_search`]).
//! - **Pheromone update**: evaporation, per-tour deposit and an elitist
//!   bonus for the best-known tour ([`pheromone`]).
//! - **ACO loop**: generations of ants over a shared [`graph::CostGraph`]
//!   with a fixed iteration budget ([`aco`]).
//! - **Greedy**: deterministic nearest-neighbor + local search, optionally
//!   from every start node ([`greedy`]).
//!
//! # Architecture
//!
//! Geometry → CostGraph → construction → local search → evaluation →
//! pheromone update → next generation. The graph is read-only while the
//! ants of a generation run; the update is applied once all of them are
//! done. With the `parallel` feature the ants run on rayon's thread pool.
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner};
//! use u_aco::geometry::Point;
//!
//! let points: Vec<Point> = (0..12)
//!     .map(|i| {
//!         let t = i as f64 / 12.0 * std::f64::consts::TAU;
//!         Point::new(t.cos(), t.sin())
//!     })
//!     .collect();
//! let config = AcoConfig::default().with_seed(42);
//! let result = AcoRunner::run(&points, &config).unwrap();
//! assert_eq!(result.best.tour.len(), 12);
//! ```

pub mod aco;
pub mod construction;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod greedy;
pub mod instance;
pub mod local_search;
pub mod pheromone;
pub mod tour;

pub use error::{AcoError, ConstructionFailure, Result};
