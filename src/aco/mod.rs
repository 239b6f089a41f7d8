//! Ant Colony Optimization for the Euclidean TSP.
//!
//! Each generation, `ant_count` ants build tours on a shared
//! [`CostGraph`](crate::graph::CostGraph), optionally refine them with local
//! search, and the colony then evaporates and reinforces the pheromone
//! trails. The best tour seen across all generations is returned.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Algorithm parameters (exponents, evaporation, budget)
//! - [`AcoRunner`]: Executes the generation loop
//! - [`AcoResult`]: Best tour and run statistics
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod runner;

pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
