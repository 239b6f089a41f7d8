//! Global pheromone update.
//!
//! One update per generation, executed by the coordinator after every ant
//! of the generation has finished:
//!
//! 1. evaporate all trails by `evaporation_rate`,
//! 2. deposit `q / length` on both directions of every edge of every tour,
//! 3. deposit the elitist bonus `q * elite_factor / best.length` on the
//!    edges of the best-known tour.
//!
//! Evaporation always runs before any deposit.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents" (elitist strategy)

use crate::error::{AcoError, Result};
use crate::graph::{check_evaporation_rate, CostGraph};
use crate::tour::{edges, Solution};
use tracing::trace;

/// Parameters of the global pheromone update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PheromoneUpdate {
    /// Fraction of every trail removed per update, in `[0, 1)`.
    pub evaporation_rate: f64,
    /// Deposit scale. A tour of length `L` deposits `q / L` per edge.
    pub q: f64,
    /// Weight of the best-known tour's bonus deposit. Zero disables it.
    pub elite_factor: f64,
}

impl PheromoneUpdate {
    pub fn new(evaporation_rate: f64, q: f64, elite_factor: f64) -> Self {
        Self {
            evaporation_rate,
            q,
            elite_factor,
        }
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<()> {
        check_evaporation_rate(self.evaporation_rate)?;
        if !(self.q > 0.0 && self.q.is_finite()) {
            return Err(AcoError::parameter(
                "q",
                format!("must be positive and finite, got {}", self.q),
            ));
        }
        if !(self.elite_factor >= 0.0 && self.elite_factor.is_finite()) {
            return Err(AcoError::parameter(
                "elite_factor",
                format!("must be non-negative and finite, got {}", self.elite_factor),
            ));
        }
        Ok(())
    }

    /// Applies one update to `graph`.
    ///
    /// `population` holds the generation's completed tours and may be
    /// empty, in which case only evaporation (and the elitist bonus) takes
    /// place. Tours of non-positive length deposit nothing.
    pub fn apply(
        &self,
        graph: &mut CostGraph,
        population: &[Solution],
        best: Option<&Solution>,
    ) -> Result<()> {
        self.validate()?;
        graph.evaporate(self.evaporation_rate)?;

        for solution in population {
            deposit(graph, &solution.tour, self.q, solution.length)?;
        }

        if self.elite_factor > 0.0 {
            if let Some(best) = best {
                deposit(graph, &best.tour, self.q * self.elite_factor, best.length)?;
            }
        }
        Ok(())
    }
}

/// Deposits `scale / length` on both directions of every tour edge.
fn deposit(graph: &mut CostGraph, tour: &[usize], scale: f64, length: f64) -> Result<()> {
    if length <= 0.0 || tour.len() < 2 {
        trace!(length, "skipping deposit for degenerate tour");
        return Ok(());
    }
    let amount = scale / length;
    for (from, to) in edges(tour) {
        graph.reinforce(from, to, amount)?;
        graph.reinforce(to, from, amount)?;
    }
    Ok(())
}
