//! ACO generation loop.
//!
//! [`AcoRunner`] drives the run through three phases:
//! initializing (validate, build the graph) → iterating (one generation per
//! step) → exhausted (iteration budget consumed).
//!
//! Within a generation the ants only read the graph. All pheromone
//! mutation happens afterwards in a single [`PheromoneUpdate`] pass, so
//! the ants of a generation are independent and can run in parallel.
//!
//! [`PheromoneUpdate`]: crate::pheromone::PheromoneUpdate

use super::config::AcoConfig;
use crate::error::{AcoError, ConstructionFailure, Result};
use crate::geometry::Point;
use crate::graph::CostGraph;
use crate::tour::Solution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best tour found. Empty with infinite length if no ant ever
    /// completed a tour.
    pub best: Solution,

    /// Number of generations executed.
    pub generations: usize,

    /// Ants discarded because their construction stalled.
    pub failed_constructions: usize,

    /// Best length after each generation (`INFINITY` until a tour exists).
    pub cost_history: Vec<f64>,

    /// Best length within each generation, `None` if every ant failed.
    pub generation_best: Vec<Option<f64>>,
}

/// Executes the ACO loop.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner};
/// use u_aco::geometry::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let config = AcoConfig::default()
///     .with_ant_count(5)
///     .with_iteration_count(5)
///     .with_seed(42);
/// let result = AcoRunner::run(&points, &config).unwrap();
/// assert!((result.best.length - 4.0).abs() < 1e-9);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO over a point set.
    ///
    /// A single point yields the trivial tour `[0]` of length zero without
    /// running any generation.
    ///
    /// # Errors
    /// - [`AcoError::InvalidParameter`] if the configuration is invalid.
    /// - [`AcoError::InvalidInput`] if `points` is empty.
    pub fn run(points: &[Point], config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;
        match points.len() {
            0 => Err(AcoError::InvalidInput("point set is empty".into())),
            1 => Ok(AcoResult {
                best: Solution::single(),
                generations: 0,
                failed_constructions: 0,
                cost_history: Vec::new(),
                generation_best: Vec::new(),
            }),
            _ => {
                let mut graph = CostGraph::build(points)?;
                Self::run_on_graph(&mut graph, config)
            }
        }
    }

    /// Runs ACO on a caller-owned graph, mutating its pheromone in place.
    ///
    /// The trails are taken as they are; nothing resets them first.
    pub fn run_on_graph(graph: &mut CostGraph, config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;
        let update = config.pheromone_update();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        info!(
            phase = "initializing",
            nodes = graph.len(),
            ants = config.ant_count,
            iterations = config.iteration_count,
            "starting ant colony run"
        );

        let mut best = Solution::unsolved();
        let mut failed_constructions = 0usize;
        let mut cost_history = Vec::with_capacity(config.iteration_count);
        let mut generation_best = Vec::with_capacity(config.iteration_count);

        for generation in 0..config.iteration_count {
            // One seed per ant, drawn before any ant runs.
            let seeds: Vec<u64> = (0..config.ant_count).map(|_| rng.random()).collect();
            let outcomes = run_ants(graph, config, &seeds);

            let mut population = Vec::with_capacity(outcomes.len());
            for outcome in outcomes {
                match outcome {
                    Ok(solution) => population.push(solution),
                    Err(failure) => {
                        trace!(generation, %failure, "discarding ant");
                        failed_constructions += 1;
                    }
                }
            }

            let gen_best = population
                .iter()
                .min_by(|a, b| a.length.total_cmp(&b.length));
            generation_best.push(gen_best.map(|s| s.length));

            match gen_best {
                Some(candidate) => {
                    if best.is_unsolved() || candidate.length < best.length {
                        best = candidate.clone();
                    }
                }
                None => warn!(generation, "every ant failed; evaporation only"),
            }

            let elite = (!best.is_unsolved()).then_some(&best);
            update.apply(graph, &population, elite)?;
            cost_history.push(best.length);

            debug!(
                phase = "iterating",
                generation,
                valid = population.len(),
                generation_best = gen_best.map(|s| s.length),
                best = best.length,
                "generation complete"
            );
        }

        if best.is_unsolved() {
            warn!(
                generations = config.iteration_count,
                failed_constructions, "no ant completed a tour"
            );
        }

        info!(
            phase = "exhausted",
            best = best.length,
            failed_constructions,
            "ant colony run finished"
        );

        Ok(AcoResult {
            best,
            generations: config.iteration_count,
            failed_constructions,
            cost_history,
            generation_best,
        })
    }
}

/// Builds, refines and evaluates one ant's tour.
fn run_ant(
    graph: &CostGraph,
    config: &AcoConfig,
    seed: u64,
) -> std::result::Result<Solution, ConstructionFailure> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = rng.random_range(0..graph.len());
    let mut tour = config
        .construction
        .build(graph, start, config.alpha, config.beta, &mut rng)?;
    config.local_search.improve(graph, &mut tour);
    Ok(Solution::evaluated(graph, tour))
}

#[cfg(feature = "parallel")]
fn run_ants(
    graph: &CostGraph,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<std::result::Result<Solution, ConstructionFailure>> {
    if config.parallel {
        seeds
            .par_iter()
            .map(|&seed| run_ant(graph, config, seed))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| run_ant(graph, config, seed))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_ants(
    graph: &CostGraph,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<std::result::Result<Solution, ConstructionFailure>> {
    seeds
        .iter()
        .map(|&seed| run_ant(graph, config, seed))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
