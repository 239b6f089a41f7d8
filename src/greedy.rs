//! Deterministic greedy solver.
//!
//! Nearest-neighbor construction followed by local search, without any
//! pheromone. [`solve_best_start`] repeats it from every start node and
//! keeps the shortest tour.

use crate::construction::nearest_neighbor;
use crate::error::{AcoError, Result};
use crate::geometry::Point;
use crate::graph::CostGraph;
use crate::local_search::LocalSearch;
use crate::tour::Solution;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

/// Outcome of a multi-start greedy run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// Shortest tour over all start nodes.
    pub best: Solution,
    /// Start node that produced it (lowest index on ties).
    pub start: usize,
}

/// Nearest-neighbor tour from `start`, refined by `local_search`.
///
/// # Errors
/// - [`AcoError::InvalidInput`] if `points` is empty.
/// - [`AcoError::InvalidParameter`] if `start` is out of range.
pub fn solve(points: &[Point], start: usize, local_search: LocalSearch) -> Result<Solution> {
    check_start(points.len(), start)?;
    if points.len() == 1 {
        return Ok(Solution::single());
    }
    let graph = CostGraph::build(points)?;
    Ok(solve_on_graph(&graph, start, local_search))
}

/// Runs [`solve`] from every start node and keeps the shortest tour.
///
/// # Errors
/// [`AcoError::InvalidInput`] if `points` is empty.
pub fn solve_best_start(points: &[Point], local_search: LocalSearch) -> Result<GreedyResult> {
    check_start(points.len(), 0)?;
    if points.len() == 1 {
        return Ok(GreedyResult {
            best: Solution::single(),
            start: 0,
        });
    }
    let graph = CostGraph::build(points)?;
    let solutions = solve_all_starts(&graph, local_search);

    let mut best: Option<GreedyResult> = None;
    for (start, solution) in solutions.into_iter().enumerate() {
        if best
            .as_ref()
            .is_none_or(|b| solution.length < b.best.length)
        {
            best = Some(GreedyResult {
                best: solution,
                start,
            });
        }
    }
    let best = best.ok_or_else(|| AcoError::InvalidInput("point set is empty".into()))?;
    debug!(start = best.start, length = best.best.length, "multi-start greedy finished");
    Ok(best)
}

fn solve_on_graph(graph: &CostGraph, start: usize, local_search: LocalSearch) -> Solution {
    let mut tour = nearest_neighbor(graph, start);
    local_search.improve(graph, &mut tour);
    Solution::evaluated(graph, tour)
}

#[cfg(feature = "parallel")]
fn solve_all_starts(graph: &CostGraph, local_search: LocalSearch) -> Vec<Solution> {
    (0..graph.len())
        .into_par_iter()
        .map(|start| solve_on_graph(graph, start, local_search))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn solve_all_starts(graph: &CostGraph, local_search: LocalSearch) -> Vec<Solution> {
    (0..graph.len())
        .map(|start| solve_on_graph(graph, start, local_search))
        .collect()
}

fn check_start(n: usize, start: usize) -> Result<()> {
    if n == 0 {
        return Err(AcoError::InvalidInput("point set is empty".into()));
    }
    if start >= n {
        return Err(AcoError::parameter(
            "start",
            format!("must be below the number of points ({n}), got {start}"),
        ));
    }
    Ok(())
}
