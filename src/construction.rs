//! Initial tour construction.
//!
//! Two interchangeable strategies:
//!
//! - [`nearest_neighbor`]: deterministic greedy walk, always completes.
//! - [`ant_tour`]: roulette-wheel sampling weighted by
//!   `pheromone^alpha * (1 / weight)^beta`. May fail when no unvisited node
//!   has positive desirability.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

use crate::error::ConstructionFailure;
use crate::graph::CostGraph;
use rand::Rng;

/// Construction strategy used by the optimization loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    /// Pheromone-guided roulette-wheel sampling.
    #[default]
    Probabilistic,
    /// Greedy nearest-neighbor walk. Ignores pheromone, so only the start
    /// node varies between ants.
    NearestNeighbor,
}

impl Construction {
    /// Builds one tour starting at `start`.
    pub fn build<R: Rng>(
        self,
        graph: &CostGraph,
        start: usize,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) -> Result<Vec<usize>, ConstructionFailure> {
        match self {
            Construction::Probabilistic => ant_tour(graph, start, alpha, beta, rng),
            Construction::NearestNeighbor => Ok(nearest_neighbor(graph, start)),
        }
    }
}

/// Greedy tour: repeatedly moves to the closest unvisited node.
///
/// Deterministic for a given `start`; ties go to the lowest index.
///
/// # Panics
/// Panics if `start >= graph.len()`.
pub fn nearest_neighbor(graph: &CostGraph, start: usize) -> Vec<usize> {
    let n = graph.len();
    assert!(start < n, "start node {start} out of range for {n} nodes");

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    tour.push(current);

    while let Some(next) = graph.nearest_unvisited(current, &visited) {
        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour
}

/// Desirability of moving from `from` to `to`.
#[inline]
pub fn desirability(graph: &CostGraph, from: usize, to: usize, alpha: f64, beta: f64) -> f64 {
    let trail = graph.pheromone(from, to).powf(alpha);
    let visibility = (1.0 / graph.weight(from, to)).powf(beta);
    trail * visibility
}

/// Ant-style probabilistic tour construction.
///
/// At each step every unvisited node is scored with [`desirability`] and
/// the next node is drawn by [`roulette_select`].
///
/// # Errors
/// [`ConstructionFailure`] when the remaining candidates have no positive
/// total desirability. The failure carries the partial tour.
///
/// # Panics
/// Panics if `start >= graph.len()`.
pub fn ant_tour<R: Rng>(
    graph: &CostGraph,
    start: usize,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Result<Vec<usize>, ConstructionFailure> {
    let n = graph.len();
    assert!(start < n, "start node {start} out of range for {n} nodes");

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    tour.push(current);

    while tour.len() < n {
        candidates.clear();
        candidates.extend(
            (0..n)
                .filter(|&to| !visited[to])
                .map(|to| (to, desirability(graph, current, to, alpha, beta))),
        );

        // Uniform draw in [0, 1); scaled to [0, total) inside the selection.
        let draw = rng.random::<f64>();
        match roulette_select(&candidates, draw) {
            Some(next) => {
                visited[next] = true;
                tour.push(next);
                current = next;
            }
            None => {
                return Err(ConstructionFailure {
                    stalled_at: current,
                    partial: tour,
                    expected: n,
                });
            }
        }
    }
    Ok(tour)
}

/// Roulette-wheel selection over `(node, score)` candidates.
///
/// `draw` is a uniform value in `[0, 1)`; the target is
/// `r = draw * total`. Scores are accumulated in the given order and the
/// first node whose cumulative sum reaches `r` is chosen. Candidates with a
/// non-positive score are never chosen.
///
/// Returns `None` when no candidate has a positive score. An infinite
/// score wins outright (first one in order). Finite scores whose sum
/// overflows are rescaled by the largest score first, so the draw stays
/// proportional.
pub fn roulette_select(candidates: &[(usize, f64)], draw: f64) -> Option<usize> {
    let positive = || candidates.iter().copied().filter(|&(_, s)| s > 0.0);

    let peak = positive().map(|(_, s)| s).reduce(f64::max)?;
    if peak.is_infinite() {
        return positive().find(|&(_, s)| s == peak).map(|(node, _)| node);
    }

    let mut norm = 1.0;
    let mut total: f64 = positive().map(|(_, s)| s).sum();
    if total.is_infinite() {
        norm = peak;
        total = positive().map(|(_, s)| s / norm).sum();
    }

    let r = draw.clamp(0.0, 1.0) * total;
    let mut cumulative = 0.0;
    let mut last = None;
    for (node, score) in positive() {
        cumulative += score / norm;
        last = Some(node);
        if cumulative >= r {
            return Some(node);
        }
    }
    // Rounding can leave the final sum a hair under `r`.
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::tour::is_valid_tour;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> CostGraph {
        CostGraph::build(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    fn line(n: usize) -> CostGraph {
        let pts: Vec<Point> = (0..n).map(|i| Point::new(i as f64, 0.0)).collect();
        CostGraph::build(&pts).unwrap()
    }

    #[test]
    fn test_nearest_neighbor_square() {
        let g = square();
        assert_eq!(nearest_neighbor(&g, 0), vec![0, 1, 2, 3]);
        assert_eq!(nearest_neighbor(&g, 2), vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_nearest_neighbor_line() {
        let g = line(5);
        assert_eq!(nearest_neighbor(&g, 2), vec![2, 1, 0, 3, 4]);
    }

    #[test]
    fn test_ant_tour_is_permutation() {
        let g = line(12);
        let mut rng = StdRng::seed_from_u64(42);
        for start in 0..12 {
            let tour = ant_tour(&g, start, 1.0, 2.0, &mut rng).unwrap();
            assert_eq!(tour[0], start);
            assert!(is_valid_tour(&tour, 12));
        }
    }

    #[test]
    fn test_ant_tour_reproducible() {
        let g = line(10);
        let a = ant_tour(&g, 3, 1.0, 2.0, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = ant_tour(&g, 3, 1.0, 2.0, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_desirability() {
        let g = square();
        // pheromone 1, weight 1 -> 1
        assert!((desirability(&g, 0, 1, 1.0, 2.0) - 1.0).abs() < 1e-12);
        // pheromone 1, weight sqrt(2), beta 2 -> 1/2
        assert!((desirability(&g, 0, 2, 1.0, 2.0) - 0.5).abs() < 1e-12);
        // alpha = beta = 0 -> uniform
        assert!((desirability(&g, 0, 2, 0.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_roulette_single_candidate_any_draw() {
        let candidates = [(4, 0.37)];
        for draw in [0.0, 0.25, 0.5, 0.999_999, 1.0] {
            assert_eq!(roulette_select(&candidates, draw), Some(4));
        }
    }

    #[test]
    fn test_roulette_cumulative_order() {
        let candidates = [(1, 1.0), (2, 2.0), (3, 1.0)];
        assert_eq!(roulette_select(&candidates, 0.0), Some(1));
        assert_eq!(roulette_select(&candidates, 0.25), Some(1));
        assert_eq!(roulette_select(&candidates, 0.26), Some(2));
        assert_eq!(roulette_select(&candidates, 0.75), Some(2));
        assert_eq!(roulette_select(&candidates, 0.76), Some(3));
    }

    #[test]
    fn test_roulette_skips_zero_scores() {
        let candidates = [(1, 0.0), (2, 0.5)];
        assert_eq!(roulette_select(&candidates, 0.0), Some(2));
    }

    #[test]
    fn test_roulette_all_zero_fails() {
        assert_eq!(roulette_select(&[(1, 0.0), (2, 0.0)], 0.3), None);
        assert_eq!(roulette_select(&[], 0.3), None);
        assert_eq!(roulette_select(&[(1, f64::NAN)], 0.3), None);
    }

    #[test]
    fn test_roulette_infinite_score() {
        let candidates = [(1, 2.0), (5, f64::INFINITY), (6, f64::INFINITY)];
        assert_eq!(roulette_select(&candidates, 0.1), Some(5));
    }

    #[test]
    fn test_roulette_overflowing_total_stays_proportional() {
        let candidates = [(1, f64::MAX), (2, f64::MAX), (3, 1.0)];
        assert_eq!(roulette_select(&candidates, 0.0), Some(1));
        assert_eq!(roulette_select(&candidates, 0.25), Some(1));
        assert_eq!(roulette_select(&candidates, 0.9), Some(2));

        let uneven = [(4, f64::MAX / 4.0), (5, f64::MAX), (6, f64::MAX / 4.0)];
        // Rescaled weights 0.25, 1, 0.25 out of 1.5.
        assert_eq!(roulette_select(&uneven, 0.1), Some(4));
        assert_eq!(roulette_select(&uneven, 0.5), Some(5));
        assert_eq!(roulette_select(&uneven, 0.95), Some(6));
    }

    #[test]
    fn test_ant_tour_fails_on_zero_pheromone() {
        let mut g = square();
        // Drive every trail to zero: alpha > 0 makes all scores vanish.
        for _ in 0..2000 {
            g.evaporate(0.9).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(1);
        let err = ant_tour(&g, 0, 1.0, 1.0, &mut rng).unwrap_err();
        assert_eq!(err.stalled_at, 0);
        assert_eq!(err.partial, vec![0]);
        assert_eq!(err.expected, 4);
    }

    #[test]
    fn test_construction_dispatch() {
        let g = square();
        let mut rng = StdRng::seed_from_u64(3);
        let nn = Construction::NearestNeighbor
            .build(&g, 0, 1.0, 2.0, &mut rng)
            .unwrap();
        assert_eq!(nn, vec![0, 1, 2, 3]);
        let ant = Construction::Probabilistic
            .build(&g, 1, 1.0, 2.0, &mut rng)
            .unwrap();
        assert!(is_valid_tour(&ant, 4));
    }
}
