//! Tour evaluation.
//!
//! A tour is a `[usize]` permutation of the node indices, read as a closed
//! cycle: the last node connects back to the first.

use crate::graph::CostGraph;

/// A tour together with its cyclic length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Node indices in visiting order.
    pub tour: Vec<usize>,
    /// Total cyclic length.
    pub length: f64,
}

impl Solution {
    /// Evaluates `tour` on `graph` and wraps it.
    pub fn evaluated(graph: &CostGraph, tour: Vec<usize>) -> Self {
        let length = tour_length(graph, &tour);
        Self { tour, length }
    }

    /// The trivial tour over a single point.
    pub fn single() -> Self {
        Self {
            tour: vec![0],
            length: 0.0,
        }
    }

    /// Placeholder best before any ant completes a tour: no nodes,
    /// infinite length.
    pub fn unsolved() -> Self {
        Self {
            tour: Vec::new(),
            length: f64::INFINITY,
        }
    }

    /// Whether this holds a tour at all.
    pub fn is_unsolved(&self) -> bool {
        self.tour.is_empty()
    }
}

/// Total cyclic length of `tour`, including the closing edge.
///
/// Tours of fewer than two nodes have length zero.
pub fn tour_length(graph: &CostGraph, tour: &[usize]) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let closing = graph.weight(tour[tour.len() - 1], tour[0]);
    tour.windows(2)
        .map(|w| graph.weight(w[0], w[1]))
        .sum::<f64>()
        + closing
}

/// Iterates the directed edges of the cycle, closing edge last.
pub fn edges(tour: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = tour.len();
    (0..n).map(move |i| (tour[i], tour[(i + 1) % n]))
}

/// Whether `tour` visits every node of `0..n` exactly once.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &node in tour {
        if node >= n || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn square() -> CostGraph {
        CostGraph::build(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_perimeter() {
        let g = square();
        assert!((tour_length(&g, &[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_tour_longer() {
        let g = square();
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_length(&g, &[0, 2, 1, 3]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_and_reflection() {
        let g = square();
        let base = tour_length(&g, &[0, 2, 1, 3]);
        assert!((tour_length(&g, &[1, 3, 0, 2]) - base).abs() < 1e-12);
        assert!((tour_length(&g, &[3, 1, 2, 0]) - base).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_lengths() {
        let g = square();
        assert_eq!(tour_length(&g, &[]), 0.0);
        assert_eq!(tour_length(&g, &[2]), 0.0);
        assert!((tour_length(&g, &[0, 1]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_unsolved_placeholder() {
        let none = Solution::unsolved();
        assert!(none.is_unsolved());
        assert_eq!(none.length, f64::INFINITY);
        assert!(!Solution::single().is_unsolved());
    }

    #[test]
    fn test_edges_wrap() {
        let e: Vec<_> = edges(&[4, 2, 7]).collect();
        assert_eq!(e, vec![(4, 2), (2, 7), (7, 4)]);
    }

    #[test]
    fn test_is_valid_tour() {
        assert!(is_valid_tour(&[2, 0, 1], 3));
        assert!(!is_valid_tour(&[2, 0], 3));
        assert!(!is_valid_tour(&[2, 0, 0], 3));
        assert!(!is_valid_tour(&[0, 1, 3], 3));
    }

    #[test]
    fn test_solution_evaluated() {
        let g = square();
        let s = Solution::evaluated(&g, vec![0, 1, 2, 3]);
        assert!((s.length - 4.0).abs() < 1e-12);
        assert_eq!(Solution::single().tour, vec![0]);
    }
}
