//! Local search improvement of complete tours.
//!
//! Both operators are deterministic first-improvement hill climbers that
//! rewrite the tour in place and stop at a local optimum:
//!
//! - [`two_opt`]: reverse a segment to replace two edges. O(n²) per pass.
//! - [`three_opt`]: recombine three segments (see [`Recombination`]).
//!   O(n³) per pass; meant for small to moderate instances.
//!
//! Every operator keeps the tour a permutation of the same node set and
//! never increases its length. Tours of fewer than four nodes are already
//! optimal and are left untouched.
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"
//! - Lin (1965), "Computer Solutions of the Traveling Salesman Problem"

mod three_opt;
mod two_opt;

pub use three_opt::{three_opt, Recombination};
pub use two_opt::two_opt;

use crate::graph::CostGraph;

/// A move is applied only if it shortens the tour by more than this.
pub const IMPROVEMENT_EPSILON: f64 = 1e-6;

/// Local search applied to each constructed tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocalSearch {
    /// Keep constructed tours as they are.
    Off,
    /// 2-opt to a local optimum.
    #[default]
    TwoOpt,
    /// 2-opt to a local optimum, then 3-opt.
    ThreeOpt,
}

impl LocalSearch {
    /// Improves `tour` in place. Returns the number of applied moves.
    pub fn improve(self, graph: &CostGraph, tour: &mut [usize]) -> usize {
        match self {
            LocalSearch::Off => 0,
            LocalSearch::TwoOpt => two_opt(graph, tour),
            LocalSearch::ThreeOpt => two_opt(graph, tour) + three_opt(graph, tour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::tour::{is_valid_tour, tour_length};

    fn circle(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * std::f64::consts::TAU;
                Point::new(t.cos() * 10.0, t.sin() * 10.0)
            })
            .collect()
    }

    #[test]
    fn test_off_is_noop() {
        let g = CostGraph::build(&circle(8)).unwrap();
        let mut tour = vec![0, 4, 1, 5, 2, 6, 3, 7];
        let before = tour.clone();
        assert_eq!(LocalSearch::Off.improve(&g, &mut tour), 0);
        assert_eq!(tour, before);
    }

    #[test]
    fn test_both_modes_untangle_circle() {
        let n = 10;
        let g = CostGraph::build(&circle(n)).unwrap();
        let optimal = tour_length(&g, &(0..n).collect::<Vec<_>>());

        for mode in [LocalSearch::TwoOpt, LocalSearch::ThreeOpt] {
            let mut tour = vec![0, 5, 1, 6, 2, 7, 3, 8, 4, 9];
            assert!(mode.improve(&g, &mut tour) > 0);
            assert!(is_valid_tour(&tour, n));
            // Any 2-opt local optimum on convex points is the hull.
            assert!((tour_length(&g, &tour) - optimal).abs() < 1e-6);
        }
    }

    #[test]
    fn test_default_is_two_opt() {
        assert_eq!(LocalSearch::default(), LocalSearch::TwoOpt);
    }
}
