//! 2-opt edge exchange.

use super::IMPROVEMENT_EPSILON;
use crate::graph::CostGraph;

/// Applies improving 2-opt moves until none is left.
///
/// For positions `1 <= i < j < n`, the edges `(tour[i-1], tour[i])` and
/// `(tour[j], tour[j+1 mod n])` are replaced by `(tour[i-1], tour[j])` and
/// `(tour[i], tour[j+1 mod n])`, which amounts to reversing `tour[i..=j]`.
/// Each move is applied as soon as it is found. Returns the number of
/// applied moves; zero means `tour` was already 2-optimal.
pub fn two_opt(graph: &CostGraph, tour: &mut [usize]) -> usize {
    let n = tour.len();
    if n < 4 {
        return 0;
    }

    let mut applied = 0;
    loop {
        let mut improved = false;

        for i in 1..n - 1 {
            for j in (i + 1)..n {
                let a = tour[i - 1];
                let b = tour[i];
                let c = tour[j];
                let d = tour[(j + 1) % n];
                // Edges sharing node `a` (i == 1, j == n - 1).
                if a == d {
                    continue;
                }

                let delta = graph.weight(a, c) + graph.weight(b, d)
                    - graph.weight(a, b)
                    - graph.weight(c, d);
                if delta < -IMPROVEMENT_EPSILON {
                    tour[i..=j].reverse();
                    applied += 1;
                    improved = true;
                }
            }
        }

        if !improved {
            return applied;
        }
    }
}
