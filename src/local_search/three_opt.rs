//! 3-opt segment recombination.
//!
//! Cutting the tour after positions `i < j < k` splits it into
//! `A = tour[..=i]`, `B = tour[i+1..=j]`, `C = tour[j+1..=k]` and
//! `D = tour[k+1..]`. A and D stay in place; B and C are reassembled in one
//! of six ways. Because weights are symmetric, reversing a segment does not
//! change its inner length, so each candidate is scored from the three
//! boundary edges alone.

use super::IMPROVEMENT_EPSILON;
use crate::graph::CostGraph;

/// Inner segment of a 3-opt cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    B,
    C,
}

/// One way of reassembling the two inner segments of a 3-opt cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recombination {
    /// `A + rev(B) + C + D`
    ReverseB,
    /// `A + B + rev(C) + D`
    ReverseC,
    /// `A + C + B + D`
    SwapBC,
    /// `A + rev(B) + rev(C) + D`
    ReverseBoth,
    /// `A + rev(C) + B + D`
    ReverseCThenB,
    /// `A + C + rev(B) + D`
    CThenReverseB,
}

impl Recombination {
    /// All six recombinations, in evaluation order.
    pub const ALL: [Recombination; 6] = [
        Recombination::ReverseB,
        Recombination::ReverseC,
        Recombination::SwapBC,
        Recombination::ReverseBoth,
        Recombination::ReverseCThenB,
        Recombination::CThenReverseB,
    ];

    /// Segment order and orientation (`true` = reversed).
    fn layout(self) -> [(Segment, bool); 2] {
        use Segment::{B, C};
        match self {
            Recombination::ReverseB => [(B, true), (C, false)],
            Recombination::ReverseC => [(B, false), (C, true)],
            Recombination::SwapBC => [(C, false), (B, false)],
            Recombination::ReverseBoth => [(B, true), (C, true)],
            Recombination::ReverseCThenB => [(C, true), (B, false)],
            Recombination::CThenReverseB => [(C, false), (B, true)],
        }
    }

    /// Change in tour length if this recombination were applied at
    /// `(i, j, k)`. Negative means shorter.
    ///
    /// # Panics
    /// Panics unless `i < j < k < tour.len()`.
    pub fn delta(self, graph: &CostGraph, tour: &[usize], i: usize, j: usize, k: usize) -> f64 {
        assert!(i < j && j < k && k < tour.len(), "cut points must satisfy i < j < k < n");
        let n = tour.len();
        let a = tour[i];
        let d = tour[(k + 1) % n];
        let ends = |seg: Segment, reversed: bool| {
            let (first, last) = match seg {
                Segment::B => (tour[i + 1], tour[j]),
                Segment::C => (tour[j + 1], tour[k]),
            };
            if reversed {
                (last, first)
            } else {
                (first, last)
            }
        };

        let [(s1, r1), (s2, r2)] = self.layout();
        let (f1, l1) = ends(s1, r1);
        let (f2, l2) = ends(s2, r2);

        let before = graph.weight(a, tour[i + 1])
            + graph.weight(tour[j], tour[j + 1])
            + graph.weight(tour[k], d);
        let after = graph.weight(a, f1) + graph.weight(l1, f2) + graph.weight(l2, d);
        after - before
    }

    /// Rewrites `tour[i+1..=k]` according to this recombination.
    ///
    /// # Panics
    /// Panics unless `i < j < k < tour.len()`.
    pub fn apply(self, tour: &mut [usize], i: usize, j: usize, k: usize) {
        assert!(i < j && j < k && k < tour.len(), "cut points must satisfy i < j < k < n");
        let mut buf = Vec::with_capacity(k - i);
        for (seg, reversed) in self.layout() {
            let part = match seg {
                Segment::B => &tour[i + 1..=j],
                Segment::C => &tour[j + 1..=k],
            };
            if reversed {
                buf.extend(part.iter().rev());
            } else {
                buf.extend_from_slice(part);
            }
        }
        tour[i + 1..=k].copy_from_slice(&buf);
    }
}

/// Best recombination at `(i, j, k)` and its delta.
fn best_recombination(
    graph: &CostGraph,
    tour: &[usize],
    i: usize,
    j: usize,
    k: usize,
) -> (Recombination, f64) {
    Recombination::ALL
        .iter()
        .map(|&r| (r, r.delta(graph, tour, i, j, k)))
        .fold((Recombination::ReverseB, f64::INFINITY), |best, cand| {
            if cand.1 < best.1 {
                cand
            } else {
                best
            }
        })
}

/// Applies improving 3-opt moves until none is left.
///
/// For every triple `i < j < k` the best of the six recombinations is
/// adopted if it shortens the tour. Returns the number of applied moves.
pub fn three_opt(graph: &CostGraph, tour: &mut [usize]) -> usize {
    let n = tour.len();
    if n < 4 {
        return 0;
    }

    let mut applied = 0;
    loop {
        let mut improved = false;

        for i in 0..n - 2 {
            for j in (i + 1)..n - 1 {
                for k in (j + 1)..n {
                    let (recombination, delta) = best_recombination(graph, tour, i, j, k);
                    if delta < -IMPROVEMENT_EPSILON {
                        recombination.apply(tour, i, j, k);
                        applied += 1;
                        improved = true;
                    }
                }
            }
        }

        if !improved {
            return applied;
        }
    }
}
