//! Complete weighted graph with per-edge pheromone.
//!
//! [`CostGraph`] stores two flattened `n × n` tables: the static Euclidean
//! edge weights and the mutable pheromone intensities. Weights are
//! symmetric; pheromone is stored per directed edge because the read and
//! update paths address edges as `(from, to)`.

use crate::error::{AcoError, Result};
use crate::geometry::{distance, distance_squared, Point};
use tracing::warn;

/// Initial pheromone on every edge.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Complete graph over a point set.
#[derive(Debug, Clone)]
pub struct CostGraph {
    n: usize,
    weights: Vec<f64>,
    pheromone: Vec<f64>,
}

impl CostGraph {
    /// Builds the graph for `points`.
    ///
    /// # Errors
    /// [`AcoError::InvalidInput`] if fewer than two points are supplied.
    pub fn build(points: &[Point]) -> Result<Self> {
        let n = points.len();
        if n < 2 {
            return Err(AcoError::InvalidInput(format!(
                "at least 2 points are required to build a graph, got {n}"
            )));
        }

        let mut weights = vec![0.0; n * n];
        let mut coincident = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                if distance_squared(&points[i], &points[j]) == 0.0 {
                    coincident += 1;
                }
                let d = distance(&points[i], &points[j]);
                weights[i * n + j] = d;
                weights[j * n + i] = d;
            }
        }

        if coincident > 0 {
            warn!(
                pairs = coincident,
                "point set contains coincident points; zero-weight edges are always preferred"
            );
        }

        Ok(Self {
            n,
            weights,
            pheromone: vec![INITIAL_PHEROMONE; n * n],
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: a graph holds at least two nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Edge weight between `i` and `j`. `weight(i, i)` is zero.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// Pheromone on the directed edge `i -> j`.
    #[inline]
    pub fn pheromone(&self, i: usize, j: usize) -> f64 {
        self.pheromone[i * self.n + j]
    }

    /// Multiplies every pheromone value by `1 - rate`.
    ///
    /// # Errors
    /// [`AcoError::InvalidParameter`] unless `rate` lies in `[0, 1)`. A rate
    /// of one would erase every trail. The graph is unchanged on error.
    pub fn evaporate(&mut self, rate: f64) -> Result<()> {
        check_evaporation_rate(rate)?;
        let keep = 1.0 - rate;
        for p in &mut self.pheromone {
            *p *= keep;
        }
        Ok(())
    }

    /// Adds `amount` to the pheromone on the directed edge `i -> j`.
    ///
    /// There is no upper bound.
    ///
    /// # Errors
    /// [`AcoError::InvalidParameter`] if `amount` is negative or not finite.
    pub fn reinforce(&mut self, i: usize, j: usize, amount: f64) -> Result<()> {
        if amount < 0.0 || !amount.is_finite() {
            return Err(AcoError::parameter(
                "amount",
                format!("deposit must be finite and non-negative, got {amount}"),
            ));
        }
        self.pheromone[i * self.n + j] += amount;
        Ok(())
    }

    /// The unvisited node closest to `from`, lowest index on ties.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let row = &self.weights[from * self.n..(from + 1) * self.n];
        let mut best: Option<(usize, f64)> = None;
        for (to, &w) in row.iter().enumerate() {
            if visited[to] {
                continue;
            }
            match best {
                Some((_, bw)) if bw <= w => {}
                _ => best = Some((to, w)),
            }
        }
        best.map(|(to, _)| to)
    }
}

pub(crate) fn check_evaporation_rate(rate: f64) -> Result<()> {
    if (0.0..1.0).contains(&rate) {
        Ok(())
    } else {
        Err(AcoError::parameter(
            "evaporation_rate",
            format!("must lie in [0, 1), got {rate}"),
        ))
    }
}
