//! Error types for u-aco.
//!
//! Configuration and input problems are fatal and surface as [`AcoError`].
//! A single ant running into a dead end is recoverable and is reported
//! separately as [`ConstructionFailure`].

use thiserror::Error;

/// Result type alias for u-aco operations.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Unified error type for all fatal u-aco failures.
#[derive(Debug, Error)]
pub enum AcoError {
    /// The point set cannot form a tour (too few points).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A parameter lies outside its admissible range.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Malformed point file content.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcoError {
    pub(crate) fn parameter(name: &'static str, message: impl Into<String>) -> Self {
        AcoError::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// An ant reached a node from which no unvisited node is desirable.
///
/// Carries the partial tour built so far. The optimization loop discards
/// it: the ant contributes neither a tour nor a pheromone deposit.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("construction stalled at node {stalled_at} after visiting {} of {expected} nodes", .partial.len())]
pub struct ConstructionFailure {
    /// Node at which selection failed.
    pub stalled_at: usize,
    /// Nodes visited before the failure, in order.
    pub partial: Vec<usize>,
    /// Number of nodes a complete tour would contain.
    pub expected: usize,
}
