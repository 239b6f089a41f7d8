//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of the optimization loop.

use crate::construction::Construction;
use crate::error::{AcoError, Result};
use crate::local_search::LocalSearch;
use crate::pheromone::PheromoneUpdate;

/// Configuration for the Ant Colony Optimization loop.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ant_count, 30);
/// assert_eq!(config.iteration_count, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::AcoConfig;
/// use u_aco::local_search::LocalSearch;
///
/// let config = AcoConfig::default()
///     .with_ant_count(50)
///     .with_elite_factor(5.0)
///     .with_local_search(LocalSearch::ThreeOpt)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Exponent on pheromone in the desirability score (≥ 0).
    ///
    /// Zero ignores trails entirely.
    pub alpha: f64,

    /// Exponent on inverse distance in the desirability score (≥ 0).
    ///
    /// Typical range: 2–5.
    pub beta: f64,

    /// Fraction of pheromone removed per generation, in `[0, 1)`.
    pub evaporation_rate: f64,

    /// Deposit scale (> 0). A tour of length `L` deposits `q / L` per edge.
    pub q: f64,

    /// Elitist bonus weight (≥ 0). Zero disables elitism.
    ///
    /// **Warning**: large values converge early onto the first good tour
    /// and, without enough evaporation, let trails grow without bound.
    pub elite_factor: f64,

    /// Ants per generation (≥ 1).
    pub ant_count: usize,

    /// Number of generations (≥ 1). The only termination criterion.
    pub iteration_count: usize,

    /// Local search applied to every constructed tour.
    pub local_search: LocalSearch,

    /// How ants build their tours.
    pub construction: Construction,

    /// Whether to run the ants of a generation in parallel using rayon.
    ///
    /// Only honored with the `parallel` feature. Seeded runs give the same
    /// result either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            q: 100.0,
            elite_factor: 0.0,
            ant_count: 30,
            iteration_count: 30,
            local_search: LocalSearch::TwoOpt,
            construction: Construction::Probabilistic,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Plain Ant System: no elitism, no local search.
    pub fn classic() -> Self {
        Self {
            local_search: LocalSearch::Off,
            ..Self::default()
        }
    }

    /// Elitist Ant System with 2-opt refinement.
    ///
    /// Strong greedy bias (`beta = 4`), slow evaporation and a five-fold
    /// bonus on the best-known tour.
    pub fn elitist() -> Self {
        Self {
            alpha: 1.2,
            beta: 4.0,
            evaporation_rate: 0.1,
            q: 500.0,
            elite_factor: 5.0,
            ant_count: 100,
            iteration_count: 100,
            local_search: LocalSearch::TwoOpt,
            ..Self::default()
        }
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the distance exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the fraction of pheromone removed per generation.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the deposit scale.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the elitist bonus weight.
    pub fn with_elite_factor(mut self, factor: f64) -> Self {
        self.elite_factor = factor;
        self
    }

    /// Sets the number of ants per generation.
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_iteration_count(mut self, n: usize) -> Self {
        self.iteration_count = n;
        self
    }

    /// Sets the local search applied to each tour.
    pub fn with_local_search(mut self, local_search: LocalSearch) -> Self {
        self.local_search = local_search;
        self
    }

    /// Sets the tour construction strategy.
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Enables or disables parallel ants.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The pheromone update described by this configuration.
    pub fn pheromone_update(&self) -> PheromoneUpdate {
        PheromoneUpdate::new(self.evaporation_rate, self.q, self.elite_factor)
    }

    /// Validates the configuration. Out-of-range values are rejected,
    /// never clamped.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha >= 0.0 && self.alpha.is_finite()) {
            return Err(AcoError::parameter(
                "alpha",
                format!("must be non-negative and finite, got {}", self.alpha),
            ));
        }
        if !(self.beta >= 0.0 && self.beta.is_finite()) {
            return Err(AcoError::parameter(
                "beta",
                format!("must be non-negative and finite, got {}", self.beta),
            ));
        }
        self.pheromone_update().validate()?;
        if self.ant_count == 0 {
            return Err(AcoError::parameter("ant_count", "must be at least 1"));
        }
        if self.iteration_count == 0 {
            return Err(AcoError::parameter("iteration_count", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 2.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.local_search, LocalSearch::TwoOpt);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders_set_fields() {
        let config = AcoConfig::default()
            .with_alpha(0.5)
            .with_beta(3.0)
            .with_evaporation_rate(0.2)
            .with_q(10.0)
            .with_elite_factor(2.0)
            .with_ant_count(7)
            .with_iteration_count(9)
            .with_local_search(LocalSearch::ThreeOpt)
            .with_construction(Construction::NearestNeighbor)
            .with_parallel(false)
            .with_seed(123);
        assert!((config.alpha - 0.5).abs() < 1e-10);
        assert!((config.beta - 3.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.2).abs() < 1e-10);
        assert!((config.q - 10.0).abs() < 1e-10);
        assert!((config.elite_factor - 2.0).abs() < 1e-10);
        assert_eq!(config.ant_count, 7);
        assert_eq!(config.iteration_count, 9);
        assert_eq!(config.local_search, LocalSearch::ThreeOpt);
        assert_eq!(config.construction, Construction::NearestNeighbor);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(123));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_valid() {
        assert!(AcoConfig::classic().validate().is_ok());
        assert_eq!(AcoConfig::classic().local_search, LocalSearch::Off);
        let elitist = AcoConfig::elitist();
        assert!(elitist.validate().is_ok());
        assert!((elitist.elite_factor - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_evaporation_rate() {
        for rate in [1.0, -0.01, 1.5, f64::NAN] {
            let config = AcoConfig::default().with_evaporation_rate(rate);
            assert!(matches!(
                config.validate(),
                Err(AcoError::InvalidParameter {
                    name: "evaporation_rate",
                    ..
                })
            ));
        }
        assert!(AcoConfig::default()
            .with_evaporation_rate(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_negative_exponents() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(-0.5).validate().is_err());
        assert!(AcoConfig::default().with_alpha(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_q_and_elite() {
        assert!(AcoConfig::default().with_q(0.0).validate().is_err());
        assert!(AcoConfig::default().with_q(-3.0).validate().is_err());
        assert!(AcoConfig::default().with_elite_factor(-1.0).validate().is_err());
    }

    #[test]
    fn test_validate_counts() {
        assert!(matches!(
            AcoConfig::default().with_ant_count(0).validate(),
            Err(AcoError::InvalidParameter {
                name: "ant_count",
                ..
            })
        ));
        assert!(matches!(
            AcoConfig::default().with_iteration_count(0).validate(),
            Err(AcoError::InvalidParameter {
                name: "iteration_count",
                ..
            })
        ));
    }
}
