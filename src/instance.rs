//! Random knapsack instance generation.
//!
//! Values and weights are drawn uniformly from inclusive integer ranges
//! (1..=10 by default). Generation is deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{KnapsackError, KnapsackResult};
use crate::model::Problem;

/// Parameters for [`generate`].
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::{generate, InstanceConfig};
///
/// let config = InstanceConfig::new(20, 30).with_seed(7);
/// let problem = generate(&config).unwrap();
/// assert_eq!(problem.len(), 20);
/// assert_eq!(problem.capacity(), 30);
/// assert!(problem.variables().iter().all(|v| (1..=10).contains(&v.weight)));
/// ```
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    /// Number of items.
    pub items: usize,
    /// Knapsack capacity.
    pub capacity: i64,
    /// Inclusive range of item values.
    pub value_range: (i64, i64),
    /// Inclusive range of item weights.
    pub weight_range: (i64, i64),
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl InstanceConfig {
    /// `items` items with values and weights in 1..=10.
    pub fn new(items: usize, capacity: i64) -> Self {
        Self {
            items,
            capacity,
            value_range: (1, 10),
            weight_range: (1, 10),
            seed: None,
        }
    }

    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        self.value_range = (min, max);
        self
    }

    pub fn with_weight_range(mut self, min: i64, max: i64) -> Self {
        self.weight_range = (min, max);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let (vmin, vmax) = self.value_range;
        if vmin > vmax {
            return Err(format!("empty value range {vmin}..={vmax}"));
        }
        let (wmin, wmax) = self.weight_range;
        if wmin > wmax {
            return Err(format!("empty weight range {wmin}..={wmax}"));
        }
        if wmin < 0 {
            return Err(format!("weights must be non-negative, got minimum {wmin}"));
        }
        if self.capacity < 0 {
            return Err(format!("capacity must be non-negative, got {}", self.capacity));
        }
        Ok(())
    }
}

/// Draws a random problem.
///
/// Fails with [`KnapsackError::InvalidConfig`] on empty or negative ranges
/// and a negative capacity.
pub fn generate(config: &InstanceConfig) -> KnapsackResult<Problem> {
    config.validate().map_err(KnapsackError::InvalidConfig)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (vmin, vmax) = config.value_range;
    let (wmin, wmax) = config.weight_range;
    let values: Vec<f64> = (0..config.items)
        .map(|_| rng.random_range(vmin..=vmax) as f64)
        .collect();
    let weights: Vec<i64> = (0..config.items)
        .map(|_| rng.random_range(wmin..=wmax))
        .collect();

    Problem::build(values, weights, config.capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let problem = generate(&InstanceConfig::new(50, 100).with_seed(1)).unwrap();
        assert_eq!(problem.len(), 50);
        for var in problem.variables() {
            assert!((1.0..=10.0).contains(&var.value));
            assert!((1..=10).contains(&var.weight));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let config = InstanceConfig::new(30, 40).with_seed(42);
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn test_custom_ranges() {
        let config = InstanceConfig::new(10, 5)
            .with_value_range(3, 3)
            .with_weight_range(0, 0)
            .with_seed(9);
        let problem = generate(&config).unwrap();
        assert!(problem.variables().iter().all(|v| v.value == 3.0 && v.weight == 0));
    }

    #[test]
    fn test_invalid_config() {
        assert!(generate(&InstanceConfig::new(5, -1)).is_err());
        assert!(generate(&InstanceConfig::new(5, 10).with_value_range(4, 2)).is_err());
        assert!(generate(&InstanceConfig::new(5, 10).with_weight_range(-2, 2)).is_err());
    }

    #[test]
    fn test_zero_items() {
        let problem = generate(&InstanceConfig::new(0, 10).with_seed(3)).unwrap();
        assert!(problem.is_empty());
    }
}
