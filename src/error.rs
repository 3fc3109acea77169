//! Error types for knapsack modeling and solving.

use thiserror::Error;

/// Errors that can occur while building or solving a knapsack problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnapsackError {
    /// Problem construction failed (length mismatch, negative capacity, ...).
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// Warm-start candidate violates the capacity constraint.
    #[error("Infeasible warm start: weight {weight} exceeds capacity {capacity}")]
    InfeasibleWarmStart {
        /// Recomputed weight of the candidate.
        weight: i64,
        /// Capacity of the target problem.
        capacity: i64,
    },

    /// Warm-start candidate does not assign every variable of the target problem.
    #[error("Warm start has {found} values, problem has {expected} variables")]
    WarmStartDimension {
        /// Number of variables in the problem.
        expected: usize,
        /// Number of values in the candidate.
        found: usize,
    },

    /// Solver configuration is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for knapsack operations.
pub type KnapsackResult<T> = Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = KnapsackError::InvalidProblem("capacity must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "Invalid problem: capacity must be non-negative"
        );

        let err = KnapsackError::InfeasibleWarmStart {
            weight: 12,
            capacity: 10,
        };
        assert_eq!(
            err.to_string(),
            "Infeasible warm start: weight 12 exceeds capacity 10"
        );
    }
}
