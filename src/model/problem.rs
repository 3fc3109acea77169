//! Knapsack problem definition.

use super::solution::Solution;
use crate::error::{KnapsackError, KnapsackResult};

/// A binary decision variable (an item that is either packed or not).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Position in the problem; also the branching and reporting order.
    pub index: usize,
    /// Objective coefficient (contribution when the item is packed).
    pub value: f64,
    /// Weight consumed when the item is packed.
    pub weight: i64,
}

impl Variable {
    /// Value per unit of weight. Zero-weight items have an infinite ratio
    /// unless their value is negative.
    pub fn ratio(&self) -> f64 {
        if self.weight == 0 {
            if self.value < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            self.value / self.weight as f64
        }
    }
}

/// A 0/1 knapsack problem: maximize `sum(value_i * x_i)` subject to
/// `sum(weight_i * x_i) <= capacity`, `x_i in {0, 1}`.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::Problem;
///
/// let problem = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
/// assert_eq!(problem.len(), 3);
///
/// let (objective, weight) = problem.evaluate(&[true, true, false]);
/// assert_eq!(objective, 16.0);
/// assert_eq!(weight, 9);
/// assert!(problem.is_feasible(&[true, true, false]));
/// assert!(!problem.is_feasible(&[true, false, true]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    name: String,
    variables: Vec<Variable>,
    capacity: i64,
}

impl Problem {
    /// Builds a problem from parallel value and weight arrays.
    ///
    /// Fails with [`KnapsackError::InvalidProblem`] if the arrays differ in
    /// length, the capacity is negative, a weight is negative, or a value
    /// is not finite.
    pub fn build(values: Vec<f64>, weights: Vec<i64>, capacity: i64) -> KnapsackResult<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::InvalidProblem(format!(
                "values and weights length mismatch: {} != {}",
                values.len(),
                weights.len()
            )));
        }
        if capacity < 0 {
            return Err(KnapsackError::InvalidProblem(format!(
                "capacity must be non-negative, got {capacity}"
            )));
        }

        let mut variables = Vec::with_capacity(values.len());
        for (index, (value, weight)) in values.into_iter().zip(weights).enumerate() {
            if weight < 0 {
                return Err(KnapsackError::InvalidProblem(format!(
                    "weight of item {index} must be non-negative, got {weight}"
                )));
            }
            if !value.is_finite() {
                return Err(KnapsackError::InvalidProblem(format!(
                    "value of item {index} must be finite, got {value}"
                )));
            }
            variables.push(Variable {
                index,
                value,
                weight,
            });
        }

        Ok(Self {
            name: String::from("knapsack"),
            variables,
            capacity,
        })
    }

    /// Sets the problem name (used in log output only).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Problem name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the problem has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Variables in index order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Objective coefficient of variable `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn value(&self, i: usize) -> f64 {
        self.variables[i].value
    }

    /// Weight of variable `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn weight(&self, i: usize) -> i64 {
        self.variables[i].weight
    }

    /// Returns `(objective, weight)` of an assignment.
    ///
    /// Entries beyond the number of variables are ignored, missing entries
    /// count as 0. A weight sum past `i64::MAX` is reported as `i64::MAX`;
    /// use [`Problem::fits`] for the capacity check.
    pub fn evaluate(&self, assignment: &[bool]) -> (f64, i64) {
        let objective = self
            .packed(assignment)
            .fold(0.0, |objective, var| objective + var.value);
        (objective, self.packed_weight(assignment).unwrap_or(i64::MAX))
    }

    /// Whether the packed weight of `assignment` is within the capacity.
    ///
    /// Unlike [`Problem::is_feasible`] this does not check the length.
    pub fn fits(&self, assignment: &[bool]) -> bool {
        self.packed_weight(assignment)
            .is_some_and(|weight| weight <= self.capacity)
    }

    /// Whether a complete assignment respects the capacity.
    pub fn is_feasible(&self, assignment: &[bool]) -> bool {
        assignment.len() == self.len() && self.fits(assignment)
    }

    /// Builds a [`Solution`] whose derived fields are computed against this problem.
    pub fn solution(&self, values: Vec<bool>) -> Solution {
        let (objective, weight) = self.evaluate(&values);
        let feasible = self.is_feasible(&values);
        Solution {
            values,
            objective,
            weight,
            feasible,
        }
    }

    /// The all-zero assignment. Always feasible with objective 0.
    pub fn empty_solution(&self) -> Solution {
        self.solution(vec![false; self.len()])
    }

    fn packed<'s>(&'s self, assignment: &'s [bool]) -> impl Iterator<Item = &'s Variable> + 's {
        self.variables
            .iter()
            .zip(assignment)
            .filter(|(_, packed)| **packed)
            .map(|(var, _)| var)
    }

    /// Exact packed weight, `None` if it overflows `i64` (and therefore
    /// exceeds any capacity).
    fn packed_weight(&self, assignment: &[bool]) -> Option<i64> {
        self.packed(assignment)
            .try_fold(0i64, |weight, var| weight.checked_add(var.weight))
    }
}
