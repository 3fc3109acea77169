//! Solution value type.

use std::cmp::Ordering;

/// A complete 0/1 assignment with derived objective and weight.
///
/// The derived fields are public and therefore not trusted: anything that
/// decides on feasibility (the warm-start integrator, the search engine)
/// recomputes them from `values` via [`Problem::solution`](super::Problem::solution).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Packed flag per variable, in variable index order.
    pub values: Vec<bool>,
    /// Sum of value over packed items.
    pub objective: f64,
    /// Sum of weight over packed items.
    pub weight: i64,
    /// Whether `weight <= capacity` for the problem that built this solution.
    pub feasible: bool,
}

impl Solution {
    /// Number of variables covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the assignment covers no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Indices of packed items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, packed)| **packed)
            .map(|(i, _)| i)
    }

    /// Value-object ordering: higher objective is greater, ties go to the
    /// lower weight.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.objective
            .total_cmp(&other.objective)
            .then_with(|| other.weight.cmp(&self.weight))
    }

    /// Whether `self` ranks strictly above `other` under [`Solution::compare`].
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }
}
