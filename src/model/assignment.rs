//! Partial assignments (search-tree nodes).

use super::problem::Variable;

/// State of one variable in a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixing {
    /// Not yet decided.
    Free,
    /// Fixed out of the knapsack.
    Zero,
    /// Fixed into the knapsack.
    One,
}

/// A node of the branch-and-bound tree: some variables fixed, the rest free.
///
/// Keeps the committed weight and value of fixed-one variables so the
/// relaxation does not have to rescan them. The weight is summed in `i128`,
/// so it stays exact for any number of `i64` weights that could be packed.
#[derive(Debug, Clone)]
pub struct PartialAssignment {
    fixings: Vec<Fixing>,
    committed_weight: i128,
    committed_value: f64,
    depth: usize,
    parent_bound: f64,
}

impl PartialAssignment {
    /// Root node over `n` variables: everything free.
    pub fn root(n: usize) -> Self {
        Self {
            fixings: vec![Fixing::Free; n],
            committed_weight: 0,
            committed_value: 0.0,
            depth: 0,
            parent_bound: f64::INFINITY,
        }
    }

    /// Fixes `var` in place. Used for root-level bound tightening.
    ///
    /// Re-fixing an already fixed variable is a no-op.
    pub fn fix(&mut self, var: &Variable, packed: bool) {
        if self.fixings[var.index] != Fixing::Free {
            return;
        }
        if packed {
            self.fixings[var.index] = Fixing::One;
            self.committed_weight += i128::from(var.weight);
            self.committed_value += var.value;
        } else {
            self.fixings[var.index] = Fixing::Zero;
        }
    }

    /// Child node with `var` fixed, remembering the bound of `self`.
    pub fn child(&self, var: &Variable, packed: bool, bound: f64) -> Self {
        let mut child = self.clone();
        child.fix(var, packed);
        child.depth = self.depth + 1;
        child.parent_bound = bound;
        child
    }

    /// State of variable `i`.
    pub fn fixing(&self, i: usize) -> Fixing {
        self.fixings[i]
    }

    /// Whether variable `i` is still free.
    pub fn is_free(&self, i: usize) -> bool {
        self.fixings[i] == Fixing::Free
    }

    /// Number of variables covered.
    pub fn len(&self) -> usize {
        self.fixings.len()
    }

    /// Whether the node covers no variables.
    pub fn is_empty(&self) -> bool {
        self.fixings.is_empty()
    }

    /// Number of free variables.
    pub fn free_count(&self) -> usize {
        self.fixings.iter().filter(|f| **f == Fixing::Free).count()
    }

    /// Weight of fixed-one variables.
    pub fn committed_weight(&self) -> i128 {
        self.committed_weight
    }

    /// Objective of fixed-one variables.
    pub fn committed_value(&self) -> f64 {
        self.committed_value
    }

    /// Depth in the search tree (0 for the root).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Relaxation bound of the parent (`+inf` at the root).
    pub fn parent_bound(&self) -> f64 {
        self.parent_bound
    }
}
