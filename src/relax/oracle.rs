//! Greedy fractional-knapsack bound.

use crate::model::{Fixing, PartialAssignment, Problem};

/// Outcome of relaxing one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxation {
    /// Upper bound on the objective of any completion (`-inf` if infeasible).
    pub bound: f64,
    /// The item taken fractionally, if any. This is the branching variable.
    pub split: Option<usize>,
    /// Relaxed value of every variable, in `[0, 1]`.
    pub values: Vec<f64>,
    /// False when fixed-one items alone exceed the capacity.
    pub feasible: bool,
}

impl Relaxation {
    /// Whether the relaxed optimum is already a 0/1 assignment.
    pub fn is_integral(&self) -> bool {
        self.feasible && self.split.is_none()
    }

    /// Rounds the relaxed values to a 0/1 assignment.
    ///
    /// Only meaningful when [`Relaxation::is_integral`] holds.
    pub fn to_assignment(&self) -> Vec<bool> {
        self.values.iter().map(|&v| v >= 0.5).collect()
    }
}

/// Computes relaxation bounds for nodes of a fixed problem.
///
/// The ratio order is computed once at construction; each call to
/// [`BoundOracle::bound`] is a single linear scan.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{PartialAssignment, Problem};
/// use u_knapsack::relax::BoundOracle;
///
/// let problem = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
/// let oracle = BoundOracle::new(&problem);
/// let root = oracle.bound(&PartialAssignment::root(problem.len()));
///
/// // Items 0 and 1 fit, one sixth of item 2 fills the rest.
/// assert!((root.bound - (16.0 + 8.0 / 6.0)).abs() < 1e-9);
/// assert_eq!(root.split, Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct BoundOracle<'a> {
    problem: &'a Problem,
    order: Vec<usize>,
}

impl<'a> BoundOracle<'a> {
    /// Creates an oracle for `problem`.
    pub fn new(problem: &'a Problem) -> Self {
        let vars = problem.variables();
        let mut order: Vec<usize> = (0..vars.len()).collect();
        // Stable: equal ratios keep index order.
        order.sort_by(|&a, &b| vars[b].ratio().total_cmp(&vars[a].ratio()));
        Self { problem, order }
    }

    /// Variable indices by decreasing value/weight ratio.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Relaxes `node`.
    pub fn bound(&self, node: &PartialAssignment) -> Relaxation {
        let vars = self.problem.variables();
        let mut values: Vec<f64> = (0..node.len())
            .map(|i| match node.fixing(i) {
                Fixing::One => 1.0,
                _ => 0.0,
            })
            .collect();

        let slack = i128::from(self.problem.capacity()) - node.committed_weight();
        if slack < 0 {
            return Relaxation {
                bound: f64::NEG_INFINITY,
                split: None,
                values,
                feasible: false,
            };
        }

        // 0 <= slack <= capacity, so this is lossless.
        let mut remaining = slack as i64;
        let mut bound = node.committed_value();
        let mut split = None;

        for &i in &self.order {
            if !node.is_free(i) {
                continue;
            }
            let var = &vars[i];

            if var.weight == 0 {
                if var.value >= 0.0 {
                    values[i] = 1.0;
                    bound += var.value;
                }
                continue;
            }
            // Everything from here on has ratio <= 0.
            if var.value <= 0.0 {
                break;
            }

            if var.weight <= remaining {
                values[i] = 1.0;
                bound += var.value;
                remaining -= var.weight;
            } else {
                if remaining > 0 {
                    let fraction = remaining as f64 / var.weight as f64;
                    values[i] = fraction;
                    bound += var.value * fraction;
                    split = Some(i);
                }
                break;
            }
        }

        Relaxation {
            bound,
            split,
            values,
            feasible: true,
        }
    }
}
