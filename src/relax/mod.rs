//! LP relaxation bound for knapsack nodes.
//!
//! Relaxing `x_i in {0, 1}` to `x_i in [0, 1]` turns the knapsack into a
//! linear program whose optimum has a closed form: pack free items in
//! decreasing value/weight order and split the first one that does not
//! fit. The result is an upper bound on every integral completion of the
//! node, which is what licenses pruning in the search.
//!
//! # References
//!
//! Dantzig, G. B. (1957). "Discrete-Variable Extremum Problems",
//! *Operations Research* 5(2), 266-288.

mod oracle;

pub use oracle::{BoundOracle, Relaxation};
