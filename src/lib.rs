//! Exact 0/1 knapsack solver with warm starts.
//!
//! Provides a self-contained branch-and-bound core for binary knapsack
//! problems (one capacity constraint, linear objective, maximize):
//!
//! - **Model**: immutable [`model::Problem`] built through a validating
//!   constructor, plus [`model::Solution`] value objects.
//! - **Relaxation**: [`relax::BoundOracle`] computes the LP relaxation
//!   bound of a partial assignment with the greedy fractional-knapsack
//!   closed form and reports the item to branch on.
//! - **Branch-and-Bound (B&B)**: [`bnb::BnbRunner`] explores partial
//!   assignments depth-first or best-bound, pruning against the incumbent.
//! - **Warm starts**: [`warm_start`] validates an externally supplied
//!   solution against a problem and seeds the incumbent with it.
//! - **Instances**: [`instance`] draws random problems for demos,
//!   benchmarks, and tests.
//!
//! # Example
//!
//! ```
//! use u_knapsack::model::Problem;
//! use u_knapsack::solve;
//!
//! let problem = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
//! let outcome = solve(&problem, None);
//! assert_eq!(outcome.objective(), 16.0);
//! assert_eq!(outcome.solution().weight, 9);
//! ```

pub mod bnb;
pub mod error;
pub mod instance;
pub mod model;
pub mod relax;
pub mod solve;
pub mod warm_start;

pub use error::{KnapsackError, KnapsackResult};
pub use solve::{solve, solve_with, SolveOutcome};
