//! Knapsack problem model.
//!
//! # Key Components
//!
//! - **Variables**: [`Variable`] — a binary item with an objective
//!   coefficient and a non-negative integer weight
//! - **Problem**: [`Problem`] — immutable container for variables and the
//!   single capacity constraint, objective sense is maximize
//! - **Nodes**: [`PartialAssignment`] — variables fixed to 0/1 or free,
//!   the unit of work of the branch-and-bound frontier
//! - **Solution**: [`Solution`] — a complete 0/1 assignment tagged with its
//!   objective, weight, and feasibility
//!
//! # Design
//!
//! [`Problem::build`] is the only construction path, so every `Problem`
//! in circulation satisfies the model invariants. Problems are read-only
//! once built; solvers borrow them.

mod assignment;
mod problem;
mod solution;

pub use assignment::{Fixing, PartialAssignment};
pub use problem::{Problem, Variable};
pub use solution::Solution;
