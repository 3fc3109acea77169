//! Branch-and-Bound (B&B).
//!
//! Exact search over partial assignments of a knapsack problem. Each node
//! is relaxed with the greedy fractional bound from [`crate::relax`];
//! nodes whose bound cannot beat the incumbent are pruned, integral
//! relaxations become candidate solutions, and everything else is split on
//! the one item the relaxation took fractionally.
//!
//! Node selection changes only the effort, never the returned objective.
//!
//! # References
//!
//! - Land, A. H. & Doig, A. G. (1960). "An Automatic Method of Solving
//!   Discrete Programming Problems", *Econometrica* 28(3), 497-520.
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2.

mod config;
mod frontier;
mod incumbent;
mod runner;

pub use config::{BnbConfig, NodeSelection};
pub use incumbent::Incumbent;
pub use runner::{BnbResult, BnbRunner, BnbStats, BnbStatus};
