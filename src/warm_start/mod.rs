//! Warm-start integration.
//!
//! A warm start is a candidate solution supplied before search begins,
//! typically the optimum of a related instance. It is checked against the
//! target problem from scratch (the candidate's own objective and weight
//! are never trusted) and, if feasible and improving, becomes the initial
//! incumbent of a [`BnbRunner`](crate::bnb::BnbRunner).
//!
//! Seeding changes only how much of the tree is pruned; the final
//! objective of an exact run is the same with or without it.

mod integrator;

pub(crate) use integrator::seed_validated;
pub use integrator::{seed, validate, SeedOutcome, Validation, WarmStartReport};
