//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Optionally fix items heavier than the capacity to zero (presolve)
//! 2. Push the root node onto the frontier
//! 3. While the frontier is not empty:
//!    a. Pop a node and relax it with the [`BoundOracle`]
//!    b. Prune if infeasible or if the bound cannot beat the incumbent
//!    c. If the relaxation is integral, offer it to the incumbent
//!    d. Otherwise branch on the split item (fixed to 0, fixed to 1)
//! 4. Return the incumbent, or the all-zero assignment if there is none
//!
//! Limits and cancellation are checked at the top of each expand step, so
//! an interrupted run still reports the best solution found so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use super::config::BnbConfig;
use super::frontier::Frontier;
use super::incumbent::Incumbent;
use crate::error::{KnapsackError, KnapsackResult};
use crate::model::{PartialAssignment, Problem, Solution};
use crate::relax::BoundOracle;

/// How a branch-and-bound run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BnbStatus {
    /// Frontier exhausted; the returned solution is optimal.
    Optimal,
    /// Node limit reached, best solution so far returned.
    NodeLimit,
    /// Time limit reached, best solution so far returned.
    TimeLimit,
    /// Cancelled externally, best solution so far returned.
    Cancelled,
}

impl BnbStatus {
    /// Returns true if optimality was proven.
    pub fn is_optimal(&self) -> bool {
        matches!(self, BnbStatus::Optimal)
    }
}

/// Search effort counters.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbStats {
    /// Nodes popped from the frontier and relaxed.
    pub nodes_explored: u64,
    /// Nodes discarded because their bound could not beat the incumbent.
    pub nodes_pruned: u64,
    /// Nodes whose fixed items alone exceed the capacity.
    pub nodes_infeasible: u64,
    /// Nodes whose relaxation was integral.
    pub integral_leaves: u64,
    /// Nodes split into two children.
    pub nodes_branched: u64,
    /// Incumbent replacements during search (warm starts excluded).
    pub incumbent_updates: u64,
    /// Items fixed to zero by presolve.
    pub presolve_fixed: u64,
    /// Deepest node expanded.
    pub max_depth: usize,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: u64,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct BnbResult {
    /// Best feasible solution (never worse than the all-zero assignment).
    pub solution: Solution,
    /// Termination status.
    pub status: BnbStatus,
    /// Relaxation bound at the root (after presolve).
    pub root_bound: f64,
    /// Search effort.
    pub stats: BnbStats,
}

/// Branch-and-bound engine for one problem.
///
/// The incumbent can be seeded before [`BnbRunner::run`] through
/// [`crate::warm_start::seed`].
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::{BnbConfig, BnbRunner};
/// use u_knapsack::model::Problem;
///
/// let problem = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
/// let result = BnbRunner::new(&problem, BnbConfig::default()).unwrap().run();
///
/// assert!(result.status.is_optimal());
/// assert_eq!(result.solution.objective, 16.0);
/// assert_eq!(result.solution.selected().collect::<Vec<_>>(), vec![0, 1]);
/// ```
pub struct BnbRunner<'a> {
    problem: &'a Problem,
    config: BnbConfig,
    oracle: BoundOracle<'a>,
    incumbent: Incumbent,
}

impl<'a> BnbRunner<'a> {
    /// Creates an engine with an empty incumbent.
    ///
    /// Fails with [`KnapsackError::InvalidConfig`] if `config` does not validate.
    pub fn new(problem: &'a Problem, config: BnbConfig) -> KnapsackResult<Self> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;
        Ok(Self::build(problem, config))
    }

    /// Creates an engine with [`BnbConfig::default`], which always validates.
    pub fn with_default_config(problem: &'a Problem) -> Self {
        Self::build(problem, BnbConfig::default())
    }

    fn build(problem: &'a Problem, config: BnbConfig) -> Self {
        Self {
            problem,
            config,
            oracle: BoundOracle::new(problem),
            incumbent: Incumbent::new(),
        }
    }

    /// The problem being solved.
    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    /// Current incumbent.
    pub fn incumbent(&self) -> &Incumbent {
        &self.incumbent
    }

    pub(crate) fn incumbent_mut(&mut self) -> &mut Incumbent {
        &mut self.incumbent
    }

    /// Runs the search to completion (or until a configured limit).
    pub fn run(self) -> BnbResult {
        self.run_with_cancel(None)
    }

    /// Runs the search with an optional cancellation token.
    pub fn run_with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> BnbResult {
        let start = Instant::now();
        let mut stats = BnbStats::default();
        let seeded_updates = self.incumbent.updates();

        let root = self.presolve(&mut stats);
        let root_bound = self.oracle.bound(&root).bound;

        let mut frontier = Frontier::new(self.config.node_selection);
        frontier.push(root);

        let status = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break BnbStatus::Cancelled;
                }
            }
            if let Some(limit) = self.config.time_limit_ms {
                if start.elapsed().as_millis() as u64 >= limit {
                    break BnbStatus::TimeLimit;
                }
            }
            if let Some(limit) = self.config.node_limit {
                if stats.nodes_explored >= limit {
                    break BnbStatus::NodeLimit;
                }
            }

            let Some(node) = frontier.pop() else {
                break BnbStatus::Optimal;
            };
            stats.nodes_explored += 1;
            stats.max_depth = stats.max_depth.max(node.depth());

            self.expand(node, &mut frontier, &mut stats);

            if self.config.verbose && stats.nodes_explored % self.config.log_freq == 0 {
                log::info!(
                    "{}: nodes {} ({} open) | incumbent {:.6} | depth {} | {:.1}s",
                    self.problem.name(),
                    stats.nodes_explored,
                    frontier.len(),
                    self.incumbent.objective(),
                    stats.max_depth,
                    start.elapsed().as_secs_f64(),
                );
            }
        };

        stats.incumbent_updates = self.incumbent.updates() - seeded_updates;
        stats.solve_time_ms = start.elapsed().as_millis() as u64;

        let floor = self.problem.empty_solution();
        let solution = match self.incumbent.into_solution() {
            Some(best) if best.objective >= floor.objective => best,
            _ => floor,
        };

        log::info!(
            "{}: {:?} objective={} weight={} nodes={} pruned={} time={}ms",
            self.problem.name(),
            status,
            solution.objective,
            solution.weight,
            stats.nodes_explored,
            stats.nodes_pruned,
            stats.solve_time_ms,
        );

        BnbResult {
            solution,
            status,
            root_bound,
            stats,
        }
    }

    /// Builds the root node, fixing items that can never fit.
    fn presolve(&self, stats: &mut BnbStats) -> PartialAssignment {
        let mut root = PartialAssignment::root(self.problem.len());
        if !self.config.presolve {
            return root;
        }
        for var in self.problem.variables() {
            if var.weight > self.problem.capacity() {
                root.fix(var, false);
                stats.presolve_fixed += 1;
            }
        }
        if stats.presolve_fixed > 0 {
            log::debug!(
                "{}: presolve fixed {} oversized items to zero",
                self.problem.name(),
                stats.presolve_fixed
            );
        }
        root
    }

    /// One expand step: prune, accept, or branch.
    fn expand(&mut self, node: PartialAssignment, frontier: &mut Frontier, stats: &mut BnbStats) {
        let relax = self.oracle.bound(&node);

        if !relax.feasible {
            stats.nodes_infeasible += 1;
            log::trace!("depth {}: infeasible", node.depth());
            return;
        }
        if relax.bound <= self.incumbent.objective() {
            stats.nodes_pruned += 1;
            log::trace!(
                "depth {}: pruned, bound {} <= incumbent {}",
                node.depth(),
                relax.bound,
                self.incumbent.objective()
            );
            return;
        }

        let Some(split) = relax.split else {
            stats.integral_leaves += 1;
            let candidate = self.problem.solution(relax.to_assignment());
            if candidate.feasible && self.incumbent.try_install(&candidate) {
                log::debug!(
                    "{}: new incumbent objective={} weight={} at depth {}",
                    self.problem.name(),
                    candidate.objective,
                    candidate.weight,
                    node.depth()
                );
            }
            return;
        };

        stats.nodes_branched += 1;
        let var = &self.problem.variables()[split];
        // Pushed last so depth-first dives into the greedy side first.
        frontier.push(node.child(var, false, relax.bound));
        frontier.push(node.child(var, true, relax.bound));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::NodeSelection;

    fn solve(problem: &Problem, config: BnbConfig) -> BnbResult {
        BnbRunner::new(problem, config).unwrap().run()
    }

    #[test]
    fn test_three_item_scenario() {
        let problem = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
        let result = solve(&problem, BnbConfig::default());

        assert_eq!(result.status, BnbStatus::Optimal);
        assert_eq!(result.solution.objective, 16.0);
        assert_eq!(result.solution.weight, 9);
        assert_eq!(result.solution.values, vec![true, true, false]);
        assert!(result.solution.feasible);
        assert!(result.root_bound >= 16.0);
        assert!(result.stats.nodes_branched >= 1);
    }

    #[test]
    fn test_empty_problem() {
        let problem = Problem::build(vec![], vec![], 0).unwrap();
        let result = solve(&problem, BnbConfig::default());

        assert_eq!(result.status, BnbStatus::Optimal);
        assert_eq!(result.solution.objective, 0.0);
        assert_eq!(result.solution.weight, 0);
        assert!(result.solution.feasible);
        assert!(result.solution.is_empty());
    }

    #[test]
    fn test_single_item_too_heavy() {
        let problem = Problem::build(vec![7.0], vec![11], 10).unwrap();
        for presolve in [true, false] {
            let result = solve(&problem, BnbConfig::default().with_presolve(presolve));
            assert_eq!(result.status, BnbStatus::Optimal);
            assert_eq!(result.solution.objective, 0.0);
            assert_eq!(result.solution.values, vec![false]);
            assert!(result.solution.feasible);
        }
    }

    #[test]
    fn test_presolve_counts_fixed_items() {
        let problem = Problem::build(vec![5.0, 3.0, 4.0], vec![20, 2, 15], 10).unwrap();
        let result = solve(&problem, BnbConfig::default());
        assert_eq!(result.stats.presolve_fixed, 2);
        assert_eq!(result.solution.objective, 3.0);
        assert_eq!(result.root_bound, 3.0);
    }

    #[test]
    fn test_weights_near_i64_max() {
        let half = i64::MAX / 2;
        let problem = Problem::build(vec![5.0, 5.0], vec![half + 1, half + 1], i64::MAX).unwrap();
        for selection in [NodeSelection::DepthFirst, NodeSelection::BestBound] {
            let result = solve(&problem, BnbConfig::default().with_node_selection(selection));

            assert!(result.status.is_optimal());
            assert!(result.solution.feasible);
            assert_eq!(result.solution.objective, 5.0);
            assert_eq!(result.solution.weight, half + 1);
            assert_eq!(result.solution.selected().count(), 1);
            assert!(result.stats.nodes_infeasible >= 1);
        }
    }

    #[test]
    fn test_default_config_constructor() {
        let problem = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
        let result = BnbRunner::with_default_config(&problem).run();
        assert_eq!(result.status, BnbStatus::Optimal);
        assert_eq!(result.solution.objective, 16.0);
    }

    #[test]
    fn test_zero_capacity() {
        let problem = Problem::build(vec![4.0, 2.0, 1.0], vec![1, 0, 3], 0).unwrap();
        let result = solve(&problem, BnbConfig::default());
        assert_eq!(result.solution.objective, 2.0);
        assert_eq!(result.solution.values, vec![false, true, false]);
    }

    #[test]
    fn test_negative_values_never_packed() {
        let problem = Problem::build(vec![-3.0, -1.0], vec![1, 1], 5).unwrap();
        let result = solve(&problem, BnbConfig::default());
        assert_eq!(result.solution.objective, 0.0);
        assert_eq!(result.solution.values, vec![false, false]);
    }

    #[test]
    fn test_best_bound_matches_depth_first() {
        let problem = Problem::build(
            vec![12.0, 11.0, 9.0, 7.0, 6.0, 5.0, 3.0, 2.0],
            vec![7, 6, 5, 4, 4, 3, 2, 1],
            17,
        )
        .unwrap();
        let dfs = solve(&problem, BnbConfig::default());
        let best = solve(
            &problem,
            BnbConfig::default().with_node_selection(NodeSelection::BestBound),
        );
        assert_eq!(dfs.solution.objective, best.solution.objective);
        assert!(dfs.status.is_optimal());
        assert!(best.status.is_optimal());
    }

    #[test]
    fn test_node_limit_returns_feasible() {
        let problem = Problem::build(
            vec![12.0, 11.0, 9.0, 7.0, 6.0, 5.0, 3.0, 2.0],
            vec![7, 6, 5, 4, 4, 3, 2, 1],
            17,
        )
        .unwrap();
        let result = solve(&problem, BnbConfig::default().with_node_limit(1));
        assert_eq!(result.status, BnbStatus::NodeLimit);
        assert_eq!(result.stats.nodes_explored, 1);
        assert!(result.solution.feasible);
        assert!(result.solution.objective >= 0.0);
    }

    #[test]
    fn test_time_limit_zero() {
        let problem = Problem::build(vec![1.0, 2.0], vec![1, 1], 1).unwrap();
        let result = solve(&problem, BnbConfig::default().with_time_limit_ms(0));
        assert_eq!(result.status, BnbStatus::TimeLimit);
        assert_eq!(result.solution.objective, 0.0);
        assert!(result.solution.feasible);
    }

    #[test]
    fn test_cancelled_before_start() {
        let problem = Problem::build(vec![1.0, 2.0], vec![1, 1], 1).unwrap();
        let cancel = Arc::new(AtomicBool::new(true));
        let result = BnbRunner::new(&problem, BnbConfig::default())
            .unwrap()
            .run_with_cancel(Some(cancel));

        assert_eq!(result.status, BnbStatus::Cancelled);
        assert_eq!(result.stats.nodes_explored, 0);
        assert_eq!(result.solution, problem.empty_solution());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = Problem::build(vec![1.0], vec![1], 1).unwrap();
        let err = BnbRunner::new(&problem, BnbConfig::default().with_node_limit(0))
            .err()
            .unwrap();
        assert!(matches!(err, KnapsackError::InvalidConfig(_)));
    }

    #[test]
    fn test_idempotent() {
        let problem = Problem::build(
            vec![3.0, 4.0, 5.0, 6.0, 7.0],
            vec![2, 3, 4, 5, 6],
            9,
        )
        .unwrap();
        let a = solve(&problem, BnbConfig::default());
        let b = solve(&problem, BnbConfig::default());
        assert_eq!(a.solution.objective, b.solution.objective);
        assert_eq!(a.solution.objective, 12.0);
    }
}
