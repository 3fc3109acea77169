//! Single entry point: solve a problem, optionally from a warm start.

use crate::bnb::{BnbConfig, BnbResult, BnbRunner};
use crate::error::KnapsackResult;
use crate::model::{Problem, Solution};
use crate::warm_start::{self, SeedOutcome, WarmStartReport};

/// Result of [`solve`] / [`solve_with`].
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Search result; `result.solution` is the answer.
    pub result: BnbResult,
    /// Verdict on the warm start, if one was supplied.
    pub warm_start: Option<WarmStartReport>,
}

impl SolveOutcome {
    /// Best solution found.
    pub fn solution(&self) -> &Solution {
        &self.result.solution
    }

    /// Objective of the best solution.
    pub fn objective(&self) -> f64 {
        self.result.solution.objective
    }
}

/// Solves `problem` with the default configuration.
///
/// A rejected warm start (infeasible or wrong dimension) is not an error:
/// the search runs from an empty incumbent and the rejection is reported
/// in [`SolveOutcome::warm_start`].
///
/// # Examples
///
/// ```
/// use u_knapsack::model::Problem;
/// use u_knapsack::solve;
///
/// let first = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
/// let second = first.clone().with_name("knapsack2");
///
/// let cold = solve(&first, None);
/// let warm = solve(&second, Some(cold.solution()));
///
/// let report = warm.warm_start.unwrap();
/// assert!(report.feasible);
/// assert!(report.stored);
/// assert_eq!(warm.objective(), cold.objective());
/// ```
pub fn solve(problem: &Problem, warm_start: Option<&Solution>) -> SolveOutcome {
    let mut runner = BnbRunner::with_default_config(problem);
    let report = warm_start.map(|candidate| integrate(&mut runner, candidate));
    SolveOutcome {
        result: runner.run(),
        warm_start: report,
    }
}

/// Solves `problem` with an explicit configuration.
///
/// Fails only if `config` is invalid.
pub fn solve_with(
    problem: &Problem,
    warm_start: Option<&Solution>,
    config: &BnbConfig,
) -> KnapsackResult<SolveOutcome> {
    let mut runner = BnbRunner::new(problem, config.clone())?;
    let report = warm_start.map(|candidate| integrate(&mut runner, candidate));
    Ok(SolveOutcome {
        result: runner.run(),
        warm_start: report,
    })
}

fn integrate(runner: &mut BnbRunner<'_>, candidate: &Solution) -> WarmStartReport {
    let name = runner.problem().name().to_owned();
    let verdict = match warm_start::validate(runner.problem(), candidate) {
        Ok(verdict) => verdict,
        Err(err) => {
            log::warn!("{name}: warm start ignored: {err}");
            return WarmStartReport {
                feasible: false,
                stored: false,
                objective: None,
            };
        }
    };

    let stored = match warm_start::seed_validated(runner, candidate, &verdict) {
        Ok(outcome) => outcome == SeedOutcome::Installed,
        Err(err) => {
            log::warn!("{name}: warm start ignored: {err}");
            false
        }
    };

    WarmStartReport {
        feasible: verdict.feasible,
        stored,
        objective: Some(verdict.objective),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::NodeSelection;

    fn scenario() -> Problem {
        Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap()
    }

    #[test]
    fn test_cold_solve() {
        let outcome = solve(&scenario(), None);
        assert!(outcome.warm_start.is_none());
        assert_eq!(outcome.objective(), 16.0);
        assert_eq!(outcome.solution().weight, 9);
    }

    #[test]
    fn test_warm_start_accepted() {
        let problem = scenario();
        let cold = solve(&problem, None);
        let warm = solve(&problem, Some(cold.solution()));

        let report = warm.warm_start.unwrap();
        assert!(report.feasible);
        assert!(report.stored);
        assert_eq!(report.objective, Some(16.0));
        assert_eq!(warm.objective(), 16.0);
        // Optimal seed: search never finds anything better.
        assert_eq!(warm.result.stats.incumbent_updates, 0);
        assert!(warm.result.stats.nodes_explored <= cold.result.stats.nodes_explored);
    }

    #[test]
    fn test_infeasible_warm_start_ignored() {
        let problem = scenario();
        let bad = problem.solution(vec![true, true, true]);
        let outcome = solve(&problem, Some(&bad));

        let report = outcome.warm_start.unwrap();
        assert!(!report.feasible);
        assert!(!report.stored);
        assert_eq!(report.objective, Some(24.0));
        assert_eq!(outcome.objective(), solve(&problem, None).objective());
    }

    #[test]
    fn test_wrong_dimension_warm_start_ignored() {
        let problem = scenario();
        let other = Problem::build(vec![1.0, 1.0], vec![1, 1], 2).unwrap();
        let outcome = solve(&problem, Some(&other.solution(vec![true, true])));

        let report = outcome.warm_start.unwrap();
        assert!(!report.feasible);
        assert!(!report.stored);
        assert!(report.objective.is_none());
        assert_eq!(outcome.objective(), 16.0);
    }

    #[test]
    fn test_warm_start_across_capacities() {
        // Optimum of a roomier instance does not fit the tighter one.
        let roomy = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 15).unwrap();
        let tight = scenario();
        let cold = solve(&roomy, None);
        assert_eq!(cold.objective(), 24.0);

        let warm = solve(&tight, Some(cold.solution()));
        assert!(!warm.warm_start.unwrap().feasible);
        assert_eq!(warm.objective(), 16.0);
    }

    #[test]
    fn test_overflowing_warm_start_reported_infeasible() {
        let half = i64::MAX / 2;
        let problem = Problem::build(vec![5.0, 5.0], vec![half + 1, half + 1], i64::MAX).unwrap();
        let outcome = solve(&problem, Some(&problem.solution(vec![true, true])));

        let report = outcome.warm_start.unwrap();
        assert!(!report.feasible);
        assert!(!report.stored);
        assert_eq!(report.objective, Some(10.0));
        assert_eq!(outcome.objective(), 5.0);
        assert!(outcome.solution().feasible);
    }

    #[test]
    fn test_solve_with_config() {
        let config = BnbConfig::default().with_node_selection(NodeSelection::BestBound);
        let outcome = solve_with(&scenario(), None, &config).unwrap();
        assert_eq!(outcome.objective(), 16.0);
    }

    #[test]
    fn test_solve_with_invalid_config() {
        let config = BnbConfig::default().with_node_limit(0);
        assert!(solve_with(&scenario(), None, &config).is_err());
    }
}
