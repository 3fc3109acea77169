//! Validate-then-seed contract for warm starts.

use crate::bnb::BnbRunner;
use crate::error::{KnapsackError, KnapsackResult};
use crate::model::{Problem, Solution};

/// Feasibility verdict for a candidate, recomputed against a problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validation {
    /// Whether the recomputed weight fits the capacity.
    pub feasible: bool,
    /// Recomputed objective.
    pub objective: f64,
    /// Recomputed weight.
    pub weight: i64,
}

/// What seeding did to the incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The candidate became the incumbent.
    Installed,
    /// Feasible, but the incumbent was at least as good; nothing changed.
    NotImproving,
}

/// Summary of a warm start, as reported to `solve` callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmStartReport {
    /// Whether the candidate satisfied the capacity of the target problem.
    pub feasible: bool,
    /// Whether the candidate was stored as the initial incumbent.
    pub stored: bool,
    /// Recomputed objective, if the candidate had the right dimension.
    pub objective: Option<f64>,
}

/// Recomputes objective and weight of `candidate` against `problem`.
///
/// Fails with [`KnapsackError::WarmStartDimension`] if the candidate does
/// not assign exactly the problem's variables.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Problem, Solution};
/// use u_knapsack::warm_start::validate;
///
/// let problem = Problem::build(vec![10.0, 6.0, 8.0], vec![5, 4, 6], 10).unwrap();
/// // Stale derived fields are ignored.
/// let candidate = Solution { values: vec![true, false, true], objective: 0.0, weight: 0, feasible: true };
///
/// let v = validate(&problem, &candidate).unwrap();
/// assert!(!v.feasible);
/// assert_eq!(v.weight, 11);
/// assert_eq!(v.objective, 18.0);
/// ```
pub fn validate(problem: &Problem, candidate: &Solution) -> KnapsackResult<Validation> {
    if candidate.len() != problem.len() {
        return Err(KnapsackError::WarmStartDimension {
            expected: problem.len(),
            found: candidate.len(),
        });
    }
    let (objective, weight) = problem.evaluate(&candidate.values);
    Ok(Validation {
        feasible: problem.fits(&candidate.values),
        objective,
        weight,
    })
}

/// Validates `candidate` against the runner's problem and offers it to the
/// incumbent.
///
/// Infeasible candidates are rejected with
/// [`KnapsackError::InfeasibleWarmStart`] and leave the runner untouched.
/// Feasible candidates replace the incumbent only on strict objective
/// improvement.
pub fn seed(runner: &mut BnbRunner<'_>, candidate: &Solution) -> KnapsackResult<SeedOutcome> {
    let verdict = validate(runner.problem(), candidate)?;
    seed_validated(runner, candidate, &verdict)
}

/// Second half of [`seed`], for callers that already hold the verdict for
/// `candidate` against the runner's problem.
pub(crate) fn seed_validated(
    runner: &mut BnbRunner<'_>,
    candidate: &Solution,
    verdict: &Validation,
) -> KnapsackResult<SeedOutcome> {
    let problem = runner.problem();
    if !verdict.feasible {
        log::debug!(
            "{}: warm start rejected, weight {} > capacity {}",
            problem.name(),
            verdict.weight,
            problem.capacity()
        );
        return Err(KnapsackError::InfeasibleWarmStart {
            weight: verdict.weight,
            capacity: problem.capacity(),
        });
    }

    let fresh = Solution {
        values: candidate.values.clone(),
        objective: verdict.objective,
        weight: verdict.weight,
        feasible: true,
    };
    if runner.incumbent_mut().try_install(&fresh) {
        log::debug!(
            "{}: warm start installed, objective={}",
            problem.name(),
            fresh.objective
        );
        Ok(SeedOutcome::Installed)
    } else {
        log::debug!(
            "{}: warm start objective={} does not improve incumbent {}",
            problem.name(),
            fresh.objective,
            runner.incumbent().objective()
        );
        Ok(SeedOutcome::NotImproving)
    }
}
