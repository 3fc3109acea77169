//! Best-solution holder for a single search run.

use crate::model::Solution;

/// The best feasible solution found so far.
///
/// Only strict objective improvements are installed. Callers are
/// responsible for passing feasible solutions with trusted derived fields.
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    best: Option<Solution>,
    updates: u64,
}

impl Incumbent {
    /// Creates an empty incumbent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `candidate` if it strictly improves the objective.
    ///
    /// Returns `true` if installed.
    pub fn try_install(&mut self, candidate: &Solution) -> bool {
        if !self.improves(candidate.objective) {
            return false;
        }
        self.best = Some(candidate.clone());
        self.updates += 1;
        true
    }

    /// Whether an objective strictly beats the current one.
    pub fn improves(&self, objective: f64) -> bool {
        match &self.best {
            Some(best) => objective > best.objective,
            None => true,
        }
    }

    /// Objective of the incumbent, `-inf` if none.
    pub fn objective(&self) -> f64 {
        self.best
            .as_ref()
            .map(|s| s.objective)
            .unwrap_or(f64::NEG_INFINITY)
    }

    /// Whether a solution has been installed.
    pub fn has_solution(&self) -> bool {
        self.best.is_some()
    }

    /// Current best solution, if any.
    pub fn solution(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Number of installed solutions.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Consumes the holder, returning the best solution.
    pub fn into_solution(self) -> Option<Solution> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Problem;

    #[test]
    fn test_strict_improvement_only() {
        let problem = Problem::build(vec![5.0, 5.0, 7.0], vec![1, 2, 3], 10).unwrap();
        let mut inc = Incumbent::new();
        assert!(!inc.has_solution());
        assert_eq!(inc.objective(), f64::NEG_INFINITY);

        assert!(inc.try_install(&problem.solution(vec![true, false, false])));
        assert_eq!(inc.objective(), 5.0);

        // Equal objective is not an improvement.
        assert!(!inc.try_install(&problem.solution(vec![false, true, false])));
        assert_eq!(inc.solution().unwrap().values, vec![true, false, false]);

        assert!(inc.try_install(&problem.solution(vec![false, false, true])));
        assert_eq!(inc.objective(), 7.0);
        assert_eq!(inc.updates(), 2);
    }

    #[test]
    fn test_into_solution() {
        let problem = Problem::build(vec![1.0], vec![1], 1).unwrap();
        let mut inc = Incumbent::new();
        inc.try_install(&problem.solution(vec![true]));
        assert_eq!(inc.into_solution().unwrap().objective, 1.0);
    }
}
