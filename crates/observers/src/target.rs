use watt_core::Observer;

use crate::traits::{CanStopEarly, HasObjective, HasViolation};

/// Stops the solver at the first feasible point whose objective reaches a
/// target.
///
/// Works with any solver whose events carry an objective and a violation.
/// Failed evaluations report NaN for both and never trigger a stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtTarget {
    target: f64,
    feasibility_tol: f64,
}

impl StopAtTarget {
    /// Creates an observer that stops once `objective <= target` at a point
    /// whose summed violation is within `feasibility_tol`.
    #[must_use]
    pub fn new(target: f64, feasibility_tol: f64) -> Self {
        Self {
            target,
            feasibility_tol,
        }
    }
}

impl<E, A> Observer<E, A> for StopAtTarget
where
    E: HasObjective + HasViolation,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let reached = event.objective() <= self.target
            && event.violation() <= self.feasibility_tol;
        if reached {
            tracing::info!(objective = event.objective(), target = self.target, "target reached");
        }
        reached.then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use watt_models::converter::{Converter, ConverterProblem};
    use watt_solvers::optimization::sqp::{Config, Status, minimize};

    struct Sample {
        objective: f64,
        violation: f64,
    }

    impl HasObjective for Sample {
        fn objective(&self) -> f64 {
            self.objective
        }
    }

    impl HasViolation for Sample {
        fn violation(&self) -> f64 {
            self.violation
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn needs_both_target_and_feasibility() {
        let mut observer = StopAtTarget::new(10.0, 1e-6);
        let mut check = |objective, violation| -> Option<Stop> {
            observer.observe(&Sample {
                objective,
                violation,
            })
        };

        assert_eq!(check(12.0, 0.0), None);
        assert_eq!(check(8.0, 0.5), None);
        assert_eq!(check(f64::NAN, f64::NAN), None);
        assert_eq!(check(9.5, 0.0), Some(Stop));
    }

    #[test]
    fn stops_converter_optimization_early() {
        let problem = ConverterProblem::default();
        let target = 15.0;

        let solution = minimize(
            &Converter::default(),
            &problem,
            problem.initial().to_array(),
            &Config::default(),
            StopAtTarget::new(target, 1e-6),
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective <= target);
        assert!(solution.point().is_feasible(1e-6));
    }
}
