//! Logging observer for the SQP solver.

use watt_core::{ConstrainedMinimizationProblem, Model, Observer};
use watt_solvers::optimization::sqp::{Action, Event};

use crate::traits::{CanAssumeWorse, HasObjective, HasViolation};

/// Reports SQP progress through `tracing`.
///
/// Line-search trials are logged at `debug`, accepted iterates at `info`,
/// and failed evaluations at `warn`. Nothing is printed to stdout.
///
/// By default the observer never acts, so a failed evaluation ends the run
/// with an error. [`LogObserver::recovering`] makes it answer failed trials
/// with [`Action::AssumeWorse`] instead.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    recover: bool,
    evaluations: usize,
    accepted: usize,
    failures: usize,
}

impl LogObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats failed evaluations as worse points rather than errors.
    #[must_use]
    pub fn recovering(mut self) -> Self {
        self.recover = true;
        self
    }

    /// Number of successful evaluations seen.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Number of accepted iterates seen.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of failed evaluations seen.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    fn failed(&mut self) -> Option<Action> {
        self.failures += 1;
        self.recover.then(Action::assume_worse)
    }
}

impl<M, P, const N: usize, const C: usize> Observer<Event<'_, M, P, N, C>, Action> for LogObserver
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P, N, C>) -> Option<Action> {
        let iter = event.iter();
        let x = event.x();

        match event {
            Event::Evaluated { .. } => {
                self.evaluations += 1;
                tracing::debug!(
                    iter,
                    objective = event.objective(),
                    violation = event.violation(),
                    x = ?x,
                    "evaluated"
                );
                None
            }
            Event::Accepted { step_size, .. } => {
                self.accepted += 1;
                tracing::info!(
                    iter,
                    objective = event.objective(),
                    violation = event.violation(),
                    step_size,
                    "accepted"
                );
                None
            }
            Event::ModelFailed { error, .. } => {
                tracing::warn!(iter, x = ?x, %error, "model failed");
                self.failed()
            }
            Event::ProblemFailed { error, .. } => {
                tracing::warn!(iter, x = ?x, %error, "problem failed");
                self.failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use watt_core::Bounds;
    use watt_models::{
        SizingError,
        inductor::{Inductor, InductorProblem},
    };
    use watt_solvers::optimization::sqp::{Config, Status, minimize};

    #[test]
    fn counts_inductor_progress() {
        let problem = InductorProblem::default();
        let mut log = LogObserver::new();

        let solution = minimize(
            &Inductor::default(),
            &problem,
            problem.initial().to_array(),
            &Config::default(),
            |event: &Event<'_, Inductor, InductorProblem, 2, 2>| log.observe(event),
        )
        .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert!(log.accepted() > 0);
        assert!(log.accepted() <= solution.iters);
        assert!(log.evaluations() > log.accepted());
        assert!(log.evaluations() <= solution.evals);
        assert_eq!(log.failures(), 0);
    }

    /// Refuses points with x0 above 3.
    struct Picky;

    impl Model for Picky {
        type Input = [f64; 2];
        type Output = [f64; 2];
        type Error = SizingError;

        fn call(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            if x[0] > 3.0 {
                Err(SizingError::NonFinite {
                    quantity: "x0",
                    value: x[0],
                })
            } else {
                Ok(*x)
            }
        }
    }

    /// Pulls x0 towards 9, where [`Picky`] fails.
    struct TowardsNine;

    impl ConstrainedMinimizationProblem<2, 0> for TowardsNine {
        type Input = [f64; 2];
        type Output = [f64; 2];
        type Error = Infallible;

        fn bounds(&self) -> Bounds<2> {
            Bounds::new([(0.0, 10.0), (0.0, 10.0)]).unwrap()
        }

        fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
            Ok(*x)
        }

        fn objective(&self, _input: &[f64; 2], output: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok((output[0] - 9.0).powi(2) + (output[1] - 1.0).powi(2))
        }

        fn constraints(&self, _input: &[f64; 2], _output: &[f64; 2]) -> Result<[f64; 0], Self::Error> {
            Ok([])
        }
    }

    #[test]
    fn recovering_turns_failures_into_backtracking() {
        let config = Config::new(3, 1e-8, 1e-6, f64::EPSILON.sqrt()).unwrap();
        let mut log = LogObserver::new().recovering();

        let observer = |event: &Event<'_, Picky, TowardsNine, 2, 0>| log.observe(event);
        let solution = minimize(&Picky, &TowardsNine, [1.0, 1.0], &config, observer).unwrap();

        assert!(log.failures() > 0);
        assert!(solution.x[0] <= 3.0);
    }

    #[test]
    fn default_observer_lets_failures_through() {
        let config = Config::new(3, 1e-8, 1e-6, f64::EPSILON.sqrt()).unwrap();
        let mut log = LogObserver::new();

        let observer = |event: &Event<'_, Picky, TowardsNine, 2, 0>| log.observe(event);
        let result = minimize(&Picky, &TowardsNine, [1.0, 1.0], &config, observer);

        assert!(result.is_err());
        assert_eq!(log.failures(), 1);
    }
}
