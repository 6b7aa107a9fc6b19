//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasViolation`] — events that carry a summed constraint violation
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use watt_core::Observer;
//! use watt_observers::traits::{CanStopEarly, HasViolation};
//!
//! /// Stops as soon as any point is feasible.
//! struct FirstFeasible;
//!
//! impl<E: HasViolation, A: CanStopEarly> Observer<E, A> for FirstFeasible {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.violation() == 0.0).then(A::stop_early)
//!     }
//! }
//! ```

use watt_core::{ConstrainedMinimizationProblem, Model};

use watt_solvers::optimization::sqp;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An event that carries the summed violation of its inequality margins.
pub trait HasViolation {
    /// Returns `Σ max(0, -cᵢ)` over the margins of this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no margins
    /// are available.
    fn violation(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the other.
    fn assume_worse() -> Self;
}

// --- Event traits for sqp::Event ---

impl<M, P, const N: usize, const C: usize> HasObjective for sqp::Event<'_, M, P, N, C>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        self.point().map_or(f64::NAN, |point| point.objective)
    }
}

impl<M, P, const N: usize, const C: usize> HasViolation for sqp::Event<'_, M, P, N, C>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
{
    fn violation(&self) -> f64 {
        self.point().map_or(f64::NAN, |point| point.violation())
    }
}

// --- Action traits for sqp::Action ---

impl CanStopEarly for sqp::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for sqp::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use watt_core::Observer;
    use watt_models::{
        SizingError,
        inductor::{Inductor, InductorProblem},
    };
    use watt_solvers::optimization::sqp::{Config, Event, Status, minimize};

    /// Stops at the first point within `tol` of feasibility.
    struct FirstFeasible {
        tol: f64,
    }

    impl<E: HasViolation, A: CanStopEarly> Observer<E, A> for FirstFeasible {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.violation() <= self.tol).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_the_sqp_solver() {
        // The published start violates the airgap margin.
        let problem = InductorProblem::default();
        let solution = minimize(
            &Inductor::default(),
            &problem,
            problem.initial().to_array(),
            &Config::default(),
            FirstFeasible { tol: 1e-6 },
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.iters > 0);
        assert!(solution.point().is_feasible(1e-6));
    }

    #[test]
    fn evaluated_events_expose_objective_and_violation() {
        let problem = InductorProblem::default();
        let mut seen = Vec::new();
        let observer = |event: &Event<'_, Inductor, InductorProblem, 2, 2>| {
            seen.push((event.objective(), event.violation()));
            None
        };

        let config = Config::new(2, 1e-8, 1e-6, f64::EPSILON.sqrt()).unwrap();
        minimize(&Inductor::default(), &problem, problem.initial().to_array(), &config, observer)
            .unwrap();

        assert!(!seen.is_empty());
        assert!(
            seen.iter()
                .all(|(objective, violation)| objective.is_finite() && *violation >= 0.0)
        );
        assert!(seen[0].1 > 0.0);
    }

    #[test]
    fn failures_carry_no_values() {
        let error = SizingError::NonFinite {
            quantity: "iron area",
            value: f64::INFINITY,
        };
        let event: Event<'_, Inductor, InductorProblem, 2, 2> = Event::ModelFailed {
            iter: 3,
            x: [0.0, 0.0],
            error: &error,
        };

        assert!(event.objective().is_nan());
        assert!(event.violation().is_nan());
    }
}
