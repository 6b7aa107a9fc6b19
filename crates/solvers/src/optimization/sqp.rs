//! Sequential quadratic programming for bounded, inequality-constrained
//! minimization.
//!
//! # Algorithm
//!
//! The solver works on the unit box: each variable is mapped from its bounds
//! onto `[0, 1]` so that differently scaled quantities (millimetres, teslas,
//! kilohertz) share one step size. An initial point outside the bounds is
//! projected onto them before the first evaluation.
//!
//! Each iteration:
//!
//! 1. Estimates the objective gradient and the margin Jacobian by one-sided
//!    finite differences.
//! 2. Refreshes a damped BFGS approximation of the Lagrangian Hessian.
//! 3. Solves a quadratic subproblem for a search direction, with the box and
//!    the linearized margins as constraints. Violated margins are relaxed in
//!    steps until the subproblem is consistent.
//! 4. Backtracks along the direction until an L1 penalty merit decreases.
//!
//! The run converges when either the objective change or the step length falls
//! below [`Config::tolerance`] at a point whose summed violation is also below
//! it. Two consecutive iterations without an acceptable step end the run with
//! [`Status::Stalled`].
//!
//! The returned [`Solution`] holds the best point seen, not necessarily the
//! last: feasible points beat infeasible ones, then lower objective wins among
//! feasible points and lower violation among infeasible ones.
//!
//! # Observer Events
//!
//! - [`Event::Evaluated`] for the initial point and every line-search trial
//! - [`Event::Accepted`] once per successful line search
//! - [`Event::ModelFailed`] / [`Event::ProblemFailed`] for any failed
//!   evaluation, finite-difference probes included
//!
//! Observers can return [`Action::StopEarly`] at any event to halt with the
//! best point so far. [`Action::AssumeWorse`] rejects a line-search trial, so
//! the search backtracks as if the merit had not decreased.

mod action;
mod best;
mod bfgs;
mod config;
mod error;
mod event;
mod gradient;
mod linalg;
mod point;
mod qp;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use watt_core::{ConstrainedMinimizationProblem, Model, Observer};

use search::search;

/// Minimizes the objective subject to the problem's bounds and margins.
///
/// `x0` is the starting point; it is projected onto the bounds first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation and the
/// observer does not recover with [`Action::AssumeWorse`] or
/// [`Action::StopEarly`]. A failure at the initial point is always an error.
pub fn minimize<M, P, Obs, const N: usize, const C: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N, C>, Error>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N, C>, Action>,
{
    search(model, problem, x0, config, observer)
}

/// Minimizes the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P, const N: usize, const C: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N, C>, Error>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, config, ())
}
