use watt_core::{ConstrainedMinimizationProblem, Model, Observer};

use crate::optimization::EvalError;

use super::{Action, Point};

/// Events emitted by the SQP solver.
///
/// The initial point (iteration 0) and every line-search trial produce an
/// [`Event::Evaluated`] or a failure event. Finite-difference probes are silent
/// unless they fail. An [`Event::Accepted`] follows each successful line search.
pub enum Event<'a, M, P, const N: usize, const C: usize>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of the initial point or a line-search trial.
    Evaluated {
        /// The SQP iteration (0 for the initial point).
        iter: usize,

        /// The evaluated point.
        point: Point<N, C>,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// A line search accepted a new iterate.
    Accepted {
        /// The SQP iteration.
        iter: usize,

        /// The new iterate.
        point: Point<N, C>,

        /// The accepted fraction of the search direction.
        step_size: f64,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The SQP iteration.
        iter: usize,

        /// The x value where evaluation failed.
        x: [f64; N],

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input mapping, objective, or margins).
    ProblemFailed {
        /// The SQP iteration.
        iter: usize,

        /// The x value where evaluation failed.
        x: [f64; N],

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize, const C: usize> Event<'_, M, P, N, C>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
{
    /// Returns the SQP iteration the event belongs to.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. }
            | Self::Accepted { iter, .. }
            | Self::ModelFailed { iter, .. }
            | Self::ProblemFailed { iter, .. } => *iter,
        }
    }

    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        match self {
            Self::Evaluated { point, .. } | Self::Accepted { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the evaluated point, if evaluation succeeded.
    #[must_use]
    pub fn point(&self) -> Option<Point<N, C>> {
        match self {
            Self::Evaluated { point, .. } | Self::Accepted { point, .. } => Some(*point),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        iter: usize,
        x: [f64; N],
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N, C>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed { iter, x, error: e };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed { iter, x, error: e };
                observer.observe(&event)
            }
        }
    }
}
