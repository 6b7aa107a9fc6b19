use watt_core::Snapshot;

use super::Point;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Two consecutive iterations failed to find an acceptable step.
    Stalled,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an SQP run.
///
/// The reported point is the best one encountered: any feasible point beats
/// every infeasible one, feasible points are ranked by objective, and
/// infeasible points by summed violation.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize, const C: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best x found, always within the problem bounds.
    pub x: [f64; N],

    /// Objective value at the reported x.
    pub objective: f64,

    /// Inequality margins at the reported x.
    pub constraints: [f64; C],

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of model evaluations, finite differences included.
    pub evals: usize,
}

impl<I, O, const N: usize, const C: usize> Solution<I, O, N, C> {
    /// Returns the reported point.
    #[must_use]
    pub fn point(&self) -> Point<N, C> {
        Point::new(self.x, self.objective, self.constraints)
    }
}
