use watt_core::Snapshot;

use super::{Point, Solution, Status};

/// Tracks the best point seen during a run.
pub(super) struct Best<I, O, const N: usize, const C: usize> {
    point: Point<N, C>,
    snapshot: Snapshot<I, O>,
    feasibility_tol: f64,
}

impl<I, O, const N: usize, const C: usize> Best<I, O, N, C> {
    pub(super) fn new(point: Point<N, C>, snapshot: Snapshot<I, O>, feasibility_tol: f64) -> Self {
        Self {
            point,
            snapshot,
            feasibility_tol,
        }
    }

    /// Replaces the tracked point if `point` ranks above it.
    pub(super) fn offer(&mut self, point: Point<N, C>, snapshot: Snapshot<I, O>) {
        if ranks_above(&point, &self.point, self.feasibility_tol) {
            self.point = point;
            self.snapshot = snapshot;
        }
    }

    pub(super) fn into_solution(
        self,
        status: Status,
        iters: usize,
        evals: usize,
    ) -> Solution<I, O, N, C> {
        Solution {
            status,
            x: self.point.x,
            objective: self.point.objective,
            constraints: self.point.constraints,
            snapshot: self.snapshot,
            iters,
            evals,
        }
    }
}

/// Feasible beats infeasible, then lower objective among feasible points and
/// lower violation among infeasible ones.
fn ranks_above<const N: usize, const C: usize>(
    candidate: &Point<N, C>,
    incumbent: &Point<N, C>,
    tol: f64,
) -> bool {
    match (candidate.is_feasible(tol), incumbent.is_feasible(tol)) {
        (true, true) => candidate.objective < incumbent.objective,
        (true, false) => true,
        (false, true) => false,
        (false, false) => candidate.violation() < incumbent.violation(),
    }
}
