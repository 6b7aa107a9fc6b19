use crate::optimization::Evaluation;

/// A point with its evaluated objective and inequality margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize, const C: usize> {
    /// The solver variables.
    pub x: [f64; N],

    /// The objective value at x.
    pub objective: f64,

    /// The inequality margins at x (feasible when non-negative).
    pub constraints: [f64; C],
}

impl<const N: usize, const C: usize> Point<N, C> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: [f64; N], objective: f64, constraints: [f64; C]) -> Self {
        Self {
            x,
            objective,
            constraints,
        }
    }

    /// Returns the summed constraint violation `Σ max(0, -cᵢ)`.
    #[must_use]
    pub fn violation(&self) -> f64 {
        self.constraints.iter().map(|c| (-c).max(0.0)).sum()
    }

    /// Returns true if the summed violation is within `tol`.
    #[must_use]
    pub fn is_feasible(&self, tol: f64) -> bool {
        self.violation() <= tol
    }
}

impl<I, O, const N: usize, const C: usize> From<&Evaluation<I, O, N, C>> for Point<N, C> {
    fn from(eval: &Evaluation<I, O, N, C>) -> Self {
        Self::new(eval.x, eval.objective, eval.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn violation_sums_negative_margins_only() {
        let point = Point::new([0.0], 1.0, [2.0, -0.5, -1.5, 0.0]);

        assert_relative_eq!(point.violation(), 2.0);
        assert!(!point.is_feasible(1e-6));
        assert!(point.is_feasible(2.0));
    }
}
