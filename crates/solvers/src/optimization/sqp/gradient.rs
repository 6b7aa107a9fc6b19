use ndarray::{Array1, Array2};

use super::Point;

/// First-order model of the objective and margins around an iterate.
///
/// Derivatives are taken with respect to the unit-box coordinates.
#[derive(Debug, Clone)]
pub(super) struct Linearization {
    /// Objective gradient, length `N`.
    pub gradient: Array1<f64>,

    /// Margin Jacobian, shape `C × N`.
    pub jacobian: Array2<f64>,
}

impl Linearization {
    /// Returns the Lagrangian gradient `∇f − Jᵀλ`.
    pub(super) fn lagrangian_gradient(&self, multipliers: &Array1<f64>) -> Array1<f64> {
        &self.gradient - &self.jacobian.t().dot(multipliers)
    }
}

/// Estimates derivatives at `z` by one-sided finite differences.
///
/// Steps forward by `step` unless that would leave the unit box, in which
/// case it steps backward. `eval` maps unit-box coordinates to a point.
///
/// # Errors
///
/// Returns the first error produced by `eval`.
pub(super) fn finite_difference<const N: usize, const C: usize, E, F>(
    z: &[f64; N],
    at: &Point<N, C>,
    step: f64,
    mut eval: F,
) -> Result<Linearization, E>
where
    F: FnMut(&[f64; N]) -> Result<Point<N, C>, E>,
{
    let mut gradient = Array1::<f64>::zeros(N);
    let mut jacobian = Array2::<f64>::zeros((C, N));

    for j in 0..N {
        let h = if z[j] + step <= 1.0 { step } else { -step };
        let mut probe = *z;
        probe[j] += h;

        let shifted = eval(&probe)?;
        gradient[j] = (shifted.objective - at.objective) / h;
        for i in 0..C {
            jacobian[[i, j]] = (shifted.constraints[i] - at.constraints[i]) / h;
        }
    }

    Ok(Linearization { gradient, jacobian })
}
