use ndarray::{Array1, Array2};

const CURVATURE_FLOOR: f64 = 1e-20;

/// Applies Powell's damped BFGS update to the Hessian approximation `b`.
///
/// `s` is the step taken and `y` the change in the Lagrangian gradient.
/// When the curvature `sᵀy` is small relative to `sᵀBs`, `y` is blended with
/// `Bs` so the update stays positive definite.
pub(super) fn damped_update(b: &mut Array2<f64>, s: &Array1<f64>, y: &Array1<f64>) {
    let bs = b.dot(s);
    let sbs = s.dot(&bs);
    if sbs <= CURVATURE_FLOOR {
        return;
    }

    let mut y = y.clone();
    let mut sy = s.dot(&y);
    if sy < 0.2 * sbs {
        let theta = 0.8 * sbs / (sbs - sy);
        y = theta * &y + (1.0 - theta) * &bs;
        sy = s.dot(&y);
    }

    let n = s.len();
    for i in 0..n {
        for j in 0..n {
            b[[i, j]] += y[i] * y[j] / sy - bs[i] * bs[j] / sbs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn secant_condition_holds_for_positive_curvature() {
        let mut b = Array2::<f64>::eye(2);
        let s = array![1.0, 0.0];
        let y = array![3.0, 1.0];

        damped_update(&mut b, &s, &y);

        let bs = b.dot(&s);
        assert_relative_eq!(bs[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(bs[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_curvature_keeps_matrix_positive_definite() {
        let mut b = Array2::<f64>::eye(2);
        let s = array![1.0, 1.0];
        let y = array![-1.0, -2.0];

        damped_update(&mut b, &s, &y);

        assert!(b[[0, 0]] > 0.0);
        let det = b[[0, 0]] * b[[1, 1]] - b[[0, 1]] * b[[1, 0]];
        assert!(det > 0.0);
        assert_relative_eq!(b[[0, 1]], b[[1, 0]], epsilon = 1e-12);
    }

    #[test]
    fn zero_step_leaves_matrix_unchanged() {
        let mut b = Array2::<f64>::eye(2);
        damped_update(&mut b, &array![0.0, 0.0], &array![1.0, 1.0]);
        assert_eq!(b, Array2::<f64>::eye(2));
    }
}
