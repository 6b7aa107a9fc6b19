use ndarray::{Array1, Array2, ArrayView1};

/// Factors a symmetric positive definite matrix as `A = L Lᵀ`.
///
/// Returns `None` if a pivot is not strictly positive.
pub(super) fn cholesky(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));

    for j in 0..n {
        let mut s = 0.0;
        for k in 0..j {
            s += l[[j, k]] * l[[j, k]];
        }
        let pivot = a[[j, j]] - s;
        if !pivot.is_finite() || pivot <= 0.0 {
            return None;
        }
        l[[j, j]] = pivot.sqrt();

        for i in (j + 1)..n {
            let mut s = 0.0;
            for k in 0..j {
                s += l[[i, k]] * l[[j, k]];
            }
            l[[i, j]] = (a[[i, j]] - s) / l[[j, j]];
        }
    }

    Some(l)
}

/// Solves `L Lᵀ x = b` given the Cholesky factor `L`.
pub(super) fn cholesky_solve(l: &Array2<f64>, b: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = l.nrows();

    // Forward solve: L y = b
    let mut y = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut s = 0.0;
        for k in 0..i {
            s += l[[i, k]] * y[k];
        }
        y[i] = (b[i] - s) / l[[i, i]];
    }

    // Back solve: Lᵀ x = y
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut s = 0.0;
        for k in (i + 1)..n {
            s += l[[k, i]] * x[k];
        }
        x[i] = (y[i] - s) / l[[i, i]];
    }

    x
}

/// Inverts a symmetric positive definite matrix.
pub(super) fn spd_inverse(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let l = cholesky(a)?;

    let mut inv = Array2::<f64>::zeros((n, n));
    let mut unit = Array1::<f64>::zeros(n);
    for j in 0..n {
        unit.fill(0.0);
        unit[j] = 1.0;
        let col = cholesky_solve(&l, unit.view());
        inv.column_mut(j).assign(&col);
    }

    Some(inv)
}
