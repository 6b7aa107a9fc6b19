//! Dual active-set solver for the SQP search-direction subproblem.
//!
//! Solves `min ½ dᵀBd + gᵀd` subject to `G d ≥ h` with `B` positive definite,
//! following Goldfarb and Idnani. The iteration starts from the unconstrained
//! minimum and repeatedly adds the most violated row, dropping rows whose
//! multipliers would turn negative.

use ndarray::{Array1, Array2};

use super::linalg::{cholesky, cholesky_solve, spd_inverse};

const VIOLATION_TOL: f64 = 1e-10;
const DEGENERATE: f64 = 1e-14;
const MAX_ITERS: usize = 200;

/// A solved subproblem.
#[derive(Debug, Clone)]
pub(super) struct QpSolution {
    /// The minimizing step.
    pub step: Array1<f64>,

    /// One multiplier per row of `G`, zero for inactive rows.
    pub multipliers: Vec<f64>,
}

/// Solves the inequality-constrained quadratic program.
///
/// Returns `None` when the rows are inconsistent, when `B` is not positive
/// definite, or when the active set fails to settle.
pub(super) fn solve(
    hessian: &Array2<f64>,
    gradient: &Array1<f64>,
    rows: &Array2<f64>,
    rhs: &Array1<f64>,
) -> Option<QpSolution> {
    let n = gradient.len();
    let m = rows.nrows();
    let hinv = spd_inverse(hessian)?;

    // Unit-norm rows; degenerate rows keep a zero scale and are ignored.
    let mut normals = Array2::<f64>::zeros((m, n));
    let mut bounds = Array1::<f64>::zeros(m);
    let mut scales = vec![0.0; m];
    for i in 0..m {
        let row = rows.row(i);
        let norm = row.dot(&row).sqrt();
        if norm < DEGENERATE {
            continue;
        }
        normals.row_mut(i).assign(&(&row / norm));
        bounds[i] = rhs[i] / norm;
        scales[i] = norm;
    }

    let mut x = -hinv.dot(gradient);
    let mut active: Vec<usize> = Vec::new();
    let mut duals: Vec<f64> = Vec::new();

    for _ in 0..MAX_ITERS {
        let Some(p) = most_violated(&normals, &bounds, &scales, &active, &x) else {
            let mut multipliers = vec![0.0; m];
            for (&row, &u) in active.iter().zip(&duals) {
                multipliers[row] = u / scales[row];
            }
            return Some(QpSolution {
                step: x,
                multipliers,
            });
        };

        let np = normals.row(p);
        let mut dual_p = 0.0;

        loop {
            let (h, nstar) = project(&hinv, &normals, &active)?;
            let z = h.dot(&np);
            let r = nstar.dot(&np);

            let mut t1 = f64::INFINITY;
            let mut blocking = None;
            for (k, (&u, &rk)) in duals.iter().zip(r.iter()).enumerate() {
                if rk > 0.0 && u / rk < t1 {
                    t1 = u / rk;
                    blocking = Some(k);
                }
            }

            let zn = z.dot(&np);
            let t2 = if zn <= DEGENERATE {
                f64::INFINITY
            } else {
                -(np.dot(&x) - bounds[p]) / zn
            };

            match blocking {
                None if t2.is_infinite() => return None,
                Some(l) if t2.is_infinite() => {
                    // Dual step only.
                    for (u, rk) in duals.iter_mut().zip(r.iter()) {
                        *u -= t1 * rk;
                    }
                    dual_p += t1;
                    active.remove(l);
                    duals.remove(l);
                }
                _ => {
                    let t = t1.min(t2);
                    x.scaled_add(t, &z);
                    for (u, rk) in duals.iter_mut().zip(r.iter()) {
                        *u -= t * rk;
                    }
                    dual_p += t;

                    if t2 <= t1 {
                        active.push(p);
                        duals.push(dual_p);
                        break;
                    }
                    if let Some(l) = blocking {
                        active.remove(l);
                        duals.remove(l);
                    }
                }
            }
        }
    }

    None
}

/// Returns the inactive row with the most negative slack, if any.
fn most_violated(
    normals: &Array2<f64>,
    bounds: &Array1<f64>,
    scales: &[f64],
    active: &[usize],
    x: &Array1<f64>,
) -> Option<usize> {
    let mut worst = None;
    let mut worst_slack = -VIOLATION_TOL;

    for (j, &scale) in scales.iter().enumerate() {
        if scale == 0.0 || active.contains(&j) {
            continue;
        }
        let slack = normals.row(j).dot(x) - bounds[j];
        if slack < worst_slack {
            worst_slack = slack;
            worst = Some(j);
        }
    }

    worst
}

/// Builds the reduced inverse Hessian `H` and the pseudo-inverse `N*` of the
/// active normals.
fn project(
    hinv: &Array2<f64>,
    normals: &Array2<f64>,
    active: &[usize],
) -> Option<(Array2<f64>, Array2<f64>)> {
    let n = hinv.nrows();
    let q = active.len();
    if q == 0 {
        return Some((hinv.clone(), Array2::zeros((0, n))));
    }

    let mut gin = Array2::<f64>::zeros((q, n));
    for (a, &row) in active.iter().enumerate() {
        gin.row_mut(a).assign(&hinv.dot(&normals.row(row)));
    }

    let mut gram = Array2::<f64>::zeros((q, q));
    for a in 0..q {
        for b in 0..q {
            gram[[a, b]] = normals.row(active[a]).dot(&gin.row(b));
        }
    }
    let l = cholesky(&gram)?;

    let mut nstar = Array2::<f64>::zeros((q, n));
    for k in 0..n {
        let col = cholesky_solve(&l, gin.column(k));
        nstar.column_mut(k).assign(&col);
    }

    let h = hinv - &gin.t().dot(&nstar);
    Some((h, nstar))
}
