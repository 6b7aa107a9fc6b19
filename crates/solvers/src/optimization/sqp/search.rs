use ndarray::{Array1, Array2, s};
use watt_core::{Bounds, ConstrainedMinimizationProblem, Model, Observer};

use crate::optimization::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, Point, Solution, Status,
    best::Best,
    bfgs::damped_update,
    gradient::{Linearization, finite_difference},
    qp::{self, QpSolution},
};

/// Relaxation factors tried in turn on violated linearized margins.
const RELAXATION: [f64; 6] = [0.0, 0.5, 0.75, 0.9, 0.99, 1.0];
const ARMIJO: f64 = 1e-4;
const MAX_BACKTRACKS: usize = 12;
const MAX_FAILURES: usize = 2;

/// Core SQP iteration on the unit box.
#[allow(clippy::too_many_lines)]
pub(super) fn search<M, P, Obs, const N: usize, const C: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N, C>, Error>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N, C>, Action>,
{
    let bounds = problem.bounds();
    let mut evals = 1;

    let mut z = bounds.to_unit(&bounds.clamp(&x0));
    let x = bounds.from_unit(&z);
    let eval = match evaluate(model, problem, x) {
        Ok(eval) => eval,
        Err(e) => {
            // No snapshot to fall back on, so the observer cannot recover.
            Event::emit_failure(0, x, &e, &mut observer);
            return Err(e.into());
        }
    };

    let mut current = Point::from(&eval);
    let event: Event<'_, M, P, N, C> = Event::Evaluated {
        iter: 0,
        point: current,
        input: &eval.snapshot.input,
        output: &eval.snapshot.output,
    };
    let action = observer.observe(&event);
    let mut best = Best::new(current, eval.snapshot, config.feasibility_tol());
    if action == Some(Action::StopEarly) {
        return Ok(best.into_solution(Status::StoppedByObserver, 0, evals));
    }

    let mut hessian = Array2::<f64>::eye(N);
    let mut multipliers = Array1::<f64>::zeros(C);
    let mut weights = [0.0; C];
    let mut previous: Option<(Array1<f64>, Array1<f64>)> = None;
    let mut failures = 0;

    for iter in 1..=config.max_iters() {
        let linearized = finite_difference(&z, &current, config.fd_step(), |probe: &[f64; N]| {
            evals += 1;
            probe_point(model, problem, &bounds, iter, probe, &mut observer)
        });
        let lin = match linearized {
            Ok(lin) => lin,
            Err(Halt::StopEarly) => {
                return Ok(best.into_solution(Status::StoppedByObserver, iter, evals));
            }
            Err(Halt::Failed(e)) => return Err(e),
        };

        if let Some((step, old)) = previous.take() {
            let y = lin.lagrangian_gradient(&multipliers) - old;
            damped_update(&mut hessian, &step, &y);
        }

        let Some(QpSolution {
            step: direction,
            multipliers: qp_multipliers,
        }) = solve_subproblem(&hessian, &lin, &z, &current.constraints)
        else {
            failures += 1;
            hessian = Array2::eye(N);
            if failures >= MAX_FAILURES {
                return Ok(best.into_solution(Status::Stalled, iter, evals));
            }
            continue;
        };

        for (i, lambda) in multipliers.iter_mut().enumerate() {
            *lambda = qp_multipliers[i];
        }
        for (w, lambda) in weights.iter_mut().zip(multipliers.iter()) {
            *w = lambda.abs().max(0.5 * (*w + lambda.abs()));
        }

        let merit0 = merit(&current, &weights);
        let slope = lin.gradient.dot(&direction) - penalty(&current, &weights);

        let outcome = line_search(
            model,
            problem,
            &bounds,
            iter,
            &z,
            &direction,
            &weights,
            (merit0, slope),
            &mut observer,
            &mut evals,
        )?;

        let (next, eval, step_size) = match outcome {
            LineSearch::Accepted {
                z,
                eval,
                step_size,
            } => (z, eval, step_size),
            LineSearch::StopEarly(seen) => {
                if let Some(eval) = seen {
                    best.offer(Point::from(&eval), eval.snapshot);
                }
                return Ok(best.into_solution(Status::StoppedByObserver, iter, evals));
            }
            LineSearch::Failed => {
                failures += 1;
                hessian = Array2::eye(N);
                if failures >= MAX_FAILURES {
                    return Ok(best.into_solution(Status::Stalled, iter, evals));
                }
                continue;
            }
        };

        failures = 0;
        let point = Point::from(&eval);
        let step = Array1::from_iter((0..N).map(|k| next[k] - z[k]));
        let step_norm = step.dot(&step).sqrt();
        let change = (point.objective - current.objective).abs();

        previous = Some((step, lin.lagrangian_gradient(&multipliers)));
        z = next;
        current = point;
        best.offer(point, eval.snapshot);

        let event: Event<'_, M, P, N, C> = Event::Accepted {
            iter,
            point,
            step_size,
        };
        if observer.observe(&event) == Some(Action::StopEarly) {
            return Ok(best.into_solution(Status::StoppedByObserver, iter, evals));
        }

        let tol = config.tolerance();
        if (change < tol || step_norm < tol) && point.violation() < tol {
            return Ok(best.into_solution(Status::Converged, iter, evals));
        }
    }

    Ok(best.into_solution(Status::MaxIters, config.max_iters(), evals))
}

/// Why a finite-difference probe ended the iteration.
enum Halt {
    StopEarly,
    Failed(Error),
}

/// Evaluates a finite-difference probe, reporting failures to the observer.
fn probe_point<M, P, Obs, const N: usize, const C: usize>(
    model: &M,
    problem: &P,
    bounds: &Bounds<N>,
    iter: usize,
    z: &[f64; N],
    observer: &mut Obs,
) -> Result<Point<N, C>, Halt>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N, C>, Action>,
{
    let x = bounds.from_unit(z);
    match evaluate(model, problem, x) {
        Ok(eval) => Ok(Point::from(&eval)),
        Err(e) => match Event::emit_failure(iter, x, &e, observer) {
            Some(Action::StopEarly) => Err(Halt::StopEarly),
            _ => Err(Halt::Failed(e.into())),
        },
    }
}

/// Builds the linearized subproblem and solves it, relaxing violated margins
/// until the rows become consistent.
///
/// Rows are ordered margins first, then a lower and an upper box row per
/// variable, so the leading `C` multipliers belong to the margins.
fn solve_subproblem<const N: usize, const C: usize>(
    hessian: &Array2<f64>,
    lin: &Linearization,
    z: &[f64; N],
    margins: &[f64; C],
) -> Option<QpSolution> {
    let mut rows = Array2::<f64>::zeros((C + 2 * N, N));
    let mut rhs = Array1::<f64>::zeros(C + 2 * N);

    rows.slice_mut(s![..C, ..]).assign(&lin.jacobian);
    for j in 0..N {
        rows[[C + 2 * j, j]] = 1.0;
        rhs[C + 2 * j] = -z[j];
        rows[[C + 2 * j + 1, j]] = -1.0;
        rhs[C + 2 * j + 1] = z[j] - 1.0;
    }

    RELAXATION.iter().find_map(|&xi| {
        for (i, &c) in margins.iter().enumerate() {
            rhs[i] = if c >= 0.0 { -c } else { -(1.0 - xi) * c };
        }
        qp::solve(hessian, &lin.gradient, &rows, &rhs)
    })
}

enum LineSearch<I, O, const N: usize, const C: usize> {
    Accepted {
        z: [f64; N],
        eval: Evaluation<I, O, N, C>,
        step_size: f64,
    },
    Failed,

    /// The observer stopped the run, possibly at a successfully evaluated trial.
    StopEarly(Option<Evaluation<I, O, N, C>>),
}

/// Backtracks along `direction` until the merit function decreases enough.
///
/// `reference` holds the merit at the current iterate and its directional
/// derivative.
#[allow(clippy::too_many_arguments)]
fn line_search<M, P, Obs, const N: usize, const C: usize>(
    model: &M,
    problem: &P,
    bounds: &Bounds<N>,
    iter: usize,
    z: &[f64; N],
    direction: &Array1<f64>,
    weights: &[f64; C],
    reference: (f64, f64),
    observer: &mut Obs,
    evals: &mut usize,
) -> Result<LineSearch<M::Input, M::Output, N, C>, Error>
where
    M: Model,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N, C>, Action>,
{
    let (merit0, slope) = reference;
    let mut alpha = 1.0;

    for _ in 0..MAX_BACKTRACKS {
        let trial: [f64; N] =
            std::array::from_fn(|k| (z[k] + alpha * direction[k]).clamp(0.0, 1.0));
        let x = bounds.from_unit(&trial);
        *evals += 1;

        match evaluate(model, problem, x) {
            Ok(eval) => {
                let point = Point::from(&eval);
                let event: Event<'_, M, P, N, C> = Event::Evaluated {
                    iter,
                    point,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => return Ok(LineSearch::StopEarly(Some(eval))),
                    Some(Action::AssumeWorse) => {}
                    None => {
                        let sufficient = merit0 + ARMIJO * alpha * slope.min(0.0);
                        if is_finite(&point) && merit(&point, weights) <= sufficient {
                            return Ok(LineSearch::Accepted {
                                z: trial,
                                eval,
                                step_size: alpha,
                            });
                        }
                    }
                }
            }
            Err(e) => match Event::emit_failure(iter, x, &e, observer) {
                Some(Action::StopEarly) => return Ok(LineSearch::StopEarly(None)),
                Some(Action::AssumeWorse) => {}
                None => return Err(e.into()),
            },
        }

        alpha *= 0.5;
    }

    Ok(LineSearch::Failed)
}

/// L1 penalty merit `f + Σ wᵢ max(0, -cᵢ)`.
fn merit<const N: usize, const C: usize>(point: &Point<N, C>, weights: &[f64; C]) -> f64 {
    point.objective + penalty(point, weights)
}

fn penalty<const N: usize, const C: usize>(point: &Point<N, C>, weights: &[f64; C]) -> f64 {
    weights
        .iter()
        .zip(&point.constraints)
        .map(|(w, c)| w * (-c).max(0.0))
        .sum()
}

fn is_finite<const N: usize, const C: usize>(point: &Point<N, C>) -> bool {
    point.objective.is_finite() && point.constraints.iter().all(|c| c.is_finite())
}
