use std::{fmt::Display, io::Write};

use watt_core::{ConstrainedMinimizationProblem, Model, Observer};
use watt_observers::{LogObserver, StopAtTarget};
use watt_solvers::optimization::sqp::{Action, Config, Event, Status, minimize};

const RULE: &str = "-----------------------------------------------";

/// Solver options beyond [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub target: Option<f64>,
    pub recover: bool,
}

/// Prints the report at `x0`, optimizes, then prints the report at the
/// solution followed by a one-line summary.
///
/// A run that stops without converging is still reported; only model,
/// problem, solver, and I/O errors are returned.
pub fn optimize<M, P, W, const N: usize, const C: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    options: Options,
    out: &mut W,
) -> anyhow::Result<Status>
where
    M: Model,
    M::Output: Display,
    P: ConstrainedMinimizationProblem<N, C, Input = M::Input, Output = M::Output>,
    W: Write,
{
    let initial = model.call(&problem.input(&x0)?)?;
    section(out, "Initial characteristics before optimization :", &initial)?;

    let mut log = LogObserver::new();
    if options.recover {
        log = log.recovering();
    }
    let mut target = options
        .target
        .map(|target| StopAtTarget::new(target, config.feasibility_tol()));

    let observer = |event: &Event<'_, M, P, N, C>| -> Option<Action> {
        let action = log.observe(event);
        action.or_else(|| target.as_mut().and_then(|target| target.observe(event)))
    };
    let solution = minimize(model, problem, x0, config, observer)?;

    section(out, "Final characteristics after optimization :", &solution.snapshot.output)?;
    writeln!(
        out,
        "status: {:?}, iterations: {}, evaluations: {}, objective: {:.4}",
        solution.status, solution.iters, solution.evals, solution.objective
    )?;
    tracing::info!(status = ?solution.status, iters = solution.iters, "optimization finished");

    Ok(solution.status)
}

fn section<W: Write>(out: &mut W, title: &str, report: &impl Display) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{report}")?;
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use watt_models::{
        converter::{Converter, ConverterDesign, ConverterProblem},
        inductor::{Inductor, InductorProblem},
    };

    #[test]
    fn prints_both_reports_and_a_summary() {
        let problem = InductorProblem::default();
        let mut out = Vec::new();

        let status = optimize(
            &Inductor::default(),
            &problem,
            problem.initial().to_array(),
            &Config::default(),
            Options::default(),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(status, Status::Converged);
        assert!(text.contains("Initial characteristics before optimization :"));
        assert!(text.contains("Final characteristics after optimization :"));
        assert_eq!(text.matches("* Optimisation variables:").count(), 2);
        assert!(text.contains("Induction B = 0.40 T"));
        assert!(text.lines().last().unwrap().starts_with("status: Converged"));
    }

    #[test]
    fn iteration_limit_is_not_an_error() {
        let problem = ConverterProblem::default();
        let config = Config::new(1, 1e-8, 1e-6, f64::EPSILON.sqrt()).unwrap();
        let mut out = Vec::new();

        let status = optimize(
            &Converter::default(),
            &problem,
            problem.initial().to_array(),
            &config,
            Options::default(),
            &mut out,
        )
        .unwrap();

        assert_eq!(status, Status::MaxIters);
    }

    #[test]
    fn model_failure_at_the_start_is_an_error() {
        // A zero airgap ratio cannot be sized.
        let problem = ConverterProblem::new(
            ConverterProblem::default().bounds(),
            ConverterDesign::from_array([10.0, 65.0, 2.0, 0.0, 1.0, 1.0, 1.0, 1.0]),
        );
        let mut out = Vec::new();

        let result = optimize(
            &Converter::default(),
            &problem,
            problem.initial().to_array(),
            &Config::default(),
            Options::default(),
            &mut out,
        );

        let error = result.unwrap_err();
        assert!(error.to_string().contains("not finite"));
        assert!(out.is_empty());
    }
}
