//! `watt`: sizes a component, optimizes it for mass, and reports both designs.

mod cli;
mod logger;
mod run;

use clap::Parser;
use watt_models::{
    converter::{Converter, ConverterProblem},
    inductor::{Inductor, InductorProblem},
};
use watt_solvers::optimization::sqp::Config;

use cli::{Cli, Problem};
use run::{Options, optimize};

fn main() {
    let cli = Cli::parse();
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let defaults = Config::default();
    let config = Config::new(
        cli.max_iters,
        cli.tolerance,
        defaults.feasibility_tol(),
        defaults.fd_step(),
    )?;
    let options = Options {
        target: cli.target,
        recover: cli.recover,
    };
    let mut stdout = std::io::stdout().lock();

    match cli.problem {
        Problem::Inductor => {
            let problem = InductorProblem::default();
            let x0 = problem.initial().to_array();
            optimize(&Inductor::default(), &problem, x0, &config, options, &mut stdout)?;
        }
        Problem::Converter => {
            let problem = ConverterProblem::default();
            let x0 = problem.initial().to_array();
            optimize(&Converter::default(), &problem, x0, &config, options, &mut stdout)?;
        }
    }

    Ok(())
}
