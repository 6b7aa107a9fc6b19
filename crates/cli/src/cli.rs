use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "watt", about = "Mass-optimal sizing of power-electronics components", version)]
pub struct Cli {
    /// Sizing problem to optimize
    #[arg(value_enum, default_value_t = Problem::Converter)]
    pub problem: Problem,

    /// Maximum SQP iterations
    #[arg(long, default_value = "100")]
    pub max_iters: usize,

    /// Convergence tolerance on objective change, step length, and violation
    #[arg(long, default_value = "1e-8")]
    pub tolerance: f64,

    /// Stop as soon as a feasible design weighs at most this many kilograms
    #[arg(long)]
    pub target: Option<f64>,

    /// Backtrack from designs the model cannot size instead of aborting
    #[arg(long)]
    pub recover: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Problem {
    /// Gapped E-core inductor (2 variables, 2 margins)
    Inductor,

    /// Buck DC/DC converter (8 variables, 6 margins)
    Converter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_converter() {
        let cli = Cli::parse_from(["watt"]);
        assert_eq!(cli.problem, Problem::Converter);
        assert_eq!(cli.max_iters, 100);
        assert!(cli.target.is_none());
        assert!(!cli.recover);
    }

    #[test]
    fn parses_solver_options() {
        let cli = Cli::parse_from([
            "watt",
            "inductor",
            "--max-iters",
            "20",
            "--tolerance",
            "1e-6",
            "--target",
            "8.5",
            "--recover",
        ]);
        assert_eq!(cli.problem, Problem::Inductor);
        assert_eq!(cli.max_iters, 20);
        assert_eq!(cli.tolerance, 1e-6);
        assert_eq!(cli.target, Some(8.5));
        assert!(cli.recover);
    }
}
