//! Solvers for constrained optimization problems.
//!
//! A [`ConstrainedMinimizationProblem`] maps solver variables `x: [f64; N]` to
//! model inputs, calls the model, and extracts a scalar objective together with
//! `C` inequality margins. Solvers in this module search for the `x` within the
//! problem bounds that minimizes the objective while keeping every margin
//! non-negative.
//!
//! # Solvers
//!
//! - [`sqp`] — sequential quadratic programming with a damped BFGS Hessian,
//!   finite-difference gradients, and an exact-penalty line search
//!
//! [`ConstrainedMinimizationProblem`]: watt_core::ConstrainedMinimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod sqp;
