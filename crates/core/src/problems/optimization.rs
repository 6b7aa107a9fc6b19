use super::Bounds;

/// Defines a constrained minimization problem to be solved.
///
/// A constrained minimization problem maps solver variables to a model input,
/// then computes an objective value and a vector of inequality margins from the
/// model input and output. Solvers search for the input that minimizes the
/// objective while keeping every margin non-negative and every variable
/// within its [`Bounds`].
///
/// The const generic `N` is the number of solver variables and `C` is the
/// number of inequality constraints.
pub trait ConstrainedMinimizationProblem<const N: usize, const C: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the box bounds on the solver variables.
    fn bounds(&self) -> Bounds<N>;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;

    /// Computes the inequality margins from model input/output.
    ///
    /// A margin is feasible when it is greater than or equal to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the margins cannot be computed.
    fn constraints(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; C], Self::Error>;
}
