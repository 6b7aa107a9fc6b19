use std::convert::Infallible;

use uom::si::{magnetic_flux_density::tesla, mass::kilogram};
use watt_core::{Bounds, BoundsError, ConstrainedMinimizationProblem};

use super::{InductorDesign, InductorSizing, InductorSpec};

/// Minimizes inductor mass over airgap and induction.
///
/// Variables are `[airgap (m), induction (T)]` and the margins are those of
/// [`InductorSizing::constraints`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductorProblem {
    bounds: Bounds<2>,
    initial: InductorDesign,
}

impl Default for InductorProblem {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::for_spec(&InductorSpec::default()).unwrap()
    }
}

impl InductorProblem {
    #[must_use]
    pub fn new(bounds: Bounds<2>, initial: InductorDesign) -> Self {
        Self { bounds, initial }
    }

    /// Creates the standard problem for `spec`.
    ///
    /// The airgap ranges over `[0.1 mm, 100 mm]` and the induction over
    /// `[0.1 T, spec.max_induction]`, starting from 10 mm and 0.2 T.
    ///
    /// # Errors
    ///
    /// Returns an error if `spec.max_induction` does not exceed 0.1 T.
    pub fn for_spec(spec: &InductorSpec) -> Result<Self, BoundsError> {
        let bounds = Bounds::new([(1e-4, 0.1), (0.1, spec.max_induction.get::<tesla>())])?;
        Ok(Self::new(bounds, InductorDesign::from_array([10e-3, 0.2])))
    }

    /// Returns the starting design.
    #[must_use]
    pub fn initial(&self) -> InductorDesign {
        self.initial
    }
}

impl ConstrainedMinimizationProblem<2, 2> for InductorProblem {
    type Input = InductorDesign;
    type Output = InductorSizing;
    type Error = Infallible;

    fn bounds(&self) -> Bounds<2> {
        self.bounds
    }

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(InductorDesign::from_array(*x))
    }

    fn objective(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
        Ok(output.total_mass.get::<kilogram>())
    }

    fn constraints(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 2], Self::Error> {
        Ok(output.constraints())
    }
}
