use std::convert::Infallible;

use uom::si::mass::kilogram;
use watt_core::{Bounds, ConstrainedMinimizationProblem};

use super::{ConverterDesign, ConverterSizing};

/// Minimizes converter mass over its eight design variables.
///
/// Variables follow [`ConverterDesign::from_array`] and the margins are those
/// of [`ConverterSizing::constraints`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConverterProblem {
    bounds: Bounds<8>,
    initial: ConverterDesign,
}

impl Default for ConverterProblem {
    /// The published problem.
    ///
    /// Its starting heatsink aspect ratio of 0.1 lies below the lower bound
    /// of 2, so the solver starts from the projected point.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        let bounds = Bounds::new([
            (5.0, 15.0),
            (45.0, 75.0),
            (2.0, 3.0),
            (1e-3, 1e-1),
            (1.0, 50.0),
            (0.5, 2.0),
            (1.0, 10.0),
            (1.0, 10.0),
        ])
        .unwrap();

        Self::new(
            bounds,
            ConverterDesign::from_array([10.0, 65.0, 0.1, 8e-3, 1.0, 1.0, 1.0, 1.0]),
        )
    }
}

impl ConverterProblem {
    #[must_use]
    pub fn new(bounds: Bounds<8>, initial: ConverterDesign) -> Self {
        Self { bounds, initial }
    }

    /// Returns the starting design, which may lie outside the bounds.
    #[must_use]
    pub fn initial(&self) -> ConverterDesign {
        self.initial
    }
}

impl ConstrainedMinimizationProblem<8, 6> for ConverterProblem {
    type Input = ConverterDesign;
    type Output = ConverterSizing;
    type Error = Infallible;

    fn bounds(&self) -> Bounds<8> {
        self.bounds
    }

    fn input(&self, x: &[f64; 8]) -> Result<Self::Input, Self::Error> {
        Ok(ConverterDesign::from_array(*x))
    }

    fn objective(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
        Ok(output.total_mass.get::<kilogram>())
    }

    fn constraints(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 6], Self::Error> {
        Ok(output.constraints())
    }
}
