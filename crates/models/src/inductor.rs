//! Gapped E-core inductor.
//!
//! The inductor is sized from two design variables: the airgap length and the
//! peak induction in the iron. The stored energy fixes the iron cross-section,
//! and a reference E core is scaled geometrically to that cross-section.
//!
//! The design is feasible when both margins are non-negative:
//!
//! 1. Winding margin: the core window holds the required copper.
//! 2. Airgap margin: the airgap stays below a tenth of the core's C dimension.

mod core;
mod design;
mod problem;
mod report;
mod spec;

pub use self::core::{ECoreDimensions, InductorSizing, LcaParameters};
pub(crate) use self::core::MU_0;
pub use design::InductorDesign;
pub use problem::InductorProblem;
pub use spec::{ECoreReference, InductorSpec};

use uom::si::f64::Mass;
use watt_core::Model;

use crate::SizingError;

/// Inductor sizing model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Inductor {
    pub spec: InductorSpec,
    pub reference: ECoreReference,
}

/// What to compute from an inductor design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Total mass.
    Objective,

    /// `[winding margin (m²), airgap margin (m)]`.
    Constraints,

    /// Human-readable report.
    Report,

    /// Mass breakdown for life-cycle assessment.
    LcaParameters,
}

/// The result matching a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Objective(Mass),
    Constraints([f64; 2]),
    Report(String),
    LcaParameters(LcaParameters),
}

impl Inductor {
    #[must_use]
    pub fn new(spec: InductorSpec, reference: ECoreReference) -> Self {
        Self { spec, reference }
    }

    /// Computes the full sizing of `design`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonFinite`] if the design lies outside the
    /// domain of the scaling laws (for example a zero airgap).
    pub fn size(&self, design: &InductorDesign) -> Result<InductorSizing, SizingError> {
        self::core::size(&self.spec, &self.reference, design)
    }

    /// Sizes `design` and returns the requested view of the result.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonFinite`] if sizing fails.
    pub fn evaluate(
        &self,
        design: &InductorDesign,
        request: Request,
    ) -> Result<Response, SizingError> {
        let sizing = self.size(design)?;
        Ok(match request {
            Request::Objective => Response::Objective(sizing.total_mass),
            Request::Constraints => Response::Constraints(sizing.constraints()),
            Request::Report => Response::Report(sizing.to_string()),
            Request::LcaParameters => Response::LcaParameters(sizing.lca_parameters()),
        })
    }
}

impl Model for Inductor {
    type Input = InductorDesign;
    type Output = InductorSizing;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.size(input)
    }
}
