//! Buck DC/DC converter.
//!
//! The converter feeds a DC load from a fixed bus through an IGBT/diode
//! switching module and an LC output filter, all mounted on one heatsink.
//! Eight design variables (see [`ConverterDesign`]) fix the switching
//! frequency, the thermal operating point, and the shape of each component.
//!
//! # Sizing chain
//!
//! 1. The buck waveforms set the filter values and every component current.
//! 2. A reference pot core is scaled to store the filter energy.
//! 3. A reference electrolytic capacitor is scaled to the filter capacitance.
//! 4. The switching module is rated from the IGBT RMS current.
//! 5. The heatsink is sized to evacuate the total losses.
//!
//! The objective is the mass of the inductor, capacitor, and heatsink. The
//! six margins are listed on [`ConverterSizing::constraints`].

mod core;
mod design;
mod problem;
mod reference;
mod report;
mod spec;

pub use self::core::{
    Capacitor, ConverterSizing, Electrical, Heatsink, PotCoreInductor, Semiconductor,
    SwitchModule,
};
pub use design::ConverterDesign;
pub use problem::ConverterProblem;
pub use reference::{CapacitorReference, DiodeReference, IgbtReference, PotCoreReference};
pub use spec::ConverterSpec;

use uom::si::f64::Mass;
use watt_core::Model;

use crate::SizingError;

/// Converter sizing model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Converter {
    pub spec: ConverterSpec,
    pub pot_core: PotCoreReference,
    pub capacitor: CapacitorReference,
    pub igbt: IgbtReference,
    pub diode: DiodeReference,
}

/// What to compute from a converter design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Total mass.
    Objective,

    /// The six margins of [`ConverterSizing::constraints`].
    Constraints,

    /// Human-readable report.
    Report,
}

/// The result matching a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Objective(Mass),
    Constraints([f64; 6]),
    Report(String),
}

impl Converter {
    /// Computes the full sizing of `design`.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonFinite`] if the design lies outside the
    /// domain of the scaling laws, such as a zero frequency or airgap ratio,
    /// or a heatsink colder than the ambient air.
    pub fn size(&self, design: &ConverterDesign) -> Result<ConverterSizing, SizingError> {
        let references = self::core::References {
            pot_core: &self.pot_core,
            capacitor: &self.capacitor,
            igbt: &self.igbt,
            diode: &self.diode,
        };
        self::core::size(&self.spec, &references, design)
    }

    /// Sizes `design` and returns the requested view of the result.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::NonFinite`] if sizing fails.
    pub fn evaluate(
        &self,
        design: &ConverterDesign,
        request: Request,
    ) -> Result<Response, SizingError> {
        let sizing = self.size(design)?;
        Ok(match request {
            Request::Objective => Response::Objective(sizing.total_mass),
            Request::Constraints => Response::Constraints(sizing.constraints()),
            Request::Report => Response::Report(sizing.to_string()),
        })
    }
}

impl Model for Converter {
    type Input = ConverterDesign;
    type Output = ConverterSizing;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.size(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, mass::kilogram, thermodynamic_temperature::degree_celsius,
    };

    const START: [f64; 8] = [10.0, 65.0, 0.1, 8e-3, 1.0, 1.0, 1.0, 1.0];

    #[test]
    fn report_does_not_change_numeric_results() {
        let model = Converter::default();
        let design = ConverterDesign::from_array(START);

        let Ok(Response::Objective(before)) = model.evaluate(&design, Request::Objective) else {
            panic!("expected an objective");
        };
        let Ok(Response::Report(report)) = model.evaluate(&design, Request::Report) else {
            panic!("expected a report");
        };
        let Ok(Response::Objective(after)) = model.evaluate(&design, Request::Objective) else {
            panic!("expected an objective");
        };
        let Ok(Response::Constraints(margins)) = model.evaluate(&design, Request::Constraints)
        else {
            panic!("expected constraints");
        };

        assert!(!report.is_empty());
        assert_eq!(before, after);
        assert_relative_eq!(before.get::<kilogram>(), 22.631_775_627_693_31, max_relative = 1e-9);
        assert_eq!(margins, model.call(&design).unwrap().constraints());
    }

    #[test]
    fn zero_frequency_propagates_through_evaluate() {
        let mut x = START;
        x[0] = 0.0;
        let result = Converter::default().evaluate(&ConverterDesign::from_array(x), Request::Objective);
        assert!(matches!(result, Err(SizingError::NonFinite { .. })));
    }

    #[test]
    fn hotter_ambient_tightens_no_margin_but_grows_the_heatsink() {
        let design = ConverterDesign::from_array([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]);
        let mild = Converter::default();
        let hot = Converter {
            spec: ConverterSpec {
                ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(50.0),
                ..ConverterSpec::default()
            },
            ..Converter::default()
        };

        let mild = mild.call(&design).unwrap();
        let hot = hot.call(&design).unwrap();

        assert_eq!(mild.constraints(), hot.constraints());
        assert!(hot.heatsink.mass > mild.heatsink.mass);
    }
}
