use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    electric_current::ampere,
    energy::joule,
    f64::{Area, Energy, Length, Mass},
    inductance::henry,
    length::meter,
    magnetic_flux_density::tesla,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
};

use crate::{
    SizingError,
    error::finite,
    units::{Reluctance, amperes_per_weber},
};

use super::{ECoreReference, InductorDesign, InductorSpec};

/// Permeability of free space, rounded as in the reference sizing data.
pub(crate) const MU_0: f64 = 1.256e-6;

/// Dimensions and mass of one scaled E core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ECoreDimensions {
    pub a: Length,
    pub b: Length,
    pub c: Length,
    pub d: Length,
    pub e: Length,
    pub f: Length,

    /// Mass of one E core.
    pub mass: Mass,
}

/// Derived physical state of a sized inductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductorSizing {
    /// The design this sizing was computed from.
    pub design: InductorDesign,

    /// Magnetic energy at peak current.
    pub magnetic_energy: Energy,

    /// Iron cross-section of the centre leg.
    pub iron_area: Area,

    /// Reluctance of the airgap.
    pub reluctance: Reluctance,

    /// Number of turns (not rounded).
    pub turns: f64,

    /// Cross-section of one conductor.
    pub wire_area: Area,

    /// Window area the winding needs.
    pub required_winding_area: Area,

    /// One of the two E cores.
    pub core: ECoreDimensions,

    /// Window area the scaled core provides.
    pub available_winding_area: Area,

    /// Largest airgap the core geometry accepts.
    pub max_airgap: Length,

    pub copper_mass: Mass,

    /// Copper plus both cores.
    pub total_mass: Mass,
}

/// Mass breakdown used by life-cycle assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcaParameters {
    pub copper_mass: Mass,

    /// Both E cores.
    pub core_mass: Mass,
}

impl LcaParameters {
    /// Returns `[copper (kg), cores (kg), 0, 0]`.
    ///
    /// The trailing zeros are placeholders for materials an E-core inductor
    /// does not use.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.copper_mass.get::<kilogram>(),
            self.core_mass.get::<kilogram>(),
            0.0,
            0.0,
        ]
    }
}

impl InductorSizing {
    /// Available minus required winding area.
    #[must_use]
    pub fn winding_margin(&self) -> Area {
        self.available_winding_area - self.required_winding_area
    }

    /// Largest accepted airgap minus the actual airgap.
    #[must_use]
    pub fn airgap_margin(&self) -> Length {
        self.max_airgap - self.design.airgap
    }

    /// Returns `[winding margin (m²), airgap margin (m)]`.
    #[must_use]
    pub fn constraints(&self) -> [f64; 2] {
        [
            self.winding_margin().get::<square_meter>(),
            self.airgap_margin().get::<meter>(),
        ]
    }

    #[must_use]
    pub fn lca_parameters(&self) -> LcaParameters {
        LcaParameters {
            copper_mass: self.copper_mass,
            core_mass: self.core.mass * 2.0,
        }
    }
}

pub(super) fn size(
    spec: &InductorSpec,
    reference: &ECoreReference,
    design: &InductorDesign,
) -> Result<InductorSizing, SizingError> {
    let airgap = design.airgap.get::<meter>();
    let induction = design.induction.get::<tesla>();
    let inductance = spec.inductance.get::<henry>();

    let energy = 0.5 * inductance * spec.peak_current.get::<ampere>().powi(2);

    // The energy is stored in the airgap volume at the design induction.
    let iron_area = energy * 2.0 * MU_0 / induction.powi(2) / 2.0 / airgap;
    let reluctance = 2.0 * airgap / MU_0 / iron_area;
    let turns = (inductance * reluctance).sqrt();

    let wire_area = spec.rms_current.get::<ampere>() / spec.current_density.value;
    let required_winding_area = turns * wire_area / spec.fill_factor;

    let core = reference.scaled(Area::new::<square_meter>(iron_area));
    let b = core.b.get::<meter>();
    let c = core.c.get::<meter>();
    let d = core.d.get::<meter>();

    let available_winding_area = 2.0 * d * (b - c) / 2.0;
    let max_airgap = 0.1 * c;

    let mean_turn = 2.0 * PI * (b + c) / 4.0;
    let copper_mass = mean_turn
        * turns
        * wire_area
        * spec.copper_density.get::<kilogram_per_cubic_meter>();
    let total_mass = copper_mass + 2.0 * core.mass.get::<kilogram>();

    for (quantity, value) in [
        ("iron area", iron_area),
        ("reluctance", reluctance),
        ("turn count", turns),
        ("required winding area", required_winding_area),
        ("available winding area", available_winding_area),
        ("maximum airgap", max_airgap),
        ("copper mass", copper_mass),
        ("total mass", total_mass),
    ] {
        finite(quantity, value)?;
    }

    Ok(InductorSizing {
        design: *design,
        magnetic_energy: Energy::new::<joule>(energy),
        iron_area: Area::new::<square_meter>(iron_area),
        reluctance: amperes_per_weber(reluctance),
        turns,
        wire_area: Area::new::<square_meter>(wire_area),
        required_winding_area: Area::new::<square_meter>(required_winding_area),
        core,
        available_winding_area: Area::new::<square_meter>(available_winding_area),
        max_airgap: Length::new::<meter>(max_airgap),
        copper_mass: Mass::new::<kilogram>(copper_mass),
        total_mass: Mass::new::<kilogram>(total_mass),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    fn size_default(x: [f64; 2]) -> Result<InductorSizing, SizingError> {
        size(
            &InductorSpec::default(),
            &ECoreReference::default(),
            &InductorDesign::from_array(x),
        )
    }

    /// Total mass written out from the closed-form sizing equations.
    fn closed_form_mass(e: f64, b_mag: f64) -> f64 {
        let mu_0 = 1.256e-6;
        let energy = 0.5 * 150e-6 * 150.0_f64.powi(2);
        let a_iron = energy * 2.0 * mu_0 / b_mag.powi(2) / 2.0 / e;
        let n = (150e-6 * 2.0 * e / mu_0 / a_iron).sqrt();
        let s_w = 140.0 / 5e6;
        let r = (a_iron / 738e-6).sqrt();
        let m_core = 0.493 * (a_iron / 738e-6).powf(1.5);
        let m_copper = 2.0 * PI * (73.15e-3 * r + 27.5e-3 * r) / 4.0 * n * s_w * 7800.0;
        m_copper + 2.0 * m_core
    }

    #[test]
    fn matches_reference_point() {
        let sizing = size_default([10e-3, 0.2]).unwrap();

        assert_relative_eq!(sizing.iron_area.get::<square_meter>(), 0.005_298_75, max_relative = 1e-9);
        assert_relative_eq!(sizing.turns, 21.231_422_505_307_858, max_relative = 1e-9);
        assert_relative_eq!(sizing.core.mass.get::<kilogram>(), 9.484_676_460_531_396, max_relative = 1e-9);
        assert_relative_eq!(sizing.total_mass.get::<kilogram>(), 20.933_725_743_956_984, max_relative = 1e-9);

        let [winding, airgap] = sizing.constraints();
        assert_relative_eq!(winding, 0.013_554_169_101_868_555, max_relative = 1e-9);
        assert_relative_eq!(airgap, -0.002_631_294_025_142_379, max_relative = 1e-9);
    }

    #[test]
    fn objective_matches_closed_form() {
        for e in [1e-3, 5e-3, 10e-3, 40e-3] {
            for b_mag in [0.1, 0.2, 0.35] {
                let sizing = size_default([e, b_mag]).unwrap();
                assert_relative_eq!(
                    sizing.total_mass.get::<kilogram>(),
                    closed_form_mass(e, b_mag),
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn positive_quantities_for_positive_inputs() {
        for e in [1e-4, 2e-3, 0.05, 0.1] {
            for b_mag in [0.1, 0.25, 0.4] {
                let sizing = size_default([e, b_mag]).unwrap();
                assert!(sizing.iron_area.value > 0.0);
                assert!(sizing.turns > 0.0);
                assert!(sizing.required_winding_area.value > 0.0);
                assert!(sizing.copper_mass.value > 0.0);
                assert!(sizing.core.mass.value > 0.0);
                assert!(sizing.total_mass.value > 0.0);
            }
        }
    }

    #[test]
    fn sizing_is_repeatable() {
        let first = size_default([2e-3, 0.35]).unwrap();
        let second = size_default([2e-3, 0.35]).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.total_mass.value.to_bits(),
            second.total_mass.value.to_bits()
        );
    }

    #[test]
    fn airgap_margin_uses_core_dimension_c() {
        let sizing = size_default([2e-3, 0.35]).unwrap();
        assert_relative_eq!(
            sizing.max_airgap.get::<millimeter>(),
            0.1 * sizing.core.c.get::<millimeter>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(sizing.constraints()[1], 0.007_415_387_123_423_144, max_relative = 1e-9);
    }

    #[test]
    fn rejects_zero_induction() {
        let err = size_default([10e-3, 0.0]).unwrap_err();
        assert_eq!(
            err,
            SizingError::NonFinite {
                quantity: "iron area",
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn rejects_negative_airgap() {
        assert!(size_default([-1e-3, 0.2]).is_err());
    }
}
