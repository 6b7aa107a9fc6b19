use uom::si::{
    area::square_meter,
    electric_current::ampere,
    f64::{Area, ElectricCurrent, Inductance, Length, MagneticFluxDensity, Mass, MassDensity},
    inductance::microhenry,
    length::millimeter,
    magnetic_flux_density::tesla,
    mass::gram,
    mass_density::kilogram_per_cubic_meter,
};

use crate::units::{CurrentDensity, amperes_per_square_meter};

use super::core::ECoreDimensions;

/// Electrical requirements and winding assumptions for the inductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductorSpec {
    /// Required inductance.
    pub inductance: Inductance,

    /// Peak current the core must carry without saturating.
    pub peak_current: ElectricCurrent,

    /// RMS current, which sets the copper cross-section.
    pub rms_current: ElectricCurrent,

    /// Allowed current density in the winding.
    pub current_density: CurrentDensity,

    /// Fraction of the winding window filled with copper.
    pub fill_factor: f64,

    /// Highest induction allowed in the iron.
    pub max_induction: MagneticFluxDensity,

    /// Density used for the copper mass.
    pub copper_density: MassDensity,
}

impl Default for InductorSpec {
    fn default() -> Self {
        Self {
            inductance: Inductance::new::<microhenry>(150.0),
            peak_current: ElectricCurrent::new::<ampere>(150.0),
            rms_current: ElectricCurrent::new::<ampere>(140.0),
            current_density: amperes_per_square_meter(5e6),
            fill_factor: 0.33,
            max_induction: MagneticFluxDensity::new::<tesla>(0.4),
            copper_density: MassDensity::new::<kilogram_per_cubic_meter>(7800.0),
        }
    }
}

/// Reference E core anchoring the scaling laws.
///
/// The letters follow the usual E-core datasheet drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ECoreReference {
    /// Cross-section of the centre leg.
    pub iron_area: Area,
    pub a: Length,
    pub b: Length,
    pub c: Length,
    pub d: Length,
    pub e: Length,
    pub f: Length,

    /// Mass of one E core.
    pub mass: Mass,
}

impl Default for ECoreReference {
    fn default() -> Self {
        Self {
            iron_area: Area::new::<square_meter>(738e-6),
            a: Length::new::<millimeter>(100.3),
            b: Length::new::<millimeter>(73.15),
            c: Length::new::<millimeter>(27.5),
            d: Length::new::<millimeter>(46.85),
            e: Length::new::<millimeter>(59.4),
            f: Length::new::<millimeter>(27.5),
            mass: Mass::new::<gram>(493.0),
        }
    }
}

impl ECoreReference {
    /// Scales the reference to a core with the given iron cross-section.
    ///
    /// Lengths scale with the square root of the area ratio and mass with its
    /// 3/2 power.
    #[must_use]
    pub fn scaled(&self, iron_area: Area) -> ECoreDimensions {
        let ratio = (iron_area / self.iron_area).value;
        let linear = ratio.sqrt();

        ECoreDimensions {
            a: self.a * linear,
            b: self.b * linear,
            c: self.c * linear,
            d: self.d * linear,
            e: self.e * linear,
            f: self.f * linear,
            mass: self.mass * ratio.powf(1.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass::kilogram;

    #[test]
    fn doubling_the_iron_area() {
        let reference = ECoreReference::default();
        let core = reference.scaled(reference.iron_area * 2.0);

        let linear = 2.0_f64.sqrt();
        for (scaled, original) in [
            (core.a, reference.a),
            (core.b, reference.b),
            (core.c, reference.c),
            (core.d, reference.d),
            (core.e, reference.e),
            (core.f, reference.f),
        ] {
            assert_relative_eq!(
                scaled.get::<millimeter>(),
                original.get::<millimeter>() * linear,
                max_relative = 1e-12
            );
        }
        assert_relative_eq!(
            core.mass.get::<kilogram>(),
            0.493 * 2.0_f64.powf(1.5),
            max_relative = 1e-12
        );
    }

    #[test]
    fn reference_area_reproduces_the_reference() {
        let reference = ECoreReference::default();
        let core = reference.scaled(reference.iron_area);

        assert_relative_eq!(core.b.get::<millimeter>(), 73.15, max_relative = 1e-12);
        assert_relative_eq!(core.mass.get::<kilogram>(), 0.493, max_relative = 1e-12);
    }
}
