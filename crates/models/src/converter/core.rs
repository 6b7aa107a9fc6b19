mod capacitor;
mod electrical;
mod heatsink;
mod inductor;
mod switch;

pub use capacitor::Capacitor;
pub use electrical::Electrical;
pub use heatsink::Heatsink;
pub use inductor::PotCoreInductor;
pub use switch::{Semiconductor, SwitchModule};

use uom::si::{
    area::square_meter,
    f64::{Area, MagneticFluxDensity, Mass, Power, TemperatureInterval},
    magnetic_flux_density::tesla,
    mass::kilogram,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::{SizingError, error::finite};

use super::{
    CapacitorReference, ConverterDesign, ConverterSpec, DiodeReference, IgbtReference,
    PotCoreReference,
};

/// Full sizing of the buck converter at one design point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConverterSizing {
    pub spec: ConverterSpec,
    pub design: ConverterDesign,
    pub electrical: Electrical,
    pub inductor: PotCoreInductor,
    pub capacitor: Capacitor,
    pub switch: SwitchModule,
    pub heatsink: Heatsink,

    /// Inductor, capacitor, and heatsink.
    pub total_mass: Mass,

    limits: Limits,
}

/// Operating limits the margins are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Limits {
    max_induction: MagneticFluxDensity,
    inductor_temperature: f64,
    capacitor_temperature: f64,
    junction_temperature: f64,
}

impl ConverterSizing {
    /// Losses dissipated through the heatsink.
    #[must_use]
    pub fn total_loss(&self) -> Power {
        self.inductor.joule_loss + self.capacitor.joule_loss + self.switch.loss()
    }

    /// Output power over output plus dissipated power.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        let output = self.spec.power();
        (output / (output + self.total_loss())).value
    }

    /// Available minus required winding window of the inductor.
    #[must_use]
    pub fn winding_margin(&self) -> Area {
        self.inductor.winding_area - self.inductor.required_winding_area
    }

    /// Induction headroom of the inductor core.
    #[must_use]
    pub fn induction_margin(&self) -> MagneticFluxDensity {
        self.limits.max_induction - self.inductor.induction
    }

    #[must_use]
    pub fn inductor_temperature_margin(&self) -> TemperatureInterval {
        headroom(
            self.limits.inductor_temperature,
            self.inductor.hot_spot.get::<degree_celsius>(),
        )
    }

    #[must_use]
    pub fn capacitor_temperature_margin(&self) -> TemperatureInterval {
        headroom(
            self.limits.capacitor_temperature,
            self.capacitor.hot_spot.get::<degree_celsius>(),
        )
    }

    #[must_use]
    pub fn igbt_temperature_margin(&self) -> TemperatureInterval {
        headroom(
            self.limits.junction_temperature,
            self.switch.igbt.hot_spot.get::<degree_celsius>(),
        )
    }

    #[must_use]
    pub fn diode_temperature_margin(&self) -> TemperatureInterval {
        headroom(
            self.limits.junction_temperature,
            self.switch.diode.hot_spot.get::<degree_celsius>(),
        )
    }

    /// Margins in SI units: `[m², T, K, K, K, K]`.
    ///
    /// In order: winding, induction, and the inductor, capacitor, IGBT and
    /// diode temperatures. The design is feasible when all are non-negative.
    #[must_use]
    pub fn constraints(&self) -> [f64; 6] {
        [
            self.winding_margin().get::<square_meter>(),
            self.induction_margin().get::<tesla>(),
            self.inductor_temperature_margin().get::<delta_kelvin>(),
            self.capacitor_temperature_margin().get::<delta_kelvin>(),
            self.igbt_temperature_margin().get::<delta_kelvin>(),
            self.diode_temperature_margin().get::<delta_kelvin>(),
        ]
    }
}

fn headroom(limit: f64, hot_spot: f64) -> TemperatureInterval {
    TemperatureInterval::new::<delta_kelvin>(limit - hot_spot)
}

/// Component references used by [`size`].
pub(super) struct References<'a> {
    pub pot_core: &'a PotCoreReference,
    pub capacitor: &'a CapacitorReference,
    pub igbt: &'a IgbtReference,
    pub diode: &'a DiodeReference,
}

pub(super) fn size(
    spec: &ConverterSpec,
    references: &References<'_>,
    design: &ConverterDesign,
) -> Result<ConverterSizing, SizingError> {
    let electrical = electrical::operate(spec, design.switching_frequency);
    let inductor = inductor::size(references.pot_core, design, &electrical);
    let capacitor = capacitor::size(
        references.capacitor,
        design,
        &electrical,
        inductor.thermal_resistance,
    );
    let switch = switch::size(spec, references.igbt, references.diode, design, &electrical);

    let losses = inductor.joule_loss + capacitor.joule_loss + switch.loss();
    let heatsink = heatsink::size(
        inductor.diameter + capacitor.diameter,
        design.heatsink_aspect_ratio,
        design.heatsink_temperature,
        spec.ambient_temperature,
        losses,
    );

    let total_mass = heatsink.mass + inductor.mass + capacitor.mass;

    for (quantity, value) in [
        ("inductance", electrical.inductance.value),
        ("capacitance", electrical.capacitance.value),
        ("pot core diameter", inductor.diameter.value),
        ("turn count", inductor.turns),
        ("induction", inductor.induction.get::<tesla>()),
        ("inductor hot spot", inductor.hot_spot.get::<degree_celsius>()),
        ("capacitor diameter", capacitor.diameter.value),
        ("capacitor hot spot", capacitor.hot_spot.get::<degree_celsius>()),
        ("IGBT hot spot", switch.igbt.hot_spot.get::<degree_celsius>()),
        ("diode hot spot", switch.diode.hot_spot.get::<degree_celsius>()),
        ("total losses", losses.get::<watt>()),
        ("heatsink height", heatsink.height.value),
        ("total mass", total_mass.get::<kilogram>()),
    ] {
        finite(quantity, value)?;
    }

    Ok(ConverterSizing {
        spec: *spec,
        design: *design,
        electrical,
        inductor,
        capacitor,
        switch,
        heatsink,
        total_mass,
        limits: Limits {
            max_induction: references.pot_core.max_induction,
            inductor_temperature: references.pot_core.max_temperature.get::<degree_celsius>(),
            capacitor_temperature: references.capacitor.max_temperature.get::<degree_celsius>(),
            junction_temperature: references.igbt.max_temperature.get::<degree_celsius>(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn size_default(x: [f64; 8]) -> Result<ConverterSizing, SizingError> {
        size(
            &ConverterSpec::default(),
            &References {
                pot_core: &PotCoreReference::default(),
                capacitor: &CapacitorReference::default(),
                igbt: &IgbtReference::default(),
                diode: &DiodeReference::default(),
            },
            &ConverterDesign::from_array(x),
        )
    }

    const REFERENCE_MARGINS: [f64; 6] = [
        0.000_536_053_058_791_968_1,
        0.002_872_790_014_872_395,
        81.331_563_905_287_58,
        6.283_634_781_222_872,
        -4.932_602_466_789_177,
        -62.784_349_785_089_83,
    ];

    #[test]
    fn matches_reference_point() {
        let sizing = size_default([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]).unwrap();

        assert_relative_eq!(sizing.total_mass.get::<kilogram>(), 18.985_878_481_875_343, max_relative = 1e-9);
        assert_relative_eq!(sizing.heatsink.mass.get::<kilogram>(), 7.599_166_120_206_886, max_relative = 1e-9);
        for (margin, expected) in sizing.constraints().into_iter().zip(REFERENCE_MARGINS) {
            assert_relative_eq!(margin, expected, max_relative = 1e-8);
        }
    }

    #[test]
    fn heatsink_aspect_only_moves_the_heatsink() {
        let flat = size_default([10.0, 65.0, 0.1, 8e-3, 1.0, 1.0, 1.0, 1.0]).unwrap();
        let square = size_default([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]).unwrap();

        assert_relative_eq!(flat.total_mass.get::<kilogram>(), 22.631_775_627_693_31, max_relative = 1e-9);
        assert_eq!(flat.constraints(), square.constraints());
        assert_eq!(flat.inductor, square.inductor);
    }

    #[test]
    fn efficiency_accounts_for_every_loss() {
        let sizing = size_default([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]).unwrap();
        let losses = 226.365_090_747_045_14
            + 283.960_087_472_882_66
            + 3.752_661_040_453_901
            + 8.916_487_387_641_565;

        assert_relative_eq!(sizing.total_loss().get::<watt>(), losses, max_relative = 1e-9);
        assert_relative_eq!(sizing.efficiency(), 8715.0 / (8715.0 + losses), max_relative = 1e-9);
    }

    #[test]
    fn zero_airgap_ratio_is_an_error() {
        let error = size_default([10.0, 65.0, 2.0, 0.0, 1.0, 1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(error, SizingError::NonFinite { .. }));
    }

    #[test]
    fn zero_frequency_is_an_error() {
        let error = size_default([0.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(error, SizingError::NonFinite { quantity: "inductance", .. }));
    }

    #[test]
    fn heatsink_below_ambient_is_an_error() {
        let error = size_default([10.0, 35.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(error, SizingError::NonFinite { quantity: "heatsink height", .. }));
    }

    #[test]
    fn sizing_is_repeatable() {
        let x = [12.0, 70.0, 2.5, 0.02, 5.0, 1.5, 2.0, 3.0];
        assert_eq!(size_default(x).unwrap(), size_default(x).unwrap());
    }
}
