use uom::si::{
    capacitance::farad,
    electric_current::ampere,
    electrical_resistance::ohm,
    f64::{ElectricalResistance, Length, Mass, Power, ThermodynamicTemperature},
    length::meter,
    mass::kilogram,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    converter::{CapacitorReference, ConverterDesign},
    units::{ThermalResistance, kelvin_per_watt},
};

use super::Electrical;

/// Output filter capacitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    pub diameter: Length,
    pub height: Length,
    pub series_resistance: ElectricalResistance,

    /// Case-to-heatsink thermal resistance of the scaled can.
    pub thermal_resistance: ThermalResistance,

    pub mass: Mass,
    pub joule_loss: Power,
    pub hot_spot: ThermodynamicTemperature,
}

/// Scales the reference can to the required capacitance at the design
/// diameter-to-height ratio.
///
/// The hot spot is computed through `hot_spot_resistance`, which the
/// converter sets to the inductor's thermal resistance rather than the
/// can's own. Published results for this converter depend on that coupling.
pub(super) fn size(
    reference: &CapacitorReference,
    design: &ConverterDesign,
    electrical: &Electrical,
    hot_spot_resistance: ThermalResistance,
) -> Capacitor {
    let aspect = design.capacitor_aspect_ratio;
    let d_ref = reference.diameter.get::<meter>();
    let h_ref = reference.height.get::<meter>();

    let capacitance_ratio =
        electrical.capacitance.get::<farad>() / reference.capacitance.get::<farad>();
    let diameter = d_ref * (aspect * capacitance_ratio).cbrt();
    let height = diameter / aspect;

    let d_ratio = diameter / d_ref;
    let h_ratio = height / h_ref;

    let series_resistance = reference.series_resistance.get::<ohm>() * d_ratio.powi(-2);
    let thermal_resistance = reference.thermal_resistance.value * d_ratio.powi(2) * h_ratio;
    let mass = reference.mass.get::<kilogram>() * d_ratio.powi(2) * h_ratio;

    let joule_loss = series_resistance * electrical.capacitor_rms_current.get::<ampere>().powi(2);
    let hot_spot = design.heatsink_temperature.get::<degree_celsius>()
        + joule_loss * hot_spot_resistance.value;

    Capacitor {
        diameter: Length::new::<meter>(diameter),
        height: Length::new::<meter>(height),
        series_resistance: ElectricalResistance::new::<ohm>(series_resistance),
        thermal_resistance: kelvin_per_watt(thermal_resistance),
        mass: Mass::new::<kilogram>(mass),
        joule_loss: Power::new::<watt>(joule_loss),
        hot_spot: ThermodynamicTemperature::new::<degree_celsius>(hot_spot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::converter::ConverterSpec;

    use super::super::electrical::operate;

    #[test]
    fn matches_reference_point() {
        let design = ConverterDesign::from_array([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]);
        let electrical = operate(&ConverterSpec::default(), design.switching_frequency);
        let capacitor = size(&CapacitorReference::default(), &design, &electrical, kelvin_per_watt(1.0));

        assert_relative_eq!(capacitor.mass.get::<kilogram>(), 2.192_806_451_612_903_6, max_relative = 1e-9);
        assert_relative_eq!(capacitor.joule_loss.get::<watt>(), 8.916_487_387_641_565, max_relative = 1e-9);
    }

    #[test]
    fn aspect_ratio_holds() {
        let design = ConverterDesign::from_array([10.0, 65.0, 2.0, 8e-3, 1.0, 2.0, 1.0, 1.0]);
        let electrical = operate(&ConverterSpec::default(), design.switching_frequency);
        let capacitor = size(&CapacitorReference::default(), &design, &electrical, kelvin_per_watt(1.0));

        assert_relative_eq!((capacitor.diameter / capacitor.height).value, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn hot_spot_follows_the_given_resistance() {
        let design = ConverterDesign::from_array([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]);
        let electrical = operate(&ConverterSpec::default(), design.switching_frequency);
        let reference = CapacitorReference::default();

        let cool = size(&reference, &design, &electrical, kelvin_per_watt(0.5));
        let hot = size(&reference, &design, &electrical, kelvin_per_watt(1.5));

        let rise = |c: &Capacitor| c.hot_spot.get::<degree_celsius>() - 65.0;
        assert_relative_eq!(rise(&hot), 3.0 * rise(&cool), max_relative = 1e-12);
        assert_eq!(cool.thermal_resistance, hot.thermal_resistance);
    }
}
