use uom::si::{
    f64::{Length, Mass, Power, ThermodynamicTemperature},
    length::{meter, millimeter},
    mass::kilogram,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::units::{ThermalResistance, kelvin_per_watt};

/// Finned extruded-aluminium heatsink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heatsink {
    /// Extrusion length, set by the components laid along it.
    pub length: Length,

    pub width: Length,
    pub height: Length,

    /// Base-to-ambient thermal resistance needed to evacuate the losses.
    pub thermal_resistance: ThermalResistance,

    pub mass: Mass,
}

/// Correlation coefficients of the extruded profile family, with
/// dimensions in millimetres.
const RTH_COEFFICIENT: f64 = 5505.0;
const RTH_LENGTH_EXPONENT: f64 = -0.72;
const RTH_ASPECT_EXPONENT: f64 = -0.85;
const RTH_HEIGHT_EXPONENT: f64 = -1.47;
const MASS_COEFFICIENT: f64 = 0.00263;

/// Margin on the row of components mounted on the heatsink.
const LENGTH_ALLOWANCE: f64 = 1.2;

/// Sizes the heatsink holding `footprint` worth of components and
/// dissipating `losses` between the base at `base` and the air at `ambient`.
pub(super) fn size(
    footprint: Length,
    aspect_ratio: f64,
    base: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    losses: Power,
) -> Heatsink {
    let length = footprint.get::<millimeter>() * LENGTH_ALLOWANCE;
    let rise = base.get::<degree_celsius>() - ambient.get::<degree_celsius>();
    let thermal_resistance = rise / losses.get::<watt>();

    let height = (thermal_resistance
        / RTH_COEFFICIENT
        / length.powf(RTH_LENGTH_EXPONENT)
        / aspect_ratio.powf(RTH_ASPECT_EXPONENT))
    .powf(1.0 / RTH_HEIGHT_EXPONENT);
    let width = height * aspect_ratio;

    let mass = MASS_COEFFICIENT
        * width.powf(0.91)
        * height.powf(0.89)
        * Length::new::<millimeter>(length).get::<meter>();

    Heatsink {
        length: Length::new::<millimeter>(length),
        width: Length::new::<millimeter>(width),
        height: Length::new::<millimeter>(height),
        thermal_resistance: kelvin_per_watt(thermal_resistance),
        mass: Mass::new::<kilogram>(mass),
    }
}
