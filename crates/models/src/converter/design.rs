use uom::si::{
    f64::{Frequency, ThermodynamicTemperature},
    frequency::kilohertz,
    thermodynamic_temperature::degree_celsius,
};

use crate::units::{CurrentDensity, amperes_per_square_millimeter};

/// Design variables of the DC/DC converter.
///
/// Dimensionless ratios are plain `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConverterDesign {
    /// PWM switching frequency.
    pub switching_frequency: Frequency,

    /// Heatsink base temperature.
    pub heatsink_temperature: ThermodynamicTemperature,

    /// Heatsink width over height.
    pub heatsink_aspect_ratio: f64,

    /// Inductor airgap over pot-core external diameter.
    pub airgap_ratio: f64,

    /// Current density in the inductor winding.
    pub current_density: CurrentDensity,

    /// Capacitor diameter over height.
    pub capacitor_aspect_ratio: f64,

    /// Capacitor oversizing coefficient.
    ///
    /// Carried and reported, but the capacitor scaling laws size the part
    /// from the ripple requirement alone.
    pub capacitor_oversizing: f64,

    /// Switch current rating over RMS switch current.
    pub igbt_oversizing: f64,
}

impl ConverterDesign {
    /// Builds a design from the positional vector
    /// `[f (kHz), T_H (°C), W/H, e/D, J (A/mm²), D/H, k_C, k_IGBT]`.
    #[must_use]
    pub fn from_array(x: [f64; 8]) -> Self {
        Self {
            switching_frequency: Frequency::new::<kilohertz>(x[0]),
            heatsink_temperature: ThermodynamicTemperature::new::<degree_celsius>(x[1]),
            heatsink_aspect_ratio: x[2],
            airgap_ratio: x[3],
            current_density: amperes_per_square_millimeter(x[4]),
            capacitor_aspect_ratio: x[5],
            capacitor_oversizing: x[6],
            igbt_oversizing: x[7],
        }
    }

    /// Returns the positional vector described in [`ConverterDesign::from_array`].
    #[must_use]
    pub fn to_array(&self) -> [f64; 8] {
        [
            self.switching_frequency.get::<kilohertz>(),
            self.heatsink_temperature.get::<degree_celsius>(),
            self.heatsink_aspect_ratio,
            self.airgap_ratio,
            self.current_density.value / 1e6,
            self.capacitor_aspect_ratio,
            self.capacitor_oversizing,
            self.igbt_oversizing,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::frequency::hertz;

    #[test]
    fn positional_units() {
        let design = ConverterDesign::from_array([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]);

        assert_relative_eq!(design.switching_frequency.get::<hertz>(), 10e3);
        assert_relative_eq!(design.current_density.value, 1e6);
        assert_relative_eq!(design.heatsink_temperature.get::<degree_celsius>(), 65.0, epsilon = 1e-12);
    }

    #[test]
    fn array_round_trip_is_close() {
        let x = [12.5, 55.0, 2.5, 0.02, 6.0, 1.5, 1.0, 2.0];
        let back = ConverterDesign::from_array(x).to_array();
        for (a, b) in x.iter().zip(&back) {
            assert_relative_eq!(a, b, max_relative = 1e-12);
        }
    }
}
