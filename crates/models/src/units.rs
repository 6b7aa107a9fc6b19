//! Quantity types not provided by `uom::si`.

use uom::{
    si::{
        Quantity, ISQ, SI,
        area::square_meter,
        electric_current::ampere,
        f64::{Area, ElectricCurrent, MagneticFlux, Power, TemperatureInterval},
        magnetic_flux::weber,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, N2, P1, P2, P3, Z0},
};

/// Current density, A/m² in SI.
pub type CurrentDensity = Quantity<ISQ<N2, Z0, Z0, P1, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Magnetic reluctance, A/Wb (1/H) in SI.
pub type Reluctance = Quantity<ISQ<N2, N1, P2, P2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a current density from a value in A/m².
#[must_use]
pub fn amperes_per_square_meter(value: f64) -> CurrentDensity {
    ElectricCurrent::new::<ampere>(value) / Area::new::<square_meter>(1.0)
}

/// Creates a current density from a value in A/mm² (equivalently MA/m²).
#[must_use]
pub fn amperes_per_square_millimeter(value: f64) -> CurrentDensity {
    amperes_per_square_meter(value * 1e6)
}

/// Creates a thermal resistance from a value in K/W.
#[must_use]
pub fn kelvin_per_watt(value: f64) -> ThermalResistance {
    TemperatureInterval::new::<delta_kelvin>(value) / Power::new::<watt>(1.0)
}

/// Creates a reluctance from a value in A/Wb.
#[must_use]
pub fn amperes_per_weber(value: f64) -> Reluctance {
    ElectricCurrent::new::<ampere>(value) / MagneticFlux::new::<weber>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::Length;
    use uom::si::length::millimeter;

    #[test]
    fn current_density_through_a_wire() {
        let j = amperes_per_square_millimeter(5.0);
        let wire = Length::new::<millimeter>(2.0) * Length::new::<millimeter>(1.0);
        let current: ElectricCurrent = j * wire;

        assert_relative_eq!(j.value, 5e6);
        assert_relative_eq!(current.get::<ampere>(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn reluctance_is_inverse_inductance() {
        use uom::si::{f64::Inductance, inductance::henry};

        let inductance: Inductance = 1.0 / amperes_per_weber(4.0);
        assert_relative_eq!(inductance.get::<henry>(), 0.25);
    }

    #[test]
    fn thermal_resistance_times_loss_is_a_temperature_rise() {
        let rise = kelvin_per_watt(0.5) * Power::new::<watt>(40.0);
        assert_relative_eq!(rise.value, 20.0);
    }
}
