use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

/// Operating requirements of the buck converter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConverterSpec {
    /// Input bus voltage.
    pub bus_voltage: ElectricPotential,

    /// Average load current.
    pub load_current: ElectricCurrent,

    /// Output voltage across the load.
    pub load_voltage: ElectricPotential,

    pub ambient_temperature: ThermodynamicTemperature,

    /// Peak-to-peak output voltage ripple.
    pub voltage_ripple: ElectricPotential,

    /// Peak-to-peak inductor current ripple.
    pub current_ripple: ElectricCurrent,
}

impl Default for ConverterSpec {
    fn default() -> Self {
        let bus_voltage = ElectricPotential::new::<volt>(150.0);
        let load_current = ElectricCurrent::new::<ampere>(140.0);

        Self {
            bus_voltage,
            load_current,
            load_voltage: ElectricPotential::new::<volt>(62.25),
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(40.0),
            voltage_ripple: bus_voltage * 0.01,
            current_ripple: load_current * 0.35,
        }
    }
}

impl ConverterSpec {
    /// Output power delivered to the load.
    #[must_use]
    pub fn power(&self) -> Power {
        self.load_voltage * self.load_current
    }

    /// Steady-state duty cycle of a buck converter.
    #[must_use]
    pub fn duty_cycle(&self) -> f64 {
        (self.load_voltage / self.bus_voltage).value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    #[test]
    fn default_operating_point() {
        let spec = ConverterSpec::default();

        assert_relative_eq!(spec.power().get::<kilowatt>(), 8.715, max_relative = 1e-12);
        assert_relative_eq!(spec.duty_cycle(), 0.415, max_relative = 1e-12);
        assert_relative_eq!(spec.current_ripple.get::<ampere>(), 49.0, max_relative = 1e-12);
    }
}
