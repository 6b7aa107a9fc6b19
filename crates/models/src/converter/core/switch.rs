use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    energy::joule,
    f64::{ElectricCurrent, ElectricalResistance, Energy, Frequency, Power, ThermodynamicTemperature},
    frequency::hertz,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    converter::{ConverterDesign, ConverterSpec, DiodeReference, IgbtReference},
    units::{ThermalResistance, kelvin_per_watt},
};

use super::Electrical;

/// One semiconductor of the switching module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Semiconductor {
    pub on_resistance: ElectricalResistance,

    /// Switching energy for the IGBT, reverse-recovery energy for the diode.
    pub switching_energy: Energy,

    pub thermal_resistance: ThermalResistance,
    pub conduction_loss: Power,
    pub switching_loss: Power,
    pub hot_spot: ThermodynamicTemperature,
}

impl Semiconductor {
    #[must_use]
    pub fn loss(&self) -> Power {
        self.conduction_loss + self.switching_loss
    }
}

/// IGBT and freewheeling diode sharing one module rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchModule {
    /// Module current rating.
    pub rated_current: ElectricCurrent,

    pub igbt: Semiconductor,
    pub diode: Semiconductor,
}

impl SwitchModule {
    #[must_use]
    pub fn loss(&self) -> Power {
        self.igbt.loss() + self.diode.loss()
    }
}

/// Reference characteristics of one device, already expressed in SI.
struct Device {
    threshold_voltage: f64,
    on_resistance: f64,
    switching_energy: f64,
    thermal_resistance: f64,
}

/// Conduction and switching state of one device.
struct Duty {
    mean_current: f64,
    rms_current: f64,
}

pub(super) fn size(
    spec: &ConverterSpec,
    igbt: &IgbtReference,
    diode: &DiodeReference,
    design: &ConverterDesign,
    electrical: &Electrical,
) -> SwitchModule {
    let rated = design.igbt_oversizing * electrical.igbt_rms_current.get::<ampere>();

    // Resistances shrink and energies grow with the rating. Energies also
    // scale with the blocked voltage.
    let current_ratio = rated / igbt.current.get::<ampere>();
    let energy_ratio = current_ratio * spec.bus_voltage.get::<volt>() / igbt.voltage.get::<volt>();

    let frequency = design.switching_frequency;
    let heatsink = design.heatsink_temperature;
    let scale = |device: Device, duty: Duty| {
        semiconductor(&device, &duty, current_ratio, energy_ratio, frequency, heatsink)
    };

    SwitchModule {
        rated_current: ElectricCurrent::new::<ampere>(rated),
        igbt: scale(
            Device {
                threshold_voltage: igbt.threshold_voltage.get::<volt>(),
                on_resistance: igbt.on_resistance.get::<ohm>(),
                switching_energy: igbt.switching_energy.get::<joule>(),
                thermal_resistance: igbt.thermal_resistance.value,
            },
            Duty {
                mean_current: electrical.igbt_mean_current.get::<ampere>(),
                rms_current: electrical.igbt_rms_current.get::<ampere>(),
            },
        ),
        diode: scale(
            Device {
                threshold_voltage: diode.threshold_voltage.get::<volt>(),
                on_resistance: diode.on_resistance.get::<ohm>(),
                switching_energy: diode.recovery_energy.get::<joule>(),
                thermal_resistance: diode.thermal_resistance.value,
            },
            Duty {
                mean_current: electrical.diode_mean_current.get::<ampere>(),
                rms_current: electrical.diode_rms_current.get::<ampere>(),
            },
        ),
    }
}

fn semiconductor(
    device: &Device,
    duty: &Duty,
    current_ratio: f64,
    energy_ratio: f64,
    frequency: Frequency,
    heatsink: ThermodynamicTemperature,
) -> Semiconductor {
    let on_resistance = device.on_resistance / current_ratio;
    let switching_energy = device.switching_energy * energy_ratio;
    let thermal_resistance = device.thermal_resistance / current_ratio;

    let conduction_loss =
        device.threshold_voltage * duty.mean_current + on_resistance * duty.rms_current.powi(2);
    let switching_loss = frequency.get::<hertz>() * switching_energy;
    let hot_spot = heatsink.get::<degree_celsius>()
        + (conduction_loss + switching_loss) * thermal_resistance;

    Semiconductor {
        on_resistance: ElectricalResistance::new::<ohm>(on_resistance),
        switching_energy: Energy::new::<joule>(switching_energy),
        thermal_resistance: kelvin_per_watt(thermal_resistance),
        conduction_loss: Power::new::<watt>(conduction_loss),
        switching_loss: Power::new::<watt>(switching_loss),
        hot_spot: ThermodynamicTemperature::new::<degree_celsius>(hot_spot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::super::electrical::operate;

    fn module(x: [f64; 8]) -> SwitchModule {
        let spec = ConverterSpec::default();
        let design = ConverterDesign::from_array(x);
        let electrical = operate(&spec, design.switching_frequency);
        size(&spec, &IgbtReference::default(), &DiodeReference::default(), &design, &electrical)
    }

    #[test]
    fn matches_reference_point() {
        let switch = module([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]);

        assert_relative_eq!(switch.igbt.loss().get::<watt>(), 226.365_090_747_045_14, max_relative = 1e-9);
        assert_relative_eq!(switch.diode.loss().get::<watt>(), 283.960_087_472_882_66, max_relative = 1e-9);
    }

    #[test]
    fn oversizing_trades_conduction_for_switching() {
        let nominal = module([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]);
        let doubled = module([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 2.0]);

        assert_relative_eq!(
            (doubled.rated_current / nominal.rated_current).value,
            2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            (doubled.igbt.switching_loss / nominal.igbt.switching_loss).value,
            2.0,
            max_relative = 1e-12
        );
        assert!(doubled.igbt.on_resistance < nominal.igbt.on_resistance);
        assert!(doubled.diode.thermal_resistance.value < nominal.diode.thermal_resistance.value);
    }
}
