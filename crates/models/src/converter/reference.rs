use std::f64::consts::PI;

use uom::si::{
    area::square_millimeter,
    capacitance::microfarad,
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::milliohm,
    electrical_resistivity::ohm_meter,
    energy::millijoule,
    f64::{
        Area, Capacitance, ElectricCurrent, ElectricPotential, ElectricalResistance,
        ElectricalResistivity, Energy, Length, MagneticFluxDensity, Mass, MassDensity,
        ThermodynamicTemperature,
    },
    length::millimeter,
    magnetic_flux_density::tesla,
    mass::{gram, kilogram},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::units::{ThermalResistance, kelvin_per_watt};

/// Reference pot core and winding assumptions for the filter inductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotCoreReference {
    /// External diameter.
    pub diameter: Length,

    /// Height of one half core.
    pub half_height: Length,

    pub iron_area: Area,
    pub winding_area: Area,

    /// Mean radius of a turn.
    pub mean_radius: Length,

    /// Mass of one half core.
    pub half_mass: Mass,

    /// Fraction of the winding window filled with copper.
    pub fill_factor: f64,

    pub max_induction: MagneticFluxDensity,
    pub max_temperature: ThermodynamicTemperature,
    pub copper_density: MassDensity,
    pub copper_resistivity: ElectricalResistivity,
}

impl Default for PotCoreReference {
    fn default() -> Self {
        Self {
            diameter: Length::new::<millimeter>(66.29),
            half_height: Length::new::<millimeter>(57.3 / 2.0),
            iron_area: Area::new::<square_millimeter>(PI / 4.0 * (29.19_f64.powi(2) - 6.5_f64.powi(2))),
            winding_area: Area::new::<square_millimeter>(43.28 * (54.51 - 28.19) / 2.0),
            mean_radius: Length::new::<millimeter>((54.51 - 28.19) / 2.0),
            half_mass: Mass::new::<gram>(225.0),
            fill_factor: 0.33,
            max_induction: MagneticFluxDensity::new::<tesla>(0.4),
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(150.0),
            copper_density: MassDensity::new::<kilogram_per_cubic_meter>(7800.0),
            copper_resistivity: ElectricalResistivity::new::<ohm_meter>(1.7e-8),
        }
    }
}

/// Reference electrolytic capacitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorReference {
    pub capacitance: Capacitance,
    pub diameter: Length,
    pub height: Length,
    pub series_resistance: ElectricalResistance,
    pub thermal_resistance: ThermalResistance,
    pub mass: Mass,
    pub max_temperature: ThermodynamicTemperature,
}

impl Default for CapacitorReference {
    fn default() -> Self {
        Self {
            capacitance: Capacitance::new::<microfarad>(1000.0),
            diameter: Length::new::<millimeter>(100.0),
            height: Length::new::<millimeter>(155.0),
            series_resistance: ElectricalResistance::new::<milliohm>(3.2),
            thermal_resistance: kelvin_per_watt(3.0),
            mass: Mass::new::<kilogram>(1.5),
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(80.0),
        }
    }
}

/// Reference IGBT of the switching module.
///
/// Its rated current and voltage also anchor the scaling of the module's
/// freewheeling diode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IgbtReference {
    pub current: ElectricCurrent,

    /// Voltage at which the switching energy was characterized.
    pub voltage: ElectricPotential,

    /// Threshold voltage of the on-state model.
    pub threshold_voltage: ElectricPotential,

    pub on_resistance: ElectricalResistance,

    /// Turn-on plus turn-off energy per cycle.
    pub switching_energy: Energy,

    pub thermal_resistance: ThermalResistance,

    /// Junction temperature limit, shared by the diode.
    pub max_temperature: ThermodynamicTemperature,
}

impl Default for IgbtReference {
    fn default() -> Self {
        Self {
            current: ElectricCurrent::new::<ampere>(80.0),
            voltage: ElectricPotential::new::<volt>(600.0),
            threshold_voltage: ElectricPotential::new::<volt>(1.0),
            on_resistance: ElectricalResistance::new::<milliohm>(20.0),
            switching_energy: Energy::new::<millijoule>(8.2),
            thermal_resistance: kelvin_per_watt(0.3),
            max_temperature: ThermodynamicTemperature::new::<degree_celsius>(120.0),
        }
    }
}

/// Reference freewheeling diode of the switching module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodeReference {
    pub threshold_voltage: ElectricPotential,
    pub on_resistance: ElectricalResistance,

    /// Reverse-recovery energy per cycle.
    pub recovery_energy: Energy,

    pub thermal_resistance: ThermalResistance,
}

impl Default for DiodeReference {
    fn default() -> Self {
        Self {
            threshold_voltage: ElectricPotential::new::<volt>(1.0),
            on_resistance: ElectricalResistance::new::<milliohm>(15.0),
            recovery_energy: Energy::new::<millijoule>(17.2),
            thermal_resistance: kelvin_per_watt(0.47),
        }
    }
}
