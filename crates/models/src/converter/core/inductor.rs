use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    electric_current::ampere,
    electrical_resistivity::ohm_meter,
    f64::{Area, Length, MagneticFluxDensity, Mass, Power, ThermodynamicTemperature},
    inductance::henry,
    length::meter,
    magnetic_flux_density::tesla,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    converter::{ConverterDesign, PotCoreReference},
    inductor::MU_0,
    units::{Reluctance, ThermalResistance, amperes_per_weber, kelvin_per_watt},
};

use super::Electrical;

/// Pot-core filter inductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotCoreInductor {
    /// External core diameter.
    pub diameter: Length,

    pub airgap: Length,

    /// Dimensionless permeance of the gapped core.
    pub permeance_factor: f64,

    pub reluctance: Reluctance,

    /// Number of turns (not rounded).
    pub turns: f64,

    pub wire_area: Area,
    pub required_winding_area: Area,
    pub iron_area: Area,
    pub winding_area: Area,
    pub half_height: Length,
    pub mean_radius: Length,

    /// Mass of one half core.
    pub half_mass: Mass,

    pub copper_mass: Mass,

    /// Copper plus both half cores.
    pub mass: Mass,

    /// Induction at peak current.
    pub induction: MagneticFluxDensity,

    /// Winding-to-heatsink thermal resistance.
    pub thermal_resistance: ThermalResistance,

    pub joule_loss: Power,
    pub hot_spot: ThermodynamicTemperature,
}

/// Empirical permeance of a gapped pot core versus airgap-to-diameter ratio.
fn permeance_factor(airgap_ratio: f64) -> f64 {
    let lg = airgap_ratio.log10();
    3.86 * airgap_ratio.powf(0.344 - 0.226 * lg - 0.0355 * lg.powi(2))
}

/// Empirical thermal factor of a pot core versus airgap-to-diameter ratio.
fn thermal_factor(airgap_ratio: f64) -> f64 {
    0.0786 + 0.524 * airgap_ratio - 2.04 * airgap_ratio.powi(2)
}

pub(super) fn size(
    reference: &PotCoreReference,
    design: &ConverterDesign,
    electrical: &Electrical,
) -> PotCoreInductor {
    let e_d = design.airgap_ratio;
    let j = design.current_density.value;
    let inductance = electrical.inductance.get::<henry>();
    let peak = electrical.inductor_peak_current.get::<ampere>();
    let rms = electrical.inductor_rms_current.get::<ampere>();

    let d_ref = reference.diameter.get::<meter>();
    let awind_ref = reference.winding_area.get::<square_meter>();
    let k_bob = reference.fill_factor;

    let pi0_m = permeance_factor(e_d);
    let energy = 0.5 * inductance * peak.powi(2);

    // Diameter at which the window holds the copper needed for `energy`.
    let d = (energy * 2.0 * pi0_m * d_ref.powi(4)
        / j.powi(2)
        / k_bob.powi(2)
        / awind_ref.powi(2)
        / MU_0)
        .powf(1.0 / 5.0);
    let scale = d / d_ref;

    let reluctance = pi0_m / MU_0 / d;
    let turns = (inductance * reluctance).sqrt();

    let wire_area = rms / j;
    let required_winding_area = turns * wire_area / k_bob;

    let iron_area = reference.iron_area.get::<square_meter>() * scale.powi(2);
    let winding_area = awind_ref * scale.powi(2);
    let mean_radius = reference.mean_radius.get::<meter>() * scale;
    let half_mass = reference.half_mass.get::<kilogram>() * scale.powi(3);

    let induction = turns * peak / reluctance / iron_area;

    let turn_length = 2.0 * PI * mean_radius;
    let copper_mass =
        turn_length * turns * wire_area * reference.copper_density.get::<kilogram_per_cubic_meter>();

    let thermal_resistance = thermal_factor(e_d) / (0.5 * d);
    let joule_loss = j.powi(2)
        * turn_length
        * turns
        * wire_area
        * reference.copper_resistivity.get::<ohm_meter>();
    let hot_spot =
        design.heatsink_temperature.get::<degree_celsius>() + joule_loss * thermal_resistance;

    PotCoreInductor {
        diameter: Length::new::<meter>(d),
        airgap: Length::new::<meter>(e_d * d),
        permeance_factor: pi0_m,
        reluctance: amperes_per_weber(reluctance),
        turns,
        wire_area: Area::new::<square_meter>(wire_area),
        required_winding_area: Area::new::<square_meter>(required_winding_area),
        iron_area: Area::new::<square_meter>(iron_area),
        winding_area: Area::new::<square_meter>(winding_area),
        half_height: reference.half_height * scale,
        mean_radius: Length::new::<meter>(mean_radius),
        half_mass: Mass::new::<kilogram>(half_mass),
        copper_mass: Mass::new::<kilogram>(copper_mass),
        mass: Mass::new::<kilogram>(copper_mass + 2.0 * half_mass),
        induction: MagneticFluxDensity::new::<tesla>(induction),
        thermal_resistance: kelvin_per_watt(thermal_resistance),
        joule_loss: Power::new::<watt>(joule_loss),
        hot_spot: ThermodynamicTemperature::new::<degree_celsius>(hot_spot),
    }
}
