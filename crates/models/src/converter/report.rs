use std::fmt;

use uom::si::{
    area::square_millimeter,
    capacitance::microfarad,
    electric_current::ampere,
    f64::TemperatureInterval,
    frequency::kilohertz,
    inductance::microhenry,
    length::millimeter,
    magnetic_flux_density::tesla,
    mass::kilogram,
    power::{kilowatt, watt},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::ConverterSizing;

impl fmt::Display for ConverterSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let design = &self.design;
        let inductor = &self.inductor;
        let capacitor = &self.capacitor;
        let switch = &self.switch;
        let heatsink = &self.heatsink;

        writeln!(f, "* Optimisation variables:")?;
        writeln!(f, "    Frequency f = {:.2} kHz", design.switching_frequency.get::<kilohertz>())?;
        writeln!(
            f,
            "    Heatsink temperature T_H = {:.2} °C",
            design.heatsink_temperature.get::<degree_celsius>()
        )?;
        writeln!(f, "    Heatsink aspect ratio W/H = {:.2}", design.heatsink_aspect_ratio)?;
        writeln!(f, "    Inductor airgap ratio e/D = {:.4}", design.airgap_ratio)?;
        writeln!(
            f,
            "    Winding current density J = {:.2} A/mm²",
            design.current_density.value / 1e6
        )?;
        writeln!(f, "    Capacitor aspect ratio D/H = {:.2}", design.capacitor_aspect_ratio)?;
        writeln!(f, "    Capacitor oversizing k_C = {:.2}", design.capacitor_oversizing)?;
        writeln!(f, "    IGBT oversizing k_IGBT = {:.2}", design.igbt_oversizing)?;

        writeln!(f, "* Components characteristics:")?;
        writeln!(f, "    Global mass = {:.2} kg", self.total_mass.get::<kilogram>())?;
        writeln!(f, "    Power = {:.2} kW", self.spec.power().get::<kilowatt>())?;
        writeln!(f, "    Efficiency = {:.2} %", 100.0 * self.efficiency())?;

        writeln!(f, "  ---- Inductor")?;
        writeln!(
            f,
            "    Inductance L = {:.1} µH",
            self.electrical.inductance.get::<microhenry>()
        )?;
        writeln!(f, "    Core (2) mass = {:.2} kg", 2.0 * inductor.half_mass.get::<kilogram>())?;
        writeln!(f, "    Coil mass = {:.2} kg", inductor.copper_mass.get::<kilogram>())?;
        writeln!(
            f,
            "    Core dimensions = {:.1} (diameter) x {:.1} (height) mm",
            inductor.diameter.get::<millimeter>(),
            2.0 * inductor.half_height.get::<millimeter>(),
        )?;
        writeln!(f, "    Airgap e = {:.1} mm", inductor.airgap.get::<millimeter>())?;
        writeln!(f, "    A_iron = {:.0} mm^2", inductor.iron_area.get::<square_millimeter>())?;
        writeln!(f, "    Number of turns = {:.0}", inductor.turns.trunc())?;
        writeln!(f, "    Power loss = {:.1} W", inductor.joule_loss.get::<watt>())?;

        writeln!(f, "  ---- Capacitor")?;
        writeln!(
            f,
            "    Capacitance = {:.0} µF",
            self.electrical.capacitance.get::<microfarad>()
        )?;
        writeln!(f, "    Mass = {:.2} kg", capacitor.mass.get::<kilogram>())?;
        writeln!(
            f,
            "    Dimensions = {:.1} (diameter) x {:.1} (height) mm",
            capacitor.diameter.get::<millimeter>(),
            capacitor.height.get::<millimeter>(),
        )?;
        writeln!(f, "    Power loss = {:.2} W", capacitor.joule_loss.get::<watt>())?;

        writeln!(f, "  ---- IGBT + Diode")?;
        writeln!(f, "    Rated current = {:.1} A", switch.rated_current.get::<ampere>())?;
        writeln!(f, "    Power loss IGBT = {:.2} W", switch.igbt.loss().get::<watt>())?;
        writeln!(f, "    Power loss Diode = {:.2} W", switch.diode.loss().get::<watt>())?;

        writeln!(f, "  ---- Heatsink")?;
        writeln!(f, "    Thermal resistance = {:.3} K/W", heatsink.thermal_resistance.value)?;
        writeln!(f, "    Mass = {:.2} kg", heatsink.mass.get::<kilogram>())?;
        writeln!(f, "    L = {:.2} mm", heatsink.length.get::<millimeter>())?;
        writeln!(f, "    W = {:.2} mm", heatsink.width.get::<millimeter>())?;
        writeln!(f, "    H = {:.2} mm", heatsink.height.get::<millimeter>())?;

        writeln!(f, "* Constraints (should be >0):")?;
        writeln!(
            f,
            "    Winding surface margin = {:.3} mm²",
            self.winding_margin().get::<square_millimeter>()
        )?;
        writeln!(f, "    Induction margin = {:.3} T", self.induction_margin().get::<tesla>())?;
        let kelvin = |margin: TemperatureInterval| margin.get::<delta_kelvin>();
        writeln!(
            f,
            "    Temperature margin L = {:.3} K",
            kelvin(self.inductor_temperature_margin())
        )?;
        writeln!(
            f,
            "    Temperature margin C = {:.3} K",
            kelvin(self.capacitor_temperature_margin())
        )?;
        writeln!(
            f,
            "    Temperature margin IGBT = {:.3} K",
            kelvin(self.igbt_temperature_margin())
        )?;
        write!(
            f,
            "    Temperature margin Diode = {:.3} K",
            kelvin(self.diode_temperature_margin())
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::converter::{Converter, ConverterDesign};

    #[test]
    fn reports_reference_point() {
        let sizing = Converter::default()
            .size(&ConverterDesign::from_array([10.0, 65.0, 2.0, 8e-3, 1.0, 1.0, 1.0, 1.0]))
            .unwrap();
        let report = sizing.to_string();

        assert!(report.starts_with("* Optimisation variables:"));
        assert!(report.contains("Frequency f = 10.00 kHz"));
        assert!(report.contains("Global mass = 18.99 kg"));
        assert!(report.contains("Power = 8.7"));
        assert!(report.contains("Inductance L = 74.3 µH"));
        assert!(report.contains("Number of turns = 7"));
        assert!(report.contains("Power loss IGBT = 226.37 W"));
        assert!(report.contains("Temperature margin Diode = -62.784 K"));
        assert!(!report.ends_with('\n'));
    }
}
