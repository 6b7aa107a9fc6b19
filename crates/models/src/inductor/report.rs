use std::fmt;

use uom::si::{
    area::{square_meter, square_millimeter},
    length::millimeter,
    magnetic_flux_density::tesla,
    mass::kilogram,
};

use super::InductorSizing;

impl fmt::Display for InductorSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = &self.core;

        writeln!(f, "* Optimisation variables:")?;
        writeln!(f, "    Airgap e = {:.2} mm", self.design.airgap.get::<millimeter>())?;
        writeln!(f, "    Induction B = {:.2} T", self.design.induction.get::<tesla>())?;

        writeln!(f, "* Components characteristics:")?;
        writeln!(f, "    Core (2) mass = {:.2} kg", 2.0 * core.mass.get::<kilogram>())?;
        writeln!(f, "    Coil mass = {:.2} kg", self.copper_mass.get::<kilogram>())?;
        writeln!(
            f,
            "    Core dimensions = {:.0} x {:.0} x {:.0} mm",
            core.a.get::<millimeter>(),
            2.0 * core.e.get::<millimeter>(),
            2.0 * core.f.get::<millimeter>(),
        )?;
        writeln!(f, "    A_iron = {:.0} mm^2", self.iron_area.get::<square_millimeter>())?;
        writeln!(f, "    Number of turns = {:.0}", self.turns.trunc())?;

        writeln!(f, "* Constraints (should be >0):")?;
        writeln!(
            f,
            "    Winding surface margin = {:.3} mm²",
            self.winding_margin().get::<square_meter>() * 1e6
        )?;
        write!(
            f,
            "    Airgap margin = {:.3} mm",
            self.airgap_margin().get::<millimeter>()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::inductor::{Inductor, InductorDesign};

    #[test]
    fn reports_reference_point() {
        let sizing = Inductor::default()
            .size(&InductorDesign::from_array([10e-3, 0.2]))
            .unwrap();
        let report = sizing.to_string();

        assert!(report.starts_with("* Optimisation variables:"));
        assert!(report.contains("Induction B = 0.20 T"));
        assert!(report.contains("Number of turns = 21"));
        assert!(report.contains("A_iron = 5299 mm^2"));
        assert!(report.contains("Airgap margin = -2.631 mm"));
    }
}
