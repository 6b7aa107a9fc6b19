use uom::si::{
    f64::{Length, MagneticFluxDensity},
    length::meter,
    magnetic_flux_density::tesla,
};

/// Design variables of the inductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductorDesign {
    /// Total airgap length.
    pub airgap: Length,

    /// Peak induction in the iron.
    pub induction: MagneticFluxDensity,
}

impl InductorDesign {
    #[must_use]
    pub fn new(airgap: Length, induction: MagneticFluxDensity) -> Self {
        Self { airgap, induction }
    }

    /// Builds a design from `[airgap (m), induction (T)]`.
    #[must_use]
    pub fn from_array(x: [f64; 2]) -> Self {
        Self {
            airgap: Length::new::<meter>(x[0]),
            induction: MagneticFluxDensity::new::<tesla>(x[1]),
        }
    }

    /// Returns `[airgap (m), induction (T)]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.airgap.get::<meter>(), self.induction.get::<tesla>()]
    }
}
