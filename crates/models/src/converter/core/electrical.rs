use uom::si::{
    capacitance::farad,
    electric_current::ampere,
    electric_potential::volt,
    f64::{Capacitance, ElectricCurrent, Frequency, Inductance, Time},
    frequency::hertz,
    inductance::henry,
    time::second,
};

use crate::converter::ConverterSpec;

/// Duty cycle, filter values, and current statistics of the buck stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Electrical {
    pub duty_cycle: f64,
    pub period: Time,

    /// Inductance meeting the current ripple.
    pub inductance: Inductance,

    /// Capacitance meeting the voltage ripple.
    pub capacitance: Capacitance,

    pub inductor_peak_current: ElectricCurrent,
    pub inductor_rms_current: ElectricCurrent,
    pub capacitor_rms_current: ElectricCurrent,
    pub igbt_rms_current: ElectricCurrent,
    pub igbt_mean_current: ElectricCurrent,
    pub diode_rms_current: ElectricCurrent,
    pub diode_mean_current: ElectricCurrent,
}

pub(super) fn operate(spec: &ConverterSpec, frequency: Frequency) -> Electrical {
    let e = spec.bus_voltage.get::<volt>();
    let il = spec.load_current.get::<ampere>();
    let ripple_v = spec.voltage_ripple.get::<volt>();
    let ripple_i = spec.current_ripple.get::<ampere>();

    let alpha = spec.duty_cycle();
    let period = 1.0 / frequency.get::<hertz>();

    let inductance = e * alpha * (1.0 - alpha) * period / ripple_i;
    let capacitance = il * alpha * (1.0 - alpha) * period / ripple_v;

    // Triangular ripple on a DC level.
    let peak = il + ripple_i / 2.0;
    let rms = il * (1.0 + (ripple_i / il).powi(2) / 12.0).sqrt();

    let amps = ElectricCurrent::new::<ampere>;
    Electrical {
        duty_cycle: alpha,
        period: Time::new::<second>(period),
        inductance: Inductance::new::<henry>(inductance),
        capacitance: Capacitance::new::<farad>(capacitance),
        inductor_peak_current: amps(peak),
        inductor_rms_current: amps(rms),
        capacitor_rms_current: amps((alpha * (1.0 - alpha)).sqrt() * rms),
        igbt_rms_current: amps(alpha.sqrt() * rms),
        igbt_mean_current: amps(alpha * il),
        diode_rms_current: amps((1.0 - alpha).sqrt() * rms),
        diode_mean_current: amps((1.0 - alpha) * il),
    }
}
