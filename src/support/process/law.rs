//! Closed-form process laws for a calorically perfect gas.
//!
//! Each law starts from a known point (pressure, volume, temperature, and the
//! entropy anchor for the leg) and samples toward one end condition. The first
//! sample always reproduces the start point's volume and temperature, and the
//! last sample lands exactly on the end condition.

use uom::si::{
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    pressure::pascal,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::model::PerfectGas;

use super::{PathError, PathSample, ProcessKind};

/// Samples an isentropic leg from `start` to `end_volume`.
///
/// Volume is spaced linearly. Pressure and temperature follow `P·vᵞ = const`
/// and `T·v^(γ−1) = const`, and entropy stays at the start anchor.
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `samples < 2`.
pub fn isentropic(
    gas: &PerfectGas,
    start: &PathSample,
    end_volume: SpecificVolume,
    samples: usize,
) -> Result<Vec<PathSample>, PathError> {
    let gamma = gas.gamma();
    let p_a = start.pressure.get::<pascal>();
    let t_a = start.temperature.get::<kelvin>();
    let v_a = start.volume.get::<cubic_meter_per_kilogram>();
    let v_b = end_volume.get::<cubic_meter_per_kilogram>();

    linspace(ProcessKind::Isentropic, v_a, v_b, samples).map(|volumes| {
        volumes
            .map(|v| {
                let compression = v_a / v;
                PathSample {
                    pressure: Pressure::new::<pascal>(p_a * compression.powf(gamma)),
                    volume: SpecificVolume::new::<cubic_meter_per_kilogram>(v),
                    temperature: ThermodynamicTemperature::new::<kelvin>(
                        t_a * compression.powf(gamma - 1.0),
                    ),
                    entropy: start.entropy,
                }
            })
            .collect()
    })
}

/// Samples a constant-volume leg from `start` to `end_temperature`.
///
/// Temperature is spaced linearly at the start volume, pressure follows
/// `P = R·T/v`, and entropy accumulates as `s_a + cv·ln(T/T_a)`.
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `samples < 2`.
pub fn constant_volume(
    gas: &PerfectGas,
    start: &PathSample,
    end_temperature: ThermodynamicTemperature,
    samples: usize,
) -> Result<Vec<PathSample>, PathError> {
    let t_a = start.temperature.get::<kelvin>();
    let t_b = end_temperature.get::<kelvin>();
    let volume = start.volume;

    linspace(ProcessKind::ConstantVolume, t_a, t_b, samples).map(|temperatures| {
        temperatures
            .map(|t| {
                let temperature = ThermodynamicTemperature::new::<kelvin>(t);
                PathSample {
                    pressure: gas.pressure(temperature, volume),
                    volume,
                    temperature,
                    entropy: start.entropy
                        + gas.entropy_change_at_constant_volume(start.temperature, temperature),
                }
            })
            .collect()
    })
}

/// Samples a constant-pressure leg from `start` to `end_temperature`.
///
/// Temperature is spaced linearly at the start pressure, volume follows
/// `v = R·T/P`, and entropy accumulates as `s_a + cp·ln(T/T_a)`.
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `samples < 2`.
pub fn constant_pressure(
    gas: &PerfectGas,
    start: &PathSample,
    end_temperature: ThermodynamicTemperature,
    samples: usize,
) -> Result<Vec<PathSample>, PathError> {
    let t_a = start.temperature.get::<kelvin>();
    let t_b = end_temperature.get::<kelvin>();
    let pressure = start.pressure;

    linspace(ProcessKind::ConstantPressure, t_a, t_b, samples).map(|temperatures| {
        temperatures
            .map(|t| {
                let temperature = ThermodynamicTemperature::new::<kelvin>(t);
                PathSample {
                    pressure,
                    volume: gas.volume(temperature, pressure),
                    temperature,
                    entropy: start.entropy
                        + gas.entropy_change_at_constant_pressure(start.temperature, temperature),
                }
            })
            .collect()
    })
}

/// Samples an isothermal leg from `start` to `end_volume`.
///
/// Volume is spaced linearly at the start temperature, pressure follows
/// `P = R·T/v`, and entropy accumulates as `s_a + R·ln(v/v_a)`.
///
/// # Errors
///
/// Returns [`PathError::TooFewSamples`] if `samples < 2`.
pub fn isothermal(
    gas: &PerfectGas,
    start: &PathSample,
    end_volume: SpecificVolume,
    samples: usize,
) -> Result<Vec<PathSample>, PathError> {
    let v_a = start.volume.get::<cubic_meter_per_kilogram>();
    let v_b = end_volume.get::<cubic_meter_per_kilogram>();
    let temperature = start.temperature;

    linspace(ProcessKind::Isothermal, v_a, v_b, samples).map(|volumes| {
        volumes
            .map(|v| {
                let volume = SpecificVolume::new::<cubic_meter_per_kilogram>(v);
                PathSample {
                    pressure: gas.pressure(temperature, volume),
                    volume,
                    temperature,
                    entropy: start.entropy
                        + gas.entropy_change_at_constant_temperature(start.volume, volume),
                }
            })
            .collect()
    })
}

/// Evenly spaced values from `a` to `b`, inclusive, with an exact endpoint.
fn linspace(
    kind: ProcessKind,
    a: f64,
    b: f64,
    samples: usize,
) -> Result<impl Iterator<Item = f64>, PathError> {
    if samples < 2 {
        return Err(PathError::TooFewSamples { kind, samples });
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (b - a) / (samples - 1) as f64;
    let last = samples - 1;

    #[allow(clippy::cast_precision_loss)]
    Ok((0..samples).map(move |i| if i == last { b } else { a + step * i as f64 }))
}
