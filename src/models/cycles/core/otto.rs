//! Air-standard Otto cycle.

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{AvailableEnergy, Pressure, Ratio, SpecificVolume, ThermodynamicTemperature},
        pressure::kilopascal,
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    thermo::model::{PerfectGas, PerfectGasParameters},
    units::{SpecificEntropy, TemperatureDifference},
};

use super::{CycleError, EntropyBasis, GasCycle, GasState, validate};

/// Boundary conditions for an air-standard Otto cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OttoInput {
    pub intake_pressure: Pressure,
    pub intake_temperature: ThermodynamicTemperature,
    /// Compression ratio `r = v₁/v₂`.
    pub compression_ratio: f64,
    /// Temperature at the end of constant-volume heat addition.
    pub peak_temperature: ThermodynamicTemperature,
    pub gas: PerfectGasParameters,
}

impl Default for OttoInput {
    fn default() -> Self {
        Self {
            intake_pressure: Pressure::new::<kilopascal>(100.0),
            intake_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            compression_ratio: 8.0,
            peak_temperature: ThermodynamicTemperature::new::<kelvin>(1800.0),
            gas: PerfectGasParameters::air(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OttoMetrics {
    pub efficiency: Ratio,
    pub heat_in: AvailableEnergy,
    pub heat_out: AvailableEnergy,
    pub net_work: AvailableEnergy,
    pub compression_ratio: f64,
}

/// Solves an air-standard Otto cycle.
///
/// States 1–4 are intake, end of compression, peak, and end of expansion.
/// The volume scale is `v₁ = R·T₁/P₁` and entropy is relative to state 1.
pub(crate) fn solve(input: &OttoInput) -> Result<GasCycle<OttoMetrics, 4>, CycleError> {
    let gas = PerfectGas::new(input.gas)?;

    let p_1 = input.intake_pressure;
    let t_1 = input.intake_temperature;
    let t_3 = input.peak_temperature;
    let r = input.compression_ratio;

    validate::positive("P1 [kPa]", p_1.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::positive("T1 [K]", t_1.get::<kelvin>()).map_err(CycleError::invalid)?;
    validate::above_one("compression ratio r", r).map_err(CycleError::invalid)?;

    let temperature_ratio = r.powf(gas.gamma() - 1.0);
    let t_2 = t_1 * temperature_ratio;

    // The constant-volume leg 2→3 must add heat.
    validate::exceeds(("T3 [K]", t_3.get::<kelvin>()), ("T2 [K]", t_2.get::<kelvin>()))
        .map_err(CycleError::invalid)?;

    let v_1 = gas.volume(t_1, p_1);
    let v_2 = v_1 / r;
    let t_4 = t_3 / temperature_ratio;

    let s_1 = SpecificEntropy::ZERO;
    let s_3 = s_1 + gas.entropy_change_at_constant_volume(t_2, t_3);

    let state = |id: usize,
                 temperature: ThermodynamicTemperature,
                 volume: SpecificVolume,
                 entropy: SpecificEntropy| GasState {
        id,
        pressure: gas.pressure(temperature, volume),
        temperature,
        volume,
        entropy,
    };
    let states = [
        state(1, t_1, v_1, s_1),
        state(2, t_2, v_2, s_1),
        state(3, t_3, v_2, s_3),
        state(4, t_4, v_1, s_3),
    ];

    let cv = gas.cv();
    let heat_in: AvailableEnergy = cv * t_3.minus(t_2);
    let heat_out: AvailableEnergy = cv * t_4.minus(t_1);

    let metrics = OttoMetrics {
        efficiency: Ratio::new::<ratio>(1.0) - heat_out / heat_in,
        heat_in,
        heat_out,
        net_work: heat_in - heat_out,
        compression_ratio: r,
    };

    debug!(
        r,
        efficiency = metrics.efficiency.get::<ratio>(),
        "solved Otto cycle"
    );

    Ok(GasCycle {
        states,
        metrics,
        entropy_basis: EntropyBasis::RelativeToState1,
    })
}
