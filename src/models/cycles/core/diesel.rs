//! Air-standard Diesel cycle.

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

/// Boundary conditions for an air-standard Diesel cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieselInput {
    pub intake_pressure: Pressure,
    pub intake_temperature: ThermodynamicTemperature,
    /// Compression ratio `r = v₁/v₂`.
    pub compression_ratio: f64,
    /// Cutoff ratio `rc = v₃/v₂`.
    pub cutoff_ratio: f64,
    pub gas: PerfectGasParameters,
}

impl Default for DieselInput {
    fn default() -> Self {
        Self {
            intake_pressure: Pressure::new::<kilopascal>(100.0),
            intake_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            compression_ratio: 18.0,
            cutoff_ratio: 2.0,
            gas: PerfectGasParameters::air(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieselMetrics {
    pub efficiency: Ratio,
    pub heat_in: AvailableEnergy,
    pub heat_out: AvailableEnergy,
    pub net_work: AvailableEnergy,
    pub compression_ratio: f64,
    pub cutoff_ratio: f64,
}

/// Solves an air-standard Diesel cycle.
///
/// Heat is added at constant pressure from state 2 until the volume has grown
/// by the cutoff ratio, then the gas expands isentropically back to `v₁`.
pub(crate) fn solve(input: &DieselInput) -> Result<GasCycle<DieselMetrics, 4>, CycleError> {
    let gas = PerfectGas::new(input.gas)?;

    let p_1 = input.intake_pressure;
    let t_1 = input.intake_temperature;
    let r = input.compression_ratio;
    let rc = input.cutoff_ratio;

    validate::positive("P1 [kPa]", p_1.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::positive("T1 [K]", t_1.get::<kelvin>()).map_err(CycleError::invalid)?;
    validate::above_one("compression ratio r", r).map_err(CycleError::invalid)?;
    validate::above_one("cutoff ratio rc", rc).map_err(CycleError::invalid)?;
    validate::exceeds(("compression ratio r", r), ("cutoff ratio rc", rc))
        .map_err(CycleError::invalid)?;

    let gamma = gas.gamma();

    let v_1 = gas.volume(t_1, p_1);
    let v_2 = v_1 / r;
    let v_3 = v_2 * rc;
    let t_2 = t_1 * r.powf(gamma - 1.0);
    let t_3 = t_2 * rc;
    let t_4 = t_3 * (v_3 / v_1).get::<ratio>().powf(gamma - 1.0);

    let s_1 = SpecificEntropy::ZERO;
    let s_3 = s_1 + gas.entropy_change_at_constant_pressure(t_2, t_3);

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
        state(3, t_3, v_3, s_3),
        state(4, t_4, v_1, s_3),
    ];

    let heat_in: AvailableEnergy = gas.cp() * t_3.minus(t_2);
    let heat_out: AvailableEnergy = gas.cv() * t_4.minus(t_1);

    let metrics = DieselMetrics {
        efficiency: Ratio::new::<ratio>(1.0) - heat_out / heat_in,
        heat_in,
        heat_out,
        net_work: heat_in - heat_out,
        compression_ratio: r,
        cutoff_ratio: rc,
    };

    debug!(
        r,
        rc,
        efficiency = metrics.efficiency.get::<ratio>(),
        "solved Diesel cycle"
    );

    Ok(GasCycle {
        states,
        metrics,
        entropy_basis: EntropyBasis::RelativeToState1,
    })
}
