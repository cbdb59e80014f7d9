//! Ideal Brayton cycle (air-standard gas turbine).

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{AvailableEnergy, Pressure, Ratio, ThermodynamicTemperature},
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

/// Boundary conditions for an ideal Brayton cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BraytonInput {
    pub inlet_pressure: Pressure,
    pub inlet_temperature: ThermodynamicTemperature,
    /// Compressor pressure ratio `rp = P₂/P₁`.
    pub pressure_ratio: f64,
    pub turbine_inlet_temperature: ThermodynamicTemperature,
    pub gas: PerfectGasParameters,
}

impl Default for BraytonInput {
    fn default() -> Self {
        Self {
            inlet_pressure: Pressure::new::<kilopascal>(100.0),
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            pressure_ratio: 10.0,
            turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(1400.0),
            gas: PerfectGasParameters::air(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BraytonMetrics {
    pub compressor_work: AvailableEnergy,
    pub turbine_work: AvailableEnergy,
    pub net_work: AvailableEnergy,
    pub heat_in: AvailableEnergy,
    pub heat_out: AvailableEnergy,
    pub efficiency: Ratio,
    /// Compressor work over turbine work.
    pub back_work_ratio: Ratio,
}

/// Solves an ideal Brayton cycle.
///
/// Isentropic compression 1→2, constant-pressure heating 2→3, isentropic
/// expansion 3→4, and constant-pressure cooling 4→1. Entropy is relative to
/// state 1 and `cp = γ·R/(γ−1)` follows from the gas parameters.
pub(crate) fn solve(input: &BraytonInput) -> Result<GasCycle<BraytonMetrics, 4>, CycleError> {
    let gas = PerfectGas::new(input.gas)?;

    let p_1 = input.inlet_pressure;
    let t_1 = input.inlet_temperature;
    let t_3 = input.turbine_inlet_temperature;
    let rp = input.pressure_ratio;

    validate::positive("P1 [kPa]", p_1.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::positive("T1 [K]", t_1.get::<kelvin>()).map_err(CycleError::invalid)?;
    validate::above_one("pressure ratio rp", rp).map_err(CycleError::invalid)?;

    let temperature_ratio = rp.powf((gas.gamma() - 1.0) / gas.gamma());
    let t_2 = t_1 * temperature_ratio;

    // Heat must be added between compressor exit and turbine inlet.
    validate::exceeds(("T3 [K]", t_3.get::<kelvin>()), ("T2 [K]", t_2.get::<kelvin>()))
        .map_err(CycleError::invalid)?;

    let p_2 = p_1 * rp;
    let p_3 = p_2;
    let p_4 = p_1;
    let t_4 = t_3 / temperature_ratio;

    let s_1 = SpecificEntropy::ZERO;
    let s_2 = s_1 + gas.entropy_change((t_1, p_1), (t_2, p_2));
    let s_3 = s_2 + gas.entropy_change((t_2, p_2), (t_3, p_3));
    let s_4 = s_3 + gas.entropy_change((t_3, p_3), (t_4, p_4));

    let state = |id: usize,
                 pressure: Pressure,
                 temperature: ThermodynamicTemperature,
                 entropy: SpecificEntropy| GasState {
        id,
        pressure,
        temperature,
        volume: gas.volume(temperature, pressure),
        entropy,
    };
    let states = [
        state(1, p_1, t_1, s_1),
        state(2, p_2, t_2, s_2),
        state(3, p_3, t_3, s_3),
        state(4, p_4, t_4, s_4),
    ];

    let cp = gas.cp();
    let compressor_work: AvailableEnergy = cp * t_2.minus(t_1);
    let turbine_work: AvailableEnergy = cp * t_3.minus(t_4);
    let heat_in: AvailableEnergy = cp * t_3.minus(t_2);
    let heat_out: AvailableEnergy = cp * t_4.minus(t_1);

    let metrics = BraytonMetrics {
        compressor_work,
        turbine_work,
        net_work: turbine_work - compressor_work,
        heat_in,
        heat_out,
        efficiency: Ratio::new::<ratio>(1.0) - heat_out / heat_in,
        back_work_ratio: compressor_work / turbine_work,
    };

    debug!(
        rp,
        efficiency = metrics.efficiency.get::<ratio>(),
        back_work_ratio = metrics.back_work_ratio.get::<ratio>(),
        "solved Brayton cycle"
    );

    Ok(GasCycle {
        states,
        metrics,
        entropy_basis: EntropyBasis::RelativeToState1,
    })
}
