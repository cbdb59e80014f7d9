//! Ideal Rankine cycle on a real working fluid.

use tracing::debug;
use uom::si::{
    f64::{AvailableEnergy, Pressure, Ratio, ThermodynamicTemperature},
    pressure::kilopascal,
    ratio::ratio,
};

use crate::support::thermo::{Quality, capability::PropertyProvider};

use super::{
    CycleError, FluidCycle, lookup,
    saturation::{self, saturated_liquid, saturated_vapor},
    validate,
};

/// Boundary conditions for an ideal Rankine cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankineInput {
    pub condenser_pressure: Pressure,
    pub boiler_pressure: Pressure,
    /// Turbine inlet temperature, or `None` for saturated vapor at the boiler pressure.
    pub turbine_inlet_temperature: Option<ThermodynamicTemperature>,
    /// Number of saturation dome points between the two pressures.
    pub saturation_points: usize,
}

impl Default for RankineInput {
    fn default() -> Self {
        Self {
            condenser_pressure: Pressure::new::<kilopascal>(10.0),
            boiler_pressure: Pressure::new::<kilopascal>(8000.0),
            turbine_inlet_temperature: None,
            saturation_points: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankineMetrics {
    pub pump_work: AvailableEnergy,
    pub turbine_work: AvailableEnergy,
    pub net_work: AvailableEnergy,
    pub heat_in: AvailableEnergy,
    pub heat_out: AvailableEnergy,
    pub efficiency: Ratio,
    pub back_work_ratio: Ratio,
    /// Quality at the turbine exit, `None` if the expansion ends superheated.
    pub turbine_exit_quality: Option<Quality>,
}

/// Solves an ideal Rankine cycle.
///
/// 1. Saturated liquid at the condenser pressure.
/// 2. Pumped to the boiler pressure with `w = v₁·(P_b − P_c)`.
/// 3. Boiler outlet, saturated or superheated.
/// 4. Isentropic turbine exit at the condenser pressure.
pub(crate) fn solve<Fluid: Clone>(
    model: &impl PropertyProvider<Fluid>,
    fluid: Fluid,
    input: &RankineInput,
) -> Result<FluidCycle<Fluid, RankineMetrics, 4>, CycleError> {
    let p_c = input.condenser_pressure;
    let p_b = input.boiler_pressure;

    validate::positive("Pc [kPa]", p_c.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::positive("Pb [kPa]", p_b.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::exceeds(
        ("boiler pressure Pb [kPa]", p_b.get::<kilopascal>()),
        ("condenser pressure Pc [kPa]", p_c.get::<kilopascal>()),
    )
    .map_err(CycleError::boundary)?;

    let state_1 = lookup::state(
        model,
        (fluid.clone(), p_c, saturated_liquid()),
        "state 1: saturated liquid at condenser pressure",
    )?;

    let pump_work: AvailableEnergy = state_1.volume * (p_b - p_c);
    let state_2 = lookup::state(
        model,
        (fluid.clone(), p_b, state_1.enthalpy + pump_work),
        "state 2: pump exit",
    )?;

    let state_3 = match input.turbine_inlet_temperature {
        None => lookup::state(
            model,
            (fluid.clone(), p_b, saturated_vapor()),
            "state 3: saturated vapor at boiler pressure",
        )?,
        Some(t_3) => lookup::state(
            model,
            (fluid.clone(), t_3, p_b),
            "state 3: superheated vapor at boiler pressure",
        )?,
    };

    let state_4 = lookup::state(
        model,
        (fluid.clone(), p_c, state_3.entropy),
        "state 4: isentropic turbine exit",
    )?;

    let turbine_work = state_3.enthalpy - state_4.enthalpy;
    let heat_in = state_3.enthalpy - state_2.enthalpy;
    let net_work = turbine_work - pump_work;

    let metrics = RankineMetrics {
        pump_work,
        turbine_work,
        net_work,
        heat_in,
        heat_out: state_4.enthalpy - state_1.enthalpy,
        efficiency: net_work / heat_in,
        back_work_ratio: pump_work / turbine_work,
        turbine_exit_quality: state_4.quality,
    };

    debug!(
        efficiency = metrics.efficiency.get::<ratio>(),
        turbine_exit_quality = metrics.turbine_exit_quality.map(Quality::into_inner),
        "solved Rankine cycle"
    );

    let saturation = saturation::by_pressure(model, &fluid, p_c, p_b, input.saturation_points);

    Ok(FluidCycle {
        states: [state_1, state_2, state_3, state_4],
        metrics,
        saturation,
    })
}
