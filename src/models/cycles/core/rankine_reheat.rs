//! Ideal Rankine cycle with one reheat stage.

use tracing::debug;
use uom::si::{
    f64::{AvailableEnergy, Pressure, Ratio, ThermodynamicTemperature},
    pressure::kilopascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::thermo::{Quality, capability::PropertyProvider};

use super::{
    CycleError, FluidCycle, lookup,
    saturation::{self, saturated_liquid},
    validate,
};

/// Boundary conditions for an ideal reheat Rankine cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankineReheatInput {
    pub condenser_pressure: Pressure,
    pub boiler_pressure: Pressure,
    /// Pressure at which the HP turbine exhausts into the reheater.
    pub reheat_pressure: Pressure,
    /// HP turbine inlet temperature.
    pub turbine_inlet_temperature: ThermodynamicTemperature,
    /// LP turbine inlet temperature, after reheat.
    pub reheat_temperature: ThermodynamicTemperature,
    pub saturation_points: usize,
}

impl Default for RankineReheatInput {
    fn default() -> Self {
        Self {
            condenser_pressure: Pressure::new::<kilopascal>(10.0),
            boiler_pressure: Pressure::new::<kilopascal>(8000.0),
            reheat_pressure: Pressure::new::<kilopascal>(1500.0),
            turbine_inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(450.0),
            reheat_temperature: ThermodynamicTemperature::new::<degree_celsius>(450.0),
            saturation_points: 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankineReheatMetrics {
    pub pump_work: AvailableEnergy,
    pub hp_turbine_work: AvailableEnergy,
    pub lp_turbine_work: AvailableEnergy,
    /// Sum of both turbine stages.
    pub turbine_work: AvailableEnergy,
    pub net_work: AvailableEnergy,
    pub boiler_heat: AvailableEnergy,
    pub reheat_heat: AvailableEnergy,
    /// Boiler plus reheat.
    pub heat_in: AvailableEnergy,
    pub heat_out: AvailableEnergy,
    pub efficiency: Ratio,
    pub back_work_ratio: Ratio,
    /// Quality at the LP turbine exit, `None` if superheated.
    pub lp_exit_quality: Option<Quality>,
}

/// Solves an ideal reheat Rankine cycle.
///
/// States 1–3 follow the basic cycle with a superheated boiler exit. State 4
/// is the HP turbine exit at the reheat pressure, state 5 the reheater outlet,
/// and state 6 the LP turbine exit at the condenser pressure.
pub(crate) fn solve<Fluid: Clone>(
    model: &impl PropertyProvider<Fluid>,
    fluid: Fluid,
    input: &RankineReheatInput,
) -> Result<FluidCycle<Fluid, RankineReheatMetrics, 6>, CycleError> {
    let p_c = input.condenser_pressure;
    let p_b = input.boiler_pressure;
    let p_r = input.reheat_pressure;

    validate::positive("Pc [kPa]", p_c.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::positive("Pb [kPa]", p_b.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::positive("Pr [kPa]", p_r.get::<kilopascal>()).map_err(CycleError::invalid)?;
    validate::exceeds(
        ("boiler pressure Pb [kPa]", p_b.get::<kilopascal>()),
        ("reheat pressure Pr [kPa]", p_r.get::<kilopascal>()),
    )
    .map_err(CycleError::boundary)?;
    validate::exceeds(
        ("reheat pressure Pr [kPa]", p_r.get::<kilopascal>()),
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
    let state_3 = lookup::state(
        model,
        (fluid.clone(), input.turbine_inlet_temperature, p_b),
        "state 3: HP turbine inlet",
    )?;
    let state_4 = lookup::state(
        model,
        (fluid.clone(), p_r, state_3.entropy),
        "state 4: HP turbine exit",
    )?;
    let state_5 = lookup::state(
        model,
        (fluid.clone(), input.reheat_temperature, p_r),
        "state 5: reheater outlet",
    )?;
    let state_6 = lookup::state(
        model,
        (fluid.clone(), p_c, state_5.entropy),
        "state 6: LP turbine exit",
    )?;

    let hp_turbine_work = state_3.enthalpy - state_4.enthalpy;
    let lp_turbine_work = state_5.enthalpy - state_6.enthalpy;
    let turbine_work = hp_turbine_work + lp_turbine_work;
    let net_work = turbine_work - pump_work;

    let boiler_heat = state_3.enthalpy - state_2.enthalpy;
    let reheat_heat = state_5.enthalpy - state_4.enthalpy;
    let heat_in = boiler_heat + reheat_heat;

    let metrics = RankineReheatMetrics {
        pump_work,
        hp_turbine_work,
        lp_turbine_work,
        turbine_work,
        net_work,
        boiler_heat,
        reheat_heat,
        heat_in,
        heat_out: state_6.enthalpy - state_1.enthalpy,
        efficiency: net_work / heat_in,
        back_work_ratio: pump_work / turbine_work,
        lp_exit_quality: state_6.quality,
    };

    debug!(
        efficiency = metrics.efficiency.get::<ratio>(),
        lp_exit_quality = metrics.lp_exit_quality.map(Quality::into_inner),
        "solved reheat Rankine cycle"
    );

    let saturation = saturation::by_pressure(model, &fluid, p_c, p_b, input.saturation_points);

    Ok(FluidCycle {
        states: [state_1, state_2, state_3, state_4, state_5, state_6],
        metrics,
        saturation,
    })
}
