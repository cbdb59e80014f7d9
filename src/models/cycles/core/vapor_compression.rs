//! Ideal vapor-compression refrigeration cycle.

use tracing::debug;
use uom::si::{
    f64::{AvailableEnergy, Pressure, Ratio, TemperatureInterval, ThermodynamicTemperature},
    pressure::kilopascal,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::thermo::{Quality, State, capability::PropertyProvider};

use super::{
    CycleError, FluidCycle, lookup,
    saturation::{self, saturated_liquid, saturated_vapor},
    validate,
};

/// Boundary conditions for an ideal vapor-compression cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporCompressionInput {
    /// Saturation temperature in the evaporator.
    pub evaporator_temperature: ThermodynamicTemperature,
    /// Saturation temperature in the condenser.
    pub condenser_temperature: ThermodynamicTemperature,
    /// Superheat above the evaporator temperature at the compressor inlet.
    pub superheat: TemperatureInterval,
    /// Subcooling below the condenser temperature at the condenser outlet.
    pub subcool: TemperatureInterval,
    pub saturation_points: usize,
}

impl Default for VaporCompressionInput {
    fn default() -> Self {
        Self {
            evaporator_temperature: ThermodynamicTemperature::new::<degree_celsius>(-10.0),
            condenser_temperature: ThermodynamicTemperature::new::<degree_celsius>(40.0),
            superheat: TemperatureInterval::new::<delta_kelvin>(5.0),
            subcool: TemperatureInterval::new::<delta_kelvin>(5.0),
            saturation_points: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporCompressionMetrics {
    pub evaporator_pressure: Pressure,
    pub condenser_pressure: Pressure,
    /// Condenser over evaporator pressure.
    pub pressure_ratio: f64,
    pub compressor_work: AvailableEnergy,
    pub evaporator_heat: AvailableEnergy,
    pub condenser_heat: AvailableEnergy,
    pub cop_refrigeration: Ratio,
    pub cop_heat_pump: Ratio,
    /// Quality leaving the expansion valve, `None` outside the dome.
    pub valve_exit_quality: Option<Quality>,
}

/// Solves an ideal vapor-compression refrigeration cycle.
///
/// The evaporator pressure is the dew pressure at the evaporator temperature
/// and the condenser pressure the bubble pressure at the condenser
/// temperature.
///
/// 1. Compressor inlet, superheated vapor at the evaporator pressure.
/// 2. Isentropic compressor exit at the condenser pressure.
/// 3. Condenser outlet, subcooled liquid at the condenser pressure.
/// 4. Throttled to the evaporator pressure at constant enthalpy.
pub(crate) fn solve<Fluid: Clone>(
    model: &impl PropertyProvider<Fluid>,
    fluid: Fluid,
    input: &VaporCompressionInput,
) -> Result<FluidCycle<Fluid, VaporCompressionMetrics, 4>, CycleError> {
    let t_e = input.evaporator_temperature;
    let t_c = input.condenser_temperature;

    validate::positive("Tevap [K]", t_e.get::<kelvin>()).map_err(CycleError::invalid)?;
    validate::non_negative("superheat [K]", input.superheat.get::<delta_kelvin>())
        .map_err(CycleError::invalid)?;
    validate::non_negative("subcool [K]", input.subcool.get::<delta_kelvin>())
        .map_err(CycleError::invalid)?;
    validate::exceeds(
        ("condenser temperature Tcond [K]", t_c.get::<kelvin>()),
        ("evaporator temperature Tevap [K]", t_e.get::<kelvin>()),
    )
    .map_err(CycleError::boundary)?;

    let p_e = lookup::state(
        model,
        (fluid.clone(), t_e, saturated_vapor()),
        "evaporator saturation pressure",
    )?
    .pressure;
    let p_c = lookup::state(
        model,
        (fluid.clone(), t_c, saturated_liquid()),
        "condenser saturation pressure",
    )?
    .pressure;

    let state_1 = compressor_inlet(model, &fluid, p_e, t_e, input.superheat)?;
    let state_2 = lookup::state(
        model,
        (fluid.clone(), p_c, state_1.entropy),
        "state 2: isentropic compressor exit",
    )?;
    let state_3 = condenser_outlet(model, &fluid, p_c, t_c, input.subcool)?;
    let state_4 = lookup::state(
        model,
        (fluid.clone(), p_e, state_3.enthalpy),
        "state 4: expansion valve exit",
    )?;

    let compressor_work = state_2.enthalpy - state_1.enthalpy;
    let evaporator_heat = state_1.enthalpy - state_3.enthalpy;
    let condenser_heat = state_2.enthalpy - state_3.enthalpy;

    let metrics = VaporCompressionMetrics {
        evaporator_pressure: p_e,
        condenser_pressure: p_c,
        pressure_ratio: (p_c / p_e).get::<ratio>(),
        compressor_work,
        evaporator_heat,
        condenser_heat,
        cop_refrigeration: evaporator_heat / compressor_work,
        cop_heat_pump: condenser_heat / compressor_work,
        valve_exit_quality: state_4.quality,
    };

    debug!(
        evaporator_pressure_kpa = p_e.get::<kilopascal>(),
        condenser_pressure_kpa = p_c.get::<kilopascal>(),
        cop = metrics.cop_refrigeration.get::<ratio>(),
        "solved vapor-compression cycle"
    );

    let saturation = saturation::by_temperature(model, &fluid, t_e, t_c, input.saturation_points);

    Ok(FluidCycle {
        states: [state_1, state_2, state_3, state_4],
        metrics,
        saturation,
    })
}

/// Zero superheat resolves as saturated vapor; a P–T lookup on the dew line is ill-posed.
fn compressor_inlet<Fluid: Clone>(
    model: &impl PropertyProvider<Fluid>,
    fluid: &Fluid,
    p_e: Pressure,
    t_e: ThermodynamicTemperature,
    superheat: TemperatureInterval,
) -> Result<State<Fluid>, CycleError> {
    if superheat.get::<delta_kelvin>() > 0.0 {
        lookup::state(
            model,
            (fluid.clone(), t_e + superheat, p_e),
            "state 1: superheated compressor inlet",
        )
    } else {
        lookup::state(
            model,
            (fluid.clone(), p_e, saturated_vapor()),
            "state 1: saturated compressor inlet",
        )
    }
}

/// Zero subcooling resolves as saturated liquid.
fn condenser_outlet<Fluid: Clone>(
    model: &impl PropertyProvider<Fluid>,
    fluid: &Fluid,
    p_c: Pressure,
    t_c: ThermodynamicTemperature,
    subcool: TemperatureInterval,
) -> Result<State<Fluid>, CycleError> {
    if subcool.get::<delta_kelvin>() > 0.0 {
        lookup::state(
            model,
            (fluid.clone(), t_c - subcool, p_c),
            "state 3: subcooled condenser outlet",
        )
    } else {
        lookup::state(
            model,
            (fluid.clone(), p_c, saturated_liquid()),
            "state 3: saturated condenser outlet",
        )
    }
}
