use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::Quality,
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::{StateFrom, ThermoModel};

/// Property lookups required by the real-fluid cycle solvers.
///
/// This is the full "resolve by two variables" contract: saturation states by
/// pressure or temperature, single-phase states by pressure and temperature,
/// and arbitrary states by pressure with enthalpy or entropy.
///
/// Implementations must be safe for concurrent read-only queries; solvers
/// only ever borrow a provider immutably.
///
/// This trait is blanket-implemented for every model with the required
/// [`StateFrom`] capabilities.
pub trait PropertyProvider<Fluid>:
    ThermoModel<Fluid = Fluid>
    + StateFrom<(Fluid, Pressure, Quality)>
    + StateFrom<(Fluid, ThermodynamicTemperature, Quality)>
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
    + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
    + StateFrom<(Fluid, Pressure, SpecificEntropy)>
{
}

impl<Fluid, T> PropertyProvider<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + StateFrom<(Fluid, Pressure, Quality)>
        + StateFrom<(Fluid, ThermodynamicTemperature, Quality)>
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
        + StateFrom<(Fluid, Pressure, SpecificEnthalpy)>
        + StateFrom<(Fluid, Pressure, SpecificEntropy)>
{
}
