use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Vapor mass fraction of a two-phase mixture.
pub type Quality = Constrained<f64, UnitInterval>;

/// A fully resolved real-fluid state.
///
/// Property models return a `State` from any supported pair of independent
/// variables (see [`StateFrom`](super::capability::StateFrom)), so callers
/// read every property they need from one lookup.
///
/// The `quality` is `None` outside the saturation dome, where a vapor mass
/// fraction has no meaning. Callers must handle that case explicitly rather
/// than receive a sentinel value.
///
/// # Example
///
/// ```
/// use twine_cycles::support::thermo::{State, fluid::Water};
/// use twine_cycles::support::units::{SpecificEnthalpy, SpecificEntropy};
/// use uom::si::{
///     available_energy::kilojoule_per_kilogram,
///     f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
///     pressure::kilopascal,
///     specific_heat_capacity::kilojoule_per_kilogram_kelvin,
///     specific_volume::cubic_meter_per_kilogram,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State {
///     pressure: Pressure::new::<kilopascal>(10.0),
///     temperature: ThermodynamicTemperature::new::<kelvin>(318.96),
///     volume: SpecificVolume::new::<cubic_meter_per_kilogram>(0.00101),
///     enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(191.81),
///     entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.6492),
///     quality: None,
///     fluid: Water,
/// };
/// assert!(state.quality.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub volume: SpecificVolume,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
    pub quality: Option<Quality>,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Returns the quality as a plain fraction, if the state is two-phase.
    #[must_use]
    pub fn quality_fraction(&self) -> Option<f64> {
        self.quality.map(Constrained::into_inner)
    }

    /// Returns `true` if the state lies inside the saturation dome.
    #[must_use]
    pub fn is_two_phase(&self) -> bool {
        self.quality.is_some()
    }
}
