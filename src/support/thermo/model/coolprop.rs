//! CoolProp-backed fluid property model.
//!
//! This is the real-fluid property provider used by the Rankine and
//! vapor-compression models. Every supported input pair resolves a complete
//! [`State`] from a single `AbstractState` update.

mod error;

use std::{
    marker::PhantomData,
    sync::{Mutex, MutexGuard},
};

use rfluids::{
    io::{FluidInputPair, FluidParam},
    native::AbstractState,
};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::UnitInterval,
    thermo::{
        PropertyError, Quality, State,
        capability::{StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

pub use error::CoolPropError;

/// Trait used to mark fluids as usable with the [`CoolProp`] model.
///
/// Implementors provide the backend and fluid identifiers needed to construct a
/// `CoolProp` `AbstractState`.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub trait CoolPropFluid: Default + Send + Sync + 'static {
    const BACKEND: &'static str;
    const NAME: &'static str;
}

/// A fluid property model backed by `CoolProp`.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub struct CoolProp<F: CoolPropFluid> {
    state: Mutex<AbstractState>,
    _f: PhantomData<F>,
}

impl<F: CoolPropFluid> ThermoModel for CoolProp<F> {
    type Fluid = F;
}

impl<F: CoolPropFluid> CoolProp<F> {
    /// Construct a new CoolProp-backed model instance.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if the underlying `AbstractState` cannot be
    /// created for the given `F::BACKEND` and `F::NAME`.
    pub fn new() -> Result<Self, CoolPropError> {
        let state = AbstractState::new(F::BACKEND, F::NAME)?;
        Ok(Self {
            state: Mutex::new(state),
            _f: PhantomData,
        })
    }

    /// Updates the `AbstractState` from an input pair and reads back a full state.
    ///
    /// CoolProp failures are classified into [`PropertyError`] so every
    /// provider reports the same error type to the cycle solvers.
    fn resolve(
        &self,
        fluid: F,
        pair: FluidInputPair,
        first: f64,
        second: f64,
    ) -> Result<State<F>, PropertyError> {
        self.update_and_read(fluid, pair, first, second)
            .map_err(PropertyError::from)
    }

    fn update_and_read(
        &self,
        fluid: F,
        pair: FluidInputPair,
        first: f64,
        second: f64,
    ) -> Result<State<F>, CoolPropError> {
        let mut abstract_state = self.state.lock()?;
        abstract_state.update(pair, first, second)?;
        read_state(&abstract_state, fluid)
    }
}

/// Reads every cycle property from an updated `AbstractState`.
///
/// CoolProp reports a quality outside `[0, 1]` (typically `-1`) for
/// single-phase states, which maps to `None`.
fn read_state<F>(
    abstract_state: &MutexGuard<'_, AbstractState>,
    fluid: F,
) -> Result<State<F>, CoolPropError> {
    let pressure = abstract_state.keyed_output(FluidParam::P)?;
    let temperature = abstract_state.keyed_output(FluidParam::T)?;
    let density = abstract_state.keyed_output(FluidParam::DMass)?;
    let enthalpy = abstract_state.keyed_output(FluidParam::HMass)?;
    let entropy = abstract_state.keyed_output(FluidParam::SMass)?;

    let quality = abstract_state
        .keyed_output(FluidParam::Q)
        .ok()
        .and_then(|q| UnitInterval::new(q).ok());

    Ok(State {
        pressure: Pressure::new::<pascal>(pressure),
        temperature: ThermodynamicTemperature::new::<kelvin>(temperature),
        volume: SpecificVolume::new::<cubic_meter_per_kilogram>(density.recip()),
        enthalpy: SpecificEnthalpy::new::<joule_per_kilogram>(enthalpy),
        entropy: SpecificEntropy::new::<joule_per_kilogram_kelvin>(entropy),
        quality,
        fluid,
    })
}

impl<F: CoolPropFluid> StateFrom<(F, Pressure, Quality)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, quality): (F, Pressure, Quality),
    ) -> Result<State<F>, Self::Error> {
        self.resolve(
            fluid,
            FluidInputPair::PQ,
            pressure.get::<pascal>(),
            quality.into_inner(),
        )
    }
}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, Quality)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, quality): (F, ThermodynamicTemperature, Quality),
    ) -> Result<State<F>, Self::Error> {
        self.resolve(
            fluid,
            FluidInputPair::QT,
            quality.into_inner(),
            temperature.get::<kelvin>(),
        )
    }
}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, Pressure)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (F, ThermodynamicTemperature, Pressure),
    ) -> Result<State<F>, Self::Error> {
        self.resolve(
            fluid,
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        )
    }
}

impl<F: CoolPropFluid> StateFrom<(F, Pressure, SpecificEnthalpy)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (F, Pressure, SpecificEnthalpy),
    ) -> Result<State<F>, Self::Error> {
        self.resolve(
            fluid,
            FluidInputPair::HMassP,
            enthalpy.get::<joule_per_kilogram>(),
            pressure.get::<pascal>(),
        )
    }
}

impl<F: CoolPropFluid> StateFrom<(F, Pressure, SpecificEntropy)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (F, Pressure, SpecificEntropy),
    ) -> Result<State<F>, Self::Error> {
        self.resolve(
            fluid,
            FluidInputPair::PSMass,
            pressure.get::<pascal>(),
            entropy.get::<joule_per_kilogram_kelvin>(),
        )
    }
}

// CoolProp<F> must be Send + Sync so solvers can share one provider across threads.
// rfluids serializes CoolProp FFI calls and the local mutex keeps each
// update/read sequence atomic.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check<F: CoolPropFluid>() {
        assert_send_sync::<CoolProp<F>>();
    }
};
