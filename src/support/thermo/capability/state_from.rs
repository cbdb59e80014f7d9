use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` expresses, at compile time, which pairs of independent
/// variables a model can resolve. If a model does not implement
/// `StateFrom<Input>`, that input is simply not supported (no runtime
/// "not implemented" errors).
///
/// ## Input patterns used by the cycle solvers
///
/// - `(Fluid, Pressure, Quality)`: saturated or two-phase state at a pressure
/// - `(Fluid, ThermodynamicTemperature, Quality)`: saturated state at a temperature
/// - `(Fluid, ThermodynamicTemperature, Pressure)`: single-phase state
/// - `(Fluid, Pressure, SpecificEnthalpy)`: pump and throttle outlets
/// - `(Fluid, Pressure, SpecificEntropy)`: ideal turbine and compressor outlets
///
/// ## Default fluid convenience
///
/// If a model implements `StateFrom<(Fluid, A, B)>` and `Fluid: Default`,
/// then it also implements `StateFrom<(A, B)>`, which enables calls like
/// `water.state_from((pressure, quality))` for marker fluids.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

/// Default-fluid convenience impl.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
