//! Solved cycle representations.

use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::{
    process::{Leg, PathError, PathSample, SamplerConfig, Vertex, sample_path},
    thermo::{State, model::PerfectGas},
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// One state point of an air-standard cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    /// State label, `1..=N` in cycle order.
    pub id: usize,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub volume: SpecificVolume,
    pub entropy: SpecificEntropy,
}

impl Vertex for GasState {
    fn id(&self) -> usize {
        self.id
    }

    fn pressure(&self) -> Pressure {
        self.pressure
    }

    fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    fn volume(&self) -> SpecificVolume {
        self.volume
    }

    fn entropy(&self) -> Option<SpecificEntropy> {
        Some(self.entropy)
    }
}

/// What the entropy values of a cycle are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyBasis {
    /// Entropy on the cycle's own absolute scale (Carnot's `s₁ = 0` rectangle).
    Absolute,
    /// Entropy relative to state 1, which is fixed at zero.
    RelativeToState1,
}

impl EntropyBasis {
    /// Column name used when states or paths are exported as a table.
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Absolute => "s_kJ_per_kgK",
            Self::RelativeToState1 => "s_rel_kJ_per_kgK",
        }
    }
}

/// A solved air-standard cycle: `N` states in loop order plus metrics `M`.
#[derive(Debug, Clone, PartialEq)]
pub struct GasCycle<M, const N: usize> {
    pub states: [GasState; N],
    pub metrics: M,
    pub entropy_basis: EntropyBasis,
}

impl<M, const N: usize> GasCycle<M, N> {
    /// Returns the state with the given label.
    #[must_use]
    pub fn state(&self, id: usize) -> Option<&GasState> {
        self.states.iter().find(|state| state.id == id)
    }

    /// Samples a continuous process curve through this cycle's states.
    ///
    /// The returned path carries this cycle's entropy basis so the entropy
    /// values can be labelled consistently with the states.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] if a leg names an unknown state or the config
    /// requests fewer than two samples for a leg kind in use.
    pub fn path(
        &self,
        legs: &[Leg],
        gas: &PerfectGas,
        config: &SamplerConfig,
    ) -> Result<CyclePath, PathError> {
        Ok(CyclePath {
            samples: sample_path(&self.states, legs, gas, config)?,
            entropy_basis: self.entropy_basis,
        })
    }
}

/// A continuous sampled curve through a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclePath {
    pub samples: Vec<PathSample>,
    pub entropy_basis: EntropyBasis,
}

/// A solved real-fluid cycle.
///
/// States are in loop order; state `k` is `states[k - 1]`. The return leg from
/// the last state to state 1 is implied, not solved.
#[derive(Debug, Clone)]
pub struct FluidCycle<Fluid, M, const N: usize> {
    pub states: [State<Fluid>; N],
    pub metrics: M,
    /// Saturation dome points spanning the cycle's pressure range.
    pub saturation: Vec<SaturationPoint>,
}

impl<Fluid, M, const N: usize> FluidCycle<Fluid, M, N> {
    /// Returns the state with the given 1-based label.
    #[must_use]
    pub fn state(&self, id: usize) -> Option<&State<Fluid>> {
        id.checked_sub(1).and_then(|index| self.states.get(index))
    }
}

/// Saturated liquid and vapor properties at one point on the dome.
///
/// For zeotropic blends the liquid (bubble) values set `temperature` and
/// `pressure`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub liquid_enthalpy: SpecificEnthalpy,
    pub vapor_enthalpy: SpecificEnthalpy,
    pub liquid_entropy: SpecificEntropy,
    pub vapor_entropy: SpecificEntropy,
}
