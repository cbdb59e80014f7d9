//! Real-fluid cycle models.
//!
//! Each model owns a property model `M` and the working fluid it evaluates.
//! Any model implementing [`PropertyProvider`] for its fluid can drive the
//! cycles, so the derivations stay independent of the correlation set.
//! With the `coolprop` feature enabled:
//!
//! ```ignore
//! use twine_core::Model;
//! use twine_cycles::{
//!     models::cycles::real_fluid::{Rankine, RankineInput},
//!     support::thermo::{fluid::Water, model::CoolProp},
//! };
//!
//! let rankine = Rankine::new(CoolProp::<Water>::new()?);
//! let cycle = rankine.call(&RankineInput::default())?;
//! println!("η = {:?}", cycle.metrics.efficiency);
//! ```

use twine_core::Model;

use crate::support::thermo::capability::{PropertyProvider, ThermoModel};

use super::core::{self, CycleError, FluidCycle};

pub use super::core::{
    RankineInput, RankineMetrics, RankineReheatInput, RankineReheatMetrics,
    VaporCompressionInput, VaporCompressionMetrics,
};

/// Ideal Rankine cycle.
#[derive(Debug, Clone)]
pub struct Rankine<M: ThermoModel> {
    model: M,
    fluid: M::Fluid,
}

/// Ideal Rankine cycle with one reheat stage.
#[derive(Debug, Clone)]
pub struct RankineReheat<M: ThermoModel> {
    model: M,
    fluid: M::Fluid,
}

/// Ideal vapor-compression refrigeration cycle.
#[derive(Debug, Clone)]
pub struct VaporCompression<M: ThermoModel> {
    model: M,
    fluid: M::Fluid,
}

/// Shared constructors and accessors for the fluid-owning models.
macro_rules! fluid_model {
    ($name:ident) => {
        impl<M: ThermoModel> $name<M>
        where
            M::Fluid: Default,
        {
            /// Creates the model for the property model's default fluid.
            pub fn new(model: M) -> Self {
                Self::with_fluid(model, M::Fluid::default())
            }
        }

        impl<M: ThermoModel> $name<M> {
            /// Creates the model for an explicit fluid.
            pub fn with_fluid(model: M, fluid: M::Fluid) -> Self {
                Self { model, fluid }
            }

            pub fn model(&self) -> &M {
                &self.model
            }

            pub fn fluid(&self) -> &M::Fluid {
                &self.fluid
            }
        }
    };
}

fluid_model!(Rankine);
fluid_model!(RankineReheat);
fluid_model!(VaporCompression);

impl<M, F> Rankine<M>
where
    M: PropertyProvider<F> + ThermoModel<Fluid = F>,
    F: Clone,
{
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] if a pressure is not positive
    /// or the boiler pressure does not exceed the condenser pressure, and
    /// [`CycleError::ThermoModelFailed`] if the property model rejects a state.
    pub fn solve(
        &self,
        input: &RankineInput,
    ) -> Result<FluidCycle<F, RankineMetrics, 4>, CycleError> {
        core::solve_rankine(&self.model, self.fluid.clone(), input)
    }
}

impl<M, F> Model for Rankine<M>
where
    M: PropertyProvider<F> + ThermoModel<Fluid = F>,
    F: Clone,
{
    type Input = RankineInput;
    type Output = FluidCycle<F, RankineMetrics, 4>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}

impl<M, F> RankineReheat<M>
where
    M: PropertyProvider<F> + ThermoModel<Fluid = F>,
    F: Clone,
{
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] unless `Pb > Pr > Pc > 0`, and
    /// [`CycleError::ThermoModelFailed`] if the property model rejects a state.
    pub fn solve(
        &self,
        input: &RankineReheatInput,
    ) -> Result<FluidCycle<F, RankineReheatMetrics, 6>, CycleError> {
        core::solve_rankine_reheat(&self.model, self.fluid.clone(), input)
    }
}

impl<M, F> Model for RankineReheat<M>
where
    M: PropertyProvider<F> + ThermoModel<Fluid = F>,
    F: Clone,
{
    type Input = RankineReheatInput;
    type Output = FluidCycle<F, RankineReheatMetrics, 6>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}

impl<M, F> VaporCompression<M>
where
    M: PropertyProvider<F> + ThermoModel<Fluid = F>,
    F: Clone,
{
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] if the condenser is not
    /// warmer than the evaporator or an offset is negative, and
    /// [`CycleError::ThermoModelFailed`] if the property model rejects a state.
    pub fn solve(
        &self,
        input: &VaporCompressionInput,
    ) -> Result<FluidCycle<F, VaporCompressionMetrics, 4>, CycleError> {
        core::solve_vapor_compression(&self.model, self.fluid.clone(), input)
    }
}

impl<M, F> Model for VaporCompression<M>
where
    M: PropertyProvider<F> + ThermoModel<Fluid = F>,
    F: Clone,
{
    type Input = VaporCompressionInput;
    type Output = FluidCycle<F, VaporCompressionMetrics, 4>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
