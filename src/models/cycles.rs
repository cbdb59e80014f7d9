//! Idealized power and refrigeration cycles.
//!
//! - [`air_standard`]: Carnot, Brayton, Otto, Diesel, and Dual cycles of a
//!   calorically perfect gas, solved in closed form.
//! - [`real_fluid`]: Rankine, Rankine with reheat, and vapor-compression
//!   refrigeration, solved against a property provider.
//!
//! Every model returns its ordered state points together with the cycle's
//! metrics. Air-standard cycles can additionally be sampled into a continuous
//! process path for plotting with [`GasCycle::path`].

pub mod air_standard;
pub mod real_fluid;

pub(crate) mod core;

pub use self::core::{
    CycleError, CyclePath, EntropyBasis, FluidCycle, GasCycle, GasState, SaturationPoint,
};
