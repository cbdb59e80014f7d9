//! Cycle derivations.
//!
//! Each cycle lives in its own submodule with its input, metrics, and a
//! `solve` function. Air-standard solvers are closed-form; real-fluid solvers
//! compose ideal component relations with lookups through a
//! [`PropertyProvider`](crate::support::thermo::capability::PropertyProvider).

mod brayton;
mod carnot;
mod diesel;
mod dual;
mod error;
mod lookup;
mod otto;
mod rankine;
mod rankine_reheat;
mod results;
mod saturation;
mod validate;
mod vapor_compression;

#[cfg(test)]
pub(crate) mod test_support;

pub use brayton::{BraytonInput, BraytonMetrics};
pub use carnot::{CarnotInput, CarnotMetrics, CarnotMode, CarnotPerformance};
pub use diesel::{DieselInput, DieselMetrics};
pub use dual::{DualInput, DualMetrics};
pub use error::CycleError;
pub use otto::{OttoInput, OttoMetrics};
pub use rankine::{RankineInput, RankineMetrics};
pub use rankine_reheat::{RankineReheatInput, RankineReheatMetrics};
pub use results::{CyclePath, EntropyBasis, FluidCycle, GasCycle, GasState, SaturationPoint};
pub use vapor_compression::{VaporCompressionInput, VaporCompressionMetrics};

pub(crate) use brayton::solve as solve_brayton;
pub(crate) use carnot::solve as solve_carnot;
pub(crate) use diesel::solve as solve_diesel;
pub(crate) use dual::solve as solve_dual;
pub(crate) use otto::solve as solve_otto;
pub(crate) use rankine::solve as solve_rankine;
pub(crate) use rankine_reheat::solve as solve_rankine_reheat;
pub(crate) use vapor_compression::solve as solve_vapor_compression;
