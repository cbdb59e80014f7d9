//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted: gas constants for [`PerfectGas`](super::model::PerfectGas), or
//! backend identifiers for `CoolProp` when the `coolprop` feature is enabled.

mod air;
mod refrigerants;
mod water;

pub use air::Air;
pub use refrigerants::{Ammonia, Propane, R22, R32, R134a, R410A};
pub use water::Water;
