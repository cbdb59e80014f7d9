//! Thermodynamic property modeling.
//!
//! Real-fluid cycles never evaluate property correlations themselves. They
//! query a model through the capability traits in [`capability`], resolving
//! each state from two independent variables. Air-standard cycles use the
//! closed-form [`model::PerfectGas`] instead.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::{Quality, State};
