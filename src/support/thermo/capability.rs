//! Capability traits used to query and construct thermodynamic states.

mod base;
mod provider;
mod state_from;

pub use base::ThermoModel;
pub use provider::PropertyProvider;
pub use state_from::StateFrom;
