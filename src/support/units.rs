//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities. This module
//! adds the specific-property aliases that [`uom`] does not name and a helper
//! for subtracting absolute temperatures:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_cycles::support::units::TemperatureDifference;
//!
//! let t3 = ThermodynamicTemperature::new::<kelvin>(1400.0);
//! let t2 = ThermodynamicTemperature::new::<kelvin>(579.2);
//! let delta_t = t3.minus(t2);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant};
pub use temperature_difference::TemperatureDifference;
