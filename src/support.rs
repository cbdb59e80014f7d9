//! Supporting utilities used by the cycle models.
//!
//! - [`constraint`]: Numeric invariants used to validate boundary conditions.
//! - [`process`]: Ideal-gas process laws and the continuous path sampler.
//! - [`thermo`]: Property capabilities, fluids, and property models.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod process;
pub mod thermo;
pub mod units;
