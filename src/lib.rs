//! # Twine Cycles
//!
//! Idealized power and refrigeration cycle models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Air-standard cycles (Carnot, Brayton, Otto, Diesel, Dual) are solved in
//! closed form for a calorically perfect gas. Real-fluid cycles (Rankine,
//! Rankine with reheat, vapor compression) compose ideal component relations
//! with state lookups through any property model that implements
//! [`PropertyProvider`](support::thermo::capability::PropertyProvider).
//! Enable the `coolprop` feature for a CoolProp-backed provider.
//!
//! ## Crate layout
//!
//! - [`models`]: Cycle [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models, including the ideal-gas
//!   process laws and the path sampler that turns solved states into
//!   continuous curves.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model family's internal `core` module and moves to
//! [`support`] once it is useful across families or outside this crate. Only
//! utilities in [`support`] are part of the public API.

pub mod models;
pub mod support;
