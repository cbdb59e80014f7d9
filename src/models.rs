//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Today the crate
//! covers one domain, idealized thermodynamic [`cycles`].
//!
//! # Model structure
//!
//! Each model family contains an internal `core` submodule where the actual
//! derivations live. The `core` module is an implementation detail and is
//! **not** part of the public API; the types a caller needs are re-exported
//! next to the models that use them.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the core API, so the same derivation is reachable both as a `Model` and
//! as a plain `solve` call.

pub mod cycles;
