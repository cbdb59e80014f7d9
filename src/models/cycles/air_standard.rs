//! Air-standard cycle models.
//!
//! Each model is a unit struct implementing [`Model`] whose input is the
//! cycle's boundary conditions and whose output is a solved [`GasCycle`].
//! The process topology of every cycle is available from its `legs()`
//! function, ready to pass to [`GasCycle::path`]:
//!
//! ```
//! use twine_core::Model;
//! use twine_cycles::{
//!     models::cycles::air_standard::{Otto, OttoInput},
//!     support::{process::SamplerConfig, thermo::model::PerfectGas},
//! };
//!
//! let input = OttoInput::default();
//! let cycle = Otto.call(&input).unwrap();
//!
//! let gas = PerfectGas::new(input.gas).unwrap();
//! let path = cycle.path(&Otto::legs(), &gas, &SamplerConfig::default()).unwrap();
//! assert_eq!(path.samples.len(), 317);
//! ```

use twine_core::Model;

use crate::support::process::{
    Leg,
    ProcessKind::{ConstantPressure, ConstantVolume, Isentropic, Isothermal},
};

use super::core::{self, CycleError, GasCycle};

pub use super::core::{
    BraytonInput, BraytonMetrics, CarnotInput, CarnotMetrics, CarnotMode, CarnotPerformance,
    DieselInput, DieselMetrics, DualInput, DualMetrics, OttoInput, OttoMetrics,
};

/// Carnot cycle between two reservoirs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Carnot;

impl Carnot {
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] if `Th ≤ Tc`, `Tc ≤ 0`,
    /// `Δs ≤ 0`, or the gas parameters are non-physical.
    pub fn solve(input: &CarnotInput) -> Result<GasCycle<CarnotMetrics, 4>, CycleError> {
        core::solve_carnot(input)
    }

    /// Isotherm 1→2, isentrope 2→3, isotherm 3→4, isentrope 4→1.
    #[must_use]
    pub const fn legs() -> [Leg; 4] {
        [
            Leg::new(Isothermal, 1, 2),
            Leg::new(Isentropic, 2, 3),
            Leg::new(Isothermal, 3, 4),
            Leg::new(Isentropic, 4, 1),
        ]
    }
}

impl Model for Carnot {
    type Input = CarnotInput;
    type Output = GasCycle<CarnotMetrics, 4>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::solve(input)
    }
}

/// Ideal Brayton (gas turbine) cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brayton;

impl Brayton {
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] if `rp ≤ 1`, `T₃ ≤ T₁`, a
    /// pressure or temperature is not positive, or the gas is non-physical.
    pub fn solve(input: &BraytonInput) -> Result<GasCycle<BraytonMetrics, 4>, CycleError> {
        core::solve_brayton(input)
    }

    #[must_use]
    pub const fn legs() -> [Leg; 4] {
        [
            Leg::new(Isentropic, 1, 2),
            Leg::new(ConstantPressure, 2, 3),
            Leg::new(Isentropic, 3, 4),
            Leg::new(ConstantPressure, 4, 1),
        ]
    }
}

impl Model for Brayton {
    type Input = BraytonInput;
    type Output = GasCycle<BraytonMetrics, 4>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::solve(input)
    }
}

/// Air-standard Otto cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Otto;

impl Otto {
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] if `r ≤ 1`, `T₃ ≤ T₁`, or
    /// the intake state or gas is non-physical.
    pub fn solve(input: &OttoInput) -> Result<GasCycle<OttoMetrics, 4>, CycleError> {
        core::solve_otto(input)
    }

    #[must_use]
    pub const fn legs() -> [Leg; 4] {
        [
            Leg::new(Isentropic, 1, 2),
            Leg::new(ConstantVolume, 2, 3),
            Leg::new(Isentropic, 3, 4),
            Leg::new(ConstantVolume, 4, 1),
        ]
    }
}

impl Model for Otto {
    type Input = OttoInput;
    type Output = GasCycle<OttoMetrics, 4>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::solve(input)
    }
}

/// Air-standard Diesel cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diesel;

impl Diesel {
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] unless `1 < rc < r` and the
    /// intake state and gas are physical.
    pub fn solve(input: &DieselInput) -> Result<GasCycle<DieselMetrics, 4>, CycleError> {
        core::solve_diesel(input)
    }

    #[must_use]
    pub const fn legs() -> [Leg; 4] {
        [
            Leg::new(Isentropic, 1, 2),
            Leg::new(ConstantPressure, 2, 3),
            Leg::new(Isentropic, 3, 4),
            Leg::new(ConstantVolume, 4, 1),
        ]
    }
}

impl Model for Diesel {
    type Input = DieselInput;
    type Output = GasCycle<DieselMetrics, 4>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::solve(input)
    }
}

/// Air-standard Dual (mixed) cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dual;

impl Dual {
    /// Solves the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidParameters`] unless `α > 1`, `1 < rc < r`,
    /// and the intake state and gas are physical.
    pub fn solve(input: &DualInput) -> Result<GasCycle<DualMetrics, 5>, CycleError> {
        core::solve_dual(input)
    }

    #[must_use]
    pub const fn legs() -> [Leg; 5] {
        [
            Leg::new(Isentropic, 1, 2),
            Leg::new(ConstantVolume, 2, 3),
            Leg::new(ConstantPressure, 3, 4),
            Leg::new(Isentropic, 4, 5),
            Leg::new(ConstantVolume, 5, 1),
        ]
    }
}

impl Model for Dual {
    type Input = DualInput;
    type Output = GasCycle<DualMetrics, 5>;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::solve(input)
    }
}
