//! Calorically perfect gas model.
//!
//! `PerfectGas` is the working fluid of every air-standard cycle: an ideal gas
//! equation of state with constant heat capacities fixed by the specific gas
//! constant `R` and the ratio of specific heats `γ`.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p·v = R·T`
//! - Calorically perfect: `cv = R/(γ−1)` and `cp = γ·cv` do not vary with temperature
//!
//! # Entropy
//!
//! Air-standard cycles only ever need entropy differences, so the model
//! exposes the three closed-form changes (`cv·ln(T₂/T₁)`, `cp·ln(T₂/T₁)`,
//! `R·ln(v₂/v₁)`) rather than an absolute entropy with a reference state.

use thiserror::Error;
use uom::si::{
    f64::{Pressure, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature},
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::fluid::Air,
    units::{SpecificEntropy, SpecificGasConstant},
};

use super::ideal_gas_eos;

/// Errors returned when perfect gas constants are non-physical.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PerfectGasError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("ratio of specific heats must be greater than 1, got γ = {gamma}")]
    Gamma { gamma: f64 },
}

/// Constant parameters for the [`PerfectGas`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    pub gas_constant: SpecificGasConstant,
    pub gamma: f64,
}

impl PerfectGasParameters {
    /// Creates parameters from a gas constant and a ratio of specific heats.
    #[must_use]
    pub fn from_gamma(gas_constant: SpecificGasConstant, gamma: f64) -> Self {
        Self {
            gas_constant,
            gamma,
        }
    }

    /// Returns cold air-standard parameters: `R = 0.287 kJ/kg·K`, `γ = 1.4`.
    #[must_use]
    pub fn air() -> Self {
        Self::from_gamma(
            SpecificGasConstant::new::<kilojoule_per_kilogram_kelvin>(0.287),
            1.4,
        )
    }
}

impl Default for PerfectGasParameters {
    fn default() -> Self {
        Air::parameters()
    }
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait PerfectGasFluid {
    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> PerfectGasParameters;
}

/// Perfect gas model (constant `cp`/`cv`) using the ideal gas equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    r: SpecificGasConstant,
    gamma: f64,
    cv: SpecificHeatCapacity,
}

impl PerfectGas {
    /// Creates a perfect gas model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasError`] if `R ≤ 0` or `γ ≤ 1`.
    pub fn new(parameters: PerfectGasParameters) -> Result<Self, PerfectGasError> {
        let PerfectGasParameters {
            gas_constant,
            gamma,
        } = parameters;

        if StrictlyPositive::check(&gas_constant.get::<kilojoule_per_kilogram_kelvin>()).is_err()
        {
            return Err(PerfectGasError::GasConstant { r: gas_constant });
        }

        if StrictlyPositive::check(&(gamma - 1.0)).is_err() {
            return Err(PerfectGasError::Gamma { gamma });
        }

        Ok(Self {
            r: gas_constant,
            gamma,
            cv: gas_constant / (gamma - 1.0),
        })
    }

    /// Creates a perfect gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasError`] if the fluid's constants are non-physical.
    pub fn of<Fluid: PerfectGasFluid>() -> Result<Self, PerfectGasError> {
        Self::new(Fluid::parameters())
    }

    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.r
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the constant-volume specific heat, `cv = R/(γ−1)`.
    #[must_use]
    pub fn cv(&self) -> SpecificHeatCapacity {
        self.cv
    }

    /// Returns the constant-pressure specific heat, `cp = γ·cv`.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cv * self.gamma
    }

    /// Computes pressure with `P = R·T/v`.
    #[must_use]
    pub fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        volume: SpecificVolume,
    ) -> Pressure {
        ideal_gas_eos::pressure(temperature, volume, self.r)
    }

    /// Computes specific volume with `v = R·T/P`.
    #[must_use]
    pub fn volume(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> SpecificVolume {
        ideal_gas_eos::volume(temperature, pressure, self.r)
    }

    /// Entropy change between two states, `cp·ln(T₂/T₁) − R·ln(P₂/P₁)`.
    #[must_use]
    pub fn entropy_change(
        &self,
        from: (ThermodynamicTemperature, Pressure),
        to: (ThermodynamicTemperature, Pressure),
    ) -> SpecificEntropy {
        let (t_1, p_1) = from;
        let (t_2, p_2) = to;

        self.cp() * (t_2 / t_1).get::<ratio>().ln() - self.r * (p_2 / p_1).get::<ratio>().ln()
    }

    /// Entropy change of a constant-volume process, `cv·ln(T₂/T₁)`.
    #[must_use]
    pub fn entropy_change_at_constant_volume(
        &self,
        from: ThermodynamicTemperature,
        to: ThermodynamicTemperature,
    ) -> SpecificEntropy {
        self.cv * (to / from).get::<ratio>().ln()
    }

    /// Entropy change of a constant-pressure process, `cp·ln(T₂/T₁)`.
    #[must_use]
    pub fn entropy_change_at_constant_pressure(
        &self,
        from: ThermodynamicTemperature,
        to: ThermodynamicTemperature,
    ) -> SpecificEntropy {
        self.cp() * (to / from).get::<ratio>().ln()
    }

    /// Entropy change of an isothermal process, `R·ln(v₂/v₁)`.
    #[must_use]
    pub fn entropy_change_at_constant_temperature(
        &self,
        from: SpecificVolume,
        to: SpecificVolume,
    ) -> SpecificEntropy {
        self.r * (to / from).get::<ratio>().ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::kilopascal, specific_volume::cubic_meter_per_kilogram,
        thermodynamic_temperature::kelvin,
    };

    fn air() -> PerfectGas {
        PerfectGas::of::<Air>().unwrap()
    }

    #[test]
    fn air_heat_capacities() {
        let gas = air();

        assert_relative_eq!(
            gas.cv().get::<kilojoule_per_kilogram_kelvin>(),
            0.7175,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            gas.cp().get::<kilojoule_per_kilogram_kelvin>(),
            1.0045,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            (gas.cp() - gas.cv()).get::<kilojoule_per_kilogram_kelvin>(),
            0.287,
            epsilon = 1e-12
        );
    }

    #[test]
    fn default_parameters_are_air() {
        assert_eq!(PerfectGasParameters::default(), PerfectGasParameters::air());
    }

    #[test]
    fn rejects_non_physical_constants() {
        let r = SpecificGasConstant::new::<kilojoule_per_kilogram_kelvin>(0.287);

        assert_eq!(
            PerfectGas::new(PerfectGasParameters::from_gamma(r, 1.0)),
            Err(PerfectGasError::Gamma { gamma: 1.0 })
        );
        assert!(PerfectGas::new(PerfectGasParameters::from_gamma(r, 0.8)).is_err());

        let zero = SpecificGasConstant::new::<kilojoule_per_kilogram_kelvin>(0.0);
        assert!(matches!(
            PerfectGas::new(PerfectGasParameters::from_gamma(zero, 1.4)),
            Err(PerfectGasError::GasConstant { .. })
        ));
    }

    #[test]
    fn equation_of_state_is_consistent() {
        let gas = air();
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let p = Pressure::new::<kilopascal>(100.0);

        let v = gas.volume(t, p);
        assert_relative_eq!(v.get::<cubic_meter_per_kilogram>(), 0.861, epsilon = 1e-12);
        assert_relative_eq!(gas.pressure(t, v).get::<kilopascal>(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn entropy_changes() {
        let gas = air();
        let t_1 = ThermodynamicTemperature::new::<kelvin>(300.0);
        let t_2 = ThermodynamicTemperature::new::<kelvin>(600.0);

        let ds_v = gas.entropy_change_at_constant_volume(t_1, t_2);
        let ds_p = gas.entropy_change_at_constant_pressure(t_1, t_2);
        assert_relative_eq!(
            ds_v.get::<kilojoule_per_kilogram_kelvin>(),
            0.7175 * 2.0_f64.ln(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            ds_p.get::<kilojoule_per_kilogram_kelvin>(),
            1.0045 * 2.0_f64.ln(),
            epsilon = 1e-12
        );

        let v_1 = SpecificVolume::new::<cubic_meter_per_kilogram>(1.0);
        let v_2 = SpecificVolume::new::<cubic_meter_per_kilogram>(0.5);
        let ds_t = gas.entropy_change_at_constant_temperature(v_1, v_2);
        assert!(ds_t < SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.0));
    }

    #[test]
    fn general_entropy_change_matches_special_cases() {
        let gas = air();
        let t_1 = ThermodynamicTemperature::new::<kelvin>(300.0);
        let t_2 = ThermodynamicTemperature::new::<kelvin>(579.2);
        let p = Pressure::new::<kilopascal>(100.0);

        let isobaric = gas.entropy_change((t_1, p), (t_2, p));
        assert_relative_eq!(
            isobaric.get::<kilojoule_per_kilogram_kelvin>(),
            gas.entropy_change_at_constant_pressure(t_1, t_2)
                .get::<kilojoule_per_kilogram_kelvin>(),
            max_relative = 1e-12
        );

        // Isentropic compression with rp = 10 returns to zero entropy change.
        let rp: f64 = 10.0;
        let t_s = ThermodynamicTemperature::new::<kelvin>(300.0 * rp.powf(0.4 / 1.4));
        let ds = gas.entropy_change((t_1, p), (t_s, p * rp));
        assert_relative_eq!(ds.get::<kilojoule_per_kilogram_kelvin>(), 0.0, epsilon = 1e-12);
    }
}
