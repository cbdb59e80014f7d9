//! Closed-form two-phase fluid for exercising the real-fluid solvers.
//!
//! The saturation line follows Clausius–Clapeyron with a constant latent
//! heat. The liquid is incompressible with `h = c_l·(T − T₀) + v_l·(P − P₀)`
//! and `s = c_l·ln(T/T₀)`. Superheated vapor is an ideal gas whose enthalpy and
//! entropy are measured along the isobar from the saturated vapor state.
//! Above the critical temperature every lookup fails.

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
    pressure::kilopascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::UnitInterval,
    thermo::{
        PropertyError, Quality, State,
        capability::{StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TestFluid;

/// Model constants in kPa, K, kJ/kg, kJ/kg·K, and m³/kg.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TwoPhaseModel {
    t_ref: f64,
    p_ref: f64,
    latent_heat: f64,
    r_vapor: f64,
    c_liquid: f64,
    cp_vapor: f64,
    v_liquid: f64,
    t_critical: f64,
}

impl TwoPhaseModel {
    /// Roughly water: boils at 373.15 K under one atmosphere.
    pub(crate) fn water_like() -> Self {
        Self {
            t_ref: 373.15,
            p_ref: 101.325,
            latent_heat: 2257.0,
            r_vapor: 0.4615,
            c_liquid: 4.18,
            cp_vapor: 2.08,
            v_liquid: 0.001,
            t_critical: 647.1,
        }
    }

    /// Roughly R134a, with a falling vapor entropy line so compression ends superheated.
    pub(crate) fn refrigerant_like() -> Self {
        Self {
            t_ref: 247.08,
            p_ref: 101.325,
            latent_heat: 217.0,
            r_vapor: 0.0815,
            c_liquid: 0.6,
            cp_vapor: 0.85,
            v_liquid: 0.00075,
            t_critical: 374.2,
        }
    }

    pub(super) fn critical_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.t_critical)
    }

    /// Saturation temperature at `p` kPa.
    pub(super) fn t_sat(&self, p: f64) -> Result<f64, PropertyError> {
        let p_critical = self.p_sat_unchecked(self.t_critical);
        if !(p > 0.0 && p < p_critical) {
            return Err(PropertyError::OutOfDomain {
                context: format!("no saturation state at {p} kPa"),
            });
        }
        let inverse = 1.0 / self.t_ref - self.r_vapor / self.latent_heat * (p / self.p_ref).ln();
        Ok(1.0 / inverse)
    }

    /// Saturation pressure at `t` K.
    pub(super) fn p_sat(&self, t: f64) -> Result<f64, PropertyError> {
        if !(t > 0.0 && t < self.t_critical) {
            return Err(PropertyError::OutOfDomain {
                context: format!("no saturation state at {t} K"),
            });
        }
        Ok(self.p_sat_unchecked(t))
    }

    fn p_sat_unchecked(&self, t: f64) -> f64 {
        let exponent = self.latent_heat / self.r_vapor * (1.0 / self.t_ref - 1.0 / t);
        self.p_ref * exponent.exp()
    }

    fn h_liquid(&self, p: f64, t: f64) -> f64 {
        self.c_liquid * (t - self.t_ref) + self.v_liquid * (p - self.p_ref)
    }

    fn s_liquid(&self, t: f64) -> f64 {
        self.c_liquid * (t / self.t_ref).ln()
    }

    fn saturated(&self, p: f64, t: f64, x: f64) -> State<TestFluid> {
        let v_vapor = self.r_vapor * t / p;
        self.state(
            p,
            t,
            self.v_liquid + x * (v_vapor - self.v_liquid),
            self.h_liquid(p, t) + x * self.latent_heat,
            self.s_liquid(t) + x * self.latent_heat / t,
            UnitInterval::new(x).ok(),
        )
    }

    fn liquid(&self, p: f64, t: f64) -> State<TestFluid> {
        self.state(p, t, self.v_liquid, self.h_liquid(p, t), self.s_liquid(t), None)
    }

    fn vapor(&self, p: f64, t_sat: f64, t: f64) -> State<TestFluid> {
        let h_g = self.h_liquid(p, t_sat) + self.latent_heat;
        let s_g = self.s_liquid(t_sat) + self.latent_heat / t_sat;
        self.state(
            p,
            t,
            self.r_vapor * t / p,
            h_g + self.cp_vapor * (t - t_sat),
            s_g + self.cp_vapor * (t / t_sat).ln(),
            None,
        )
    }

    #[allow(clippy::unused_self)]
    fn state(
        &self,
        p: f64,
        t: f64,
        v: f64,
        h: f64,
        s: f64,
        quality: Option<Quality>,
    ) -> State<TestFluid> {
        State {
            pressure: Pressure::new::<kilopascal>(p),
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            volume: SpecificVolume::new::<cubic_meter_per_kilogram>(v),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h),
            entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s),
            quality,
            fluid: TestFluid,
        }
    }
}

impl ThermoModel for TwoPhaseModel {
    type Fluid = TestFluid;
}

impl StateFrom<(TestFluid, Pressure, Quality)> for TwoPhaseModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_fluid, pressure, quality): (TestFluid, Pressure, Quality),
    ) -> Result<State<TestFluid>, Self::Error> {
        let p = pressure.get::<kilopascal>();
        let t = self.t_sat(p)?;
        Ok(self.saturated(p, t, quality.into_inner()))
    }
}

impl StateFrom<(TestFluid, ThermodynamicTemperature, Quality)> for TwoPhaseModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_fluid, temperature, quality): (TestFluid, ThermodynamicTemperature, Quality),
    ) -> Result<State<TestFluid>, Self::Error> {
        let t = temperature.get::<kelvin>();
        let p = self.p_sat(t)?;
        Ok(self.saturated(p, t, quality.into_inner()))
    }
}

impl StateFrom<(TestFluid, ThermodynamicTemperature, Pressure)> for TwoPhaseModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_fluid, temperature, pressure): (TestFluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<TestFluid>, Self::Error> {
        let p = pressure.get::<kilopascal>();
        let t = temperature.get::<kelvin>();
        let t_sat = self.t_sat(p)?;

        if t < t_sat {
            Ok(self.liquid(p, t))
        } else if t > t_sat {
            Ok(self.vapor(p, t_sat, t))
        } else {
            Err(PropertyError::InvalidState {
                context: "temperature and pressure do not fix a state on the saturation line"
                    .to_string(),
            })
        }
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEnthalpy)> for TwoPhaseModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_fluid, pressure, enthalpy): (TestFluid, Pressure, SpecificEnthalpy),
    ) -> Result<State<TestFluid>, Self::Error> {
        let p = pressure.get::<kilopascal>();
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        let t_sat = self.t_sat(p)?;
        let h_f = self.h_liquid(p, t_sat);
        let h_g = h_f + self.latent_heat;

        if h < h_f {
            let t = self.t_ref + (h - self.v_liquid * (p - self.p_ref)) / self.c_liquid;
            Ok(self.liquid(p, t))
        } else if h > h_g {
            Ok(self.vapor(p, t_sat, t_sat + (h - h_g) / self.cp_vapor))
        } else {
            Ok(self.saturated(p, t_sat, (h - h_f) / self.latent_heat))
        }
    }
}

impl StateFrom<(TestFluid, Pressure, SpecificEntropy)> for TwoPhaseModel {
    type Error = PropertyError;

    fn state_from(
        &self,
        (_fluid, pressure, entropy): (TestFluid, Pressure, SpecificEntropy),
    ) -> Result<State<TestFluid>, Self::Error> {
        let p = pressure.get::<kilopascal>();
        let s = entropy.get::<kilojoule_per_kilogram_kelvin>();
        let t_sat = self.t_sat(p)?;
        let s_f = self.s_liquid(t_sat);
        let s_fg = self.latent_heat / t_sat;

        if s < s_f {
            Ok(self.liquid(p, self.t_ref * (s / self.c_liquid).exp()))
        } else if s > s_f + s_fg {
            let t = t_sat * ((s - s_f - s_fg) / self.cp_vapor).exp();
            Ok(self.vapor(p, t_sat, t))
        } else {
            Ok(self.saturated(p, t_sat, (s - s_f) / s_fg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn saturation_line_inverts() {
        let model = TwoPhaseModel::water_like();

        let t = model.t_sat(10.0).unwrap();
        assert_relative_eq!(model.p_sat(t).unwrap(), 10.0, max_relative = 1e-12);
        assert_relative_eq!(model.t_sat(101.325).unwrap(), 373.15, max_relative = 1e-12);
        assert!(model.p_sat(700.0).is_err());
    }

    #[test]
    fn enthalpy_and_entropy_lookups_agree() {
        let model = TwoPhaseModel::water_like();
        let p = Pressure::new::<kilopascal>(1500.0);

        for t in [350.0, 500.0, 800.0] {
            let state = model
                .state_from((TestFluid, ThermodynamicTemperature::new::<kelvin>(t), p))
                .unwrap();
            let by_h = model.state_from((TestFluid, p, state.enthalpy)).unwrap();
            let by_s = model.state_from((TestFluid, p, state.entropy)).unwrap();

            assert_relative_eq!(by_h.temperature.get::<kelvin>(), t, max_relative = 1e-12);
            assert_relative_eq!(by_s.temperature.get::<kelvin>(), t, max_relative = 1e-12);
        }
    }

    #[test]
    fn two_phase_lookups_report_quality() {
        let model = TwoPhaseModel::water_like();
        let p = Pressure::new::<kilopascal>(200.0);
        let half = UnitInterval::new(0.5).unwrap();

        let mixture = model.state_from((TestFluid, p, half)).unwrap();
        let by_h = model.state_from((TestFluid, p, mixture.enthalpy)).unwrap();

        assert_relative_eq!(by_h.quality_fraction().unwrap(), 0.5, max_relative = 1e-12);
    }
}
