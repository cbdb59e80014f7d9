//! Carnot cycle: two isotherms joined by two isentropes.
//!
//! The T–s diagram is an exact rectangle of width `Δs`. The P–v states are a
//! conceptual ideal-gas reconstruction scaled by a reference volume `v₁`, so
//! they illustrate the cycle rather than describe a particular device.

use std::str::FromStr;

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{AvailableEnergy, Ratio, SpecificVolume, ThermodynamicTemperature},
        ratio::ratio,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        specific_volume::cubic_meter_per_kilogram,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    thermo::model::{PerfectGas, PerfectGasParameters},
    units::SpecificEntropy,
};

use super::{CycleError, EntropyBasis, GasCycle, GasState, validate};

/// Which way the Carnot cycle runs and which figure of merit it reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CarnotMode {
    #[default]
    Engine,
    Refrigerator,
    HeatPump,
}

impl FromStr for CarnotMode {
    type Err = CycleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "engine" => Ok(Self::Engine),
            "refrigerator" => Ok(Self::Refrigerator),
            "heat_pump" | "heat-pump" => Ok(Self::HeatPump),
            other => Err(CycleError::invalid(format!(
                "mode must be one of engine, refrigerator, heat_pump; got {other:?}"
            ))),
        }
    }
}

/// Boundary conditions for a Carnot cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotInput {
    pub hot_temperature: ThermodynamicTemperature,
    pub cold_temperature: ThermodynamicTemperature,
    /// Width of the T–s rectangle.
    pub entropy_change: SpecificEntropy,
    pub mode: CarnotMode,
    pub gas: PerfectGasParameters,
    /// Volume scale `v₁` for the conceptual P–v reconstruction.
    pub reference_volume: SpecificVolume,
}

impl Default for CarnotInput {
    fn default() -> Self {
        Self {
            hot_temperature: ThermodynamicTemperature::new::<kelvin>(600.0),
            cold_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            entropy_change: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(1.0),
            mode: CarnotMode::Engine,
            gas: PerfectGasParameters::air(),
            reference_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(1.0),
        }
    }
}

/// The mode-specific figure of merit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarnotPerformance {
    Engine { efficiency: Ratio },
    Refrigerator { cop: Ratio },
    HeatPump { cop: Ratio },
}

impl CarnotPerformance {
    /// Returns the efficiency or COP, whichever this mode reports.
    #[must_use]
    pub fn value(&self) -> Ratio {
        match *self {
            Self::Engine { efficiency } => efficiency,
            Self::Refrigerator { cop } | Self::HeatPump { cop } => cop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotMetrics {
    /// Heat exchanged with the hot reservoir, `Tₕ·Δs`.
    pub q_hot: AvailableEnergy,
    /// Heat exchanged with the cold reservoir, `T_c·Δs`.
    pub q_cold: AvailableEnergy,
    /// Net work, `Q_hot − Q_cold`, produced by an engine or consumed otherwise.
    pub w_net: AvailableEnergy,
    pub performance: CarnotPerformance,
}

/// Solves a Carnot cycle.
///
/// States 1→2 expand isothermally at `Tₕ`, 2→3 expand isentropically to
/// `T_c`, 3→4 compress isothermally, and 4→1 compress isentropically.
/// Entropy is absolute on the rectangle: `s₁ = s₄ = 0` and `s₂ = s₃ = Δs`.
pub(crate) fn solve(input: &CarnotInput) -> Result<GasCycle<CarnotMetrics, 4>, CycleError> {
    let gas = PerfectGas::new(input.gas)?;

    let t_h = input.hot_temperature;
    let t_c = input.cold_temperature;
    let delta_s = input.entropy_change;
    let v_1 = input.reference_volume;

    validate::positive("cold reservoir temperature Tc [K]", t_c.get::<kelvin>())
        .map_err(CycleError::invalid)?;
    validate::exceeds(
        ("Th [K]", t_h.get::<kelvin>()),
        ("Tc [K]", t_c.get::<kelvin>()),
    )
    .map_err(CycleError::invalid)?;
    validate::positive(
        "entropy change Δs [kJ/kg·K]",
        delta_s.get::<kilojoule_per_kilogram_kelvin>(),
    )
    .map_err(CycleError::invalid)?;
    validate::positive(
        "reference volume v1 [m³/kg]",
        v_1.get::<cubic_meter_per_kilogram>(),
    )
    .map_err(CycleError::invalid)?;

    // Isothermal: Δs = R·ln(v₂/v₁). Isentropic: T·v^(γ−1) = const.
    let v_2 = v_1 * (delta_s / gas.gas_constant()).get::<ratio>().exp();
    let expansion = (t_h / t_c).get::<ratio>().powf(1.0 / (gas.gamma() - 1.0));
    let v_3 = v_2 * expansion;
    let v_4 = v_1 * expansion;

    // v₃ is the largest volume; an overflow there means P₃ would collapse to zero.
    validate::finite(
        "expanded volume v3 [m³/kg]",
        v_3.get::<cubic_meter_per_kilogram>(),
    )
    .map_err(CycleError::invalid)?;

    let s_low = SpecificEntropy::ZERO;
    let s_high = delta_s;

    let state = |id: usize,
                 temperature: ThermodynamicTemperature,
                 volume: SpecificVolume,
                 entropy: SpecificEntropy| GasState {
        id,
        pressure: gas.pressure(temperature, volume),
        temperature,
        volume,
        entropy,
    };
    let states = [
        state(1, t_h, v_1, s_low),
        state(2, t_h, v_2, s_high),
        state(3, t_c, v_3, s_high),
        state(4, t_c, v_4, s_low),
    ];

    let q_hot: AvailableEnergy = t_h * delta_s;
    let q_cold: AvailableEnergy = t_c * delta_s;
    let w_net = q_hot - q_cold;

    let performance = match input.mode {
        CarnotMode::Engine => CarnotPerformance::Engine {
            efficiency: Ratio::new::<ratio>(1.0) - t_c / t_h,
        },
        CarnotMode::Refrigerator => CarnotPerformance::Refrigerator {
            cop: q_cold / w_net,
        },
        CarnotMode::HeatPump => CarnotPerformance::HeatPump { cop: q_hot / w_net },
    };

    debug!(
        mode = ?input.mode,
        figure_of_merit = performance.value().get::<ratio>(),
        "solved Carnot cycle"
    );

    Ok(GasCycle {
        states,
        metrics: CarnotMetrics {
            q_hot,
            q_cold,
            w_net,
            performance,
        },
        entropy_basis: EntropyBasis::Absolute,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{available_energy::kilojoule_per_kilogram, pressure::kilopascal};

    use crate::support::process::{Leg, ProcessKind, SamplerConfig};

    fn solve_with(mode: CarnotMode) -> GasCycle<CarnotMetrics, 4> {
        solve(&CarnotInput {
            mode,
            ..CarnotInput::default()
        })
        .unwrap()
    }

    #[test]
    fn engine_efficiency_is_exactly_one_half() {
        let cycle = solve_with(CarnotMode::Engine);

        assert_eq!(
            cycle.metrics.performance,
            CarnotPerformance::Engine {
                efficiency: Ratio::new::<ratio>(0.5)
            }
        );
        assert_relative_eq!(cycle.metrics.q_hot.get::<kilojoule_per_kilogram>(), 600.0);
        assert_relative_eq!(cycle.metrics.q_cold.get::<kilojoule_per_kilogram>(), 300.0);
        assert_relative_eq!(cycle.metrics.w_net.get::<kilojoule_per_kilogram>(), 300.0);
    }

    #[test]
    fn refrigerator_and_heat_pump_cops() {
        let fridge = solve_with(CarnotMode::Refrigerator);
        let pump = solve_with(CarnotMode::HeatPump);

        assert_relative_eq!(fridge.metrics.performance.value().get::<ratio>(), 1.0);
        assert_relative_eq!(pump.metrics.performance.value().get::<ratio>(), 2.0);
    }

    #[test]
    fn states_form_the_rectangle() {
        let cycle = solve_with(CarnotMode::Engine);
        let [s1, s2, s3, s4] = cycle.states;

        assert_eq!(s1.temperature, s2.temperature);
        assert_eq!(s3.temperature, s4.temperature);
        assert_eq!(s1.entropy, s4.entropy);
        assert_eq!(s2.entropy, s3.entropy);
        assert_eq!(cycle.entropy_basis, EntropyBasis::Absolute);

        // v₂ = v₁·exp(Δs/R), P₁ = R·Tₕ/v₁.
        assert_relative_eq!(
            s2.volume.get::<cubic_meter_per_kilogram>(),
            (1.0 / 0.287_f64).exp(),
            max_relative = 1e-12
        );
        assert_relative_eq!(s1.pressure.get::<kilopascal>(), 0.287 * 600.0, max_relative = 1e-12);
        assert!(s3.volume > s2.volume);
        assert!(s4.volume > s1.volume);
    }

    #[test]
    fn path_closes_on_the_rectangle() {
        let cycle = solve_with(CarnotMode::Engine);
        let gas = PerfectGas::new(PerfectGasParameters::air()).unwrap();
        let legs = [
            Leg::new(ProcessKind::Isothermal, 1, 2),
            Leg::new(ProcessKind::Isentropic, 2, 3),
            Leg::new(ProcessKind::Isothermal, 3, 4),
            Leg::new(ProcessKind::Isentropic, 4, 1),
        ];

        let path = cycle.path(&legs, &gas, &SamplerConfig::default()).unwrap();
        let peak = path
            .samples
            .iter()
            .map(|sample| sample.entropy.get::<kilojoule_per_kilogram_kelvin>())
            .fold(f64::MIN, f64::max);
        let end = path.samples.last().unwrap();

        assert_eq!(path.samples.len(), 4 * 90 - 3);
        assert_relative_eq!(peak, 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            end.entropy.get::<kilojoule_per_kilogram_kelvin>(),
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            end.volume.get::<cubic_meter_per_kilogram>(),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_inverted_reservoirs() {
        let input = CarnotInput {
            hot_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            ..CarnotInput::default()
        };

        let error = solve(&input).unwrap_err();
        assert!(matches!(error, CycleError::InvalidParameters { .. }));
        assert!(error.to_string().starts_with("invalid cycle parameters"));
    }

    #[test]
    fn rejects_non_positive_entropy_change() {
        let input = CarnotInput {
            entropy_change: SpecificEntropy::ZERO,
            ..CarnotInput::default()
        };
        assert!(solve(&input).is_err());
    }

    #[test]
    fn rejects_entropy_change_that_overflows_volume() {
        // Δs/R ≈ 871 overflows exp() to an infinite v₂.
        let input = CarnotInput {
            entropy_change: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(250.0),
            ..CarnotInput::default()
        };

        let error = solve(&input).unwrap_err();
        assert!(matches!(error, CycleError::InvalidParameters { .. }));
        assert!(error.to_string().contains("v3"), "{error}");
    }

    #[test]
    fn parses_modes() {
        assert_eq!("engine".parse::<CarnotMode>().unwrap(), CarnotMode::Engine);
        assert_eq!(
            "heat_pump".parse::<CarnotMode>().unwrap(),
            CarnotMode::HeatPump
        );
        assert!("stirling".parse::<CarnotMode>().is_err());
    }

    proptest! {
        #[test]
        fn efficiency_is_independent_of_entropy_change(delta_s in 0.01_f64..10.0) {
            let cycle = solve(&CarnotInput {
                entropy_change: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(delta_s),
                ..CarnotInput::default()
            })
            .unwrap();

            let efficiency = cycle.metrics.performance.value().get::<ratio>();
            prop_assert!((efficiency - 0.5).abs() < 1e-12);

            let balance = cycle.metrics.q_hot - cycle.metrics.q_cold - cycle.metrics.w_net;
            prop_assert!(balance.get::<kilojoule_per_kilogram>().abs() < 1e-9);
        }

        #[test]
        fn cops_are_positive(t_c in 200.0_f64..500.0, gap in 1.0_f64..500.0) {
            for mode in [CarnotMode::Refrigerator, CarnotMode::HeatPump] {
                let cycle = solve(&CarnotInput {
                    hot_temperature: ThermodynamicTemperature::new::<kelvin>(t_c + gap),
                    cold_temperature: ThermodynamicTemperature::new::<kelvin>(t_c),
                    mode,
                    ..CarnotInput::default()
                })
                .unwrap();
                prop_assert!(cycle.metrics.performance.value().get::<ratio>() > 0.0);
            }
        }
    }
}
