use tracing::trace;
use uom::{
    ConstZero,
    si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature},
};

use crate::support::{thermo::model::PerfectGas, units::SpecificEntropy};

use super::{PathError, PathSample, ProcessKind, law};

/// A discrete cycle state the path sampler can interpolate between.
pub trait Vertex {
    /// Label of this state, unique within its cycle.
    fn id(&self) -> usize;

    fn pressure(&self) -> Pressure;

    fn temperature(&self) -> ThermodynamicTemperature;

    fn volume(&self) -> SpecificVolume;

    /// Entropy of the state, if the cycle tracks one.
    ///
    /// The sampler anchors the first leg at zero when this is `None`.
    fn entropy(&self) -> Option<SpecificEntropy> {
        None
    }
}

/// A directed process leg between two labelled states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub kind: ProcessKind,
    pub from: usize,
    pub to: usize,
}

impl Leg {
    #[must_use]
    pub const fn new(kind: ProcessKind, from: usize, to: usize) -> Self {
        Self { kind, from, to }
    }

    /// Creates a leg from a process token such as `"isen"` or `"cp"`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnsupportedProcess`] if the token is not a known kind.
    pub fn parse(kind: &str, from: usize, to: usize) -> Result<Self, PathError> {
        Ok(Self::new(kind.parse()?, from, to))
    }
}

/// Number of samples drawn along each kind of leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub isentropic: usize,
    pub isothermal: usize,
    pub constant_volume: usize,
    pub constant_pressure: usize,
}

impl SamplerConfig {
    /// Uses the same sample count for every leg kind.
    #[must_use]
    pub fn uniform(samples: usize) -> Self {
        Self {
            isentropic: samples,
            isothermal: samples,
            constant_volume: samples,
            constant_pressure: samples,
        }
    }

    #[must_use]
    pub fn samples(&self, kind: ProcessKind) -> usize {
        match kind {
            ProcessKind::Isentropic => self.isentropic,
            ProcessKind::Isothermal => self.isothermal,
            ProcessKind::ConstantVolume => self.constant_volume,
            ProcessKind::ConstantPressure => self.constant_pressure,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            isentropic: 90,
            isothermal: 90,
            constant_volume: 70,
            constant_pressure: 70,
        }
    }
}

/// Samples one continuous curve through `states` along `legs`.
///
/// Each leg starts from its `from` state's pressure, volume, and temperature.
/// Entropy is carried forward: the first leg is anchored at its start state's
/// entropy (zero if the state has none), and every later leg is anchored at
/// the last entropy sampled on the previous leg. Legs after the first drop
/// their first sample, which repeats the shared vertex.
///
/// An empty `legs` slice yields an empty path.
///
/// # Errors
///
/// Returns [`PathError::UnknownState`] if a leg names a state not in `states`,
/// or [`PathError::TooFewSamples`] if `config` asks for fewer than two samples
/// on a leg kind that is used.
pub fn sample_path<V: Vertex>(
    states: &[V],
    legs: &[Leg],
    gas: &PerfectGas,
    config: &SamplerConfig,
) -> Result<Vec<PathSample>, PathError> {
    let mut path: Vec<PathSample> = Vec::new();

    for (index, leg) in legs.iter().enumerate() {
        let from = find(states, leg.from)?;
        let to = find(states, leg.to)?;

        let anchor = match path.last() {
            Some(previous) => previous.entropy,
            None => from.entropy().unwrap_or(SpecificEntropy::ZERO),
        };

        let start = PathSample {
            pressure: from.pressure(),
            volume: from.volume(),
            temperature: from.temperature(),
            entropy: anchor,
        };

        let samples = config.samples(leg.kind);
        let segment = match leg.kind {
            ProcessKind::Isentropic => law::isentropic(gas, &start, to.volume(), samples)?,
            ProcessKind::ConstantVolume => {
                law::constant_volume(gas, &start, to.temperature(), samples)?
            }
            ProcessKind::ConstantPressure => {
                law::constant_pressure(gas, &start, to.temperature(), samples)?
            }
            ProcessKind::Isothermal => law::isothermal(gas, &start, to.volume(), samples)?,
        };

        trace!(
            kind = %leg.kind,
            from = leg.from,
            to = leg.to,
            samples,
            "sampled process leg"
        );

        let skip = usize::from(index > 0);
        path.extend(segment.into_iter().skip(skip));
    }

    Ok(path)
}

fn find<V: Vertex>(states: &[V], id: usize) -> Result<&V, PathError> {
    states
        .iter()
        .find(|state| state.id() == id)
        .ok_or(PathError::UnknownState { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        pressure::kilopascal, specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::fluid::Air;

    #[derive(Debug, Clone, Copy)]
    struct Point {
        id: usize,
        p: f64,
        v: f64,
        t: f64,
        s: Option<f64>,
    }

    impl Vertex for Point {
        fn id(&self) -> usize {
            self.id
        }
        fn pressure(&self) -> Pressure {
            Pressure::new::<kilopascal>(self.p)
        }
        fn temperature(&self) -> ThermodynamicTemperature {
            ThermodynamicTemperature::new::<kelvin>(self.t)
        }
        fn volume(&self) -> SpecificVolume {
            SpecificVolume::new::<cubic_meter_per_kilogram>(self.v)
        }
        fn entropy(&self) -> Option<SpecificEntropy> {
            self.s
                .map(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>)
        }
    }

    fn air() -> PerfectGas {
        PerfectGas::of::<Air>().unwrap()
    }

    /// Otto cycle states for r = 8, T₁ = 300 K, T₃ = 1800 K, without entropy.
    fn otto_states() -> Vec<Point> {
        let r: f64 = 8.0;
        let v_1 = 0.287 * 300.0 / 100.0;
        let v_2 = v_1 / r;
        let t_2 = 300.0 * r.powf(0.4);
        let p_2 = 100.0 * r.powf(1.4);
        let p_3 = 0.287 * 1800.0 / v_2;
        let t_4 = 1800.0 / r.powf(0.4);
        let p_4 = p_3 / r.powf(1.4);

        vec![
            Point { id: 1, p: 100.0, v: v_1, t: 300.0, s: None },
            Point { id: 2, p: p_2, v: v_2, t: t_2, s: None },
            Point { id: 3, p: p_3, v: v_2, t: 1800.0, s: None },
            Point { id: 4, p: p_4, v: v_1, t: t_4, s: None },
        ]
    }

    fn otto_legs() -> [Leg; 4] {
        [
            Leg::new(ProcessKind::Isentropic, 1, 2),
            Leg::new(ProcessKind::ConstantVolume, 2, 3),
            Leg::new(ProcessKind::Isentropic, 3, 4),
            Leg::new(ProcessKind::ConstantVolume, 4, 1),
        ]
    }

    #[test]
    fn closed_cycle_path_returns_to_start() {
        let states = otto_states();
        let path = sample_path(&states, &otto_legs(), &air(), &SamplerConfig::default()).unwrap();

        assert_eq!(path.len(), 90 + 70 + 90 + 70 - 3);

        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_eq!(first.pressure, states[0].pressure());
        assert_eq!(first.volume, states[0].volume());
        assert_eq!(first.temperature, states[0].temperature());
        assert_eq!(first.entropy, SpecificEntropy::ZERO);

        assert_relative_eq!(
            last.temperature.get::<kelvin>(),
            300.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            last.entropy.get::<kilojoule_per_kilogram_kelvin>(),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn entropy_is_carried_across_legs() {
        let states = otto_states();
        let path = sample_path(&states, &otto_legs(), &air(), &SamplerConfig::default()).unwrap();

        // The expansion leg starts where constant-volume heating ended.
        let heating_end = path[89 + 69];
        let expansion = &path[89 + 69..89 + 69 + 90];
        assert!(heating_end.entropy > SpecificEntropy::ZERO);
        assert!(expansion.iter().all(|sample| sample.entropy == heating_end.entropy));
    }

    #[test]
    fn first_leg_anchors_at_state_entropy() {
        let mut states = otto_states();
        states[0].s = Some(2.5);

        let path = sample_path(&states, &otto_legs()[..1], &air(), &SamplerConfig::default())
            .unwrap();

        assert!(path.iter().all(|sample| {
            sample.entropy == SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(2.5)
        }));
    }

    #[test]
    fn unknown_state_is_reported() {
        let states = otto_states();
        let legs = [Leg::new(ProcessKind::Isentropic, 1, 7)];

        let error = sample_path(&states, &legs, &air(), &SamplerConfig::default()).unwrap_err();

        assert_eq!(error, PathError::UnknownState { id: 7 });
    }

    #[test]
    fn unsupported_token_fails_leg_construction() {
        assert!(Leg::parse("isen", 1, 2).is_ok());
        assert!(matches!(
            Leg::parse("adiabatic-ish", 1, 2),
            Err(PathError::UnsupportedProcess { .. })
        ));
    }

    #[test]
    fn empty_legs_yield_empty_path() {
        let path = sample_path(&otto_states(), &[], &air(), &SamplerConfig::default()).unwrap();
        assert!(path.is_empty());
    }

    proptest! {
        #[test]
        fn deduplicated_sample_count(
            isentropic in 2_usize..40,
            constant_volume in 2_usize..40,
            leg_count in 1_usize..=4,
        ) {
            let config = SamplerConfig {
                isentropic,
                isothermal: 2,
                constant_volume,
                constant_pressure: 2,
            };
            let legs = &otto_legs()[..leg_count];
            let path = sample_path(&otto_states(), legs, &air(), &config).unwrap();

            let total: usize = legs.iter().map(|leg| config.samples(leg.kind)).sum();
            prop_assert_eq!(path.len(), total - (leg_count - 1));
        }

        #[test]
        fn isentropic_legs_hold_entropy(r in 1.5_f64..20.0, s in -2.0_f64..2.0) {
            let v_1 = 0.861;
            let states = [
                Point { id: 1, p: 100.0, v: v_1, t: 300.0, s: Some(s) },
                Point { id: 2, p: 0.0, v: v_1 / r, t: 0.0, s: None },
            ];
            let legs = [Leg::new(ProcessKind::Isentropic, 1, 2)];

            let path = sample_path(&states, &legs, &air(), &SamplerConfig::default()).unwrap();

            let s_start = path[0].entropy;
            for sample in &path {
                prop_assert!((sample.entropy - s_start).value.abs() < 1e-12);
            }
        }
    }
}
