//! Saturation dome sampling for real-fluid cycle overlays.

use tracing::debug;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::{kilopascal, pascal},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::UnitInterval,
    thermo::{Quality, State, capability::PropertyProvider},
};

use super::SaturationPoint;

/// Samples the dome at pressures spaced geometrically from `low` to `high`.
///
/// Pressures the provider cannot resolve are skipped.
pub(super) fn by_pressure<Fluid: Clone>(
    model: &impl PropertyProvider<Fluid>,
    fluid: &Fluid,
    low: Pressure,
    high: Pressure,
    points: usize,
) -> Vec<SaturationPoint> {
    let (low, high) = (low.get::<pascal>(), high.get::<pascal>());
    let ratio = high / low;

    fractions(points)
        .filter_map(|fraction| {
            let pressure = Pressure::new::<pascal>(low * ratio.powf(fraction));
            let liquid = model.state_from((fluid.clone(), pressure, saturated_liquid()));
            let vapor = model.state_from((fluid.clone(), pressure, saturated_vapor()));

            match (liquid, vapor) {
                (Ok(liquid), Ok(vapor)) => Some(point(&liquid, &vapor)),
                (Err(err), _) => {
                    debug!(
                        pressure_kpa = pressure.get::<kilopascal>(),
                        error = %err,
                        "skipping saturation point"
                    );
                    None
                }
                (_, Err(err)) => {
                    debug!(
                        pressure_kpa = pressure.get::<kilopascal>(),
                        error = %err,
                        "skipping saturation point"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Samples the dome at temperatures spaced linearly from `low` to `high`.
///
/// Temperatures the provider cannot resolve are skipped.
pub(super) fn by_temperature<Fluid: Clone>(
    model: &impl PropertyProvider<Fluid>,
    fluid: &Fluid,
    low: ThermodynamicTemperature,
    high: ThermodynamicTemperature,
    points: usize,
) -> Vec<SaturationPoint> {
    let (low, high) = (low.get::<kelvin>(), high.get::<kelvin>());

    fractions(points)
        .filter_map(|fraction| {
            let temperature =
                ThermodynamicTemperature::new::<kelvin>(low + (high - low) * fraction);
            let liquid = model.state_from((fluid.clone(), temperature, saturated_liquid()));
            let vapor = model.state_from((fluid.clone(), temperature, saturated_vapor()));

            match (liquid, vapor) {
                (Ok(liquid), Ok(vapor)) => Some(point(&liquid, &vapor)),
                (Err(err), _) => {
                    debug!(
                        temperature_k = temperature.get::<kelvin>(),
                        error = %err,
                        "skipping saturation point"
                    );
                    None
                }
                (_, Err(err)) => {
                    debug!(
                        temperature_k = temperature.get::<kelvin>(),
                        error = %err,
                        "skipping saturation point"
                    );
                    None
                }
            }
        })
        .collect()
}

pub(super) fn saturated_liquid() -> Quality {
    UnitInterval::zero()
}

pub(super) fn saturated_vapor() -> Quality {
    UnitInterval::one()
}

/// Fractions `0..=1` for `points` evenly spaced samples, ending exactly at 1.
fn fractions(points: usize) -> impl Iterator<Item = f64> {
    let last = points.saturating_sub(1).max(1);

    #[allow(clippy::cast_precision_loss)]
    (0..points).map(move |i| {
        if points > 1 && i == last {
            1.0
        } else {
            i as f64 / last as f64
        }
    })
}

fn point<Fluid>(liquid: &State<Fluid>, vapor: &State<Fluid>) -> SaturationPoint {
    SaturationPoint {
        temperature: liquid.temperature,
        pressure: liquid.pressure,
        liquid_enthalpy: liquid.enthalpy,
        vapor_enthalpy: vapor.enthalpy,
        liquid_entropy: liquid.entropy,
        vapor_entropy: vapor.entropy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::super::test_support::{TestFluid, TwoPhaseModel};

    #[test]
    fn fraction_endpoints_are_exact() {
        let values: Vec<f64> = fractions(5).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(fractions(1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(fractions(0).count(), 0);
    }

    #[test]
    fn pressure_sampling_spans_range() {
        let model = TwoPhaseModel::water_like();
        let low = Pressure::new::<kilopascal>(10.0);
        let high = Pressure::new::<kilopascal>(8000.0);

        let dome = by_pressure(&model, &TestFluid, low, high, 80);

        assert_eq!(dome.len(), 80);
        assert_relative_eq!(dome[0].pressure.get::<kilopascal>(), 10.0, max_relative = 1e-12);
        assert_relative_eq!(dome[79].pressure.get::<kilopascal>(), 8000.0, max_relative = 1e-12);
        assert!(dome.windows(2).all(|w| w[1].temperature > w[0].temperature));
        assert!(dome.iter().all(|p| p.vapor_entropy > p.liquid_entropy));
        assert!(dome.iter().all(|p| p.vapor_enthalpy > p.liquid_enthalpy));
    }

    #[test]
    fn unresolvable_points_are_skipped() {
        let model = TwoPhaseModel::water_like();
        let low = ThermodynamicTemperature::new::<kelvin>(400.0);
        let beyond_critical = ThermodynamicTemperature::new::<kelvin>(
            model.critical_temperature().get::<kelvin>() + 100.0,
        );

        let dome = by_temperature(&model, &TestFluid, low, beyond_critical, 11);

        assert!(!dome.is_empty());
        assert!(dome.len() < 11);
        assert!(dome.iter().all(|p| p.temperature <= model.critical_temperature()));
    }
}
