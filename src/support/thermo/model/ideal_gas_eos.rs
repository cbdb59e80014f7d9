//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas equation of state on a specific
//! volume basis: `p·v = R·T`.

use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::units::SpecificGasConstant;

/// Computes pressure using the ideal gas equation of state.
#[must_use]
pub(crate) fn pressure(
    temperature: ThermodynamicTemperature,
    volume: SpecificVolume,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    gas_constant * temperature / volume
}

/// Computes specific volume using the ideal gas equation of state.
#[must_use]
pub(crate) fn volume(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> SpecificVolume {
    gas_constant * temperature / pressure
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::kilopascal, specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::kelvin,
    };

    fn air() -> SpecificGasConstant {
        SpecificGasConstant::new::<kilojoule_per_kilogram_kelvin>(0.287)
    }

    #[test]
    fn reference_volume_at_intake() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let p = Pressure::new::<kilopascal>(100.0);

        let v = volume(t, p, air());

        assert_relative_eq!(v.get::<cubic_meter_per_kilogram>(), 0.861, epsilon = 1e-12);
    }

    #[test]
    fn pressure_volume_roundtrip() {
        let t = ThermodynamicTemperature::new::<kelvin>(1800.0);
        let v = SpecificVolume::new::<cubic_meter_per_kilogram>(0.107_625);

        let p = pressure(t, v, air());
        let v_2 = volume(t, p, air());

        assert_relative_eq!(
            v_2.get::<cubic_meter_per_kilogram>(),
            v.get::<cubic_meter_per_kilogram>(),
            max_relative = 1e-12
        );
    }
}
