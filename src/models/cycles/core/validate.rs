//! Boundary condition checks shared by the cycle solvers.
//!
//! Each check returns the violation message so the caller decides how it is
//! reported (plain parameter error or boundary-condition error).

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

pub(super) fn positive(name: &str, value: f64) -> Result<(), String> {
    StrictlyPositive::check(&value).map_err(|err| format!("{name} must be > 0, got {value} ({err})"))
}

pub(super) fn non_negative(name: &str, value: f64) -> Result<(), String> {
    NonNegative::check(&value).map_err(|err| format!("{name} must be ≥ 0, got {value} ({err})"))
}

pub(super) fn above_one(name: &str, value: f64) -> Result<(), String> {
    StrictlyPositive::check(&(value - 1.0))
        .map_err(|_| format!("{name} must be > 1, got {value}"))
}

pub(super) fn finite(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{name} is not finite, got {value}"))
    }
}

/// Requires `greater.1 > lesser.1`.
pub(super) fn exceeds(greater: (&str, f64), lesser: (&str, f64)) -> Result<(), String> {
    let (greater_name, greater_value) = greater;
    let (lesser_name, lesser_value) = lesser;

    StrictlyPositive::check(&(greater_value - lesser_value)).map_err(|_| {
        format!(
            "{greater_name} ({greater_value}) must be greater than {lesser_name} ({lesser_value})"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_must_exceed_one() {
        assert!(above_one("r", 8.0).is_ok());
        assert_eq!(above_one("r", 1.0), Err("r must be > 1, got 1".to_string()));
        assert!(above_one("r", f64::NAN).is_err());
    }

    #[test]
    fn ordering_is_strict() {
        assert!(exceeds(("Th", 600.0), ("Tc", 300.0)).is_ok());
        assert!(exceeds(("Th", 300.0), ("Tc", 300.0)).is_err());
        assert!(exceeds(("Th", 200.0), ("Tc", 300.0)).is_err());
    }

    #[test]
    fn overflowed_values_are_not_finite() {
        assert!(finite("v2", 1.0e300).is_ok());
        assert!(finite("v2", f64::INFINITY).is_err());
        assert!(finite("v2", f64::NAN).is_err());
    }

    #[test]
    fn offsets_may_be_zero() {
        assert!(non_negative("superheat", 0.0).is_ok());
        assert!(non_negative("superheat", -0.1).is_err());
        assert!(positive("pressure", 0.0).is_err());
    }
}
