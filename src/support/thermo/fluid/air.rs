use crate::support::thermo::model::perfect_gas::{PerfectGasFluid, PerfectGasParameters};

/// Canonical identifier for cold air-standard air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl PerfectGasFluid for Air {
    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::air()
    }
}
