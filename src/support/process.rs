//! Ideal-gas process laws and the cycle path sampler.
//!
//! The process laws in this module reconstruct dense curves along the four
//! reversible processes of a calorically perfect gas. The [`sample_path`]
//! function stitches them into one continuous curve through a cycle's states.

mod law;
mod path;

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::f64::{Pressure, SpecificVolume, ThermodynamicTemperature};

use crate::support::units::SpecificEntropy;

pub use law::{constant_pressure, constant_volume, isentropic, isothermal};
pub use path::{Leg, SamplerConfig, Vertex, sample_path};

/// The quantity held fixed along a process leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    /// Constant entropy: `P·vᵞ = const`.
    Isentropic,
    /// Constant specific volume.
    ConstantVolume,
    /// Constant pressure.
    ConstantPressure,
    /// Constant temperature.
    Isothermal,
}

impl ProcessKind {
    /// Returns the canonical token for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Isentropic => "isentropic",
            Self::ConstantVolume => "constant-volume",
            Self::ConstantPressure => "constant-pressure",
            Self::Isothermal => "isothermal",
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a process kind from its short or canonical token.
///
/// ```
/// use twine_cycles::support::process::ProcessKind;
///
/// assert_eq!("isen".parse(), Ok(ProcessKind::Isentropic));
/// assert_eq!("cp".parse(), Ok(ProcessKind::ConstantPressure));
/// assert!("polytropic".parse::<ProcessKind>().is_err());
/// ```
impl FromStr for ProcessKind {
    type Err = PathError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "isen" | "isentropic" => Ok(Self::Isentropic),
            "cv" | "constant-volume" => Ok(Self::ConstantVolume),
            "cp" | "constant-pressure" => Ok(Self::ConstantPressure),
            "isoth" | "isothermal" => Ok(Self::Isothermal),
            other => Err(PathError::UnsupportedProcess {
                kind: other.to_string(),
            }),
        }
    }
}

/// Errors raised while sampling process paths.
///
/// These are configuration errors: the same inputs always fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("unsupported process: {kind:?}")]
    UnsupportedProcess { kind: String },

    #[error("leg references unknown state {id}")]
    UnknownState { id: usize },

    #[error("{kind} leg needs at least 2 samples, got {samples}")]
    TooFewSamples { kind: ProcessKind, samples: usize },
}

/// One point on a sampled process curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub pressure: Pressure,
    pub volume: SpecificVolume,
    pub temperature: ThermodynamicTemperature,
    pub entropy: SpecificEntropy,
}
