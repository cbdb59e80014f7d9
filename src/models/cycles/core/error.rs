use thiserror::Error;

use crate::support::thermo::model::perfect_gas::PerfectGasError;

/// Errors that can occur while solving a cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Boundary conditions that would make the cycle physically degenerate.
    ///
    /// Raised before any state is derived, so no partial result exists.
    /// Real-fluid boundary ordering violations carry a `boundary condition:`
    /// prefix in their context.
    #[error("invalid cycle parameters: {context}")]
    InvalidParameters { context: String },

    /// A property model could not construct a required state.
    #[error("thermodynamic model failed: {context}")]
    ThermoModelFailed {
        /// Operation context for the thermodynamic model failure.
        context: String,

        /// Underlying thermodynamic model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CycleError {
    pub(super) fn invalid(context: impl Into<String>) -> Self {
        Self::InvalidParameters {
            context: context.into(),
        }
    }

    pub(super) fn boundary(context: impl std::fmt::Display) -> Self {
        Self::InvalidParameters {
            context: format!("boundary condition: {context}"),
        }
    }

    /// Creates a thermo model failure error with context.
    pub(super) fn thermo_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ThermoModelFailed {
            context: context.into(),
            source: Box::new(err),
        }
    }
}

impl From<PerfectGasError> for CycleError {
    fn from(error: PerfectGasError) -> Self {
        Self::invalid(error.to_string())
    }
}
