use thiserror::Error;

/// Failure reported by a property provider while resolving a state.
///
/// Cycle solvers wrap these in `CycleError::ThermoModelFailed` along with
/// the cycle state that was being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// No value exists for the requested input pair, such as a saturation
    /// lookup above the critical point.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// An input lies outside the range the provider covers.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The input pair does not describe a physical state of the fluid.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The provider failed internally.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
