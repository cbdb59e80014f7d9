use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors returned by the [`CoolProp`](super::CoolProp) model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: "CoolProp abstract state mutex poisoned".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Class {
    Undefined,
    OutOfDomain,
    InvalidState,
}

/// Message fragments CoolProp uses, in match order.
///
/// `rfluids` surfaces CoolProp failures as plain strings, so classification
/// is best-effort. Anything unmatched is a calculation error.
const MARKERS: &[(&str, Class)] = &[
    ("not defined", Class::Undefined),
    ("critical point", Class::Undefined),
    ("out of range", Class::OutOfDomain),
    ("not in range", Class::OutOfDomain),
    ("outside the range of validity", Class::OutOfDomain),
    ("must be between", Class::OutOfDomain),
    ("quality must be", Class::OutOfDomain),
    ("not a valid number", Class::InvalidState),
    ("invalid state", Class::InvalidState),
];

fn classify(message: &str) -> PropertyError {
    let lowered = message.to_lowercase();
    let context = message.to_string();

    let class = MARKERS
        .iter()
        .find(|(marker, _)| lowered.contains(marker))
        .map(|&(_, class)| class);

    match class {
        Some(Class::Undefined) => PropertyError::Undefined { context },
        Some(Class::OutOfDomain) => PropertyError::OutOfDomain { context },
        Some(Class::InvalidState) => PropertyError::InvalidState { context },
        None => PropertyError::Calculation { context },
    }
}
