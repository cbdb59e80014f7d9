//! Property lookups with cycle-level error context.

use crate::support::thermo::{State, capability::StateFrom};

use super::CycleError;

/// Resolves a state through `model`, tagging a failure with `context`.
pub(super) fn state<M, Input>(
    model: &M,
    input: Input,
    context: &str,
) -> Result<State<M::Fluid>, CycleError>
where
    M: StateFrom<Input>,
{
    model
        .state_from(input)
        .map_err(|err| CycleError::thermo_failed(context, err))
}
