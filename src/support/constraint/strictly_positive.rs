use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use twine_cycles::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// assert!(Constrained::<_, StrictlyPositive>::new(0).is_err());
/// assert!(Constrained::<_, StrictlyPositive>::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
