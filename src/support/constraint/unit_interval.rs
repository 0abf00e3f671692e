use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the bounds 0 and 1 of the unit interval.
///
/// Implementations must ensure `zero() < one()` under the type's `PartialOrd`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

/// Marker type enforcing that a value lies in the open unit interval: `0 < x < 1`.
///
/// Mole fractions of a binary mixture must stay inside this interval whenever
/// `x·ln(x)`-type terms are evaluated for both components.
///
/// # Examples
///
/// ```
/// use twine_diffusion::support::constraint::{Constrained, ConstraintError, UnitIntervalOpen};
///
/// let x_a = Constrained::<_, UnitIntervalOpen>::new(0.25).unwrap();
/// assert_eq!(x_a.into_inner(), 0.25);
///
/// assert_eq!(UnitIntervalOpen::new(0.0), Err(ConstraintError::BelowMinimum));
/// assert_eq!(UnitIntervalOpen::new(1.0), Err(ConstraintError::AboveMaximum));
/// assert_eq!(UnitIntervalOpen::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs `Constrained<T, UnitIntervalOpen>` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
