use thiserror::Error;

use super::Field;

/// A well-formed input that violates a physical precondition of the model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The mole fraction `x_A` is not strictly between zero and one.
    #[error("x_A out of open interval (0,1): {value}")]
    MoleFractionOutOfRange { value: f64 },

    /// The experimental diffusivity is zero and cannot be used as a divisor.
    #[error("division by zero experimental value")]
    ZeroExperimentalValue,

    /// A field that must be strictly positive is zero or negative.
    #[error("{field} must be strictly positive: {value}")]
    NotPositive { field: Field, value: f64 },

    /// A constrained field is `NaN`.
    #[error("{field} is not a number")]
    NotANumber { field: Field },
}

impl DomainError {
    /// Returns the input field responsible for this error.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::MoleFractionOutOfRange { .. } => Field::MoleFractionA,
            Self::ZeroExperimentalValue => Field::Experimental,
            Self::NotPositive { field, .. } | Self::NotANumber { field } => *field,
        }
    }
}

/// Errors that can occur while evaluating the diffusion model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluateError {
    /// An input violates a physical precondition.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An intermediate quantity or the result is infinite or `NaN`.
    ///
    /// Valid inputs can still overflow, for example when `|a / T|` is large
    /// enough that an interaction factor leaves the `f64` range.
    #[error("computation produced a non-finite {quantity}: {value}")]
    NonFinite {
        /// Name of the quantity that left the finite range (e.g., `"tau_AB"`).
        quantity: &'static str,

        /// The offending value.
        value: f64,
    },
}

impl EvaluateError {
    /// Checks that a computed quantity is finite.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::NonFinite`] if `value` is infinite or `NaN`.
    pub(super) fn check_finite(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity, value })
        }
    }
}
