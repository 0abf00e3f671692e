//! Mutual diffusion in binary liquid mixtures.
//!
//! [`DiffusionModel`] predicts the mutual diffusion coefficient of a binary
//! liquid mixture from the UNIQUAC activity-coefficient model and reports its
//! deviation from an experimental value.
//! The computational core is in the internal `core` module.
//!
//! Two adapters sit outside the core:
//!
//! - [`form`] turns named decimal strings into [`DiffusionInputs`].
//! - [`report`] renders a [`DiffusionResult`] for display.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_diffusion::models::transport::diffusion::{DiffusionInputs, DiffusionModel};
//!
//! let result = DiffusionModel.call(&DiffusionInputs::default()).unwrap();
//! assert!((result.d_calc - 1.35e-5).abs() < 1e-7);
//! assert!(result.error_pct < 2.0);
//! ```

pub(crate) mod core;
pub mod form;
pub mod report;

pub use self::core::{
    Composition, DiffusionInputs, DiffusionResult, DomainError, EvaluateError, Field,
    InteractionFactors, LnDiffusivity, LocalFractions,
};

use twine_core::Model;

/// UNIQUAC binary diffusion model.
///
/// The model holds no state.
/// Each evaluation is a pure function of its [`DiffusionInputs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffusionModel;

impl DiffusionModel {
    /// Predicts the diffusion coefficient for one mixture.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluateError`] if an input violates a physical
    /// precondition or the computation leaves the finite `f64` range.
    pub fn evaluate(&self, inputs: &DiffusionInputs) -> Result<DiffusionResult, EvaluateError> {
        self::core::evaluate(inputs)
    }
}

impl Model for DiffusionModel {
    type Input = DiffusionInputs;
    type Output = DiffusionResult;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}
