//! Results of a binary diffusion evaluation.

use super::{
    composition::Composition,
    ln_diffusivity::LnDiffusivity,
    local_composition::{InteractionFactors, LocalFractions},
};

/// Predicted diffusivity, its deviation from experiment, and the quantities it was built from.
///
/// Diffusivities are in cm²/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionResult {
    /// Local-area fraction of A around A.
    pub theta_aa: f64,
    /// Local-area fraction of A around B.
    pub theta_ab: f64,
    /// Local-area fraction of B around A.
    pub theta_ba: f64,
    /// Local-area fraction of B around B.
    pub theta_bb: f64,

    /// Predicted mutual diffusion coefficient.
    pub d_calc: f64,

    /// Experimental diffusion coefficient, as supplied.
    pub d_exp: f64,

    /// Relative deviation of `d_calc` from `d_exp`, in percent.
    pub error_pct: f64,

    /// Bulk composition measures.
    pub composition: Composition,

    /// Interaction factors `τ_AB` and `τ_BA`.
    pub tau: InteractionFactors,

    /// Additive contributions to `ln(d_calc)`.
    pub ln_d: LnDiffusivity,
}

impl DiffusionResult {
    /// Returns the four local-area fractions as a group.
    #[must_use]
    pub fn local_fractions(&self) -> LocalFractions {
        LocalFractions {
            theta_aa: self.theta_aa,
            theta_ab: self.theta_ab,
            theta_ba: self.theta_ba,
            theta_bb: self.theta_bb,
        }
    }
}
