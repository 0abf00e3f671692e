//! Contributions to the logarithm of the mixture diffusivity.

use super::{
    composition::Composition,
    inputs::Parameters,
    local_composition::{InteractionFactors, LocalFractions},
};

/// The five additive contributions to `ln(D_calc)`.
///
/// [`LnDiffusivity::total`] accumulates them in declaration order,
/// which fixes the rounding of the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LnDiffusivity {
    /// Mole-fraction weighted logarithm of the infinite-dilution diffusivities.
    pub combinatorial: f64,

    /// Free-volume correction, `2·Σ xᵢ·ln(xᵢ/φᵢ)`.
    pub free_volume: f64,

    /// Correction for the size difference between the two species.
    pub size_asymmetry: f64,

    /// Residual interaction term weighted by `x_A·q_B`.
    pub residual_a: f64,

    /// Residual interaction term weighted by `x_B·q_A`.
    pub residual_b: f64,
}

impl LnDiffusivity {
    pub(super) fn new(
        params: &Parameters,
        c: &Composition,
        tau: &InteractionFactors,
        local: &LocalFractions,
    ) -> Self {
        let Composition {
            x_a,
            x_b,
            y_a,
            y_b,
            phi_a,
            phi_b,
            ..
        } = *c;

        let ln_tau_ab = tau.tau_ab.ln();
        let ln_tau_ba = tau.tau_ba.ln();

        let combinatorial = x_a * params.d_ba_0.ln() + x_b * params.d_ab_0.ln();

        let free_volume = 2.0 * (x_a * (x_a / phi_a).ln() + x_b * (x_b / phi_b).ln());

        let size_asymmetry =
            2.0 * x_a * x_b * ((phi_a / x_a) * (1.0 - y_a / y_b) + (phi_b / x_b) * (1.0 - y_b / y_a));

        let residual_a = x_a
            * params.q_b
            * ((1.0 - local.theta_ab.powi(2)) * ln_tau_ab
                + (1.0 - local.theta_aa.powi(2)) * tau.tau_ba * ln_tau_ba);

        let residual_b = x_b
            * params.q_a
            * ((1.0 - local.theta_ba.powi(2)) * ln_tau_ba
                + (1.0 - local.theta_bb.powi(2)) * tau.tau_ab * ln_tau_ab);

        Self {
            combinatorial,
            free_volume,
            size_asymmetry,
            residual_a,
            residual_b,
        }
    }

    /// Returns `ln(D_calc)`.
    #[must_use]
    pub fn total(&self) -> f64 {
        let mut ln_d = self.combinatorial;
        ln_d += self.free_volume;
        ln_d += self.size_asymmetry;
        ln_d += self.residual_a;
        ln_d += self.residual_b;
        ln_d
    }
}
