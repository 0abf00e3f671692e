//! UNIQUAC interaction factors and local-area fractions.

use super::{EvaluateError, composition::Composition, inputs::Parameters};

/// Boltzmann-type interaction factors, `τ = exp(-a / T)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionFactors {
    pub tau_ab: f64,
    pub tau_ba: f64,
}

impl InteractionFactors {
    /// Evaluates both factors at the mixture temperature.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::NonFinite`] if either factor overflows.
    pub(super) fn new(params: &Parameters) -> Result<Self, EvaluateError> {
        let t = params.temperature;

        let tau_ab = (-params.a_ab / t).exp();
        let tau_ba = (-params.a_ba / t).exp();

        Ok(Self {
            tau_ab: EvaluateError::check_finite("tau_AB", tau_ab)?,
            tau_ba: EvaluateError::check_finite("tau_BA", tau_ba)?,
        })
    }
}

/// Local-area fractions around each species.
///
/// `θ_XY` is the fraction of the surface area of species X surrounded by Y,
/// so `θ_AA + θ_BA = 1` and `θ_AB + θ_BB = 1` up to rounding.
/// Each fraction is evaluated from its own ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFractions {
    pub theta_aa: f64,
    pub theta_ab: f64,
    pub theta_ba: f64,
    pub theta_bb: f64,
}

impl LocalFractions {
    pub(super) fn new(composition: &Composition, tau: &InteractionFactors) -> Self {
        let Composition {
            theta_a, theta_b, ..
        } = *composition;

        Self {
            theta_aa: theta_a / (theta_a + theta_b * tau.tau_ba),
            theta_bb: theta_b / (theta_a * tau.tau_ab + theta_b),
            theta_ab: (theta_a * tau.tau_ab) / (theta_a * tau.tau_ab + theta_b),
            theta_ba: (theta_b * tau.tau_ba) / (theta_a + theta_b * tau.tau_ba),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::transport::diffusion::core::{DiffusionInputs, Field};

    fn factors(inputs: &DiffusionInputs) -> Result<InteractionFactors, EvaluateError> {
        InteractionFactors::new(&Parameters::new(inputs).unwrap())
    }

    #[test]
    fn reference_factors() {
        let tau = factors(&DiffusionInputs::default()).unwrap();
        assert_relative_eq!(tau.tau_ab, 1.034_951_681_247_419, max_relative = 1e-14);
        assert_relative_eq!(tau.tau_ba, 0.537_275_537_061_214, max_relative = 1e-14);
    }

    #[test]
    fn zero_energy_is_neutral() {
        let inputs = DiffusionInputs::default()
            .with(Field::InteractionAb, 0.0)
            .with(Field::InteractionBa, 0.0);
        let tau = factors(&inputs).unwrap();
        assert_eq!(tau.tau_ab, 1.0);
        assert_eq!(tau.tau_ba, 1.0);
    }

    #[test]
    fn overflow_is_reported() {
        let inputs = DiffusionInputs::default()
            .with(Field::InteractionBa, -1.0e6)
            .with(Field::Temperature, 1.0);
        assert_eq!(
            factors(&inputs),
            Err(EvaluateError::NonFinite {
                quantity: "tau_BA",
                value: f64::INFINITY,
            })
        );
    }

    #[test]
    fn fractions_pair_to_one() {
        let composition = Composition {
            x_a: 0.4,
            x_b: 0.6,
            y_a: 1.0,
            y_b: 1.0,
            phi_a: 0.4,
            phi_b: 0.6,
            theta_a: 0.4,
            theta_b: 0.6,
        };
        let tau = InteractionFactors {
            tau_ab: 1.7,
            tau_ba: 0.3,
        };
        let local = LocalFractions::new(&composition, &tau);

        assert_relative_eq!(local.theta_aa + local.theta_ba, 1.0, epsilon = 1e-15);
        assert_relative_eq!(local.theta_ab + local.theta_bb, 1.0, epsilon = 1e-15);
        assert_relative_eq!(local.theta_aa, 0.4 / 0.58, epsilon = 1e-15);
    }
}
