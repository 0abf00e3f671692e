//! UNIQUAC-based mutual diffusion coefficient of a binary liquid mixture.
//!
//! The logarithm of the mixture diffusivity is a mole-fraction weighted
//! combination of the infinite-dilution diffusivities, corrected for
//! free-volume and size differences between the species and for the
//! energetic interactions captured by the UNIQUAC local-area fractions.
//!
//! Evaluation is a closed-form, single-pass computation:
//! inputs are validated up front, then each group of intermediate quantities
//! is computed in a fixed order since later terms depend on earlier ones.

mod composition;
mod error;
mod inputs;
mod ln_diffusivity;
mod local_composition;
mod results;

#[cfg(test)]
mod test_support;

pub use composition::Composition;
pub use error::{DomainError, EvaluateError};
pub use inputs::{DiffusionInputs, Field};
pub use ln_diffusivity::LnDiffusivity;
pub use local_composition::{InteractionFactors, LocalFractions};
pub use results::DiffusionResult;

use inputs::Parameters;

/// Evaluates the diffusion model for one binary mixture.
///
/// # Errors
///
/// Returns [`EvaluateError::Domain`] if an input violates a physical
/// precondition, or [`EvaluateError::NonFinite`] if an intermediate quantity
/// leaves the finite `f64` range.
pub(super) fn evaluate(inputs: &DiffusionInputs) -> Result<DiffusionResult, EvaluateError> {
    let params = Parameters::new(inputs)?;

    let composition = Composition::new(&params);
    let tau = InteractionFactors::new(&params)?;
    let local = LocalFractions::new(&composition, &tau);

    let ln_d = LnDiffusivity::new(&params, &composition, &tau, &local);
    let d_calc = EvaluateError::check_finite("ln_D", ln_d.total())?.exp();
    let d_calc = EvaluateError::check_finite("D_calc", d_calc)?;

    let error_pct = ((d_calc - params.d_exp) / params.d_exp).abs() * 100.0;
    let error_pct = EvaluateError::check_finite("error_pct", error_pct)?;

    Ok(DiffusionResult {
        theta_aa: local.theta_aa,
        theta_ab: local.theta_ab,
        theta_ba: local.theta_ba,
        theta_bb: local.theta_bb,
        d_calc,
        d_exp: params.d_exp,
        error_pct,
        composition,
        tau,
        ln_d,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::test_support::{equal_components, swapped};

    #[test]
    fn reference_mixture() {
        let result = evaluate(&DiffusionInputs::default()).unwrap();

        assert_relative_eq!(result.theta_aa, 0.388_227_672_975_323_23, max_relative = 1e-13);
        assert_relative_eq!(result.theta_ab, 0.260_830_263_182_089, max_relative = 1e-13);
        assert_relative_eq!(result.theta_ba, 0.611_772_327_024_676_7, max_relative = 1e-13);
        assert_relative_eq!(result.theta_bb, 0.739_169_736_817_910_9, max_relative = 1e-13);
        assert_relative_eq!(result.d_calc, 1.351_253_598_357_829e-5, max_relative = 1e-12);
        assert_relative_eq!(result.d_exp, 1.33e-5);
        assert_relative_eq!(result.error_pct, 1.598_014_914_122_478_2, max_relative = 1e-10);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let inputs = DiffusionInputs::default();
        let first = evaluate(&inputs).unwrap();
        let second = evaluate(&inputs).unwrap();

        let bits = |r: &DiffusionResult| {
            [
                r.theta_aa, r.theta_ab, r.theta_ba, r.theta_bb, r.d_calc, r.d_exp, r.error_pct,
            ]
            .map(f64::to_bits)
        };
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn contributions_sum_to_log_of_result() {
        let result = evaluate(&DiffusionInputs::default()).unwrap();
        assert_eq!(result.ln_d.total().exp().to_bits(), result.d_calc.to_bits());
    }

    #[test]
    fn local_fractions_lie_in_unit_interval() {
        for x_a in [0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            for (a_ab, a_ba) in [(-10.7575, 194.5302), (300.0, -150.0), (0.0, 0.0)] {
                let inputs = DiffusionInputs {
                    x_a,
                    a_ab,
                    a_ba,
                    ..DiffusionInputs::default()
                };
                let local = evaluate(&inputs).unwrap().local_fractions();

                for theta in [
                    local.theta_aa,
                    local.theta_ab,
                    local.theta_ba,
                    local.theta_bb,
                ] {
                    assert!(theta > 0.0 && theta < 1.0, "theta={theta} at x_A={x_a}");
                }
            }
        }
    }

    #[test]
    fn swapping_components_preserves_diffusivity() {
        for x_a in [0.1, 0.25, 0.6, 0.95] {
            let inputs = DiffusionInputs {
                x_a,
                ..DiffusionInputs::default()
            };
            let forward = evaluate(&inputs).unwrap();
            let reverse = evaluate(&swapped(&inputs)).unwrap();

            assert_relative_eq!(forward.d_calc, reverse.d_calc, max_relative = 1e-12);
            assert_relative_eq!(forward.theta_aa, reverse.theta_bb, max_relative = 1e-12);
            assert_relative_eq!(forward.theta_ab, reverse.theta_ba, max_relative = 1e-12);
        }
    }

    #[test]
    fn equal_components_at_equimolar_composition() {
        let result = evaluate(&equal_components()).unwrap();

        assert_eq!(result.tau.tau_ab, 1.0);
        assert_eq!(result.tau.tau_ba, 1.0);
        assert_relative_eq!(result.composition.theta_a, 0.5);
        assert_relative_eq!(result.composition.theta_b, 0.5);
        assert_relative_eq!(result.composition.phi_a, 0.5);
        assert_relative_eq!(result.theta_aa, 0.5);
        assert_relative_eq!(result.theta_ab, 0.5);
        assert_relative_eq!(result.theta_ba, 0.5);
        assert_relative_eq!(result.theta_bb, 0.5);

        // Geometric mean of the infinite-dilution diffusivities.
        assert_relative_eq!(result.d_calc, (1.0e-5_f64 * 2.0e-5).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn mole_fraction_boundaries_are_rejected() {
        for x_a in [0.0, 1.0] {
            let inputs = DiffusionInputs {
                x_a,
                ..DiffusionInputs::default()
            };
            let err = evaluate(&inputs).unwrap_err();

            assert_eq!(
                err,
                EvaluateError::Domain(DomainError::MoleFractionOutOfRange { value: x_a })
            );
            assert!(err.to_string().starts_with("x_A out of open interval (0,1)"));
        }
    }

    #[test]
    fn zero_experimental_value_is_rejected() {
        let inputs = DiffusionInputs {
            d_exp: 0.0,
            ..DiffusionInputs::default()
        };
        assert_eq!(
            evaluate(&inputs).unwrap_err().to_string(),
            "division by zero experimental value"
        );
    }

    #[test]
    fn negative_surface_area_names_the_field() {
        let inputs = DiffusionInputs {
            q_a: -1.432,
            ..DiffusionInputs::default()
        };
        match evaluate(&inputs) {
            Err(EvaluateError::Domain(err)) => {
                assert_eq!(err.field(), Field::SurfaceA);
                assert!(err.to_string().contains("q_A"));
            }
            other => panic!("expected a domain error, got {other:?}"),
        }
    }

    #[test]
    fn negative_experimental_value_uses_its_magnitude() {
        let inputs = DiffusionInputs {
            d_exp: -1.33e-5,
            ..DiffusionInputs::default()
        };
        let result = evaluate(&inputs).unwrap();
        let expected = (result.d_calc + 1.33e-5) / 1.33e-5 * 100.0;
        assert_relative_eq!(result.error_pct, expected, max_relative = 1e-12);
    }

    #[test]
    fn extreme_interaction_energy_is_a_computation_failure() {
        let inputs = DiffusionInputs {
            a_ab: 1.0e6,
            temperature: 1.0,
            ..DiffusionInputs::default()
        };
        // τ_AB underflows to zero, so ln(τ_AB) is -∞ and the sum is not finite.
        assert!(matches!(
            evaluate(&inputs),
            Err(EvaluateError::NonFinite { quantity: "ln_D", .. })
        ));
    }
}
