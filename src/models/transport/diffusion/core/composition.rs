//! Bulk composition measures: free-volume and area fractions.

use super::inputs::Parameters;

/// Bulk composition of the binary mixture.
///
/// The free-volume fractions weight mole fractions by the cube root of each
/// component's UNIQUAC volume parameter, and the area fractions weight them by
/// the surface-area parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    /// Mole fraction of component A.
    pub x_a: f64,
    /// Mole fraction of component B, `1 - x_A`.
    pub x_b: f64,
    /// Volume radius of A, `r_A^(1/3)`.
    pub y_a: f64,
    /// Volume radius of B, `r_B^(1/3)`.
    pub y_b: f64,
    /// Free-volume fraction of A.
    pub phi_a: f64,
    /// Free-volume fraction of B.
    ///
    /// Evaluated as its own ratio rather than `1 - φ_A`.
    /// The two differ in the last bit for some inputs.
    pub phi_b: f64,
    /// Area fraction of A.
    pub theta_a: f64,
    /// Area fraction of B, `1 - θ_A`.
    pub theta_b: f64,
}

impl Composition {
    pub(super) fn new(params: &Parameters) -> Self {
        let x_a = params.x_a;
        let x_b = 1.0 - x_a;

        let y_a = params.r_a.powf(1.0 / 3.0);
        let y_b = params.r_b.powf(1.0 / 3.0);

        let volume = x_a * y_a + x_b * y_b;
        let phi_a = (x_a * y_a) / volume;
        let phi_b = x_b * y_b / volume;

        let theta_a = (x_a * params.q_a) / (x_a * params.q_a + x_b * params.q_b);
        let theta_b = 1.0 - theta_a;

        Self {
            x_a,
            x_b,
            y_a,
            y_b,
            phi_a,
            phi_b,
            theta_a,
            theta_b,
        }
    }
}
