//! Display formatting for diffusion results.
//!
//! Local-area fractions are shown to four decimals, diffusivities in
//! scientific notation with two decimals, and the deviation as a percentage
//! with two decimals.

use std::fmt;

use super::DiffusionResult;

/// Formats a [`DiffusionResult`] as a multi-line summary.
///
/// ```
/// use twine_diffusion::models::transport::diffusion::{
///     DiffusionInputs, DiffusionModel, report::Report,
/// };
///
/// let result = DiffusionModel.evaluate(&DiffusionInputs::default()).unwrap();
/// let text = Report(&result).to_string();
///
/// assert!(text.contains("Calculated coefficient: 1.35e-05 cm²/s"));
/// assert!(text.ends_with("Deviation: 1.60%"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a DiffusionResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "θ_AA = {:.4}", r.theta_aa)?;
        writeln!(f, "θ_AB = {:.4}", r.theta_ab)?;
        writeln!(f, "θ_BA = {:.4}", r.theta_ba)?;
        writeln!(f, "θ_BB = {:.4}", r.theta_bb)?;
        writeln!(f, "Calculated coefficient: {} cm²/s", scientific(r.d_calc, 2))?;
        writeln!(f, "Experimental value: {} cm²/s", scientific(r.d_exp, 2))?;
        write!(f, "Deviation: {:.2}%", r.error_pct)
    }
}

/// Formats a value in scientific notation with a signed, two-digit exponent.
///
/// Rust's `{:e}` writes `1.35e-5`; this writes `1.35e-05`.
#[must_use]
pub fn scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        // NaN and infinities have no exponent.
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::transport::diffusion::{DiffusionInputs, DiffusionModel};

    #[test]
    fn scientific_exponents() {
        assert_eq!(scientific(1.351_253_598_357_829e-5, 2), "1.35e-05");
        assert_eq!(scientific(2.67e-5, 2), "2.67e-05");
        assert_eq!(scientific(1234.5, 1), "1.2e+03");
        assert_eq!(scientific(0.0, 2), "0.00e+00");
        assert_eq!(scientific(-4.2e-120, 2), "-4.20e-120");
        assert_eq!(scientific(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn reference_report() {
        let result = DiffusionModel.evaluate(&DiffusionInputs::default()).unwrap();

        assert_eq!(
            Report(&result).to_string(),
            "θ_AA = 0.3882\n\
             θ_AB = 0.2608\n\
             θ_BA = 0.6118\n\
             θ_BB = 0.7392\n\
             Calculated coefficient: 1.35e-05 cm²/s\n\
             Experimental value: 1.33e-05 cm²/s\n\
             Deviation: 1.60%"
        );
    }
}
