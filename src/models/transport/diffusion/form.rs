//! Input adapter for named decimal strings.
//!
//! Presentation layers (web forms, CLIs, spreadsheets) usually hand over raw
//! text keyed by field name. [`FormInput`] collects that text and converts it
//! to [`DiffusionInputs`]:
//!
//! - Leading and trailing whitespace is ignored.
//! - A comma is accepted as the decimal separator (`"0,25"`).
//! - Blank or missing fields take their reference default.
//! - Every field that is not a number is reported, not only the first.
//!
//! Physical validation is left to the model.
//!
//! ```
//! use twine_diffusion::models::transport::diffusion::{Field, form::FormInput};
//!
//! let form: FormInput = [("x_A", "0,4"), ("T", " 298.15 "), ("D_exp", "")]
//!     .into_iter()
//!     .collect();
//! let inputs = form.to_inputs().unwrap();
//!
//! assert_eq!(inputs.x_a, 0.4);
//! assert_eq!(inputs.temperature, 298.15);
//! assert_eq!(inputs.d_exp, Field::Experimental.default_value());
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use super::{DiffusionInputs, Field};

/// A field whose text is not a valid decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{text}' is not a valid number for {field}")]
pub struct ParseError {
    /// The offending field.
    pub field: Field,

    /// The text as supplied, before any cleanup.
    pub text: String,
}

/// One or more fields could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .errors.len(), list(.errors))]
pub struct FormError {
    /// Parse errors in field order.
    pub errors: Vec<ParseError>,
}

impl FormError {
    /// Returns `true` if `field` failed to parse.
    #[must_use]
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.iter().any(|err| err.field == field)
    }
}

fn list(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parses a decimal number, accepting `,` as the decimal separator.
///
/// # Errors
///
/// Returns a [`ParseError`] if the cleaned text is not a number.
pub fn parse_decimal(field: Field, text: &str) -> Result<f64, ParseError> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ParseError {
            field,
            text: text.to_owned(),
        })
}

/// Raw text for the diffusion model inputs, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    values: BTreeMap<Field, String>,
}

impl FormInput {
    /// Creates an empty form, in which every field takes its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw text for a field.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.values.insert(field, text.into());
    }

    /// Returns the supplied text for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Returns the text to redisplay for a field.
    ///
    /// Supplied text is echoed without surrounding whitespace, even when
    /// invalid, so the user can correct it. Blank or missing fields show the
    /// reference default as written in [`Field::default_text`].
    #[must_use]
    pub fn echo(&self, field: Field) -> &str {
        match self.supplied(field) {
            Some(text) => text.trim(),
            None => field.default_text(),
        }
    }

    /// Converts the form into model inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] listing every field that is not a number.
    pub fn to_inputs(&self) -> Result<DiffusionInputs, FormError> {
        let mut inputs = DiffusionInputs::default();
        let mut errors = Vec::new();

        for field in Field::ALL {
            let Some(text) = self.supplied(field) else {
                continue;
            };
            match parse_decimal(field, text) {
                Ok(value) => inputs = inputs.with(field, value),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(inputs)
        } else {
            Err(FormError { errors })
        }
    }

    /// Returns the supplied text, treating whitespace-only text as missing.
    fn supplied(&self, field: Field) -> Option<&str> {
        self.get(field).filter(|text| !text.trim().is_empty())
    }
}

/// Collects `(name, text)` pairs, ignoring names that are not model fields.
impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (name, text) in iter {
            if let Some(field) = Field::from_name(name.as_ref()) {
                form.set(field, text);
            }
        }
        form
    }
}
