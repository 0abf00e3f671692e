//! Raw and validated inputs for binary diffusion evaluation.

use std::fmt;

use crate::support::constraint::{
    Constrained, ConstraintError, NonZero, StrictlyPositive, UnitIntervalOpen,
};

use super::DomainError;

/// One of the eleven named inputs of the diffusion model.
///
/// Variants are declared in the order fields are validated and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Mole fraction of component A (`x_A`).
    MoleFractionA,
    /// Infinite-dilution diffusivity of A in B (`D_AB_0`), cm²/s.
    DilutionAb,
    /// Infinite-dilution diffusivity of B in A (`D_BA_0`), cm²/s.
    DilutionBa,
    /// UNIQUAC surface-area parameter of A (`q_A`).
    SurfaceA,
    /// UNIQUAC surface-area parameter of B (`q_B`).
    SurfaceB,
    /// UNIQUAC volume parameter of A (`r_A`).
    VolumeA,
    /// UNIQUAC volume parameter of B (`r_B`).
    VolumeB,
    /// Binary interaction energy `a_AB`, K.
    InteractionAb,
    /// Binary interaction energy `a_BA`, K.
    InteractionBa,
    /// Absolute temperature (`T`), K.
    Temperature,
    /// Experimentally measured diffusivity (`D_exp`), cm²/s.
    Experimental,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 11] = [
        Field::MoleFractionA,
        Field::DilutionAb,
        Field::DilutionBa,
        Field::SurfaceA,
        Field::SurfaceB,
        Field::VolumeA,
        Field::VolumeB,
        Field::InteractionAb,
        Field::InteractionBa,
        Field::Temperature,
        Field::Experimental,
    ];

    /// Returns the canonical field name (e.g., `"x_A"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::MoleFractionA => "x_A",
            Field::DilutionAb => "D_AB_0",
            Field::DilutionBa => "D_BA_0",
            Field::SurfaceA => "q_A",
            Field::SurfaceB => "q_B",
            Field::VolumeA => "r_A",
            Field::VolumeB => "r_B",
            Field::InteractionAb => "a_AB",
            Field::InteractionBa => "a_BA",
            Field::Temperature => "T",
            Field::Experimental => "D_exp",
        }
    }

    /// Looks up a field by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Returns the reference value used when a field is not supplied.
    #[must_use]
    pub fn default_value(self) -> f64 {
        DiffusionInputs::default().get(self)
    }

    /// Returns the reference value as it is written for display (e.g., `"2.1e-5"`).
    #[must_use]
    pub fn default_text(self) -> &'static str {
        match self {
            Field::MoleFractionA => "0.25",
            Field::DilutionAb => "2.1e-5",
            Field::DilutionBa => "2.67e-5",
            Field::SurfaceA => "1.432",
            Field::SurfaceB => "1.4",
            Field::VolumeA => "1.4311",
            Field::VolumeB => "0.92",
            Field::InteractionAb => "-10.7575",
            Field::InteractionBa => "194.5302",
            Field::Temperature => "313.13",
            Field::Experimental => "1.33e-5",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The eleven physical inputs of a binary diffusion evaluation.
///
/// Values are unchecked; validation happens when the model evaluates them.
/// Diffusivities are in cm²/s, while temperature and interaction energies are in K.
///
/// The [`Default`] implementation returns a reference mixture at 313.13 K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionInputs {
    pub x_a: f64,
    pub d_ab_0: f64,
    pub d_ba_0: f64,
    pub q_a: f64,
    pub q_b: f64,
    pub r_a: f64,
    pub r_b: f64,
    pub a_ab: f64,
    pub a_ba: f64,
    pub temperature: f64,
    pub d_exp: f64,
}

impl Default for DiffusionInputs {
    fn default() -> Self {
        Self {
            x_a: 0.25,
            d_ab_0: 2.1e-5,
            d_ba_0: 2.67e-5,
            q_a: 1.432,
            q_b: 1.4,
            r_a: 1.4311,
            r_b: 0.92,
            a_ab: -10.7575,
            a_ba: 194.5302,
            temperature: 313.13,
            d_exp: 1.33e-5,
        }
    }
}

impl DiffusionInputs {
    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::MoleFractionA => self.x_a,
            Field::DilutionAb => self.d_ab_0,
            Field::DilutionBa => self.d_ba_0,
            Field::SurfaceA => self.q_a,
            Field::SurfaceB => self.q_b,
            Field::VolumeA => self.r_a,
            Field::VolumeB => self.r_b,
            Field::InteractionAb => self.a_ab,
            Field::InteractionBa => self.a_ba,
            Field::Temperature => self.temperature,
            Field::Experimental => self.d_exp,
        }
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: Field, value: f64) -> Self {
        let slot = match field {
            Field::MoleFractionA => &mut self.x_a,
            Field::DilutionAb => &mut self.d_ab_0,
            Field::DilutionBa => &mut self.d_ba_0,
            Field::SurfaceA => &mut self.q_a,
            Field::SurfaceB => &mut self.q_b,
            Field::VolumeA => &mut self.r_a,
            Field::VolumeB => &mut self.r_b,
            Field::InteractionAb => &mut self.a_ab,
            Field::InteractionBa => &mut self.a_ba,
            Field::Temperature => &mut self.temperature,
            Field::Experimental => &mut self.d_exp,
        };
        *slot = value;
        self
    }
}

/// Inputs that satisfy every physical precondition of the model.
///
/// Temperature and interaction energies stay in kelvin, so `a / T` is formed
/// from the values exactly as supplied.
#[derive(Debug, Clone, Copy)]
pub(super) struct Parameters {
    pub x_a: f64,
    pub d_ab_0: f64,
    pub d_ba_0: f64,
    pub q_a: f64,
    pub q_b: f64,
    pub r_a: f64,
    pub r_b: f64,
    pub a_ab: f64,
    pub a_ba: f64,
    pub temperature: f64,
    pub d_exp: f64,
}

impl Parameters {
    /// Validates raw inputs, reporting the first violated field.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] naming the offending field.
    pub(super) fn new(inputs: &DiffusionInputs) -> Result<Self, DomainError> {
        let x_a = Constrained::<f64, UnitIntervalOpen>::new(inputs.x_a).map_err(|err| match err {
            ConstraintError::NotANumber => DomainError::NotANumber {
                field: Field::MoleFractionA,
            },
            _ => DomainError::MoleFractionOutOfRange { value: inputs.x_a },
        })?;

        let d_ab_0 = positive(inputs, Field::DilutionAb)?;
        let d_ba_0 = positive(inputs, Field::DilutionBa)?;
        let q_a = positive(inputs, Field::SurfaceA)?;
        let q_b = positive(inputs, Field::SurfaceB)?;
        let r_a = positive(inputs, Field::VolumeA)?;
        let r_b = positive(inputs, Field::VolumeB)?;

        let temperature = positive(inputs, Field::Temperature)?;

        let d_exp = NonZero::new(inputs.d_exp).map_err(|err| match err {
            ConstraintError::NotANumber => DomainError::NotANumber {
                field: Field::Experimental,
            },
            _ => DomainError::ZeroExperimentalValue,
        })?;

        Ok(Self {
            x_a: x_a.into_inner(),
            d_ab_0: d_ab_0.into_inner(),
            d_ba_0: d_ba_0.into_inner(),
            q_a: q_a.into_inner(),
            q_b: q_b.into_inner(),
            r_a: r_a.into_inner(),
            r_b: r_b.into_inner(),
            a_ab: inputs.a_ab,
            a_ba: inputs.a_ba,
            temperature: temperature.into_inner(),
            d_exp: d_exp.into_inner(),
        })
    }
}

/// Checks that a field is strictly positive.
fn positive(
    inputs: &DiffusionInputs,
    field: Field,
) -> Result<Constrained<f64, StrictlyPositive>, DomainError> {
    let value = inputs.get(field);
    StrictlyPositive::new(value).map_err(|err| match err {
        ConstraintError::NotANumber => DomainError::NotANumber { field },
        _ => DomainError::NotPositive { field, value },
    })
}
