//! Transport property models.
//!
//! This module contains models for mass transport in liquid mixtures,
//! such as mutual diffusion coefficients.

pub mod diffusion;
