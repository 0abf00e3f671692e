//! # Twine Diffusion
//!
//! Transport property models for binary liquid mixtures, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The main entry point is
//! [`DiffusionModel`](models::transport::diffusion::DiffusionModel), which
//! predicts the mutual diffusion coefficient of a binary liquid mixture from
//! the UNIQUAC activity-coefficient model.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Model-specific utility code stays in each
//! model's internal `core` module and is not part of the public API.

pub mod models;
pub mod support;
