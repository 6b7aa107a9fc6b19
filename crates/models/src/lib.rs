//! Sizing models for power-electronics components.
//!
//! # Organization
//!
//! - [`inductor`]: a gapped E-core inductor sized from airgap and induction.
//! - [`converter`]: a buck DC/DC converter (pot-core inductor, capacitor,
//!   IGBT and diode, heatsink) sized from eight design variables.
//!
//! # Model structure
//!
//! Each model module keeps its scaling-law computation in an internal `core`
//! submodule. The [`watt_core::Model`] implementation is a thin adapter that
//! delegates to it, and a `problem` type exposes the model to the
//! constrained solvers in `watt-solvers`.
//!
//! Specifications and reference components are plain configuration structs
//! with `Default` values matching the published sizing data. Models hold
//! them by value and never mutate them.

pub mod converter;
pub mod inductor;
pub mod units;

mod error;

pub use error::SizingError;
