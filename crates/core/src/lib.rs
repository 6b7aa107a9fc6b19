//! Core traits and types for the Watt sizing framework.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! sizing models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`ConstrainedMinimizationProblem`] — adapts solver variables to model
//!   inputs and extracts an objective and inequality margins from outputs
//! - [`Bounds`] — validated per-variable box bounds

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{Bounds, BoundsError, ConstrainedMinimizationProblem};
pub use {model::Model, model::Snapshot};
