//! Reusable observers for the Watt sizing framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `watt-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasObjective`], [`HasViolation`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`] reports SQP progress as `tracing` events.
//! - [`StopAtTarget`] stops any solver whose events carry an objective and a
//!   violation once a feasible point is good enough.
//!
//! [`Observer`]: watt_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasViolation`]: traits::HasViolation
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod log;
mod target;

pub use log::LogObserver;
pub use target::StopAtTarget;
