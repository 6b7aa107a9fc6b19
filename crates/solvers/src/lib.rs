//! Numerical solvers for the Watt sizing framework.
//!
//! # Modules
//!
//! - [`optimization`] — constrained minimization of an objective over a box

pub mod optimization;
