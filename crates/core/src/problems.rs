mod bounds;
pub mod optimization;

pub use bounds::{Bounds, BoundsError};
pub use optimization::ConstrainedMinimizationProblem;
