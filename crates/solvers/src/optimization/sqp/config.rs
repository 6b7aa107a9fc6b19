use thiserror::Error;

/// Configuration for the SQP solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    feasibility_tol: f64,
    fd_step: f64,
}

/// Errors that can occur when validating an SQP solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("feasibility_tol must be finite and non-negative")]
    FeasibilityTol,

    #[error("fd_step must be in (0, 0.5)")]
    FdStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-8, 1e-6, f64::EPSILON.sqrt()).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// - `max_iters`: maximum number of SQP iterations.
    /// - `tolerance`: convergence threshold on the objective change (or step
    ///   length) and on the summed constraint violation.
    /// - `feasibility_tol`: summed violation below which a point counts as
    ///   feasible when picking the best point.
    /// - `fd_step`: forward-difference step, relative to the width of each
    ///   variable's bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if the
    /// finite-difference step does not fit in the unit interval.
    pub fn new(
        max_iters: usize,
        tolerance: f64,
        feasibility_tol: f64,
        fd_step: f64,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !feasibility_tol.is_finite() || feasibility_tol < 0.0 {
            return Err(ConfigError::FeasibilityTol);
        }
        if !fd_step.is_finite() || fd_step <= 0.0 || fd_step >= 0.5 {
            return Err(ConfigError::FdStep);
        }

        Ok(Self {
            max_iters,
            tolerance,
            feasibility_tol,
            fd_step,
        })
    }

    /// Returns the maximum number of SQP iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the summed violation below which a point counts as feasible.
    #[must_use]
    pub fn feasibility_tol(&self) -> f64 {
        self.feasibility_tol
    }

    /// Returns the finite-difference step on the unit box.
    #[must_use]
    pub fn fd_step(&self) -> f64 {
        self.fd_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_slsqp_settings() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert!((config.tolerance() - 1e-8).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_zero_tolerance() {
        assert_eq!(
            Config::new(10, 0.0, 1e-6, 1e-8),
            Err(ConfigError::Tolerance)
        );
    }

    #[test]
    fn rejects_negative_feasibility_tol() {
        assert_eq!(
            Config::new(10, 1e-8, -1.0, 1e-8),
            Err(ConfigError::FeasibilityTol)
        );
    }

    #[test]
    fn rejects_oversized_fd_step() {
        assert_eq!(Config::new(10, 1e-8, 1e-6, 0.5), Err(ConfigError::FdStep));
        assert_eq!(
            Config::new(10, 1e-8, 1e-6, f64::NAN),
            Err(ConfigError::FdStep)
        );
    }
}
