use thiserror::Error;

/// Box bounds on the solver variables, one `(lower, upper)` pair per variable.
///
/// Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<const N: usize> {
    lower: [f64; N],
    upper: [f64; N],
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("bounds of variable {index} must be finite, got [{lower}, {upper}]")]
    NotFinite { index: usize, lower: f64, upper: f64 },

    #[error("lower bound of variable {index} must be below its upper bound, got [{lower}, {upper}]")]
    Empty { index: usize, lower: f64, upper: f64 },
}

impl<const N: usize> Bounds<N> {
    /// Creates bounds from `(lower, upper)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or if a pair does not
    /// describe an interval of positive width.
    pub fn new(pairs: [(f64, f64); N]) -> Result<Self, BoundsError> {
        let mut lower = [0.0; N];
        let mut upper = [0.0; N];

        for (index, (lo, hi)) in pairs.into_iter().enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(BoundsError::NotFinite {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
            if lo >= hi {
                return Err(BoundsError::Empty {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
            lower[index] = lo;
            upper[index] = hi;
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lower bounds.
    #[must_use]
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    /// Returns the upper bounds.
    #[must_use]
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Returns the width `upper - lower` of each interval.
    #[must_use]
    pub fn widths(&self) -> [f64; N] {
        std::array::from_fn(|i| self.upper[i] - self.lower[i])
    }

    /// Projects `x` onto the box.
    #[must_use]
    pub fn clamp(&self, x: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| x[i].clamp(self.lower[i], self.upper[i]))
    }

    /// Returns true if every component of `x` lies within its bounds.
    #[must_use]
    pub fn contains(&self, x: &[f64; N]) -> bool {
        x.iter()
            .zip(self.lower.iter().zip(&self.upper))
            .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }

    /// Maps `x` onto the unit box, `0` at the lower bound and `1` at the upper.
    #[must_use]
    pub fn to_unit(&self, x: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| (x[i] - self.lower[i]) / (self.upper[i] - self.lower[i]))
    }

    /// Maps a point of the unit box back onto the bounds.
    #[must_use]
    pub fn from_unit(&self, z: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| {
            let x = self.lower[i] + z[i] * (self.upper[i] - self.lower[i]);
            // Rounding in the affine map must not leave the box.
            x.clamp(self.lower[i], self.upper[i])
        })
    }
}
