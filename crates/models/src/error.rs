use thiserror::Error;

/// Errors that can occur when sizing a component.
///
/// The scaling laws do not validate their inputs. A design outside the
/// physical domain (zero frequency, zero airgap, negative ratios) yields NaN
/// or infinite quantities, which are reported here instead of being returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SizingError {
    /// A derived quantity is NaN or infinite.
    #[error("{quantity} is not finite ({value})")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// Returns `value` if it is finite.
pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64, SizingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SizingError::NonFinite { quantity, value })
    }
}
