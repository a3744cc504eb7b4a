//! Fast stochastic oscillator (%K).
//!
//! Locates the source value within the rolling high-low range:
//!
//! ```text
//! %K[i] = 100 × (P[i] - lowest_low[i]) / (highest_high[i] - lowest_low[i])
//! ```
//!
//! A flat window (highest high equal to lowest low) divides by zero and the
//! result is ±inf or NaN, passed through as-is.

use crate::error::Result;
use crate::kernels::rolling::{rolling_max, rolling_min};
use crate::traits::{validate_period, validate_same_length, SeriesElement};

/// Computes the fast stochastic %K over a rolling window.
///
/// # Arguments
///
/// * `source` - The series to locate (typically closes)
/// * `high`, `low` - Aligned range series
/// * `period` - The extrema window
///
/// # Returns
///
/// The %K values (NaN for the first `period - 1` positions), or an empty
/// vector when the series are shorter than the window.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length, or
/// `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::stochastic::stoch;
///
/// let close = vec![9.5_f64, 10.5, 11.5, 10.0];
/// let high = vec![10.0_f64, 11.0, 12.0, 11.0];
/// let low = vec![9.0_f64, 10.0, 10.5, 9.5];
/// let k = stoch(&close, &high, &low, 3).unwrap();
///
/// assert!(k[1].is_nan());
/// // (11.5 - 9) / (12 - 9) × 100
/// assert!((k[2] - 100.0 * 2.5 / 3.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the %K values, which should be used"]
pub fn stoch<T: SeriesElement>(
    source: &[T],
    high: &[T],
    low: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_same_length(source, high)?;
    validate_same_length(source, low)?;

    if source.len() < period {
        return Ok(Vec::new());
    }

    let lowest = rolling_min(low, period);
    let highest = rolling_max(high, period);

    let hundred = T::hundred();
    let mut out = Vec::with_capacity(source.len());
    for i in 0..source.len() {
        out.push(hundred * (source[i] - lowest[i]) / (highest[i] - lowest[i]));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_nan_prefix, EPSILON};

    #[test]
    fn test_stoch_basic() {
        let close = vec![9.5_f64, 10.5, 11.5, 10.0];
        let high = vec![10.0_f64, 11.0, 12.0, 11.0];
        let low = vec![9.0_f64, 10.0, 10.5, 9.5];
        let k = stoch(&close, &high, &low, 3).unwrap();

        assert_eq!(count_nan_prefix(&k), 2);
        assert!(approx_eq(k[2], 100.0 * 2.5 / 3.0, EPSILON));
        assert!(approx_eq(k[3], 100.0 * 0.5 / 2.5, EPSILON));
    }

    #[test]
    fn test_stoch_at_extremes() {
        // rising: the source sits on the window's highest high
        let high = vec![2.0_f64, 3.0, 4.0];
        let low = vec![1.0_f64, 2.0, 3.0];
        let at_high = stoch(&high, &high, &low, 2).unwrap();
        assert!(approx_eq(at_high[2], 100.0, EPSILON));

        // falling: the source sits on the window's lowest low
        let high = vec![4.0_f64, 3.0, 2.0];
        let low = vec![3.0_f64, 2.0, 1.0];
        let at_low = stoch(&low, &high, &low, 2).unwrap();
        assert!(approx_eq(at_low[2], 0.0, EPSILON));
    }

    #[test]
    fn test_stoch_flat_window_divides_by_zero() {
        let flat = vec![5.0_f64; 6];
        let k = stoch(&flat, &flat, &flat, 3).unwrap();
        for &value in k.iter().skip(2) {
            assert!(value.is_nan()); // 0/0
        }
    }

    #[test]
    fn test_stoch_short_input_returns_empty() {
        let data = vec![1.0_f64, 2.0];
        assert!(stoch(&data, &data, &data, 3).unwrap().is_empty());
    }

    #[test]
    fn test_stoch_length_mismatch() {
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![1.0_f64, 2.0];
        assert!(matches!(
            stoch(&a, &a, &b, 2),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
