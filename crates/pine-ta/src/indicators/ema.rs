//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent values more heavily than older ones via the
//! recurrence
//!
//! ```text
//! α = 2 / (period + 1)
//! EMA[0] = P[0]
//! EMA[i] = α × P[i] + (1 - α) × EMA[i-1]
//! ```
//!
//! Because this is a true recurrence rather than a windowed computation, it
//! is defined from index 0 with no warm-up gap. The first value acts as the
//! seed, which makes the EMA sensitive to where the history starts: trimming
//! or editing leading bars changes every subsequent output, it never
//! converges back to the untrimmed series within finite history. Callers
//! that need settled values drop an initial stretch themselves.
//!
//! # Example
//!
//! ```
//! use pine_ta::indicators::ema::ema;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = ema(&data, 3).unwrap();
//!
//! // alpha = 0.5; defined from the first bar
//! assert!((result[0] - 1.0).abs() < 1e-10);
//! assert!((result[1] - 1.5).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::kernels::ewm::ewm_from_first;
use crate::traits::{validate_period, SeriesElement};

/// Computes the smoothing factor `α = 2 / (period + 1)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero, or
/// `Error::NumericConversion` if the period cannot be represented in `T`.
#[inline]
pub fn ema_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    validate_period(period)?;
    Ok(T::two() / T::from_usize(period + 1)?)
}

/// Computes the Exponential Moving Average (EMA) of a data series.
///
/// Returns a vector of the same length as the input, valid from index 0
/// (the first value seeds the recurrence). A NaN input poisons every
/// subsequent position, since a recurrence cannot recover a lost term.
///
/// Requiring `data.len() >= period` is not a numerical necessity for a
/// recurrence, but this function returns an empty vector for shorter inputs
/// anyway so that all smoothers in this library share one composition
/// contract.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The span controlling the smoothing factor
///
/// # Returns
///
/// The EMA values, or an empty vector when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::ema::ema;
///
/// let data = vec![10.0_f64, 11.0, 12.0, 13.0];
/// let result = ema(&data, 2).unwrap();
/// assert_eq!(result.len(), 4);
/// assert!(ema(&data, 9).unwrap().is_empty());
/// ```
#[inline]
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let alpha = ema_alpha::<T>(period)?;

    if data.len() < period {
        return Ok(Vec::new());
    }

    Ok(ewm_from_first(data, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_ema_basic() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = ema(&data, 3).unwrap();

        // alpha = 2/(3+1) = 0.5
        assert_eq!(result.len(), 5);
        assert!(approx_eq(result[0], 1.0, EPSILON));
        assert!(approx_eq(result[1], 1.5, EPSILON));
        assert!(approx_eq(result[2], 2.25, EPSILON));
        assert!(approx_eq(result[3], 3.125, EPSILON));
        assert!(approx_eq(result[4], 4.0625, EPSILON));
    }

    #[test]
    fn test_ema_no_warmup_gap() {
        let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let result = ema(&data, 5).unwrap();
        assert!(result.iter().all(|x| !x.is_nan()));
    }

    #[test]
    fn test_ema_period_one_is_identity() {
        // alpha = 1: output tracks the input exactly
        let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0];
        let result = ema(&data, 1).unwrap();
        for (out, src) in result.iter().zip(&data) {
            assert!(approx_eq(*out, *src, EPSILON));
        }
    }

    #[test]
    fn test_ema_constant_input() {
        let data = vec![5.0_f64; 10];
        let result = ema(&data, 4).unwrap();
        for value in result {
            assert!(approx_eq(value, 5.0, EPSILON));
        }
    }

    #[test]
    fn test_ema_seed_sensitivity() {
        // Altering the first bar changes every output position.
        let data: Vec<f64> = (0..60).map(|i| 100.0 + ((i as f64) * 0.2).sin()).collect();
        let mut altered = data.clone();
        altered[0] += 1.0;

        let base = ema(&data, 10).unwrap();
        let shifted = ema(&altered, 10).unwrap();

        for i in 0..base.len() {
            assert!(
                (base[i] - shifted[i]).abs() > 0.0,
                "seed influence vanished at index {i}"
            );
        }
    }

    #[test]
    fn test_ema_truncation_sensitivity() {
        // Dropping leading history re-seeds the recurrence; outputs at the
        // same bars differ.
        let data: Vec<f64> = (0..50).map(|i| ((i as f64) * 0.4).cos() * 10.0).collect();
        let full = ema(&data, 8).unwrap();
        let trimmed = ema(&data[5..], 8).unwrap();

        let mut any_diff = false;
        for i in 0..trimmed.len() {
            if (full[i + 5] - trimmed[i]).abs() > 1e-12 {
                any_diff = true;
            }
        }
        assert!(any_diff);
    }

    #[test]
    fn test_ema_short_input_returns_empty() {
        let data = vec![1.0_f64, 2.0];
        assert!(ema(&data, 3).unwrap().is_empty());
    }

    #[test]
    fn test_ema_zero_period() {
        let data = vec![1.0_f64, 2.0, 3.0];
        assert!(matches!(
            ema(&data, 0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }

    #[test]
    fn test_ema_nan_poisons_tail() {
        let data = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0];
        let result = ema(&data, 2).unwrap();
        assert!(!result[1].is_nan());
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
    }
}
