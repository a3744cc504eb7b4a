//! Weighted Moving Average (WMA) indicator.
//!
//! The WMA weights the trailing window linearly: the oldest value gets
//! weight 1, the newest gets weight `period`, normalized by the weight sum
//! `period × (period + 1) / 2`.
//!
//! Each output is a plain dot product over its window. That keeps the NaN
//! contract trivial: any NaN inside a window surfaces as NaN at that output
//! position and nowhere else, which is what the Hull composition in
//! [`crate::indicators::hma`] relies on when it feeds partially defined
//! intermediate series back through this function.
//!
//! # Example
//!
//! ```
//! use pine_ta::indicators::wma::wma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = wma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! // (1×1 + 2×2 + 3×3) / 6
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Returns the number of NaN values at the start of WMA output.
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Computes the Weighted Moving Average (WMA) of a data series.
///
/// Returns a vector of the same length as the input; the first `period - 1`
/// positions are NaN.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The window length
///
/// # Returns
///
/// The WMA values, or an empty vector when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Performance
///
/// O(n × period): each output recomputes its window dot product.
#[must_use = "this returns a Result with the WMA values, which should be used"]
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;

    if data.len() < period {
        return Ok(Vec::new());
    }

    // weight sum = period (period + 1) / 2
    let weight_sum = T::from_usize(period * (period + 1) / 2)?;

    let mut out = vec![T::nan(); data.len()];
    for i in (period - 1)..data.len() {
        let window = &data[i + 1 - period..=i];
        let mut acc = T::zero();
        for (j, &value) in window.iter().enumerate() {
            let weight = T::from_usize(j + 1)?;
            acc = acc + weight * value;
        }
        out[i] = acc / weight_sum;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_nan_prefix, EPSILON};

    #[test]
    fn test_wma_basic() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = wma(&data, 3).unwrap();

        assert_eq!(count_nan_prefix(&result), 2);
        assert!(approx_eq(result[2], 14.0 / 6.0, EPSILON));
        assert!(approx_eq(result[3], 20.0 / 6.0, EPSILON)); // 2 + 6 + 12
        assert!(approx_eq(result[4], 26.0 / 6.0, EPSILON)); // 3 + 8 + 15
    }

    #[test]
    fn test_wma_period_one_is_identity() {
        let data = vec![7.0_f64, 2.0, 9.0];
        let result = wma(&data, 1).unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn test_wma_constant_input() {
        let data = vec![6.0_f64; 10];
        let result = wma(&data, 4).unwrap();
        for &value in result.iter().skip(3) {
            assert!(approx_eq(value, 6.0, EPSILON));
        }
    }

    #[test]
    fn test_wma_weights_favor_recent() {
        // Rising data: WMA sits above the SMA because late values weigh more.
        let data = vec![1.0_f64, 2.0, 3.0, 4.0];
        let result = wma(&data, 4).unwrap();
        let mean = 2.5;
        assert!(result[3] > mean);
    }

    #[test]
    fn test_wma_nan_in_window() {
        let data = vec![1.0_f64, f64::NAN, 3.0, 4.0, 5.0];
        let result = wma(&data, 2).unwrap();
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert!(approx_eq(result[3], (3.0 + 2.0 * 4.0) / 3.0, EPSILON));
    }

    #[test]
    fn test_wma_short_input_returns_empty() {
        let data = vec![1.0_f64, 2.0];
        assert!(wma(&data, 3).unwrap().is_empty());
    }

    #[test]
    fn test_wma_zero_period() {
        let data = vec![1.0_f64];
        assert!(matches!(
            wma(&data, 0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }
}
