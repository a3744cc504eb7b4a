//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the arithmetic mean of the trailing `period` values, the
//! baseline smoother every other moving average is measured against.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (P[i-period+1] + ... + P[i]) / period    for i >= period - 1
//! SMA[0..period-1] = NaN (window not yet filled)
//! ```
//!
//! # Example
//!
//! ```
//! use pine_ta::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10);
//!
//! // Shorter history than the window is not an error: the result is empty.
//! assert!(sma(&data, 9).unwrap().is_empty());
//! ```

use crate::error::Result;
use crate::kernels::rolling::rolling_mean;
use crate::traits::{validate_period, SeriesElement};

/// Returns the number of NaN values at the start of SMA output.
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Computes the Simple Moving Average (SMA) of a data series.
///
/// Returns a vector of the same length as the input, where the first
/// `period - 1` values are NaN and subsequent values contain the rolling
/// mean. A NaN anywhere in a window marks that output position NaN.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of periods to average over
///
/// # Returns
///
/// The SMA values, or an empty vector when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Performance
///
/// O(n) rolling sum; O(n) output allocation.
#[inline]
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;

    if data.len() < period {
        return Ok(Vec::new());
    }

    Ok(rolling_mean(data, period))
}
