//! Relative Moving Average (RMA, Wilder's smoothing) indicator.
//!
//! The RMA is the smoother behind Wilder-style oscillators such as RSI. It
//! uses smoothing factor `α = 1 / period` and seeds from the plain mean of
//! the first window.
//!
//! Two methods are provided and selected explicitly, because they disagree
//! on early bars:
//!
//! - [`RmaMethod::Recursive`] (the default used by [`rma`]): the primitive
//!   recurrence. The mean of the first `period` values lands at index 0 and
//!   the recurrence runs from index 1, so values inside the seed window are
//!   smoothed a second time.
//!
//!   ```text
//!   RMA[0] = mean(P[0..period])
//!   RMA[i] = (1/period) × P[i] + (1 - 1/period) × RMA[i-1]
//!   ```
//!
//! - [`RmaMethod::Weighted`]: the seed mean is placed at index `period - 1`
//!   (positions before it are NaN) and the remainder is folded in with an
//!   adjusted exponential weighting that divides by the accumulated weight
//!   mass.
//!
//! The two sequences converge as the weight mass saturates, but the first
//! bars differ; callers pick one and stick with it.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::kernels::ewm::{ewm_weighted, ewm_with_seed};
use crate::traits::{validate_period, SeriesElement};

/// Selects how the RMA folds the data after the seed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RmaMethod {
    /// Primitive recurrence seeded at index 0.
    #[default]
    Recursive,
    /// Weight-mass-adjusted exponential weighting over the seed-prefixed
    /// remainder.
    Weighted,
}

impl FromStr for RmaMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "recursive" => Ok(Self::Recursive),
            "weighted" => Ok(Self::Weighted),
            other => Err(Error::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

/// Computes the Relative Moving Average with the default recursive method.
///
/// Output is the same length as the input and valid from index 0. A NaN
/// anywhere in the seed window (or later input) poisons the recurrence from
/// that point on.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The smoothing period (`α = 1/period`)
///
/// # Returns
///
/// The RMA values, or an empty vector when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::rma::rma;
///
/// let data = vec![2.0_f64, 4.0, 6.0, 8.0];
/// let result = rma(&data, 2).unwrap();
///
/// // seed = (2+4)/2 = 3; then 0.5*4 + 0.5*3 = 3.5, ...
/// assert!((result[0] - 3.0).abs() < 1e-10);
/// assert!((result[1] - 3.5).abs() < 1e-10);
/// ```
#[inline]
#[must_use = "this returns a Result with the RMA values, which should be used"]
pub fn rma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rma_with_method(data, period, RmaMethod::Recursive)
}

/// Computes the Relative Moving Average with the weighted method.
///
/// The first `period - 1` positions are NaN; index `period - 1` holds the
/// seed mean; later positions are the adjusted exponentially weighted mean
/// of the seed and the remaining values.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
#[must_use = "this returns a Result with the RMA values, which should be used"]
pub fn rma_weighted<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rma_with_method(data, period, RmaMethod::Weighted)
}

/// Computes the Relative Moving Average with an explicit method selection.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero, or
/// `Error::NumericConversion` if the period cannot be represented in `T`.
#[must_use = "this returns a Result with the RMA values, which should be used"]
pub fn rma_with_method<T: SeriesElement>(
    data: &[T],
    period: usize,
    method: RmaMethod,
) -> Result<Vec<T>> {
    validate_period(period)?;

    if data.len() < period {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let alpha = T::one() / period_t;

    let mut seed = T::zero();
    for &value in &data[..period] {
        seed = seed + value;
    }
    seed = seed / period_t;

    match method {
        RmaMethod::Recursive => Ok(ewm_with_seed(data, alpha, seed)),
        RmaMethod::Weighted => {
            // Seed-prefixed remainder: NaN until the window fills, the seed
            // mean where it does, then the raw tail.
            let mut prefixed = vec![T::nan(); period - 1];
            prefixed.push(seed);
            prefixed.extend_from_slice(&data[period..]);
            Ok(ewm_weighted(&prefixed, alpha))
        }
    }
}
