//! Relative Strength Index (RSI) indicator.
//!
//! The RSI measures the balance of upward versus downward movement on a
//! 0-100 scale:
//!
//! 1. Split each bar-over-bar change into a gain leg `max(Δ, 0)` and a loss
//!    leg `max(-Δ, 0)`. The first bar has no predecessor and contributes
//!    zero to both legs, as does any change involving missing data.
//! 2. Smooth each leg independently with the selected moving average.
//! 3. `RS = smoothed gain / smoothed loss`, `RSI = 100 - 100 / (1 + RS)`.
//!
//! The default smoother is the RMA, which is the classic Wilder
//! formulation; the other methods produce faster or slower variants of the
//! same oscillator.
//!
//! # Saturation
//!
//! When the smoothed loss leg is exactly zero and the gain leg is positive,
//! `RS` is `+inf` and the final expression collapses to exactly 100. That
//! saturation comes straight out of IEEE-754 division; nothing in the
//! pipeline clamps or special-cases it. A window with zero movement on both
//! legs gives `0/0 = NaN`, which likewise propagates.
//!
//! # Example
//!
//! ```
//! use pine_ta::indicators::rsi::rsi;
//!
//! let data = vec![44.0_f64, 44.3, 44.1, 44.5, 44.2, 44.6, 44.8, 44.5, 45.0, 45.2];
//! let result = rsi(&data, 5).unwrap();
//!
//! assert_eq!(result.len(), data.len());
//! for &value in &result {
//!     assert!(value.is_nan() || (0.0..=100.0).contains(&value));
//! }
//! ```

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::indicators::ema::ema;
use crate::indicators::rma::rma;
use crate::indicators::sema::sema;
use crate::indicators::sma::sma;
use crate::traits::{validate_period, SeriesElement};

/// Selects the moving average used to smooth the RSI gain and loss legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaMethod {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
    /// Depth-2 EMA cascade.
    Dema,
    /// Depth-3 EMA cascade.
    Tema,
    /// Relative (Wilder) moving average, the classic choice.
    #[default]
    Rma,
}

impl FromStr for MaMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sma" => Ok(Self::Sma),
            "ema" => Ok(Self::Ema),
            "dema" => Ok(Self::Dema),
            "tema" => Ok(Self::Tema),
            "rma" => Ok(Self::Rma),
            other => Err(Error::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

impl MaMethod {
    /// Smooths a series with this method.
    fn smooth<T: SeriesElement>(self, data: &[T], period: usize) -> Result<Vec<T>> {
        match self {
            Self::Sma => sma(data, period),
            Self::Ema => ema(data, period),
            Self::Dema => sema(data, period, 2),
            Self::Tema => sema(data, period, 3),
            Self::Rma => rma(data, period),
        }
    }
}

/// Computes the Relative Strength Index with Wilder's RMA smoothing.
///
/// # Arguments
///
/// * `data` - The input price series
/// * `period` - The smoothing period (commonly 14)
///
/// # Returns
///
/// The RSI values (same length as the input), or an empty vector when
/// `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rsi_with_method(data, period, MaMethod::Rma)
}

/// Computes the Relative Strength Index with an explicit leg smoother.
///
/// With `MaMethod::Sma` the output carries the SMA's `period - 1` NaN
/// warm-up; the recurrence-based methods are defined from index 0.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::rsi::{rsi_with_method, MaMethod};
///
/// let data: Vec<f64> = (0..20).map(|i| 100.0 + ((i as f64) * 0.8).sin()).collect();
/// let fast = rsi_with_method(&data, 5, MaMethod::Ema).unwrap();
/// assert_eq!(fast.len(), data.len());
/// ```
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi_with_method<T: SeriesElement>(
    data: &[T],
    period: usize,
    method: MaMethod,
) -> Result<Vec<T>> {
    validate_period(period)?;

    if data.len() < period {
        return Ok(Vec::new());
    }

    let n = data.len();
    let mut gains = Vec::with_capacity(n);
    let mut losses = Vec::with_capacity(n);
    gains.push(T::zero());
    losses.push(T::zero());

    for i in 1..n {
        let diff = data[i] - data[i - 1];
        if diff.is_nan() {
            gains.push(T::zero());
            losses.push(T::zero());
        } else if diff > T::zero() {
            gains.push(diff);
            losses.push(T::zero());
        } else {
            gains.push(T::zero());
            losses.push(-diff);
        }
    }

    let avg_gain = method.smooth(&gains, period)?;
    let avg_loss = method.smooth(&losses, period)?;

    let hundred = T::hundred();
    let one = T::one();

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let rs = avg_gain[i] / avg_loss[i];
        out.push(hundred - hundred / (one + rs));
    }

    Ok(out)
}
