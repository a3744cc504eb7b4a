//! Hull Moving Average (HMA) indicator.
//!
//! The Hull construction stacks three WMA passes to get a smooth curve with
//! very little lag:
//!
//! ```text
//! raw = 2 × WMA(P, period/2) - WMA(P, period)
//! HMA = WMA(raw, floor(sqrt(period)))
//! ```
//!
//! The half and square-root windows are integer-truncated, so an odd
//! `period` uses the truncated half-window (period 7 halves to 3). That is
//! the accepted form of this indicator, not a rounding accident. The warm-up
//! regions of the inner passes carry through: the final output is NaN until
//! `period - 1 + floor(sqrt(period)) - 1` bars have passed.
//!
//! On a perfectly linear series the construction cancels its own lag
//! entirely, which makes hand-checked traces easy (see the integration
//! tests).

use crate::error::{Error, Result};
use crate::indicators::wma::wma;
use crate::traits::SeriesElement;

/// Computes the Hull Moving Average (HMA) of a data series.
///
/// Returns a vector of the same length as the input; positions before the
/// combined warm-up of the three WMA passes are NaN.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The full window length (at least 2)
///
/// # Returns
///
/// The HMA values, or an empty vector when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is less than 2 (the
/// truncated half-window must be at least one bar).
///
/// # Example
///
/// ```
/// use pine_ta::indicators::hma::hma;
///
/// let data: Vec<f64> = (1..=8).map(|x| x as f64).collect();
/// let result = hma(&data, 4).unwrap();
///
/// // Linear input: the Hull construction is lag-free once warmed up.
/// assert!((result[4] - 5.0).abs() < 1e-9);
/// assert!((result[7] - 8.0).abs() < 1e-9);
/// ```
#[must_use = "this returns a Result with the HMA values, which should be used"]
pub fn hma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    if period < 2 {
        return Err(Error::InvalidPeriod {
            period,
            reason: "hull period must be at least 2",
        });
    }

    if data.len() < period {
        return Ok(Vec::new());
    }

    let half_period = period / 2;
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let sqrt_period = (period as f64).sqrt() as usize;

    let wma_half = wma(data, half_period)?;
    let wma_full = wma(data, period)?;

    let two = T::two();
    let mut raw = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        raw.push(two * wma_half[i] - wma_full[i]);
    }

    wma(&raw, sqrt_period)
}
