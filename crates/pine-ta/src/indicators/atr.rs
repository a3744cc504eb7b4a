//! True Range and Average True Range (ATR).
//!
//! The true range of a bar is the largest of the bar's own range and the
//! two gaps against the previous close:
//!
//! ```text
//! TR[i] = max(high[i] - low[i],
//!             |high[i] - close[i-1]|,
//!             |low[i]  - close[i-1]|)
//! TR[0] = high[0] - low[0]
//! ```
//!
//! The ATR here is the rolling mean of the true range. (Some platforms
//! smooth TR with Wilder's RMA instead; callers wanting that variant can
//! feed [`true_range`] output through [`crate::indicators::rma::rma`].)

use crate::error::Result;
use crate::indicators::sma::sma;
use crate::traits::{validate_same_length, SeriesElement};

/// Computes the per-bar true range from high/low/close series.
///
/// Candidates involving a missing previous close fall back to the bar's own
/// range; a bar whose own high or low is missing is NaN.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length.
#[must_use = "this returns a Result with the true range values, which should be used"]
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_same_length(high, low)?;
    validate_same_length(high, close)?;

    let mut out = Vec::with_capacity(high.len());
    for i in 0..high.len() {
        let range = high[i] - low[i];
        if i == 0 {
            out.push(range);
            continue;
        }
        let prev_close = close[i - 1];
        // Float::max ignores NaN operands, so a missing previous close
        // degrades to the plain high-low range.
        out.push(range.max((high[i] - prev_close).abs()).max((low[i] - prev_close).abs()));
    }

    Ok(out)
}

/// Computes the Average True Range: the rolling mean of [`true_range`].
///
/// # Arguments
///
/// * `high`, `low`, `close` - Aligned OHLC component series
/// * `period` - The averaging window (commonly 14)
///
/// # Returns
///
/// The ATR values (NaN for the first `period - 1` positions), or an empty
/// vector when the series are shorter than the window.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length, or
/// `Error::InvalidPeriod` if the period is zero.
#[must_use = "this returns a Result with the ATR values, which should be used"]
pub fn atr<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    let tr = true_range(high, low, close)?;
    sma(&tr, period)
}
