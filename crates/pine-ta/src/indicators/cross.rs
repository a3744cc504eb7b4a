//! Crossover and crossunder detection between two aligned series.
//!
//! A crossover at bar `i` means the first series closed below the second on
//! the previous bar and above it on this one; a crossunder is the mirror
//! image. Index 0 has no previous bar and is always `false`, and any
//! comparison touching NaN is `false` (NaN ordered comparisons are false by
//! definition, which is exactly the behavior wanted for missing bars).

use crate::error::Result;
use crate::traits::{validate_same_length, SeriesElement};

/// Detects bars where `series1` crosses above `series2`.
///
/// `out[i]` is true iff `series1[i-1] < series2[i-1]` and
/// `series1[i] > series2[i]`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::cross::crossover;
///
/// let fast = vec![1.0_f64, 3.0, 2.0, 4.0];
/// let slow = vec![2.0_f64, 2.0, 3.0, 3.0];
/// let signals = crossover(&fast, &slow).unwrap();
/// assert_eq!(signals, vec![false, true, false, true]);
/// ```
#[must_use = "this returns a Result with the crossover signals, which should be used"]
pub fn crossover<T: SeriesElement>(series1: &[T], series2: &[T]) -> Result<Vec<bool>> {
    validate_same_length(series1, series2)?;

    let mut out = Vec::with_capacity(series1.len());
    if !series1.is_empty() {
        out.push(false);
    }
    for i in 1..series1.len() {
        out.push(series1[i - 1] < series2[i - 1] && series1[i] > series2[i]);
    }

    Ok(out)
}

/// Detects bars where `series1` crosses below `series2`.
///
/// `out[i]` is true iff `series1[i-1] > series2[i-1]` and
/// `series1[i] < series2[i]`. Equivalent to `crossover(series2, series1)`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length.
#[must_use = "this returns a Result with the crossunder signals, which should be used"]
pub fn crossunder<T: SeriesElement>(series1: &[T], series2: &[T]) -> Result<Vec<bool>> {
    crossover(series2, series1)
}
