//! Windowed rank and correlation statistics.

use num_traits::NumCast;

use crate::error::Result;
use crate::traits::{validate_period, validate_same_length, SeriesElement};

/// Computes the rolling percentile rank of each value within its trailing
/// window, on a 0-100 scale.
///
/// The rank of the newest value uses average tie ranking: with `e` window
/// values equal to it and `b` strictly below it, the rank is
/// `b + (e + 1) / 2`, divided by the window size and scaled by 100. A NaN in
/// the window marks that position NaN.
///
/// # Returns
///
/// The rank values (NaN for the first `period - 1` positions), or an empty
/// vector when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::statistics::percent_rank;
///
/// let data = vec![1.0_f64, 3.0, 2.0, 5.0];
/// let ranks = percent_rank(&data, 3).unwrap();
///
/// // 2 is the middle of [1, 3, 2]: rank 2 of 3
/// assert!((ranks[2] - 100.0 * 2.0 / 3.0).abs() < 1e-10);
/// // 5 is the top of [3, 2, 5]
/// assert!((ranks[3] - 100.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the rank values, which should be used"]
pub fn percent_rank<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;

    if data.len() < period {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let hundred = T::hundred();
    let two = T::two();

    let mut out = vec![T::nan(); data.len()];
    for i in (period - 1)..data.len() {
        let window = &data[i + 1 - period..=i];
        let newest = data[i];
        if window.iter().any(|x| x.is_nan()) {
            continue;
        }

        let mut below = 0usize;
        let mut equal = 0usize;
        for &value in window {
            if value < newest {
                below += 1;
            } else if value == newest {
                equal += 1;
            }
        }

        let rank = T::from_usize(below)? + (T::from_usize(equal)? + T::one()) / two;
        out[i] = hundred * rank / period_t;
    }

    Ok(out)
}

/// Computes the rolling Pearson correlation between two aligned series.
///
/// Runs on rolling co-sums, O(n). A NaN in either series marks every window
/// containing it NaN. Windows where either series is constant have zero
/// variance and the quotient degenerates to NaN, passed through as-is.
///
/// # Returns
///
/// The correlation values (NaN for the first `period - 1` positions), or an
/// empty vector when the series are shorter than the window.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length, or
/// `Error::InvalidPeriod` if the period is zero.
#[must_use = "this returns a Result with the correlation values, which should be used"]
pub fn correlation<T: SeriesElement>(
    source1: &[T],
    source2: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_same_length(source1, source2)?;

    let n = source1.len();
    if n < period {
        return Ok(Vec::new());
    }

    // Safe unwrap: usize is always representable in Float types
    let period_t: T = <T as NumCast>::from(period).unwrap();

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_x2 = T::zero();
    let mut sum_y2 = T::zero();
    let mut nan_count = 0usize;

    let mut out = vec![T::nan(); n];
    for i in 0..n {
        let x = source1[i];
        let y = source2[i];
        if x.is_nan() || y.is_nan() {
            nan_count += 1;
        } else {
            sum_x = sum_x + x;
            sum_y = sum_y + y;
            sum_xy = sum_xy + x * y;
            sum_x2 = sum_x2 + x * x;
            sum_y2 = sum_y2 + y * y;
        }

        if i >= period {
            let old_x = source1[i - period];
            let old_y = source2[i - period];
            if old_x.is_nan() || old_y.is_nan() {
                nan_count -= 1;
            } else {
                sum_x = sum_x - old_x;
                sum_y = sum_y - old_y;
                sum_xy = sum_xy - old_x * old_y;
                sum_x2 = sum_x2 - old_x * old_x;
                sum_y2 = sum_y2 - old_y * old_y;
            }
        }

        if i + 1 >= period && nan_count == 0 {
            let cov = period_t * sum_xy - sum_x * sum_y;
            let var_x = period_t * sum_x2 - sum_x * sum_x;
            let var_y = period_t * sum_y2 - sum_y * sum_y;
            out[i] = cov / (var_x * var_y).sqrt();
        }
    }

    Ok(out)
}
