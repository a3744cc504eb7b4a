//! Z-score of the Exponential Moving Average.
//!
//! Measures how far the current value sits from its EMA, in units of the
//! rolling sample standard deviation over the same window:
//!
//! ```text
//! z[i] = (P[i] - EMA(P)[i]) / stddev(P, period)[i]
//! ```
//!
//! The EMA leg is the index-0-seeded recurrence with span `period`; the
//! deviation leg carries the usual `period - 1` NaN warm-up, which the
//! quotient inherits. A constant window has zero deviation and the division
//! produces ±inf (or NaN when the numerator is also zero); that is the
//! mathematical answer and is passed through untouched.
//!
//! Inputs shorter than the window are not rejected here: the deviation leg
//! simply never fills, so the output is all NaN of the input's length.

use crate::error::Result;
use crate::indicators::ema::ema_alpha;
use crate::kernels::ewm::ewm_from_first;
use crate::kernels::rolling::rolling_stddev;
use crate::traits::SeriesElement;

/// Computes the z-score of a series against its EMA.
///
/// Returns a vector of the same length as the input; the first `period - 1`
/// positions are NaN (deviation warm-up).
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The EMA span and deviation window
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::zscore::zscore_ema;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0];
/// let z = zscore_ema(&data, 3).unwrap();
///
/// assert_eq!(z.len(), data.len());
/// assert!(z[0].is_nan());
/// assert!(z[1].is_nan());
/// assert!(!z[2].is_nan());
/// ```
#[must_use = "this returns a Result with the z-score values, which should be used"]
pub fn zscore_ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let alpha = ema_alpha::<T>(period)?;

    let mean = ewm_from_first(data, alpha);
    let stddev = rolling_stddev(data, period);

    let mut out = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        out.push((data[i] - mean[i]) / stddev[i]);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_nan_prefix, EPSILON};

    #[test]
    fn test_zscore_hand_computed() {
        let data = vec![1.0_f64, 2.0, 4.0];
        let z = zscore_ema(&data, 2).unwrap();

        // alpha = 2/3: ema = [1, 5/3, 29/9]
        // sample stddev over window 2: [NaN, 1/sqrt(2), 2/sqrt(2)]
        assert!(z[0].is_nan());
        let expected1 = (2.0 - 5.0 / 3.0) / (1.0 / 2.0_f64.sqrt());
        let expected2 = (4.0 - 29.0 / 9.0) / (2.0 / 2.0_f64.sqrt());
        assert!(approx_eq(z[1], expected1, EPSILON));
        assert!(approx_eq(z[2], expected2, EPSILON));
    }

    #[test]
    fn test_zscore_warmup_length() {
        let data: Vec<f64> = (0..30).map(|i| ((i as f64) * 0.5).sin()).collect();
        let z = zscore_ema(&data, 5).unwrap();
        assert_eq!(z.len(), data.len());
        assert_eq!(count_nan_prefix(&z), 4);
    }

    #[test]
    fn test_zscore_constant_window_divides_by_zero() {
        // numerator also zero on a flat series: 0/0
        let data = vec![3.0_f64; 10];
        let z = zscore_ema(&data, 4).unwrap();
        for &value in z.iter().skip(3) {
            assert!(value.is_nan());
        }

        // flat window after a jump: nonzero numerator over zero deviation
        let mut stepped = vec![1.0_f64; 4];
        stepped.extend_from_slice(&[10.0; 4]);
        let z = zscore_ema(&stepped, 3).unwrap();
        // window [10, 10, 10] at index 6, EMA still below 10
        assert!(z[6].is_infinite());
        assert!(z[6] > 0.0);
    }

    #[test]
    fn test_zscore_short_input_is_all_nan() {
        let data = vec![1.0_f64, 2.0];
        let z = zscore_ema(&data, 5).unwrap();
        assert_eq!(z.len(), 2);
        assert!(z.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_zscore_empty_input() {
        let data: Vec<f64> = vec![];
        assert!(zscore_ema(&data, 3).unwrap().is_empty());
    }

    #[test]
    fn test_zscore_zero_period() {
        let data = vec![1.0_f64, 2.0];
        assert!(matches!(
            zscore_ema(&data, 0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }

    #[test]
    fn test_zscore_sign_tracks_displacement() {
        // rising series sits above its lagging EMA: positive z
        let data: Vec<f64> = (0..20).map(|i| (i as f64) * 2.0).collect();
        let z = zscore_ema(&data, 5).unwrap();
        for &value in z.iter().skip(4) {
            assert!(value > 0.0);
        }
    }
}
