//! Bollinger Bands indicator.
//!
//! Three bands around the price: the basis (a simple moving average) plus
//! and minus a multiple of the rolling sample standard deviation.
//!
//! ```text
//! basis = SMA(P, period)
//! upper = basis + mult × stddev(P, period)
//! lower = basis - mult × stddev(P, period)
//! ```
//!
//! The deviation uses the sample (`n-1`) divisor, consistent with the
//! z-score module.

use crate::error::Result;
use crate::kernels::rolling::{rolling_mean, rolling_stddev};
use crate::traits::{validate_period, SeriesElement};

/// Output structure containing all three Bollinger bands.
///
/// Each vector has the same length as the input; the first `period - 1`
/// values are NaN.
#[derive(Debug, Clone)]
pub struct BollingerOutput<T> {
    /// The basis band (simple moving average).
    pub basis: Vec<T>,
    /// The upper band (basis + mult × stddev).
    pub upper: Vec<T>,
    /// The lower band (basis - mult × stddev).
    pub lower: Vec<T>,
}

impl<T> BollingerOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }
}

/// Computes Bollinger Bands for a data series.
///
/// # Arguments
///
/// * `data` - The input data series (typically closes)
/// * `period` - The window for the basis and deviation (commonly 20)
/// * `mult` - The deviation multiplier (commonly 2.0)
///
/// # Returns
///
/// The three bands, or empty vectors when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::bollinger::bollinger;
///
/// let data = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0];
/// let bands = bollinger(&data, 5, 2.0).unwrap();
///
/// assert!(bands.basis[3].is_nan());
/// assert!(bands.upper[4] > bands.basis[4]);
/// assert!(bands.lower[4] < bands.basis[4]);
/// ```
#[must_use = "this returns a Result with the band values, which should be used"]
pub fn bollinger<T: SeriesElement>(
    data: &[T],
    period: usize,
    mult: T,
) -> Result<BollingerOutput<T>> {
    validate_period(period)?;

    if data.len() < period {
        return Ok(BollingerOutput {
            basis: Vec::new(),
            upper: Vec::new(),
            lower: Vec::new(),
        });
    }

    let basis = rolling_mean(data, period);
    let stddev = rolling_stddev(data, period);

    let mut upper = Vec::with_capacity(data.len());
    let mut lower = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        let dev = mult * stddev[i];
        upper.push(basis[i] + dev);
        lower.push(basis[i] - dev);
    }

    Ok(BollingerOutput { basis, upper, lower })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_nan_prefix, EPSILON};

    #[test]
    fn test_bollinger_hand_computed() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0];
        let bands = bollinger(&data, 3, 2.0).unwrap();

        // window [1,2,3]: mean 2, sample stddev 1
        assert!(approx_eq(bands.basis[2], 2.0, EPSILON));
        assert!(approx_eq(bands.upper[2], 4.0, EPSILON));
        assert!(approx_eq(bands.lower[2], 0.0, EPSILON));
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let data: Vec<f64> = (0..50).map(|i| 100.0 + ((i as f64) * 0.7).sin() * 3.0).collect();
        let bands = bollinger(&data, 10, 2.0).unwrap();
        for i in 9..data.len() {
            assert!(bands.upper[i] >= bands.basis[i]);
            assert!(bands.basis[i] >= bands.lower[i]);
        }
    }

    #[test]
    fn test_bollinger_constant_input_collapses() {
        let data = vec![5.0_f64; 10];
        let bands = bollinger(&data, 4, 2.0).unwrap();
        for i in 3..10 {
            assert!(approx_eq(bands.upper[i], 5.0, EPSILON));
            assert!(approx_eq(bands.lower[i], 5.0, EPSILON));
        }
    }

    #[test]
    fn test_bollinger_warmup() {
        let data: Vec<f64> = (1..=12).map(|x| x as f64).collect();
        let bands = bollinger(&data, 5, 2.0).unwrap();
        assert_eq!(count_nan_prefix(&bands.basis), 4);
        assert_eq!(count_nan_prefix(&bands.upper), 4);
        assert_eq!(count_nan_prefix(&bands.lower), 4);
    }

    #[test]
    fn test_bollinger_short_input_returns_empty() {
        let data = vec![1.0_f64, 2.0];
        let bands = bollinger(&data, 3, 2.0).unwrap();
        assert!(bands.is_empty());
    }

    #[test]
    fn test_bollinger_zero_period() {
        let data = vec![1.0_f64];
        assert!(matches!(
            bollinger(&data, 0, 2.0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }
}
